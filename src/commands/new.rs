//! Create a new event, prompting for anything not given as an argument.

use anyhow::Result;
use chrono::Local;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

use calgrid_core::validate::validate_new_event;
use calgrid_core::{Category, EventDraft};

use crate::client::ApiClient;

pub async fn run(
    client: &ApiClient,
    title: Option<String>,
    start: Option<String>,
    end: Option<String>,
    description: Option<String>,
    category: Option<String>,
) -> Result<()> {
    let interactive = title.is_none() || start.is_none();

    let title = match title {
        Some(t) => t,
        None => Input::<String>::new().with_prompt("  Title").interact_text()?,
    };

    let start = match start {
        Some(s) => s,
        None => Input::<String>::new()
            .with_prompt("  Start (YYYY-MM-DDTHH:MM)")
            .interact_text()?,
    };

    let end = match end {
        Some(e) => Some(e),
        None if interactive => {
            let input: String = Input::new()
                .with_prompt("  End (YYYY-MM-DDTHH:MM, skip)")
                .default(String::new())
                .show_default(false)
                .interact_text()?;
            if input.is_empty() { None } else { Some(input) }
        }
        None => None,
    };

    let description = match description {
        Some(d) if d.is_empty() => None,
        Some(d) => Some(d),
        None if interactive => {
            let input: String = Input::new()
                .with_prompt("  Description (skip)")
                .default(String::new())
                .show_default(false)
                .interact_text()?;
            if input.is_empty() { None } else { Some(input) }
        }
        None => None,
    };

    let categories = client.list_categories().await?;
    let category_id = resolve_category(category, &categories, interactive)?;

    let draft = EventDraft {
        title,
        description,
        start_date_time: start,
        end_date_time: end,
        category_id,
    };

    validate_new_event(&draft, Local::now().date_naive())?;

    let created = client.create_event(&draft).await?;
    println!("{}", format!("Created event {}: {}", created.id, created.title).green());
    Ok(())
}

/// Resolve a category by name, or offer a pick list when interactive.
pub fn resolve_category(
    requested: Option<String>,
    categories: &[Category],
    interactive: bool,
) -> Result<Option<i64>> {
    if let Some(name) = requested {
        let found = categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(&name))
            .ok_or_else(|| {
                let available: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
                anyhow::anyhow!(
                    "Category '{}' not found. Available: {}",
                    name,
                    if available.is_empty() { "(none)".to_string() } else { available.join(", ") }
                )
            })?;
        return Ok(Some(found.id));
    }

    if !interactive || categories.is_empty() {
        return Ok(None);
    }

    let mut items: Vec<&str> = vec!["(none)"];
    items.extend(categories.iter().map(|c| c.name.as_str()));
    let selection = Select::new()
        .with_prompt("  Category")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(if selection == 0 {
        None
    } else {
        Some(categories[selection - 1].id)
    })
}
