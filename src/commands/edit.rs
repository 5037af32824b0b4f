//! Update an existing event. Only the given fields change; the rest are
//! carried over from the persisted record.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use calgrid_core::validate::validate_event_fields;
use calgrid_core::{EventDraft, EventRecord};

use crate::client::ApiClient;
use crate::commands::new::resolve_category;

pub struct EditArgs {
    pub title: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub clear_end: bool,
    pub description: Option<String>,
    pub category: Option<String>,
    pub clear_category: bool,
}

pub async fn run(client: &ApiClient, id: i64, args: EditArgs) -> Result<()> {
    // The backend only exposes the collection, not single records
    let events = client.fetch_all_events().await?;
    let existing = events
        .into_iter()
        .find(|e| e.id == id)
        .with_context(|| format!("No event with id {id}"))?;

    let draft = merge(&existing, &args, resolve_requested_category(client, &args).await?)?;
    validate_event_fields(&draft)?;

    let updated = client.update_event(id, &draft).await?;
    println!("{}", format!("Updated event {}: {}", updated.id, updated.title).green());
    Ok(())
}

async fn resolve_requested_category(
    client: &ApiClient,
    args: &EditArgs,
) -> Result<Option<i64>> {
    match &args.category {
        Some(name) => {
            let categories = client.list_categories().await?;
            resolve_category(Some(name.clone()), &categories, false)
        }
        None => Ok(None),
    }
}

fn merge(existing: &EventRecord, args: &EditArgs, new_category: Option<i64>) -> Result<EventDraft> {
    if args.clear_end && args.end.is_some() {
        anyhow::bail!("--end and --clear-end are mutually exclusive");
    }
    if args.clear_category && args.category.is_some() {
        anyhow::bail!("--category and --clear-category are mutually exclusive");
    }

    let end_date_time = if args.clear_end {
        None
    } else {
        args.end.clone().or_else(|| existing.end_date_time.clone())
    };

    let category_id = if args.clear_category {
        None
    } else {
        new_category.or(existing.category_id)
    };

    Ok(EventDraft {
        title: args.title.clone().unwrap_or_else(|| existing.title.clone()),
        description: args.description.clone().or_else(|| existing.description.clone()),
        start_date_time: args
            .start
            .clone()
            .unwrap_or_else(|| existing.start_date_time.clone()),
        end_date_time,
        category_id,
    })
}
