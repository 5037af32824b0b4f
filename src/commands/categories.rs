//! Category management: list, new, edit, delete.

use anyhow::{Context, Result};
use clap::Subcommand;
use owo_colors::OwoColorize;

use calgrid_core::color::{DEFAULT_EVENT_COLOR, parse_hex};
use calgrid_core::validate::validate_category;

use crate::client::ApiClient;

#[derive(Subcommand)]
pub enum CategoryCommand {
    /// List your categories
    List,
    /// Create a category
    New {
        name: String,

        /// Color as #RRGGBB (defaults to the standard event color)
        #[arg(short, long)]
        color: Option<String>,
    },
    /// Rename or recolor a category
    Edit {
        id: i64,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        color: Option<String>,
    },
    /// Delete a category (its events keep existing, uncategorized)
    Delete { id: i64 },
}

pub async fn run(client: &ApiClient, command: CategoryCommand) -> Result<()> {
    match command {
        CategoryCommand::List => list(client).await,
        CategoryCommand::New { name, color } => new(client, name, color).await,
        CategoryCommand::Edit { id, name, color } => edit(client, id, name, color).await,
        CategoryCommand::Delete { id } => delete(client, id).await,
    }
}

async fn list(client: &ApiClient) -> Result<()> {
    let categories = client.list_categories().await?;

    if categories.is_empty() {
        println!("{}", "No categories yet. Create one with: calgrid categories new".dimmed());
        return Ok(());
    }

    for category in categories {
        let color = category.color.as_deref().unwrap_or(DEFAULT_EVENT_COLOR);
        println!("  {} {:>4}  {}", swatch(color), category.id, category.name);
    }
    Ok(())
}

async fn new(client: &ApiClient, name: String, color: Option<String>) -> Result<()> {
    validate_category(&name, color.as_deref())?;

    let created = client.create_category(&name, color.as_deref()).await?;
    println!("{}", format!("Created category {}: {}", created.id, created.name).green());
    Ok(())
}

async fn edit(
    client: &ApiClient,
    id: i64,
    name: Option<String>,
    color: Option<String>,
) -> Result<()> {
    let categories = client.list_categories().await?;
    let existing = categories
        .into_iter()
        .find(|c| c.id == id)
        .with_context(|| format!("No category with id {id}"))?;

    let name = name.unwrap_or(existing.name);
    let color = color.or(existing.color);
    validate_category(&name, color.as_deref())?;

    let updated = client.update_category(id, &name, color.as_deref()).await?;
    println!("{}", format!("Updated category {}: {}", updated.id, updated.name).green());
    Ok(())
}

async fn delete(client: &ApiClient, id: i64) -> Result<()> {
    client.delete_category(id).await?;
    println!("{}", format!("Deleted category {id}").green());
    Ok(())
}

/// A colored block for the category color, plain when the color is bad.
fn swatch(color: &str) -> String {
    match parse_hex(color) {
        Ok((r, g, b)) => "██".truecolor(r, g, b).to_string(),
        Err(_) => "██".to_string(),
    }
}
