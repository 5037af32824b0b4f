//! Delete an event, with confirmation unless forced.

use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use crate::client::ApiClient;

pub async fn run(client: &ApiClient, id: i64, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("  Delete event {id}?"))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "Aborted".dimmed());
            return Ok(());
        }
    }

    client.delete_event(id).await?;
    println!("{}", format!("Deleted event {id}").green());
    Ok(())
}
