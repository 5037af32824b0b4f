//! Show a single day's events (the day-detail view).

use anyhow::{Context, Result};
use chrono::NaiveDate;

use calgrid_core::{GridSpan, bucket_events};

use crate::client::ApiClient;
use crate::commands::month::fetch_spinner;
use crate::render;
use crate::store::EventStore;

pub async fn run(client: &ApiClient, date: String) -> Result<()> {
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{date}'. Expected YYYY-MM-DD"))?;

    let mut store = EventStore::new();
    let spinner = fetch_spinner();
    let fetch = store.ensure_month(client, date).await;
    spinner.finish_and_clear();
    fetch?;

    let buckets = bucket_events(GridSpan::new(date, date), store.events());
    println!("{}", render::render_day(date, &buckets[&date]));
    Ok(())
}
