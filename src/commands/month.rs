//! Show the month grid with bucketed events.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use indicatif::{ProgressBar, ProgressStyle};

use calgrid_core::CalendarDate;

use crate::client::ApiClient;
use crate::render;
use crate::store::EventStore;

pub async fn run(client: &ApiClient, month: Option<String>) -> Result<()> {
    let today = Local::now().date_naive();
    let reference = match month {
        Some(m) => parse_month(&m)?,
        None => today,
    };

    let mut store = EventStore::new();
    let spinner = fetch_spinner();
    let fetch = store.ensure_month(client, reference).await;
    spinner.finish_and_clear();
    fetch?;

    println!("{}", render::render_month(reference, store.events(), today));
    Ok(())
}

/// Parse a `YYYY-MM` argument into the first day of that month.
pub fn parse_month(s: &str) -> Result<CalendarDate> {
    let (year, month) = s
        .split_once('-')
        .with_context(|| format!("Invalid month '{s}'. Expected YYYY-MM"))?;
    let year: i32 = year
        .parse()
        .with_context(|| format!("Invalid year in '{s}'"))?;
    let month: u32 = month
        .parse()
        .with_context(|| format!("Invalid month in '{s}'"))?;

    NaiveDate::from_ymd_opt(year, month, 1)
        .with_context(|| format!("'{s}' is not a valid month"))
}

pub fn fetch_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Fetching events...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}
