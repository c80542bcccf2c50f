//! Demo caller: one fetch → one filter → plain table on stdout.
//!
//! Interactive rendering, response caching, and refresh policy belong to
//! whatever front end drives the library; this binary just exercises the
//! pipeline end to end.

use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use quake_tracker::config::Config;
use quake_tracker::error::Result;
use quake_tracker::fetcher::fetch_events;
use quake_tracker::filter::filter_events;
use quake_tracker::types::{EventRecord, FilterSpec};

#[tokio::main]
async fn main() {
    let cfg = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cfg.log_level))
        .init();

    if let Err(e) = run(cfg).await {
        error!("Fatal error: {e}");
        std::process::exit(1);
    }
}

async fn run(cfg: Config) -> Result<()> {
    let timeout = Duration::from_secs(cfg.fetch_timeout_secs);
    let (records, stats) = fetch_events(cfg.window_days, timeout).await?;
    info!(
        "Fetch complete: {} records from the {} feed (missing: time={} place={} mag={} coords={})",
        records.len(),
        cfg.window_days,
        stats.missing_time,
        stats.missing_place,
        stats.missing_magnitude,
        stats.missing_coords,
    );

    let spec = FilterSpec {
        min_magnitude: cfg.min_magnitude,
        window_days: cfg.window_days,
        keyword: cfg.keyword.clone(),
    };
    let matched = filter_events(&records, &spec);
    let plottable = matched.iter().filter(|r| r.is_plottable()).count();
    info!(
        "{} of {} records match (min_mag={}, window={}, keyword={:?}); {plottable} plottable",
        matched.len(),
        records.len(),
        spec.min_magnitude,
        spec.window_days,
        spec.keyword,
    );

    if matched.is_empty() {
        println!("No earthquakes match the current filters.");
        return Ok(());
    }

    println!("{:<19}  {:>5}  PLACE", "OCCURRED (PT)", "MAG");
    for r in matched.iter().take(cfg.max_results) {
        println!("{}", render_row(r));
    }
    if matched.len() > cfg.max_results {
        println!("... and {} more", matched.len() - cfg.max_results);
    }

    Ok(())
}

fn render_row(r: &EventRecord) -> String {
    let when = r
        .occurred_at
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());
    let mag = r
        .magnitude
        .map(|m| format!("{m:.1}"))
        .unwrap_or_else(|| "-".to_string());
    format!("{when:<19}  {mag:>5}  {}", r.place_or_empty())
}
