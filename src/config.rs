use crate::types::TimeWindow;

pub const FEED_URL_DAY: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_day.geojson";
pub const FEED_URL_WEEK: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";
pub const FEED_URL_MONTH: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_month.geojson";

/// Default fetch timeout (seconds) when FETCH_TIMEOUT_SECS is unset.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Runtime knobs for the tracker binary. The library API takes everything
/// it needs as arguments; this struct only feeds the demo caller.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    /// Network timeout for one feed GET (FETCH_TIMEOUT_SECS)
    pub fetch_timeout_secs: u64,
    /// Feed window to fetch, in days; unknown values fall back to 1 (WINDOW_DAYS)
    pub window_days: TimeWindow,
    /// Minimum magnitude threshold (MIN_MAGNITUDE)
    pub min_magnitude: f64,
    /// Optional location keyword, blank disables the test (KEYWORD)
    pub keyword: String,
    /// Display cap on table rows (MAX_RESULTS)
    pub max_results: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            fetch_timeout_secs: std::env::var("FETCH_TIMEOUT_SECS")
                .unwrap_or_default()
                .parse::<u64>()
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            window_days: std::env::var("WINDOW_DAYS")
                .unwrap_or_default()
                .parse::<i64>()
                .map(TimeWindow::from_days)
                .unwrap_or(TimeWindow::Month),
            min_magnitude: std::env::var("MIN_MAGNITUDE")
                .unwrap_or_default()
                .parse::<f64>()
                .unwrap_or(2.5),
            keyword: std::env::var("KEYWORD").unwrap_or_default(),
            max_results: std::env::var("MAX_RESULTS")
                .unwrap_or_default()
                .parse::<usize>()
                .unwrap_or(25),
        }
    }
}
