//! quake-tracker — fetch, normalize, and filter recent seismic events.
//!
//! The core pipeline: resolve a feed window to its USGS endpoint, GET and
//! parse the GeoJSON feature collection into [`EventRecord`]s with all
//! timestamps in the Pacific display timezone, then apply magnitude /
//! recency / keyword filters as a pure function over the fetched records.
//! Rendering, caching, and refresh policy live in the caller.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod filter;
pub mod time;
pub mod types;

pub use error::{FetchError, Result};
pub use fetcher::{fetch_events, parse_feed, FetchStats};
pub use filter::{filter_events, filter_events_at, SENTINEL_MAGNITUDE};
pub use types::{EventRecord, FilterSpec, TimeWindow};
