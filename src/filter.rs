use chrono::{DateTime, Duration, Utc};

use crate::types::{EventRecord, FilterSpec};

/// Stand-in magnitude for records the feed reported without one. Below any
/// realistic threshold, so null-magnitude records only pass when the caller
/// asks for `min_magnitude <= -999`.
pub const SENTINEL_MAGNITUDE: f64 = -999.0;

/// Filter `records` against `spec` with the recency cutoff anchored at the
/// current wall clock.
pub fn filter_events(records: &[EventRecord], spec: &FilterSpec) -> Vec<EventRecord> {
    filter_events_at(records, spec, Utc::now())
}

/// Filter with an explicit `now`, so callers and tests can pin the clock.
///
/// The three tests are ANDed; survivors are cloned into a fresh vec sorted
/// newest-first. Total over any input: a degenerate spec yields an empty or
/// full result per the arithmetic, never an error. The recency cutoff is
/// re-derived here from `now`, independent of which feed window was fetched,
/// so a record fetched under the 30-day feed still fails a 1-day spec when
/// stale. Timestamps pass through untouched — they are already in the
/// display timezone.
pub fn filter_events_at(
    records: &[EventRecord],
    spec: &FilterSpec,
    now: DateTime<Utc>,
) -> Vec<EventRecord> {
    let cutoff = now - Duration::days(spec.window_days.days());
    let keyword = spec.keyword.trim().to_lowercase();

    let mut out: Vec<EventRecord> = records
        .iter()
        .filter(|r| magnitude_passes(r, spec.min_magnitude))
        .filter(|r| within_window(r, cutoff))
        .filter(|r| keyword.is_empty() || place_matches(r, &keyword))
        .cloned()
        .collect();

    // Stable sort: equal timestamps keep their fetch order.
    out.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
    out
}

fn magnitude_passes(r: &EventRecord, min_magnitude: f64) -> bool {
    r.magnitude.unwrap_or(SENTINEL_MAGNITUDE) >= min_magnitude
}

/// Null timestamps never pass: a record without an instant cannot be shown
/// to be recent.
fn within_window(r: &EventRecord, cutoff: DateTime<Utc>) -> bool {
    r.occurred_at.map_or(false, |t| t >= cutoff)
}

fn place_matches(r: &EventRecord, keyword_lower: &str) -> bool {
    r.place_or_empty().to_lowercase().contains(keyword_lower)
}
