use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Event record
// ---------------------------------------------------------------------------

/// One seismic event as normalized from a feed feature.
///
/// Every field is independently nullable: the feed omits properties freely
/// and a missing value is data, not an error. Records are immutable once
/// built — filtering clones survivors into a new vec.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRecord {
    /// Event instant, converted to the display timezone at fetch time.
    pub occurred_at: Option<DateTime<Tz>>,
    /// Free-text location description ("5km NE of San Ramon, CA").
    pub place: Option<String>,
    pub magnitude: Option<f64>,
    /// Event detail page; opaque to filtering.
    pub detail_url: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
}

impl EventRecord {
    /// True when the record can be placed on a point map: both coordinates
    /// present and finite.
    pub fn is_plottable(&self) -> bool {
        matches!(
            (self.longitude, self.latitude),
            (Some(lon), Some(lat)) if lon.is_finite() && lat.is_finite()
        )
    }

    /// Place text for matching purposes; a missing place matches like "".
    pub fn place_or_empty(&self) -> &str {
        self.place.as_deref().unwrap_or("")
    }
}

// ---------------------------------------------------------------------------
// Feed window
// ---------------------------------------------------------------------------

/// The three retrospective feed durations the source exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    Day,
    Week,
    Month,
}

impl TimeWindow {
    /// Map a day count onto a feed window. Anything other than 7 or 30
    /// resolves to the 1-day window — the dashboard stays responsive on an
    /// unexpected input instead of failing.
    pub fn from_days(days: i64) -> Self {
        match days {
            7 => TimeWindow::Week,
            30 => TimeWindow::Month,
            _ => TimeWindow::Day,
        }
    }

    /// Width of the window in days.
    pub fn days(self) -> i64 {
        match self {
            TimeWindow::Day => 1,
            TimeWindow::Week => 7,
            TimeWindow::Month => 30,
        }
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        TimeWindow::Day
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d", self.days())
    }
}

// ---------------------------------------------------------------------------
// Filter specification
// ---------------------------------------------------------------------------

/// One filter evaluation's criteria. Constructed per call and discarded.
///
/// A blank or whitespace-only `keyword` disables the keyword test. A
/// negative or unknown day count cannot be represented here:
/// [`TimeWindow::from_days`] normalizes it at the boundary.
#[derive(Debug, Clone)]
pub struct FilterSpec {
    pub min_magnitude: f64,
    pub window_days: TimeWindow,
    pub keyword: String,
}
