use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::config::{FEED_URL_DAY, FEED_URL_MONTH, FEED_URL_WEEK};
use crate::error::{FetchError, Result};
use crate::time::{from_epoch_ms, to_display_tz};
use crate::types::{EventRecord, TimeWindow};

/// Tally of fields the feed omitted or mistyped during one parse. A degraded
/// field becomes `None` on its record, never a fetch-level error; only total
/// request or document failure escalates to [`FetchError`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FetchStats {
    pub features_total: usize,
    pub missing_time: usize,
    pub missing_place: usize,
    pub missing_magnitude: usize,
    pub missing_coords: usize,
}

/// Endpoint bound to a feed window. Unrecognized day counts never reach
/// here — [`TimeWindow::from_days`] already resolved them to the 1-day feed.
pub fn feed_url(window: TimeWindow) -> &'static str {
    match window {
        TimeWindow::Day => FEED_URL_DAY,
        TimeWindow::Week => FEED_URL_WEEK,
        TimeWindow::Month => FEED_URL_MONTH,
    }
}

/// Fetch the feed for `window` and normalize it into event records.
///
/// One GET, no retries — retry policy belongs to the caller. The returned
/// vec has one entry per feed feature, in source order; downstream ordering
/// comes from the filter's own sort. All non-null timestamps are already in
/// the display timezone.
pub async fn fetch_events(
    window: TimeWindow,
    timeout: Duration,
) -> Result<(Vec<EventRecord>, FetchStats)> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    let url = feed_url(window);

    debug!("fetching {url}");
    let resp = client.get(url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus(status));
    }
    let body = resp.text().await?;
    let doc: Value = serde_json::from_str(&body)?;

    Ok(parse_feed(&doc))
}

/// Parse a feature-collection document into records. A missing or non-array
/// `features` key reads as an empty feed, the same as the source serving
/// `{"features": []}` for a quiet window.
pub fn parse_feed(doc: &Value) -> (Vec<EventRecord>, FetchStats) {
    let mut stats = FetchStats::default();

    let features = match doc.get("features").and_then(Value::as_array) {
        Some(f) => f,
        None => return (Vec::new(), stats),
    };

    stats.features_total = features.len();
    let records = features
        .iter()
        .map(|f| parse_feature(f, &mut stats))
        .collect();
    (records, stats)
}

/// Normalize one feature. Total: every missing or mistyped field maps to
/// `None` on the record and a bump in `stats`.
fn parse_feature(v: &Value, stats: &mut FetchStats) -> EventRecord {
    let props = v.get("properties");

    let occurred_at = props
        .and_then(|p| p.get("time"))
        .and_then(Value::as_i64)
        .and_then(from_epoch_ms)
        .map(|t| to_display_tz(&t));
    if occurred_at.is_none() {
        stats.missing_time += 1;
    }

    let place = props
        .and_then(|p| p.get("place"))
        .and_then(Value::as_str)
        .map(str::to_string);
    if place.is_none() {
        stats.missing_place += 1;
    }

    let magnitude = props.and_then(|p| p.get("mag")).and_then(Value::as_f64);
    if magnitude.is_none() {
        stats.missing_magnitude += 1;
    }

    let detail_url = props
        .and_then(|p| p.get("url"))
        .and_then(Value::as_str)
        .map(str::to_string);

    // geometry.coordinates is [lon, lat, depth]; the triplet or either
    // member may be absent.
    let coords = v
        .get("geometry")
        .and_then(|g| g.get("coordinates"))
        .and_then(Value::as_array);
    let longitude = coords.and_then(|c| c.first()).and_then(Value::as_f64);
    let latitude = coords.and_then(|c| c.get(1)).and_then(Value::as_f64);
    if longitude.is_none() || latitude.is_none() {
        stats.missing_coords += 1;
    }

    EventRecord {
        occurred_at,
        place,
        magnitude,
        detail_url,
        longitude,
        latitude,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(raw: &str) -> Value {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn feed_url_binds_each_window() {
        assert_eq!(feed_url(TimeWindow::Day), FEED_URL_DAY);
        assert_eq!(feed_url(TimeWindow::Week), FEED_URL_WEEK);
        assert_eq!(feed_url(TimeWindow::Month), FEED_URL_MONTH);
    }

    #[test]
    fn unknown_day_count_resolves_to_day_feed() {
        assert_eq!(feed_url(TimeWindow::from_days(13)), FEED_URL_DAY);
        assert_eq!(feed_url(TimeWindow::from_days(-1)), FEED_URL_DAY);
    }

    #[test]
    fn parses_full_feature() {
        let raw = r#"{"features":[{
            "properties":{"time":1700000000000,"place":"5km NE of San Ramon, CA","mag":3.2,"url":"https://example.org/ev1"},
            "geometry":{"coordinates":[-121.97,37.78,8.3]}
        }]}"#;
        let (records, stats) = parse_feed(&doc(raw));
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(
            r.occurred_at.unwrap().timestamp_millis(),
            1_700_000_000_000
        );
        assert_eq!(r.place.as_deref(), Some("5km NE of San Ramon, CA"));
        assert_eq!(r.magnitude, Some(3.2));
        assert_eq!(r.detail_url.as_deref(), Some("https://example.org/ev1"));
        assert_eq!(r.longitude, Some(-121.97));
        assert_eq!(r.latitude, Some(37.78));
        assert!(r.is_plottable());
        assert_eq!(stats.features_total, 1);
        assert_eq!(stats.missing_time, 0);
        assert_eq!(stats.missing_coords, 0);
    }

    #[test]
    fn timestamps_come_out_in_display_tz() {
        // 2025-01-15T12:00:00Z — Pacific standard time, UTC-8.
        let raw = r#"{"features":[{"properties":{"time":1736942400000}}]}"#;
        let (records, _) = parse_feed(&doc(raw));
        let t = records[0].occurred_at.unwrap();
        assert_eq!(t.to_rfc3339(), "2025-01-15T04:00:00-08:00");
    }

    #[test]
    fn empty_features_is_empty_not_error() {
        let (records, stats) = parse_feed(&doc(r#"{"features":[]}"#));
        assert!(records.is_empty());
        assert_eq!(stats.features_total, 0);
    }

    #[test]
    fn missing_features_key_is_empty_feed() {
        let (records, _) = parse_feed(&doc(r#"{"type":"FeatureCollection"}"#));
        assert!(records.is_empty());

        let (records, _) = parse_feed(&doc(r#"{"features":"oops"}"#));
        assert!(records.is_empty());
    }

    #[test]
    fn missing_fields_become_null_and_are_tallied() {
        let raw = r#"{"features":[
            {"properties":{"time":1700000000000,"place":"somewhere","mag":1.1},"geometry":null},
            {"properties":{"time":"not-a-number","mag":2.2},"geometry":{"coordinates":[-120.0,36.0,5.0]}},
            {}
        ]}"#;
        let (records, stats) = parse_feed(&doc(raw));
        assert_eq!(records.len(), 3);

        // No geometry: coordinates null, rest intact.
        assert!(records[0].occurred_at.is_some());
        assert_eq!(records[0].longitude, None);
        assert_eq!(records[0].latitude, None);
        assert!(!records[0].is_plottable());

        // Unparsable time: occurred_at null, rest intact.
        assert_eq!(records[1].occurred_at, None);
        assert_eq!(records[1].magnitude, Some(2.2));
        assert!(records[1].is_plottable());

        // Bare feature: every field null.
        assert_eq!(
            records[2],
            EventRecord {
                occurred_at: None,
                place: None,
                magnitude: None,
                detail_url: None,
                longitude: None,
                latitude: None,
            }
        );

        assert_eq!(stats.features_total, 3);
        assert_eq!(stats.missing_time, 2);
        assert_eq!(stats.missing_place, 2);
        assert_eq!(stats.missing_magnitude, 1);
        assert_eq!(stats.missing_coords, 2);
    }

    #[test]
    fn out_of_range_time_becomes_null() {
        let raw = r#"{"features":[{"properties":{"time":9223372036854775807,"mag":4.0}}]}"#;
        let (records, stats) = parse_feed(&doc(raw));
        assert_eq!(records[0].occurred_at, None);
        assert_eq!(records[0].magnitude, Some(4.0));
        assert_eq!(stats.missing_time, 1);
    }

    #[test]
    fn source_order_is_preserved() {
        let raw = r#"{"features":[
            {"properties":{"place":"first"}},
            {"properties":{"place":"second"}},
            {"properties":{"place":"third"}}
        ]}"#;
        let (records, _) = parse_feed(&doc(raw));
        let places: Vec<_> = records.iter().map(EventRecord::place_or_empty).collect();
        assert_eq!(places, vec!["first", "second", "third"]);
    }
}
