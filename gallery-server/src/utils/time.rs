//! Time helpers for preset ids and timestamps

use chrono::{SecondsFormat, Utc};

/// Current time in epoch milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Current time as RFC 3339 with millisecond precision (`2024-02-01T08:30:00.000Z`)
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc3339_round_trips_through_preset_parser() {
        let stamp = now_rfc3339();
        assert!(stamp.ends_with('Z'));
        let parsed = shared::models::parse_timestamp_millis(&stamp).unwrap();
        assert!((now_millis() - parsed).abs() < 60_000);
    }
}
