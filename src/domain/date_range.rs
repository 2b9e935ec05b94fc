//! User-selected signature window.

use crate::domain::TimeSec;
use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateRangeError {
    #[error("range end {end} is before start {start}")]
    EndBeforeStart { start: TimeSec, end: TimeSec },
}

/// Start/end pair picked by the user, both truncated to the minute.
/// Only built through `new`/`from_picker`, so `end >= start` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: TimeSec,
    end: TimeSec,
}

impl DateRange {
    /// Build a range from two picker values, zeroing seconds and sub-seconds.
    pub fn from_picker(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, DateRangeError> {
        Self::new(
            truncate_to_minute(start.timestamp()),
            truncate_to_minute(end.timestamp()),
        )
    }

    /// Build a range from second timestamps that are already truncated.
    pub fn new(start: TimeSec, end: TimeSec) -> Result<Self, DateRangeError> {
        if end < start {
            return Err(DateRangeError::EndBeforeStart { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> TimeSec {
        self.start
    }

    pub fn end(&self) -> TimeSec {
        self.end
    }

    /// Signature period length in seconds.
    pub fn period_secs(&self) -> i64 {
        self.end.as_secs().saturating_sub(self.start.as_secs())
    }

    pub fn start_datetime(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.start.as_secs(), 0).single()
    }

    pub fn end_datetime(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.end.as_secs(), 0).single()
    }
}

fn truncate_to_minute(secs: i64) -> TimeSec {
    TimeSec::new(secs - secs.rem_euclid(60))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_picker_values_truncated_to_minute() {
        let range = DateRange::from_picker(
            at("2024-05-01T10:15:42.750Z"),
            at("2024-05-01T11:30:59Z"),
        )
        .unwrap();

        assert_eq!(range.start_datetime().unwrap(), at("2024-05-01T10:15:00Z"));
        assert_eq!(range.end_datetime().unwrap(), at("2024-05-01T11:30:00Z"));
        assert_eq!(range.period_secs(), 75 * 60);
    }

    #[test]
    fn test_truncation_before_epoch_rounds_down() {
        assert_eq!(truncate_to_minute(-1), TimeSec::new(-60));
        assert_eq!(truncate_to_minute(119), TimeSec::new(60));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = DateRange::new(TimeSec::new(200), TimeSec::new(100)).unwrap_err();
        assert_eq!(
            err,
            DateRangeError::EndBeforeStart {
                start: TimeSec::new(200),
                end: TimeSec::new(100)
            }
        );
    }

    #[test]
    fn test_same_minute_picks_give_empty_period() {
        let range = DateRange::from_picker(
            at("2024-05-01T10:15:01Z"),
            at("2024-05-01T10:15:59Z"),
        )
        .unwrap();
        assert_eq!(range.period_secs(), 0);
    }

    #[test]
    fn test_serializes_as_seconds() {
        let range = DateRange::new(TimeSec::new(60), TimeSec::new(720)).unwrap();
        let json = serde_json::to_value(range).unwrap();
        assert_eq!(json, serde_json::json!({"start": 60, "end": 720}));
    }
}
