use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder schedule descriptor for one zone: a running flag and an
/// optional start time. Nothing in this crate acts on it; it exists so
/// the display can show it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneSchedule {
    pub running: bool,
    #[serde(rename = "nextStart")]
    pub next_start: Option<NaiveTime>,
}

impl Default for ZoneSchedule {
    fn default() -> Self {
        Self {
            running: false,
            next_start: None,
        }
    }
}

impl ZoneSchedule {
    pub fn start_text(&self) -> Option<String> {
        self.next_start.map(format_start)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleTimeError {
    #[error("schedule start must be HH:MM, got {0:?}")]
    Malformed(String),
}

/// Parse a 24-hour `HH:MM` start time.
pub fn parse_start(text: &str) -> Result<NaiveTime, ScheduleTimeError> {
    NaiveTime::parse_from_str(text.trim(), "%H:%M")
        .map_err(|_| ScheduleTimeError::Malformed(text.to_string()))
}

pub fn format_start(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_and_formats_start_times() {
        let time = parse_start("21:30").unwrap();
        assert_eq!(format_start(time), "21:30");

        let midnight = parse_start(" 00:00 ").unwrap();
        assert_eq!(format_start(midnight), "00:00");
    }

    #[test]
    fn rejects_malformed_start_times() {
        for bad in ["", "24:00", "9:1x", "noon", "12:60"] {
            assert_eq!(
                parse_start(bad),
                Err(ScheduleTimeError::Malformed(bad.to_string())),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn schedule_round_trips_through_json() {
        let schedule = ZoneSchedule {
            running: true,
            next_start: Some(parse_start("21:30").unwrap()),
        };

        let value = serde_json::to_value(schedule).unwrap();
        assert_eq!(value["running"], true);
        assert!(value["nextStart"].is_string());

        let back: ZoneSchedule = serde_json::from_value(value).unwrap();
        assert_eq!(back, schedule);
    }

    #[test]
    fn start_text_follows_next_start() {
        let mut schedule = ZoneSchedule::default();
        assert_eq!(schedule.start_text(), None);

        schedule.next_start = Some(parse_start("06:45").unwrap());
        assert_eq!(schedule.start_text(), Some("06:45".to_string()));
    }
}
