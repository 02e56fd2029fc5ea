use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};

use super::event::Event;

/// Processed state of one day: the day's events plus derived signals.
///
/// Built from a pipeline result by downstream consumers; `summary` is an
/// open map they fill in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldState {
    pub day: NaiveDate,
    pub events: Vec<Event>,
    pub summary: Map<String, Value>,
}

impl FieldState {
    pub fn new(day: NaiveDate, events: Vec<Event>) -> Self {
        Self {
            day,
            events,
            summary: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventTime;

    #[test]
    fn test_serializes_day_as_iso_date() {
        let day = NaiveDate::from_ymd_opt(2025, 11, 14).unwrap();
        let ts = EventTime::parse("2025-11-14T10:30:00-05:00").unwrap();
        let mut state = FieldState::new(day, vec![Event::new("s-1", ts, "cnbc", "corporate", "text")]);
        state.summary.insert("valid".to_string(), Value::from(1));

        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["day"], "2025-11-14");
        assert_eq!(value["events"][0]["id"], "s-1");
        assert_eq!(value["summary"]["valid"], 1);
    }
}
