// Test fixtures - reusable schedule configurations
// Provides consistent test data across all test files

#![allow(dead_code)]

use weekly_schedule::models::schedule::{
    HourInput, PartialScheduleConfig, RawScheduleEntry, RawScheduleEvent,
};

/// Raw entry as a host would send it
pub fn entry(day: &str, start: i64, end: i64) -> RawScheduleEntry {
    RawScheduleEntry {
        day: Some(day.to_string()),
        start: Some(HourInput::Number(start)),
        end: Some(HourInput::Number(end)),
    }
}

/// Raw event with an optional explicit color
pub fn event(label: &str, color: Option<&str>, schedule: Vec<RawScheduleEntry>) -> RawScheduleEvent {
    RawScheduleEvent {
        label: Some(label.to_string()),
        color: color.map(str::to_string),
        schedule: Some(schedule),
    }
}

/// Workweek config with the given hour range and events
pub fn workweek(start: i64, end: i64, events: Vec<RawScheduleEvent>) -> PartialScheduleConfig {
    PartialScheduleConfig {
        start_hour: Some(HourInput::Number(start)),
        end_hour: Some(HourInput::Number(end)),
        show_weekend: Some(false),
        events: Some(events),
        ..Default::default()
    }
}

/// The "Gym on Monday 10-11" card
pub fn gym_card() -> PartialScheduleConfig {
    workweek(
        9,
        12,
        vec![event("Gym", Some("#ff0000"), vec![entry("monday", 10, 11)])],
    )
}

/// Same card as `gym_card`, written as a Home Assistant style JSON config
pub const GYM_CARD_JSON: &str = r##"{
    "type": "custom:weekly-schedule-card",
    "startHour": 9,
    "endHour": 12,
    "showWeekend": false,
    "events": [
        {
            "label": "Gym",
            "color": "#ff0000",
            "schedule": [{"day": "monday", "start": 10, "end": 11}]
        }
    ]
}"##;
