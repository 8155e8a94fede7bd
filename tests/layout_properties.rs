// Property-based tests for normalization, day resolution, colors and layout

use proptest::prelude::*;
use weekly_schedule::models::schedule::{
    HourInput, PartialScheduleConfig, RawScheduleEntry, RawScheduleEvent, ScheduleConfig,
};
use weekly_schedule::models::weekday::WeekDay;
use weekly_schedule::services::color::ColorAssigner;
use weekly_schedule::services::config::normalize;
use weekly_schedule::services::layout::{column_for, layout, DayIndexResolver};

fn hour_input() -> impl Strategy<Value = HourInput> {
    prop_oneof![
        (-50i64..80).prop_map(HourInput::Number),
        "[ 0-9a-z+-]{0,4}".prop_map(HourInput::Text),
    ]
}

fn day_symbol() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(WeekDay::ALL.to_vec()).prop_map(|d| d.as_str().to_uppercase()),
        prop::sample::select(WeekDay::ALL.to_vec()).prop_map(|d| d.as_str().to_string()),
        "[a-z]{0,8}",
    ]
}

fn raw_entry() -> impl Strategy<Value = RawScheduleEntry> {
    (
        prop::option::of(day_symbol()),
        prop::option::of(hour_input()),
        prop::option::of(hour_input()),
    )
        .prop_map(|(day, start, end)| RawScheduleEntry { day, start, end })
}

fn raw_event() -> impl Strategy<Value = RawScheduleEvent> {
    (
        prop::option::of("[A-Za-z ]{0,12}"),
        prop::option::of(prop_oneof!["#[0-9a-f]{6}", Just(String::new())]),
        prop::option::of(prop::collection::vec(raw_entry(), 0..4)),
    )
        .prop_map(|(label, color, schedule)| RawScheduleEvent {
            label,
            color,
            schedule,
        })
}

fn partial_config() -> impl Strategy<Value = PartialScheduleConfig> {
    (
        prop::option::of(hour_input()),
        prop::option::of(hour_input()),
        prop::option::of(any::<bool>()),
        prop::option::of(prop::collection::vec(raw_event(), 0..4)),
    )
        .prop_map(|(start_hour, end_hour, show_weekend, events)| PartialScheduleConfig {
            start_hour,
            end_hour,
            show_weekend,
            events,
            ..Default::default()
        })
}

proptest! {
    #[test]
    fn prop_normalize_is_idempotent(partial in partial_config()) {
        let once = normalize(&partial);
        let twice = normalize(&PartialScheduleConfig::from(&once));
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn prop_normalized_hours_in_range(partial in partial_config()) {
        let config = normalize(&partial);
        prop_assert!(config.start_hour <= 23);
        prop_assert!(config.end_hour <= 23);
        for event in &config.events {
            for entry in &event.schedule {
                prop_assert!(entry.start <= 24 && entry.end <= 24);
            }
        }
    }

    #[test]
    fn prop_row_and_header_counts(start in 0u8..24, len in 0u8..24, show_weekend: bool) {
        let end = start.saturating_add(len).min(23);
        let config = ScheduleConfig {
            start_hour: start,
            end_hour: end,
            show_weekend,
            ..Default::default()
        };
        let grid = layout(&config);
        let visible_days = if show_weekend { 7 } else { 5 };
        prop_assert_eq!(grid.time_labels().count(), usize::from(end - start) + 1);
        prop_assert_eq!(grid.headers().count(), visible_days + 1);
        prop_assert_eq!(
            grid.backgrounds().count(),
            (usize::from(end - start) + 1) * visible_days
        );
    }

    #[test]
    fn prop_event_cells_land_on_visible_columns(partial in partial_config()) {
        let config = normalize(&partial);
        let grid = layout(&config);
        let max_column = if config.show_weekend { 8 } else { 6 };
        for cell in grid.events() {
            prop_assert!(cell.column >= 2 && cell.column <= max_column);
        }
    }

    #[test]
    fn prop_color_for_is_stable(label in "\\PC{0,24}") {
        let assigner = ColorAssigner::default();
        let first = assigner.color_for(Some(&label));
        prop_assert_eq!(&assigner.color_for(Some(&label)), &first);
        if !label.is_empty() {
            prop_assert!(first.starts_with("rgb("));
        }
    }

    #[test]
    fn prop_column_for_ranges(day in prop::sample::select(WeekDay::ALL.to_vec())) {
        let workweek = DayIndexResolver::new(false);
        let column = workweek.column_for(day.as_str());
        if day.is_weekend() {
            prop_assert!(!workweek.is_visible(column));
        } else {
            prop_assert!((1..=5).contains(&column));
        }
        prop_assert!((1..=7).contains(&column_for(day.as_str(), true)));
    }
}
