use crate::models::schedule::{
    HourInput, PartialScheduleConfig, RawScheduleEntry, RawScheduleEvent, ScheduleConfig,
    ScheduleEntry, ScheduleEvent, DEFAULT_CARD_SIZE, DEFAULT_END_HOUR, DEFAULT_SHOW_WEEKEND,
    DEFAULT_START_HOUR, MAX_CONFIG_HOUR, MAX_ENTRY_HOUR,
};
use crate::models::weekday::WeekDay;

/// Merge a partial configuration with defaults.
///
/// Never fails: malformed hour text resolves to 0, every hour is clamped into
/// its valid range, and missing collections become empty. The input is not
/// modified.
pub fn normalize(partial: &PartialScheduleConfig) -> ScheduleConfig {
    ScheduleConfig {
        title: partial
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string),
        start_hour: partial
            .start_hour
            .as_ref()
            .map(|h| clamp_hour(h, MAX_CONFIG_HOUR))
            .unwrap_or(DEFAULT_START_HOUR),
        end_hour: partial
            .end_hour
            .as_ref()
            .map(|h| clamp_hour(h, MAX_CONFIG_HOUR))
            .unwrap_or(DEFAULT_END_HOUR),
        show_weekend: partial.show_weekend.unwrap_or(DEFAULT_SHOW_WEEKEND),
        size: partial.size.unwrap_or(DEFAULT_CARD_SIZE).max(1),
        events: partial
            .events
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(normalize_event)
            .collect(),
    }
}

fn normalize_event(raw: &RawScheduleEvent) -> ScheduleEvent {
    ScheduleEvent {
        label: raw.label.clone().unwrap_or_default(),
        color: raw
            .color
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string),
        schedule: raw
            .schedule
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(normalize_entry)
            .collect(),
    }
}

fn normalize_entry(raw: &RawScheduleEntry) -> ScheduleEntry {
    let day = raw.day.as_deref().unwrap_or_default();
    ScheduleEntry {
        day: canonical_day(day),
        start: raw
            .start
            .as_ref()
            .map(|h| clamp_hour(h, MAX_ENTRY_HOUR))
            .unwrap_or(0),
        end: raw
            .end
            .as_ref()
            .map(|h| clamp_hour(h, MAX_ENTRY_HOUR))
            .unwrap_or(0),
    }
}

/// Lowercase recognized days; keep unrecognized symbols as typed so the
/// layout engine can skip them.
fn canonical_day(day: &str) -> String {
    match day.parse::<WeekDay>() {
        Ok(weekday) => weekday.as_str().to_string(),
        Err(_) => day.trim().to_string(),
    }
}

fn clamp_hour(input: &HourInput, max: u8) -> u8 {
    let value = match input {
        HourInput::Number(n) => *n,
        HourInput::Float(f) if f.is_finite() => f.trunc() as i64,
        HourInput::Float(_) => 0,
        HourInput::Text(text) => parse_leading_int(text).unwrap_or(0),
    };
    value.clamp(0, i64::from(max)) as u8
}

/// Parse an edit-time hour field into `[0,23]`; non-numeric text becomes 0.
pub fn parse_hour_input(text: &str) -> u8 {
    clamp_hour(&HourInput::Text(text.to_string()), MAX_CONFIG_HOUR)
}

/// Parse an edit-time entry hour into `[0,24]`.
pub fn parse_entry_hour_input(text: &str) -> u8 {
    clamp_hour(&HourInput::Text(text.to_string()), MAX_ENTRY_HOUR)
}

/// Leading-integer parse: optional sign, then digits, trailing text ignored.
fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits: &str = &rest[..rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len())];
    if digits.is_empty() {
        return None;
    }
    // Saturate absurdly long inputs; the caller clamps anyway
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_empty_partial_gets_defaults() {
        let config = normalize(&PartialScheduleConfig::default());
        assert_eq!(config, ScheduleConfig::default());
    }

    #[test_case("8", 8 ; "plain")]
    #[test_case("  14", 14 ; "leading whitespace")]
    #[test_case("12abc", 12 ; "trailing garbage")]
    #[test_case("abc", 0 ; "non numeric")]
    #[test_case("", 0 ; "empty")]
    #[test_case("-4", 0 ; "negative clamps to zero")]
    #[test_case("99", 23 ; "too large clamps")]
    #[test_case("+7", 7 ; "explicit sign")]
    #[test_case("7.9", 7 ; "decimal truncates")]
    #[test_case("99999999999999999999999", 23 ; "overflow saturates")]
    fn test_parse_hour_input(input: &str, expected: u8) {
        assert_eq!(parse_hour_input(input), expected);
    }

    #[test]
    fn test_entry_hours_allow_twenty_four() {
        assert_eq!(parse_entry_hour_input("24"), 24);
        assert_eq!(parse_entry_hour_input("25"), 24);
    }

    #[test]
    fn test_numeric_hours_are_clamped() {
        let partial = PartialScheduleConfig {
            start_hour: Some(HourInput::Number(-3)),
            end_hour: Some(HourInput::Number(40)),
            ..Default::default()
        };
        let config = normalize(&partial);
        assert_eq!(config.start_hour, 0);
        assert_eq!(config.end_hour, 23);
    }

    #[test]
    fn test_inverted_range_passes_through() {
        let partial = PartialScheduleConfig {
            start_hour: Some(HourInput::Number(18)),
            end_hour: Some(HourInput::Number(6)),
            ..Default::default()
        };
        let config = normalize(&partial);
        assert_eq!((config.start_hour, config.end_hour), (18, 6));
    }

    #[test]
    fn test_events_are_filled_in() {
        let partial = PartialScheduleConfig {
            events: Some(vec![
                RawScheduleEvent {
                    label: Some("Gym".to_string()),
                    color: Some("".to_string()),
                    schedule: None,
                },
                RawScheduleEvent {
                    label: None,
                    color: Some(" #00ff00 ".to_string()),
                    schedule: Some(vec![RawScheduleEntry {
                        day: Some("Saturday".to_string()),
                        start: Some("9".into()),
                        end: Some(HourInput::Number(30)),
                    }]),
                },
            ]),
            ..Default::default()
        };

        let config = normalize(&partial);
        assert_eq!(config.events.len(), 2);
        assert_eq!(config.events[0].label, "Gym");
        assert_eq!(config.events[0].color, None);
        assert!(config.events[0].schedule.is_empty());
        assert_eq!(config.events[1].label, "");
        assert_eq!(config.events[1].color.as_deref(), Some("#00ff00"));
        assert_eq!(
            config.events[1].schedule,
            vec![ScheduleEntry {
                day: "saturday".to_string(),
                start: 9,
                end: 24,
            }]
        );
    }

    #[test]
    fn test_unknown_day_is_kept() {
        let partial = PartialScheduleConfig {
            events: Some(vec![RawScheduleEvent {
                label: Some("Mystery".to_string()),
                color: None,
                schedule: Some(vec![RawScheduleEntry {
                    day: Some(" Funday ".to_string()),
                    start: None,
                    end: None,
                }]),
            }]),
            ..Default::default()
        };
        let config = normalize(&partial);
        let entry = &config.events[0].schedule[0];
        assert_eq!(entry.day, "Funday");
        assert_eq!((entry.start, entry.end), (0, 0));
    }

    #[test]
    fn test_blank_title_is_dropped() {
        let partial = PartialScheduleConfig {
            title: Some("   ".to_string()),
            size: Some(0),
            ..Default::default()
        };
        let config = normalize(&partial);
        assert_eq!(config.title, None);
        assert_eq!(config.size, 1);
    }

    #[test]
    fn test_normalize_does_not_touch_input() {
        let partial = PartialScheduleConfig {
            start_hour: Some("abc".into()),
            ..Default::default()
        };
        let before = partial.clone();
        let _ = normalize(&partial);
        assert_eq!(partial, before);
    }

    #[test]
    fn test_normalize_is_idempotent_on_sample() {
        let partial = PartialScheduleConfig {
            title: Some("Week".to_string()),
            start_hour: Some("7".into()),
            end_hour: Some(HourInput::Float(19.6)),
            show_weekend: Some(true),
            size: Some(3),
            events: Some(vec![RawScheduleEvent {
                label: Some("Run".to_string()),
                color: Some("tomato".to_string()),
                schedule: Some(vec![RawScheduleEntry {
                    day: Some("SUNDAY".to_string()),
                    start: Some("6".into()),
                    end: Some("8".into()),
                }]),
            }]),
            ..Default::default()
        };
        let once = normalize(&partial);
        let twice = normalize(&PartialScheduleConfig::from(&once));
        assert_eq!(twice, once);
    }
}
