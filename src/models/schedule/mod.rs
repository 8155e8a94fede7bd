// Schedule module
// Weekly schedule card configuration: raw host input and its normalized form

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::weekday::WeekDay;

pub const DEFAULT_START_HOUR: u8 = 9;
pub const DEFAULT_END_HOUR: u8 = 17;
pub const DEFAULT_SHOW_WEEKEND: bool = false;
pub const DEFAULT_CARD_SIZE: u32 = 1;

/// Highest hour a config range may start or end on
pub const MAX_CONFIG_HOUR: u8 = 23;
/// Highest hour an entry may end on
pub const MAX_ENTRY_HOUR: u8 = 24;

/// Errors raised when a normalized configuration cannot be rendered
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("start hour {start} is after end hour {end}")]
    InvertedHourRange { start: u8, end: u8 },
    #[error("unknown theme `{0}`")]
    UnknownTheme(String),
}

/// One day + hour range attached to an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Day symbol as authored; canonical lowercase once recognized
    pub day: String,
    pub start: u8,
    pub end: u8,
}

impl ScheduleEntry {
    pub fn new(day: WeekDay, start: u8, end: u8) -> Self {
        Self {
            day: day.as_str().to_string(),
            start,
            end,
        }
    }
}

/// A labelled activity repeated on one or more schedule entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub schedule: Vec<ScheduleEntry>,
}

impl ScheduleEvent {
    /// Create an event with a label and no schedule
    ///
    /// # Examples
    /// ```
    /// use weekly_schedule::models::schedule::ScheduleEvent;
    /// use weekly_schedule::models::weekday::WeekDay;
    ///
    /// let gym = ScheduleEvent::new("Gym")
    ///     .color("#ff0000")
    ///     .entry(WeekDay::Monday, 10, 11);
    /// assert_eq!(gym.schedule.len(), 1);
    /// ```
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: None,
            schedule: Vec::new(),
        }
    }

    /// Set an explicit color
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Append a schedule entry
    pub fn entry(mut self, day: WeekDay, start: u8, end: u8) -> Self {
        self.schedule.push(ScheduleEntry::new(day, start, end));
        self
    }
}

/// Fully populated card configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub start_hour: u8,
    pub end_hour: u8,
    pub show_weekend: bool,
    pub size: u32,
    pub events: Vec<ScheduleEvent>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            title: None,
            start_hour: DEFAULT_START_HOUR,
            end_hour: DEFAULT_END_HOUR,
            show_weekend: DEFAULT_SHOW_WEEKEND,
            size: DEFAULT_CARD_SIZE,
            events: Vec::new(),
        }
    }
}

impl ScheduleConfig {
    /// Check the invariants normalization deliberately leaves alone
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.start_hour > self.end_hour {
            return Err(ScheduleError::InvertedHourRange {
                start: self.start_hour,
                end: self.end_hour,
            });
        }
        Ok(())
    }
}

/// Hour value as supplied by the host: a number or edit-time text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HourInput {
    Number(i64),
    Float(f64),
    Text(String),
}

impl From<u8> for HourInput {
    fn from(hour: u8) -> Self {
        HourInput::Number(i64::from(hour))
    }
}

impl From<&str> for HourInput {
    fn from(text: &str) -> Self {
        HourInput::Text(text.to_string())
    }
}

/// Raw schedule entry; every field optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawScheduleEntry {
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default)]
    pub start: Option<HourInput>,
    #[serde(default)]
    pub end: Option<HourInput>,
}

/// Raw event; every field optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawScheduleEvent {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub schedule: Option<Vec<RawScheduleEntry>>,
}

/// Card configuration as supplied by the host or a config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialScheduleConfig {
    /// Host card type tag, accepted and ignored
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub start_hour: Option<HourInput>,
    #[serde(default)]
    pub end_hour: Option<HourInput>,
    #[serde(default)]
    pub show_weekend: Option<bool>,
    #[serde(default)]
    pub size: Option<u32>,
    #[serde(default)]
    pub events: Option<Vec<RawScheduleEvent>>,
}

impl From<&ScheduleEntry> for RawScheduleEntry {
    fn from(entry: &ScheduleEntry) -> Self {
        Self {
            day: Some(entry.day.clone()),
            start: Some(entry.start.into()),
            end: Some(entry.end.into()),
        }
    }
}

impl From<&ScheduleEvent> for RawScheduleEvent {
    fn from(event: &ScheduleEvent) -> Self {
        Self {
            label: Some(event.label.clone()),
            color: event.color.clone(),
            schedule: Some(event.schedule.iter().map(RawScheduleEntry::from).collect()),
        }
    }
}

impl From<&ScheduleConfig> for PartialScheduleConfig {
    fn from(config: &ScheduleConfig) -> Self {
        Self {
            card_type: None,
            title: config.title.clone(),
            start_hour: Some(config.start_hour.into()),
            end_hour: Some(config.end_hour.into()),
            show_weekend: Some(config.show_weekend),
            size: Some(config.size),
            events: Some(config.events.iter().map(RawScheduleEvent::from).collect()),
        }
    }
}

impl From<ScheduleConfig> for PartialScheduleConfig {
    fn from(config: ScheduleConfig) -> Self {
        Self::from(&config)
    }
}
