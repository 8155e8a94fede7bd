// Weekday module
// Symbolic day of the week used by schedule entries

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl WeekDay {
    /// All days in display order (Monday..Sunday)
    pub const ALL: [WeekDay; 7] = [
        WeekDay::Monday,
        WeekDay::Tuesday,
        WeekDay::Wednesday,
        WeekDay::Thursday,
        WeekDay::Friday,
        WeekDay::Saturday,
        WeekDay::Sunday,
    ];

    /// 1-based day number: Monday = 1 … Sunday = 7
    pub fn number(self) -> u8 {
        chrono::Weekday::from(self).number_from_monday() as u8
    }

    /// Canonical lowercase symbol
    pub fn as_str(self) -> &'static str {
        match self {
            WeekDay::Monday => "monday",
            WeekDay::Tuesday => "tuesday",
            WeekDay::Wednesday => "wednesday",
            WeekDay::Thursday => "thursday",
            WeekDay::Friday => "friday",
            WeekDay::Saturday => "saturday",
            WeekDay::Sunday => "sunday",
        }
    }

    /// Short label used in grid headers
    pub fn short_label(self) -> &'static str {
        match self {
            WeekDay::Monday => "Mon",
            WeekDay::Tuesday => "Tue",
            WeekDay::Wednesday => "Wed",
            WeekDay::Thursday => "Thu",
            WeekDay::Friday => "Fri",
            WeekDay::Saturday => "Sat",
            WeekDay::Sunday => "Sun",
        }
    }

    pub fn is_weekend(self) -> bool {
        matches!(self, WeekDay::Saturday | WeekDay::Sunday)
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a day symbol does not name a weekday
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized weekday `{0}`")]
pub struct ParseWeekDayError(pub String);

impl FromStr for WeekDay {
    type Err = ParseWeekDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbol = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|day| day.as_str() == symbol)
            .ok_or_else(|| ParseWeekDayError(s.to_string()))
    }
}

impl From<WeekDay> for chrono::Weekday {
    fn from(day: WeekDay) -> Self {
        match day {
            WeekDay::Monday => chrono::Weekday::Mon,
            WeekDay::Tuesday => chrono::Weekday::Tue,
            WeekDay::Wednesday => chrono::Weekday::Wed,
            WeekDay::Thursday => chrono::Weekday::Thu,
            WeekDay::Friday => chrono::Weekday::Fri,
            WeekDay::Saturday => chrono::Weekday::Sat,
            WeekDay::Sunday => chrono::Weekday::Sun,
        }
    }
}
