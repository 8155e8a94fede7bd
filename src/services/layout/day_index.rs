use crate::models::weekday::WeekDay;

/// Number returned for a day symbol that is not a weekday
pub const INVALID_DAY: u8 = 0;

/// Maps weekday symbols to day columns for a given weekend setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayIndexResolver {
    show_weekend: bool,
}

impl DayIndexResolver {
    pub fn new(show_weekend: bool) -> Self {
        Self { show_weekend }
    }

    /// Monday = 1 … Sunday = 7 whether or not weekends are shown; unknown
    /// symbols map to [`INVALID_DAY`].
    pub fn column_for(&self, day: &str) -> u8 {
        day.parse::<WeekDay>()
            .map(WeekDay::number)
            .unwrap_or(INVALID_DAY)
    }

    pub fn visible_day_count(&self) -> u8 {
        if self.show_weekend {
            7
        } else {
            5
        }
    }

    /// Whether a day column lands inside the visible day range
    pub fn is_visible(&self, column: u8) -> bool {
        column != INVALID_DAY && column <= self.visible_day_count()
    }

    /// Visible days in Monday..Sunday order
    pub fn visible_days(&self) -> impl Iterator<Item = WeekDay> {
        WeekDay::ALL
            .into_iter()
            .take(usize::from(self.visible_day_count()))
    }
}

/// Free-function form of [`DayIndexResolver::column_for`]
pub fn column_for(day: &str, show_weekend: bool) -> u8 {
    DayIndexResolver::new(show_weekend).column_for(day)
}
