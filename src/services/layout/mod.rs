// Layout service
// Grid layout engine and weekday column resolution

mod day_index;
mod engine;

pub use day_index::{column_for, DayIndexResolver, INVALID_DAY};
pub use engine::{layout, GridLayoutEngine, TIME_HEADER_LABEL};
