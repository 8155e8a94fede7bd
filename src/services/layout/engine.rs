use crate::models::grid::{EventCell, GridCellSpec, GridDescription, GridSpan};
use crate::models::schedule::ScheduleConfig;
use crate::services::color::{tint_for, ColorAssigner};

use super::day_index::DayIndexResolver;

/// Label of the first header cell, above the time column
pub const TIME_HEADER_LABEL: &str = "Time";

/// Row holding the day headers
const HEADER_ROW: i32 = 1;
/// Column holding the time labels
const TIME_COLUMN: i32 = 1;
/// First row below the header
const FIRST_HOUR_ROW: i32 = 2;

/// Turns a normalized configuration into positioned grid cells.
#[derive(Debug, Clone, Default)]
pub struct GridLayoutEngine {
    colors: ColorAssigner,
}

impl GridLayoutEngine {
    pub fn new(colors: ColorAssigner) -> Self {
        Self { colors }
    }

    /// Lay out the structural grid and every visible event entry.
    ///
    /// Pure and infallible. An inverted hour range yields no hour rows; event
    /// entries outside the hour range are positioned by the same arithmetic
    /// and left unclipped.
    pub fn layout(&self, config: &ScheduleConfig) -> GridDescription {
        let resolver = DayIndexResolver::new(config.show_weekend);

        let mut days = vec![TIME_HEADER_LABEL];
        days.extend(resolver.visible_days().map(|d| d.short_label()));
        let weekend_columns: Vec<bool> = resolver.visible_days().map(|d| d.is_weekend()).collect();

        let hours: Vec<u8> = (config.start_hour..=config.end_hour).collect();
        let day_columns = weekend_columns.len() as i32;

        let mut cells = Vec::with_capacity(
            days.len() + hours.len() * (weekend_columns.len() + 1),
        );

        for (i, label) in days.iter().enumerate() {
            cells.push(GridCellSpec::Header {
                row: HEADER_ROW,
                column: i as i32 + 1,
                label: label.to_string(),
            });
        }

        for (i, hour) in hours.iter().enumerate() {
            cells.push(GridCellSpec::TimeLabel {
                row: i as i32 + FIRST_HOUR_ROW,
                column: TIME_COLUMN,
                label: format_hour(*hour),
            });
        }

        for i in 0..hours.len() as i32 {
            for (j, weekend) in weekend_columns.iter().enumerate() {
                cells.push(GridCellSpec::Background {
                    row: i + FIRST_HOUR_ROW,
                    column: j as i32 + TIME_COLUMN + 1,
                    weekend: *weekend,
                });
            }
        }

        let start_hour = i32::from(config.start_hour);
        for (event_index, event) in config.events.iter().enumerate() {
            let mut color: Option<String> = None;
            for (entry_index, entry) in event.schedule.iter().enumerate() {
                let day_column = resolver.column_for(&entry.day);
                if !resolver.is_visible(day_column) {
                    log::debug!(
                        "Skipping entry {} of event {} ({:?}): day `{}` not visible",
                        entry_index,
                        event_index,
                        event.label,
                        entry.day
                    );
                    continue;
                }

                let resolved = color
                    .get_or_insert_with(|| self.colors.resolve(event.color.as_deref(), &event.label));
                let start_row = i32::from(entry.start) - start_hour + FIRST_HOUR_ROW;
                let end_row = i32::from(entry.end) - start_hour + FIRST_HOUR_ROW;

                cells.push(GridCellSpec::Event(EventCell {
                    rows: GridSpan::new(start_row, end_row),
                    column: i32::from(day_column) + TIME_COLUMN,
                    label: event.label.clone(),
                    tint: tint_for(resolved),
                    color: resolved.clone(),
                    event_index,
                    entry_index,
                }));
            }
        }

        let grid = GridDescription {
            columns: day_columns + 1,
            rows: hours.len() as i32 + 1,
            cells,
        };
        log::trace!(
            "Laid out {}x{} grid with {} cells",
            grid.rows,
            grid.columns,
            grid.cells.len()
        );
        grid
    }
}

/// Lay out a configuration with the default color fallback
pub fn layout(config: &ScheduleConfig) -> GridDescription {
    GridLayoutEngine::default().layout(config)
}

fn format_hour(hour: u8) -> String {
    format!("{:02}:00", hour)
}
