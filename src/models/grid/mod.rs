// Grid module
// Abstract grid description produced by the layout engine

use serde::{Deserialize, Serialize};

/// Inclusive 1-based range of grid rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpan {
    pub start: i32,
    pub end: i32,
}

impl GridSpan {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }
}

/// An event block positioned on the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCell {
    pub rows: GridSpan,
    pub column: i32,
    pub label: String,
    /// Opaque color for the border accent
    pub color: String,
    /// Translucent fill derived from `color`
    pub tint: String,
    /// Position of the source event in the config
    pub event_index: usize,
    /// Position of the source entry in the event's schedule
    pub entry_index: usize,
}

/// One positioned cell of the schedule grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridCellSpec {
    Header { row: i32, column: i32, label: String },
    TimeLabel { row: i32, column: i32, label: String },
    Background { row: i32, column: i32, weekend: bool },
    Event(EventCell),
}

impl GridCellSpec {
    /// First row the cell occupies
    pub fn row(&self) -> i32 {
        match self {
            GridCellSpec::Header { row, .. }
            | GridCellSpec::TimeLabel { row, .. }
            | GridCellSpec::Background { row, .. } => *row,
            GridCellSpec::Event(cell) => cell.rows.start,
        }
    }

    pub fn column(&self) -> i32 {
        match self {
            GridCellSpec::Header { column, .. }
            | GridCellSpec::TimeLabel { column, .. }
            | GridCellSpec::Background { column, .. } => *column,
            GridCellSpec::Event(cell) => cell.column,
        }
    }

    pub fn as_event(&self) -> Option<&EventCell> {
        match self {
            GridCellSpec::Event(cell) => Some(cell),
            _ => None,
        }
    }
}

/// Complete layout of a schedule card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDescription {
    /// Grid columns including the time label column
    pub columns: i32,
    /// Grid rows including the header row
    pub rows: i32,
    /// Cells in paint order
    pub cells: Vec<GridCellSpec>,
}

impl GridDescription {
    pub fn headers(&self) -> impl Iterator<Item = &GridCellSpec> {
        self.cells
            .iter()
            .filter(|c| matches!(c, GridCellSpec::Header { .. }))
    }

    pub fn time_labels(&self) -> impl Iterator<Item = &GridCellSpec> {
        self.cells
            .iter()
            .filter(|c| matches!(c, GridCellSpec::TimeLabel { .. }))
    }

    pub fn backgrounds(&self) -> impl Iterator<Item = &GridCellSpec> {
        self.cells
            .iter()
            .filter(|c| matches!(c, GridCellSpec::Background { .. }))
    }

    pub fn events(&self) -> impl Iterator<Item = &EventCell> {
        self.cells.iter().filter_map(GridCellSpec::as_event)
    }

    /// Number of hour rows (grid rows below the header)
    pub fn hour_rows(&self) -> i32 {
        (self.rows - 1).max(0)
    }
}
