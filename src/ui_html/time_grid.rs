//! HTML rendering of a laid-out schedule grid.
//!
//! Cells are placed with exactly the row/column values the layout engine
//! computed. The only conversion is from the engine's inclusive row spans to
//! CSS grid lines, where the end line is exclusive.

use std::fmt::Write;

use crate::models::grid::{EventCell, GridCellSpec, GridDescription};
use crate::models::schedule::ScheduleConfig;
use crate::utils::html::{css_value, escape};

use super::theme::CardTheme;

const GRID_STYLE: &str = "
.schedule-grid {
    display: grid;
    gap: 2px;
}
.grid-header {
    text-align: center;
    padding: 8px;
    background: var(--ws-primary-color);
    color: var(--ws-text-primary-color);
    font-weight: 500;
    font-size: 12px;
}
.grid-time {
    padding: 4px 8px;
    text-align: right;
    font-size: 12px;
    color: var(--ws-secondary-text-color);
}
.grid-cell {
    min-height: 32px;
    background: var(--ws-cell-background);
}
.grid-cell.weekend {
    background: var(--ws-weekend-background);
}
.event-cell {
    font-size: 13px;
    color: var(--ws-primary-text-color);
    text-align: center;
    z-index: 1;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
    text-overflow: ellipsis;
    min-height: 28px;
    padding: 4px;
    margin: 2px;
    border-radius: 0 4px 4px 0;
}
";

const CARD_STYLE: &str = "
.weekly-schedule-card {
    background: var(--ws-card-background-color);
    box-sizing: border-box;
    border-radius: var(--ha-card-border-radius, 12px);
    border: 1px solid var(--ws-divider-color);
    color: var(--ws-primary-text-color);
    padding: 16px;
}
.weekly-schedule-card .card-title {
    font-size: 20px;
    margin: 0 0 12px;
}
";

/// Render the grid container and all of its cells.
pub fn render_grid(grid: &GridDescription) -> String {
    let mut html = String::new();
    let _ = writeln!(
        html,
        r#"<div class="schedule-grid" style="grid-template-columns: auto repeat({}, 1fr); grid-template-rows: auto repeat({}, 1fr);">"#,
        (grid.columns - 1).max(0),
        grid.hour_rows(),
    );
    for cell in &grid.cells {
        render_cell(&mut html, cell);
    }
    html.push_str("</div>\n");
    html
}

fn render_cell(html: &mut String, cell: &GridCellSpec) {
    let _ = match cell {
        GridCellSpec::Header { row, column, label } => writeln!(
            html,
            r#"<div class="grid-header" style="grid-row: {row}; grid-column: {column};">{}</div>"#,
            escape(label)
        ),
        GridCellSpec::TimeLabel { row, column, label } => writeln!(
            html,
            r#"<div class="grid-time" style="grid-row: {row}; grid-column: {column};">{}</div>"#,
            escape(label)
        ),
        GridCellSpec::Background {
            row,
            column,
            weekend,
        } => writeln!(
            html,
            r#"<div class="grid-cell{}" style="grid-row: {row}; grid-column: {column};"></div>"#,
            if *weekend { " weekend" } else { "" }
        ),
        GridCellSpec::Event(event) => render_event(html, event),
    };
}

fn render_event(html: &mut String, event: &EventCell) -> std::fmt::Result {
    writeln!(
        html,
        r#"<div class="event-cell" data-event="{}" data-entry="{}" style="grid-row: {} / {}; grid-column: {}; background-color: {}; border-left: 4px solid {};">{}</div>"#,
        event.event_index,
        event.entry_index,
        event.rows.start,
        event.rows.end + 1,
        event.column,
        css_value(&event.tint),
        css_value(&event.color),
        escape(&event.label),
    )
}

/// Render a complete card: theme variables, styles, optional title and grid.
pub fn render_card(config: &ScheduleConfig, grid: &GridDescription, theme: &CardTheme) -> String {
    let mut html = String::new();
    html.push_str("<style>\n.weekly-schedule-card {\n");
    html.push_str(&theme.css_variables());
    html.push_str("}\n");
    html.push_str(CARD_STYLE);
    html.push_str(GRID_STYLE);
    html.push_str("</style>\n");
    html.push_str("<div class=\"weekly-schedule-card\">\n");
    if let Some(title) = &config.title {
        let _ = writeln!(html, r#"<h2 class="card-title">{}</h2>"#, escape(title));
    }
    html.push_str(&render_grid(grid));
    html.push_str("</div>\n");
    html
}
