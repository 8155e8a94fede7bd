//! Single-field edits to a card configuration.
//!
//! The visual editor reports one change at a time. Each edit produces a new
//! configuration which the card then normalizes and lays out again in full.

use crate::models::schedule::{ScheduleConfig, ScheduleEntry, ScheduleEvent};
use crate::models::weekday::WeekDay;
use crate::services::config::{parse_entry_hour_input, parse_hour_input};

/// Hour range given to newly added schedule entries
const NEW_ENTRY_START: u8 = 9;
const NEW_ENTRY_END: u8 = 10;

/// One editor change. Hour fields carry the raw text typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigEdit {
    SetTitle(String),
    SetStartHour(String),
    SetEndHour(String),
    SetShowWeekend(bool),
    AddEvent,
    RemoveEvent { event: usize },
    SetEventLabel { event: usize, label: String },
    SetEventColor { event: usize, color: Option<String> },
    AddScheduleEntry { event: usize },
    RemoveScheduleEntry { event: usize, entry: usize },
    SetEntryDay { event: usize, entry: usize, day: String },
    SetEntryStart { event: usize, entry: usize, hour: String },
    SetEntryEnd { event: usize, entry: usize, hour: String },
}

/// Apply an edit, returning the edited copy.
///
/// Edits addressing an event or entry that does not exist leave the
/// configuration unchanged.
pub fn apply_edit(config: &ScheduleConfig, edit: &ConfigEdit) -> ScheduleConfig {
    let mut next = config.clone();
    match edit {
        ConfigEdit::SetTitle(title) => {
            let title = title.trim();
            next.title = (!title.is_empty()).then(|| title.to_string());
        }
        ConfigEdit::SetStartHour(text) => next.start_hour = parse_hour_input(text),
        ConfigEdit::SetEndHour(text) => next.end_hour = parse_hour_input(text),
        ConfigEdit::SetShowWeekend(show) => next.show_weekend = *show,
        ConfigEdit::AddEvent => next.events.push(ScheduleEvent::default()),
        ConfigEdit::RemoveEvent { event } => {
            if *event < next.events.len() {
                next.events.remove(*event);
            } else {
                warn_missing(edit);
            }
        }
        ConfigEdit::SetEventLabel { event, label } => match next.events.get_mut(*event) {
            Some(target) => target.label = label.clone(),
            None => warn_missing(edit),
        },
        ConfigEdit::SetEventColor { event, color } => match next.events.get_mut(*event) {
            Some(target) => {
                target.color = color
                    .as_deref()
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string)
            }
            None => warn_missing(edit),
        },
        ConfigEdit::AddScheduleEntry { event } => match next.events.get_mut(*event) {
            Some(target) => target.schedule.push(ScheduleEntry::new(
                WeekDay::Monday,
                NEW_ENTRY_START,
                NEW_ENTRY_END,
            )),
            None => warn_missing(edit),
        },
        ConfigEdit::RemoveScheduleEntry { event, entry } => {
            match next.events.get_mut(*event) {
                Some(target) if *entry < target.schedule.len() => {
                    target.schedule.remove(*entry);
                }
                _ => warn_missing(edit),
            }
        }
        ConfigEdit::SetEntryDay { event, entry, day } => {
            match entry_mut(&mut next, *event, *entry) {
                Some(target) => target.day = day.clone(),
                None => warn_missing(edit),
            }
        }
        ConfigEdit::SetEntryStart { event, entry, hour } => {
            match entry_mut(&mut next, *event, *entry) {
                Some(target) => target.start = parse_entry_hour_input(hour),
                None => warn_missing(edit),
            }
        }
        ConfigEdit::SetEntryEnd { event, entry, hour } => {
            match entry_mut(&mut next, *event, *entry) {
                Some(target) => target.end = parse_entry_hour_input(hour),
                None => warn_missing(edit),
            }
        }
    }
    next
}

fn entry_mut(config: &mut ScheduleConfig, event: usize, entry: usize) -> Option<&mut ScheduleEntry> {
    config.events.get_mut(event)?.schedule.get_mut(entry)
}

fn warn_missing(edit: &ConfigEdit) {
    log::warn!("Ignoring edit for a missing event or entry: {:?}", edit);
}
