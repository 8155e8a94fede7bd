//! HTML surface of the weekly schedule card.
//!
//! The layout core produces an abstract grid; this module turns it into
//! markup, wraps it in a themed card, and exposes the card to hosts.

pub mod card;
pub mod registry;
pub mod theme;
pub mod time_grid;

pub use card::{configure, RenderOutput, WeeklyScheduleCard};
pub use registry::{register_builtin_cards, CardDescriptor, CardRegistry};
pub use theme::CardTheme;
pub use time_grid::{render_card, render_grid};
