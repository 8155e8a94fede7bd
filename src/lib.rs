// Weekly Schedule Library
// Layout core, HTML renderer and card adapter for the weekly schedule card

pub mod models;
pub mod services;
pub mod ui_html;
pub mod utils;
