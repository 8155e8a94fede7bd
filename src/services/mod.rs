// Service module exports

pub mod color;
pub mod config;
pub mod editor;
pub mod layout;
