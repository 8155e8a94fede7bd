// Config service
// Normalization of host-supplied card configuration and config file I/O

mod loader;
mod normalizer;

pub use loader::{default_config_path, load_config, parse_config, save_config, ConfigFormat};
pub use normalizer::{normalize, parse_entry_hour_input, parse_hour_input};
