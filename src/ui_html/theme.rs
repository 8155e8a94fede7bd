//! Card theme for the HTML renderer.
//!
//! Colors are emitted as CSS custom properties that defer to the host
//! dashboard's variables when present, so the card follows the host theme and
//! falls back to these values when rendered standalone.

use serde::{Deserialize, Serialize};

use crate::models::schedule::ScheduleError;
use crate::services::color::ColorAssigner;

/// Colors used by the schedule card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTheme {
    /// Whether this is a dark theme
    pub is_dark: bool,

    /// Header background and fallback event color
    pub primary_color: String,

    /// Header text color
    pub text_primary_color: String,

    /// Time label color
    pub secondary_text_color: String,

    /// Card body text color
    pub primary_text_color: String,

    /// Card background
    pub card_background: String,

    /// Card border
    pub divider_color: String,

    /// Background cell color on weekdays
    pub cell_background: String,

    /// Background cell color on Saturday/Sunday
    pub weekend_background: String,
}

impl Default for CardTheme {
    fn default() -> Self {
        Self::light()
    }
}

impl CardTheme {
    pub const PRESETS: [&'static str; 2] = ["light", "dark"];

    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            primary_color: "#03a9f4".to_string(),
            text_primary_color: "#ffffff".to_string(),
            secondary_text_color: "#727272".to_string(),
            primary_text_color: "#212121".to_string(),
            card_background: "#ffffff".to_string(),
            divider_color: "#e0e0e0".to_string(),
            cell_background: "#fafafa".to_string(),
            weekend_background: "#f2f2f5".to_string(),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            primary_color: "#039be5".to_string(),
            text_primary_color: "#ffffff".to_string(),
            secondary_text_color: "#9b9b9b".to_string(),
            primary_text_color: "#e1e1e1".to_string(),
            card_background: "#1c1c1c".to_string(),
            divider_color: "#3c3c3c".to_string(),
            cell_background: "#262626".to_string(),
            weekend_background: "#232326".to_string(),
        }
    }

    /// Look up a preset by name (case-insensitive)
    pub fn from_preset_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::light()),
            "dark" => Some(Self::dark()),
            _ => None,
        }
    }

    /// Like [`CardTheme::from_preset_name`], failing on unknown names
    pub fn preset(name: &str) -> Result<Self, ScheduleError> {
        Self::from_preset_name(name).ok_or_else(|| ScheduleError::UnknownTheme(name.to_string()))
    }

    /// Color assigner whose fallback follows this theme's primary color
    pub fn color_assigner(&self) -> ColorAssigner {
        ColorAssigner::new(self.primary_color.clone())
    }

    /// CSS custom properties, each deferring to the host variable of the same name
    pub fn css_variables(&self) -> String {
        let vars = [
            ("primary-color", &self.primary_color),
            ("text-primary-color", &self.text_primary_color),
            ("secondary-text-color", &self.secondary_text_color),
            ("primary-text-color", &self.primary_text_color),
            ("card-background-color", &self.card_background),
            ("divider-color", &self.divider_color),
        ];
        let mut css = String::new();
        for (name, value) in vars {
            css.push_str(&format!("--ws-{name}: var(--{name}, {value});\n"));
        }
        css.push_str(&format!("--ws-cell-background: {};\n", self.cell_background));
        css.push_str(&format!(
            "--ws-weekend-background: {};\n",
            self.weekend_background
        ));
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_theme() {
        let theme = CardTheme::light();
        assert!(!theme.is_dark);
        assert_eq!(theme, CardTheme::default());
    }

    #[test]
    fn test_dark_theme() {
        let theme = CardTheme::dark();
        assert!(theme.is_dark);
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(CardTheme::from_preset_name("Dark"), Some(CardTheme::dark()));
        assert_eq!(CardTheme::from_preset_name(" light "), Some(CardTheme::light()));
        assert_eq!(CardTheme::from_preset_name("nord"), None);
        assert_eq!(
            CardTheme::preset("nord"),
            Err(ScheduleError::UnknownTheme("nord".to_string()))
        );
        for name in CardTheme::PRESETS {
            assert!(CardTheme::preset(name).is_ok());
        }
    }

    #[test]
    fn test_css_variables_defer_to_host() {
        let css = CardTheme::light().css_variables();
        assert!(css.contains("--ws-primary-color: var(--primary-color, #03a9f4);"));
        assert!(css.contains("--ws-weekend-background: #f2f2f5;"));
    }

    #[test]
    fn test_color_assigner_uses_primary() {
        let assigner = CardTheme::dark().color_assigner();
        assert_eq!(assigner.color_for(None), "#039be5");
    }
}
