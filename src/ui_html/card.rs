//! Weekly schedule card: the adapter between the host and the layout core.
//!
//! `configure` is the pure config-to-output function. `WeeklyScheduleCard`
//! holds the last applied configuration and only calls `configure` again when
//! a newly supplied config normalizes to something different. A config that
//! fails validation still becomes the current one, so later edits build on it,
//! while the last good output stays on display.

use serde::Serialize;

use crate::models::grid::GridDescription;
use crate::models::schedule::{PartialScheduleConfig, ScheduleConfig, ScheduleError};
use crate::services::config::normalize;
use crate::services::editor::{apply_edit, ConfigEdit};
use crate::services::layout::GridLayoutEngine;

use super::theme::CardTheme;
use super::time_grid::render_card;

/// Result of rendering a configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderOutput {
    pub grid: GridDescription,
    pub html: String,
}

/// Validate, lay out and render a normalized configuration.
pub fn configure(config: &ScheduleConfig, theme: &CardTheme) -> Result<RenderOutput, ScheduleError> {
    config.validate()?;
    let grid = GridLayoutEngine::new(theme.color_assigner()).layout(config);
    let html = render_card(config, &grid, theme);
    Ok(RenderOutput { grid, html })
}

/// One card instance on a dashboard
#[derive(Debug, Clone, Default)]
pub struct WeeklyScheduleCard {
    theme: CardTheme,
    /// Last config that rendered successfully, with its output
    rendered: Option<(ScheduleConfig, RenderOutput)>,
    /// Newer config that failed validation
    pending: Option<ScheduleConfig>,
    revision: u64,
}

impl WeeklyScheduleCard {
    pub fn new(theme: CardTheme) -> Self {
        Self {
            theme,
            rendered: None,
            pending: None,
            revision: 0,
        }
    }

    /// Apply a host-supplied configuration.
    ///
    /// Re-renders only when the normalized config differs from the last one
    /// rendered. On error the new config is kept as the current one and the
    /// previous output stays available.
    pub fn set_config(&mut self, partial: &PartialScheduleConfig) -> Result<&RenderOutput, ScheduleError> {
        self.apply(normalize(partial))
    }

    /// Apply one editor change to the current configuration and re-render.
    pub fn apply_edit(&mut self, edit: &ConfigEdit) -> Result<&RenderOutput, ScheduleError> {
        let current = self.config().cloned().unwrap_or_default();
        let edited = apply_edit(&current, edit);
        // Round-trip through normalization like any host-supplied config
        self.apply(normalize(&PartialScheduleConfig::from(&edited)))
    }

    /// Switch theme; re-renders the last good config if there is one.
    pub fn set_theme(&mut self, theme: CardTheme) -> Result<Option<&RenderOutput>, ScheduleError> {
        if theme == self.theme {
            return Ok(self.output());
        }
        self.theme = theme;
        if let Some((config, _)) = self.rendered.take() {
            let pending = self.pending.take();
            let result = self.apply(config).map(|_| ());
            self.pending = pending;
            result?;
        }
        Ok(self.output())
    }

    fn apply(&mut self, config: ScheduleConfig) -> Result<&RenderOutput, ScheduleError> {
        let rendered = match self.rendered.take() {
            Some((previous, output)) if previous == config => {
                log::debug!("Config unchanged, reusing previous render");
                (previous, output)
            }
            previous => match configure(&config, &self.theme) {
                Ok(output) => {
                    self.revision += 1;
                    log::debug!(
                        "Rendered schedule with {} events into {} cells",
                        config.events.len(),
                        output.grid.cells.len()
                    );
                    (config, output)
                }
                Err(err) => {
                    log::warn!("Rejected schedule config: {}", err);
                    self.rendered = previous;
                    self.pending = Some(config);
                    return Err(err);
                }
            },
        };
        self.pending = None;
        Ok(&self.rendered.insert(rendered).1)
    }

    /// Current configuration, including one that failed validation
    pub fn config(&self) -> Option<&ScheduleConfig> {
        self.pending
            .as_ref()
            .or_else(|| self.rendered.as_ref().map(|(config, _)| config))
    }

    /// Whether the current configuration failed to render
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn output(&self) -> Option<&RenderOutput> {
        self.rendered.as_ref().map(|(_, output)| output)
    }

    /// Number of renders performed so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Height hint reported to the host layout
    pub fn card_size(&self) -> u32 {
        self.config().map(|c| c.size).unwrap_or(1)
    }
}
