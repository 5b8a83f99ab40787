mod constants;
mod document;
mod ui;

use crate::config::AppConfig;
use crate::scrollmap::ScrollMap;
use iced::Task;
use std::path::PathBuf;

use super::messages::Message;
use super::update::Effect;

pub(crate) use constants::*;
pub(in crate::app) use document::{DocumentLifecycle, DocumentState};
pub(in crate::app) use ui::IndicatorState;

/// Core application state composed of sub-models.
pub struct App {
    pub(super) document: DocumentState,
    pub(super) indicator: IndicatorState,
    pub(super) map: ScrollMap,
    pub(super) config: AppConfig,
}

impl App {
    /// Build the initial state and kick off the document load.
    pub(crate) fn bootstrap(path: PathBuf, config: AppConfig) -> (App, Task<Message>) {
        let config = sanitized(config);
        let viewport = viewport_height(config.window_height);
        let mut app = App {
            document: DocumentState::new(path.clone()),
            indicator: IndicatorState::new(),
            map: ScrollMap::new(viewport, config.indicator_inset),
            config,
        };

        tracing::info!(
            path = %path.display(),
            viewport_height = viewport,
            marker_kind = %app.config.marker_kind,
            "Initialized viewer state"
        );

        let task = app.run_effect(Effect::LoadDocument(path));
        (app, task)
    }
}

/// Height available to the document surface and the indicator track.
pub(super) fn viewport_height(window_height: f32) -> f32 {
    (window_height - TOP_BAR_HEIGHT).max(0.0)
}

fn sanitized(mut config: AppConfig) -> AppConfig {
    config.window_width = finite_or(config.window_width, 900.0).max(MIN_WINDOW_EXTENT);
    config.window_height = finite_or(config.window_height, 1100.0).max(MIN_WINDOW_EXTENT);
    config.indicator_width = finite_or(config.indicator_width, MIN_INDICATOR_WIDTH)
        .clamp(MIN_INDICATOR_WIDTH, MAX_INDICATOR_WIDTH);
    config.indicator_inset =
        finite_or(config.indicator_inset, 0.0).clamp(0.0, MAX_INDICATOR_INSET);
    config
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
}
