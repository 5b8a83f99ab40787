use super::super::state::{App, viewport_height};
use crate::config::ThemeMode;
use crate::markers::MarkerKind;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_toggle_theme(&mut self) {
        self.config.theme = match self.config.theme {
            ThemeMode::Day => ThemeMode::Night,
            ThemeMode::Night => ThemeMode::Day,
        };
        debug!(theme = %self.config.theme, "Theme toggled");
    }

    pub(super) fn handle_marker_kind_changed(&mut self, kind: MarkerKind) {
        if kind != self.config.marker_kind {
            info!(from = %self.config.marker_kind, to = %kind, "Marker kind changed");
            self.config.marker_kind = kind;
        }
    }

    pub(super) fn handle_window_resized(&mut self, width: f32, height: f32) {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return;
        }
        self.config.window_width = width;
        self.config.window_height = height;
        self.map.set_viewport_height(viewport_height(height));
        debug!(
            width,
            height,
            viewport_height = self.map.viewport_height(),
            "Window resized"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::super::state::App;
    use crate::config::{AppConfig, ThemeMode};
    use crate::markers::MarkerKind;
    use std::path::PathBuf;

    fn test_app() -> App {
        App::bootstrap(PathBuf::from("/tmp/appearance-test.pdf"), AppConfig::default()).0
    }

    #[test]
    fn theme_toggle_round_trips() {
        let mut app = test_app();
        assert_eq!(app.config.theme, ThemeMode::Day);
        app.reduce(Message::ToggleTheme);
        assert_eq!(app.config.theme, ThemeMode::Night);
        app.reduce(Message::ToggleTheme);
        assert_eq!(app.config.theme, ThemeMode::Day);
    }

    #[test]
    fn marker_kind_change_sticks() {
        let mut app = test_app();
        app.reduce(Message::MarkerKindChanged(MarkerKind::Letters));
        assert_eq!(app.config.marker_kind, MarkerKind::Letters);
    }

    #[test]
    fn resize_keeps_relative_scroll_progress() {
        let mut app = test_app();
        let request_id = app.document.request_id;
        app.reduce(Message::DocumentLoaded {
            request_id,
            page_count: 5,
            title: None,
        });
        app.reduce(Message::Scrolled {
            offset: app.map.max_scroll() / 2.0,
            viewport_height: app.map.viewport_height(),
            content_height: app.map.document_height(),
        });
        let progress = app.map.relative_offset();
        app.reduce(Message::WindowResized {
            width: 700.0,
            height: 900.0,
        });
        assert!((app.map.relative_offset() - progress).abs() < 1e-4);
        assert_eq!(app.map.viewport_height(), 848.0);
    }

    #[test]
    fn degenerate_resize_is_ignored() {
        let mut app = test_app();
        let viewport = app.map.viewport_height();
        app.reduce(Message::WindowResized {
            width: f32::NAN,
            height: -10.0,
        });
        assert_eq!(app.map.viewport_height(), viewport);
    }
}
