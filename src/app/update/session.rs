use super::super::state::App;
use super::Effect;
use tracing::{debug, error, info, warn};

impl App {
    pub(super) fn handle_document_loaded(
        &mut self,
        request_id: u64,
        page_count: usize,
        title: Option<String>,
    ) {
        if request_id != self.document.request_id {
            debug!(
                request_id,
                current = self.document.request_id,
                "Dropping stale document load result"
            );
            return;
        }
        if page_count == 0 {
            // Degenerate but not fatal: the mapper keeps its one-viewport
            // default extent and the viewer still comes up.
            warn!("Document reported zero pages; keeping default geometry");
        }
        self.map.set_page_count(page_count);
        self.document.mark_loaded(page_count, title);
        info!(
            pages = page_count,
            document_height = self.map.document_height(),
            "Document loaded"
        );
    }

    pub(super) fn handle_document_load_failed(&mut self, request_id: u64, error: String) {
        if request_id != self.document.request_id {
            debug!(request_id, "Dropping stale document load failure");
            return;
        }
        // Surfaced in the view; there is no alternative source to retry from.
        error!(path = %self.document.path.display(), "Failed to load document: {error}");
        self.document.load_error = Some(error);
    }

    pub(super) fn handle_safe_quit(&mut self, effects: &mut Vec<Effect>) {
        info!("Disposing viewer and shutting down");
        self.document.dispose();
        effects.push(Effect::QuitSafely);
    }
}

#[cfg(test)]
mod tests {
    use super::super::Effect;
    use super::super::super::messages::Message;
    use super::super::super::state::{App, DocumentLifecycle};
    use crate::config::AppConfig;
    use std::path::PathBuf;

    fn test_app() -> App {
        App::bootstrap(PathBuf::from("/tmp/session-test.pdf"), AppConfig::default()).0
    }

    fn loaded_message(app: &App, page_count: usize) -> Message {
        Message::DocumentLoaded {
            request_id: app.document.request_id,
            page_count,
            title: Some("Sample".to_string()),
        }
    }

    #[test]
    fn load_completion_adopts_the_reported_geometry() {
        let mut app = test_app();
        let viewport = app.map.viewport_height();
        app.reduce(loaded_message(&app, 7));
        assert_eq!(app.document.lifecycle, DocumentLifecycle::Loaded);
        assert_eq!(app.map.document_height(), 7.0 * viewport);
        assert_eq!(app.document.display_name(), "Sample");
    }

    #[test]
    fn stale_load_completion_is_dropped() {
        let mut app = test_app();
        app.reduce(Message::DocumentLoaded {
            request_id: app.document.request_id.wrapping_sub(1),
            page_count: 7,
            title: None,
        });
        assert_eq!(app.document.lifecycle, DocumentLifecycle::Unloaded);
        assert_eq!(app.map.page_count(), 0);
    }

    #[test]
    fn zero_pages_keeps_the_default_extent_but_still_loads() {
        let mut app = test_app();
        let viewport = app.map.viewport_height();
        app.reduce(loaded_message(&app, 0));
        assert_eq!(app.document.lifecycle, DocumentLifecycle::Loaded);
        assert_eq!(app.map.document_height(), viewport);
        assert_eq!(app.map.indicator_offset(), 0.0);
    }

    #[test]
    fn load_failure_is_surfaced_without_retry() {
        let mut app = test_app();
        let effects = app.reduce(Message::DocumentLoadFailed {
            request_id: app.document.request_id,
            error: "broken xref table".to_string(),
        });
        assert!(effects.is_empty(), "no retry is scheduled");
        assert_eq!(app.document.load_error.as_deref(), Some("broken xref table"));
    }

    #[test]
    fn disposal_is_terminal_and_silences_late_events() {
        let mut app = test_app();
        app.reduce(loaded_message(&app, 5));
        app.reduce(Message::Scrolled {
            offset: 1000.0,
            viewport_height: 0.0,
            content_height: 0.0,
        });
        let before = app.map.scroll_offset();

        let effects = app.reduce(Message::SafeQuit);
        assert!(matches!(effects.as_slice(), [Effect::QuitSafely]));
        assert_eq!(app.document.lifecycle, DocumentLifecycle::Disposed);

        // A scroll tick and a load completion were still in flight.
        let late = app.reduce(Message::Scrolled {
            offset: 2000.0,
            viewport_height: 0.0,
            content_height: 0.0,
        });
        assert!(late.is_empty());
        assert_eq!(app.map.scroll_offset(), before);
        app.reduce(loaded_message(&app, 9));
        assert_eq!(app.document.lifecycle, DocumentLifecycle::Disposed);
        assert_eq!(app.map.page_count(), 5);
    }
}
