use super::super::state::App;
use super::Effect;
use crate::scrollmap::SECTION_COUNT;
use iced::widget::scrollable::RelativeOffset;
use tracing::{debug, info, trace};

impl App {
    /// Primary path: the document surface reports its offset on every tick.
    pub(super) fn handle_scrolled(
        &mut self,
        offset: f32,
        viewport_height: f32,
        content_height: f32,
    ) {
        self.map.document_scrolled(offset);
        trace!(
            offset = self.map.scroll_offset(),
            viewport_height,
            content_height,
            "Document scrolled"
        );
    }

    pub(super) fn handle_indicator_pressed(&mut self, effects: &mut Vec<Effect>) {
        self.indicator.dragging = true;
        let pointer_y = self.indicator.pointer_y;
        self.apply_drag(pointer_y, effects);
    }

    pub(super) fn handle_indicator_moved(&mut self, pointer_y: f32, effects: &mut Vec<Effect>) {
        self.indicator.pointer_y = pointer_y;
        if self.indicator.dragging {
            self.apply_drag(pointer_y, effects);
        }
    }

    pub(super) fn handle_indicator_released(&mut self) {
        if self.indicator.dragging {
            self.indicator.dragging = false;
            debug!(offset = self.map.scroll_offset(), "Indicator drag finished");
        }
    }

    pub(super) fn handle_marker_pressed(&mut self, index: usize, effects: &mut Vec<Effect>) {
        let target = self.map.jump_to_section(index);
        info!(section = index, target, "Jumping to section");
        effects.push(self.snap_effect());
    }

    pub(super) fn handle_next_section(&mut self, effects: &mut Vec<Effect>) {
        let current = self.map.active_section().round() as usize;
        self.handle_marker_pressed((current + 1).min(SECTION_COUNT - 1), effects);
    }

    pub(super) fn handle_previous_section(&mut self, effects: &mut Vec<Effect>) {
        let current = self.map.active_section().round() as usize;
        self.handle_marker_pressed(current.saturating_sub(1), effects);
    }

    /// The drag path drives the document, never the other way around: the
    /// mapper adopts the offset first, then the surface is commanded to the
    /// same spot, so the echoed scroll report lands on an identical value.
    fn apply_drag(&mut self, pointer_y: f32, effects: &mut Vec<Effect>) {
        let target = self.map.indicator_dragged(pointer_y);
        trace!(pointer_y, target, "Indicator dragged");
        effects.push(self.snap_effect());
    }

    fn snap_effect(&self) -> Effect {
        Effect::ScrollTo(RelativeOffset {
            x: 0.0,
            y: self.map.relative_offset(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::Effect;
    use super::super::super::messages::Message;
    use super::super::super::state::App;
    use crate::config::AppConfig;
    use std::path::PathBuf;

    fn loaded_app() -> App {
        let mut config = AppConfig::default();
        config.window_height = 852.0; // viewport of 800 once the bar is gone
        let (mut app, _task) =
            App::bootstrap(PathBuf::from("/tmp/scroll-test.pdf"), config);
        let request_id = app.document.request_id;
        app.reduce(Message::DocumentLoaded {
            request_id,
            page_count: 5,
            title: None,
        });
        app
    }

    fn scrolled(offset: f32) -> Message {
        Message::Scrolled {
            offset,
            viewport_height: 800.0,
            content_height: 4000.0,
        }
    }

    #[test]
    fn scroll_reports_are_idempotent_through_the_reducer() {
        let mut app = loaded_app();
        app.reduce(scrolled(1234.0));
        let first = (app.map.indicator_offset(), app.map.active_section());
        app.reduce(scrolled(1234.0));
        assert_eq!((app.map.indicator_offset(), app.map.active_section()), first);
    }

    #[test]
    fn marker_press_adopts_the_band_start_and_snaps_the_surface() {
        let mut app = loaded_app();
        let effects = app.reduce(Message::MarkerPressed(5));
        assert!((app.map.active_section() - 5.0).abs() < 1e-4);
        match effects.as_slice() {
            [Effect::ScrollTo(offset)] => {
                assert!((offset.y - app.map.relative_offset()).abs() < 1e-6);
            }
            _ => panic!("marker press should produce exactly one snap"),
        }
    }

    #[test]
    fn hover_without_a_press_does_not_scroll() {
        let mut app = loaded_app();
        app.reduce(scrolled(1000.0));
        let effects = app.reduce(Message::IndicatorMoved(400.0));
        assert!(effects.is_empty());
        assert_eq!(app.map.scroll_offset(), 1000.0);
    }

    #[test]
    fn drag_then_echoed_report_leaves_the_thumb_in_place() {
        let mut app = loaded_app();
        app.reduce(Message::IndicatorMoved(300.0));
        app.reduce(Message::IndicatorPressed);
        let target = app.map.scroll_offset();
        let thumb = app.map.indicator_offset();
        // The surface executes the snap and reports the same offset back.
        app.reduce(scrolled(target));
        assert_eq!(app.map.indicator_offset(), thumb);
        app.reduce(Message::IndicatorReleased);
        assert!(!app.indicator.dragging);
    }

    #[test]
    fn section_stepping_walks_the_rail_and_clamps_at_the_ends() {
        let mut app = loaded_app();
        app.reduce(Message::MarkerPressed(8));
        app.reduce(Message::NextSection);
        // Section 9 starts past the scrollable range, so the jump clamps to
        // the bottom; stepping further stays put.
        let bottom = app.map.scroll_offset();
        assert_eq!(bottom, app.map.max_scroll());
        app.reduce(Message::NextSection);
        assert_eq!(app.map.scroll_offset(), bottom);
        app.reduce(Message::PreviousSection);
        assert!(app.map.scroll_offset() < bottom);
    }
}
