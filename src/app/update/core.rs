use super::super::messages::Message;
use super::super::state::App;
use super::Effect;
use super::runtime::runtime_event_to_message;
use iced::{Subscription, Task, event};
use tracing::trace;

impl App {
    pub fn subscription(_app: &App) -> Subscription<Message> {
        Subscription::batch([
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized {
                width: size.width,
                height: size.height,
            }),
            event::listen_with(runtime_event_to_message),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }

    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        // Scroll ticks and load completions can be delivered after the
        // screen is torn down; once disposed, everything is a no-op.
        if !self.document.is_live() {
            trace!("Dropping message delivered after disposal");
            return effects;
        }

        match message {
            Message::DocumentLoaded {
                request_id,
                page_count,
                title,
            } => self.handle_document_loaded(request_id, page_count, title),
            Message::DocumentLoadFailed { request_id, error } => {
                self.handle_document_load_failed(request_id, error)
            }
            Message::Scrolled {
                offset,
                viewport_height,
                content_height,
            } => self.handle_scrolled(offset, viewport_height, content_height),
            Message::IndicatorPressed => self.handle_indicator_pressed(&mut effects),
            Message::IndicatorMoved(pointer_y) => {
                self.handle_indicator_moved(pointer_y, &mut effects)
            }
            Message::IndicatorReleased => self.handle_indicator_released(),
            Message::MarkerPressed(index) => self.handle_marker_pressed(index, &mut effects),
            Message::MarkerKindChanged(kind) => self.handle_marker_kind_changed(kind),
            Message::NextSection => self.handle_next_section(&mut effects),
            Message::PreviousSection => self.handle_previous_section(&mut effects),
            Message::ToggleTheme => self.handle_toggle_theme(),
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height)
            }
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::SafeQuit => self.handle_safe_quit(&mut effects),
        }

        effects
    }
}
