use super::super::messages::Message;
use super::super::state::{App, DOCUMENT_SCROLL_ID};
use super::Effect;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::widget::scrollable;
use iced::window;

impl App {
    pub(in crate::app) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::LoadDocument(path) => {
                self.document.request_id = self.document.request_id.wrapping_add(1);
                let request_id = self.document.request_id;
                Task::perform(
                    async move {
                        match crate::pdf_loader::load_document(&path) {
                            Ok(document) => Message::DocumentLoaded {
                                request_id,
                                page_count: document.page_count,
                                title: document.title,
                            },
                            Err(err) => Message::DocumentLoadFailed {
                                request_id,
                                error: format!("{err:#}"),
                            },
                        }
                    },
                    |message| message,
                )
            }
            Effect::ScrollTo(offset) => scrollable::snap_to(DOCUMENT_SCROLL_ID.clone(), offset),
            Effect::QuitSafely => iced::exit(),
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
