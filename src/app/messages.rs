use crate::markers::MarkerKind;
use iced::keyboard::{Key, Modifiers};

/// Messages emitted by the UI and the document load task.
#[derive(Debug, Clone)]
pub enum Message {
    DocumentLoaded {
        request_id: u64,
        page_count: usize,
        title: Option<String>,
    },
    DocumentLoadFailed {
        request_id: u64,
        error: String,
    },
    /// Raw scroll report from the document surface, in content pixels.
    Scrolled {
        offset: f32,
        viewport_height: f32,
        content_height: f32,
    },
    IndicatorPressed,
    IndicatorMoved(f32),
    IndicatorReleased,
    MarkerPressed(usize),
    MarkerKindChanged(MarkerKind),
    NextSection,
    PreviousSection,
    ToggleTheme,
    WindowResized {
        width: f32,
        height: f32,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    SafeQuit,
}
