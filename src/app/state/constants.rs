use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;

/// Limits and fixed dimensions for the viewer chrome.
pub(crate) const TOP_BAR_HEIGHT: f32 = 52.0;
pub(crate) const MARKER_RAIL_WIDTH: f32 = 40.0;
pub(crate) const MIN_INDICATOR_WIDTH: f32 = 6.0;
pub(crate) const MAX_INDICATOR_WIDTH: f32 = 40.0;
pub(crate) const MAX_INDICATOR_INSET: f32 = 80.0;
pub(crate) const MIN_WINDOW_EXTENT: f32 = 200.0;
pub(crate) static DOCUMENT_SCROLL_ID: Lazy<ScrollId> =
    Lazy::new(|| ScrollId::new("document-scroll"));
