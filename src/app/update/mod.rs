use iced::widget::scrollable::RelativeOffset;
use std::path::PathBuf;

mod appearance;
mod core;
mod runtime;
mod scroll;
mod session;
mod shortcuts;

/// Describes work that must be performed outside the pure reducer.
pub(super) enum Effect {
    LoadDocument(PathBuf),
    /// One-way command to the document surface; never echoes back as a
    /// user-originated event the reducer would treat differently.
    ScrollTo(RelativeOffset),
    QuitSafely,
}
