use crate::markers::MarkerKind;

pub(crate) fn default_window_width() -> f32 {
    900.0
}

pub(crate) fn default_window_height() -> f32 {
    1100.0
}

pub(crate) fn default_indicator_width() -> f32 {
    14.0
}

pub(crate) fn default_indicator_inset() -> f32 {
    0.0
}

pub(crate) fn default_marker_kind() -> MarkerKind {
    MarkerKind::Numbers
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}

pub(crate) fn default_key_safe_quit() -> String {
    "q".to_string()
}

pub(crate) fn default_key_toggle_theme() -> String {
    "t".to_string()
}

pub(crate) fn default_key_next_section() -> String {
    "j".to_string()
}

pub(crate) fn default_key_prev_section() -> String {
    "k".to_string()
}
