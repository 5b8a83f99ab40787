//! Day/night theme mapping for the PDF viewer.

use crate::config::ThemeMode;
use iced::Theme as IcedTheme;

pub fn iced_theme(mode: ThemeMode) -> IcedTheme {
    match mode {
        ThemeMode::Day => IcedTheme::Light,
        ThemeMode::Night => IcedTheme::Dark,
    }
}
