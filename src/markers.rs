//! Landmark marker lookup.
//!
//! The rail next to the indicator shows one marker per document section.
//! This module is a pure rendering lookup: given a marker kind and a section
//! index it produces the label and, for the colored set, an accent color.
//! It holds no state; emphasis (opacity) comes from the scroll mapper.

use crate::scrollmap::SECTION_COUNT;
use iced::Color;
use serde::Deserialize;

/// Which landmark set the rail renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerKind {
    Numbers,
    Letters,
    Icons,
    ColorIcons,
    None,
}

/// Kinds offered in the settings pick list.
pub const MARKER_KINDS: [MarkerKind; 5] = [
    MarkerKind::Numbers,
    MarkerKind::Letters,
    MarkerKind::Icons,
    MarkerKind::ColorIcons,
    MarkerKind::None,
];

const MARKER_GLYPHS: [&str; SECTION_COUNT] =
    ["◆", "●", "■", "▲", "★", "✦", "⬟", "◈", "▼", "⬢"];

const MARKER_COLORS: [Color; SECTION_COUNT] = [
    Color { r: 0.86, g: 0.27, b: 0.25, a: 1.0 },
    Color { r: 0.90, g: 0.53, b: 0.19, a: 1.0 },
    Color { r: 0.89, g: 0.75, b: 0.22, a: 1.0 },
    Color { r: 0.45, g: 0.73, b: 0.28, a: 1.0 },
    Color { r: 0.20, g: 0.62, b: 0.51, a: 1.0 },
    Color { r: 0.22, g: 0.56, b: 0.79, a: 1.0 },
    Color { r: 0.32, g: 0.40, b: 0.82, a: 1.0 },
    Color { r: 0.56, g: 0.36, b: 0.77, a: 1.0 },
    Color { r: 0.79, g: 0.34, b: 0.62, a: 1.0 },
    Color { r: 0.55, g: 0.43, b: 0.36, a: 1.0 },
];

impl MarkerKind {
    /// Parse the launch argument form. Mirrors the kebab-case config names.
    pub fn from_arg(raw: &str) -> Option<MarkerKind> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "numbers" => Some(MarkerKind::Numbers),
            "letters" => Some(MarkerKind::Letters),
            "icons" => Some(MarkerKind::Icons),
            "color-icons" => Some(MarkerKind::ColorIcons),
            "none" => Some(MarkerKind::None),
            _ => None,
        }
    }

    pub fn is_none(self) -> bool {
        matches!(self, MarkerKind::None)
    }

    /// Label for the marker at `index`, or `None` when the rail is hidden.
    pub fn label(self, index: usize) -> Option<String> {
        let index = index.min(SECTION_COUNT - 1);
        match self {
            MarkerKind::Numbers => Some((index + 1).to_string()),
            MarkerKind::Letters => {
                Some(char::from(b'A' + index as u8).to_string())
            }
            MarkerKind::Icons | MarkerKind::ColorIcons => {
                Some(MARKER_GLYPHS[index].to_string())
            }
            MarkerKind::None => None,
        }
    }

    /// Accent color for the colored icon set; other kinds follow the theme.
    pub fn accent(self, index: usize) -> Option<Color> {
        match self {
            MarkerKind::ColorIcons => Some(MARKER_COLORS[index.min(SECTION_COUNT - 1)]),
            _ => None,
        }
    }
}

impl Default for MarkerKind {
    fn default() -> Self {
        MarkerKind::Numbers
    }
}

impl std::fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MarkerKind::Numbers => "Numbers",
            MarkerKind::Letters => "Letters",
            MarkerKind::Icons => "Icons",
            MarkerKind::ColorIcons => "Color Icons",
            MarkerKind::None => "Hidden",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_count_from_one() {
        assert_eq!(MarkerKind::Numbers.label(0).as_deref(), Some("1"));
        assert_eq!(MarkerKind::Numbers.label(9).as_deref(), Some("10"));
    }

    #[test]
    fn letters_run_from_a_to_j() {
        assert_eq!(MarkerKind::Letters.label(0).as_deref(), Some("A"));
        assert_eq!(MarkerKind::Letters.label(9).as_deref(), Some("J"));
    }

    #[test]
    fn out_of_range_index_clamps_instead_of_panicking() {
        assert_eq!(MarkerKind::Letters.label(99).as_deref(), Some("J"));
        assert!(MarkerKind::ColorIcons.accent(99).is_some());
    }

    #[test]
    fn hidden_rail_has_no_labels() {
        assert!(MarkerKind::None.label(3).is_none());
        assert!(MarkerKind::None.is_none());
    }

    #[test]
    fn only_the_colored_set_carries_accents() {
        assert!(MarkerKind::ColorIcons.accent(2).is_some());
        assert!(MarkerKind::Icons.accent(2).is_none());
        assert!(MarkerKind::Numbers.accent(2).is_none());
    }

    #[test]
    fn launch_argument_parsing_matches_config_names() {
        assert_eq!(MarkerKind::from_arg("color-icons"), Some(MarkerKind::ColorIcons));
        assert_eq!(MarkerKind::from_arg(" Numbers "), Some(MarkerKind::Numbers));
        assert_eq!(MarkerKind::from_arg("bogus"), None);
    }
}
