use super::super::messages::Message;
use super::super::state::App;
use iced::keyboard::{Key, Modifiers, key};

impl App {
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        let pressed = match key.as_ref() {
            Key::Named(key::Named::Space) => "space".to_string(),
            Key::Character(ch) => ch.to_ascii_lowercase(),
            _ => return None,
        };

        if Self::shortcut_matches(&self.config.key_safe_quit, "q", &pressed, modifiers) {
            Some(Message::SafeQuit)
        } else if Self::shortcut_matches(&self.config.key_toggle_theme, "t", &pressed, modifiers) {
            Some(Message::ToggleTheme)
        } else if Self::shortcut_matches(&self.config.key_next_section, "j", &pressed, modifiers) {
            Some(Message::NextSection)
        } else if Self::shortcut_matches(&self.config.key_prev_section, "k", &pressed, modifiers) {
            Some(Message::PreviousSection)
        } else {
            None
        }
    }

    pub(super) fn shortcut_matches(
        raw: &str,
        fallback: &str,
        pressed: &str,
        modifiers: Modifiers,
    ) -> bool {
        let normalized = {
            let trimmed = raw.trim().to_ascii_lowercase();
            if trimmed.is_empty() {
                fallback.to_string()
            } else {
                trimmed.replace("spacebar", "space")
            }
        };

        let mut required_ctrl = false;
        let mut required_alt = false;
        let mut required_logo = false;
        let mut required_shift = false;
        let mut required_key: Option<&str> = None;

        for token in normalized
            .split('+')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            match token {
                "ctrl" | "control" => required_ctrl = true,
                "alt" => required_alt = true,
                "logo" | "meta" | "super" | "cmd" | "command" => required_logo = true,
                "shift" => required_shift = true,
                key => required_key = Some(key),
            }
        }

        let required_key = required_key.unwrap_or(fallback);
        if pressed != required_key {
            return false;
        }

        modifiers.control() == required_ctrl
            && modifiers.alt() == required_alt
            && modifiers.logo() == required_logo
            && modifiers.shift() == required_shift
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::state::App;
    use iced::keyboard::Modifiers;

    #[test]
    fn plain_key_matches_without_modifiers() {
        assert!(App::shortcut_matches("j", "x", "j", Modifiers::empty()));
    }

    #[test]
    fn empty_binding_falls_back() {
        assert!(App::shortcut_matches("  ", "q", "q", Modifiers::empty()));
    }

    #[test]
    fn modified_binding_requires_exactly_those_modifiers() {
        assert!(App::shortcut_matches("ctrl+t", "x", "t", Modifiers::CTRL));
        assert!(!App::shortcut_matches("ctrl+t", "x", "t", Modifiers::empty()));
        assert!(!App::shortcut_matches(
            "ctrl+t",
            "x",
            "t",
            Modifiers::CTRL | Modifiers::SHIFT,
        ));
    }
}
