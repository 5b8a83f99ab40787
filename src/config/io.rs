use super::models::AppConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Load configuration from `path`, falling back to defaults when the file is
/// missing or malformed. A bad config should never keep the viewer from
/// launching.
pub fn load_config(path: &Path) -> AppConfig {
    match fs::read_to_string(path) {
        Ok(raw) => match parse_config(&raw) {
            Ok(config) => {
                info!(path = %path.display(), "Loaded configuration");
                config
            }
            Err(err) => {
                warn!(path = %path.display(), "Invalid configuration, using defaults: {err:#}");
                AppConfig::default()
            }
        },
        Err(_) => {
            info!(path = %path.display(), "No configuration file, using defaults");
            AppConfig::default()
        }
    }
}

pub fn parse_config(raw: &str) -> Result<AppConfig> {
    toml::from_str(raw).context("Failed to parse configuration TOML")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeMode;
    use crate::markers::MarkerKind;

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_config("").expect("empty config should parse");
        assert_eq!(config.theme, ThemeMode::Day);
        assert_eq!(config.marker_kind, MarkerKind::Numbers);
        assert_eq!(config.indicator_inset, 0.0);
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let config = parse_config(
            "theme = \"night\"\nmarker_kind = \"color-icons\"\nindicator_width = 20.0\n",
        )
        .expect("partial config should parse");
        assert_eq!(config.theme, ThemeMode::Night);
        assert_eq!(config.marker_kind, MarkerKind::ColorIcons);
        assert_eq!(config.indicator_width, 20.0);
        // Untouched fields keep their defaults.
        assert_eq!(config.key_safe_quit, "q");
    }

    #[test]
    fn malformed_file_is_an_error_not_a_panic() {
        assert!(parse_config("theme = night").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config(Path::new("/nonexistent/conf/config.toml"));
        assert_eq!(config.window_width, 900.0);
    }
}
