//! Application configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/roomboard/config.toml` by default. CLI flags override file
//! values.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use roomboard_core::{FormatOptions, TimeFormat};

/// Configuration for the roomboard CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Debug mode.
    pub debug: bool,

    /// Booking backend settings.
    #[serde(default)]
    pub server: ServerSettings,

    /// Display settings.
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Booking backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Base URL of the booking backend.
    pub base_url: String,

    /// Request timeout in seconds.
    pub timeout: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            timeout: 5,
        }
    }
}

/// Display settings for board rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Time format for range labels.
    pub time_format: TimeFormat,

    /// strftime pattern for the date label.
    pub date_format: String,

    /// Text shown when a room has no bookings.
    pub no_bookings_text: String,

    /// Whether terminal output carries ANSI colors.
    pub color: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        let defaults = FormatOptions::default();
        Self {
            time_format: defaults.time_format,
            date_format: defaults.date_format,
            no_bookings_text: defaults.no_bookings_text,
            color: defaults.color,
        }
    }
}

impl DisplaySettings {
    /// Converts these settings into formatter options.
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            time_format: self.time_format,
            date_format: self.date_format.clone(),
            no_bookings_text: self.no_bookings_text.clone(),
            color: self.color,
        }
    }
}

impl AppConfig {
    /// Loads configuration from the default path.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| format!("failed to read config: {}", e))?;
            toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &PathBuf) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("failed to read config: {}", e))?;
        toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("roomboard")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.server.timeout, 5);
        assert_eq!(config.display.time_format, TimeFormat::H24);
        assert!(config.display.color);
        assert!(!config.debug);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[server]
base_url = "http://rooms.example.com"

[display]
time_format = "h12"
"#,
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.server.base_url, "http://rooms.example.com");
        assert_eq!(config.server.timeout, 5);
        assert_eq!(config.display.time_format, TimeFormat::H12);
        assert_eq!(config.display.no_bookings_text, "No bookings.");
    }

    #[test]
    fn malformed_file_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "server = nonsense").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(err.contains("failed to parse config"));
    }

    #[test]
    fn toml_roundtrip() {
        let config = AppConfig::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.server.base_url, config.server.base_url);
        assert_eq!(parsed.display.date_format, config.display.date_format);
    }

    #[test]
    fn format_options_mirror_display_settings() {
        let settings = DisplaySettings {
            time_format: TimeFormat::H12,
            date_format: "%d.%m.%Y".to_string(),
            no_bookings_text: "Free all day.".to_string(),
            color: false,
        };
        let options = settings.format_options();
        assert_eq!(options.time_format, TimeFormat::H12);
        assert_eq!(options.date_format, "%d.%m.%Y");
        assert_eq!(options.no_bookings_text, "Free all day.");
        assert!(!options.color);
    }
}
