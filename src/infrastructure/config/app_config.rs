//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

const APP_NAME: &str = "cuidado";
const APP_QUALIFIER: &str = "app";
const APP_ORGANIZATION: &str = "cuidado";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Simulated-capability configuration.
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Timestamp format string (chrono format).
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// Notice popup duration in seconds.
    #[serde(default = "default_notice_duration")]
    pub notice_duration: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            notice_duration: default_notice_duration(),
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
        }
    }
}

/// Behavior of the simulated camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CameraBehavior {
    /// Permission granted, capture succeeds.
    #[default]
    Capture,
    /// Permission granted, capture cancelled.
    Cancel,
    /// Permission denied.
    Deny,
}

/// Simulated-capability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Fixed delay of the simulated password-reset call, in milliseconds.
    #[serde(default = "default_reset_delay_ms")]
    pub reset_delay_ms: u64,

    /// Scripted behavior of the simulated camera.
    #[serde(default)]
    pub camera: CameraBehavior,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            reset_delay_ms: default_reset_delay_ms(),
            camera: CameraBehavior::default(),
        }
    }
}

fn default_timestamp_format() -> String {
    "%d/%m/%Y %H:%M".to_string()
}

fn default_notice_duration() -> u64 {
    5
}

fn default_accent_color() -> String {
    "Cyan".to_string()
}

fn default_reset_delay_ms() -> u64 {
    1500
}

use super::args::CliArgs;

impl AppConfig {
    /// Loads configuration from the effective config file, falling back to
    /// defaults when the file is absent or unreadable.
    #[must_use]
    pub fn load(cli_path: Option<&PathBuf>) -> Self {
        let path = cli_path
            .cloned()
            .or_else(Self::default_config_path);

        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(mut config) => {
                    config.config = Some(path);
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
        if let Some(timestamp_format) = args.timestamp_format {
            self.ui.timestamp_format = timestamp_format;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default config file path.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        Self::default_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("cuidado.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_config_with_sections() {
        let toml_content = r##"
            log_level = "debug"

            [ui]
            timestamp_format = "%H:%M"
            notice_duration = 3

            [theme]
            accent_color = "#00BCD4"

            [simulation]
            reset_delay_ms = 500
            camera = "deny"
        "##;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.ui.timestamp_format, "%H:%M");
        assert_eq!(config.ui.notice_duration, 3);
        assert_eq!(config.theme.accent_color, "#00BCD4");
        assert_eq!(config.simulation.reset_delay_ms, 500);
        assert_eq!(config.simulation.camera, CameraBehavior::Deny);
    }

    #[test]
    fn default_config() {
        let config = AppConfig::default();

        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.ui.timestamp_format, "%d/%m/%Y %H:%M");
        assert_eq!(config.ui.notice_duration, 5);
        assert_eq!(config.simulation.reset_delay_ms, 1500);
        assert_eq!(config.simulation.camera, CameraBehavior::Capture);
    }
}
