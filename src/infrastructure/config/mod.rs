//! Configuration.

mod app_config;
mod args;

pub use app_config::{AppConfig, CameraBehavior, LogLevel, SimulationConfig, ThemeConfig, UiConfig};
pub use args::CliArgs;
