//! Configuration commands.

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

/// Dump the current configuration to stdout.
pub fn dump(config: &AppConfig) -> AppResult<()> {
    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| AppError::Config(format!("failed to serialize config: {}", e)))?;
    println!("# config.toml ({})", AppConfig::default_path().display());
    println!("{}", toml_str);
    Ok(())
}

/// Show the configuration file path.
pub fn path() -> AppResult<()> {
    println!("config: {}", AppConfig::default_path().display());
    Ok(())
}
