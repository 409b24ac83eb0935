use std::io::IsTerminal;

use crate::{error::LoggerError, format::LoggerFormat, level::LoggerLevel};

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    pub level: LoggerLevel,
    pub with_targets: bool,
    pub use_color: bool,
}

impl LoggerConfig {
    /// Read `{prefix}_LOG_FORMAT` and `{prefix}_LOG_LEVEL`, keeping defaults for unset keys.
    pub fn from_env(prefix: &str) -> Result<Self, LoggerError> {
        Self::from_lookup(prefix, |key| std::env::var(key).ok())
    }

    fn from_lookup<F>(prefix: &str, lookup: F) -> Result<Self, LoggerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(format) = lookup(&format!("{prefix}_LOG_FORMAT")) {
            cfg.format = format.parse()?;
        }
        if let Some(level) = lookup(&format!("{prefix}_LOG_LEVEL")) {
            cfg.level = LoggerLevel::new(level)?;
        }
        Ok(cfg)
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            with_targets: true,
            use_color: std::io::stdout().is_terminal(),
        }
    }
}
