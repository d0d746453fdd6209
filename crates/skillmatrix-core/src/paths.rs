//! Centralized path utilities
//!
//! All application paths in one place for consistency

use std::path::PathBuf;

use crate::constants::ui;

/// Get the skillmatrix config directory (~/.skillmatrix)
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(ui::CONFIG_DIR_NAME)
}

/// Get the default config file (~/.skillmatrix/config.toml)
pub fn config_file() -> PathBuf {
    config_dir().join(ui::CONFIG_FILE_NAME)
}

/// Get the logs directory (~/.skillmatrix/logs)
pub fn logs_dir() -> PathBuf {
    config_dir().join("logs")
}

/// Get the log file (~/.skillmatrix/logs/skillmatrix.log)
pub fn log_file() -> PathBuf {
    logs_dir().join(ui::LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_nest_under_config_dir() {
        let root = config_dir();
        assert!(root.ends_with(ui::CONFIG_DIR_NAME));
        assert!(config_file().starts_with(&root));
        assert!(log_file().starts_with(logs_dir()));
        assert!(logs_dir().starts_with(&root));
    }
}
