//! Skill Matrix - search employees by skill and add records from the terminal
//!
//! A single-screen TUI over an in-memory table:
//! - Case-insensitive search by employee name or skill set
//! - Modal form to append a record, with inline validation
//! - Logs to ~/.skillmatrix/logs so stdout stays with the TUI

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use skillmatrix_core::{paths, Config, ValidationFeedback};

mod tui;

/// Skill Matrix - employee skills table
#[derive(Parser)]
#[command(name = "skillmatrix")]
#[command(about = "Search employees by skill and add records", long_about = None)]
struct Cli {
    /// Config file (default: ~/.skillmatrix/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How a rejected form is reported: inline or silent
    #[arg(long)]
    validation: Option<ValidationFeedback>,
}

impl Cli {
    /// Config file with command line overrides applied
    fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::load_default()?,
        };
        if let Some(validation) = self.validation {
            config.ui.validation = validation;
        }
        Ok(config)
    }
}

/// Restore terminal state - called on panic or unexpected exit
fn restore_terminal() {
    use crossterm::{
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
}

/// Log to file (not stdout/stderr which would mess up the TUI)
fn init_logging(config: &Config) -> Result<()> {
    let log_dir = paths::logs_dir();
    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Failed to create log directory: {}", e);
    }

    #[cfg(unix)]
    let null_device = "/dev/null";
    #[cfg(windows)]
    let null_device = "NUL";

    let log_file = match std::fs::File::create(paths::log_file()) {
        Ok(file) => file,
        Err(e) => {
            eprintln!(
                "Failed to create log file: {}, falling back to null device",
                e
            );
            std::fs::File::create(null_device)
                .with_context(|| format!("Failed to open null device {}", null_device))?
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&config.logging.level))
        .with_context(|| format!("Invalid log level '{}'", config.logging.level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    init_logging(&config)?;

    // Set up panic hook to restore terminal state
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    // Config is read before the subscriber exists, so report it here
    let config_path = cli.config.clone().unwrap_or_else(paths::config_file);
    tracing::info!(
        config = %config_path.display(),
        config_found = config_path.exists(),
        validation = %config.ui.validation,
        "Starting skill matrix"
    );

    let mut app = tui::App::new(&config);
    app.run().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_validation_override() {
        let cli = Cli::parse_from(["skillmatrix", "--validation", "silent"]);
        assert_eq!(cli.validation, Some(ValidationFeedback::Silent));
        assert!(Cli::try_parse_from(["skillmatrix", "--validation", "loud"]).is_err());
    }

    #[test]
    fn test_load_config_applies_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\nvalidation = \"inline\"\n").unwrap();

        let path_arg = path.to_string_lossy().to_string();
        let cli = Cli::parse_from([
            "skillmatrix",
            "--config",
            path_arg.as_str(),
            "--validation",
            "silent",
        ]);
        let config = cli.load_config().unwrap();
        assert_eq!(config.ui.validation, ValidationFeedback::Silent);

        let cli = Cli::parse_from(["skillmatrix", "--config", path_arg.as_str()]);
        let config = cli.load_config().unwrap();
        assert_eq!(config.ui.validation, ValidationFeedback::Inline);
    }
}
