//! Command-line arguments
//!
//! Flags override the config file, which overrides built-in defaults.

use clap::Parser;
use std::path::PathBuf;

use libchirp::config::{resolve_data_path, Config};
use libchirp::logging::{LogFormat, LoggingConfig};

#[derive(Parser, Debug)]
#[command(name = "chirp-tui")]
#[command(version, about = "Browse a mock social timeline in the terminal")]
#[command(long_about = r#"Browse a mock social timeline in the terminal.

Every timeline shows the same mock post. Reply, Retweet, Like and Share
buttons on the home timeline are reported in the status line and, when a
log file is configured, logged.

EXAMPLES:
    # Start with defaults
    chirp-tui

    # Click buttons with the mouse
    chirp-tui --mouse

    # Log every button press as JSON
    chirp-tui --log-file ~/chirp.log --log-format json

CONFIGURATION:
    $CHIRP_CONFIG or ~/.config/chirp/config.toml
"#)]
pub struct Args {
    /// Path to config file (default: $CHIRP_CONFIG, then ~/.config/chirp/config.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log format: text, json, or pretty
    #[arg(long, value_name = "FORMAT")]
    pub log_format: Option<LogFormat>,

    /// Debug-level logging (to the log file, or chirp-tui.log in the data directory)
    #[arg(short, long)]
    pub verbose: bool,

    /// Capture mouse clicks on startup
    #[arg(long)]
    pub mouse: bool,
}

impl Args {
    /// Load the config file named by the flags, or the default one
    ///
    /// An explicit `--config` must exist. Without it, `Config::load` resolves
    /// `CHIRP_CONFIG` and falls back to defaults when no file is there.
    pub fn load_config(&self) -> libchirp::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from_path(path)?,
            None => Config::load()?,
        };
        self.apply(&mut config);
        Ok(config)
    }

    /// Apply flag overrides on top of a loaded config
    pub fn apply(&self, config: &mut Config) {
        if let Some(ref file) = self.log_file {
            config.logging.file = Some(file.to_string_lossy().into_owned());
        }
        if let Some(format) = self.log_format {
            config.logging.format = format;
        }
        if self.mouse {
            config.ui.mouse_enabled = true;
        }
    }

    /// Logging setup for this run, if any
    ///
    /// The TUI owns stderr, so logging only happens with a log file. Verbose
    /// runs without one fall back to the data directory.
    pub fn logging(&self, config: &Config) -> libchirp::Result<Option<LoggingConfig>> {
        let file = match config.logging.file_path() {
            Some(file) => file,
            None if self.verbose => resolve_data_path()?.join("chirp-tui.log"),
            None => return Ok(None),
        };

        Ok(Some(
            LoggingConfig::new(config.logging.format, config.logging.level.clone(), self.verbose)
                .with_file(file),
        ))
    }
}
