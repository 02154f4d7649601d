//! Configuration management for Chirp
//!
//! Configuration lives in a TOML file. Every field has a default, so a
//! missing file or a partial file is fine:
//!
//! ```toml
//! [ui]
//! tick_rate_ms = 250
//! mouse_enabled = true
//!
//! [logging]
//! format = "json"
//! level = "debug"
//! file = "~/.local/share/chirp/chirp.log"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::logging::LogFormat;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub logging: LogSettings,
}

/// Terminal UI preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Use unicode symbols (false = ASCII fallback)
    pub unicode_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,

    /// Capture mouse clicks on startup?
    pub mouse_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub format: LogFormat,
    pub level: String,
    /// Log file; the TUI only logs when this is set
    pub file: Option<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        let mut config = Self {
            colors_enabled: true,
            unicode_enabled: true,
            tick_rate_ms: 100,
            mouse_enabled: false,
        };
        config.apply_env();
        config
    }
}

impl UiConfig {
    /// Apply `NO_COLOR`, `CHIRP_TUI_NO_COLOR` and `CHIRP_TUI_TICK_MS`
    ///
    /// Environment always wins over the config file.
    pub fn apply_env(&mut self) {
        if std::env::var("NO_COLOR").is_ok() || std::env::var("CHIRP_TUI_NO_COLOR").is_ok() {
            self.colors_enabled = false;
            self.unicode_enabled = false;
        }

        if let Some(tick) = std::env::var("CHIRP_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.tick_rate_ms = tick;
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LogSettings {
    /// Log file path with `~` expanded
    pub fn file_path(&self) -> Option<PathBuf> {
        self.file
            .as_ref()
            .map(|path| PathBuf::from(shellexpand::tilde(path).to_string()))
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file is not an error; defaults are used instead.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let mut config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        config.ui.apply_env();
        Ok(config)
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("CHIRP_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("chirp").join("config.toml"))
}

/// Resolve the data directory path following XDG Base Directory spec
pub fn resolve_data_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| ConfigError::MissingField("data directory".to_string()))?;

    Ok(data_dir.join("chirp"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn clear_env() {
        std::env::remove_var("NO_COLOR");
        std::env::remove_var("CHIRP_TUI_NO_COLOR");
        std::env::remove_var("CHIRP_TUI_TICK_MS");
        std::env::remove_var("CHIRP_CONFIG");
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::default();

        assert!(config.ui.colors_enabled);
        assert!(config.ui.unicode_enabled);
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert!(!config.ui.mouse_enabled);
        assert_eq!(config.logging.format, LogFormat::Text);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_none());
    }

    #[test]
    #[serial]
    fn test_partial_file_keeps_defaults() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui]\ntick_rate_ms = 250").unwrap();

        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert!(config.ui.colors_enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    #[serial]
    fn test_logging_section() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[logging]\nformat = \"json\"\nlevel = \"debug\"\nfile = \"/tmp/chirp.log\""
        )
        .unwrap();

        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file_path(), Some(PathBuf::from("/tmp/chirp.log")));
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui]\ncolors_enabled = true\ntick_rate_ms = 250").unwrap();

        std::env::set_var("NO_COLOR", "1");
        std::env::set_var("CHIRP_TUI_TICK_MS", "40");
        let config = Config::load_from_path(file.path()).unwrap();
        clear_env();

        assert!(!config.ui.colors_enabled);
        assert_eq!(config.ui.tick_rate_ms, 40);
    }

    #[test]
    #[serial]
    fn test_invalid_toml_is_parse_error() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui\ntick_rate_ms = ").unwrap();

        let err = Config::load_from_path(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    #[serial]
    fn test_missing_file_via_env_uses_defaults() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        std::env::set_var("CHIRP_CONFIG", &path);

        let config = Config::load();
        clear_env();

        assert_eq!(config.unwrap(), Config::default());
    }

    #[test]
    #[serial]
    fn test_resolve_config_path_from_env() {
        clear_env();
        std::env::set_var("CHIRP_CONFIG", "/etc/chirp.toml");
        let path = resolve_config_path().unwrap();
        clear_env();

        assert_eq!(path, PathBuf::from("/etc/chirp.toml"));
    }
}
