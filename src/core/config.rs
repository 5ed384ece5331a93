//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.tempo/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::Screen;
use crate::core::theme::Theme;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TempoConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub timer: TimerConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub theme: Option<Theme>,
    pub start_screen: Option<Screen>,
}

/// Initial text of the Timer screen's input fields.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TimerConfig {
    pub hours: Option<String>,
    pub minutes: Option<String>,
    pub seconds: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TIMER_FIELD: &str = "0";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub theme: Theme,
    pub start_screen: Screen,
    pub timer_hours: String,
    pub timer_minutes: String,
    pub timer_seconds: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with_env(&TempoConfig::default(), None, None, None, None)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.tempo/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".tempo").join("config.toml"))
}

/// Load config from `~/.tempo/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TempoConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TempoConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TempoConfig::default());
        }
    };
    load_config_from(&path)
}

/// Load config from an explicit path (see `load_config`).
pub fn load_config_from(path: &Path) -> Result<TempoConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(TempoConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: TempoConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Tempo Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# theme = "light"                # "light" or "dark" (env: TEMPO_THEME)
# start_screen = "stopwatch"     # "stopwatch", "timer" or "settings" (env: TEMPO_SCREEN)

# [timer]
# Initial contents of the Timer screen's input fields
# hours = "0"
# minutes = "5"
# seconds = "0"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_theme` and `cli_screen` are from CLI flags (None = not specified).
pub fn resolve(
    config: &TempoConfig,
    cli_theme: Option<Theme>,
    cli_screen: Option<Screen>,
) -> ResolvedConfig {
    let env_theme = std::env::var("TEMPO_THEME").ok();
    let env_screen = std::env::var("TEMPO_SCREEN").ok();
    resolve_with_env(
        config,
        cli_theme,
        cli_screen,
        env_theme.as_deref(),
        env_screen.as_deref(),
    )
}

/// `resolve` with the environment passed in explicitly.
fn resolve_with_env(
    config: &TempoConfig,
    cli_theme: Option<Theme>,
    cli_screen: Option<Screen>,
    env_theme: Option<&str>,
    env_screen: Option<&str>,
) -> ResolvedConfig {
    // Theme: CLI → env → config → default
    let theme = cli_theme
        .or_else(|| env_theme.and_then(|s| parse_env_enum("TEMPO_THEME", s)))
        .or(config.general.theme)
        .unwrap_or_default();

    // Start screen: CLI → env → config → default
    let start_screen = cli_screen
        .or_else(|| env_screen.and_then(|s| parse_env_enum("TEMPO_SCREEN", s)))
        .or(config.general.start_screen)
        .unwrap_or_default();

    let field = |value: &Option<String>| {
        value
            .clone()
            .unwrap_or_else(|| DEFAULT_TIMER_FIELD.to_string())
    };

    ResolvedConfig {
        theme,
        start_screen,
        timer_hours: field(&config.timer.hours),
        timer_minutes: field(&config.timer.minutes),
        timer_seconds: field(&config.timer.seconds),
    }
}

/// Parse a clap value enum from an env var, warning (and ignoring it) if invalid.
fn parse_env_enum<T: clap::ValueEnum>(name: &str, value: &str) -> Option<T> {
    match T::from_str(value.trim(), true) {
        Ok(v) => Some(v),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", name, value, e);
            None
        }
    }
}
