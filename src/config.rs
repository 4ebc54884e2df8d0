//! Configuration management
//!
//! Loads the optional TOML file at `$XDG_CONFIG_HOME/soundwrap/config.toml`.
//! When the file does not exist the built-in defaults are used and nothing is
//! written to disk.

use color_eyre::eyre::{self, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

// ============================================================================
// Defaults
// ============================================================================

const DEFAULT_WPCTL: &str = "wpctl";

const DEFAULT_CHOOSER: [&str; 9] = [
    "wofi",
    "--show=dmenu",
    "--hide-scroll",
    "--allow-markup",
    "--define=hide_search=true",
    "--location=top_right",
    "--width=600",
    "--height=200",
    "--xoffset=-60",
];

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

// ============================================================================
// Public Configuration Types
// ============================================================================

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub settings: Settings,
    pub commands: Commands,
}

/// Global settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Fallback log filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Send a desktop notification after switching
    pub notify: bool,
}

/// External programs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commands {
    /// `wpctl` executable used for `status` and `set-default`
    pub wpctl: String,
    /// Chooser command line; the menu is piped to its stdin
    pub chooser: Vec<String>,
}

// ============================================================================
// Config File Deserialization (TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    settings: SettingsFile,
    #[serde(default)]
    commands: CommandsFile,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    #[serde(default = "default_log_level")]
    log_level: String,
    #[serde(default)]
    notify: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CommandsFile {
    #[serde(default = "default_wpctl")]
    wpctl: String,
    #[serde(default = "default_chooser")]
    chooser: Vec<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_wpctl() -> String {
    DEFAULT_WPCTL.to_string()
}

fn default_chooser() -> Vec<String> {
    DEFAULT_CHOOSER.iter().map(ToString::to_string).collect()
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            notify: false,
        }
    }
}

impl Default for CommandsFile {
    fn default() -> Self {
        Self {
            wpctl: default_wpctl(),
            chooser: default_chooser(),
        }
    }
}

// ============================================================================
// Config Implementation
// ============================================================================

impl Default for Config {
    fn default() -> Self {
        Self::from_config_file(ConfigFile::default())
    }
}

impl Config {
    /// Load configuration from the default XDG config path
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read, parsed, or validated.
    pub fn load() -> Result<Self> {
        let Some(config_path) = Self::get_config_path() else {
            debug!("No config directory, using defaults");
            return Ok(Self::default());
        };

        if !config_path.exists() {
            debug!("No config at {:?}, using defaults", config_path);
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Load configuration from an explicit path
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {path:?}"))?;

        let config_file: ConfigFile = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config: {path:?}"))?;

        let config = Self::from_config_file(config_file);
        config
            .validate()
            .with_context(|| format!("Invalid config: {path:?}"))?;

        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    fn from_config_file(config_file: ConfigFile) -> Self {
        Self {
            settings: Settings {
                log_level: config_file.settings.log_level,
                notify: config_file.settings.notify,
            },
            commands: Commands {
                wpctl: config_file.commands.wpctl,
                chooser: config_file.commands.chooser,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.settings.log_level.as_str()) {
            eyre::bail!(
                "Invalid log_level '{}'. Must be: error, warn, info, debug, or trace",
                self.settings.log_level
            );
        }

        if self.commands.wpctl.trim().is_empty() {
            eyre::bail!("commands.wpctl must not be empty");
        }

        match self.commands.chooser.first() {
            None => eyre::bail!("commands.chooser must name a program"),
            Some(program) if program.trim().is_empty() => {
                eyre::bail!("commands.chooser must name a program")
            }
            Some(_) => {}
        }

        Ok(())
    }

    /// The XDG config path for soundwrap (the file may not exist)
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("soundwrap").join("config.toml"))
    }
}
