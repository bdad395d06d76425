//! Configuration management for git-pick
//!
//! This module handles loading, parsing, and validation of the optional
//! configuration file. Every value has a default, so running without a file
//! is the normal case.

use crate::constants::{
    APP_NAME, DEFAULT_LIST_HEIGHT, DEFAULT_PROGRESS_INTERVAL_MS, DEFAULT_PROGRESS_STEP, LOCAL_CONFIG_FILE,
    MAX_LIST_HEIGHT, MIN_LIST_HEIGHT,
};
use crate::ui::style::{border_by_name, Theme};
use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub demo: DemoConfig,
    pub theme: ThemeConfig,
    pub logging: LoggingConfig,
    pub vcs: VcsConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Number of branch rows per page
    pub list_height: usize,
    /// Draw on the alternate screen so the shell is restored on exit
    pub alt_screen: bool,
}

/// Widget demo configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Milliseconds between progress bar steps
    pub progress_interval_ms: u64,
    /// Fraction added to the progress bar on every step
    pub progress_step: f64,
}

/// Colours and borders
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Text colour: a name ("blue"), an ANSI index ("69") or "#rrggbb"
    pub foreground: String,
    /// Border around the focused widget: plain, rounded, double, thick or hidden
    pub focused_border: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to the log file
    pub enabled: bool,
    /// Minimum level: error, warn, info, debug or trace
    pub level: String,
}

/// Version-control backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VcsConfig {
    /// git executable to run
    pub git_program: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            list_height: DEFAULT_LIST_HEIGHT,
            alt_screen: true,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            progress_interval_ms: DEFAULT_PROGRESS_INTERVAL_MS,
            progress_step: DEFAULT_PROGRESS_STEP,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            foreground: "reset".to_string(),
            focused_border: "plain".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl Default for VcsConfig {
    fn default() -> Self {
        Self {
            git_program: "git".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        log::LevelFilter::from_str(&self.level).map_err(|_| anyhow::anyhow!("Invalid log level '{}'", self.level))
    }
}

impl ThemeConfig {
    /// Build the runtime theme from the configured names.
    pub fn to_theme(&self) -> Result<Theme> {
        let foreground =
            Color::from_str(&self.foreground).map_err(|_| anyhow::anyhow!("Invalid colour '{}'", self.foreground))?;
        let focused_border = border_by_name(&self.focused_border)
            .with_context(|| format!("Unknown border style '{}'", self.focused_border))?;

        Ok(Theme {
            foreground,
            focused_border,
            ..Theme::default()
        })
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file();

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        Self::default_config_path().filter(|p| p.exists())
    }

    /// `<config_dir>/git-pick/config.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !(MIN_LIST_HEIGHT..=MAX_LIST_HEIGHT).contains(&self.ui.list_height) {
            anyhow::bail!(
                "list_height must be between {} and {} rows, got {}",
                MIN_LIST_HEIGHT,
                MAX_LIST_HEIGHT,
                self.ui.list_height
            );
        }

        if self.demo.progress_interval_ms == 0 {
            anyhow::bail!("progress_interval_ms must be greater than 0");
        }

        if !(self.demo.progress_step > 0.0 && self.demo.progress_step <= 1.0) {
            anyhow::bail!("progress_step must be in (0, 1], got {}", self.demo.progress_step);
        }

        self.theme.to_theme()?;
        self.logging.level_filter()?;

        if self.vcs.git_program.trim().is_empty() {
            anyhow::bail!("git_program cannot be empty");
        }

        Ok(())
    }
}
