//! User configuration, read from a JSON file at startup

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::env;
use crate::viewport::RenderOptions;

const MAX_TAB_WIDTH: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Columns a tab expands to
    pub tab_width: usize,
    /// Character drawn in each tab column
    pub tab_fill: char,
    /// How long a key read waits before the loop retries
    pub idle_timeout_ms: u64,
    pub status_line: StatusLineConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusLineConfig {
    /// Show cursor position and buffer counts on the right
    pub show_counts: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_width: 8,
            tab_fill: ' ',
            idle_timeout_ms: 100,
            status_line: StatusLineConfig { show_counts: true },
        }
    }
}

impl Config {
    /// `$BE_CONFIG`, else `config.json` in the platform config directory
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(env::CONFIG) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("", "", "be").map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load the configuration; a missing or broken file yields defaults
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            log::info!("No config directory, using defaults");
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring config {}: {:#}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load from an explicit path. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("Config file {} does not exist", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", path.display()));
            }
        };
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut config: Self = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        config.validate();
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Clamp out-of-range values instead of rejecting the file
    pub fn validate(&mut self) {
        if !(1..=MAX_TAB_WIDTH).contains(&self.tab_width) {
            log::warn!("tab_width {} out of range, clamping", self.tab_width);
            self.tab_width = self.tab_width.clamp(1, MAX_TAB_WIDTH);
        }
        if !(self.tab_fill.is_ascii_graphic() || self.tab_fill == ' ') {
            log::warn!("tab_fill {:?} is not printable ASCII", self.tab_fill);
            self.tab_fill = ' ';
        }
    }

    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            tab_width: self.tab_width,
            // validate() keeps this ASCII
            tab_fill: u8::try_from(self.tab_fill).unwrap_or(b' '),
        }
    }

    #[must_use]
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_millis(self.idle_timeout_ms)
    }
}
