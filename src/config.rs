//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/seatalloc/seatalloc.toml`
//! 3. Explicit config file (`--config <path>`)
//! 4. Environment variables: `SEATALLOC_*` prefix (`__` separates sections)

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::{LodgePolicy, MonthDay, SearchPreference, YouthWindow};

/// Parterre seasonal rule configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ParterreConfig {
    /// Leading rows withheld during the youth window
    pub excluded_rows: usize,
    /// First day of the window (inclusive), `MM-DD`
    pub youth_window_start: MonthDay,
    /// First day after the window (exclusive), `MM-DD`
    pub youth_window_end: MonthDay,
}

impl Default for ParterreConfig {
    fn default() -> Self {
        let window = YouthWindow::default();
        Self {
            excluded_rows: window.excluded_rows,
            youth_window_start: window.start,
            youth_window_end: window.end,
        }
    }
}

impl ParterreConfig {
    pub fn youth_window(&self) -> YouthWindow {
        YouthWindow {
            start: self.youth_window_start,
            end: self.youth_window_end,
            excluded_rows: self.excluded_rows,
        }
    }
}

/// Raw lodge config for intermediate parsing (None = not specified).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawLodgeConfig {
    pub max_party_size: Option<u32>,
    pub vip_reserve: Option<usize>,
}

/// Raw parterre config for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawParterreConfig {
    pub excluded_rows: Option<usize>,
    pub youth_window_start: Option<MonthDay>,
    pub youth_window_end: Option<MonthDay>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub venue_file: Option<PathBuf>,
    pub search_preference: Option<SearchPreference>,
    pub lodges: RawLodgeConfig,
    pub parterre: RawParterreConfig,
}

/// Unified configuration for seatalloc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    /// Venue snapshot (JSON); no file means an empty venue
    pub venue_file: Option<PathBuf>,
    /// Row scan order when a request does not specify one
    pub search_preference: SearchPreference,
    /// Lodge party cap and VIP reserve
    pub lodges: LodgePolicy,
    /// Seasonal parterre rule
    pub parterre: ParterreConfig,
}

/// Get the XDG config directory for seatalloc.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "seatalloc").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("seatalloc.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// Expand `~`, `$VAR` and `${VAR}` in a path-like value.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

impl Settings {
    /// Overlay wins field by field where specified.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            venue_file: overlay.venue_file.clone().or_else(|| self.venue_file.clone()),
            search_preference: overlay
                .search_preference
                .unwrap_or(self.search_preference),
            lodges: LodgePolicy {
                max_party_size: overlay
                    .lodges
                    .max_party_size
                    .unwrap_or(self.lodges.max_party_size),
                vip_reserve: overlay.lodges.vip_reserve.unwrap_or(self.lodges.vip_reserve),
            },
            parterre: ParterreConfig {
                excluded_rows: overlay
                    .parterre
                    .excluded_rows
                    .unwrap_or(self.parterre.excluded_rows),
                youth_window_start: overlay
                    .parterre
                    .youth_window_start
                    .unwrap_or(self.parterre.youth_window_start),
                youth_window_end: overlay
                    .parterre
                    .youth_window_end
                    .unwrap_or(self.parterre.youth_window_end),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist if given
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Explicit config file
        if let Some(path) = config_file {
            debug!("config file: {}", path.display());
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        // 4. Environment variables
        current = current.apply_env_overrides(None)?;

        current.expand_paths();
        Ok(current)
    }

    /// Apply SEATALLOC_* environment variables as explicit overrides.
    ///
    /// `vars` replaces the process environment when given.
    pub fn apply_env_overrides(
        mut self,
        vars: Option<HashMap<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let builder = Config::builder().add_source(
            Environment::with_prefix("SEATALLOC")
                .prefix_separator("_")
                .separator("__")
                .source(vars),
        );
        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("venue_file") {
            self.venue_file = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_string("search_preference") {
            self.search_preference = parse_value("search_preference", &val)?;
        }
        if let Ok(val) = config.get_string("lodges.max_party_size") {
            self.lodges.max_party_size = parse_value("lodges.max_party_size", &val)?;
        }
        if let Ok(val) = config.get_string("lodges.vip_reserve") {
            self.lodges.vip_reserve = parse_value("lodges.vip_reserve", &val)?;
        }
        if let Ok(val) = config.get_string("parterre.excluded_rows") {
            self.parterre.excluded_rows = parse_value("parterre.excluded_rows", &val)?;
        }
        if let Ok(val) = config.get_string("parterre.youth_window_start") {
            self.parterre.youth_window_start = parse_value("parterre.youth_window_start", &val)?;
        }
        if let Ok(val) = config.get_string("parterre.youth_window_end") {
            self.parterre.youth_window_end = parse_value("parterre.youth_window_end", &val)?;
        }

        Ok(self)
    }

    fn expand_paths(&mut self) {
        if let Some(path) = &self.venue_file {
            self.venue_file = Some(expand_path(path));
        }
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# seatalloc configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/seatalloc/seatalloc.toml
#   Explicit: --config <file>
#   Env:      SEATALLOC_* environment variables, e.g. SEATALLOC_LODGES__VIP_RESERVE=4

# Venue snapshot (JSON with "orchestra", "parterre" and "balcony" sections)
# venue_file = "~/venues/opera.json"

# Row scan order when a request does not choose: "back-to-front" or "front-to-back"
# search_preference = "back-to-front"

[lodges]
# Largest party a lodge hosts
# max_party_size = 3

# Lodges kept for VIPs; lodge search needs more free lodges than this
# vip_reserve = 4

[parterre]
# Front rows withheld during the youth window
# excluded_rows = 3

# Window bounds as MM-DD, start inclusive, end exclusive
# youth_window_start = "06-21"
# youth_window_end = "09-21"
"#
        .to_string()
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T, ApplicationError>
where
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e| ApplicationError::Config {
        message: format!("{key}: {e}"),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
