//! Configuration types for cardq.
//!
//! [`Config::load`] reads `~/.config/cardq/config.toml` layered over the
//! built-in defaults; a missing file is not an error. [`Config::load_from`]
//! does the same for an explicit path. [`Config::defaults`] returns the
//! defaults without touching the filesystem (useful in tests).

use crate::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[search]
max_depth              = 32
extra_ignored_prefixes = []
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
}

/// `[search]` section of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    /// Deepest nesting of groups and field values that is still expanded.
    /// Anything deeper is kept as a plain term.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Field prefixes dropped in addition to the built-in ignore set.
    /// Compared case-insensitively.
    #[serde(default)]
    pub extra_ignored_prefixes: Vec<String>,
}

fn default_max_depth() -> usize { 32 }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            extra_ignored_prefixes: Vec::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/cardq/config.toml`, layered on top of the
    /// built-in defaults.
    pub fn load() -> Result<Self> {
        Self::layered(&config_path(), false)
    }

    /// Load from an explicit file, layered on top of the built-in defaults.
    /// The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        Self::layered(path, true)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    fn layered(path: &Path, required: bool) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(required))
            .build()?
            .try_deserialize()?;
        Ok(cfg)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    config_path_from(
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

fn config_path_from(xdg_config_home: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    xdg_config_home
        .unwrap_or_else(|| home.unwrap_or_else(|| PathBuf::from(".")).join(".config"))
        .join("cardq")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
