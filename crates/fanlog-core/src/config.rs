//! Configuration types for fanlog.
//!
//! [`Config::load`] reads `$XDG_CONFIG_HOME/fanlog/config.toml` (falling back
//! to `~/.config`). A missing file, or one without a `sinks` key, yields the
//! built-in default of a single console sink at `debug`. [`Config::defaults`]
//! returns the defaults without touching the filesystem (useful in tests).
//!
//! The config only describes which sinks to build; constructing them is left
//! to the crate that owns the concrete sink types.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::level::Level;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[[sinks]]
kind      = "console"
min_level = "debug"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_sinks")]
    pub sinks: Vec<SinkConfig>,
}

/// One `[[sinks]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SinkConfig {
    pub kind: SinkKind,
    /// Only used by sinks whose name is not fixed by their type.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_min_level")]
    pub min_level: Level,
}

fn default_min_level() -> Level { Level::Debug }

fn default_sinks() -> Vec<SinkConfig> {
    vec![SinkConfig {
        kind: SinkKind::Console,
        name: None,
        min_level: default_min_level(),
    }]
}

/// Which concrete sink a `[[sinks]]` entry builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    Console,
    Memory,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from the user config path. A missing file is not an error.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load from an explicit path.
    ///
    /// A file that declares `sinks` replaces the default sink list entirely;
    /// `sinks = []` yields a logger with no sinks.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        tracing::debug!(path = %path.display(), "loading config");
        let cfg: Self = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()?;
        tracing::debug!(sinks = cfg.sinks.len(), "config loaded");
        Ok(cfg)
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
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("fanlog")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
