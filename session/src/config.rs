//! Store configuration, loaded from TOML.
//!
//! ```toml
//! owner = "0x00000000000000000000000000000000000000aa"
//! clock = { fixed = 1700000000 }
//!
//! [journal]
//! path = "data/events.jsonl"
//! sync_on_append = false
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use cograph_core::{Identity, Timestamp};
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, FixedClock, SystemClock};
use crate::error::{SessionError, SessionResult};

/// Top-level store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Initial system owner.
    pub owner: Identity,

    #[serde(default)]
    pub journal: JournalConfig,

    #[serde(default)]
    pub clock: ClockConfig,
}

/// Where accepted events are recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalConfig {
    /// JSON-lines journal file. In-memory when absent.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Flush and fsync after every append.
    #[serde(default = "default_sync_on_append")]
    pub sync_on_append: bool,
}

fn default_sync_on_append() -> bool {
    true
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            path: None,
            sync_on_append: default_sync_on_append(),
        }
    }
}

/// Source of call timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockConfig {
    /// Wall clock seconds.
    #[default]
    System,
    /// A constant instant.
    Fixed(Timestamp),
}

impl ClockConfig {
    pub fn build(self) -> Arc<dyn Clock> {
        match self {
            ClockConfig::System => Arc::new(SystemClock),
            ClockConfig::Fixed(at) => Arc::new(FixedClock(at)),
        }
    }
}

impl StoreConfig {
    /// In-memory store owned by `owner`, using the wall clock.
    pub fn new(owner: Identity) -> Self {
        Self {
            owner,
            journal: JournalConfig::default(),
            clock: ClockConfig::default(),
        }
    }

    pub fn with_journal_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.journal.path = Some(path.into());
        self
    }

    pub fn with_clock(mut self, clock: ClockConfig) -> Self {
        self.clock = clock;
        self
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> SessionResult<Self> {
        let config: StoreConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> SessionResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| SessionError::config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> SessionResult<()> {
        if self.owner.is_zero() {
            return Err(SessionError::config("owner must be non-zero"));
        }
        Ok(())
    }
}
