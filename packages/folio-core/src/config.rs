//! Configuration loaded from `~/.folio/config.toml`.
//!
//! ```toml
//! ledger_path = "/home/me/finance/investments.csv"
//!
//! [simulation]
//! days = 30
//! max_pct_change = 2.0
//! seed = 42
//!
//! [analytics]
//! ema_period = 12
//! ```
//!
//! Every key is optional. A missing file means all defaults.

use crate::simulation::{DEFAULT_DAYS, DEFAULT_MAX_PCT_CHANGE};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Ledger CSV location; `FOLIO_LEDGER_FILE` takes precedence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger_path: Option<PathBuf>,
    pub simulation: SimulationSettings,
    pub analytics: AnalyticsSettings,
}

/// Price simulator defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Number of simulated days
    pub days: usize,
    /// Maximum daily move in percent
    pub max_pct_change: f64,
    /// Fixed RNG seed; unset means a fresh path every run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            max_pct_change: DEFAULT_MAX_PCT_CHANGE,
            seed: None,
        }
    }
}

/// Analytics defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsSettings {
    pub ema_period: usize,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self { ema_period: 12 }
    }
}

impl FolioConfig {
    /// Get the config file path.
    ///
    /// Default path: `~/.folio/config.toml`
    /// Can be overridden with `FOLIO_CONFIG` environment variable.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = env::var("FOLIO_CONFIG") {
            return PathBuf::from(path);
        }

        directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(".folio/config.toml"))
            .unwrap_or_else(|| PathBuf::from("folio.toml"))
    }

    /// Load configuration from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::default_path())
    }

    /// Load configuration from a specific path. A missing file yields defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Parse and validate configuration text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the simulator or EMA would refuse later.
    pub fn validate(&self) -> Result<()> {
        if self.simulation.days == 0 {
            return Err(Error::InvalidOperation(
                "simulation.days must be at least 1".to_string(),
            ));
        }
        let max_pct = self.simulation.max_pct_change;
        if !max_pct.is_finite() || max_pct < 0.0 {
            return Err(Error::InvalidOperation(
                "simulation.max_pct_change must be a non-negative number".to_string(),
            ));
        }
        if self.analytics.ema_period == 0 {
            return Err(Error::InvalidPeriod(
                "analytics.ema_period must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
