//! CSV persistence for the investment ledger.
//!
//! File layout: a header row `ticker,price,quantity,date,asset_type` followed
//! by one row per investment in ledger order. Columns are read by name, and a
//! missing `asset_type` column (files written before asset types existed)
//! loads as `Unknown`.

use crate::config::FolioConfig;
use crate::portfolio::Portfolio;
use crate::Result;
use serde::Deserialize;
use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Column order written by [`save_csv`].
pub const HEADER: [&str; 5] = ["ticker", "price", "quantity", "date", "asset_type"];

/// A persisted row, kept as raw text so loading re-runs ledger validation.
#[derive(Debug, Deserialize)]
struct LedgerRow {
    ticker: String,
    price: String,
    quantity: String,
    date: String,
    #[serde(default)]
    asset_type: Option<String>,
}

/// Write the portfolio as CSV, header first.
pub fn save_csv<W: Write>(portfolio: &Portfolio, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;

    for inv in portfolio {
        wtr.write_record([
            inv.ticker(),
            format!("{:?}", inv.price()).as_str(),
            inv.quantity().to_string().as_str(),
            inv.date(),
            inv.asset_type().as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Read a portfolio from CSV, adding each row through [`Portfolio::add`].
///
/// The first row that fails validation aborts the load with that error.
pub fn load_csv<R: Read>(reader: R) -> Result<Portfolio> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut portfolio = Portfolio::new();

    for row in rdr.deserialize::<LedgerRow>() {
        let row = row?;
        portfolio.add(
            &row.ticker,
            &row.price,
            &row.quantity,
            &row.date,
            row.asset_type.as_deref().unwrap_or("Unknown"),
        )?;
    }

    Ok(portfolio)
}

/// Load a portfolio from `path`. A missing file is an empty portfolio.
pub fn load_from_path(path: &Path) -> Result<Portfolio> {
    let file = match fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no ledger file, starting empty");
            return Ok(Portfolio::new());
        }
        Err(e) => return Err(e.into()),
    };
    let portfolio = load_csv(file)?;
    tracing::debug!(path = %path.display(), rows = portfolio.len(), "ledger loaded");
    Ok(portfolio)
}

/// Overwrite `path` with the portfolio, creating parent directories as needed.
pub fn save_to_path(portfolio: &Portfolio, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut buf = Vec::new();
    save_csv(portfolio, &mut buf)?;
    fs::write(path, buf)?;
    tracing::debug!(path = %path.display(), rows = portfolio.len(), "ledger saved");
    Ok(())
}

/// A portfolio bound to the file it is loaded from and saved to.
#[derive(Debug)]
pub struct LedgerStore {
    /// Path to the ledger CSV file
    path: PathBuf,
    /// In-memory ledger state
    portfolio: Portfolio,
}

impl LedgerStore {
    /// Open the ledger at `path`. A missing file yields an empty ledger.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let portfolio = load_from_path(&path)?;
        Ok(Self { path, portfolio })
    }

    /// Open the ledger at the path resolved from `config`.
    pub fn from_config(config: &FolioConfig) -> Result<Self> {
        Self::open(Self::resolve_path(config))
    }

    /// Create an in-memory ledger (no persistence).
    pub fn in_memory() -> Self {
        Self {
            path: PathBuf::new(),
            portfolio: Portfolio::new(),
        }
    }

    /// Ledger path: `FOLIO_LEDGER_FILE`, then the configured path, then the default.
    pub fn resolve_path(config: &FolioConfig) -> PathBuf {
        if let Ok(path) = env::var("FOLIO_LEDGER_FILE") {
            return PathBuf::from(path);
        }

        config.ledger_path.clone().unwrap_or_else(Self::default_path)
    }

    /// Get the default ledger file path.
    ///
    /// Default path: `~/.folio/investments.csv`
    pub fn default_path() -> PathBuf {
        directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(".folio/investments.csv"))
            .unwrap_or_else(|| PathBuf::from("investments.csv"))
    }

    /// Get the current path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Save the ledger to disk, replacing the previous file.
    pub fn save(&self) -> Result<()> {
        // Skip if in-memory only
        if self.path.as_os_str().is_empty() {
            return Ok(());
        }
        save_to_path(&self.portfolio, &self.path)
    }

    /// Discard in-memory changes and reload from disk.
    pub fn reload(&mut self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Ok(());
        }
        self.portfolio = load_from_path(&self.path)?;
        Ok(())
    }

    /// Get a reference to the current portfolio.
    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Get a mutable reference to the current portfolio.
    pub fn portfolio_mut(&mut self) -> &mut Portfolio {
        &mut self.portfolio
    }
}
