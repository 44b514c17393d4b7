//! Folio Core - Personal investment ledger and price-series analytics.
//!
//! This crate provides the core functionality behind the Folio investment tracker:
//!
//! - **Ledger**: Ordered investment records with validated add/edit/delete
//! - **Persistence**: CSV storage tolerant of legacy rows without an asset type
//! - **Analytics**: EMA, z-score normalisation, divide-and-conquer min/max
//! - **Simulation**: Synthetic daily price paths seeded from a buy price
//!
//! # Example
//!
//! ```rust
//! use folio_core::{ema, recursive_min_max, Portfolio};
//!
//! let mut portfolio = Portfolio::new();
//! portfolio.add("aapl", "150.0", "10", "2025-10-07", "Stock").unwrap();
//! assert_eq!(portfolio.list()[0].ticker(), "AAPL");
//! assert_eq!(portfolio.total_value(), 1500.0);
//!
//! let prices = [101.0, 99.5, 102.25, 100.0];
//! assert_eq!(recursive_min_max(&prices).unwrap(), (99.5, 102.25));
//! assert_eq!(ema(&prices, 3).unwrap().len(), 4);
//! ```

pub mod config;
pub mod indicators;
pub mod portfolio;
pub mod simulation;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use config::FolioConfig;
pub use types::{ApiResponse, AssetType, Investment};

// Re-export main functionality
pub use indicators::{ema, locate_extremes, recursive_min_max, z_score_normalisation, Extremes};
pub use portfolio::{InvestmentUpdate, LedgerStore, Portfolio, PortfolioSummary};
pub use simulation::{simulate, PriceSeries, PriceSimulator};

/// Error types for folio-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid ticker: {0}")]
    InvalidTicker(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Investment index {index} out of range (ledger holds {len})")]
    IndexOutOfRange { index: isize, len: usize },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("No data: {0}")]
    NoData(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

/// Discriminant of [`Error`] for callers that branch on the failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidTicker,
    InvalidPrice,
    InvalidQuantity,
    InvalidDate,
    IndexOutOfRange,
    InsufficientData,
    InvalidPeriod,
    NoData,
    InvalidOperation,
    Io,
    Csv,
    Config,
}

impl Error {
    /// The kind of this error, without its message.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidTicker(_) => ErrorKind::InvalidTicker,
            Error::InvalidPrice(_) => ErrorKind::InvalidPrice,
            Error::InvalidQuantity(_) => ErrorKind::InvalidQuantity,
            Error::InvalidDate(_) => ErrorKind::InvalidDate,
            Error::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Error::InsufficientData(_) => ErrorKind::InsufficientData,
            Error::InvalidPeriod(_) => ErrorKind::InvalidPeriod,
            Error::NoData(_) => ErrorKind::NoData,
            Error::InvalidOperation(_) => ErrorKind::InvalidOperation,
            Error::Io(_) => ErrorKind::Io,
            Error::Csv(_) => ErrorKind::Csv,
            Error::Config(_) => ErrorKind::Config,
        }
    }

    /// Whether this is one of the field validation failures raised by `add`/`edit`/`load`.
    pub fn is_validation(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InvalidTicker
                | ErrorKind::InvalidPrice
                | ErrorKind::InvalidQuantity
                | ErrorKind::InvalidDate
        )
    }
}

/// Result type for folio-core operations.
pub type Result<T> = std::result::Result<T, Error>;
