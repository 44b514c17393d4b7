//! Portfolio management module.
//!
//! Provides the investment ledger, its CSV persistence, and summary totals.

mod ledger;
pub mod store;
mod summary;

pub use ledger::{InvestmentUpdate, Portfolio};
pub use store::{load_csv, load_from_path, save_csv, save_to_path, LedgerStore};
pub use summary::PortfolioSummary;
