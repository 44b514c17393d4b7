//! Core data types for the Folio ledger.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Asset class of an investment.
///
/// The known set is parsed case-insensitively. Any other non-empty label is
/// kept verbatim as [`AssetType::Custom`] so records written by other tools
/// survive a load/save cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AssetType {
    Stock,
    Etf,
    Crypto,
    Bond,
    Other,
    #[default]
    Unknown,
    Custom(String),
}

impl AssetType {
    /// Asset types offered for selection by a presentation layer.
    pub const OFFERED: [AssetType; 5] = [
        AssetType::Stock,
        AssetType::Etf,
        AssetType::Crypto,
        AssetType::Bond,
        AssetType::Other,
    ];

    /// Parse a free-form label. Empty or blank input maps to `Unknown`.
    pub fn parse(label: &str) -> Self {
        let label = label.trim();
        match label.to_ascii_lowercase().as_str() {
            "" | "unknown" => AssetType::Unknown,
            "stock" => AssetType::Stock,
            "etf" => AssetType::Etf,
            "crypto" => AssetType::Crypto,
            "bond" => AssetType::Bond,
            "other" => AssetType::Other,
            _ => AssetType::Custom(label.to_string()),
        }
    }

    /// Canonical label, as persisted.
    pub fn as_str(&self) -> &str {
        match self {
            AssetType::Stock => "Stock",
            AssetType::Etf => "ETF",
            AssetType::Crypto => "Crypto",
            AssetType::Bond => "Bond",
            AssetType::Other => "Other",
            AssetType::Unknown => "Unknown",
            AssetType::Custom(label) => label,
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AssetType::parse(s))
    }
}

impl From<&str> for AssetType {
    fn from(label: &str) -> Self {
        AssetType::parse(label)
    }
}

impl Serialize for AssetType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AssetType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(AssetType::parse(&label))
    }
}

/// One ledger entry: a held quantity of a ticker bought at a price on a date.
///
/// Fields are private; values only change through the ledger, which runs
/// them through [`crate::validation`] first.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Investment {
    ticker: String,
    price: f64,
    quantity: u64,
    date: String,
    asset_type: AssetType,
}

impl Investment {
    /// Build a record from already-validated fields. The ticker is upper-cased.
    pub(crate) fn new(
        ticker: &str,
        price: f64,
        quantity: u64,
        date: &str,
        asset_type: AssetType,
    ) -> Self {
        Self {
            ticker: ticker.to_uppercase(),
            price,
            quantity,
            date: date.to_string(),
            asset_type,
        }
    }

    /// Upper-case ticker symbol.
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Buy price per unit.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Number of units held.
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Purchase date as entered (`YYYY-MM-DD` by convention).
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn asset_type(&self) -> &AssetType {
        &self.asset_type
    }

    /// Book value of this record (price × quantity).
    pub fn value(&self) -> f64 {
        self.price * self.quantity as f64
    }

    pub(crate) fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    pub(crate) fn set_quantity(&mut self, quantity: u64) {
        self.quantity = quantity;
    }

    pub(crate) fn set_asset_type(&mut self, asset_type: AssetType) {
        self.asset_type = asset_type;
    }

    pub(crate) fn set_identity(&mut self, ticker: &str, date: &str) {
        self.ticker = ticker.to_uppercase();
        self.date = date.to_string();
    }
}

impl fmt::Display for Investment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} shares at {} each on {}",
            self.ticker, self.asset_type, self.quantity, self.price, self.date
        )
    }
}

/// API response wrapper for success cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response.
    pub fn err(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error.into()),
        }
    }
}
