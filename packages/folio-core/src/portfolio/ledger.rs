//! Ordered investment ledger with index-addressed edits.

use crate::types::{AssetType, Investment};
use crate::validation::{self, parse_price, parse_quantity};
use crate::{Error, Result};
use std::collections::HashMap;

/// Optional replacements applied by [`Portfolio::edit`].
///
/// Values are raw strings from the caller and are coerced with the same rules
/// as [`Portfolio::add`]. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct InvestmentUpdate {
    pub price: Option<String>,
    pub quantity: Option<String>,
    pub asset_type: Option<String>,
}

impl InvestmentUpdate {
    pub fn price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    pub fn asset_type(mut self, asset_type: impl Into<String>) -> Self {
        self.asset_type = Some(asset_type.into());
        self
    }
}

/// Ordered collection of investments. Insertion order is display and storage order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Portfolio {
    items: Vec<Investment>,
}

impl Portfolio {
    /// Create a new empty portfolio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the fields, append a new record and return it.
    ///
    /// An empty `asset_type` is stored as `Unknown`.
    pub fn add(
        &mut self,
        ticker: &str,
        price: &str,
        quantity: &str,
        date: &str,
        asset_type: &str,
    ) -> Result<&Investment> {
        let fields = validation::validate(ticker, price, quantity, date)?;
        let investment = Investment::new(
            &fields.ticker,
            fields.price,
            fields.quantity,
            &fields.date,
            AssetType::parse(asset_type),
        );
        self.items.push(investment);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Replace the provided financial fields of the record at `index`.
    ///
    /// All provided values are coerced before anything is written, so a failed
    /// edit leaves the record unchanged. Ticker and date are not re-validated
    /// here; use [`Portfolio::retag`] for those.
    pub fn edit(&mut self, index: isize, update: InvestmentUpdate) -> Result<&Investment> {
        let idx = self.checked_index(index)?;

        let price = update.price.as_deref().map(parse_price).transpose()?;
        let quantity = update.quantity.as_deref().map(parse_quantity).transpose()?;
        let asset_type = update.asset_type.as_deref().map(AssetType::parse);

        let investment = &mut self.items[idx];
        if let Some(price) = price {
            investment.set_price(price);
        }
        if let Some(quantity) = quantity {
            investment.set_quantity(quantity);
        }
        if let Some(asset_type) = asset_type {
            investment.set_asset_type(asset_type);
        }
        Ok(&self.items[idx])
    }

    /// Replace ticker and date of the record at `index`, validating both.
    pub fn retag(&mut self, index: isize, ticker: &str, date: &str) -> Result<&Investment> {
        let idx = self.checked_index(index)?;
        let ticker = validation::parse_ticker(ticker)?;
        let date = validation::parse_date(date)?;

        self.items[idx].set_identity(&ticker, &date);
        Ok(&self.items[idx])
    }

    /// Remove and return the record at `index`.
    pub fn delete(&mut self, index: isize) -> Result<Investment> {
        let idx = self.checked_index(index)?;
        Ok(self.items.remove(idx))
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[Investment] {
        &self.items
    }

    /// Get the record at `index`.
    pub fn get(&self, index: isize) -> Result<&Investment> {
        let idx = self.checked_index(index)?;
        Ok(&self.items[idx])
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of price × quantity over all records.
    pub fn total_value(&self) -> f64 {
        self.items.iter().map(Investment::value).sum()
    }

    /// Unrealised profit against current prices keyed by upper-case ticker.
    ///
    /// Records without a current price contribute nothing, so an empty map
    /// yields exactly zero.
    pub fn total_profit(&self, current_prices: &HashMap<String, f64>) -> f64 {
        self.items
            .iter()
            .filter_map(|inv| {
                current_prices
                    .get(inv.ticker())
                    .map(|current| (current - inv.price()) * inv.quantity() as f64)
            })
            .sum()
    }

    /// Remove all records.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn checked_index(&self, index: isize) -> Result<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&idx| idx < self.items.len())
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
    }
}

impl<'a> IntoIterator for &'a Portfolio {
    type Item = &'a Investment;
    type IntoIter = std::slice::Iter<'a, Investment>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn sample() -> Portfolio {
        let mut portfolio = Portfolio::new();
        portfolio
            .add("AAPL", "150.0", "10", "2025-10-07", "Stock")
            .unwrap();
        portfolio
            .add("TSLA", "250.0", "5", "2025-10-06", "Stock")
            .unwrap();
        portfolio
    }

    #[test]
    fn test_add_investment() {
        let mut portfolio = Portfolio::new();
        let inv = portfolio.add("btc", "42000", "1", "2025-03-01", "crypto").unwrap();

        assert_eq!(inv.ticker(), "BTC");
        assert_eq!(inv.price(), 42000.0);
        assert_eq!(inv.quantity(), 1);
        assert_eq!(inv.asset_type(), &AssetType::Crypto);
        assert_eq!(portfolio.len(), 1);
    }

    #[test]
    fn test_add_defaults_asset_type() {
        let mut portfolio = Portfolio::new();
        let inv = portfolio.add("VOO", "400", "2", "2025-03-01", "").unwrap();
        assert_eq!(inv.asset_type(), &AssetType::Unknown);
    }

    #[test]
    fn test_add_rejects_invalid_fields() {
        let mut portfolio = Portfolio::new();

        let cases = [
            (("AAPL1", "1", "1", "d"), ErrorKind::InvalidTicker),
            (("A$", "1", "1", "d"), ErrorKind::InvalidTicker),
            (("AAPL", "0", "1", "d"), ErrorKind::InvalidPrice),
            (("AAPL", "-5", "1", "d"), ErrorKind::InvalidPrice),
            (("AAPL", "1", "1.5", "d"), ErrorKind::InvalidQuantity),
            (("AAPL", "1", "-2", "d"), ErrorKind::InvalidQuantity),
            (("AAPL", "1", "1", ""), ErrorKind::InvalidDate),
        ];

        for ((ticker, price, quantity, date), kind) in cases {
            let err = portfolio.add(ticker, price, quantity, date, "Stock").unwrap_err();
            assert_eq!(err.kind(), kind);
        }
        assert!(portfolio.is_empty());
    }

    #[test]
    fn test_edit_investment() {
        let mut portfolio = sample();
        let inv = portfolio
            .edit(0, InvestmentUpdate::default().price("160.0"))
            .unwrap();

        assert_eq!(inv.price(), 160.0);
        assert_eq!(inv.quantity(), 10);
        assert_eq!(inv.asset_type(), &AssetType::Stock);

        let inv = portfolio
            .edit(1, InvestmentUpdate::default().quantity("7").asset_type("ETF"))
            .unwrap();
        assert_eq!(inv.price(), 250.0);
        assert_eq!(inv.quantity(), 7);
        assert_eq!(inv.asset_type(), &AssetType::Etf);
    }

    #[test]
    fn test_edit_is_all_or_nothing() {
        let mut portfolio = sample();
        let err = portfolio
            .edit(0, InvestmentUpdate::default().price("175").quantity("zero"))
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidQuantity);
        assert_eq!(portfolio.list()[0].price(), 150.0);
    }

    #[test]
    fn test_edit_leaves_identity_alone() {
        // edit never touches ticker or date, and so never re-checks them either
        let mut portfolio = sample();
        let inv = portfolio
            .edit(0, InvestmentUpdate::default().price("1"))
            .unwrap();
        assert_eq!(inv.ticker(), "AAPL");
        assert_eq!(inv.date(), "2025-10-07");
    }

    #[test]
    fn test_edit_out_of_range() {
        let mut portfolio = sample();
        let err = portfolio.edit(2, InvestmentUpdate::default()).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { index: 2, len: 2 }));

        let err = portfolio
            .edit(-1, InvestmentUpdate::default().price("1"))
            .unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { index: -1, len: 2 }));
        assert_eq!(portfolio, sample());
    }

    #[test]
    fn test_edit_rejects_non_positive_price() {
        let mut portfolio = sample();

        for bad in ["0", "-1", "abc", ""] {
            let err = portfolio
                .edit(0, InvestmentUpdate::default().price(bad))
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidPrice, "price {bad:?}");
        }
        for bad in ["0", "-3", "2.5"] {
            let err = portfolio
                .edit(1, InvestmentUpdate::default().quantity(bad))
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidQuantity, "quantity {bad:?}");
        }
        assert_eq!(portfolio, sample());
    }

    #[test]
    fn test_retag() {
        let mut portfolio = sample();
        let inv = portfolio.retag(1, "tsl", "2025-10-08").unwrap();
        assert_eq!(inv.ticker(), "TSL");
        assert_eq!(inv.date(), "2025-10-08");

        let err = portfolio.retag(1, "T5L", "2025-10-08").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidTicker);
        let err = portfolio.retag(1, "TSLA", "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDate);
        assert_eq!(portfolio.list()[1].ticker(), "TSL");
    }

    #[test]
    fn test_delete_investment() {
        let mut portfolio = sample();
        let removed = portfolio.delete(1).unwrap();

        assert_eq!(removed.ticker(), "TSLA");
        assert_eq!(portfolio.len(), 1);
        assert_eq!(portfolio.list()[0].ticker(), "AAPL");
    }

    #[test]
    fn test_delete_out_of_range() {
        let mut portfolio = sample();
        let len = portfolio.len() as isize;

        for index in [-1, len] {
            let err = portfolio.delete(index).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
        }
        assert_eq!(portfolio.len(), 2);

        let mut empty = Portfolio::new();
        assert!(empty.delete(0).is_err());
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut portfolio = sample();
        portfolio.add("GOOGL", "100", "1", "2025-10-01", "Stock").unwrap();

        let tickers: Vec<&str> = portfolio.list().iter().map(|i| i.ticker()).collect();
        assert_eq!(tickers, ["AAPL", "TSLA", "GOOGL"]);

        let iterated: Vec<&str> = (&portfolio).into_iter().map(|i| i.ticker()).collect();
        assert_eq!(iterated, tickers);
    }

    #[test]
    fn test_total_value() {
        let portfolio = sample();
        // 150 * 10 + 250 * 5
        assert_eq!(portfolio.total_value(), 2750.0);
        assert_eq!(Portfolio::new().total_value(), 0.0);
    }

    #[test]
    fn test_total_profit() {
        let portfolio = sample();
        assert_eq!(portfolio.total_profit(&HashMap::new()), 0.0);

        let prices = HashMap::from([("AAPL".to_string(), 175.0)]);
        // (175 - 150) * 10, TSLA has no current price
        assert_eq!(portfolio.total_profit(&prices), 250.0);
    }
}
