//! Exponential Moving Average (EMA) indicator.

use super::round_to_cents;
use crate::{Error, Result};

/// Calculate Exponential Moving Average.
///
/// Uses the recurrence: EMA = (price - EMA_prev) * k + EMA_prev
/// where k = 2 / (period + 1), seeded with the first price and applied to
/// every element including the first. Each value is rounded to 2 decimals.
///
/// # Arguments
///
/// * `prices` - Price series, at least two points
/// * `period` - Lookback period (used to calculate smoothing factor)
///
/// # Returns
///
/// Vector of EMA values, same length as `prices`.
///
/// # Example
///
/// ```rust
/// use folio_core::indicators::ema;
///
/// let prices = vec![10.0, 11.0, 12.0];
/// let ema_values = ema(&prices, 3).unwrap();
///
/// // k = 0.5: 10.0, then 10.5, then 11.25
/// assert_eq!(ema_values, vec![10.0, 10.5, 11.25]);
/// ```
pub fn ema(prices: &[f64], period: usize) -> Result<Vec<f64>> {
    if prices.len() < 2 {
        return Err(Error::InsufficientData(
            "Not enough price data for EMA.".to_string(),
        ));
    }
    if period == 0 {
        return Err(Error::InvalidPeriod(
            "EMA period must be greater than 0.".to_string(),
        ));
    }

    let k = 2.0 / (period as f64 + 1.0);
    let mut ema_prev = prices[0];

    Ok(prices
        .iter()
        .map(|&p| {
            ema_prev = (p - ema_prev) * k + ema_prev;
            round_to_cents(ema_prev)
        })
        .collect())
}
