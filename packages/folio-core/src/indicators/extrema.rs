//! Divide-and-conquer minimum and maximum.

use crate::{Error, Result};
use serde::Serialize;

/// Find the minimum and maximum of `prices` by recursive halving.
///
/// Splits at `len / 2`, solves each half, and combines. Recursion depth is
/// `O(log n)`, so large inputs are safe.
pub fn recursive_min_max(prices: &[f64]) -> Result<(f64, f64)> {
    if prices.is_empty() {
        return Err(Error::NoData(
            "No prices provided for recursive min/max.".to_string(),
        ));
    }
    Ok(min_max_split(prices))
}

fn min_max_split(prices: &[f64]) -> (f64, f64) {
    if let [only] = prices {
        return (*only, *only);
    }

    let (left, right) = prices.split_at(prices.len() / 2);
    let (left_min, left_max) = min_max_split(left);
    let (right_min, right_max) = min_max_split(right);
    (left_min.min(right_min), left_max.max(right_max))
}

/// Extremes of a dated series, each paired with the first date it occurs on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extremes<D> {
    pub min: f64,
    pub min_date: D,
    pub max: f64,
    pub max_date: D,
}

/// Run [`recursive_min_max`] and resolve the dates of both extremes.
pub fn locate_extremes<D: Clone>(dates: &[D], prices: &[f64]) -> Result<Extremes<D>> {
    if dates.len() != prices.len() {
        return Err(Error::InvalidOperation(format!(
            "{} dates do not line up with {} prices",
            dates.len(),
            prices.len()
        )));
    }

    let (min, max) = recursive_min_max(prices)?;
    let date_of = |target: f64| {
        prices
            .iter()
            .position(|&p| p == target)
            .map(|idx| dates[idx].clone())
            .ok_or_else(|| Error::NoData("Extreme value not found in series.".to_string()))
    };

    Ok(Extremes {
        min,
        min_date: date_of(min)?,
        max,
        max_date: date_of(max)?,
    })
}
