//! Synthetic daily price paths.
//!
//! Used as analytics input when no real price history exists. Each day moves
//! by a uniformly drawn percentage in `[-max_pct_change, +max_pct_change]`,
//! floored at 0.01 and rounded to 2 decimals. The random source is injected so
//! tests can seed it.

use crate::indicators::round_to_cents;
use crate::validation::check_price;
use crate::{Error, Result};
use chrono::{Days, Local, NaiveDate};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Lowest price a simulated day can reach.
pub const PRICE_FLOOR: f64 = 0.01;

/// Default number of simulated days.
pub const DEFAULT_DAYS: usize = 30;

/// Default maximum daily move, in percent.
pub const DEFAULT_MAX_PCT_CHANGE: f64 = 2.0;

/// A dated price path in ascending date order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    pub dates: Vec<NaiveDate>,
    pub prices: Vec<f64>,
}

impl PriceSeries {
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Price on the final (most recent) day.
    pub fn last_price(&self) -> Option<f64> {
        self.prices.last().copied()
    }
}

/// Price path generator over an injectable random source.
#[derive(Debug)]
pub struct PriceSimulator<R> {
    rng: R,
}

impl PriceSimulator<StdRng> {
    /// Deterministic simulator; the same seed yields the same path.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl PriceSimulator<ThreadRng> {
    /// Simulator drawing from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> PriceSimulator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Simulate `days` prices ending today.
    pub fn simulate(
        &mut self,
        start_price: f64,
        days: usize,
        max_pct_change: f64,
    ) -> Result<PriceSeries> {
        self.simulate_ending(start_price, days, max_pct_change, Local::now().date_naive())
    }

    /// Simulate `days` prices on consecutive calendar dates ending at `end`.
    ///
    /// `prices[0]` is `start_price` as given; later prices are rounded to cents.
    pub fn simulate_ending(
        &mut self,
        start_price: f64,
        days: usize,
        max_pct_change: f64,
        end: NaiveDate,
    ) -> Result<PriceSeries> {
        validate_args(start_price, days, max_pct_change)?;

        let dates = (0..days)
            .map(|i| {
                end.checked_sub_days(Days::new((days - 1 - i) as u64))
                    .ok_or_else(|| {
                        Error::InvalidOperation(format!("{days} days before {end} is out of range"))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut prices = Vec::with_capacity(days);
        prices.push(start_price);
        for _ in 1..days {
            let pct = if max_pct_change > 0.0 {
                self.rng.gen_range(-max_pct_change..=max_pct_change)
            } else {
                0.0
            };
            let prev = prices[prices.len() - 1];
            let next = (prev * (1.0 + pct / 100.0)).max(PRICE_FLOOR);
            prices.push(round_to_cents(next));
        }

        tracing::trace!(start_price, days, max_pct_change, "simulated price series");
        Ok(PriceSeries { dates, prices })
    }
}

/// Simulate a price path ending today using the thread-local generator.
pub fn simulate(start_price: f64, days: usize, max_pct_change: f64) -> Result<PriceSeries> {
    PriceSimulator::from_entropy().simulate(start_price, days, max_pct_change)
}

fn validate_args(start_price: f64, days: usize, max_pct_change: f64) -> Result<()> {
    if !start_price.is_finite() {
        return Err(Error::InvalidPrice(
            "Start price must be a number greater than 0.".to_string(),
        ));
    }
    check_price(start_price)?;

    if days == 0 {
        return Err(Error::InvalidOperation(
            "Simulation needs at least one day.".to_string(),
        ));
    }
    if !max_pct_change.is_finite() || max_pct_change < 0.0 {
        return Err(Error::InvalidOperation(format!(
            "Maximum daily change must be a non-negative number, got {max_pct_change}"
        )));
    }
    Ok(())
}
