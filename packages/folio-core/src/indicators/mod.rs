//! Price-series analytics.
//!
//! Pure functions over a plain numeric slice; none of them mutate their input:
//!
//! - **EMA**: Exponential Moving Average
//! - **Z-score**: Population z-score normalisation
//! - **Min/Max**: Divide-and-conquer extremes, optionally resolved to dates

mod ema;
mod extrema;
mod zscore;

pub use ema::ema;
pub use extrema::{locate_extremes, recursive_min_max, Extremes};
pub use zscore::z_score_normalisation;

/// Round to 2 decimal places, half to even on the exact binary value.
///
/// `11.125` is exactly representable and rounds to `11.12`; `2.675` is stored
/// slightly below the tie and rounds to `2.67`.
pub(crate) fn round_to_cents(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let scaled = value * 100.0;
    // exact error of the multiplication, so a product that lands on .5 only
    // after rounding is not mistaken for a tie
    let residual = value.mul_add(100.0, -scaled);
    let floor = scaled.floor();
    let frac = scaled - floor;

    let cents = if frac > 0.5 || (frac == 0.5 && residual > 0.0) {
        floor + 1.0
    } else if frac < 0.5 || residual < 0.0 {
        floor
    } else {
        scaled.round_ties_even()
    };
    cents / 100.0
}
