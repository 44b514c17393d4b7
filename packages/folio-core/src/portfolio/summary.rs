//! Portfolio totals and allocation.

use crate::portfolio::Portfolio;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Portfolio summary as shown alongside the ledger table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Number of records
    pub position_count: usize,
    /// Sum of price × quantity
    pub total_value: f64,
    /// Unrealised profit; zero unless current prices were supplied
    pub total_profit: f64,
    /// Share of total value per asset type, in order of first appearance
    pub allocation: Vec<(String, f64)>,
}

impl PortfolioSummary {
    /// Summarise a portfolio against current prices keyed by upper-case ticker.
    pub fn from_portfolio(portfolio: &Portfolio, current_prices: &HashMap<String, f64>) -> Self {
        Self {
            position_count: portfolio.len(),
            total_value: portfolio.total_value(),
            total_profit: portfolio.total_profit(current_prices),
            allocation: Self::allocation(portfolio),
        }
    }

    /// Weight of each asset type in the portfolio's total value.
    pub fn allocation(portfolio: &Portfolio) -> Vec<(String, f64)> {
        let total_value = portfolio.total_value();
        if total_value <= 0.0 {
            return Vec::new();
        }

        let mut weights: Vec<(String, f64)> = Vec::new();
        for inv in portfolio {
            let label = inv.asset_type().as_str();
            let share = inv.value() / total_value;
            match weights.iter_mut().find(|(name, _)| name == label) {
                Some((_, weight)) => *weight += share,
                None => weights.push((label.to_string(), share)),
            }
        }
        weights
    }
}
