//! Folio CLI - Command line interface for the investment ledger.
//!
//! Every command prints a JSON `ApiResponse` on stdout. Logs go to stderr and
//! are controlled with `RUST_LOG`.

use anyhow::Context;
use clap::{Parser, Subcommand};
use folio_core::{
    ema, locate_extremes, z_score_normalisation, ApiResponse, Error, FolioConfig, Investment,
    InvestmentUpdate, LedgerStore, PortfolioSummary, PriceSimulator,
};
use serde::Serialize;
use serde_json::json;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Folio investment ledger - positions, totals and simulated price analytics")]
#[command(version)]
struct Cli {
    /// Ledger CSV file (overrides config and FOLIO_LEDGER_FILE)
    #[arg(long, global = true)]
    ledger: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all investments in ledger order
    List,
    /// Add an investment
    Add {
        /// Ticker symbol (letters only)
        #[arg(short, long)]
        ticker: String,
        /// Buy price per unit
        #[arg(short, long)]
        price: String,
        /// Number of units
        #[arg(short = 'n', long)]
        quantity: String,
        /// Purchase date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,
        /// Asset type (Stock, ETF, Crypto, Bond, Other)
        #[arg(short, long, default_value = "Unknown")]
        asset_type: String,
    },
    /// Edit price, quantity or asset type of an investment
    Edit {
        /// Position in the ledger (0-based)
        #[arg(short, long, allow_negative_numbers = true)]
        index: isize,
        #[arg(short, long)]
        price: Option<String>,
        #[arg(short = 'n', long)]
        quantity: Option<String>,
        #[arg(short, long)]
        asset_type: Option<String>,
    },
    /// Correct the ticker and date of an investment
    Retag {
        #[arg(short, long, allow_negative_numbers = true)]
        index: isize,
        #[arg(short, long)]
        ticker: String,
        #[arg(short, long)]
        date: String,
    },
    /// Delete an investment
    Delete {
        #[arg(short, long, allow_negative_numbers = true)]
        index: isize,
    },
    /// Portfolio totals and allocation
    Summary {
        /// Current price as TICKER=PRICE (repeatable)
        #[arg(long = "price", value_parser = parse_current_price)]
        prices: Vec<(String, f64)>,
    },
    /// Simulate a price path from an investment's buy price
    Simulate {
        #[arg(short, long, allow_negative_numbers = true)]
        index: isize,
        /// Number of days (defaults to config)
        #[arg(long)]
        days: Option<usize>,
        /// Maximum daily move in percent (defaults to config)
        #[arg(long)]
        max_pct: Option<f64>,
        /// RNG seed for a reproducible path
        #[arg(long)]
        seed: Option<u64>,
        /// Include an EMA of the path
        #[arg(long)]
        ema: bool,
        /// EMA period (defaults to config)
        #[arg(long, allow_negative_numbers = true)]
        period: Option<isize>,
        /// Include z-score normalised prices
        #[arg(long)]
        normalise: bool,
        /// Include the lowest and highest price with their dates
        #[arg(long)]
        extremes: bool,
    },
}

fn parse_current_price(raw: &str) -> Result<(String, f64), String> {
    let (ticker, price) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected TICKER=PRICE, got '{raw}'"))?;
    let price: f64 = price
        .trim()
        .parse()
        .map_err(|_| format!("invalid price '{price}'"))?;
    Ok((ticker.trim().to_uppercase(), price))
}

fn main() -> anyhow::Result<()> {
    // Logs to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = FolioConfig::load().context("failed to load folio config")?;

    let mut store = match cli.ledger {
        Some(path) => LedgerStore::open(path),
        None => LedgerStore::from_config(&config),
    }
    .context("failed to open ledger")?;
    tracing::debug!(path = %store.path().display(), "ledger opened");

    let output = match cli.command {
        Commands::List => respond(Ok(json!({
            "investments": store.portfolio().list(),
        }))),
        Commands::Add {
            ticker,
            price,
            quantity,
            date,
            asset_type,
        } => mutate(&mut store, |store| {
            store
                .portfolio_mut()
                .add(&ticker, &price, &quantity, &date, &asset_type)
                .map(Investment::clone)
        }),
        Commands::Edit {
            index,
            price,
            quantity,
            asset_type,
        } => mutate(&mut store, |store| {
            let update = InvestmentUpdate {
                price,
                quantity,
                asset_type,
            };
            store
                .portfolio_mut()
                .edit(index, update)
                .map(Investment::clone)
        }),
        Commands::Retag {
            index,
            ticker,
            date,
        } => mutate(&mut store, |store| {
            store
                .portfolio_mut()
                .retag(index, &ticker, &date)
                .map(Investment::clone)
        }),
        Commands::Delete { index } => {
            mutate(&mut store, |store| store.portfolio_mut().delete(index))
        }
        Commands::Summary { prices } => {
            let current: HashMap<String, f64> = prices.into_iter().collect();
            respond(Ok(PortfolioSummary::from_portfolio(
                store.portfolio(),
                &current,
            )))
        }
        Commands::Simulate {
            index,
            days,
            max_pct,
            seed,
            ema: with_ema,
            period,
            normalise,
            extremes,
        } => {
            let ema_period = match (with_ema, period) {
                (false, _) => Ok(None),
                (true, None) => Ok(Some(config.analytics.ema_period)),
                (true, Some(period)) => checked_period(period).map(Some),
            };
            respond(ema_period.and_then(|ema_period| {
                let request = SimulateRequest {
                    index,
                    days: days.unwrap_or(config.simulation.days),
                    max_pct_change: max_pct.unwrap_or(config.simulation.max_pct_change),
                    seed: seed.or(config.simulation.seed),
                    ema_period,
                    normalise,
                    extremes,
                };
                handle_simulate(&store, &request)
            }))
        }
    };

    println!("{}", output);
    Ok(())
}

/// Apply a ledger mutation and persist the ledger if it succeeded.
fn mutate<T, F>(store: &mut LedgerStore, op: F) -> String
where
    T: Serialize,
    F: FnOnce(&mut LedgerStore) -> folio_core::Result<T>,
{
    let result = op(store).and_then(|value| {
        store.save()?;
        Ok(value)
    });
    respond(result)
}

/// EMA periods arrive as signed text so a non-positive one is reported like
/// any other analytics error instead of as a usage error.
fn checked_period(period: isize) -> folio_core::Result<usize> {
    usize::try_from(period)
        .ok()
        .filter(|&p| p > 0)
        .ok_or_else(|| {
            Error::InvalidPeriod(format!("EMA period must be greater than 0, got {period}."))
        })
}

fn respond<T: Serialize>(result: folio_core::Result<T>) -> String {
    let rendered = match result {
        Ok(data) => serde_json::to_string_pretty(&ApiResponse::ok(data)),
        Err(e) => serde_json::to_string_pretty(&ApiResponse::<()>::err(e.to_string())),
    };
    rendered.unwrap_or_else(|e| format!("{{\"ok\":false,\"error\":\"{}\"}}", e))
}

struct SimulateRequest {
    index: isize,
    days: usize,
    max_pct_change: f64,
    seed: Option<u64>,
    ema_period: Option<usize>,
    normalise: bool,
    extremes: bool,
}

fn handle_simulate(
    store: &LedgerStore,
    request: &SimulateRequest,
) -> folio_core::Result<serde_json::Value> {
    let investment = store.portfolio().get(request.index)?;

    let series = match request.seed {
        Some(seed) => PriceSimulator::seeded(seed).simulate(
            investment.price(),
            request.days,
            request.max_pct_change,
        ),
        None => PriceSimulator::from_entropy().simulate(
            investment.price(),
            request.days,
            request.max_pct_change,
        ),
    }?;

    let mut body = json!({
        "ticker": investment.ticker(),
        "dates": series.dates,
        "prices": series.prices,
    });

    if let Some(period) = request.ema_period {
        body["ema"] = json!({
            "period": period,
            "values": ema(&series.prices, period)?,
        });
    }
    if request.normalise {
        body["z_scores"] = json!(z_score_normalisation(&series.prices)?);
    }
    if request.extremes {
        body["extremes"] = json!(locate_extremes(&series.dates, &series.prices)?);
    }

    Ok(body)
}
