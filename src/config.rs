//! Configuration loader and application settings.

use std::path::PathBuf;

use url::Url;

use crate::errors::{AppError, Result};
use crate::models::Venue;

/// Assets watched when `SYMBOLS` is not set.
pub const DEFAULT_SYMBOLS: [&str; 6] = ["BTC", "ETH", "ZRO", "STRK", "SOL", "ZK"];

pub const DEFAULT_MIN_SPREAD_PERCENT: f64 = 0.01;

/// Consolidated application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Optional proxy address (`host:port`, `http://..`, `socks5://..`).
    pub proxy: Option<String>,
    /// Binance `ticker/price` endpoint.
    pub binance_url: String,
    /// KuCoin `allTickers` endpoint.
    pub kucoin_url: String,
    /// Canonical assets to compare, e.g. "BTC".
    pub symbols: Vec<String>,
    /// Minimum spread in percent to report
    pub min_spread_percent: f64,
    /// Directory snapshot files are written to.
    pub snapshot_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            proxy: None,
            binance_url: Venue::Binance.default_url().to_string(),
            kucoin_url: Venue::Kucoin.default_url().to_string(),
            symbols: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            min_spread_percent: DEFAULT_MIN_SPREAD_PERCENT,
            snapshot_dir: PathBuf::from("."),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let non_empty = |key: &str| var(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let proxy = non_empty("PROXY");

        let binance_url = non_empty("BINANCE_PRICE_URL").unwrap_or(defaults.binance_url);
        let kucoin_url = non_empty("KUCOIN_PRICE_URL").unwrap_or(defaults.kucoin_url);
        Url::parse(&binance_url)?;
        Url::parse(&kucoin_url)?;

        let symbols = match non_empty("SYMBOLS") {
            Some(raw) => parse_symbols(&raw)?,
            None => defaults.symbols,
        };

        let min_spread_percent = match non_empty("MIN_SPREAD_PERCENT") {
            Some(raw) => raw.parse::<f64>().map_err(|e| {
                AppError::Config(format!("MIN_SPREAD_PERCENT={raw:?} is not a number: {e}"))
            })?,
            None => defaults.min_spread_percent,
        };
        if !min_spread_percent.is_finite() || min_spread_percent < 0.0 {
            return Err(AppError::Config(format!(
                "MIN_SPREAD_PERCENT must be a non-negative number, got {min_spread_percent}"
            )));
        }

        let snapshot_dir = non_empty("SNAPSHOT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.snapshot_dir);

        Ok(Self {
            proxy,
            binance_url,
            kucoin_url,
            symbols,
            min_spread_percent,
            snapshot_dir,
        })
    }

    pub fn url_for(&self, venue: Venue) -> &str {
        match venue {
            Venue::Binance => &self.binance_url,
            Venue::Kucoin => &self.kucoin_url,
        }
    }
}

/// `SYMBOLS=btc, eth,SOL` -> `["BTC", "ETH", "SOL"]`, duplicates dropped.
fn parse_symbols(raw: &str) -> Result<Vec<String>> {
    let mut out: Vec<String> = Vec::new();
    for sym in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let sym = sym.to_ascii_uppercase();
        if !out.contains(&sym) {
            out.push(sym);
        }
    }
    if out.is_empty() {
        return Err(AppError::Config("SYMBOLS contains no symbols".into()));
    }
    Ok(out)
}
