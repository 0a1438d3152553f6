//! Shared data structures used throughout the application.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Quote asset every venue symbol is paired against.
pub const QUOTE_ASSET: &str = "USDT";

/// Exchange a snapshot was captured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Venue {
    /// Per-symbol ticker list, symbols like `BTCUSDT`.
    Binance,
    /// All-tickers endpoint, symbols like `BTC-USDT`.
    Kucoin,
}

impl Venue {
    pub fn name(&self) -> &'static str {
        match self {
            Venue::Binance => "Binance",
            Venue::Kucoin => "Kucoin",
        }
    }

    pub fn default_url(&self) -> &'static str {
        match self {
            Venue::Binance => "https://api.binance.com/api/v3/ticker/price",
            Venue::Kucoin => "https://api.kucoin.com/api/v1/market/allTickers",
        }
    }

    /// File the venue's snapshot is persisted under.
    pub fn file_name(&self) -> &'static str {
        match self {
            Venue::Binance => "binance_prices.json",
            Venue::Kucoin => "kucoin_prices.json",
        }
    }

    /// Translate a canonical asset (e.g. `BTC`) into the venue's market symbol.
    pub fn market_symbol(&self, canonical: &str) -> String {
        match self {
            Venue::Binance => format!("{canonical}{QUOTE_ASSET}"),
            Venue::Kucoin => format!("{canonical}-{QUOTE_ASSET}"),
        }
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalized price of one canonical asset. The price stays the venue's string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub symbol: String,
    pub price: String,
}

impl PriceRecord {
    pub fn new(symbol: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            price: price.into(),
        }
    }
}

/// Records captured for one venue in one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub venue: Venue,
    pub records: Vec<PriceRecord>,
}

impl Snapshot {
    pub fn new(venue: Venue, records: Vec<PriceRecord>) -> Self {
        Self { venue, records }
    }
}
