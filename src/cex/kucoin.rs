use serde::Deserialize;

use crate::errors::Result;
use crate::models::{PriceRecord, Venue};

use super::select_first_match;

#[derive(Debug, Deserialize)]
struct AllTickersResponse {
    data: AllTickersData,
}

#[derive(Debug, Deserialize)]
struct AllTickersData {
    ticker: Vec<Ticker>,
}

#[derive(Debug, Deserialize)]
struct Ticker {
    symbol: String,
    // null for markets without recent trades
    last: Option<String>,
}

/// Parse a `market/allTickers` body (`data.ticker[]`) into canonical records.
pub fn parse_prices(body: &[u8], wanted: &[String]) -> Result<Vec<PriceRecord>> {
    let resp: AllTickersResponse = serde_json::from_slice(body)?;
    Ok(select_first_match(
        Venue::Kucoin,
        wanted,
        &resp.data.ticker,
        |t| (t.symbol.as_str(), t.last.as_deref()),
    ))
}
