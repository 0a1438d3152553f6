use serde::Deserialize;

use crate::errors::Result;
use crate::models::{PriceRecord, Venue};

use super::select_first_match;

/// One entry of `GET /api/v3/ticker/price`.
#[derive(Debug, Deserialize)]
struct PriceTicker {
    symbol: String,
    price: String,
}

/// Parse a `ticker/price` body (a bare JSON array) into canonical records.
pub fn parse_prices(body: &[u8], wanted: &[String]) -> Result<Vec<PriceRecord>> {
    let tickers: Vec<PriceTicker> = serde_json::from_slice(body)?;
    Ok(select_first_match(Venue::Binance, wanted, &tickers, |t| {
        (t.symbol.as_str(), Some(t.price.as_str()))
    }))
}
