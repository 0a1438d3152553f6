use std::fmt;

use crate::models::Venue;

/// Configuration for spread evaluation
#[derive(Debug, Clone, Copy)]
pub struct SpreadConfig {
    /// Minimum spread, in percent, for a pair to be reported (inclusive).
    pub min_spread_percent: f64,
}

/// One side of a suggested trade.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    pub venue: Venue,
    pub price: String,
}

/// Spread found between the two venues for one asset
#[derive(Debug, Clone, PartialEq)]
pub struct SpreadReport {
    pub symbol: String,
    pub venue_a_price: String,
    pub venue_b_price: String,
    pub spread_percent: f64,
    pub buy: Leg,
    pub sell: Leg,
    /// Absolute price difference, no fees applied.
    pub profit: f64,
}

impl fmt::Display for SpreadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Found a {:.4}% spread on {} between {} and {}.",
            self.spread_percent, self.symbol, self.buy.venue, self.sell.venue
        )?;
        writeln!(f, "Buy on {}: {}$", self.buy.venue, self.buy.price)?;
        writeln!(f, "Sell on {}: {}$", self.sell.venue, self.sell.price)?;
        write!(f, "Profit: {:.4}$", self.profit)
    }
}
