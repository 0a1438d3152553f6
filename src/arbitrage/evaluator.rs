use super::types::{Leg, SpreadConfig, SpreadReport};
use crate::errors::{ParseError, Result};
use crate::models::{PriceRecord, Snapshot};

/// Percentage difference between two prices relative to their mean.
pub fn percent_spread(price_a: f64, price_b: f64) -> f64 {
    (price_a - price_b).abs() / ((price_a + price_b) / 2.0) * 100.0
}

/// Compare two snapshots symbol by symbol.
///
/// Yields a report for every symbol present in both snapshots whose spread is
/// at least `config.min_spread_percent`. A pair with a non-numeric price yields
/// `Err` for that pair only; iteration continues with the next pair.
pub fn compare<'a>(
    snapshot_a: &'a Snapshot,
    snapshot_b: &'a Snapshot,
    config: SpreadConfig,
) -> impl Iterator<Item = Result<SpreadReport>> + 'a {
    snapshot_a.records.iter().flat_map(move |a| {
        snapshot_b
            .records
            .iter()
            .filter(move |b| b.symbol == a.symbol)
            .filter_map(move |b| evaluate_pair(snapshot_a, a, snapshot_b, b, config).transpose())
    })
}

fn evaluate_pair(
    snapshot_a: &Snapshot,
    a: &PriceRecord,
    snapshot_b: &Snapshot,
    b: &PriceRecord,
    config: SpreadConfig,
) -> Result<Option<SpreadReport>> {
    let price_a = parse_price(a)?;
    let price_b = parse_price(b)?;

    let spread = percent_spread(price_a, price_b);
    // NaN when both prices are zero
    if spread.is_nan() || spread < config.min_spread_percent {
        return Ok(None);
    }

    let leg_a = Leg {
        venue: snapshot_a.venue,
        price: a.price.clone(),
    };
    let leg_b = Leg {
        venue: snapshot_b.venue,
        price: b.price.clone(),
    };
    // on a tie venue B is the buy side
    let (buy, sell) = if price_b > price_a {
        (leg_a, leg_b)
    } else {
        (leg_b, leg_a)
    };

    Ok(Some(SpreadReport {
        symbol: a.symbol.clone(),
        venue_a_price: a.price.clone(),
        venue_b_price: b.price.clone(),
        spread_percent: spread,
        buy,
        sell,
        profit: (price_a - price_b).abs(),
    }))
}

fn parse_price(record: &PriceRecord) -> Result<f64> {
    record.price.trim().parse::<f64>().map_err(|source| {
        ParseError::Price {
            symbol: record.symbol.clone(),
            value: record.price.clone(),
            source,
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Venue;

    fn snapshot(venue: Venue, rows: &[(&str, &str)]) -> Snapshot {
        Snapshot::new(
            venue,
            rows.iter().map(|(s, p)| PriceRecord::new(*s, *p)).collect(),
        )
    }

    fn cfg(min: f64) -> SpreadConfig {
        SpreadConfig {
            min_spread_percent: min,
        }
    }

    #[test]
    fn spread_is_symmetric() {
        let pairs = [(61000.0, 61010.0), (0.1234, 0.1301), (3000.0, 2500.5)];
        for (p1, p2) in pairs {
            assert_eq!(percent_spread(p1, p2), percent_spread(p2, p1));
        }
    }

    #[test]
    fn equal_prices_have_zero_spread() {
        for p in [0.0001, 1.0, 61000.0] {
            assert_eq!(percent_spread(p, p), 0.0);
        }
    }

    #[test]
    fn reports_btc_but_not_eth() {
        let a = snapshot(Venue::Binance, &[("BTC", "61000"), ("ETH", "3000")]);
        let b = snapshot(Venue::Kucoin, &[("BTC", "61010"), ("ETH", "3000")]);

        let reports: Vec<SpreadReport> = compare(&a, &b, cfg(0.01))
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(reports.len(), 1);
        let r = &reports[0];
        assert_eq!(r.symbol, "BTC");
        assert_eq!(r.buy.venue, Venue::Binance);
        assert_eq!(r.buy.price, "61000");
        assert_eq!(r.sell.venue, Venue::Kucoin);
        assert_eq!(r.sell.price, "61010");
        assert_eq!(format!("{:.4}", r.profit), "10.0000");
        assert!(r.to_string().ends_with("Profit: 10.0000$"));
    }

    #[test]
    fn higher_price_on_a_flips_direction() {
        let a = snapshot(Venue::Binance, &[("SOL", "151")]);
        let b = snapshot(Venue::Kucoin, &[("SOL", "150")]);

        let r = compare(&a, &b, cfg(0.01)).next().unwrap().unwrap();
        assert_eq!(r.buy, Leg { venue: Venue::Kucoin, price: "150".into() });
        assert_eq!(r.sell, Leg { venue: Venue::Binance, price: "151".into() });
        assert_eq!(r.venue_a_price, "151");
        assert_eq!(r.venue_b_price, "150");
    }

    #[test]
    fn equal_prices_buy_on_venue_b() {
        let a = snapshot(Venue::Binance, &[("ETH", "3000")]);
        let b = snapshot(Venue::Kucoin, &[("ETH", "3000")]);

        let r = compare(&a, &b, cfg(0.0)).next().unwrap().unwrap();
        assert_eq!(r.buy.venue, Venue::Kucoin);
        assert_eq!(r.sell.venue, Venue::Binance);
        assert_eq!(r.profit, 0.0);
    }

    #[test]
    fn one_sided_symbols_are_skipped() {
        let a = snapshot(Venue::Binance, &[("ZK", "0.15")]);
        let b = snapshot(Venue::Kucoin, &[("STRK", "0.40")]);

        assert_eq!(compare(&a, &b, cfg(0.0)).count(), 0);
    }

    #[test]
    fn threshold_is_inclusive() {
        let a = snapshot(Venue::Binance, &[("ETH", "100")]);
        let b = snapshot(Venue::Kucoin, &[("ETH", "100")]);

        assert_eq!(compare(&a, &b, cfg(0.0)).count(), 1);
        assert_eq!(compare(&a, &b, cfg(0.01)).count(), 0);
    }

    #[test]
    fn non_numeric_price_fails_only_that_pair() {
        let a = snapshot(Venue::Binance, &[("BTC", "n/a"), ("ETH", "3000")]);
        let b = snapshot(Venue::Kucoin, &[("BTC", "61010"), ("ETH", "3100")]);

        let results: Vec<_> = compare(&a, &b, cfg(0.01)).collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].as_ref().unwrap_err().is_parse());
        assert_eq!(results[1].as_ref().unwrap().symbol, "ETH");
    }
}
