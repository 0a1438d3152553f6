//! CEX REST price feeds.
//!
//! Responsibilities:
//! • Issue one GET per venue against its public ticker endpoint.
//! • Normalize the venue's response shape into canonical `PriceRecord`s.
//! • Persist the resulting snapshot before handing it back.

pub mod binance;
pub mod kucoin;

use std::time::{Duration, Instant};

use reqwest::{Client, Proxy};
use tracing::{debug, info};

use crate::errors::{AppError, Result, TransportError};
use crate::models::{PriceRecord, Snapshot, Venue};
use crate::store::SnapshotStore;

/// Build the HTTP client shared by both feeds.
///
/// A proxy address without a scheme is treated as an HTTP proxy; `socks5://`
/// and `socks5h://` addresses are routed through SOCKS. Without one, requests
/// connect directly and `HTTP_PROXY`/`ALL_PROXY` in the environment are ignored.
pub fn build_client(proxy: Option<&str>) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(addr) = proxy {
        let addr = if addr.contains("://") {
            addr.to_string()
        } else {
            format!("http://{addr}")
        };
        let proxy = Proxy::all(&addr)
            .map_err(|e| AppError::Config(format!("invalid proxy {addr:?}: {e}")))?;
        builder = builder.proxy(proxy);
        info!(proxy = %addr, "[INIT] routing requests through proxy");
    } else {
        builder = builder.no_proxy();
    }
    builder.build().map_err(|e| TransportError::Request(e).into())
}

/// Fetches venue tickers and writes each venue's snapshot through the store.
#[derive(Debug, Clone)]
pub struct PriceFeed {
    client: Client,
    store: SnapshotStore,
}

impl PriceFeed {
    pub fn new(client: Client, store: SnapshotStore) -> Self {
        Self { client, store }
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    /// Fetch `venue`'s tickers from `url`, keep only `wanted` assets and persist them.
    pub async fn fetch(&self, venue: Venue, url: &str, wanted: &[String]) -> Result<Snapshot> {
        let (body, elapsed) = self.get_body(url).await?;
        info!(
            venue = %venue,
            "[CEX] request to {}: {:.3} seconds",
            venue.name().to_lowercase(),
            elapsed.as_secs_f64()
        );

        let records = match venue {
            Venue::Binance => binance::parse_prices(&body, wanted)?,
            Venue::Kucoin => kucoin::parse_prices(&body, wanted)?,
        };
        debug!(venue = %venue, matched = records.len(), wanted = wanted.len(), "[CEX] normalized");

        self.store.save(venue.file_name(), &records).await?;
        Ok(Snapshot::new(venue, records))
    }

    /// GET `url` and read the whole body, timing only the network part.
    async fn get_body(&self, url: &str) -> Result<(Vec<u8>, Duration)> {
        let start = Instant::now();
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status,
            }
            .into());
        }
        let body = resp.bytes().await?;
        Ok((body.to_vec(), start.elapsed()))
    }
}

/// For every wanted asset, take the first ticker whose venue symbol matches.
///
/// Output follows the order of `wanted`. Assets with no match are left out,
/// and tickers without a price count as no match.
pub(crate) fn select_first_match<'a, T: 'a>(
    venue: Venue,
    wanted: &[String],
    tickers: &'a [T],
    fields: impl Fn(&'a T) -> (&'a str, Option<&'a str>),
) -> Vec<PriceRecord> {
    wanted
        .iter()
        .filter_map(|asset| {
            let market = venue.market_symbol(asset);
            tickers.iter().find_map(|t| match fields(t) {
                (symbol, Some(price)) if symbol == market => {
                    Some(PriceRecord::new(asset.as_str(), price))
                }
                _ => None,
            })
        })
        .collect()
}
