//! One scan: fetch both venues concurrently, then compare the persisted snapshots.

use anyhow::{Context, Result, anyhow};
use tracing::{error, info, warn};

use crate::{
    arbitrage::{SpreadConfig, SpreadReport, compare},
    cex::{PriceFeed, build_client},
    config::AppConfig,
    models::{Snapshot, Venue},
    store::SnapshotStore,
};

/// Venue A is the per-symbol list, venue B the all-tickers endpoint.
pub const VENUES: [Venue; 2] = [Venue::Binance, Venue::Kucoin];

/// Run a full scan and return the qualifying spreads.
///
/// The HTTP client lives only for the duration of this call and is released
/// on every path, including failures.
pub async fn run(config: &AppConfig) -> Result<Vec<SpreadReport>> {
    let client = build_client(config.proxy.as_deref()).context("building HTTP client")?;
    let feed = PriceFeed::new(client, SnapshotStore::new(&config.snapshot_dir));

    let outcome = scan(&feed, config).await;

    drop(feed);
    info!("[SHUTDOWN] HTTP client released");
    outcome
}

async fn scan(feed: &PriceFeed, config: &AppConfig) -> Result<Vec<SpreadReport>> {
    fetch_all(feed, config).await?;

    let snapshot_a = load_snapshot(feed.store(), VENUES[0]).await?;
    let snapshot_b = load_snapshot(feed.store(), VENUES[1]).await?;

    let reports = report_spreads(
        &snapshot_a,
        &snapshot_b,
        SpreadConfig {
            min_spread_percent: config.min_spread_percent,
        },
    );
    info!(
        found = reports.len(),
        min_spread_percent = config.min_spread_percent,
        "[SPREAD] comparison finished"
    );
    Ok(reports)
}

/// Spawn one fetch task per venue and wait for both.
///
/// Both tasks always run to completion. Every failure is logged; the first one
/// is returned.
pub async fn fetch_all(feed: &PriceFeed, config: &AppConfig) -> Result<()> {
    let [task_a, task_b] = VENUES.map(|venue| {
        let feed = feed.clone();
        let url = config.url_for(venue).to_string();
        let symbols = config.symbols.clone();
        tokio::spawn(async move {
            feed.fetch(venue, &url, &symbols)
                .await
                .with_context(|| format!("fetching {} prices from {url}", venue.name()))
        })
    });

    let (res_a, res_b) = futures::join!(task_a, task_b);

    let mut first_err: Option<anyhow::Error> = None;
    for (venue, joined) in VENUES.into_iter().zip([res_a, res_b]) {
        let res = joined
            .map_err(|e| anyhow!("{} fetch task aborted: {e}", venue.name()))
            .and_then(|r| r);
        if let Err(e) = res {
            if first_err.is_none() {
                first_err = Some(e);
            } else {
                error!(venue = %venue, "[CEX] {e:#}");
            }
        }
    }

    match first_err {
        Some(e) => Err(e.context("price fetch failed, skipping comparison")),
        None => Ok(()),
    }
}

async fn load_snapshot(store: &SnapshotStore, venue: Venue) -> Result<Snapshot> {
    let records = store
        .load(venue.file_name())
        .await
        .with_context(|| format!("loading {} snapshot", venue.name()))?;
    Ok(Snapshot::new(venue, records))
}

/// Drain the comparison, skipping pairs whose prices cannot be parsed.
pub fn report_spreads(a: &Snapshot, b: &Snapshot, config: SpreadConfig) -> Vec<SpreadReport> {
    compare(a, b, config)
        .filter_map(|res| match res {
            Ok(report) => Some(report),
            Err(e) => {
                warn!("[SPREAD] skipping pair: {e}");
                None
            }
        })
        .collect()
}
