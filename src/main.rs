use std::process::ExitCode;

use cex_spread_detector::{app, config::AppConfig, utils};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    utils::init_logging();

    let config = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Something went wrong while loading configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        symbols = ?config.symbols,
        min_spread_percent = config.min_spread_percent,
        proxy = config.proxy.is_some(),
        snapshot_dir = %config.snapshot_dir.display(),
        "[INIT] cex-spread-detector starting"
    );

    match app::run(&config).await {
        Ok(reports) => {
            utils::print_reports(&reports);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Something went wrong: {e:#}");
            ExitCode::FAILURE
        }
    }
}
