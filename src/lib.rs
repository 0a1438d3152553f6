//! Core library for the cex-spread-detector project.
//!
//! Fetches Binance and KuCoin tickers concurrently, persists one snapshot
//! per venue and reports price spreads above a threshold. Nothing is traded.

pub mod app;
pub mod arbitrage;
pub mod cex;
pub mod config;
pub mod errors;
pub mod models;
pub mod store;
pub mod utils;
