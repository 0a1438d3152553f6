//! Local HTTP server shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

pub const BINANCE_PATH: &str = "/api/v3/ticker/price";
pub const KUCOIN_PATH: &str = "/api/v1/market/allTickers";

pub const BINANCE_BODY: &str = r#"[
    {"symbol":"ETHBTC","price":"0.04900000"},
    {"symbol":"BTCUSDT","price":"61000"},
    {"symbol":"XYZUSDT","price":"1.5"},
    {"symbol":"ETHUSDT","price":"3000"}
]"#;

pub const KUCOIN_BODY: &str = r#"{
    "code":"200000",
    "data":{"time":1718000000000,"ticker":[
        {"symbol":"BTC-USDT","last":"61010"},
        {"symbol":"ETH-USDT","last":"3000"},
        {"symbol":"SOL-USDT","last":"150"}
    ]}
}"#;

/// Minimal HTTP/1.1 server answering canned responses by request path.
pub struct MockVenueServer {
    pub base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl MockVenueServer {
    pub async fn start(routes: &[(&str, u16, &str)]) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind mock server");
        let base_url = format!("http://{}", listener.local_addr().expect("local addr"));
        let routes: Arc<HashMap<String, (u16, String)>> = Arc::new(
            routes
                .iter()
                .map(|(path, status, body)| (path.to_string(), (*status, body.to_string())))
                .collect(),
        );

        let handle = tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let routes = routes.clone();
                tokio::spawn(async move {
                    let _ = handle_connection(stream, &routes).await;
                });
            }
        });

        Self { base_url, handle }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for MockVenueServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn handle_connection(
    mut stream: TcpStream,
    routes: &HashMap<String, (u16, String)>,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut tmp = [0u8; 1024];
    loop {
        let n = stream.read(&mut tmp).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&tmp[..n]);
        if buf.windows(4).any(|w| w == b"\r\n\r\n") || buf.len() > 8192 {
            break;
        }
    }

    let request = String::from_utf8_lossy(&buf);
    let target = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/");
    // proxied requests carry the absolute URI
    let path = match target.strip_prefix("http://") {
        Some(rest) => rest.find('/').map_or("/", |i| &rest[i..]),
        None => target,
    };
    let (status, body) = routes
        .get(path)
        .cloned()
        .unwrap_or((404, "not found".to_string()));

    let response = format!(
        "HTTP/1.1 {status} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}
