use std::cmp::Ordering;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{ AppError, Result };
use crate::providers::{ MarketDataProvider, MarketSnapshot };

/// DexScreener-backed market lookup. One request per call, no retries, no cache.
pub struct MarketDataService {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct DexTokenResponse {
    #[serde(default)]
    pairs: Option<Vec<DexPair>>,
}

#[derive(Debug, Deserialize)]
struct DexPair {
    #[serde(rename = "priceUsd", default)]
    price_usd: Option<Amount>,
    #[serde(rename = "marketCap", default)]
    market_cap: Option<Amount>,
    #[serde(default)]
    volume: Option<DexVolume>,
    #[serde(default)]
    liquidity: Option<DexLiquidity>,
}

#[derive(Debug, Deserialize)]
struct DexVolume {
    #[serde(default)]
    h24: Option<Amount>,
}

#[derive(Debug, Deserialize)]
struct DexLiquidity {
    #[serde(default)]
    usd: Option<Amount>,
}

/// DexScreener sends prices as strings and most other figures as numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Amount {
    Number(f64),
    Text(String),
}

impl Amount {
    fn value(&self) -> Option<f64> {
        match self {
            Amount::Number(n) => Some(*n),
            Amount::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Keep only finite, positive figures; zero means "unknown" for this API.
fn positive(amount: Option<&Amount>) -> Option<f64> {
    amount
        .and_then(Amount::value)
        .filter(|v| v.is_finite() && *v > 0.0)
}

impl DexPair {
    fn liquidity_usd(&self) -> f64 {
        positive(self.liquidity.as_ref().and_then(|l| l.usd.as_ref())).unwrap_or(0.0)
    }
}

/// Pick the pair with the deepest liquidity and read its figures.
fn snapshot_from_pairs(pairs: &[DexPair]) -> MarketSnapshot {
    let Some(best) = pairs
        .iter()
        .max_by(|a, b| a.liquidity_usd().partial_cmp(&b.liquidity_usd()).unwrap_or(Ordering::Equal)) else {
        return MarketSnapshot::default();
    };

    MarketSnapshot {
        price: positive(best.price_usd.as_ref()),
        market_cap: positive(best.market_cap.as_ref()),
        volume_24h: positive(best.volume.as_ref().and_then(|v| v.h24.as_ref())),
        liquidity: positive(best.liquidity.as_ref().and_then(|l| l.usd.as_ref())),
    }
}

impl MarketDataService {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client
            ::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_pairs(&self, token_address: &str) -> Result<Vec<DexPair>> {
        let url = format!(
            "{}/latest/dex/tokens/{}",
            self.base_url,
            urlencoding::encode(token_address.trim())
        );

        let response = self.client
            .get(&url)
            .send().await
            .map_err(|e| AppError::ExternalDataUnavailable(format!("DexScreener request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(
                AppError::ExternalDataUnavailable(
                    format!("DexScreener returned status: {}", response.status())
                )
            );
        }

        let body: DexTokenResponse = response
            .json().await
            .map_err(|e|
                AppError::ExternalDataUnavailable(format!("Failed to parse DexScreener response: {}", e))
            )?;

        Ok(body.pairs.unwrap_or_default())
    }
}

#[async_trait]
impl MarketDataProvider for MarketDataService {
    async fn snapshot(&self, token_address: &str) -> MarketSnapshot {
        if token_address.trim().is_empty() {
            return MarketSnapshot::default();
        }

        match self.fetch_pairs(token_address).await {
            Ok(pairs) => snapshot_from_pairs(&pairs),
            Err(e) => {
                tracing::warn!("Failed to get market data for {}: {}", token_address, e);
                MarketSnapshot::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{ Json, Router, extract::Path, routing::get };

    const TWO_PAIRS: &str =
        r#"{
        "schemaVersion": "1.0.0",
        "pairs": [
            {
                "dexId": "raydium",
                "priceUsd": "0.00001234",
                "marketCap": 12340,
                "volume": { "h24": 5000.5 },
                "liquidity": { "usd": 800.0 }
            },
            {
                "dexId": "pumpswap",
                "priceUsd": "0.00001300",
                "marketCap": 13000,
                "volume": { "h24": 9100 },
                "liquidity": { "usd": 4200.25 }
            }
        ]
    }"#;

    fn parse(json: &str) -> Vec<DexPair> {
        serde_json::from_str::<DexTokenResponse>(json).unwrap().pairs.unwrap_or_default()
    }

    #[test]
    fn test_picks_pair_with_most_liquidity() {
        let snapshot = snapshot_from_pairs(&parse(TWO_PAIRS));

        assert_eq!(snapshot, MarketSnapshot {
            price: Some(0.000013),
            market_cap: Some(13000.0),
            volume_24h: Some(9100.0),
            liquidity: Some(4200.25),
        });
    }

    #[test]
    fn test_no_pairs_is_empty_snapshot() {
        assert!(snapshot_from_pairs(&parse(r#"{"pairs": []}"#)).is_empty());
        assert!(snapshot_from_pairs(&parse(r#"{"pairs": null}"#)).is_empty());
        assert!(snapshot_from_pairs(&parse(r#"{}"#)).is_empty());
    }

    #[test]
    fn test_missing_and_zero_fields_are_omitted() {
        let pairs = parse(r#"{"pairs": [{"priceUsd": "0.5", "marketCap": 0, "liquidity": {}}]}"#);
        let snapshot = snapshot_from_pairs(&pairs);

        assert_eq!(snapshot.price, Some(0.5));
        assert_eq!(snapshot.market_cap, None);
        assert_eq!(snapshot.volume_24h, None);
        assert_eq!(snapshot.liquidity, None);
    }

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_snapshot_over_http() {
        let router = Router::new().route(
            "/latest/dex/tokens/{address}",
            get(|Path(address): Path<String>| async move {
                if address == "known" {
                    Json(serde_json::from_str::<serde_json::Value>(TWO_PAIRS).unwrap())
                } else {
                    Json(serde_json::json!({ "schemaVersion": "1.0.0", "pairs": null }))
                }
            })
        );
        let base_url = serve(router).await;
        let service = MarketDataService::new(&base_url, Duration::from_secs(5)).unwrap();

        assert_eq!(service.snapshot("known").await.liquidity, Some(4200.25));
        assert!(service.snapshot("unknown").await.is_empty());
    }

    #[tokio::test]
    async fn test_transport_failures_degrade_to_empty() {
        let router = Router::new().route(
            "/latest/dex/tokens/{address}",
            get(|| async { (axum::http::StatusCode::TOO_MANY_REQUESTS, "slow down") })
        );
        let base_url = serve(router).await;
        let service = MarketDataService::new(&base_url, Duration::from_secs(5)).unwrap();
        assert!(service.snapshot("any").await.is_empty());

        // Nothing listens on the discard port
        let service = MarketDataService::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap();
        assert!(service.snapshot("any").await.is_empty());
    }

    #[tokio::test]
    async fn test_timeout_degrades_to_empty() {
        let router = Router::new().route(
            "/latest/dex/tokens/{address}",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                "late"
            })
        );
        let base_url = serve(router).await;
        let service = MarketDataService::new(&base_url, Duration::from_millis(200)).unwrap();

        assert!(service.snapshot("any").await.is_empty());
    }
}
