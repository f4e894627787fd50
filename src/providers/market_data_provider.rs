use async_trait::async_trait;
use serde::{ Deserialize, Serialize };

/// Market figures for a token in USD. Every field is optional; a missing
/// field means the provider had nothing usable for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub price: Option<f64>,
    pub market_cap: Option<f64>,
    pub volume_24h: Option<f64>,
    pub liquidity: Option<f64>,
}

impl MarketSnapshot {
    pub fn is_empty(&self) -> bool {
        self.price.is_none() &&
            self.market_cap.is_none() &&
            self.volume_24h.is_none() &&
            self.liquidity.is_none()
    }
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Look up market data for a token address. Best effort: failures and
    /// unknown tokens yield an empty snapshot instead of an error.
    async fn snapshot(&self, token_address: &str) -> MarketSnapshot;
}
