//! Currency conversion abstractions

use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait CurrencyConverter: Send + Sync {
    /// Converts `amount` from one currency into another, returning the converted amount.
    async fn convert(&self, from: &str, to: &str, amount: f64) -> Result<f64>;
}
