use anyhow::{Result, anyhow};
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::core::currency::CurrencyConverter;

const USER_AGENT: &str = concat!("fxconv/", env!("CARGO_PKG_VERSION"));

/// Converts amounts with the Frankfurter exchange-rate API.
pub struct FrankfurterProvider {
    base_url: String,
    client: reqwest::Client,
}

impl FrankfurterProvider {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(FrankfurterProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn fetch_converted(&self, from: &str, to: &str, amount: f64) -> Result<f64> {
        let amount = amount.to_string();
        let url = Url::parse_with_params(
            &format!("{}/latest", self.base_url),
            &[("amount", amount.as_str()), ("from", from), ("to", to)],
        )?;
        debug!("Requesting conversion from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for currency pair: {}/{}", e, from, to))?;

        // Frankfurter answers unknown currency codes with a 404
        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for currency pair: {}/{}",
                response.status(),
                from,
                to
            ));
        }

        let text = response.text().await?;
        let data: FrankfurterResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse JSON response for {}/{}: {}", from, to, e))?;
        debug!(rates = ?data.rates, "Received Frankfurter response");

        data.rates
            .get(to)
            .copied()
            .ok_or_else(|| anyhow!("No rate data found for currency: {}", to))
    }
}

#[derive(Debug, Deserialize)]
struct FrankfurterResponse {
    rates: HashMap<String, f64>,
}

#[async_trait]
impl CurrencyConverter for FrankfurterProvider {
    #[instrument(
        name = "FrankfurterConvert",
        skip(self),
        fields(from = %from, to = %to)
    )]
    async fn convert(&self, from: &str, to: &str, amount: f64) -> Result<f64> {
        // Nothing to convert, don't spend a request on it
        if from == to {
            debug!("Same currency, skipping request");
            return Ok(amount);
        }

        self.fetch_converted(from, to, amount)
            .await
            .map_err(|e| anyhow!("Connection error or invalid currency code. Details: {e}"))
    }
}
