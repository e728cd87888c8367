use crate::models::PriceSample;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// One price quote per call. The polling loop is written against this trait
/// so it can be driven by a scripted source in tests.
#[async_trait]
pub trait PriceSource: Send + Sync {
    async fn fetch(&self) -> Result<PriceSample, ApiError>;
}

#[derive(Deserialize)]
struct QuoteResponse {
    bpi: Bpi,
}

#[derive(Deserialize)]
struct Bpi {
    #[serde(rename = "USD")]
    usd: UsdQuote,
}

#[derive(Deserialize)]
struct UsdQuote {
    rate: String,
}

pub struct ApiClient {
    client: reqwest::Client,
    url: String,
}

impl ApiClient {
    /// `timeout` bounds the whole request; a hung upstream call must not be
    /// able to stall the polling loop past its own tick.
    pub fn new(url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");

        Self { client, url }
    }
}

#[async_trait]
impl PriceSource for ApiClient {
    async fn fetch(&self) -> Result<PriceSample, ApiError> {
        let response: QuoteResponse = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        let price = parse_rate(&response.bpi.usd.rate)?;
        Ok(PriceSample::new(price))
    }
}

/// Quote rates arrive as comma-grouped decimal strings ("68,123.45").
fn parse_rate(rate: &str) -> Result<f64, ApiError> {
    rate.replace(',', "")
        .parse::<f64>()
        .map_err(|e| ApiError::Parse(format!("invalid rate {:?}: {}", rate, e)))
}
