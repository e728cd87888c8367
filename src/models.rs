use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shown on `/` (JSON and HTML) while no price has been fetched yet.
pub const NO_DATA_MESSAGE: &str = "No data available yet. Please wait a few minutes.";

/// A single fetched price. The timestamp is kept for ordering and logging;
/// it is not part of the wire responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSample {
    pub price: f64,
    pub fetched_at: DateTime<Utc>,
}

impl PriceSample {
    pub fn new(price: f64) -> Self {
        Self {
            price,
            fetched_at: Utc::now(),
        }
    }
}

/// Consistent read of the tracker state, taken under one lock acquisition.
/// `current_price` and `average_price` are `None` until the first sample
/// lands, never a placeholder 0.
#[derive(Debug, Clone, Serialize)]
pub struct PriceSnapshot {
    pub current_price: Option<f64>,
    pub average_price: Option<f64>,
    pub history: Vec<f64>,
}
