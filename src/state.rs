use crate::history::HistoryBuffer;
use crate::models::{PriceSample, PriceSnapshot};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared tracker state. Written only by the polling task, read by any
/// number of request handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<RwLock<HistoryBuffer>>,
}

impl AppState {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HistoryBuffer::new(history_capacity))),
        }
    }

    /// Push a sample and refresh the rolling average in one write-lock
    /// section, so readers never see the history and the average disagree.
    pub async fn record_sample(&self, sample: PriceSample) {
        let mut history = self.inner.write().await;
        history.push(sample);
    }

    pub async fn snapshot(&self) -> PriceSnapshot {
        let history = self.inner.read().await;
        PriceSnapshot {
            current_price: history.latest().map(|s| s.price),
            average_price: history.average(),
            history: history.snapshot().iter().map(|s| s.price).collect(),
        }
    }
}
