use crate::api_client::PriceSource;
use crate::state::AppState;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};
use tracing::{error, info};

/// Periodic fetch loop. Runs until a value is sent on the shutdown channel;
/// a failed fetch is logged and the loop moves on to the next tick.
///
/// The shutdown signal is raced against both the tick sleep and the fetch
/// itself, so stopping never waits out a full interval or a slow upstream.
pub async fn run_price_polling<S: PriceSource>(
    state: AppState,
    source: S,
    poll_interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = time::interval(poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!("Starting price polling ({:?} interval)", poll_interval);

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = shutdown.changed() => break,
        }

        let result = tokio::select! {
            result = source.fetch() => result,
            _ = shutdown.changed() => break,
        };

        match result {
            Ok(sample) => {
                info!("Fetched BTC price: ${:.2}", sample.price);
                state.record_sample(sample).await;
            }
            Err(e) => {
                error!("Failed to fetch price: {}", e);
            }
        }
    }

    info!("Price polling stopped");
}
