use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_API_URL: &str = "https://api.coindesk.com/v1/bpi/currentprice/BTC.json";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;
const DEFAULT_HISTORY_CAPACITY: usize = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub price_api_url: String,
    pub port: u16,
    pub poll_interval: Duration,
    pub history_capacity: usize,
}

impl Config {
    /// Read settings from the environment, falling back to defaults.
    /// Unparseable values are logged and ignored rather than aborting.
    pub fn from_env() -> Self {
        Self {
            price_api_url: std::env::var("PRICE_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            port: env_or("PORT", DEFAULT_PORT),
            poll_interval: Duration::from_secs(env_or(
                "POLL_INTERVAL_SECS",
                DEFAULT_POLL_INTERVAL_SECS,
            )),
            history_capacity: env_or("HISTORY_CAPACITY", DEFAULT_HISTORY_CAPACITY),
        }
    }

    /// Outbound request budget: half a tick, so a hung fetch can never make
    /// the poller skip more than the current interval.
    pub fn request_timeout(&self) -> Duration {
        self.poll_interval / 2
    }
}

fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Ignoring {}={:?}: {}", key, raw, e);
                default
            }
        },
        Err(_) => default,
    }
}
