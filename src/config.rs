//! Server configuration from environment variables

use std::str::FromStr;
use std::time::Duration;

use crate::simulation::MAX_VIEW_IDLE;
use crate::views::ToastPolicy;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// Simulated soil & weather fetch latency
    pub soil_weather_delay: Duration,
    /// Simulated yield prediction latency
    pub prediction_delay: Duration,
    pub toast_policy: ToastPolicy,
    /// Mounted views idle longer than this are evicted
    pub view_idle: Duration,
    /// Upper bound on mounted views per page kind
    pub max_mounted_views: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            soil_weather_delay: Duration::from_millis(1500),
            prediction_delay: Duration::from_millis(2000),
            toast_policy: ToastPolicy::default(),
            view_idle: Duration::from_secs(1800),
            max_mounted_views: 10_000,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str, default: u64| parse_or(key, lookup(key), default);

        Self {
            port: parse_or("PORT", lookup("PORT"), defaults.port),
            soil_weather_delay: Duration::from_millis(read(
                "SOIL_WEATHER_DELAY_MS",
                defaults.soil_weather_delay.as_millis() as u64,
            )),
            prediction_delay: Duration::from_millis(read(
                "PREDICTION_DELAY_MS",
                defaults.prediction_delay.as_millis() as u64,
            )),
            toast_policy: ToastPolicy {
                limit: parse_or("TOAST_LIMIT", lookup("TOAST_LIMIT"), defaults.toast_policy.limit),
                ttl: Duration::from_secs(read("TOAST_TTL_SECS", defaults.toast_policy.ttl.as_secs())),
            },
            view_idle: Duration::from_secs(bounded(
                "VIEW_IDLE_SECS",
                read("VIEW_IDLE_SECS", defaults.view_idle.as_secs()),
                MAX_VIEW_IDLE.as_secs(),
                defaults.view_idle.as_secs(),
            )),
            max_mounted_views: read("MAX_MOUNTED_VIEWS", defaults.max_mounted_views),
        }
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + std::fmt::Display + Copy,
{
    match raw {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("{}={:?} is not valid, using default {}", key, raw, default);
                default
            }
        },
    }
}

fn bounded(key: &str, value: u64, max: u64, default: u64) -> u64 {
    if value > max {
        tracing::warn!("{}={} exceeds {}, using default {}", key, value, max, default);
        default
    } else {
        value
    }
}
