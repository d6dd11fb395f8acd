//! KisanSahay agricultural analytics server
//!
//! Server-rendered dashboards for farmers: simulated yield prediction, soil &
//! weather analysis, crop recommendations, optimization suggestions, resource
//! cost tracking and market insights.
//!
//! Layout:
//! - `format`, `derived`: rupee formatting and the ratios shown on pages
//! - `content/`: static reference tables rendered by the pages
//! - `views/`: per-page state machines, navigation and toasts (no web types)
//! - `simulation`: mounted views and their cancellable simulated fetches
//! - `api_server`, `web/`: axum router, askama pages and htmx fragments
//!
//! Everything after `views` is behind the default `api` feature.

pub mod content;
pub mod derived;
pub mod format;
pub mod icons;
pub mod views;

#[cfg(feature = "api")]
pub mod api_server;
#[cfg(feature = "api")]
pub mod config;
#[cfg(feature = "api")]
pub mod error;
#[cfg(feature = "api")]
pub mod simulation;
#[cfg(feature = "api")]
pub mod web;

// Re-export commonly used types
pub use format::{format_inr, format_usd_as_inr, usd_to_inr, FormatError, USD_TO_INR};
pub use icons::{Icon, Trend};
pub use views::{ResourceView, Route, SoilWeatherView, Toast, ToastPolicy, YieldPredictionView};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
#[cfg(feature = "api")]
pub use config::AppConfig;
#[cfg(feature = "api")]
pub use error::AppError;
