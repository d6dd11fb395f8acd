//! Page state and navigation
//!
//! Everything here is synchronous and free of web types. The interactive
//! pages (`soil_weather`, `prediction`, `calculator`) own a toaster each and
//! expose a `resolve()` hook that the simulated fetch calls after its delay.

pub mod calculator;
pub mod prediction;
pub mod recommendations;
pub mod routes;
pub mod soil_weather;
pub mod toasts;

pub use calculator::ResourceView;
pub use prediction::YieldPredictionView;
pub use routes::{nav_items, NavItem, Route};
pub use soil_weather::SoilWeatherView;
pub use toasts::{Toast, ToastPolicy, Toaster};
