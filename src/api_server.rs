// Axum server: application state, router and the JSON endpoints
//
// HTML pages and htmx fragments live in `web::handlers`; this module wires
// them together with the mounted-view stores.

use axum::{
    extract::{DefaultBodyLimit, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::simulation::ViewStore;
use crate::views::{ResourceView, SoilWeatherView, YieldPredictionView};
use crate::web::handlers::{charts, pages, prediction, resources, soil_weather};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub soil_weather_views: ViewStore<SoilWeatherView>,
    pub prediction_views: ViewStore<YieldPredictionView>,
    pub resource_views: ViewStore<ResourceView>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        tracing::info!(
            "Initializing view stores (max {} per page, idle {:?})...",
            config.max_mounted_views,
            config.view_idle
        );
        let (capacity, idle) = (config.max_mounted_views, config.view_idle);

        Self {
            soil_weather_views: ViewStore::new("soil-weather", capacity, idle),
            prediction_views: ViewStore::new("prediction", capacity, idle),
            resource_views: ViewStore::new("resources", capacity, idle),
            config: Arc::new(config),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(pages::home_page))
        .route("/prediction", get(prediction::prediction_page))
        .route("/soil-weather", get(soil_weather::soil_weather_page))
        .route("/recommendations", get(pages::recommendations_page))
        .route("/optimization", get(pages::optimization_page))
        .route("/dashboard", get(pages::dashboard_page))
        .route("/resources", get(resources::resources_page))
        .route("/market", get(pages::market_page))

        // Soil & weather fragments
        .route("/soil-weather/:view/analyze", post(soil_weather::analyze))
        .route("/soil-weather/:view/panel", get(soil_weather::panel))

        // Yield prediction fragments; uploads are only measured, never stored
        .route(
            "/prediction/:view/upload",
            post(prediction::upload).layer(DefaultBodyLimit::disable()),
        )
        .route("/prediction/:view/run", post(prediction::run))
        .route("/prediction/:view/panel", get(prediction::panel))

        // Resource fragments
        .route("/resources/:view/calculator", post(resources::calculator))
        .route("/resources/:view/add/:category", post(resources::add_resource))

        // Page-leave beacon
        .route("/views/:view/unmount", post(unmount_view))

        // JSON
        .route("/health", get(health_check))
        .route("/api/charts/:chart", get(charts::get_chart))

        .fallback(pages::not_found_page)

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Drop a mounted view and cancel its pending fetch. View ids are unique
/// across stores, so at most one store holds it.
async fn unmount_view(State(state): State<AppState>, Path(view_id): Path<String>) -> StatusCode {
    let removed = state.soil_weather_views.unmount(&view_id).await
        || state.prediction_views.unmount(&view_id).await
        || state.resource_views.unmount(&view_id).await;

    if removed {
        tracing::debug!(view = %view_id, "view unmounted");
    } else {
        tracing::debug!(view = %view_id, "unmount for unknown view");
    }
    StatusCode::NO_CONTENT
}
