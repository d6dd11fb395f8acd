// Soil & Weather page and its htmx fragments

use askama::Template;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use axum_htmx::HxRequest;
use serde::Deserialize;

use crate::api_server::AppState;
use crate::error::AppError;
use crate::simulation::schedule;
use crate::views::soil_weather::{
    FetchPhase, SoilReading, SoilSnapshot, Submission, WeatherSnapshot,
};
use crate::views::toasts::VisibleToast;
use crate::views::{Route, SoilWeatherView};
use crate::web::{render, Shell};

#[derive(Template)]
#[template(path = "fragments/soil_weather_panel.html")]
pub struct SoilWeatherPanel {
    pub view_id: String,
    pub loading: bool,
    pub location_input: String,
    pub weather: Option<WeatherSnapshot>,
    pub soil: Option<SoilSnapshot>,
    pub readings: Vec<SoilReading>,
    pub toasts: Vec<VisibleToast>,
    /// Fragment responses carry the toast region out of band
    pub oob: bool,
}

impl SoilWeatherPanel {
    fn build(view_id: &str, view: &mut SoilWeatherView, oob: bool) -> Self {
        Self {
            view_id: view_id.to_string(),
            loading: view.phase() == FetchPhase::Loading,
            location_input: view.location_input().to_string(),
            weather: view.weather().cloned(),
            soil: view.soil().cloned(),
            readings: view.soil().map(SoilSnapshot::readings).unwrap_or_default(),
            toasts: view.toasts.visible(),
            oob,
        }
    }
}

#[derive(Template)]
#[template(path = "pages/soil_weather.html")]
pub struct SoilWeatherTemplate {
    pub shell: Shell,
    pub toasts: Vec<VisibleToast>,
    pub panel: SoilWeatherPanel,
}

pub async fn soil_weather_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let view = state
        .soil_weather_views
        .mount(SoilWeatherView::new(state.config.toast_policy))
        .await;
    tracing::debug!(view = %view.id(), "mounted soil & weather view");

    let panel = SoilWeatherPanel::build(view.id(), &mut *view.lock().await, false);
    let page = render(&SoilWeatherTemplate {
        shell: Shell::for_route(Route::SoilWeather).with_view(view.id()),
        toasts: Vec::new(),
        panel,
    })?;
    Ok(page.into_response())
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub location: String,
}

pub async fn analyze(
    State(state): State<AppState>,
    Path(view_id): Path<String>,
    Form(form): Form<AnalyzeForm>,
) -> Result<Response, AppError> {
    let view = state
        .soil_weather_views
        .get(&view_id)
        .await
        .ok_or_else(|| AppError::ViewExpired(view_id.clone()))?;

    let submission = view.lock().await.submit(&form.location);
    match submission {
        Submission::Started => {
            tracing::debug!(view = %view_id, location = %form.location.trim(), "soil & weather fetch started");
            schedule(&view, state.config.soil_weather_delay, SoilWeatherView::resolve).await;
        }
        Submission::Rejected => tracing::debug!(view = %view_id, "blank location rejected"),
        Submission::AlreadyLoading => tracing::debug!(view = %view_id, "fetch already in flight"),
    }

    let panel = SoilWeatherPanel::build(&view_id, &mut *view.lock().await, true);
    Ok(render(&panel)?.into_response())
}

/// Polled while a fetch is in flight.
pub async fn panel(
    State(state): State<AppState>,
    Path(view_id): Path<String>,
    HxRequest(is_htmx): HxRequest,
) -> Result<Response, AppError> {
    if !is_htmx {
        return Ok(Redirect::to(Route::SoilWeather.path()).into_response());
    }

    let view = state
        .soil_weather_views
        .get(&view_id)
        .await
        .ok_or_else(|| AppError::ViewExpired(view_id.clone()))?;

    let panel = SoilWeatherPanel::build(&view_id, &mut *view.lock().await, true);
    Ok(render(&panel)?.into_response())
}
