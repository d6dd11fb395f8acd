// Yield Prediction page and its htmx fragments

use askama::Template;
use axum::{
    extract::{Multipart, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_htmx::HxRequest;

use crate::api_server::AppState;
use crate::error::AppError;
use crate::simulation::schedule;
use crate::views::prediction::{
    FileRef, PredictionPhase, PredictionResult, RunRequest, ACCEPTED_EXTENSIONS,
};
use crate::views::toasts::VisibleToast;
use crate::views::{Route, YieldPredictionView};
use crate::web::{render, Shell};

#[derive(Template)]
#[template(path = "fragments/prediction_panel.html")]
pub struct PredictionPanel {
    pub view_id: String,
    pub accept: &'static str,
    pub file: Option<FileRef>,
    pub file_size: String,
    pub predicting: bool,
    pub result: Option<PredictionResult>,
    pub toasts: Vec<VisibleToast>,
    pub oob: bool,
}

impl PredictionPanel {
    fn build(view_id: &str, view: &mut YieldPredictionView, oob: bool) -> Self {
        Self {
            view_id: view_id.to_string(),
            accept: ACCEPTED_EXTENSIONS,
            file: view.file().cloned(),
            file_size: view.file().map(FileRef::size_display).unwrap_or_default(),
            predicting: view.phase() == PredictionPhase::Predicting,
            result: view.result().cloned(),
            toasts: view.toasts.visible(),
            oob,
        }
    }
}

#[derive(Template)]
#[template(path = "pages/prediction.html")]
pub struct PredictionTemplate {
    pub shell: Shell,
    pub toasts: Vec<VisibleToast>,
    pub panel: PredictionPanel,
}

pub async fn prediction_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let view = state
        .prediction_views
        .mount(YieldPredictionView::new(state.config.toast_policy))
        .await;
    tracing::debug!(view = %view.id(), "mounted yield prediction view");

    let panel = PredictionPanel::build(view.id(), &mut *view.lock().await, false);
    let page = render(&PredictionTemplate {
        shell: Shell::for_route(Route::Prediction).with_view(view.id()),
        toasts: Vec::new(),
        panel,
    })?;
    Ok(page.into_response())
}

/// File picker change. Only the name and byte count are kept.
pub async fn upload(
    State(state): State<AppState>,
    Path(view_id): Path<String>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let view = state
        .prediction_views
        .get(&view_id)
        .await
        .ok_or_else(|| AppError::ViewExpired(view_id.clone()))?;

    let mut selected = None;
    while let Some(mut field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let name = field.file_name().unwrap_or_default().to_string();
        // Count the bytes as they stream past; the contents are discarded
        let mut size_bytes = 0u64;
        while let Some(chunk) = field.chunk().await? {
            size_bytes += chunk.len() as u64;
        }
        if !name.is_empty() {
            selected = Some(FileRef { name, size_bytes });
        }
    }

    let mut guard = view.lock().await;
    if let Some(file) = selected {
        tracing::debug!(view = %view_id, file = %file.name, bytes = file.size_bytes, "file selected");
        guard.select_file(file);
    }
    let panel = PredictionPanel::build(&view_id, &mut guard, true);
    Ok(render(&panel)?.into_response())
}

pub async fn run(
    State(state): State<AppState>,
    Path(view_id): Path<String>,
) -> Result<Response, AppError> {
    let view = state
        .prediction_views
        .get(&view_id)
        .await
        .ok_or_else(|| AppError::ViewExpired(view_id.clone()))?;

    let request = view.lock().await.run();
    match request {
        RunRequest::Started => {
            tracing::debug!(view = %view_id, "prediction started");
            schedule(&view, state.config.prediction_delay, YieldPredictionView::resolve).await;
        }
        RunRequest::MissingFile => tracing::debug!(view = %view_id, "prediction requested without a file"),
        RunRequest::AlreadyPredicting => tracing::debug!(view = %view_id, "prediction already in flight"),
    }

    let panel = PredictionPanel::build(&view_id, &mut *view.lock().await, true);
    Ok(render(&panel)?.into_response())
}

/// Polled while a prediction is in flight.
pub async fn panel(
    State(state): State<AppState>,
    Path(view_id): Path<String>,
    HxRequest(is_htmx): HxRequest,
) -> Result<Response, AppError> {
    if !is_htmx {
        return Ok(Redirect::to(Route::Prediction.path()).into_response());
    }

    let view = state
        .prediction_views
        .get(&view_id)
        .await
        .ok_or_else(|| AppError::ViewExpired(view_id.clone()))?;

    let panel = PredictionPanel::build(&view_id, &mut *view.lock().await, true);
    Ok(render(&panel)?.into_response())
}
