use crate::infra::AppState;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeSet;
use tracing::info;
use villa_map::error::AppError;
use villa_map::listings::{
    amenity_display_label, evaluate_filters, results_count_label, AmenityLabel, FilterRequest,
    Listing, ListingId, StayDates,
};
use villa_map::map::MapCommand;

#[derive(Debug, Serialize)]
pub(crate) struct ListingsResponse {
    pub(crate) count: usize,
    pub(crate) results_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) stay: Option<StayDates>,
    pub(crate) listings: Vec<Listing>,
}

/// What changed on the map session, as commands for the client to replay.
#[derive(Debug, Serialize)]
pub(crate) struct MapUpdateResponse {
    pub(crate) count: usize,
    pub(crate) results_label: String,
    pub(crate) bound_ids: BTreeSet<ListingId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) stay: Option<StayDates>,
    pub(crate) commands: Vec<MapCommand>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum ViewAction {
    ZoomIn,
    ZoomOut,
    Reset,
}

#[derive(Debug, Serialize)]
pub(crate) struct AmenityLabelResponse {
    pub(crate) tag: String,
    pub(crate) label: String,
    #[serde(flatten)]
    pub(crate) parts: AmenityLabel,
}

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/listings", get(listings_endpoint))
        .route("/api/v1/listings/search", post(search_endpoint))
        .route("/api/v1/map/filters", post(map_filters_endpoint))
        .route("/api/v1/map/reset", post(map_reset_endpoint))
        .route("/api/v1/map/view/:action", post(map_view_endpoint))
        .route("/api/v1/amenities/:tag/label", get(amenity_label_endpoint))
        .layer(Extension(state))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn listings_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<ListingsResponse> {
    let listings = state.catalog.as_ref().clone();
    Json(ListingsResponse {
        count: listings.len(),
        results_label: results_count_label(listings.len()),
        stay: None,
        listings,
    })
}

/// Stateless search over the catalog; leaves the map session untouched.
pub(crate) async fn search_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<FilterRequest>,
) -> Result<Json<ListingsResponse>, AppError> {
    let submission = payload.into_submission()?;
    let listings = evaluate_filters(&submission.criteria, &state.catalog);

    Ok(Json(ListingsResponse {
        count: listings.len(),
        results_label: results_count_label(listings.len()),
        stay: submission.stay,
        listings,
    }))
}

pub(crate) async fn map_filters_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<FilterRequest>,
) -> Result<Json<MapUpdateResponse>, AppError> {
    let submission = payload.into_submission()?;
    let mut session = state.session();
    session.apply_filters(submission.criteria);
    info!(matched = session.filtered().len(), "map filters applied");

    Ok(Json(map_update(&mut session, submission.stay)))
}

pub(crate) async fn map_reset_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<MapUpdateResponse> {
    let mut session = state.session();
    session.reset_filters();
    Json(map_update(&mut session, None))
}

pub(crate) async fn map_view_endpoint(
    Extension(state): Extension<AppState>,
    Path(action): Path<ViewAction>,
) -> Json<MapUpdateResponse> {
    let mut session = state.session();
    match action {
        ViewAction::ZoomIn => session.zoom_in(),
        ViewAction::ZoomOut => session.zoom_out(),
        ViewAction::Reset => session.reset_view(),
    }
    Json(map_update(&mut session, None))
}

pub(crate) async fn amenity_label_endpoint(Path(tag): Path<String>) -> Json<AmenityLabelResponse> {
    let parts = amenity_display_label(&tag);
    Json(AmenityLabelResponse {
        label: parts.to_string(),
        tag,
        parts,
    })
}

fn map_update(session: &mut crate::infra::MapSession, stay: Option<StayDates>) -> MapUpdateResponse {
    MapUpdateResponse {
        count: session.filtered().len(),
        results_label: session.results_label(),
        bound_ids: session.bound_ids(),
        stay,
        commands: session.surface_mut().drain_commands(),
    }
}
