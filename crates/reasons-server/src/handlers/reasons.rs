//! Reason handlers (create, list unvisited, update).

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::ApiError;
use crate::schema::reasons::{CreateReasonRequest, Reason, UpdateReasonRequest};
use crate::state::AppState;

/// Creates a new reason.
///
/// `POST /`
#[utoipa::path(
    post,
    path = "/",
    request_body = CreateReasonRequest,
    responses(
        (status = 201, description = "Reason created", body = Reason),
        (status = 422, description = "Missing or mistyped field"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn create_reason(
    State(state): State<AppState>,
    Json(req): Json<CreateReasonRequest>,
) -> Result<(StatusCode, Json<Reason>), ApiError> {
    let reason = state.reasons.create_reason(req).await?;
    Ok((StatusCode::CREATED, Json(reason)))
}

/// Lists reasons that were not visited.
///
/// `GET /all`
#[utoipa::path(
    get,
    path = "/all",
    responses(
        (
            status = 200,
            description = "Unvisited reasons among the first 200 stored",
            body = [Reason]
        ),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list_unvisited(
    State(state): State<AppState>,
) -> Result<Json<Vec<Reason>>, ApiError> {
    let reasons = state.reasons.list_unvisited().await?;
    Ok(Json(reasons))
}

/// Updates a reason's visited state.
///
/// `PUT /{id}`
#[utoipa::path(
    put,
    path = "/{id}",
    params(("id" = String, Path, description = "Reason identifier")),
    request_body = UpdateReasonRequest,
    responses(
        (status = 200, description = "Updated or unchanged reason", body = Reason),
        (status = 404, description = "No reason with this id"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn update_reason(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UpdateReasonRequest>,
) -> Result<Json<Reason>, ApiError> {
    let reason = state.reasons.update_reason(&id, patch).await?;
    Ok(Json(reason))
}

/// Method fallback for single-segment static routes (`/all`,
/// `/openapi.json`, `/docs`).
///
/// A `PUT` on one of these paths is an update of the reason whose id is the
/// path segment, exactly as if it had reached `PUT /{id}`. Every other
/// method, and any path with more than one segment, is 405.
pub async fn update_reason_on_static_route(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    patch: Result<Json<UpdateReasonRequest>, JsonRejection>,
) -> Response {
    let id = uri.path().trim_start_matches('/');
    if method != Method::PUT || id.is_empty() || id.contains('/') {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }
    let Json(patch) = match patch {
        Ok(patch) => patch,
        Err(rejection) => return rejection.into_response(),
    };

    match state.reasons.update_reason(id, patch).await {
        Ok(reason) => Json(reason).into_response(),
        Err(err) => err.into_response(),
    }
}
