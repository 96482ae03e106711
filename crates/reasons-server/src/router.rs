//! Router assembly for the reasons HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{get, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax; the static `/all`,
/// `/openapi.json` and `/docs` routes take precedence over `/{id}` for the
/// methods they serve. Any other method on those paths goes to
/// [`handlers::reasons::update_reason_on_static_route`], so `PUT /all` is
/// still an update of the reason with id `all`.
/// CORS is permissive (any origin, method and header).
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::pages::home_page).post(handlers::reasons::create_reason),
        )
        .route("/all", get(handlers::reasons::list_unvisited))
        .route("/{id}", put(handlers::reasons::update_reason))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .method_not_allowed_fallback(handlers::reasons::update_reason_on_static_route)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
