//! OpenAPI description of the HTTP surface.
//!
//! Served at `/openapi.json`, with a Swagger UI over it at `/docs`.

use utoipa::OpenApi;

use crate::handlers;
use crate::schema::reasons::{CreateReasonRequest, Reason, UpdateReasonRequest};

#[derive(OpenApi)]
#[openapi(
    info(title = "Reasons API", description = "Create, list and visit reasons"),
    paths(
        handlers::pages::home_page,
        handlers::reasons::create_reason,
        handlers::reasons::list_unvisited,
        handlers::reasons::update_reason,
    ),
    components(schemas(Reason, CreateReasonRequest, UpdateReasonRequest))
)]
pub struct ApiDoc;
