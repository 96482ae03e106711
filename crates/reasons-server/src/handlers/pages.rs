//! Landing page.

use axum::response::Html;

const HOME_PAGE: &str = r#"<html>
    <head>
        <title>Reasons API</title>
    </head>
    <body>
        <h1>Reasons API is running</h1>
    </body>
</html>
"#;

/// Static landing page, doubles as a liveness check.
///
/// `GET /`
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Landing page", body = String, content_type = "text/html")
    )
)]
pub async fn home_page() -> Html<&'static str> {
    Html(HOME_PAGE)
}

