//! Server-rendered pages.

use actix_web::HttpResponse;

/// Landing page markup, compiled into the binary.
const INDEX_HTML: &str = include_str!("../../templates/index.html");

/// GET / - the landing page.
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}
