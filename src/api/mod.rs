use crate::HttpError;
use axum::{
    http::{Method, Uri},
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

pub mod ping;

/// Build the service router.
///
/// `GET /ping` is the only route. Any other method on `/ping` and any other
/// path get a 404; the method fallback replaces axum's default 405.
pub fn router() -> Router {
    Router::new()
        .route("/ping", get(ping::get_ping).fallback(not_found))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}

async fn not_found(method: Method, uri: Uri) -> HttpError {
    log::debug!("Unmatched route: {} {}", method, uri);
    HttpError::unmatched_route(&method, &uri)
}
