use axum::response::Json;
use serde::Serialize;

/// Body of every `GET /ping` reply.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Pong {
    pub pong: &'static str,
}

pub const PONG: Pong = Pong {
    pong: "Hello, World",
};

/// Liveness probe.
/// Url: /ping
/// Method: GET
/// Query string and body are ignored.
pub async fn get_ping() -> Json<Pong> {
    Json(PONG)
}
