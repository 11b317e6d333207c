use axum::{
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Json, Response},
};
use serde::{Serialize, Serializer};
use std::fmt;

/// Error returned to HTTP clients as a JSON body.
#[derive(Debug, Clone, Serialize)]
pub struct HttpError {
    #[serde(serialize_with = "status_as_u16")]
    pub status_code: StatusCode,
    pub message: String,
}

fn status_as_u16<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(status.as_u16())
}

impl HttpError {
    pub fn not_found(message: &str) -> HttpError {
        HttpError {
            status_code: StatusCode::NOT_FOUND,
            message: message.to_string(),
        }
    }

    /// Request matched no (method, path) pair.
    pub fn unmatched_route(method: &Method, uri: &Uri) -> HttpError {
        HttpError::not_found(&format!("No route for {} {}", method, uri.path()))
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Code {}: {}", self.status_code.as_u16(), self.message)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status_code, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmatched_route_names_method_and_path() {
        let uri: Uri = "/nope?x=1".parse().unwrap();
        let err = HttpError::unmatched_route(&Method::GET, &uri);
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "status_code": 404, "message": "No route for GET /nope" })
        );
        assert_eq!(err.to_string(), "Code 404: No route for GET /nope");
    }

    #[test]
    fn into_response_keeps_status() {
        let response = HttpError::not_found("gone").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
    }
}
