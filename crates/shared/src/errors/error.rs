use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error half of the response envelope: `status`, `error`, `timestamp` and,
/// when the request path is known, `path`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub status: u16,
    pub error: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, error: Option<String>) -> Self {
        let error = error
            .filter(|msg| !msg.is_empty())
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Error").to_string());

        Self {
            status: status.as_u16(),
            error,
            timestamp: Local::now()
                .naive_local()
                .format("%Y-%m-%dT%H:%M:%S%.3f")
                .to_string(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_reason_phrase() {
        let err = ErrorResponse::new(StatusCode::NOT_FOUND, None);
        assert_eq!(err.status, 404);
        assert_eq!(err.error, "Not Found");
        assert!(err.path.is_none());
    }

    #[test]
    fn path_is_serialized_only_when_set() {
        let bare = serde_json::to_value(ErrorResponse::new(StatusCode::BAD_REQUEST, None)).unwrap();
        assert!(bare.get("path").is_none());
        assert!(bare.get("timestamp").is_some());

        let with_path = serde_json::to_value(
            ErrorResponse::new(StatusCode::BAD_REQUEST, Some("bad".into())).with_path("/product/add"),
        )
        .unwrap();
        assert_eq!(with_path["path"], "/product/add");
        assert_eq!(with_path["error"], "bad");
    }
}
