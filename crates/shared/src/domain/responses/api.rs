use crate::domain::responses::pagination::Pagination;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Success half of the response envelope. `status` mirrors the HTTP status
/// code; `count` is only set for collection payloads.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct ApiResponse<T> {
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T> ApiResponse<T> {
    pub fn with_status(status: StatusCode, response: T) -> Self {
        Self {
            status: status.as_u16(),
            response: Some(response),
            count: None,
            pagination: None,
        }
    }

    pub fn ok(response: T) -> Self {
        Self::with_status(StatusCode::OK, response)
    }

    pub fn created(response: T) -> Self {
        Self::with_status(StatusCode::CREATED, response)
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK)
    }
}

impl ApiResponse<()> {
    pub fn empty(status: StatusCode) -> Self {
        Self {
            status: status.as_u16(),
            response: None,
            count: None,
            pagination: None,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    pub fn list(items: Vec<T>) -> Self {
        let count = items.len();
        Self {
            status: StatusCode::OK.as_u16(),
            response: Some(items),
            count: Some(count),
            pagination: None,
        }
    }

    pub fn page(items: Vec<T>, pagination: Pagination) -> Self {
        let mut response = Self::list(items);
        response.pagination = Some(pagination);
        response
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

impl<T: Serialize> fmt::Display for ApiResponse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => write!(f, "{json}"),
            Err(e) => write!(f, "Error serializing ApiResponse to JSON: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_sets_count() {
        let value = serde_json::to_value(ApiResponse::list(vec![1, 2])).unwrap();
        assert_eq!(value, json!({ "status": 200, "response": [1, 2], "count": 2 }));
    }

    #[test]
    fn single_payload_has_no_count() {
        let value = serde_json::to_value(ApiResponse::created("x")).unwrap();
        assert_eq!(value, json!({ "status": 201, "response": "x" }));
    }

    #[test]
    fn empty_response_only_carries_status() {
        let value = serde_json::to_value(ApiResponse::empty(StatusCode::OK)).unwrap();
        assert_eq!(value, json!({ "status": 200 }));
    }

    #[test]
    fn page_carries_pagination_block() {
        let value =
            serde_json::to_value(ApiResponse::page(vec!["a"], Pagination::new(1, 1, 3))).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["pagination"]["totalPages"], 3);
    }
}
