//! REST API module for HTTP endpoints
//!
//! - `GET  /api/events` - Stored events, optionally `?category=`
//! - `POST /api/events` - Record an event
//! - `GET  /api/counts` - Per-category counts
//! - `GET  /api/stats` - Suppression statistics
//! - `GET  /api/state` - Pause and visibility flags
//! - `GET  /api/export` - Clipboard text, optionally `?category=`
//! - `POST /api/clear`, `/api/clear/errors`, `/api/pause/toggle`, `/api/visibility/toggle`

pub mod control;
pub mod events;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::types::Category;

/// Common category filter
#[derive(Debug, Default, Deserialize)]
pub struct CategoryParams {
    pub category: Option<String>,
}

impl CategoryParams {
    /// Parse the filter; empty or missing means "all"
    pub fn parse(&self) -> Result<Option<Category>, ApiError> {
        match self.category.as_deref().map(str::trim) {
            None | Some("") | Some("all") => Ok(None),
            Some(raw) => raw
                .parse::<Category>()
                .map(Some)
                .map_err(|e: crate::types::ParseCategoryError| ApiError::bad_request(e.to_string())),
        }
    }
}

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Whether the log is currently paused
    pub paused: bool,
    /// Total count (for list responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, paused: bool) -> Self {
        Self {
            data,
            paused,
            total: None,
        }
    }

    pub fn with_total(data: T, paused: bool, total: usize) -> Self {
        Self {
            data,
            paused,
            total: Some(total),
        }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}
