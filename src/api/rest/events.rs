//! Event endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use super::{ApiError, ApiResponse, CategoryParams};
use crate::api::state::AppState;
use crate::event_store::SuppressionStats;
use crate::types::{Category, Counts, Detail, Event};

/// Body for POST /api/events
#[derive(Debug, Deserialize)]
pub struct RecordRequest {
    pub category: String,
    pub message: String,
    /// Either a tagged detail (`{"kind": ..., "value": ...}`) or any JSON
    #[serde(default)]
    pub detail: Option<Value>,
}

/// Accept the tagged form first, then fall back to raw JSON
fn parse_detail(value: Value) -> Detail {
    match serde_json::from_value::<Detail>(value.clone()) {
        Ok(detail) => detail,
        Err(_) => Detail::from_value(value),
    }
}

/// GET /api/events - List stored events, timestamp ascending
pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CategoryParams>,
) -> Result<Json<ApiResponse<Vec<Event>>>, ApiError> {
    let filter = params.parse()?;
    let events = state.log.all_events(filter);
    let total = events.len();
    Ok(Json(ApiResponse::with_total(events, state.log.is_paused(), total)))
}

/// POST /api/events - Record an event
///
/// Always 202 once the body is valid; suppression is silent.
pub async fn record_event(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RecordRequest>,
) -> Result<StatusCode, ApiError> {
    let category: Category = body
        .category
        .parse()
        .map_err(|e: crate::types::ParseCategoryError| ApiError::bad_request(e.to_string()))?;

    let detail = body.detail.filter(|v| !v.is_null()).map(parse_detail);
    state.log.record(category, body.message, detail);
    Ok(StatusCode::ACCEPTED)
}

/// GET /api/counts - Per-category counts
pub async fn get_counts(State(state): State<Arc<AppState>>) -> Json<Counts> {
    Json(state.log.counts())
}

/// GET /api/stats - Suppression statistics
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<SuppressionStats> {
    Json(state.log.stats())
}

/// GET /api/export - Clipboard text
pub async fn export_events(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CategoryParams>,
) -> Result<impl IntoResponse, ApiError> {
    let filter = params.parse()?;
    let text = state.log.export(filter);
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_detail_tagged_text() {
        let detail = parse_detail(json!({"kind": "text", "value": "trace"}));
        assert_eq!(detail, Detail::text("trace"));
    }

    #[test]
    fn test_parse_detail_raw_object() {
        let detail = parse_detail(json!({"status": 500}));
        assert_eq!(detail, Detail::from_value(json!({"status": 500})));
    }

    #[test]
    fn test_category_params() {
        let params = CategoryParams {
            category: Some("error".to_string()),
        };
        assert_eq!(params.parse().unwrap(), Some(Category::Error));

        let params = CategoryParams {
            category: Some("all".to_string()),
        };
        assert_eq!(params.parse().unwrap(), None);

        let params = CategoryParams {
            category: Some("loud".to_string()),
        };
        assert!(params.parse().is_err());
    }
}
