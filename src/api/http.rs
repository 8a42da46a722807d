//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use super::rest::{control, events};
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // The panel may be served from another origin during development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/events", get(events::list_events).post(events::record_event))
        .route("/api/counts", get(events::get_counts))
        .route("/api/stats", get(events::get_stats))
        .route("/api/export", get(events::export_events))
        .route("/api/state", get(control::get_state))
        .route("/api/clear", post(control::clear_all))
        .route("/api/clear/errors", post(control::clear_errors))
        .route("/api/pause/toggle", post(control::toggle_pause))
        .route("/api/visibility/toggle", post(control::toggle_visibility))
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogConfig;
    use crate::diagnostic_log::DiagnosticLog;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn test_app() -> (Router, Arc<DiagnosticLog>) {
        let log = Arc::new(DiagnosticLog::with_config(LogConfig::testing()));
        let app = create_router(Arc::new(AppState::new(log.clone())));
        (app, log)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn post_empty(uri: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let (app, _log) = test_app();

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_record_and_list_events() {
        let (app, log) = test_app();

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/events",
                json!({
                    "category": "error",
                    "message": "upstream timeout",
                    "detail": {"kind": "structured", "value": {"status": 504}}
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(log.counts().error, 1);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/events?category=error")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["total"], 1);
        assert_eq!(json["paused"], false);
        assert_eq!(json["data"][0]["message"], "upstream timeout");
        assert_eq!(json["data"][0]["detail"]["value"]["status"], 504);
    }

    #[tokio::test]
    async fn test_record_rejects_unknown_category() {
        let (app, log) = test_app();

        let response = app
            .oneshot(post_json(
                "/api/events",
                json!({"category": "fatal", "message": "x"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(log.is_empty());
    }

    #[tokio::test]
    async fn test_pause_toggle_and_state() {
        let (app, log) = test_app();

        let response = app.clone().oneshot(post_empty("/api/pause/toggle")).await.unwrap();
        let json = body_json(response).await;
        assert_eq!(json["paused"], true);
        assert_eq!(json["visible"], true);
        assert!(log.is_paused());

        let response = app
            .oneshot(Request::builder().uri("/api/state").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["paused"], true);
    }

    #[tokio::test]
    async fn test_clear_endpoints() {
        let (app, log) = test_app();
        log.info("routine");
        log.error("sticky");

        let response = app.clone().oneshot(post_empty("/api/clear/errors")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(log.counts().total, 1);

        let response = app.oneshot(post_empty("/api/clear")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(log.is_empty());
    }

    #[tokio::test]
    async fn test_counts_and_export() {
        let (app, log) = test_app();
        log.warning("slow response");
        log.record_text(crate::types::Category::Error, "failed", "trace line");

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/api/counts").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["total"], 2);
        assert_eq!(json["warning"], 1);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/export?category=error")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("ERROR: failed"));
        assert!(text.contains("    trace line"));
        assert!(!text.contains("WARNING"));
    }
}
