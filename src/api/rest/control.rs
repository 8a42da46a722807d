//! Control endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::api::state::AppState;

/// Response for GET /api/state and the toggle endpoints
#[derive(Debug, Serialize)]
pub struct PanelState {
    pub paused: bool,
    pub visible: bool,
}

fn panel_state(state: &AppState) -> PanelState {
    PanelState {
        paused: state.log.is_paused(),
        visible: state.log.is_visible(),
    }
}

/// GET /api/state - Pause and visibility flags
pub async fn get_state(State(state): State<Arc<AppState>>) -> Json<PanelState> {
    Json(panel_state(&state))
}

/// POST /api/clear - Clear everything
pub async fn clear_all(State(state): State<Arc<AppState>>) -> StatusCode {
    state.log.clear_all();
    StatusCode::NO_CONTENT
}

/// POST /api/clear/errors - Clear sticky errors only
pub async fn clear_errors(State(state): State<Arc<AppState>>) -> StatusCode {
    state.log.clear_sticky_errors();
    StatusCode::NO_CONTENT
}

/// POST /api/pause/toggle
pub async fn toggle_pause(State(state): State<Arc<AppState>>) -> Json<PanelState> {
    state.log.toggle_pause();
    Json(panel_state(&state))
}

/// POST /api/visibility/toggle
pub async fn toggle_visibility(State(state): State<Arc<AppState>>) -> Json<PanelState> {
    state.log.toggle_visibility();
    Json(panel_state(&state))
}
