use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Reports the service version, loaded templates and active render backend.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "vitae-api",
        "version": env!("CARGO_PKG_VERSION"),
        "templates": state.templates.template_ids(),
        "renderer": state.renderer.name(),
    }))
}
