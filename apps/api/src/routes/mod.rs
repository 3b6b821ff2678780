pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::manual::handlers as manual;
use crate::profiles::handlers as profiles;
use crate::state::AppState;
use crate::templates::handlers as templates;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Templates & rendering
        .route("/api/v1/templates", get(templates::handle_list_templates))
        .route("/api/v1/render", post(templates::handle_render))
        .route("/api/v1/render/tree", post(templates::handle_render_tree))
        // Profiles
        .route("/api/v1/profiles", get(profiles::handle_list_profiles))
        .route("/api/v1/profiles/:slug", get(profiles::handle_get_profile))
        // Manual flow
        .route("/api/v1/manual/prompt", post(manual::handle_manual_prompt))
        .route(
            "/api/v1/manual/generate",
            post(manual::handle_manual_generate),
        )
        .with_state(state)
}
