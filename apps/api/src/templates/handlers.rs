//! Axum route handlers for the Template and Render API.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::models::resume::ResumeContent;
use crate::state::AppState;
use crate::templates::factory::{render, SectionLabels};
use crate::templates::style::HeaderLayout;
use crate::templates::tree::DocumentTree;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    #[serde(default)]
    pub template: Option<String>,
    pub content: ResumeContent,
}

#[derive(Debug, Serialize)]
pub struct TemplateSummary {
    pub id: String,
    pub header_layout: HeaderLayout,
    pub labels: SectionLabels,
}

#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    pub default: String,
    pub templates: Vec<TemplateSummary>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/templates
pub async fn handle_list_templates(State(state): State<AppState>) -> Json<TemplateListResponse> {
    let templates = state
        .templates
        .templates()
        .map(|t| TemplateSummary {
            id: t.id.clone(),
            header_layout: t.header_layout,
            labels: t.labels.clone(),
        })
        .collect();

    Json(TemplateListResponse {
        default: state.templates.get_template(None).id.clone(),
        templates,
    })
}

/// POST /api/v1/render/tree
///
/// Returns the document tree without invoking the render backend.
pub async fn handle_render_tree(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<Json<DocumentTree>, AppError> {
    Ok(Json(build_tree(&state, &request)?))
}

/// POST /api/v1/render
///
/// Renders through the configured backend and streams the bytes back.
pub async fn handle_render(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<Response, AppError> {
    let tree = build_tree(&state, &request)?;
    let document = state.renderer.render(&tree).await?;

    Ok((
        [(header::CONTENT_TYPE, document.content_type)],
        document.bytes,
    )
        .into_response())
}

/// Rejects content without a name, then renders under the requested template.
pub(crate) fn build_tree(state: &AppState, request: &RenderRequest) -> Result<DocumentTree, AppError> {
    validate_content(&request.content)?;
    let template = state.templates.get_template(request.template.as_deref());
    debug!(
        template = %template.id,
        requested = ?request.template,
        "rendering document tree"
    );
    Ok(render(&template, &request.content))
}

pub(crate) fn validate_content(content: &ResumeContent) -> Result<(), AppError> {
    if content.name.trim().is_empty() {
        return Err(AppError::Validation("content.name is required".to_string()));
    }
    Ok(())
}
