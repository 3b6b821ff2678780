//! Axum route handlers for the manual generation flow.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::manual::prompt::{build_prompt, prompt_vars};
use crate::manual::{attachment_filename, extract_json_payload, merge, GeneratedContent};
use crate::profiles::handlers::resolve_slug;
use crate::profiles::{prompt_for_profile, template_for_profile};
use crate::state::AppState;
use crate::templates::factory::render;
use crate::templates::handlers::validate_content;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ManualPromptRequest {
    pub profile: String,
    #[serde(default)]
    pub jd: String,
}

#[derive(Debug, Serialize)]
pub struct ManualPromptResponse {
    pub prompt: String,
    pub template: String,
}

#[derive(Debug, Deserialize)]
pub struct ManualGenerateRequest {
    pub profile: String,
    #[serde(default, alias = "chatgptResponse")]
    pub chatgpt_response: String,
    #[serde(default, alias = "companyName")]
    pub company_name: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/manual/prompt
///
/// Builds the full generation prompt for a profile and job description.
pub async fn handle_manual_prompt(
    State(state): State<AppState>,
    Json(request): Json<ManualPromptRequest>,
) -> Result<Json<ManualPromptResponse>, AppError> {
    let entry = resolve_slug(&request.profile)?;
    if request.jd.trim().is_empty() {
        return Err(AppError::Validation("jd cannot be empty".to_string()));
    }

    let profile = state.profiles.load(entry.resume).await?;
    let template = state.prompts.load(prompt_for_profile(&request.profile)).await;
    let vars = prompt_vars(&profile, &request.jd, Local::now().date_naive());

    debug!(profile = entry.slug, prompt = entry.prompt, "built manual prompt");

    Ok(Json(ManualPromptResponse {
        prompt: build_prompt(&template, &vars),
        template: template_for_profile(&request.profile).to_string(),
    }))
}

/// POST /api/v1/manual/generate
///
/// Parses a pasted model reply, merges it with the stored profile and returns
/// the rendered document as an attachment.
pub async fn handle_manual_generate(
    State(state): State<AppState>,
    Json(request): Json<ManualGenerateRequest>,
) -> Result<Response, AppError> {
    let entry = resolve_slug(&request.profile)?;
    if request.chatgpt_response.trim().is_empty() {
        return Err(AppError::Validation(
            "chatgpt_response (JSON) is required".to_string(),
        ));
    }

    let profile = state.profiles.load(entry.resume).await?;
    let generated = GeneratedContent::from_value(extract_json_payload(&request.chatgpt_response)?)?;
    let content = merge(&profile, generated);
    validate_content(&content)?;

    let template = state
        .templates
        .get_template(Some(template_for_profile(&request.profile)));
    let tree = render(&template, &content);
    let document = state.renderer.render(&tree).await?;

    let filename = attachment_filename(
        entry.resume,
        request.company_name.as_deref(),
        &document.extension,
    );
    info!(
        profile = entry.slug,
        template = %template.id,
        backend = state.renderer.name(),
        %filename,
        "generated manual resume"
    );

    Ok((
        [
            (header::CONTENT_TYPE, document.content_type),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        document.bytes,
    )
        .into_response())
}
