//! Axum route handlers for the Profile API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::resume::ResumeContent;
use crate::profiles::{all_profiles, available_slugs, get_profile_by_slug, ProfileEntry};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileListResponse {
    pub slugs: Vec<&'static str>,
    pub profiles: Vec<ProfileEntry>,
}

#[derive(Debug, Serialize)]
pub struct ProfileDetailResponse {
    #[serde(flatten)]
    pub entry: ProfileEntry,
    pub profile: ResumeContent,
}

/// GET /api/v1/profiles
pub async fn handle_list_profiles() -> Json<ProfileListResponse> {
    Json(ProfileListResponse {
        slugs: available_slugs(),
        profiles: all_profiles().to_vec(),
    })
}

/// GET /api/v1/profiles/:slug
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ProfileDetailResponse>, AppError> {
    let entry = resolve_slug(&slug)?;
    let profile = state.profiles.load(entry.resume).await?;
    Ok(Json(ProfileDetailResponse {
        entry: *entry,
        profile,
    }))
}

/// Empty slugs are rejected with 400, unknown slugs with 404.
pub(crate) fn resolve_slug(slug: &str) -> Result<&'static ProfileEntry, AppError> {
    if slug.trim().is_empty() {
        return Err(AppError::Validation("profile slug is required".to_string()));
    }
    get_profile_by_slug(slug).ok_or_else(|| AppError::NotFound(format!("Profile \"{slug}\" not found")))
}
