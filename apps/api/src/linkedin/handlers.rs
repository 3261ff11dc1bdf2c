use axum::{extract::State, Json};
use serde::Deserialize;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::linkedin::LinkedInProfile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LinkedInExtractRequest {
    pub linkedin_url: String,
}

/// POST /api/v1/linkedin/extract
pub async fn handle_extract_profile(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Json(req): Json<LinkedInExtractRequest>,
) -> Result<Json<LinkedInProfile>, AppError> {
    let profile = state
        .profiles
        .fetch_profile(&req.linkedin_url)
        .await
        .map_err(|e| AppError::ProfileSource(e.to_string()))?;
    Ok(Json(profile))
}
