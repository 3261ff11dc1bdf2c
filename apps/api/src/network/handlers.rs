use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::network::ConnectionRecommendationRow;
use crate::network::is_valid_status;
use crate::state::AppState;

/// GET /api/v1/recommendations
pub async fn handle_list_recommendations(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<ConnectionRecommendationRow>>, AppError> {
    let recommendations: Vec<ConnectionRecommendationRow> = sqlx::query_as(
        "SELECT * FROM connection_recommendations WHERE user_id = $1 ORDER BY total_score DESC",
    )
    .bind(user.id)
    .fetch_all(&state.db)
    .await?;
    Ok(Json(recommendations))
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

/// PATCH /api/v1/recommendations/:id/status
pub async fn handle_update_recommendation_status(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<StatusUpdate>,
) -> Result<Json<ConnectionRecommendationRow>, AppError> {
    if !is_valid_status(&req.status) {
        return Err(AppError::Validation(format!(
            "Invalid status '{}'",
            req.status
        )));
    }

    let updated: Option<ConnectionRecommendationRow> = sqlx::query_as(
        r#"
        UPDATE connection_recommendations
        SET status = $3, updated_at = now()
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(user.id)
    .bind(&req.status)
    .fetch_optional(&state.db)
    .await?;

    updated
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Recommendation not found".to_string()))
}
