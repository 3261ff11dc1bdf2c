use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::auth::{hash_password, verify_password, AuthUser};
use crate::errors::AppError;
use crate::models::user::{UserProfileRow, UserRow};
use crate::state::AppState;

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for UserResponse {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// POST /api/v1/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    if !req.email.contains('@') {
        return Err(AppError::Validation("Invalid email address".to_string()));
    }
    if req.password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }

    let existing: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&req.email)
        .fetch_optional(&state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::Validation("Email already registered".to_string()));
    }

    let hashed = hash_password(&req.password).map_err(|e| AppError::Internal(e.into()))?;
    let user: UserRow =
        sqlx::query_as("INSERT INTO users (email, hashed_password) VALUES ($1, $2) RETURNING *")
            .bind(&req.email)
            .bind(&hashed)
            .fetch_one(&state.db)
            .await?;

    tracing::info!("Registered user {}", user.id);
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let user: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&req.email)
        .fetch_optional(&state.db)
        .await?;

    let user = match user {
        Some(user) if verify_password(&req.password, &user.hashed_password) => user,
        _ => return Err(AppError::Unauthorized),
    };
    if !user.is_active {
        return Err(AppError::Validation("Inactive user".to_string()));
    }

    let access_token = state
        .auth
        .issue_token(user.id)
        .map_err(|e| AppError::Internal(e.into()))?;
    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}

/// Profile fields accepted on create; also the shape of a full replace.
#[derive(Debug, Deserialize)]
pub struct CreateProfileRequest {
    pub first_name: String,
    pub last_name: String,
    pub headline: Option<String>,
    pub summary: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub current_position: Option<String>,
    pub current_company: Option<String>,
    pub industry: Option<String>,
    pub years_of_experience: Option<i32>,
    pub education_level: Option<String>,
    pub university: Option<String>,
    pub graduation_year: Option<i32>,
    pub major: Option<String>,
    pub grade: Option<String>,
    pub linkedin_url: Option<String>,
    pub skills: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
}

/// Partial update: absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub headline: Option<String>,
    pub summary: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub current_position: Option<String>,
    pub current_company: Option<String>,
    pub industry: Option<String>,
    pub years_of_experience: Option<i32>,
    pub education_level: Option<String>,
    pub university: Option<String>,
    pub graduation_year: Option<i32>,
    pub major: Option<String>,
    pub grade: Option<String>,
    pub linkedin_url: Option<String>,
    pub skills: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
}

fn to_json_array(values: &Option<Vec<String>>) -> Option<Value> {
    values.as_ref().map(|v| Value::from(v.clone()))
}

/// GET /api/v1/profile/me
pub async fn handle_get_my_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<UserProfileRow>, AppError> {
    let profile: Option<UserProfileRow> =
        sqlx::query_as("SELECT * FROM user_profiles WHERE user_id = $1")
            .bind(user.id)
            .fetch_optional(&state.db)
            .await?;
    profile.map(Json).ok_or_else(|| {
        AppError::NotFound("Profile not found. Please create a profile first.".to_string())
    })
}

/// POST /api/v1/profile
pub async fn handle_create_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<CreateProfileRequest>,
) -> Result<(StatusCode, Json<UserProfileRow>), AppError> {
    let existing: Option<UserProfileRow> =
        sqlx::query_as("SELECT * FROM user_profiles WHERE user_id = $1")
            .bind(user.id)
            .fetch_optional(&state.db)
            .await?;
    if existing.is_some() {
        return Err(AppError::Validation(
            "Profile already exists. Use update endpoint to modify.".to_string(),
        ));
    }

    let profile: UserProfileRow = sqlx::query_as(
        r#"
        INSERT INTO user_profiles
            (user_id, first_name, last_name, headline, summary, phone, location,
             current_position, current_company, industry, years_of_experience,
             education_level, university, graduation_year, major, grade,
             linkedin_url, skills, interests)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19)
        RETURNING *
        "#,
    )
    .bind(user.id)
    .bind(&req.first_name)
    .bind(&req.last_name)
    .bind(&req.headline)
    .bind(&req.summary)
    .bind(&req.phone)
    .bind(&req.location)
    .bind(&req.current_position)
    .bind(&req.current_company)
    .bind(&req.industry)
    .bind(req.years_of_experience)
    .bind(&req.education_level)
    .bind(&req.university)
    .bind(req.graduation_year)
    .bind(&req.major)
    .bind(&req.grade)
    .bind(&req.linkedin_url)
    .bind(to_json_array(&req.skills))
    .bind(to_json_array(&req.interests))
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(profile)))
}

/// PUT /api/v1/profile
pub async fn handle_update_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<UserProfileRow>, AppError> {
    let profile: Option<UserProfileRow> = sqlx::query_as(
        r#"
        UPDATE user_profiles SET
            first_name = COALESCE($2, first_name),
            last_name = COALESCE($3, last_name),
            headline = COALESCE($4, headline),
            summary = COALESCE($5, summary),
            phone = COALESCE($6, phone),
            location = COALESCE($7, location),
            current_position = COALESCE($8, current_position),
            current_company = COALESCE($9, current_company),
            industry = COALESCE($10, industry),
            years_of_experience = COALESCE($11, years_of_experience),
            education_level = COALESCE($12, education_level),
            university = COALESCE($13, university),
            graduation_year = COALESCE($14, graduation_year),
            major = COALESCE($15, major),
            grade = COALESCE($16, grade),
            linkedin_url = COALESCE($17, linkedin_url),
            skills = COALESCE($18, skills),
            interests = COALESCE($19, interests),
            updated_at = now()
        WHERE user_id = $1
        RETURNING *
        "#,
    )
    .bind(user.id)
    .bind(&req.first_name)
    .bind(&req.last_name)
    .bind(&req.headline)
    .bind(&req.summary)
    .bind(&req.phone)
    .bind(&req.location)
    .bind(&req.current_position)
    .bind(&req.current_company)
    .bind(&req.industry)
    .bind(req.years_of_experience)
    .bind(&req.education_level)
    .bind(&req.university)
    .bind(req.graduation_year)
    .bind(&req.major)
    .bind(&req.grade)
    .bind(&req.linkedin_url)
    .bind(to_json_array(&req.skills))
    .bind(to_json_array(&req.interests))
    .fetch_optional(&state.db)
    .await?;

    profile.map(Json).ok_or_else(|| {
        AppError::NotFound("Profile not found. Please create a profile first.".to_string())
    })
}

/// DELETE /api/v1/profile
pub async fn handle_delete_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<StatusCode, AppError> {
    let result = sqlx::query("DELETE FROM user_profiles WHERE user_id = $1")
        .bind(user.id)
        .execute(&state.db)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Profile not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}
