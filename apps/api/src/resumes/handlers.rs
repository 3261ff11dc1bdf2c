use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::resume::ResumeRow;
use crate::state::AppState;
use crate::storage;

/// Resume representation returned to clients: everything except the raw text
/// and the full parsed blob, which stay server-side.
#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub filename: String,
    pub s3_key: String,
    pub file_size: i64,
    pub file_type: String,
    pub is_primary: bool,
    pub processing_status: String,
    pub extracted_name: Option<String>,
    pub extracted_email: Option<String>,
    pub extracted_phone: Option<String>,
    pub extracted_skills: Option<Value>,
    pub extracted_education: Option<Value>,
    pub extracted_experience: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ResumeRow> for ResumeResponse {
    fn from(row: ResumeRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            filename: row.filename,
            s3_key: row.s3_key,
            file_size: row.file_size,
            file_type: row.file_type,
            is_primary: row.is_primary,
            processing_status: row.processing_status,
            extracted_name: row.extracted_name,
            extracted_email: row.extracted_email,
            extracted_phone: row.extracted_phone,
            extracted_skills: row.extracted_skills,
            extracted_education: row.extracted_education,
            extracted_experience: row.extracted_experience,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// POST /api/v1/resumes
///
/// Multipart PDF upload: store the file, record the row as `processing`, run
/// the parsing pipeline, then persist the extracted fields. A parse failure
/// marks the row `failed` and surfaces the upstream text-extraction error.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ResumeResponse>), AppError> {
    let (filename, data) = read_file_field(&mut multipart).await?;
    if !filename.to_lowercase().ends_with(".pdf") {
        return Err(AppError::Validation(
            "Only PDF files are supported".to_string(),
        ));
    }

    let s3_key = storage::resume_key(user.id, &filename);
    state.store.put(&s3_key, data.clone()).await?;

    let resume: ResumeRow = sqlx::query_as(
        r#"
        INSERT INTO resumes (user_id, filename, s3_key, file_size, file_type, processing_status)
        VALUES ($1, $2, $3, $4, 'PDF', 'processing')
        RETURNING *
        "#,
    )
    .bind(user.id)
    .bind(&filename)
    .bind(&s3_key)
    .bind(data.len() as i64)
    .fetch_one(&state.db)
    .await?;

    // pdf-extract is CPU-bound; keep it off the async workers.
    let parser = state.parser.clone();
    let content = data.to_vec();
    let parsed = tokio::task::spawn_blocking(move || parser.parse(&content))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("parser task panicked: {e}")))?;

    let parsed = match parsed {
        Ok(parsed) => parsed,
        Err(e) => {
            sqlx::query(
                "UPDATE resumes SET processing_status = 'failed', updated_at = now() WHERE id = $1",
            )
            .bind(resume.id)
            .execute(&state.db)
            .await?;
            tracing::warn!("Resume {} failed to parse: {e}", resume.id);
            return Err(e.into());
        }
    };

    let fields_json =
        serde_json::to_value(&parsed.fields).map_err(|e| AppError::Internal(e.into()))?;
    let skills_json =
        serde_json::to_value(&parsed.fields.skills).map_err(|e| AppError::Internal(e.into()))?;
    let education_json =
        serde_json::to_value(&parsed.fields.education).map_err(|e| AppError::Internal(e.into()))?;
    let experience_json = serde_json::to_value(&parsed.fields.experience)
        .map_err(|e| AppError::Internal(e.into()))?;

    let resume: ResumeRow = sqlx::query_as(
        r#"
        UPDATE resumes SET
            raw_text = $2,
            parsed_data = $3,
            extracted_name = $4,
            extracted_email = $5,
            extracted_phone = $6,
            extracted_skills = $7,
            extracted_education = $8,
            extracted_experience = $9,
            processing_status = 'completed',
            updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(resume.id)
    .bind(&parsed.raw_text)
    .bind(fields_json)
    .bind(&parsed.fields.name)
    .bind(&parsed.fields.email)
    .bind(&parsed.fields.phone)
    .bind(skills_json)
    .bind(education_json)
    .bind(experience_json)
    .fetch_one(&state.db)
    .await?;

    tracing::info!("Resume {} uploaded and parsed for user {}", resume.id, user.id);
    Ok((StatusCode::CREATED, Json(resume.into())))
}

async fn read_file_field(multipart: &mut Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field
                .file_name()
                .map(|s| s.to_string())
                .ok_or_else(|| AppError::Validation("Missing filename".to_string()))?;
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            return Ok((filename, data));
        }
    }
    Err(AppError::Validation(
        "Missing 'file' multipart field".to_string(),
    ))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeResponse>, AppError> {
    let resume: Option<ResumeRow> =
        sqlx::query_as("SELECT * FROM resumes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user.id)
            .fetch_optional(&state.db)
            .await?;
    resume
        .map(|r| Json(r.into()))
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<ResumeResponse>>, AppError> {
    let resumes: Vec<ResumeRow> =
        sqlx::query_as("SELECT * FROM resumes WHERE user_id = $1 ORDER BY created_at DESC")
            .bind(user.id)
            .fetch_all(&state.db)
            .await?;
    Ok(Json(resumes.into_iter().map(Into::into).collect()))
}
