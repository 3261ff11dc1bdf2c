#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub filename: String,
    pub s3_key: String,
    pub file_size: i64,
    pub file_type: String,
    pub raw_text: Option<String>,
    /// Full `ParsedResume` fields as stored JSON.
    pub parsed_data: Option<Value>,
    pub extracted_name: Option<String>,
    pub extracted_email: Option<String>,
    pub extracted_phone: Option<String>,
    pub extracted_skills: Option<Value>,
    pub extracted_education: Option<Value>,
    pub extracted_experience: Option<Value>,
    pub is_primary: bool,
    /// pending | processing | completed | failed
    pub processing_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
