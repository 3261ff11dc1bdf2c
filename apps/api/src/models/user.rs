#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub hashed_password: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserProfileRow {
    pub id: Uuid,
    pub user_id: Uuid,
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
    pub linkedin_profile_id: Option<String>,
    pub linkedin_profile_data: Option<Value>,
    /// JSON array of skill strings.
    pub skills: Option<Value>,
    /// JSON array of interest strings.
    pub interests: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
