#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompanyRow {
    pub id: Uuid,
    pub name: String,
    pub linkedin_company_id: Option<String>,
    pub industry: Option<String>,
    pub company_size: Option<String>,
    pub headquarters: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub specialties: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompanyEmployeeRow {
    pub id: Uuid,
    pub company_id: Uuid,
    pub linkedin_profile_id: Option<String>,
    pub name: String,
    pub headline: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub profile_url: Option<String>,
    pub profile_data: Option<Value>,
    pub skills: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ConnectionRecommendationRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub employee_id: Uuid,
    pub total_score: f64,
    pub industry_score: Option<f64>,
    pub skill_score: Option<f64>,
    pub experience_score: Option<f64>,
    pub geographic_score: Option<f64>,
    pub mutual_connections_score: Option<f64>,
    /// pending | accepted | rejected | sent
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
