//! Profile autofill: merges LinkedIn profile data and parsed resume fields
//! into a draft the client can review before saving. LinkedIn data wins;
//! resume fields fill whatever is still empty.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::linkedin::LinkedInProfile;
use crate::models::resume::ResumeRow;
use crate::parsing::extractor::ExtractedFields;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AutofillRequest {
    pub linkedin_url: Option<String>,
    pub resume_id: Option<Uuid>,
}

/// Draft profile assembled from the available sources. Everything is
/// optional; the client decides what to persist.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileDraft {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub headline: Option<String>,
    pub summary: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub current_position: Option<String>,
    pub current_company: Option<String>,
    pub industry: Option<String>,
    pub education_level: Option<String>,
    pub university: Option<String>,
    pub graduation_year: Option<i32>,
    pub major: Option<String>,
    pub linkedin_url: Option<String>,
    pub skills: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct AutofillResponse {
    pub success: bool,
    pub profile_data: Option<ProfileDraft>,
    pub linkedin_data: Option<LinkedInProfile>,
    pub resume_data: Option<ExtractedFields>,
    pub message: String,
}

impl AutofillResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            profile_data: None,
            linkedin_data: None,
            resume_data: None,
            message: message.into(),
        }
    }
}

/// POST /api/v1/profile/autofill
///
/// Source failures come back as `success: false` payloads rather than HTTP
/// errors, so a partially usable client flow stays usable.
pub async fn handle_autofill_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<AutofillRequest>,
) -> Result<Json<AutofillResponse>, AppError> {
    if req.linkedin_url.is_none() && req.resume_id.is_none() {
        return Ok(Json(AutofillResponse::failure(
            "Please provide LinkedIn URL or resume ID",
        )));
    }

    let linkedin_data = match &req.linkedin_url {
        Some(url) => match state.profiles.fetch_profile(url).await {
            Ok(profile) => Some(profile),
            Err(e) => {
                return Ok(Json(AutofillResponse::failure(format!(
                    "Failed to extract LinkedIn data: {e}"
                ))))
            }
        },
        None => None,
    };

    let resume_data = match req.resume_id {
        Some(resume_id) => {
            let resume: Option<ResumeRow> =
                sqlx::query_as("SELECT * FROM resumes WHERE id = $1 AND user_id = $2")
                    .bind(resume_id)
                    .bind(user.id)
                    .fetch_optional(&state.db)
                    .await?;
            let Some(resume) = resume else {
                return Ok(Json(AutofillResponse::failure("Resume not found")));
            };
            if resume.processing_status != "completed" {
                return Ok(Json(AutofillResponse::failure(format!(
                    "Resume processing status: {}",
                    resume.processing_status
                ))));
            }
            resume
                .parsed_data
                .and_then(|v| serde_json::from_value::<ExtractedFields>(v).ok())
        }
        None => None,
    };

    let profile_data = merge_profile_sources(
        linkedin_data.as_ref(),
        req.linkedin_url.as_deref(),
        resume_data.as_ref(),
    );

    Ok(Json(AutofillResponse {
        success: true,
        profile_data: Some(profile_data),
        linkedin_data,
        resume_data,
        message: "Profile data extracted successfully".to_string(),
    }))
}

/// Pure merge of the two sources. LinkedIn fields take precedence; resume
/// fields only fill gaps. The resume name splits at the first space into
/// first/last.
pub fn merge_profile_sources(
    linkedin: Option<&LinkedInProfile>,
    linkedin_url: Option<&str>,
    resume: Option<&ExtractedFields>,
) -> ProfileDraft {
    let mut draft = ProfileDraft::default();

    if let Some(li) = linkedin {
        draft.first_name = Some(li.first_name.clone());
        draft.last_name = Some(li.last_name.clone());
        draft.headline = li.headline.clone();
        draft.summary = li.summary.clone();
        draft.location = li.location.clone();
        draft.current_position = li.current_position.clone();
        draft.current_company = li.current_company.clone();
        draft.industry = li.industry.clone();
        if !li.skills.is_empty() {
            draft.skills = Some(li.skills.clone());
        }
        draft.linkedin_url = linkedin_url.map(str::to_string);
    }

    if let Some(fields) = resume {
        if draft.first_name.is_none() {
            if let Some(name) = &fields.name {
                match name.split_once(' ') {
                    Some((first, last)) => {
                        draft.first_name = Some(first.to_string());
                        draft.last_name = Some(last.to_string());
                    }
                    None => draft.first_name = Some(name.clone()),
                }
            }
        }
        if draft.email.is_none() {
            draft.email = fields.email.clone();
        }
        if draft.phone.is_none() {
            draft.phone = fields.phone.clone();
        }
        if draft.skills.is_none() && !fields.skills.is_empty() {
            draft.skills = Some(fields.skills.clone());
        }
        if let Some(edu) = fields.education.first() {
            draft.education_level = Some(edu.degree.clone());
            draft.university = edu.institution.clone();
            draft.graduation_year = edu.year;
            draft.major = Some(edu.field_of_study.clone());
        }
    }

    draft
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linkedin::{MockProfileSource, ProfileSource};
    use crate::parsing::extractor::FieldExtractor;

    fn resume_fields(text: &str) -> ExtractedFields {
        FieldExtractor::new().extract(text)
    }

    async fn mock_profile() -> LinkedInProfile {
        MockProfileSource::new()
            .fetch_profile("https://linkedin.com/in/john-doe")
            .await
            .unwrap()
    }

    #[test]
    fn test_merge_empty_sources() {
        let draft = merge_profile_sources(None, None, None);
        assert_eq!(draft, ProfileDraft::default());
    }

    #[test]
    fn test_merge_resume_only_splits_name() {
        let fields = resume_fields("Jane Q Doe\njane@example.com");
        let draft = merge_profile_sources(None, None, Some(&fields));
        assert_eq!(draft.first_name.as_deref(), Some("Jane"));
        assert_eq!(draft.last_name.as_deref(), Some("Q Doe"));
        assert_eq!(draft.email.as_deref(), Some("jane@example.com"));
    }

    #[test]
    fn test_merge_single_token_name() {
        let fields = resume_fields("Prince\nprince@example.com");
        let draft = merge_profile_sources(None, None, Some(&fields));
        assert_eq!(draft.first_name.as_deref(), Some("Prince"));
        assert_eq!(draft.last_name, None);
    }

    #[tokio::test]
    async fn test_merge_linkedin_wins_over_resume() {
        let profile = mock_profile().await;
        let fields = resume_fields("Jane Doe\njane@example.com");
        let draft = merge_profile_sources(
            Some(&profile),
            Some("https://linkedin.com/in/john-doe"),
            Some(&fields),
        );
        // LinkedIn name kept; resume still fills email.
        assert_eq!(draft.first_name.as_deref(), Some("John"));
        assert_eq!(draft.last_name.as_deref(), Some("Doe"));
        assert_eq!(draft.email.as_deref(), Some("jane@example.com"));
        assert_eq!(
            draft.linkedin_url.as_deref(),
            Some("https://linkedin.com/in/john-doe")
        );
        // LinkedIn skills already present, so resume skills are ignored.
        assert_eq!(draft.skills.as_ref().map(Vec::len), Some(5));
    }

    #[test]
    fn test_merge_maps_first_education_entry() {
        let fields = resume_fields("Jane Doe\n\nEducation:\nStanford University\n2020");
        let draft = merge_profile_sources(None, None, Some(&fields));
        assert_eq!(draft.education_level.as_deref(), Some("Bachelor's"));
        assert_eq!(draft.university.as_deref(), Some("Stanford University"));
        assert_eq!(draft.graduation_year, Some(2020));
        assert_eq!(draft.major.as_deref(), Some("Computer Science"));
    }
}
