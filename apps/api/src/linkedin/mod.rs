#![allow(dead_code)]

//! Pluggable LinkedIn profile data source.
//!
//! Direct scraping of LinkedIn is against their Terms of Service, so the
//! shipped implementation returns fixed mock data shaped like an authorized
//! API response. A real integration (LinkedIn official API with OAuth, or a
//! licensed data provider) implements `ProfileSource` and swaps in through
//! `AppState` without touching any caller.

pub mod handlers;

use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileSourceError {
    #[error("invalid LinkedIn URL: {0}")]
    InvalidUrl(String),

    #[error("profile source unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedInEducation {
    pub school: String,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedInExperience {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

/// Profile data as exposed by the source, independent of backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedInProfile {
    pub first_name: String,
    pub last_name: String,
    pub headline: Option<String>,
    pub summary: Option<String>,
    pub location: Option<String>,
    pub current_position: Option<String>,
    pub current_company: Option<String>,
    pub industry: Option<String>,
    pub skills: Vec<String>,
    pub education: Vec<LinkedInEducation>,
    pub experience: Vec<LinkedInExperience>,
    pub linkedin_profile_id: Option<String>,
    pub profile_picture_url: Option<String>,
}

/// Single-capability source interface: one URL in, one profile out.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_profile(&self, linkedin_url: &str)
        -> Result<LinkedInProfile, ProfileSourceError>;
}

/// Development/testing source returning canned data. The profile slug is
/// parsed from the URL so callers can at least verify URL handling end to end.
pub struct MockProfileSource {
    slug_pattern: Regex,
}

impl MockProfileSource {
    pub fn new() -> Self {
        Self {
            slug_pattern: Regex::new(r"linkedin\.com/in/([a-zA-Z0-9-]+)/?")
                .expect("slug pattern compiles"),
        }
    }

    /// Extracts the profile slug from a LinkedIn URL, if present.
    pub fn profile_slug(&self, linkedin_url: &str) -> Option<String> {
        self.slug_pattern
            .captures(linkedin_url)
            .map(|caps| caps[1].to_string())
    }
}

impl Default for MockProfileSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileSource for MockProfileSource {
    async fn fetch_profile(
        &self,
        linkedin_url: &str,
    ) -> Result<LinkedInProfile, ProfileSourceError> {
        let slug = self.profile_slug(linkedin_url);
        Ok(LinkedInProfile {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            headline: Some("Software Engineer | Full Stack Developer".to_string()),
            summary: Some(
                "Passionate software engineer with experience in web development".to_string(),
            ),
            location: Some("San Francisco Bay Area".to_string()),
            current_position: Some("Software Engineer".to_string()),
            current_company: Some("Tech Company".to_string()),
            industry: Some("Computer Software".to_string()),
            skills: ["Python", "JavaScript", "React", "Node.js", "AWS"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            education: vec![LinkedInEducation {
                school: "University Name".to_string(),
                degree: Some("Bachelor of Science".to_string()),
                field_of_study: Some("Computer Science".to_string()),
                start_year: Some(2015),
                end_year: Some(2019),
            }],
            experience: vec![LinkedInExperience {
                title: "Software Engineer".to_string(),
                company: "Tech Company".to_string(),
                location: Some("San Francisco, CA".to_string()),
                start_date: Some("2019-06".to_string()),
                end_date: None,
                description: Some("Developing full-stack web applications".to_string()),
            }],
            linkedin_profile_id: slug,
            profile_picture_url: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_slug_parsed() {
        let source = MockProfileSource::new();
        assert_eq!(
            source.profile_slug("https://www.linkedin.com/in/jane-doe-42/"),
            Some("jane-doe-42".to_string())
        );
    }

    #[test]
    fn test_profile_slug_absent() {
        let source = MockProfileSource::new();
        assert_eq!(source.profile_slug("https://example.com/jane"), None);
    }

    #[tokio::test]
    async fn test_mock_source_echoes_slug() {
        let source = MockProfileSource::new();
        let profile = source
            .fetch_profile("https://linkedin.com/in/jane-doe")
            .await
            .unwrap();
        assert_eq!(profile.linkedin_profile_id.as_deref(), Some("jane-doe"));
        assert_eq!(profile.first_name, "John");
    }

    #[tokio::test]
    async fn test_mock_source_tolerates_unparseable_url() {
        // The original stub still answers with canned data; only the slug is
        // missing. Kept for compatibility with the autofill flow.
        let source = MockProfileSource::new();
        let profile = source.fetch_profile("not a url").await.unwrap();
        assert_eq!(profile.linkedin_profile_id, None);
    }
}
