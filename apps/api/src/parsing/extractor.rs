//! Heuristic resume field extraction.
//!
//! A fixed table of compiled patterns plus the skill vocabulary, applied as
//! independent best-effort passes over raw resume text. Each pass tolerates
//! absence (a pattern that doesn't match yields a null/empty field, never an
//! error), so `extract` is total over any well-formed input, including the
//! empty string.
//!
//! Section boundaries are intentionally naive: headers are found anywhere in
//! the text (case-insensitive keyword, optional colon) and sections end at a
//! blank line or the next capitalized line. Irregular layouts mis-segment;
//! that is an accepted limitation of the heuristic, not something to patch
//! per-layout.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::parsing::vocabulary::{title_case, SKILL_VOCABULARY};

/// Best-guess structured fields inferred from raw resume text.
/// Always fully constructed: the heuristics are independent, so one field
/// failing to match never blocks the others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub skills: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: Option<String>,
    /// Placeholder, not inferred from text.
    pub degree: String,
    /// Placeholder, not inferred from text.
    pub field_of_study: String,
    pub year: Option<i32>,
    pub gpa: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub position: Option<String>,
    pub company: Option<String>,
    /// First 4-digit year found in the entry, if any.
    pub start_date: Option<String>,
    /// Last 4-digit year when more than one was found, else literal "Present".
    pub end_date: String,
    pub description: Option<String>,
}

const NAME_STOPWORDS: &[&str] = &["resume", "cv", "curriculum"];
const SUMMARY_MAX_CHARS: usize = 500;
const MAX_EXPERIENCE_ENTRIES: usize = 3;

/// The compiled pattern table. Built once at startup and shared read-only;
/// `extract` is a pure function of its input and this table.
pub struct FieldExtractor {
    email: Regex,
    phone: Regex,
    linkedin_url: Regex,
    year: Regex,
    skills_section: Regex,
    education_section: Regex,
    organization: Regex,
    experience_section: Regex,
    entry_boundary: Regex,
    summary_section: Regex,
}

impl FieldExtractor {
    pub fn new() -> Self {
        // Header keywords match case-insensitively; the [A-Z] terminators are
        // deliberately case-sensitive so a section runs until a blank line or
        // the next capitalized line.
        Self {
            email: compile(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b"),
            phone: compile(r"(?:\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}"),
            linkedin_url: compile(r"https?://(?:www\.)?linkedin\.com/in/[\w-]+/?"),
            year: compile(r"\b(?:19|20)\d{2}\b"),
            skills_section: compile(r"(?s)(?i:skills?)\s*:?\s*\n(.*?)(?:\n\n|\n[A-Z])"),
            education_section: compile(r"(?s)(?i:education)\s*:?\s*\n(.*?)(?:\n\n[A-Z]|$)"),
            organization: compile(r"[A-Z][a-z]+(?: [A-Z][a-z]+)*\s+(?:University|Institute|College)"),
            experience_section: compile(
                r"(?s)(?i:experience|employment|work history)\s*:?\s*\n(.*?)(?:\n\n(?i:education|skills)|$)",
            ),
            entry_boundary: compile(r"\n[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\s*[,-]"),
            summary_section: compile(r"(?s)(?i:summary|profile|objective)\s*:?\s*\n(.*?)(?:\n\n|\n[A-Z])"),
        }
    }

    /// Runs every heuristic against the raw text. Never fails; fields whose
    /// pattern finds nothing come back null/empty.
    pub fn extract(&self, raw_text: &str) -> ExtractedFields {
        ExtractedFields {
            name: self.extract_name(raw_text),
            email: self.first_match(&self.email, raw_text),
            phone: self.first_match(&self.phone, raw_text),
            linkedin_url: self.first_match(&self.linkedin_url, raw_text),
            skills: self.extract_skills(raw_text),
            education: self.extract_education(raw_text),
            experience: self.extract_experience(raw_text),
            summary: self.extract_summary(raw_text),
        }
    }

    fn first_match(&self, pattern: &Regex, text: &str) -> Option<String> {
        pattern.find(text).map(|m| m.as_str().to_string())
    }

    /// The first non-blank line, accepted as a name only if it is short
    /// (at most 4 tokens) and free of title keywords like "resume".
    fn extract_name(&self, text: &str) -> Option<String> {
        let first = text.lines().map(str::trim).find(|line| !line.is_empty())?;
        let lower = first.to_lowercase();
        let short = first.split_whitespace().count() <= 4;
        if short && !NAME_STOPWORDS.iter().any(|kw| lower.contains(kw)) {
            Some(first.to_string())
        } else {
            None
        }
    }

    /// Substring membership of every vocabulary term against the skills
    /// section (or the whole text when no section is found), lowercased.
    /// Each matched term appears exactly once, title-cased, in vocabulary
    /// order; callers treat the collection as unordered.
    fn extract_skills(&self, text: &str) -> Vec<String> {
        let scoped = match self.skills_section.captures(text) {
            Some(caps) => caps[1].to_lowercase(),
            None => text.to_lowercase(),
        };
        SKILL_VOCABULARY
            .iter()
            .filter(|term| scoped.contains(*term))
            .map(|term| title_case(term))
            .collect()
    }

    /// Zero or one entry: the first organization name found in the education
    /// section, paired with the last 4-digit year. Degree and field of study
    /// are fixed placeholders.
    fn extract_education(&self, text: &str) -> Vec<EducationEntry> {
        let Some(caps) = self.education_section.captures(text) else {
            return Vec::new();
        };
        let section = &caps[1];
        let Some(institution) = self.organization.find(section) else {
            return Vec::new();
        };
        let year = self
            .year
            .find_iter(section)
            .last()
            .and_then(|m| m.as_str().parse::<i32>().ok());
        vec![EducationEntry {
            institution: Some(institution.as_str().to_string()),
            degree: "Bachelor's".to_string(),
            field_of_study: "Computer Science".to_string(),
            year,
            gpa: None,
        }]
    }

    /// Splits the experience section into entries at lines beginning with a
    /// capitalized word followed by a comma or hyphen, keeps at most the
    /// first three, and reads position/company/dates positionally from each.
    fn extract_experience(&self, text: &str) -> Vec<ExperienceEntry> {
        let Some(caps) = self.experience_section.captures(text) else {
            return Vec::new();
        };
        let section = caps.get(1).map_or("", |m| m.as_str());

        let mut entries = Vec::new();
        for chunk in split_at_boundaries(&self.entry_boundary, section)
            .into_iter()
            .take(MAX_EXPERIENCE_ENTRIES)
        {
            let lines: Vec<&str> = chunk
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect();
            if lines.is_empty() {
                continue;
            }
            let years: Vec<&str> = self.year.find_iter(chunk).map(|m| m.as_str()).collect();
            let end_date = if years.len() > 1 {
                years[years.len() - 1].to_string()
            } else {
                "Present".to_string()
            };
            entries.push(ExperienceEntry {
                position: Some(lines[0].to_string()),
                company: lines.get(1).map(|s| s.to_string()),
                start_date: years.first().map(|y| y.to_string()),
                end_date,
                description: if lines.len() > 2 {
                    Some(lines[2..].join(" "))
                } else {
                    None
                },
            });
        }
        entries
    }

    /// Summary/profile/objective section body, trimmed and truncated to the
    /// first 500 characters.
    fn extract_summary(&self, text: &str) -> Option<String> {
        let caps = self.summary_section.captures(text)?;
        let body = caps[1].trim().to_string();
        if body.chars().count() > SUMMARY_MAX_CHARS {
            Some(body.chars().take(SUMMARY_MAX_CHARS).collect())
        } else {
            Some(body)
        }
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn compile(pattern: &str) -> Regex {
    // All patterns are fixed string literals, validated by the tests below.
    Regex::new(pattern).expect("extractor pattern compiles")
}

/// Splits `section` at every boundary match, dropping the leading newline of
/// each piece. The text before the first boundary is the first piece, so a
/// section with no boundaries yields itself as a single entry.
fn split_at_boundaries<'a>(boundary: &Regex, section: &'a str) -> Vec<&'a str> {
    let mut starts = vec![0usize];
    starts.extend(boundary.find_iter(section).map(|m| m.start()));

    let mut chunks = Vec::with_capacity(starts.len());
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(section.len());
        let chunk = &section[start..end];
        chunks.push(chunk.strip_prefix('\n').unwrap_or(chunk));
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> FieldExtractor {
        FieldExtractor::new()
    }

    #[test]
    fn test_empty_input_yields_empty_record() {
        let fields = extractor().extract("");
        assert_eq!(fields.name, None);
        assert_eq!(fields.email, None);
        assert_eq!(fields.phone, None);
        assert_eq!(fields.linkedin_url, None);
        assert!(fields.skills.is_empty());
        assert!(fields.education.is_empty());
        assert!(fields.experience.is_empty());
        assert_eq!(fields.summary, None);
    }

    #[test]
    fn test_extract_is_deterministic() {
        let text = "Jane Doe\njane@example.com\nSkills:\nPython, Docker\n\nOther";
        let ex = extractor();
        assert_eq!(ex.extract(text), ex.extract(text));
    }

    #[test]
    fn test_email_first_match() {
        let fields = extractor().extract("Contact: jane.doe@example.com");
        assert_eq!(fields.email.as_deref(), Some("jane.doe@example.com"));
    }

    #[test]
    fn test_email_picks_first_of_many() {
        let fields = extractor().extract("a@example.com then b@example.org");
        assert_eq!(fields.email.as_deref(), Some("a@example.com"));
    }

    #[test]
    fn test_phone_with_parens_and_dash() {
        let fields = extractor().extract("Call me at (415) 555-1234");
        assert_eq!(fields.phone.as_deref(), Some("(415) 555-1234"));
    }

    #[test]
    fn test_phone_with_country_code() {
        let fields = extractor().extract("Reach: +1 415 555 1234");
        assert_eq!(fields.phone.as_deref(), Some("+1 415 555 1234"));
    }

    #[test]
    fn test_linkedin_url() {
        let fields = extractor().extract("See https://www.linkedin.com/in/jane-doe for more");
        assert_eq!(
            fields.linkedin_url.as_deref(),
            Some("https://www.linkedin.com/in/jane-doe")
        );
    }

    #[test]
    fn test_name_accepted_from_first_line() {
        let fields = extractor().extract("John Doe\nSoftware Engineer");
        assert_eq!(fields.name.as_deref(), Some("John Doe"));
    }

    #[test]
    fn test_name_rejected_on_title_keyword() {
        let fields = extractor().extract("CURRICULUM VITAE\nJohn Doe");
        assert_eq!(fields.name, None);
    }

    #[test]
    fn test_name_rejected_when_too_long() {
        let fields = extractor().extract("A Very Long Heading Line Indeed\njunk");
        assert_eq!(fields.name, None);
    }

    #[test]
    fn test_name_skips_leading_blank_lines() {
        let fields = extractor().extract("\n\n  Jane Doe\nEngineer");
        assert_eq!(fields.name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_skills_deduplicated_and_title_cased() {
        // "Python" twice and "python" once -> exactly one entry.
        let fields = extractor().extract("Worked with Python and Python daily. Loves python.");
        assert_eq!(fields.skills, vec!["Python".to_string()]);
    }

    #[test]
    fn test_skills_section_scopes_matching() {
        let text = "Jane Doe\n\nSkills:\nPython, Docker, Kubernetes\n\nHobbies:\nchess";
        let fields = extractor().extract(text);
        assert!(fields.skills.contains(&"Python".to_string()));
        assert!(fields.skills.contains(&"Docker".to_string()));
        assert!(fields.skills.contains(&"Kubernetes".to_string()));
    }

    #[test]
    fn test_skills_substring_semantics() {
        // Substring membership is intentional: "javascript" also contains "java".
        let fields = extractor().extract("I write JavaScript");
        assert!(fields.skills.contains(&"Java".to_string()));
        assert!(fields.skills.contains(&"Javascript".to_string()));
    }

    #[test]
    fn test_skills_multiword_term() {
        let fields = extractor().extract("Focus areas: machine learning and data analysis");
        assert!(fields.skills.contains(&"Machine Learning".to_string()));
        assert!(fields.skills.contains(&"Data Analysis".to_string()));
    }

    #[test]
    fn test_education_single_entry_shape() {
        let fields = extractor().extract("Education:\nStanford University\n2020");
        assert_eq!(fields.education.len(), 1);
        let entry = &fields.education[0];
        assert_eq!(entry.institution.as_deref(), Some("Stanford University"));
        assert_eq!(entry.year, Some(2020));
        assert_eq!(entry.degree, "Bachelor's");
        assert_eq!(entry.field_of_study, "Computer Science");
        assert_eq!(entry.gpa, None);
    }

    #[test]
    fn test_education_takes_last_year() {
        let fields = extractor().extract("Education:\nStanford University\n2016 - 2020");
        assert_eq!(fields.education[0].year, Some(2020));
    }

    #[test]
    fn test_education_without_organization_yields_nothing() {
        let fields = extractor().extract("Education:\nself-taught since 2015");
        assert!(fields.education.is_empty());
    }

    #[test]
    fn test_education_year_optional() {
        let fields = extractor().extract("Education:\nStanford University");
        assert_eq!(fields.education.len(), 1);
        assert_eq!(fields.education[0].year, None);
    }

    #[test]
    fn test_experience_capped_at_three_entries() {
        let text = "Experience:\nAlpha, Inc\n2015\nBeta, Inc\n2017\nGamma, Inc\n2019\nDelta, Inc\n2021\nEpsilon, Inc\n2023";
        let fields = extractor().extract(text);
        assert_eq!(fields.experience.len(), 3);
        assert_eq!(fields.experience[0].position.as_deref(), Some("Alpha, Inc"));
    }

    #[test]
    fn test_experience_positional_fields() {
        let text = "Experience:\nSoftware Engineer\nAcme Corp\n2019\nBuilt the platform";
        let fields = extractor().extract(text);
        assert_eq!(fields.experience.len(), 1);
        let entry = &fields.experience[0];
        assert_eq!(entry.position.as_deref(), Some("Software Engineer"));
        assert_eq!(entry.company.as_deref(), Some("Acme Corp"));
        assert_eq!(entry.start_date.as_deref(), Some("2019"));
        assert_eq!(entry.end_date, "Present");
        assert_eq!(entry.description.as_deref(), Some("2019 Built the platform"));
    }

    #[test]
    fn test_experience_end_date_from_second_year() {
        let text = "Experience:\nEngineer\nAcme Corp\n2017 to 2021";
        let fields = extractor().extract(text);
        assert_eq!(fields.experience[0].start_date.as_deref(), Some("2017"));
        assert_eq!(fields.experience[0].end_date, "2021");
    }

    #[test]
    fn test_experience_stops_before_education_section() {
        let text = "Experience:\nEngineer\nAcme Corp\n\nEducation:\nStanford University\n2020";
        let fields = extractor().extract(text);
        assert_eq!(fields.experience.len(), 1);
        assert_eq!(fields.experience[0].position.as_deref(), Some("Engineer"));
        assert_eq!(fields.education.len(), 1);
    }

    #[test]
    fn test_experience_absent_section() {
        let fields = extractor().extract("Jane Doe\njane@example.com");
        assert!(fields.experience.is_empty());
    }

    #[test]
    fn test_summary_extracted() {
        let text = "Summary:\nSeasoned engineer who ships.\n\nExperience:\nEngineer, Acme";
        let fields = extractor().extract(text);
        assert_eq!(fields.summary.as_deref(), Some("Seasoned engineer who ships."));
    }

    #[test]
    fn test_summary_truncated_to_500_chars() {
        let body = "x".repeat(600);
        let text = format!("Summary:\n{body}\n\nNext section");
        let fields = extractor().extract(&text);
        assert_eq!(fields.summary.map(|s| s.chars().count()), Some(500));
    }

    #[test]
    fn test_summary_not_truncated_when_short() {
        let body = "y".repeat(120);
        let text = format!("Objective:\n{body}\n\nNext section");
        let fields = extractor().extract(&text);
        assert_eq!(fields.summary.as_deref(), Some(body.as_str()));
    }

    #[test]
    fn test_summary_absent() {
        let fields = extractor().extract("Jane Doe\nEngineer");
        assert_eq!(fields.summary, None);
    }

    #[test]
    fn test_full_resume_fixture() {
        let text = "Jane Doe\njane.doe@example.com | (415) 555-1234\nhttps://linkedin.com/in/jane-doe\n\nSummary:\nBackend engineer focused on reliability.\n\nExperience:\nSenior Engineer\nAcme Corp\n2019 2023\nRan the platform team\n\nEducation:\nStanford University\n2015 - 2019\n\nSkills:\nPython, Docker, Postgresql";
        let fields = extractor().extract(text);
        assert_eq!(fields.name.as_deref(), Some("Jane Doe"));
        assert_eq!(fields.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(fields.phone.as_deref(), Some("(415) 555-1234"));
        assert_eq!(
            fields.linkedin_url.as_deref(),
            Some("https://linkedin.com/in/jane-doe")
        );
        assert_eq!(
            fields.summary.as_deref(),
            Some("Backend engineer focused on reliability.")
        );
        assert_eq!(fields.experience.len(), 1);
        assert_eq!(fields.experience[0].start_date.as_deref(), Some("2019"));
        assert_eq!(fields.experience[0].end_date, "2023");
        assert_eq!(fields.education.len(), 1);
        assert_eq!(
            fields.education[0].institution.as_deref(),
            Some("Stanford University")
        );
        assert!(fields.skills.contains(&"Python".to_string()));
        assert!(fields.skills.contains(&"Docker".to_string()));
        assert!(fields.skills.contains(&"Postgresql".to_string()));
    }

    #[test]
    fn test_fields_serialize_round_trip() {
        let fields = extractor().extract("Jane Doe\nEducation:\nStanford University\n2020");
        let json = serde_json::to_value(&fields).unwrap();
        let back: ExtractedFields = serde_json::from_value(json).unwrap();
        assert_eq!(fields, back);
    }
}
