use serde::{Deserialize, Serialize};

/// GitHub / LinkedIn URLs resolved independently of each other.
/// Absence is valid; not every resume carries both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub description: String,
    /// ISO date string (YYYY-MM-DD).
    pub start_date: String,
    /// ISO date string, or None for a current position.
    pub end_date: Option<String>,
    pub is_current: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub name: String,
    pub issuing_organization: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    pub link: Option<String>,
}

/// Canonical output of the resume extraction pipeline.
///
/// Created fresh on every upload; the upload handler owns persistence.
/// `name`/`email` fall back to empty strings when the model omits them;
/// profile submission, not this record, rejects incomplete identities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedResumeData {
    pub name: String,
    pub email: String,
    /// Order-preserving; duplicates are a display concern.
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Years remaining until graduation, only when in 1..=4.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub achievements: Vec<String>,
    pub experiences: Vec<ExperienceEntry>,
    pub certifications: Vec<Certification>,
    pub projects: Vec<ProjectEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    /// Raw embedded-link evidence, retained for audit regardless of whether
    /// it fed the social-link resolution.
    pub extracted_links: Vec<String>,
}
