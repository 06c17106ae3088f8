//! Response Normalizer: the single choke point converting the model's
//! untrusted JSON into a schema-complete `ParsedResumeData`.
//!
//! The model is treated as an untrusted data source: no field presence or
//! type is assumed. Missing or mistyped lists become empty sequences,
//! missing identity strings become "", and social links fall back to the
//! heuristic cascade.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::models::resume::{
    Certification, ExperienceEntry, ParsedResumeData, ProjectEntry, SocialLinks,
};

/// Pure transform; `current_year` is injected so the year-of-study
/// derivation is testable at the calendar boundaries.
pub fn normalize(
    raw: &Value,
    fallback_links: &SocialLinks,
    embedded_links: &[String],
    current_year: i32,
) -> ParsedResumeData {
    ParsedResumeData {
        name: string_field(raw, "name"),
        email: string_field(raw, "email"),
        skills: string_list(raw, "skills"),
        domain: optional_string(raw, "domain"),
        year: year_of_study(raw.get("graduation_year"), current_year),
        achievements: string_list(raw, "achievements"),
        experiences: typed_list::<ExperienceEntry>(raw, "experiences"),
        certifications: typed_list::<Certification>(raw, "certifications"),
        projects: typed_list::<ProjectEntry>(raw, "projects"),
        github_url: resolve_link(fallback_links.github_url.as_deref(), raw.get("github_url")),
        linkedin_url: resolve_link(
            fallback_links.linkedin_url.as_deref(),
            raw.get("linkedin_url"),
        ),
        extracted_links: embedded_links.to_vec(),
    }
}

/// Years remaining until graduation, kept only inside 1..=4.
/// A graduation year in the past or more than 4 years out yields no value;
/// so does a missing or non-numeric field.
fn year_of_study(graduation_year: Option<&Value>, current_year: i32) -> Option<i32> {
    let graduation_year = graduation_year?.as_i64()?;
    // widen before subtracting; narrowing an untrusted i64 first could wrap
    // an absurd year back into the accepted range
    let remaining = graduation_year.checked_sub(i64::from(current_year))?;
    (1..=4).contains(&remaining).then_some(remaining as i32)
}

/// Heuristic evidence from the document wins over the model's claim;
/// the model's value is used only when the cascade came up empty.
fn resolve_link(heuristic: Option<&str>, model: Option<&Value>) -> Option<String> {
    if let Some(url) = heuristic.filter(|u| !u.is_empty()) {
        return Some(url.to_string());
    }
    model
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn string_field(raw: &Value, key: &str) -> String {
    raw.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn optional_string(raw: &Value, key: &str) -> Option<String> {
    raw.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn string_list(raw: &Value, key: &str) -> Vec<String> {
    raw.get(key)
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

/// Lenient list coercion: a missing key or non-list value yields an empty
/// sequence; elements that fail to deserialize are dropped rather than
/// poisoning the whole list.
fn typed_list<T: DeserializeOwned>(raw: &Value, key: &str) -> Vec<T> {
    raw.get(key)
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(|v| serde_json::from_value(v.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}
