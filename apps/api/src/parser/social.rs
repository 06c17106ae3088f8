//! Link Heuristics Engine: resolves the candidate's GitHub and LinkedIn URLs
//! from the extracted text and the embedded-link evidence.
//!
//! Per link type, an ordered cascade stops at the first hit:
//!   1. embedded annotation link containing the host,
//!   2. URL pattern in the visible text,
//!   3. the word "GitHub"/"LinkedIn" anywhere in the text plus a handle
//!      inferred from the first email address.
//! Tier 3 is a best-effort guess and may be wrong; a documented
//! precision/recall trade-off, resolved in favor of recall.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::SocialLinks;

static GITHUB_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)@?(https?://)?(www\.)?github\.com/[A-Za-z0-9_-]+").unwrap());

static LINKEDIN_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)@?(https?://)?(www\.)?linkedin\.com/in/[A-Za-z0-9_-]+").unwrap());

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

// "GitHub", "github", "Git Hub": the word alone is enough for tier 3
static GITHUB_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bgit\s*hub\b").unwrap());

static LINKEDIN_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\blinked\s*in\b").unwrap());

/// Pure function of the extracted text and the embedded-link set.
/// Each of the two link types resolves independently.
pub fn resolve_social_links(text: &str, embedded_links: &[String]) -> SocialLinks {
    let mut links = SocialLinks {
        github_url: embedded_links
            .iter()
            .find(|l| l.contains("github.com") || l.contains("github.io"))
            .cloned(),
        linkedin_url: embedded_links
            .iter()
            .find(|l| l.contains("linkedin.com") || l.contains("linked.in"))
            .cloned(),
    };

    if links.github_url.is_none() {
        links.github_url = GITHUB_URL_RE.find(text).map(|m| qualify_url(m.as_str()));
    }
    if links.linkedin_url.is_none() {
        links.linkedin_url = LINKEDIN_URL_RE.find(text).map(|m| qualify_url(m.as_str()));
    }

    if links.github_url.is_none() || links.linkedin_url.is_none() {
        if let Some(handle) = email_handle(text) {
            if links.github_url.is_none() && GITHUB_WORD_RE.is_match(text) {
                links.github_url = Some(format!("https://github.com/{handle}"));
            }
            if links.linkedin_url.is_none() && LINKEDIN_WORD_RE.is_match(text) {
                links.linkedin_url = Some(format!("https://linkedin.com/in/{handle}"));
            }
        }
    }

    links
}

/// Normalizes a raw text match to a fully qualified https URL,
/// dropping any leading `@`.
fn qualify_url(raw: &str) -> String {
    let raw = raw.strip_prefix('@').unwrap_or(raw);
    // scheme comparison must be case-insensitive to match the regexes
    if raw.len() >= 4 && raw[..4].eq_ignore_ascii_case("http") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    }
}

/// Local part of the first email address in the text, restricted to
/// `[A-Za-z0-9_-]`. None when no email is present or nothing survives
/// the cleanup.
fn email_handle(text: &str) -> Option<String> {
    let email = EMAIL_RE.find(text)?.as_str();
    let local = email.split('@').next().unwrap_or_default();
    let handle: String = local
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();
    (!handle.is_empty()).then_some(handle)
}
