//! Manual flow: builds a generation prompt for a stored profile, then turns
//! the pasted model reply back into resume content.
//!
//! The reply is untrusted free text: fences, chatty prefixes and trailing
//! commas are tolerated; anything else is a `ManualError`.

pub mod handlers;
pub mod prompt;
pub mod prompts;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::models::resume::{Experience, ResumeContent, Skills};
use crate::templates::factory::DEFAULT_EXPERIENCE_TITLE;

static RE_FENCE_JSON: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)```json\s*").unwrap());
static RE_FENCE_JS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)```javascript\s*").unwrap());
static RE_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```\s*").unwrap());
static RE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:here is|here's|this is|the json is):?\s*").unwrap());
static RE_TRAILING_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r",(\s*[}\]])").unwrap());
static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static RE_FILENAME_UNSAFE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_-]").unwrap());

#[derive(Debug, Error)]
pub enum ManualError {
    #[error("No JSON object found. Paste the full JSON reply.")]
    NoJsonObject,

    #[error("Invalid JSON: {0}. Check the pasted response.")]
    InvalidJson(String),

    #[error("Missing required fields ({0}). Ensure the reply contains the full JSON.")]
    MissingFields(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Reply extraction
// ────────────────────────────────────────────────────────────────────────────

/// Pulls the JSON object out of a pasted reply.
pub fn extract_json_payload(raw: &str) -> Result<Value, ManualError> {
    let content = raw.trim();
    let content = RE_FENCE_JSON.replace_all(content, "");
    let content = RE_FENCE_JS.replace_all(&content, "");
    let content = RE_FENCE.replace_all(&content, "");
    let content = RE_PREFIX.replace(&content, "");

    let (Some(first), Some(last)) = (content.find('{'), content.rfind('}')) else {
        return Err(ManualError::NoJsonObject);
    };
    if last <= first {
        return Err(ManualError::NoJsonObject);
    }
    let object = content[first..=last].trim();

    match serde_json::from_str(object) {
        Ok(value) => Ok(value),
        Err(first_err) => {
            debug!("reply JSON invalid ({first_err}), retrying without trailing commas");
            let fixed = RE_TRAILING_COMMA.replace_all(object, "$1");
            serde_json::from_str(&fixed).map_err(|_| ManualError::InvalidJson(first_err.to_string()))
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratedExperience {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub details: Option<Vec<String>>,
}

/// Tailored sections produced by the model.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratedContent {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub skills: Option<Skills>,
    #[serde(default)]
    pub experience: Option<Vec<GeneratedExperience>>,
}

impl GeneratedContent {
    /// Parses and validates an extracted payload.
    pub fn from_value(value: Value) -> Result<Self, ManualError> {
        let content: Self =
            serde_json::from_value(value).map_err(|e| ManualError::InvalidJson(e.to_string()))?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ManualError> {
        let mut missing = Vec::new();
        if self.title.as_deref().map_or(true, str::is_empty) {
            missing.push("title");
        }
        if self.summary.as_deref().map_or(true, str::is_empty) {
            missing.push("summary");
        }
        if self.skills.is_none() {
            missing.push("skills");
        }
        if self.experience.is_none() {
            missing.push("experience");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ManualError::MissingFields(missing.join(", ")))
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Merge
// ────────────────────────────────────────────────────────────────────────────

/// Combines a stored profile with generated sections.
///
/// Identity, employers, dates and education always come from the profile.
/// Phone, LinkedIn and website are dropped. Generated experience entries are
/// matched to profile entries by position.
pub fn merge(profile: &ResumeContent, generated: GeneratedContent) -> ResumeContent {
    let mut generated_jobs = generated.experience.unwrap_or_default().into_iter();

    let experience = profile
        .experience
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|job| {
            let gen = generated_jobs.next().unwrap_or_default();
            let title = job
                .title
                .clone()
                .filter(|t| !t.is_empty())
                .or(gen.title.filter(|t| !t.is_empty()))
                .unwrap_or_else(|| DEFAULT_EXPERIENCE_TITLE.to_string());
            Experience {
                title: Some(title),
                company: job.company.clone(),
                location: job.location.clone(),
                start_date: job.start_date.clone(),
                end_date: job.end_date.clone(),
                details: Some(gen.details.unwrap_or_default()),
            }
        })
        .collect();

    ResumeContent {
        name: profile.name.clone(),
        title: generated.title,
        email: profile.email.clone(),
        phone: None,
        location: profile.location.clone(),
        linkedin: None,
        website: None,
        summary: generated.summary,
        skills: generated.skills,
        experience: Some(experience),
        education: profile.education.clone(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Attachment naming
// ────────────────────────────────────────────────────────────────────────────

/// `First_Last[_Company].<extension>`, restricted to `[A-Za-z0-9_-]`.
pub fn attachment_filename(resume_name: &str, company: Option<&str>, extension: &str) -> String {
    let parts: Vec<&str> = resume_name.split_whitespace().collect();
    let base = match parts.as_slice() {
        [] => "resume".to_string(),
        [only] => only.to_string(),
        [first, .., last] => format!("{first}_{last}"),
    };
    let mut base = sanitize(&base);

    if let Some(company) = company.map(str::trim).filter(|c| !c.is_empty()) {
        base.push('_');
        base.push_str(&sanitize(company));
    }

    format!("{base}.{extension}")
}

fn sanitize(raw: &str) -> String {
    let underscored = RE_WHITESPACE.replace_all(raw, "_");
    RE_FILENAME_UNSAFE.replace_all(&underscored, "").into_owned()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::resume::Education;

    const REPLY: &str = r#"{"title": "Platform Engineer", "summary": "Ships **fast**", "skills": {"Languages": ["Rust"]}, "experience": [{"details": ["Did a"]}, {"title": "Gen Title", "details": ["Did b"]}]}"#;

    #[test]
    fn test_extracts_plain_object() {
        let value = extract_json_payload(REPLY).unwrap();
        assert_eq!(value["title"], "Platform Engineer");
    }

    #[test]
    fn test_extracts_from_fenced_reply_with_prefix() {
        let raw = format!("Here is the JSON:\n```json\n{REPLY}\n```\nLet me know!");
        let value = extract_json_payload(&raw).unwrap();
        assert_eq!(value["summary"], "Ships **fast**");

        let raw = format!("```javascript\n{REPLY}\n```");
        assert!(extract_json_payload(&raw).is_ok());
    }

    #[test]
    fn test_repairs_trailing_commas() {
        let raw = r#"{"title": "T", "skills": {"A": ["x", "y",],}, "experience": [],}"#;
        let value = extract_json_payload(raw).unwrap();
        assert_eq!(value["skills"]["A"], json!(["x", "y"]));
    }

    #[test]
    fn test_no_object_is_error() {
        assert!(matches!(
            extract_json_payload("sorry, I cannot help"),
            Err(ManualError::NoJsonObject)
        ));
        assert!(matches!(
            extract_json_payload("} backwards {"),
            Err(ManualError::NoJsonObject)
        ));
    }

    #[test]
    fn test_unrepairable_json_is_error() {
        assert!(matches!(
            extract_json_payload("{title: unquoted}"),
            Err(ManualError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_validate_lists_missing_fields() {
        let err = GeneratedContent::from_value(json!({"title": "T", "summary": ""})).unwrap_err();
        match err {
            ManualError::MissingFields(fields) => {
                assert_eq!(fields, "summary, skills, experience")
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_numeric_and_null_skills_are_tolerated() {
        let value = json!({
            "title": "T",
            "summary": "S",
            "skills": {"Years": 5, "Unused": null, "Languages": ["Rust", 2]},
            "experience": []
        });
        let generated = GeneratedContent::from_value(value).unwrap();
        let skills: Vec<String> = generated
            .skills
            .unwrap()
            .iter()
            .map(|(category, value)| format!("{category}: {}", value.display_text()))
            .collect();
        assert_eq!(skills, vec!["Years: 5", "Languages: Rust, 2"]);
    }

    fn profile() -> ResumeContent {
        ResumeContent {
            name: "James Davis".into(),
            email: Some("james@example.com".into()),
            phone: Some("555".into()),
            location: Some("Austin".into()),
            linkedin: Some("in/james".into()),
            experience: Some(vec![
                Experience {
                    company: "Acme".into(),
                    start_date: "2020".into(),
                    end_date: "Present".into(),
                    ..Experience::default()
                },
                Experience {
                    company: "Beta".into(),
                    start_date: "2018".into(),
                    end_date: "2020".into(),
                    ..Experience::default()
                },
                Experience {
                    title: Some("Founder".into()),
                    company: "Gamma".into(),
                    start_date: "2015".into(),
                    end_date: "2018".into(),
                    ..Experience::default()
                },
            ]),
            education: Some(vec![Education {
                degree: "BS".into(),
                school: "UT".into(),
                start_year: "2011".into(),
                ..Education::default()
            }]),
            ..ResumeContent::default()
        }
    }

    #[test]
    fn test_merge_takes_identity_from_profile() {
        let generated = GeneratedContent::from_value(extract_json_payload(REPLY).unwrap()).unwrap();
        let merged = merge(&profile(), generated);

        assert_eq!(merged.name, "James Davis");
        assert_eq!(merged.email.as_deref(), Some("james@example.com"));
        assert_eq!(merged.phone, None);
        assert_eq!(merged.linkedin, None);
        assert_eq!(merged.title.as_deref(), Some("Platform Engineer"));
        assert_eq!(merged.education.as_ref().unwrap()[0].school, "UT");
        assert_eq!(merged.skills.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_merge_matches_experience_by_position() {
        let generated = GeneratedContent::from_value(extract_json_payload(REPLY).unwrap()).unwrap();
        let merged = merge(&profile(), generated);
        let exp = merged.experience.unwrap();

        assert_eq!(exp.len(), 3);
        assert_eq!(exp[0].title.as_deref(), Some("Engineer"));
        assert_eq!(exp[0].details.as_deref(), Some(&["Did a".to_string()][..]));
        assert_eq!(exp[1].title.as_deref(), Some("Gen Title"));
        assert_eq!(exp[2].title.as_deref(), Some("Founder"));
        assert_eq!(exp[2].details.as_deref(), Some(&[][..]));
        assert_eq!(exp[2].company, "Gamma");
    }

    #[test]
    fn test_attachment_filename() {
        assert_eq!(attachment_filename("James Davis", None, "pdf"), "James_Davis.pdf");
        assert_eq!(
            attachment_filename("Olexandr Kutakh Verified", Some("  Big Co, Inc. "), "pdf"),
            "Olexandr_Verified_Big_Co_Inc.pdf"
        );
        assert_eq!(attachment_filename("Cher", Some(""), "json"), "Cher.json");
        assert_eq!(attachment_filename("   ", None, "pdf"), "resume.pdf");
        assert_eq!(attachment_filename("José Núñez", None, "pdf"), "Jos_Nez.pdf");
    }
}
