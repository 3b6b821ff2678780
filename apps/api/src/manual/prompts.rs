use std::path::PathBuf;

use tracing::{debug, warn};

/// Used when a profile has no prompt file of its own.
pub const DEFAULT_PROMPT_TEMPLATE: &str = r#"You are an expert resume writer. Tailor a resume for {name} to the job description below.

CANDIDATE
Name: {name}
Email: {email}
Location: {location}
Years of experience: {yearsOfExperience}

WORK HISTORY (fixed; do not add, remove or reorder roles)
{workHistory}

EDUCATION
{education}

JOB DESCRIPTION
{jobDescription}

INSTRUCTIONS
- Write a headline title and a 3-4 sentence summary aimed at this role.
- Group skills into categories relevant to the job description.
- Return exactly {experienceCount} experience entries, in the same order as the work history.
- Each entry gets 4-6 achievement bullets. Wrap key metrics and technologies in **double asterisks**.
- Do not invent employers, dates or degrees.

Return ONLY valid JSON with this shape:
{
  "title": "string",
  "summary": "string",
  "skills": { "Category": ["skill", "skill"] },
  "experience": [ { "title": "string", "details": ["bullet", "bullet"] } ]
}"#;

/// Loads prompt templates from `<dir>/<name>.txt`.
#[derive(Debug, Clone)]
pub struct PromptLibrary {
    dir: PathBuf,
}

impl PromptLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the named template, or the built-in default when the file is
    /// missing, unreadable or blank.
    pub async fn load(&self, name: &str) -> String {
        let path = self.dir.join(format!("{name}.txt"));
        match tokio::fs::read_to_string(&path).await {
            Ok(text) if !text.trim().is_empty() => {
                debug!(prompt = name, "loaded prompt template");
                text
            }
            Ok(_) => {
                warn!(prompt = name, "prompt template is empty, using default");
                DEFAULT_PROMPT_TEMPLATE.to_string()
            }
            Err(e) => {
                debug!(prompt = name, error = %e, "no prompt template, using default");
                DEFAULT_PROMPT_TEMPLATE.to_string()
            }
        }
    }
}
