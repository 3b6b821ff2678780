use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::models::resume::ResumeContent;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile file \"{0}.json\" not found")]
    NotFound(String),

    #[error("failed to read profile \"{name}\": {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("profile \"{name}\" is not valid JSON: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads stored profiles from `<dir>/<display name>.json`.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    pub async fn load(&self, name: &str) -> Result<ResumeContent, ProfileError> {
        let path = self.path_for(name);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ProfileError::NotFound(name.to_string()))
            }
            Err(source) => {
                return Err(ProfileError::Io {
                    name: name.to_string(),
                    source,
                })
            }
        };

        debug!(profile = name, path = %path.display(), "loaded profile");

        serde_json::from_str(&raw).map_err(|source| ProfileError::Parse {
            name: name.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn write(dir: &Path, name: &str, body: &str) {
        std::fs::write(dir.join(format!("{name}.json")), body).unwrap();
    }

    #[tokio::test]
    async fn test_load_reads_profile_by_display_name() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "James Davis",
            r#"{
                "name": "James Davis",
                "email": "james@example.com",
                "location": "Austin, TX",
                "experience": [{"company": "Acme", "start_date": "2018-01", "end_date": "Present"}],
                "education": [{"degree": "BS", "school": "UT", "start_year": 2010, "end_year": 2014, "grade": 3.7}]
            }"#,
        );

        let store = ProfileStore::new(dir.path());
        let profile = store.load("James Davis").await.unwrap();
        assert_eq!(profile.name, "James Davis");
        assert_eq!(profile.experience.as_ref().unwrap()[0].company, "Acme");
        let edu = &profile.education.as_ref().unwrap()[0];
        assert_eq!(edu.start_year, "2010");
        assert_eq!(edu.grade.as_deref(), Some("3.7"));
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());
        let err = store.load("Nobody").await.unwrap_err();
        assert!(matches!(err, ProfileError::NotFound(ref n) if n == "Nobody"));
        assert_eq!(err.to_string(), "profile file \"Nobody.json\" not found");
    }

    #[tokio::test]
    async fn test_bad_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "Broken", "{ not json");
        let store = ProfileStore::new(dir.path());
        let err = store.load("Broken").await.unwrap_err();
        assert!(matches!(err, ProfileError::Parse { .. }));
    }
}
