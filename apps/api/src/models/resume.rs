use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Structured resume payload handed to the template factory.
///
/// Only `name` is structurally required, and that check lives at the HTTP
/// boundary. Every other section may be absent; absent or empty sections are
/// omitted from the rendered document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeContent {
    #[serde(default, deserialize_with = "scalar_string")]
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub skills: Option<Skills>,
    #[serde(default)]
    pub experience: Option<Vec<Experience>>,
    #[serde(default)]
    pub education: Option<Vec<Education>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub start_date: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub end_date: String,
    #[serde(default)]
    pub details: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default, deserialize_with = "scalar_string")]
    pub degree: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub school: String,
    /// Free text; years are extracted at render time ("Spring 2019" → "2019").
    #[serde(default, deserialize_with = "scalar_string")]
    pub start_year: String,
    #[serde(default, deserialize_with = "opt_scalar_string")]
    pub end_year: Option<String>,
    /// GPA or classification. Profiles store this as either a number or a string.
    #[serde(default, deserialize_with = "opt_scalar_string")]
    pub grade: Option<String>,
}

/// A skill category's value: either a list of skills or one pre-joined string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SkillValue {
    List(Vec<String>),
    Scalar(String),
}

impl SkillValue {
    /// Arrays become lists with scalar items stringified and nulls dropped;
    /// any other non-null value becomes a scalar. `null` has no value.
    fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Array(items) => Some(SkillValue::List(
                items.into_iter().filter_map(value_to_string).collect(),
            )),
            other => value_to_string(other).map(SkillValue::Scalar),
        }
    }

    /// The text shown after the category label.
    pub fn display_text(&self) -> String {
        match self {
            SkillValue::List(items) => items.join(", "),
            SkillValue::Scalar(text) => text.clone(),
        }
    }
}

/// Skill categories in the order they appeared in the input JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Skills(Vec<(String, SkillValue)>);

impl Skills {
    #[cfg(test)]
    pub fn new(entries: Vec<(String, SkillValue)>) -> Self {
        Self(entries)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SkillValue)> {
        self.0.iter().map(|(category, value)| (category.as_str(), value))
    }
}

impl Serialize for Skills {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, value) in &self.0 {
            map.serialize_entry(category, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Skills {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SkillsVisitor;

        impl<'de> Visitor<'de> for SkillsVisitor {
            type Value = Skills;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of skill category to a list or string")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Skills, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((category, raw)) = access.next_entry::<String, Value>()? {
                    let Some(value) = SkillValue::from_json(raw) else {
                        continue;
                    };
                    // Later duplicates replace earlier ones but keep the first position.
                    match entries.iter_mut().find(|(c, _)| *c == category) {
                        Some((_, existing)) => *existing = value,
                        None => entries.push((category, value)),
                    }
                }
                Ok(Skills(entries))
            }
        }

        deserializer.deserialize_map(SkillsVisitor)
    }
}

/// Returns the value only when it is present and non-blank.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

fn value_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

fn scalar_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_string(value).unwrap_or_default())
}

fn opt_scalar_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_string(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_preserve_insertion_order() {
        let json = r#"{"Languages": ["Rust", "Go"], "Cloud": "AWS, GCP", "Databases": ["Postgres"]}"#;
        let skills: Skills = serde_json::from_str(json).unwrap();
        let categories: Vec<&str> = skills.iter().map(|(c, _)| c).collect();
        assert_eq!(categories, vec!["Languages", "Cloud", "Databases"]);
    }

    #[test]
    fn test_skill_value_variants() {
        let skills: Skills = serde_json::from_str(r#"{"A": ["x", "y"], "B": "z"}"#).unwrap();
        let values: Vec<&SkillValue> = skills.iter().map(|(_, v)| v).collect();
        assert_eq!(values[0], &SkillValue::List(vec!["x".into(), "y".into()]));
        assert_eq!(values[1], &SkillValue::Scalar("z".into()));
        assert_eq!(values[0].display_text(), "x, y");
        assert_eq!(values[1].display_text(), "z");
    }

    #[test]
    fn test_skills_serialize_back_in_order() {
        let skills = Skills::new(vec![
            ("Zeta".into(), SkillValue::Scalar("last".into())),
            ("Alpha".into(), SkillValue::List(vec!["first".into()])),
        ]);
        let json = serde_json::to_string(&skills).unwrap();
        assert_eq!(json, r#"{"Zeta":"last","Alpha":["first"]}"#);
    }

    #[test]
    fn test_education_accepts_numeric_years_and_grade() {
        let json = r#"{"degree": "BSc", "school": "MIT", "start_year": 2015, "end_year": 2019, "grade": 3.8}"#;
        let edu: Education = serde_json::from_str(json).unwrap();
        assert_eq!(edu.start_year, "2015");
        assert_eq!(edu.end_year.as_deref(), Some("2019"));
        assert_eq!(edu.grade.as_deref(), Some("3.8"));
    }

    #[test]
    fn test_minimal_content_deserializes() {
        let content: ResumeContent = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        assert_eq!(content.name, "Ada");
        assert!(content.skills.is_none());
        assert!(content.experience.is_none());
    }

    #[test]
    fn test_non_string_skill_values_are_coerced() {
        let skills: Skills = serde_json::from_str(
            r#"{"Years": 5, "Remote": true, "Dropped": null, "Mixed": ["Rust", 2021, null, false]}"#,
        )
        .unwrap();
        let entries: Vec<(&str, &SkillValue)> = skills.iter().collect();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], ("Years", &SkillValue::Scalar("5".into())));
        assert_eq!(entries[1], ("Remote", &SkillValue::Scalar("true".into())));
        assert_eq!(
            entries[2],
            (
                "Mixed",
                &SkillValue::List(vec!["Rust".into(), "2021".into(), "false".into()])
            )
        );
    }

    #[test]
    fn test_null_strings_become_empty() {
        let content: ResumeContent = serde_json::from_str(
            r#"{
                "name": null,
                "experience": [{"company": null, "title": null, "start_date": 2020, "end_date": null}],
                "education": [{"degree": null, "school": 42, "start_year": null}]
            }"#,
        )
        .unwrap();
        assert_eq!(content.name, "");
        let job = &content.experience.as_ref().unwrap()[0];
        assert_eq!(job.company, "");
        assert_eq!(job.title, None);
        assert_eq!(job.start_date, "2020");
        assert_eq!(job.end_date, "");
        let edu = &content.education.as_ref().unwrap()[0];
        assert_eq!(edu.degree, "");
        assert_eq!(edu.school, "42");
        assert_eq!(edu.start_year, "");
    }

    #[test]
    fn test_present_filters_blank() {
        assert_eq!(present(&Some("  ".to_string())), None);
        assert_eq!(present(&None), None);
        assert_eq!(present(&Some("x".to_string())), Some("x"));
    }
}
