//! Prompt Builder: flattens a stored profile into the variables a
//! generation prompt is filled with.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::resume::{present, Education, Experience, ResumeContent};

/// Full-date formats. Partial inputs ("2019-03", "March 2019", "03/2019")
/// are padded with a first day or month before parsing.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d %B %Y", "%d %b %Y", "%d/%m/%Y"];

/// Parses a free-text start date. `present` means `today`.
pub fn parse_date(raw: &str, today: NaiveDate) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("present") {
        return Some(today);
    }

    let candidates = [
        raw.to_string(),
        format!("{raw}-01"),
        format!("{raw}-01-01"),
        format!("1 {raw}"),
        format!("01/{raw}"),
    ];
    candidates.iter().find_map(|candidate| {
        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(candidate, fmt).ok())
    })
}

/// Whole years between the earliest parseable start date and `today`, rounded.
/// Zero when nothing parses.
pub fn years_of_experience(experience: &[Experience], today: NaiveDate) -> i64 {
    let earliest = experience
        .iter()
        .filter_map(|job| parse_date(&job.start_date, today))
        .filter(|date| *date < today)
        .min();

    match earliest {
        Some(start) => {
            let days = (today - start).num_days() as f64;
            (days / 365.0).round() as i64
        }
        None => 0,
    }
}

/// One numbered line per job: `1. Company | Title | Location | start - end`.
pub fn work_history(experience: &[Experience]) -> String {
    experience
        .iter()
        .enumerate()
        .map(|(idx, job)| {
            let mut parts = vec![format!("{}. {}", idx + 1, job.company)];
            parts.extend(present(&job.title).map(str::to_string));
            parts.extend(present(&job.location).map(str::to_string));
            parts.push(format!("{} - {}", job.start_date, job.end_date));
            parts.join(" | ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn education_lines(education: &[Education]) -> String {
    education
        .iter()
        .map(|edu| {
            let mut line = format!(
                "- {}, {} ({}-{})",
                edu.degree,
                edu.school,
                edu.start_year,
                edu.end_year.as_deref().unwrap_or("")
            );
            if let Some(grade) = present(&edu.grade) {
                line.push_str(&format!(" | GPA: {grade}"));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prompt variables for a profile and a job description.
pub fn prompt_vars(
    profile: &ResumeContent,
    job_description: &str,
    today: NaiveDate,
) -> BTreeMap<&'static str, String> {
    let experience = profile.experience.as_deref().unwrap_or_default();
    let education = profile.education.as_deref().unwrap_or_default();

    BTreeMap::from([
        ("name", profile.name.clone()),
        ("email", profile.email.clone().unwrap_or_default()),
        ("location", profile.location.clone().unwrap_or_default()),
        (
            "yearsOfExperience",
            years_of_experience(experience, today).to_string(),
        ),
        ("workHistory", work_history(experience)),
        ("education", education_lines(education)),
        ("jobDescription", job_description.to_string()),
        ("experienceCount", experience.len().to_string()),
    ])
}

/// Replaces every `{key}` with its value. Unknown placeholders stay as is.
pub fn build_prompt(template: &str, vars: &BTreeMap<&'static str, String>) -> String {
    vars.iter().fold(template.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{key}}}"), value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn job(company: &str, title: Option<&str>, start: &str, end: &str) -> Experience {
        Experience {
            title: title.map(str::to_string),
            company: company.into(),
            start_date: start.into(),
            end_date: end.into(),
            ..Experience::default()
        }
    }

    #[test]
    fn test_parse_date_formats() {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        assert_eq!(parse_date("2019-03-15", today()), Some(d(2019, 3, 15)));
        assert_eq!(parse_date("2019-03", today()), Some(d(2019, 3, 1)));
        assert_eq!(parse_date("2019", today()), Some(d(2019, 1, 1)));
        assert_eq!(parse_date("March 2019", today()), Some(d(2019, 3, 1)));
        assert_eq!(parse_date("Mar 2019", today()), Some(d(2019, 3, 1)));
        assert_eq!(parse_date("03/2019", today()), Some(d(2019, 3, 1)));
        assert_eq!(parse_date("Present", today()), Some(today()));
        assert_eq!(parse_date("sometime", today()), None);
    }

    #[test]
    fn test_years_from_earliest_start() {
        let experience = vec![
            job("A", None, "2020-06", "Present"),
            job("B", None, "2014-06", "2020-05"),
            job("C", None, "whenever", "2014"),
        ];
        assert_eq!(years_of_experience(&experience, today()), 10);
    }

    #[test]
    fn test_years_zero_without_dates() {
        assert_eq!(years_of_experience(&[], today()), 0);
        assert_eq!(
            years_of_experience(&[job("A", None, "Present", "Present")], today()),
            0
        );
    }

    #[test]
    fn test_work_history_skips_absent_parts() {
        let mut located = job("Acme", Some("SRE"), "2020", "Present");
        located.location = Some("Remote".into());
        let history = work_history(&[located, job("Beta", None, "2018", "2020")]);
        assert_eq!(
            history,
            "1. Acme | SRE | Remote | 2020 - Present\n2. Beta | 2018 - 2020"
        );
    }

    #[test]
    fn test_education_lines_with_grade() {
        let education = vec![
            Education {
                degree: "BS CS".into(),
                school: "UT".into(),
                start_year: "2010".into(),
                end_year: Some("2014".into()),
                grade: Some("3.8".into()),
            },
            Education {
                degree: "MS".into(),
                school: "MIT".into(),
                start_year: "2015".into(),
                end_year: Some("2017".into()),
                grade: None,
            },
        ];
        assert_eq!(
            education_lines(&education),
            "- BS CS, UT (2010-2014) | GPA: 3.8\n- MS, MIT (2015-2017)"
        );
    }

    #[test]
    fn test_build_prompt_substitutes_all_occurrences() {
        let profile = ResumeContent {
            name: "Ada".into(),
            experience: Some(vec![job("Acme", None, "2020", "Present")]),
            ..ResumeContent::default()
        };
        let vars = prompt_vars(&profile, "Rust role", today());
        let prompt = build_prompt(
            "{name} ({yearsOfExperience}y, {experienceCount} jobs) for {jobDescription}. {name}! {unknown}",
            &vars,
        );
        assert_eq!(prompt, "Ada (4y, 1 jobs) for Rust role. Ada! {unknown}");
    }
}
