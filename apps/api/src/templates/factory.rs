//! Template Factory: `build` resolves a named template once; `render` turns
//! resume content into a document tree under that template.
//!
//! Section order is fixed: header, summary, skills, experience, education.
//! Sections whose content is absent or empty produce no node at all.

use serde::{Deserialize, Serialize};

use crate::markup::parse_runs;
use crate::models::resume::{present, Education, Experience, ResumeContent, Skills};
use crate::templates::dates::extract_year;
use crate::templates::style::{resolve, BoxStyle, HeaderLayout, ResolvedStyle, StyleOptions, TextStyle};
use crate::templates::tree::{DocumentTree, Node, Page, Role, StyledRun};

/// Title shown for an experience entry without one.
pub const DEFAULT_EXPERIENCE_TITLE: &str = "Engineer";

const CONTACT_SEPARATOR: &str = " • ";
const BULLET_PREFIX: &str = "•  ";

// ────────────────────────────────────────────────────────────────────────────
// Template definition
// ────────────────────────────────────────────────────────────────────────────

/// Optional section heading overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionLabelOptions {
    pub summary: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionLabels {
    pub summary: String,
    pub skills: String,
    pub experience: String,
    pub education: String,
}

impl SectionLabels {
    pub fn resolve(options: &SectionLabelOptions) -> Self {
        let pick = |label: &Option<String>, default: &str| {
            label.clone().unwrap_or_else(|| default.to_string())
        };
        Self {
            summary: pick(&options.summary, "Summary"),
            skills: pick(&options.skills, "Skills"),
            experience: pick(&options.experience, "Experience"),
            education: pick(&options.education, "Education"),
        }
    }
}

/// A named, reusable template. Holds no resume-specific state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateDefinition {
    pub id: String,
    pub header_layout: HeaderLayout,
    pub labels: SectionLabels,
    pub style: ResolvedStyle,
}

/// Resolves options and labels into a template definition.
pub fn build(id: &str, options: &StyleOptions, labels: &SectionLabelOptions) -> TemplateDefinition {
    let style = resolve(options);
    TemplateDefinition {
        id: id.to_string(),
        header_layout: style.header_layout,
        labels: SectionLabels::resolve(labels),
        style,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rendering
// ────────────────────────────────────────────────────────────────────────────

/// Renders resume content into a single-page document tree. Pure.
pub fn render(template: &TemplateDefinition, content: &ResumeContent) -> DocumentTree {
    let style = &template.style;
    let labels = &template.labels;

    let mut children = vec![render_header(template, content)];

    if let Some(summary) = present(&content.summary) {
        children.push(section(
            Role::SummarySection,
            style,
            &labels.summary,
            vec![rich_text(Role::Summary, &style.summary, summary, &style.emphasis_font)],
        ));
    }

    if let Some(skills) = content.skills.as_ref().filter(|s| !s.is_empty()) {
        children.push(section(
            Role::SkillsSection,
            style,
            &labels.skills,
            render_skills(style, skills),
        ));
    }

    if let Some(experience) = content.experience.as_ref().filter(|e| !e.is_empty()) {
        children.push(section(
            Role::ExperienceSection,
            style,
            &labels.experience,
            experience.iter().map(|exp| render_experience(style, exp)).collect(),
        ));
    }

    if let Some(education) = content.education.as_ref().filter(|e| !e.is_empty()) {
        children.push(section(
            Role::EducationSection,
            style,
            &labels.education,
            education.iter().map(|edu| render_education(style, edu)).collect(),
        ));
    }

    DocumentTree {
        template: template.id.clone(),
        pages: vec![Page {
            size: style.page.size,
            style: style.page.clone(),
            children,
        }],
    }
}

fn render_header(template: &TemplateDefinition, content: &ResumeContent) -> Node {
    let style = &template.style;
    let name = plain_text(Role::Name, &style.name, content.name.as_str());
    let title = present(&content.title).map(|t| plain_text(Role::Title, &style.title, t));
    let contacts = contact_fields(content);

    let children = match template.header_layout {
        HeaderLayout::Center => {
            let mut nodes = vec![name];
            nodes.extend(title);
            if !contacts.is_empty() {
                nodes.push(plain_text(
                    Role::Contact,
                    &style.contact,
                    contacts.join(CONTACT_SEPARATOR),
                ));
            }
            nodes
        }
        HeaderLayout::Split => {
            let mut left = vec![name];
            left.extend(title);
            let mut row = vec![view(Role::HeaderLeft, &style.header_left, left)];
            if !contacts.is_empty() {
                let items = contacts
                    .into_iter()
                    .map(|c| plain_text(Role::ContactItem, &style.contact_item, c))
                    .collect();
                row.push(view(Role::ContactColumn, &style.contact_column, items));
            }
            vec![view(Role::HeaderContent, &style.header_content, row)]
        }
    };

    view(Role::Header, &style.header, children)
}

fn contact_fields(content: &ResumeContent) -> Vec<&str> {
    [
        &content.email,
        &content.phone,
        &content.location,
        &content.linkedin,
        &content.website,
    ]
    .into_iter()
    .filter_map(present)
    .collect()
}

fn render_skills(style: &ResolvedStyle, skills: &Skills) -> Vec<Node> {
    skills
        .iter()
        .map(|(category, value)| {
            view(
                Role::SkillsCategory,
                &style.skills_category,
                vec![
                    plain_text(Role::SkillsLabel, &style.skills_label, format!("{category}:")),
                    rich_text(
                        Role::SkillsList,
                        &style.skills_list,
                        &value.display_text(),
                        &style.emphasis_font,
                    ),
                ],
            )
        })
        .collect()
}

fn render_experience(style: &ResolvedStyle, exp: &Experience) -> Node {
    let title = present(&exp.title).unwrap_or(DEFAULT_EXPERIENCE_TITLE);
    let dates = format!("{} – {}", exp.start_date, exp.end_date);
    let company = match present(&exp.location) {
        Some(location) => format!("{}, {}", exp.company, location),
        None => exp.company.clone(),
    };

    let mut children = vec![
        view(
            Role::ExpHeader,
            &style.exp_header,
            vec![
                plain_text(Role::ExpTitle, &style.exp_title, title),
                plain_text(Role::ExpDates, &style.exp_dates, dates),
            ],
        ),
        plain_text(Role::ExpCompany, &style.exp_company, company),
    ];

    if let Some(details) = exp.details.as_ref().filter(|d| !d.is_empty()) {
        let bullets = details
            .iter()
            .map(|detail| {
                let bullet = format!("{BULLET_PREFIX}{detail}");
                view(
                    Role::ExpDetailRow,
                    &style.exp_detail_row,
                    vec![rich_text(
                        Role::ExpDetailItem,
                        &style.exp_detail_item,
                        &bullet,
                        &style.emphasis_font,
                    )],
                )
            })
            .collect();
        children.push(view(Role::ExpDetails, &style.exp_details, bullets));
    }

    view(Role::ExpItem, &style.exp_item, children)
}

fn render_education(style: &ResolvedStyle, edu: &Education) -> Node {
    let mut dates = extract_year(&edu.start_year).to_string();
    if let Some(end) = present(&edu.end_year) {
        dates.push_str(" – ");
        dates.push_str(extract_year(end));
    }
    let school = match present(&edu.grade) {
        Some(grade) => format!("{} • GPA: {}", edu.school, grade),
        None => edu.school.clone(),
    };

    view(
        Role::EduItem,
        &style.edu_item,
        vec![
            view(
                Role::EduHeader,
                &style.edu_header,
                vec![
                    plain_text(Role::EduDegree, &style.edu_degree, edu.degree.as_str()),
                    plain_text(Role::EduDates, &style.edu_dates, dates),
                ],
            ),
            plain_text(Role::EduSchool, &style.edu_school, school),
        ],
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Node helpers
// ────────────────────────────────────────────────────────────────────────────

fn section(role: Role, style: &ResolvedStyle, label: &str, body: Vec<Node>) -> Node {
    let mut children = Vec::with_capacity(body.len() + 1);
    children.push(plain_text(Role::SectionTitle, &style.section_title, label));
    children.extend(body);
    view(role, &style.section, children)
}

fn view(role: Role, style: &BoxStyle, children: Vec<Node>) -> Node {
    Node::View {
        role,
        style: style.clone(),
        children,
    }
}

/// Structurally fixed text (names, dates, schools): no markup processing.
fn plain_text(role: Role, style: &TextStyle, text: impl Into<String>) -> Node {
    Node::Text {
        role,
        style: style.clone(),
        runs: vec![StyledRun::plain(text)],
    }
}

/// Free text that may carry inline emphasis.
fn rich_text(role: Role, style: &TextStyle, raw: &str, emphasis_font: &str) -> Node {
    Node::Text {
        role,
        style: style.clone(),
        runs: parse_runs(raw)
            .into_iter()
            .map(|run| StyledRun::from_markup(run, emphasis_font))
            .collect(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
