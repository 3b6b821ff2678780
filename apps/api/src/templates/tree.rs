//! Document tree handed to the rendering backend unchanged.

use serde::{Deserialize, Serialize};

use crate::markup::MarkupRun;
use crate::templates::style::{BoxStyle, PageSize, PageStyle, TextStyle};

/// What a node represents in the resume skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Header,
    HeaderContent,
    HeaderLeft,
    Name,
    Title,
    Contact,
    ContactColumn,
    ContactItem,
    SummarySection,
    SkillsSection,
    ExperienceSection,
    EducationSection,
    SectionTitle,
    Summary,
    SkillsCategory,
    SkillsLabel,
    SkillsList,
    ExpItem,
    ExpHeader,
    ExpTitle,
    ExpDates,
    ExpCompany,
    ExpDetails,
    ExpDetailRow,
    ExpDetailItem,
    EduItem,
    EduHeader,
    EduDegree,
    EduDates,
    EduSchool,
}

/// One run of text inside a text node. Emphasis runs carry the bold face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyledRun {
    pub text: String,
    #[serde(default)]
    pub emphasis: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl StyledRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: false,
            font_family: None,
        }
    }

    pub fn from_markup(run: MarkupRun, emphasis_font: &str) -> Self {
        Self {
            font_family: run.emphasis.then(|| emphasis_font.to_string()),
            emphasis: run.emphasis,
            text: run.text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    View {
        role: Role,
        style: BoxStyle,
        children: Vec<Node>,
    },
    Text {
        role: Role,
        style: TextStyle,
        runs: Vec<StyledRun>,
    },
}

#[cfg(test)]
impl Node {
    pub fn role(&self) -> Role {
        match self {
            Node::View { role, .. } | Node::Text { role, .. } => *role,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::View { children, .. } => children.as_slice(),
            Node::Text { .. } => &[],
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text(&self) -> String {
        match self {
            Node::Text { runs, .. } => runs.iter().map(|r| r.text.as_str()).collect(),
            Node::View { children, .. } => children.iter().map(Node::text).collect(),
        }
    }

    fn collect<'a>(&'a self, role: Role, out: &mut Vec<&'a Node>) {
        if self.role() == role {
            out.push(self);
        }
        for child in self.children() {
            child.collect(role, out);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub size: PageSize,
    pub style: PageStyle,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentTree {
    /// Identifier of the template that produced this tree.
    pub template: String,
    pub pages: Vec<Page>,
}

#[cfg(test)]
impl DocumentTree {
    /// All nodes with the given role, in document order.
    pub fn find_all(&self, role: Role) -> Vec<&Node> {
        let mut out = Vec::new();
        for page in &self.pages {
            for node in &page.children {
                node.collect(role, &mut out);
            }
        }
        out
    }

    pub fn contains(&self, role: Role) -> bool {
        !self.find_all(role).is_empty()
    }

    /// Roles of the top-level page children, e.g. `[Header, SummarySection, ...]`.
    pub fn section_roles(&self) -> Vec<Role> {
        self.pages
            .iter()
            .flat_map(|page| page.children.iter().map(Node::role))
            .collect()
    }
}
