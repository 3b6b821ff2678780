//! Style Resolver: merges a sparse `StyleOptions` bundle into a total `ResolvedStyle`.
//!
//! Every knob resolves as `options[role] ?? family default ?? global default`, so
//! `resolve` cannot fail: the empty bundle yields the grayscale professional look.
//! Body text colours are fixed across themes; presets may only touch accent roles.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Defaults
// ────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_BODY_FONT: &str = "Helvetica";
pub const DEFAULT_TITLE_FONT: &str = "Helvetica-Bold";

pub const DEFAULT_BASE_SIZE: f32 = 11.0;
pub const DEFAULT_NAME_SIZE: f32 = 24.0;
pub const DEFAULT_TITLE_SIZE: f32 = 11.0;
pub const DEFAULT_CONTACT_SIZE: f32 = 9.5;
pub const DEFAULT_SECTION_SIZE: f32 = 10.0;
pub const DEFAULT_SUMMARY_SIZE: f32 = 10.5;
pub const DEFAULT_SKILLS_LABEL_SIZE: f32 = 10.0;
pub const DEFAULT_SKILLS_LIST_SIZE: f32 = 10.0;
pub const DEFAULT_EXP_TITLE_SIZE: f32 = 10.5;
pub const DEFAULT_EXP_DATES_SIZE: f32 = 9.5;
pub const DEFAULT_EXP_COMPANY_SIZE: f32 = 10.0;
pub const DEFAULT_EXP_DETAIL_SIZE: f32 = 10.0;
pub const DEFAULT_EDU_DEGREE_SIZE: f32 = 10.5;
pub const DEFAULT_EDU_DATES_SIZE: f32 = 9.5;
pub const DEFAULT_EDU_SCHOOL_SIZE: f32 = 10.0;

pub const PAGE_PADDING_MM: f32 = 15.0;

/// Grayscale body palette shared by every theme.
pub const TEXT_DARK: &str = "#1a1a1a";
pub const TEXT_MEDIUM: &str = "#404040";
pub const TEXT_LIGHT: &str = "#6b6b6b";
pub const DEFAULT_ACCENT: &str = "#000000";

/// Family token → bold face used for emphasis runs. First match wins.
const BOLD_FACES: [(&str, &str); 2] = [("Times", "Times-Bold"), ("Courier", "Courier-Bold")];
const DEFAULT_BOLD_FACE: &str = "Helvetica-Bold";

// ────────────────────────────────────────────────────────────────────────────
// Options (sparse input)
// ────────────────────────────────────────────────────────────────────────────

/// Structural arrangement of the name/title/contact block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderLayout {
    /// Name, title and a single contact line centred as one block.
    #[default]
    Center,
    /// Name/title on the left, stacked contact items right-aligned.
    Split,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    #[default]
    None,
    Uppercase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    Row,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Align {
    FlexStart,
    Baseline,
    SpaceBetween,
}

/// Font family and size knobs. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontOptions {
    pub body: Option<String>,
    pub title: Option<String>,
    pub base_size: Option<f32>,
    pub name_size: Option<f32>,
    pub title_size: Option<f32>,
    pub title_weight: Option<FontWeight>,
    pub contact_size: Option<f32>,
    pub section_size: Option<f32>,
    pub summary_size: Option<f32>,
    pub skills_label_size: Option<f32>,
    pub skills_list_size: Option<f32>,
    pub exp_title_size: Option<f32>,
    pub exp_dates_size: Option<f32>,
    pub exp_company_size: Option<f32>,
    pub exp_detail_size: Option<f32>,
    pub edu_degree_size: Option<f32>,
    pub edu_dates_size: Option<f32>,
    pub edu_school_size: Option<f32>,
}

/// Accent overrides. Body text colours are not overridable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteOptions {
    /// Family default for the name, section titles and rules.
    pub accent: Option<String>,
    pub name_color: Option<String>,
    pub section_title_color: Option<String>,
    pub header_background: Option<String>,
    pub section_background: Option<String>,
    pub name_uppercase: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    pub fonts: FontOptions,
    pub palette: PaletteOptions,
    pub header_layout: Option<HeaderLayout>,
}

// ────────────────────────────────────────────────────────────────────────────
// Resolved style (total output)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Border {
    pub width: f32,
    pub color: String,
}

/// Box-level layout properties. `None` means "renderer default".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<Align>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<Align>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_grow: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_shrink: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

/// Text role style. Family, size and colour are always concrete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_family: String,
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub color: String,
    pub text_transform: TextTransform,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f32>,
    #[serde(flatten)]
    pub layout: BoxStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSize {
    A4,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStyle {
    pub size: PageSize,
    pub padding_mm: f32,
    pub font_family: String,
    pub font_size: f32,
    pub color: String,
}

/// Complete stylesheet for the resume skeleton. Immutable once resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedStyle {
    pub header_layout: HeaderLayout,
    pub page: PageStyle,
    pub header: BoxStyle,
    pub header_content: BoxStyle,
    pub header_left: BoxStyle,
    pub name: TextStyle,
    pub title: TextStyle,
    pub contact: TextStyle,
    pub contact_column: BoxStyle,
    pub contact_item: TextStyle,
    pub section: BoxStyle,
    pub section_title: TextStyle,
    pub summary: TextStyle,
    pub skills_category: BoxStyle,
    pub skills_label: TextStyle,
    pub skills_list: TextStyle,
    pub exp_item: BoxStyle,
    pub exp_header: BoxStyle,
    pub exp_title: TextStyle,
    pub exp_dates: TextStyle,
    pub exp_company: TextStyle,
    pub exp_details: BoxStyle,
    pub exp_detail_row: BoxStyle,
    pub exp_detail_item: TextStyle,
    pub edu_item: BoxStyle,
    pub edu_header: BoxStyle,
    pub edu_degree: TextStyle,
    pub edu_dates: TextStyle,
    pub edu_school: TextStyle,
    /// Bold face applied to emphasis runs; consistent with the body family.
    pub emphasis_font: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Resolution
// ────────────────────────────────────────────────────────────────────────────

/// Returns the bold face matching a font family. Total: unknown families get Helvetica-Bold.
pub fn bold_face_for(family: &str) -> &'static str {
    BOLD_FACES
        .iter()
        .find(|(token, _)| family.contains(token))
        .map(|(_, bold)| *bold)
        .unwrap_or(DEFAULT_BOLD_FACE)
}

fn text(family: &str, size: f32, color: &str) -> TextStyle {
    TextStyle {
        font_family: family.to_string(),
        font_size: size,
        font_weight: FontWeight::Normal,
        font_style: FontStyle::Normal,
        color: color.to_string(),
        text_transform: TextTransform::None,
        letter_spacing: None,
        layout: BoxStyle::default(),
    }
}

fn rule(color: &str) -> Option<Border> {
    Some(Border {
        width: 1.0,
        color: color.to_string(),
    })
}

fn row(align_items: Align) -> BoxStyle {
    BoxStyle {
        flex_direction: Some(FlexDirection::Row),
        justify_content: Some(Align::SpaceBetween),
        align_items: Some(align_items),
        ..BoxStyle::default()
    }
}

fn spaced(margin_bottom: f32) -> BoxStyle {
    BoxStyle {
        margin_bottom: Some(margin_bottom),
        ..BoxStyle::default()
    }
}

/// Resolves a sparse option bundle into a total stylesheet.
pub fn resolve(options: &StyleOptions) -> ResolvedStyle {
    let fonts = &options.fonts;
    let palette = &options.palette;
    let layout = options.header_layout.unwrap_or_default();

    let body = fonts.body.as_deref().unwrap_or(DEFAULT_BODY_FONT);
    let title_font = fonts.title.as_deref().unwrap_or(DEFAULT_TITLE_FONT);

    let accent = palette.accent.as_deref().unwrap_or(DEFAULT_ACCENT);
    let name_color = palette.name_color.as_deref().unwrap_or(accent);
    let section_title_color = palette.section_title_color.as_deref().unwrap_or(accent);

    let size = |knob: Option<f32>, default: f32| knob.unwrap_or(default);

    let contact = TextStyle {
        layout: BoxStyle {
            line_height: Some(1.4),
            text_align: Some(match layout {
                HeaderLayout::Center => TextAlign::Center,
                HeaderLayout::Split => TextAlign::Right,
            }),
            ..BoxStyle::default()
        },
        ..text(body, size(fonts.contact_size, DEFAULT_CONTACT_SIZE), TEXT_LIGHT)
    };

    let contact_item = TextStyle {
        layout: BoxStyle {
            margin_bottom: Some(match layout {
                HeaderLayout::Center => 0.0,
                HeaderLayout::Split => 3.0,
            }),
            ..contact.layout.clone()
        },
        ..contact.clone()
    };

    ResolvedStyle {
        header_layout: layout,
        page: PageStyle {
            size: PageSize::A4,
            padding_mm: PAGE_PADDING_MM,
            font_family: body.to_string(),
            font_size: size(fonts.base_size, DEFAULT_BASE_SIZE),
            color: TEXT_DARK.to_string(),
        },
        header: BoxStyle {
            text_align: Some(match layout {
                HeaderLayout::Center => TextAlign::Center,
                HeaderLayout::Split => TextAlign::Left,
            }),
            margin_bottom: Some(14.0),
            padding_bottom: Some(10.0),
            border_bottom: rule(accent),
            background_color: palette.header_background.clone(),
            ..BoxStyle::default()
        },
        header_content: row(Align::FlexStart),
        header_left: BoxStyle::default(),
        name: TextStyle {
            font_weight: FontWeight::Bold,
            text_transform: if palette.name_uppercase.unwrap_or(false) {
                TextTransform::Uppercase
            } else {
                TextTransform::None
            },
            layout: spaced(3.0),
            ..text(title_font, size(fonts.name_size, DEFAULT_NAME_SIZE), name_color)
        },
        title: TextStyle {
            font_weight: fonts.title_weight.unwrap_or_default(),
            layout: spaced(6.0),
            ..text(body, size(fonts.title_size, DEFAULT_TITLE_SIZE), TEXT_MEDIUM)
        },
        contact_column: BoxStyle {
            text_align: Some(TextAlign::Right),
            ..BoxStyle::default()
        },
        contact,
        contact_item,
        section: BoxStyle {
            background_color: palette.section_background.clone(),
            ..spaced(12.0)
        },
        section_title: TextStyle {
            font_weight: FontWeight::Bold,
            text_transform: TextTransform::Uppercase,
            letter_spacing: Some(1.2),
            layout: BoxStyle {
                margin_bottom: Some(8.0),
                padding_bottom: Some(4.0),
                border_bottom: rule(accent),
                ..BoxStyle::default()
            },
            ..text(
                title_font,
                size(fonts.section_size, DEFAULT_SECTION_SIZE),
                section_title_color,
            )
        },
        summary: TextStyle {
            layout: BoxStyle {
                line_height: Some(1.6),
                text_align: Some(TextAlign::Left),
                ..BoxStyle::default()
            },
            ..text(body, size(fonts.summary_size, DEFAULT_SUMMARY_SIZE), TEXT_DARK)
        },
        skills_category: BoxStyle {
            margin_bottom: Some(4.0),
            line_height: Some(1.4),
            flex_direction: Some(FlexDirection::Row),
            ..BoxStyle::default()
        },
        skills_label: TextStyle {
            font_weight: FontWeight::Bold,
            layout: BoxStyle {
                margin_right: Some(8.0),
                flex_shrink: Some(0.0),
                ..BoxStyle::default()
            },
            ..text(
                title_font,
                size(fonts.skills_label_size, DEFAULT_SKILLS_LABEL_SIZE),
                accent,
            )
        },
        skills_list: TextStyle {
            layout: BoxStyle {
                flex_grow: Some(1.0),
                ..BoxStyle::default()
            },
            ..text(body, size(fonts.skills_list_size, DEFAULT_SKILLS_LIST_SIZE), TEXT_DARK)
        },
        exp_item: spaced(10.0),
        exp_header: BoxStyle {
            margin_bottom: Some(1.0),
            ..row(Align::Baseline)
        },
        exp_title: TextStyle {
            font_weight: FontWeight::Bold,
            ..text(title_font, size(fonts.exp_title_size, DEFAULT_EXP_TITLE_SIZE), accent)
        },
        exp_dates: text(body, size(fonts.exp_dates_size, DEFAULT_EXP_DATES_SIZE), TEXT_MEDIUM),
        exp_company: TextStyle {
            font_style: FontStyle::Italic,
            layout: spaced(3.0),
            ..text(body, size(fonts.exp_company_size, DEFAULT_EXP_COMPANY_SIZE), TEXT_MEDIUM)
        },
        exp_details: BoxStyle {
            margin_left: Some(14.0),
            ..BoxStyle::default()
        },
        exp_detail_row: spaced(2.0),
        exp_detail_item: TextStyle {
            layout: BoxStyle {
                line_height: Some(1.45),
                margin_bottom: Some(2.0),
                ..BoxStyle::default()
            },
            ..text(body, size(fonts.exp_detail_size, DEFAULT_EXP_DETAIL_SIZE), TEXT_DARK)
        },
        edu_item: spaced(8.0),
        edu_header: BoxStyle {
            margin_bottom: Some(1.0),
            ..row(Align::Baseline)
        },
        edu_degree: TextStyle {
            font_weight: FontWeight::Bold,
            ..text(title_font, size(fonts.edu_degree_size, DEFAULT_EDU_DEGREE_SIZE), accent)
        },
        edu_dates: text(body, size(fonts.edu_dates_size, DEFAULT_EDU_DATES_SIZE), TEXT_MEDIUM),
        edu_school: TextStyle {
            font_style: FontStyle::Italic,
            ..text(body, size(fonts.edu_school_size, DEFAULT_EDU_SCHOOL_SIZE), TEXT_MEDIUM)
        },
        emphasis_font: bold_face_for(body).to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
