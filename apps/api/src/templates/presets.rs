use crate::templates::factory::SectionLabelOptions;
use crate::templates::style::{FontOptions, HeaderLayout, PaletteOptions, StyleOptions};

pub const DEFAULT_TEMPLATE_ID: &str = "Resume";

/// A named template configuration, resolved into a definition by the registry.
pub struct Preset {
    pub id: &'static str,
    pub options: StyleOptions,
    pub labels: SectionLabelOptions,
}

fn fonts(body: &str, title: Option<&str>, base: f32, name: Option<f32>) -> FontOptions {
    FontOptions {
        body: Some(body.to_string()),
        title: title.map(str::to_string),
        base_size: Some(base),
        name_size: name,
        ..FontOptions::default()
    }
}

fn labels(summary: &str, skills: &str, experience: &str, education: &str) -> SectionLabelOptions {
    SectionLabelOptions {
        summary: Some(summary.to_string()),
        skills: Some(skills.to_string()),
        experience: Some(experience.to_string()),
        education: Some(education.to_string()),
    }
}

fn preset(
    id: &'static str,
    fonts: FontOptions,
    palette: PaletteOptions,
    layout: HeaderLayout,
    labels: SectionLabelOptions,
) -> Preset {
    Preset {
        id,
        options: StyleOptions {
            fonts,
            palette,
            header_layout: Some(layout),
        },
        labels,
    }
}

/// Built-in templates in registration order. The first entry is the default.
pub fn builtin() -> Vec<Preset> {
    use HeaderLayout::{Center, Split};

    vec![
        preset(
            DEFAULT_TEMPLATE_ID,
            FontOptions::default(),
            PaletteOptions::default(),
            Center,
            labels(
                "Summary",
                "Areas of Expertise",
                "Professional Experience",
                "Education & Credentials",
            ),
        ),
        preset(
            "Resume-Tech-Teal",
            fonts("Helvetica", Some("Helvetica-Bold"), 10.5, None),
            PaletteOptions::default(),
            Split,
            labels("Summary", "Technical Skills", "Experience", "Education"),
        ),
        preset(
            "Resume-Creative-Burgundy",
            fonts("Helvetica", None, 11.0, Some(26.0)),
            PaletteOptions {
                accent: Some("#7f1d1d".into()),
                name_color: Some("#7f1d1d".into()),
                section_title_color: Some("#7f1d1d".into()),
                header_background: Some("#fef2f2".into()),
                section_background: Some("#fef2f2".into()),
                name_uppercase: Some(true),
            },
            Center,
            labels(
                "Professional Summary",
                "Core Competencies",
                "Professional Experience",
                "Education",
            ),
        ),
        preset(
            "Resume-Bold-Emerald",
            fonts("Helvetica", Some("Helvetica-Bold"), 11.0, Some(26.0)),
            PaletteOptions::default(),
            Center,
            labels("Summary", "Skills", "Experience", "Education"),
        ),
        preset(
            "Resume-Modern-Green",
            fonts("Helvetica", None, 11.0, Some(24.0)),
            PaletteOptions {
                accent: Some("#16a34a".into()),
                section_title_color: Some("#15803d".into()),
                header_background: Some("#f0fdf4".into()),
                section_background: Some("#ecfdf5".into()),
                ..PaletteOptions::default()
            },
            Center,
            labels(
                "Professional Summary",
                "Technical Skills",
                "Professional Experience",
                "Education",
            ),
        ),
        preset(
            "Resume-Corporate-Slate",
            fonts("Times-Roman", Some("Helvetica-Bold"), 11.0, Some(24.0)),
            PaletteOptions::default(),
            Split,
            labels("Summary", "Skills", "Experience", "Education"),
        ),
        preset(
            "Resume-Executive-Navy",
            fonts("Times-Roman", Some("Times-Bold"), 10.5, Some(26.0)),
            PaletteOptions::default(),
            Center,
            labels(
                "Executive Summary",
                "Core Competencies",
                "Professional Experience",
                "Education",
            ),
        ),
        preset(
            "Resume-Academic-Purple",
            fonts("Times-Roman", Some("Times-Bold"), 11.0, Some(24.0)),
            PaletteOptions::default(),
            Center,
            labels(
                "Professional Summary",
                "Core Competencies",
                "Professional Experience",
                "Education & Credentials",
            ),
        ),
        preset(
            "Resume-Consultant-Steel",
            FontOptions {
                contact_size: Some(8.5),
                ..fonts("Times-Roman", Some("Helvetica-Bold"), 10.0, Some(22.0))
            },
            PaletteOptions::default(),
            Center,
            labels(
                "Executive Summary",
                "Core Competencies",
                "Professional Experience",
                "Education",
            ),
        ),
        preset(
            "Resume-Classic-Charcoal",
            fonts("Times-Roman", Some("Times-Bold"), 10.5, Some(24.0)),
            PaletteOptions::default(),
            Center,
            labels("Summary", "Skills", "Experience", "Education"),
        ),
    ]
}
