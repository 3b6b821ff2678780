//! Profile Resolver: maps short profile slugs to stored resume profiles,
//! their template and their prompt file.

pub mod handlers;
pub mod store;

use serde::Serialize;

use crate::templates::presets::DEFAULT_TEMPLATE_ID;

pub const DEFAULT_PROMPT: &str = "default";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfileEntry {
    pub slug: &'static str,
    /// Display name; also the stored profile's file stem.
    pub resume: &'static str,
    pub template: &'static str,
    pub prompt: &'static str,
}

const PROFILES: &[ProfileEntry] = &[
    ProfileEntry {
        slug: "1",
        resume: "James Davis",
        template: "Resume-Tech-Teal",
        prompt: "james-davis",
    },
    ProfileEntry {
        slug: "2",
        resume: "Luis Manriquez",
        template: "Resume-Creative-Burgundy",
        prompt: "luis-manriquez",
    },
    ProfileEntry {
        slug: "3",
        resume: "Michael Smith",
        template: "Resume-Bold-Emerald",
        prompt: "michael-smith",
    },
    ProfileEntry {
        slug: "4",
        resume: "Kareem Maize AI",
        template: "Resume-Modern-Green",
        prompt: "kareem-maize-ai",
    },
    ProfileEntry {
        slug: "5",
        resume: "Vinay Matoori",
        template: "Resume-Corporate-Slate",
        prompt: "vinay-matorio",
    },
    ProfileEntry {
        slug: "6",
        resume: "Olexandr Kutakh Verified",
        template: "Resume-Executive-Navy",
        prompt: "olexandr-kutakh",
    },
];

pub fn get_profile_by_slug(slug: &str) -> Option<&'static ProfileEntry> {
    if slug.is_empty() {
        return None;
    }
    PROFILES.iter().find(|p| p.slug == slug)
}

/// Template id for a slug; unknown slugs get the default template.
pub fn template_for_profile(slug: &str) -> &'static str {
    get_profile_by_slug(slug)
        .map(|p| p.template)
        .unwrap_or(DEFAULT_TEMPLATE_ID)
}

/// Prompt file stem for a slug; unknown slugs get `default`.
pub fn prompt_for_profile(slug: &str) -> &'static str {
    get_profile_by_slug(slug)
        .map(|p| p.prompt)
        .unwrap_or(DEFAULT_PROMPT)
}

pub fn available_slugs() -> Vec<&'static str> {
    PROFILES.iter().map(|p| p.slug).collect()
}

pub fn all_profiles() -> &'static [ProfileEntry] {
    PROFILES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::registry::TemplateRegistry;

    #[test]
    fn test_known_slug_resolves() {
        let entry = get_profile_by_slug("4").unwrap();
        assert_eq!(entry.resume, "Kareem Maize AI");
        assert_eq!(template_for_profile("4"), "Resume-Modern-Green");
        assert_eq!(prompt_for_profile("4"), "kareem-maize-ai");
    }

    #[test]
    fn test_unknown_slug_falls_back() {
        assert!(get_profile_by_slug("99").is_none());
        assert!(get_profile_by_slug("").is_none());
        assert_eq!(template_for_profile("99"), "Resume");
        assert_eq!(prompt_for_profile(""), "default");
    }

    #[test]
    fn test_available_slugs_in_order() {
        assert_eq!(available_slugs(), vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_every_profile_template_is_registered() {
        let registry = TemplateRegistry::builtin();
        let ids = registry.template_ids();
        for profile in all_profiles() {
            assert!(ids.contains(&profile.template), "{}", profile.template);
        }
    }
}
