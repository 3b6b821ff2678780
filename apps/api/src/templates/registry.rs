use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use crate::templates::factory::{build, TemplateDefinition};
use crate::templates::presets::{self, Preset, DEFAULT_TEMPLATE_ID};

/// Immutable lookup of template definitions, built once at startup.
#[derive(Debug)]
pub struct TemplateRegistry {
    by_id: HashMap<String, Arc<TemplateDefinition>>,
    order: Vec<Arc<TemplateDefinition>>,
    default: Arc<TemplateDefinition>,
}

impl TemplateRegistry {
    /// Registry with every built-in preset.
    pub fn builtin() -> Self {
        Self::from_presets(presets::builtin())
    }

    /// Builds one definition per preset. A preset with the default id must
    /// be present; if it is not, a plain factory default is registered under it.
    pub fn from_presets(presets: Vec<Preset>) -> Self {
        let mut by_id = HashMap::new();
        let mut order = Vec::with_capacity(presets.len());

        for preset in presets {
            if by_id.contains_key(preset.id) {
                warn!(template = preset.id, "duplicate template id ignored");
                continue;
            }
            let definition = Arc::new(build(preset.id, &preset.options, &preset.labels));
            by_id.insert(preset.id.to_string(), definition.clone());
            order.push(definition);
        }

        let default = match by_id.get(DEFAULT_TEMPLATE_ID) {
            Some(definition) => definition.clone(),
            None => {
                let definition = Arc::new(build(
                    DEFAULT_TEMPLATE_ID,
                    &Default::default(),
                    &Default::default(),
                ));
                by_id.insert(DEFAULT_TEMPLATE_ID.to_string(), definition.clone());
                order.insert(0, definition.clone());
                definition
            }
        };

        Self { by_id, order, default }
    }

    /// Looks up a template. Absent or unknown ids resolve to the default
    /// template instance. Never fails.
    pub fn get_template(&self, id: Option<&str>) -> Arc<TemplateDefinition> {
        match id {
            None => self.default.clone(),
            Some(id) => match self.by_id.get(id) {
                Some(definition) => definition.clone(),
                None => {
                    warn!(template = id, "unknown template, using {DEFAULT_TEMPLATE_ID}");
                    self.default.clone()
                }
            },
        }
    }

    pub fn template_ids(&self) -> Vec<&str> {
        self.order.iter().map(|t| t.id.as_str()).collect()
    }

    pub fn templates(&self) -> impl Iterator<Item = &Arc<TemplateDefinition>> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::style::HeaderLayout;

    #[test]
    fn test_builtin_registers_ten_presets_default_first() {
        let registry = TemplateRegistry::builtin();
        assert_eq!(registry.len(), 10);
        let ids = registry.template_ids();
        assert_eq!(ids[0], "Resume");
        assert!(ids.contains(&"Resume-Tech-Teal"));
        assert!(ids.contains(&"Resume-Classic-Charcoal"));
    }

    #[test]
    fn test_unknown_and_missing_ids_return_default_instance() {
        let registry = TemplateRegistry::builtin();
        let default = registry.get_template(Some("Resume"));
        assert!(Arc::ptr_eq(&registry.get_template(None), &default));
        assert!(Arc::ptr_eq(&registry.get_template(Some("NoSuchTemplate")), &default));
        assert!(Arc::ptr_eq(&registry.get_template(Some("")), &default));
    }

    #[test]
    fn test_known_id_returns_its_own_definition() {
        let registry = TemplateRegistry::builtin();
        let teal = registry.get_template(Some("Resume-Tech-Teal"));
        assert_eq!(teal.id, "Resume-Tech-Teal");
        assert_eq!(teal.header_layout, HeaderLayout::Split);
        assert_eq!(teal.labels.skills, "Technical Skills");
        assert!(Arc::ptr_eq(&teal, &registry.get_template(Some("Resume-Tech-Teal"))));
    }

    #[test]
    fn test_default_template_labels() {
        let registry = TemplateRegistry::builtin();
        let resume = registry.get_template(None);
        assert_eq!(resume.labels.summary, "Summary");
        assert_eq!(resume.labels.skills, "Areas of Expertise");
        assert_eq!(resume.labels.experience, "Professional Experience");
        assert_eq!(resume.labels.education, "Education & Credentials");
    }

    #[test]
    fn test_serif_presets_use_serif_emphasis() {
        let registry = TemplateRegistry::builtin();
        let navy = registry.get_template(Some("Resume-Executive-Navy"));
        assert_eq!(navy.style.emphasis_font, "Times-Bold");
        let steel = registry.get_template(Some("Resume-Consultant-Steel"));
        assert_eq!(steel.style.contact.font_size, 8.5);
        assert_eq!(steel.style.name.font_size, 22.0);
    }

    #[test]
    fn test_missing_default_preset_is_synthesised() {
        let registry = TemplateRegistry::from_presets(Vec::new());
        assert_eq!(registry.template_ids(), vec!["Resume"]);
        assert_eq!(registry.get_template(Some("x")).labels.skills, "Skills");
    }

    #[test]
    fn test_duplicate_ids_first_definition_wins() {
        let mut presets = presets::builtin();
        presets.extend(presets::builtin().into_iter().skip(1).take(1));
        let registry = TemplateRegistry::from_presets(presets);
        assert_eq!(registry.len(), 10);
        let teal = registry.get_template(Some("Resume-Tech-Teal"));
        assert!(Arc::ptr_eq(&teal, registry.templates().nth(1).unwrap()));
    }
}
