//! Template catalog and selection
//!
//! The catalog is a read-only registry of named layout templates keyed
//! by layout key; this module only looks templates up and never mutates
//! the catalog. Selection is a base lookup table keyed by section type
//! and content complexity, followed by three ordered override rules.

use crate::copyframe::sections::{ContentShapeSignals, Section, SectionType};
use serde::Serialize;
use std::collections::HashMap;

/// Layout key every unknown lookup falls back to
pub const FALLBACK_LAYOUT: &str = "text_block";
/// Sidebar-style layout the selector never emits for production output
pub const BLACKLISTED_LAYOUT: &str = "sidebar_panel";

/// A named, predefined structural layout descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Template {
    pub name: String,
    pub layout_key: String,
    pub has_image: bool,
    pub image_position: Option<String>,
    pub structural_hints: Vec<String>,
}

impl Template {
    fn new(
        name: &str,
        layout_key: &str,
        has_image: bool,
        image_position: Option<&str>,
        hints: &[&str],
    ) -> Self {
        Template {
            name: name.to_string(),
            layout_key: layout_key.to_string(),
            has_image,
            image_position: image_position.map(str::to_string),
            structural_hints: hints.iter().map(|h| h.to_string()).collect(),
        }
    }

    /// Built-in fallback used when even the catalog is missing the
    /// default text-block entry.
    fn fallback() -> Self {
        Template::new("Text Block", FALLBACK_LAYOUT, false, None, &["body"])
    }
}

/// Read-only registry of templates, keyed by layout key.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: HashMap<String, Template>,
}

impl TemplateCatalog {
    pub fn new() -> Self {
        TemplateCatalog {
            templates: HashMap::new(),
        }
    }

    /// Catalog with the built-in layout set.
    pub fn with_defaults() -> Self {
        let mut catalog = TemplateCatalog::new();
        for template in [
            Template::new(
                "Centered Hero",
                "hero_centered",
                false,
                None,
                &["headline", "subheadline", "cta_button"],
            ),
            Template::new(
                "Split Hero",
                "hero_split",
                true,
                Some("right"),
                &["headline", "subheadline", "image"],
            ),
            Template::fallback(),
            Template::new(
                "Bullet List",
                "bullet_list",
                false,
                None,
                &["headline", "bullets"],
            ),
            Template::new(
                "Icon Grid",
                "icon_grid",
                false,
                None,
                &["headline", "icon_cells"],
            ),
            Template::new(
                "Quote Block",
                "quote_block",
                false,
                None,
                &["quote", "attribution"],
            ),
            Template::new(
                "CTA Banner",
                "cta_banner",
                false,
                None,
                &["headline", "cta_button"],
            ),
            Template::new(
                "About Image Right",
                "about_image_right",
                true,
                Some("right"),
                &["headline", "body", "image"],
            ),
            Template::new(
                "Media Text",
                "media_text",
                true,
                Some("left"),
                &["headline", "body", "image"],
            ),
            Template::new(
                "Sidebar Panel",
                BLACKLISTED_LAYOUT,
                false,
                None,
                &["body", "aside"],
            ),
        ] {
            catalog.register(template);
        }
        catalog
    }

    fn register(&mut self, template: Template) {
        self.templates
            .insert(template.layout_key.clone(), template);
    }

    pub fn get(&self, layout_key: &str) -> Option<&Template> {
        self.templates.get(layout_key)
    }

    pub fn contains(&self, layout_key: &str) -> bool {
        self.templates.contains_key(layout_key)
    }

    /// All layout keys (sorted).
    pub fn layout_keys(&self) -> Vec<String> {
        let mut keys: Vec<_> = self.templates.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Look a template up, falling back to the text-block template for
    /// unknown keys. Never an error.
    pub fn get_or_fallback(&self, layout_key: &str) -> Template {
        self.templates
            .get(layout_key)
            .or_else(|| self.templates.get(FALLBACK_LAYOUT))
            .cloned()
            .unwrap_or_else(Template::fallback)
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        TemplateCatalog::with_defaults()
    }
}

/// Content-structure complexity discriminator for the base mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Complexity {
    Simple,
    Moderate,
    Complex,
}

fn complexity(section: &Section, shape: &ContentShapeSignals) -> Complexity {
    if shape.is_long {
        return Complexity::Complex;
    }
    match sentence_count(&section.concatenated_text()) {
        0..=2 => Complexity::Simple,
        3..=6 => Complexity::Moderate,
        _ => Complexity::Complex,
    }
}

fn sentence_count(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|piece| !piece.trim().is_empty())
        .count()
}

/// Base (simple, moderate, complex) layout keys per section type.
fn base_layout(kind: SectionType, complexity: Complexity) -> &'static str {
    let (simple, moderate, complex) = match kind {
        SectionType::Hero => ("hero_centered", "hero_centered", "hero_split"),
        SectionType::Problem => ("text_block", "text_block", "media_text"),
        SectionType::Solution => ("text_block", "media_text", "media_text"),
        SectionType::About => ("text_block", "about_image_right", "sidebar_panel"),
        SectionType::Features => ("text_block", "icon_grid", "bullet_list"),
        SectionType::Testimonial => ("quote_block", "quote_block", "sidebar_panel"),
        SectionType::Cta => ("cta_banner", "cta_banner", "cta_banner"),
        SectionType::Content => ("text_block", "text_block", "media_text"),
    };
    match complexity {
        Complexity::Simple => simple,
        Complexity::Moderate => moderate,
        Complexity::Complex => complex,
    }
}

/// Pick the template for a typed section.
///
/// Base lookup first, then the override rules in order: bullet-heavy
/// content forces the bullet list, mid-sized feature lists force the
/// icon grid, and a blacklisted sidebar result substitutes a
/// type-specific replacement.
pub fn select_template(
    catalog: &TemplateCatalog,
    section: &Section,
    shape: &ContentShapeSignals,
) -> Template {
    let mut layout = base_layout(section.kind, complexity(section, shape));

    if shape.should_use_bullet_list {
        layout = "bullet_list";
    } else if section.kind == SectionType::Features && (2..=6).contains(&shape.list_item_count) {
        layout = "icon_grid";
    }

    if layout == BLACKLISTED_LAYOUT {
        layout = match section.kind {
            SectionType::Hero => "hero_split",
            SectionType::About => "about_image_right",
            SectionType::Features => "icon_grid",
            _ => FALLBACK_LAYOUT,
        };
    }

    catalog.get_or_fallback(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::copyframe::elements::SemanticElement;

    fn bullet_section(kind: SectionType, count: usize) -> (Section, ContentShapeSignals) {
        let elements = (0..count)
            .map(|i| SemanticElement::bullet(format!("Item number {i}")))
            .collect();
        let section = Section::from_elements(kind, elements, None);
        let shape = ContentShapeSignals::from_section(&section);
        (section, shape)
    }

    fn text_section(kind: SectionType, text: &str) -> (Section, ContentShapeSignals) {
        let section =
            Section::from_elements(kind, vec![SemanticElement::paragraph(text)], None);
        let shape = ContentShapeSignals::from_section(&section);
        (section, shape)
    }

    #[test]
    fn test_bullet_heavy_forces_bullet_list() {
        let catalog = TemplateCatalog::with_defaults();
        let (section, shape) = bullet_section(SectionType::Features, 4);
        assert_eq!(
            select_template(&catalog, &section, &shape).layout_key,
            "bullet_list"
        );
    }

    #[test]
    fn test_small_feature_list_gets_icon_grid() {
        let catalog = TemplateCatalog::with_defaults();
        let (section, shape) = bullet_section(SectionType::Features, 3);
        assert_eq!(
            select_template(&catalog, &section, &shape).layout_key,
            "icon_grid"
        );
    }

    #[test]
    fn test_simple_hero_is_centered() {
        let catalog = TemplateCatalog::with_defaults();
        let (section, shape) =
            text_section(SectionType::Hero, "Welcome to Acme. We help you grow.");
        assert_eq!(
            select_template(&catalog, &section, &shape).layout_key,
            "hero_centered"
        );
    }

    #[test]
    fn test_blacklisted_sidebar_is_replaced_for_about() {
        let catalog = TemplateCatalog::with_defaults();
        let long = "A sentence about the founding. ".repeat(8);
        let (section, shape) = text_section(SectionType::About, &long);
        let template = select_template(&catalog, &section, &shape);
        assert_eq!(template.layout_key, "about_image_right");
    }

    #[test]
    fn test_blacklisted_sidebar_is_replaced_for_testimonial() {
        let catalog = TemplateCatalog::with_defaults();
        let long = "Another glowing quote from a happy customer. ".repeat(8);
        let (section, shape) = text_section(SectionType::Testimonial, &long);
        let template = select_template(&catalog, &section, &shape);
        assert_eq!(template.layout_key, FALLBACK_LAYOUT);
    }

    #[test]
    fn test_unknown_key_falls_back() {
        let catalog = TemplateCatalog::with_defaults();
        assert_eq!(
            catalog.get_or_fallback("holographic_banner").layout_key,
            FALLBACK_LAYOUT
        );
    }

    #[test]
    fn test_layout_keys_sorted() {
        let catalog = TemplateCatalog::with_defaults();
        let keys = catalog.layout_keys();
        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(catalog.contains("hero_centered"));
    }
}
