//! Template selection rule matrix
//!
//! Exercises the base layout table, the bullet-count overrides, and the
//! blacklist substitution across section types.

use copyframe::copyframe::elements::SemanticElement;
use copyframe::copyframe::sections::{ContentShapeSignals, Section, SectionType};
use copyframe::copyframe::templates::{select_template, TemplateCatalog};
use rstest::rstest;

fn bullet_section(kind: SectionType, count: usize) -> (Section, ContentShapeSignals) {
    let elements = (0..count)
        .map(|i| SemanticElement::bullet(format!("Item number {i}")))
        .collect();
    let section = Section::from_elements(kind, elements, None);
    let shape = ContentShapeSignals::from_section(&section);
    (section, shape)
}

fn text_section(kind: SectionType, text: &str) -> (Section, ContentShapeSignals) {
    let section = Section::from_elements(kind, vec![SemanticElement::paragraph(text)], None);
    let shape = ContentShapeSignals::from_section(&section);
    (section, shape)
}

#[rstest]
#[case(2, "icon_grid")]
#[case(3, "icon_grid")]
#[case(4, "bullet_list")]
#[case(6, "bullet_list")]
#[case(7, "bullet_list")]
fn test_feature_list_layout_by_item_count(#[case] count: usize, #[case] expected: &str) {
    let catalog = TemplateCatalog::with_defaults();
    let (section, shape) = bullet_section(SectionType::Features, count);
    assert_eq!(select_template(&catalog, &section, &shape).layout_key, expected);
}

#[rstest]
#[case(SectionType::Hero, "hero_centered")]
#[case(SectionType::Problem, "text_block")]
#[case(SectionType::Solution, "text_block")]
#[case(SectionType::Testimonial, "quote_block")]
#[case(SectionType::Cta, "cta_banner")]
#[case(SectionType::Content, "text_block")]
fn test_simple_section_base_layouts(#[case] kind: SectionType, #[case] expected: &str) {
    let catalog = TemplateCatalog::with_defaults();
    let (section, shape) = text_section(kind, "One short line of copy");
    assert_eq!(select_template(&catalog, &section, &shape).layout_key, expected);
}

#[rstest]
#[case(SectionType::Hero, "hero_split")]
#[case(SectionType::About, "about_image_right")]
#[case(SectionType::Testimonial, "text_block")]
fn test_long_sections_avoid_the_sidebar(#[case] kind: SectionType, #[case] expected: &str) {
    let catalog = TemplateCatalog::with_defaults();
    // Over a hundred words, so the shape reads as long-form
    let long = "Plenty of copy that keeps going on and on about everything. ".repeat(12);
    let (section, shape) = text_section(kind, &long);
    assert!(shape.is_long);
    assert_eq!(select_template(&catalog, &section, &shape).layout_key, expected);
}

#[test]
fn test_bullet_override_applies_to_any_type() {
    let catalog = TemplateCatalog::with_defaults();
    let (section, shape) = bullet_section(SectionType::Solution, 5);
    assert_eq!(
        select_template(&catalog, &section, &shape).layout_key,
        "bullet_list"
    );
}

#[test]
fn test_icon_grid_override_is_features_only() {
    let catalog = TemplateCatalog::with_defaults();
    let (section, shape) = bullet_section(SectionType::Content, 2);
    assert_eq!(
        select_template(&catalog, &section, &shape).layout_key,
        "text_block"
    );
}

#[test]
fn test_selection_never_yields_the_sidebar() {
    let catalog = TemplateCatalog::with_defaults();
    let kinds = [
        SectionType::Hero,
        SectionType::Problem,
        SectionType::Solution,
        SectionType::About,
        SectionType::Features,
        SectionType::Testimonial,
        SectionType::Cta,
        SectionType::Content,
    ];
    let long = "Copy that runs long enough to push every type to its complex layout. ".repeat(12);
    for kind in kinds {
        let (section, shape) = text_section(kind, &long);
        let template = select_template(&catalog, &section, &shape);
        assert_ne!(template.layout_key, "sidebar_panel", "kind {kind:?}");
    }
}
