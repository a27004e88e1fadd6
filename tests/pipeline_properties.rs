//! Property-based tests for the pipeline guarantees
//!
//! The generators deliberately produce neutral copy (no bullet markers,
//! no signal keywords) so the properties hold independent of which
//! heuristics fire.

use copyframe::copyframe::resolve::{
    DEFAULT_CTA_BODY, DEFAULT_CTA_HEADLINE, DEFAULT_HERO_BODY, DEFAULT_HERO_HEADLINE,
};
use copyframe::{SectionType, WireframePipeline, WireframeSection};
use proptest::prelude::*;

const VOCAB: &[&str] = &[
    "ordinary", "window", "garden", "silver", "mountain", "river", "quiet", "meadow", "lantern",
    "harbor", "autumn", "pebble",
];

fn word() -> impl Strategy<Value = &'static str> {
    prop::sample::select(VOCAB)
}

fn line() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 3..8).prop_map(|words| words.join(" "))
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(line(), 1..12).prop_map(|lines| lines.join("\n"))
}

/// Whether a section is one of the synthesized placeholder sections.
fn is_synthesized(section: &WireframeSection) -> bool {
    let contents: Vec<&str> = section.elements.iter().map(|e| e.content.as_str()).collect();
    contents == [DEFAULT_HERO_HEADLINE, DEFAULT_HERO_BODY]
        || contents == [DEFAULT_CTA_HEADLINE, DEFAULT_CTA_BODY]
}

fn natural_contents(sections: &[WireframeSection]) -> Vec<String> {
    sections
        .iter()
        .filter(|s| !is_synthesized(s))
        .flat_map(|s| s.elements.iter().map(|e| e.content.clone()))
        .collect()
}

proptest! {
    #[test]
    fn prop_output_is_deterministic(doc in document()) {
        let pipeline = WireframePipeline::new();
        prop_assert_eq!(pipeline.run_text(&doc), pipeline.run_text(&doc));
    }

    #[test]
    fn prop_first_section_is_hero(doc in document()) {
        let pipeline = WireframePipeline::new();
        let sections = pipeline.run_text(&doc);
        prop_assert!(!sections.is_empty());
        prop_assert_eq!(sections[0].kind, SectionType::Hero);
    }

    #[test]
    fn prop_cta_always_present(doc in document()) {
        let pipeline = WireframePipeline::new();
        let sections = pipeline.run_text(&doc);
        prop_assert!(sections.iter().any(|s| s.kind == SectionType::Cta));
    }

    #[test]
    fn prop_input_lines_survive_in_order(doc in document()) {
        let pipeline = WireframePipeline::new();
        let sections = pipeline.run_text(&doc);

        let expected: Vec<String> = doc.lines().map(str::to_string).collect();
        prop_assert_eq!(natural_contents(&sections), expected);
    }

    #[test]
    fn prop_no_section_is_empty(doc in document()) {
        let pipeline = WireframePipeline::new();
        for section in pipeline.run_text(&doc) {
            prop_assert!(!section.elements.is_empty());
        }
    }

    #[test]
    fn prop_every_section_has_a_known_template(doc in document()) {
        let pipeline = WireframePipeline::new();
        for section in pipeline.run_text(&doc) {
            prop_assert!(!section.template.layout_key.is_empty());
            prop_assert_ne!(section.template.layout_key.as_str(), "sidebar_panel");
        }
    }

    #[test]
    fn prop_section_ids_are_sequential(doc in document()) {
        let pipeline = WireframePipeline::new();
        let sections = pipeline.run_text(&doc);
        for (index, section) in sections.iter().enumerate() {
            prop_assert_eq!(section.id.clone(), format!("section-{}", index + 1));
        }
    }

    #[test]
    fn prop_short_lines_are_dropped(doc in document()) {
        // Interleave noise lines at or below the length floor; the
        // output must be identical to the clean document's output.
        let pipeline = WireframePipeline::new();
        let noisy: String = doc
            .lines()
            .flat_map(|l| [l, "ok", "--"])
            .collect::<Vec<_>>()
            .join("\n");
        prop_assert_eq!(pipeline.run_text(&noisy), pipeline.run_text(&doc));
    }
}
