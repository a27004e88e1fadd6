//! Section type resolution
//!
//! Assigns the final semantic label to each grouped section. Resolution
//! follows a fixed order: position, an explicit ordered keyword rule
//! table, structural bullet dominance, dominant framework family, and a
//! content fallback. A post-pass enforces the hero/cta guarantees by
//! synthesizing default sections where needed.

use crate::copyframe::elements::SemanticElement;
use crate::copyframe::sections::{Section, SectionType};
use once_cell::sync::Lazy;
use regex::Regex;

/// Placeholder copy for a synthesized hero section.
pub const DEFAULT_HERO_HEADLINE: &str = "Your Headline Here";
pub const DEFAULT_HERO_BODY: &str = "Introduce your product and the value it delivers.";
/// Placeholder copy for a synthesized call-to-action section.
pub const DEFAULT_CTA_HEADLINE: &str = "Ready to Get Started?";
pub const DEFAULT_CTA_BODY: &str = "Reach out today and see the difference for yourself.";

/// Bullet count at which a section reads as a feature list
const FEATURE_BULLET_MIN: usize = 3;
/// Distinct keyword hits one type needs to override the hero position rule
const COUNTERVAILING_HITS: usize = 2;

/// Ordered keyword rule table. Evaluated top to bottom; the first type
/// with any matching pattern wins. The order is the explicit tie-break
/// contract: problem > solution > about > testimonial > cta.
const TYPE_RULES: &[(SectionType, &[&str])] = &[
    (
        SectionType::Problem,
        &[
            r"(?i)\byou're not\b",
            r"(?i)\btired of\b",
            r"(?i)\bthe problem\b",
            r"(?i)\bstruggl",
            r"(?i)\bfrustrat",
            r"(?i)\bsound familiar\b",
        ],
    ),
    (
        SectionType::Solution,
        &[
            r"(?i)\byou don't need\b",
            r"(?i)\bthe solution\b",
            r"(?i)\bwe help\b",
            r"(?i)\bintroducing\b",
            r"(?i)\bthat's why we\b",
        ],
    ),
    (
        SectionType::About,
        &[
            r"(?i)\babout us\b",
            r"(?i)\bour story\b",
            r"(?i)\bour mission\b",
            r"(?i)\bwho we are\b",
            r"(?i)\bfounded\b",
        ],
    ),
    (
        SectionType::Testimonial,
        &[
            r"(?i)\bwhat our (clients|customers)\b",
            r"(?i)\btrusted by\b",
            r"(?i)\btestimonial",
            r"(?i)\bcustomers? say\b",
            r"(?i)\bloved by\b",
        ],
    ),
    (
        SectionType::Cta,
        &[
            r"(?i)\bget started\b",
            r"(?i)\bready to\b",
            r"(?i)\bsign up\b",
            r"(?i)\bfree trial\b",
            r"(?i)\bcontact us\b",
            r"(?i)\bstart today\b",
        ],
    ),
];

static COMPILED_TYPE_RULES: Lazy<Vec<(SectionType, Vec<Regex>)>> = Lazy::new(|| {
    TYPE_RULES
        .iter()
        .map(|(kind, patterns)| {
            let compiled = patterns
                .iter()
                .map(|pattern| Regex::new(pattern).unwrap())
                .collect();
            (*kind, compiled)
        })
        .collect()
});

/// Resolve the semantic type of one section given its position.
pub fn resolve_type(section: &Section, index: usize) -> SectionType {
    if index == 0 && !has_countervailing_signals(section) {
        return SectionType::Hero;
    }

    let text = section.concatenated_text();
    if let Some(kind) = keyword_type(&text) {
        return kind;
    }

    if section.bullet_count >= FEATURE_BULLET_MIN {
        return SectionType::Features;
    }

    if let Some(kind) = framework_type(section) {
        return kind;
    }

    SectionType::Content
}

/// Resolve every section, then enforce the positional guarantees: the
/// first output section is always a hero and a cta always exists.
pub fn finalize(sections: Vec<Section>) -> Vec<Section> {
    let mut resolved: Vec<Section> = sections
        .into_iter()
        .enumerate()
        .map(|(index, section)| {
            let kind = resolve_type(&section, index);
            Section::from_elements(kind, section.elements, section.dominant_framework)
        })
        .collect();

    if resolved.first().map(|s| s.kind) != Some(SectionType::Hero) {
        resolved.insert(0, synthesized_hero());
    }
    if !resolved.iter().any(|s| s.kind == SectionType::Cta) {
        resolved.push(synthesized_cta());
    }

    resolved
}

/// First type in the ordered rule table with any matching pattern.
fn keyword_type(text: &str) -> Option<SectionType> {
    for (kind, patterns) in COMPILED_TYPE_RULES.iter() {
        if patterns.iter().any(|pattern| pattern.is_match(text)) {
            return Some(*kind);
        }
    }
    None
}

/// Whether an index-0 section carries signals strong enough to override
/// the hero position rule: a bullet-dominated body, or several distinct
/// keyword hits for one competing type.
fn has_countervailing_signals(section: &Section) -> bool {
    if section.bullet_count >= FEATURE_BULLET_MIN {
        return true;
    }

    let text = section.concatenated_text();
    COMPILED_TYPE_RULES.iter().any(|(_, patterns)| {
        patterns
            .iter()
            .filter(|pattern| pattern.is_match(&text))
            .count()
            >= COUNTERVAILING_HITS
    })
}

/// Map the dominant framework family to a section type.
fn framework_type(section: &Section) -> Option<SectionType> {
    // The provisional type already encodes the family sub-signal mapping
    // (attention -> hero, interest/desire -> features, action -> cta,
    // problem/agitation -> problem, solution -> solution, landing-page
    // sub-signals likewise), so a framework-bearing section reuses it.
    section.dominant_framework.map(|_| section.kind)
}

fn synthesized_hero() -> Section {
    Section::from_elements(
        SectionType::Hero,
        vec![
            SemanticElement::heading(1, DEFAULT_HERO_HEADLINE),
            SemanticElement::paragraph(DEFAULT_HERO_BODY),
        ],
        None,
    )
}

fn synthesized_cta() -> Section {
    Section::from_elements(
        SectionType::Cta,
        vec![
            SemanticElement::heading(2, DEFAULT_CTA_HEADLINE),
            SemanticElement::paragraph(DEFAULT_CTA_BODY),
        ],
        None,
    )
}
