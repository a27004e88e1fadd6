//! Testing support
//!
//! Canonical sample copy used across the test suite, so tests share
//! verified sources instead of duplicating literals, plus a few small
//! assertion helpers.

use crate::copyframe::pipeline::WireframeSection;
use crate::copyframe::sections::SectionType;

/// Canonical marketing copy samples.
pub mod samples {
    /// A short landing page exercising hero, problem, solution,
    /// features, testimonial and cta signals in order.
    pub const FULL_LANDING: &str = "\
Welcome to Acme. We help you grow.
You're not shipping as fast as you could be.
You don't need a bigger team to fix it.
- Fast setup in minutes
- Works with your stack
- Priced for small teams
- Nothing new to learn
Trusted by over five hundred teams worldwide.
Ready to get started with Acme today?";

    /// Two-line problem/solution pair.
    pub const PROBLEM_SOLUTION: &str = "\
You're not leading with confidence.
You don't need another tool.";

    /// Six feature bullets and nothing else.
    pub const FEATURE_BULLETS: &str = "\
- Fast setup in minutes
- Works with your stack
- Priced for small teams
- Nothing new to learn
- Cancel anytime you like
- Friendly humans on support";
}

/// The section types of a wireframe, in order.
pub fn section_types(sections: &[WireframeSection]) -> Vec<SectionType> {
    sections.iter().map(|s| s.kind).collect()
}

/// Total words across all elements of a wireframe.
pub fn total_words(sections: &[WireframeSection]) -> usize {
    sections
        .iter()
        .flat_map(|s| s.elements.iter())
        .map(|e| e.word_count())
        .sum()
}

/// The first section of the given type, if any.
pub fn find_section<'a>(
    sections: &'a [WireframeSection],
    kind: SectionType,
) -> Option<&'a WireframeSection> {
    sections.iter().find(|s| s.kind == kind)
}
