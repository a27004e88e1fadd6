//! Section grouping
//!
//! Two interchangeable strategies partition the element stream into
//! sections sharing one output shape: the line-score strategy for raw
//! text and the marker strategy for supplied structure. Both fold left
//! to right over an explicit accumulator; once a section is closed it is
//! never reopened. A repair pass merges tiny fragments and a forced
//! re-split recovers granularity for under-segmented input.

pub mod line_strategy;
pub mod marker_strategy;
pub mod merge;

pub use line_strategy::group_lines;
pub use marker_strategy::group_markers;
pub use merge::merge_tiny_sections;

use crate::copyframe::elements::SemanticElement;
use crate::copyframe::lexing::features::{self, FrameworkFamily, FrameworkScores};
use crate::copyframe::sections::{Section, SectionType};

/// Inputs with at least this many elements count as non-trivial for the
/// forced re-split check
pub const NONTRIVIAL_ELEMENT_COUNT: usize = 6;

/// The in-progress section while scanning.
#[derive(Debug, Default)]
pub(crate) struct SectionDraft {
    elements: Vec<SemanticElement>,
    scores: FrameworkScores,
    words: usize,
}

impl SectionDraft {
    pub(crate) fn push(&mut self, element: SemanticElement, scores: &FrameworkScores) {
        self.words += element.word_count();
        self.scores.accumulate(scores);
        self.elements.push(element);
    }

    pub(crate) fn len(&self) -> usize {
        self.elements.len()
    }

    pub(crate) fn words(&self) -> usize {
        self.words
    }

    pub(crate) fn dominant_family(&self) -> Option<FrameworkFamily> {
        self.scores.dominant_family()
    }

    /// Close the draft into a section carrying a provisional type mapped
    /// from its dominant framework family.
    pub(crate) fn close(self) -> Section {
        let dominant = self.scores.dominant_family();
        let kind = provisional_type(&self.scores, dominant);
        Section::from_elements(kind, self.elements, dominant)
    }
}

/// Scan accumulator: closed sections plus the open draft. Returned
/// functionally by the strategies; nothing is shared between runs.
#[derive(Debug, Default)]
pub(crate) struct Accumulator {
    sections: Vec<Section>,
    current: Option<SectionDraft>,
}

impl Accumulator {
    pub(crate) fn current(&self) -> Option<&SectionDraft> {
        self.current.as_ref()
    }

    pub(crate) fn push(&mut self, element: SemanticElement, scores: &FrameworkScores) {
        self.current
            .get_or_insert_with(SectionDraft::default)
            .push(element, scores);
    }

    /// Close the open draft, if any, and append it to the section list.
    pub(crate) fn flush(&mut self) {
        if let Some(draft) = self.current.take() {
            if draft.len() > 0 {
                self.sections.push(draft.close());
            }
        }
    }

    pub(crate) fn finish(mut self) -> Vec<Section> {
        self.flush();
        self.sections
    }
}

/// Map a section's summed framework scores to a provisional type. The
/// final semantic label comes later from the resolver; this coarse label
/// drives the tiny-section merge.
pub(crate) fn provisional_type(
    scores: &FrameworkScores,
    dominant: Option<FrameworkFamily>,
) -> SectionType {
    match dominant {
        Some(FrameworkFamily::Aida) => {
            let candidates = [
                (SectionType::Hero, scores.attention),
                (SectionType::Features, scores.interest + scores.desire),
                (SectionType::Cta, scores.action),
            ];
            strongest(&candidates)
        }
        Some(FrameworkFamily::Pas) => {
            let candidates = [
                (SectionType::Problem, scores.problem + scores.agitation),
                (SectionType::Solution, scores.solution),
            ];
            strongest(&candidates)
        }
        Some(FrameworkFamily::LandingPage) => {
            let candidates = [
                (SectionType::Hero, scores.hero_signal),
                (SectionType::Features, scores.feature_signal),
                (SectionType::Testimonial, scores.social_proof_signal),
                (SectionType::Cta, scores.cta_signal),
            ];
            strongest(&candidates)
        }
        None => SectionType::Content,
    }
}

/// First entry with the strictly highest score wins; ties keep the
/// earlier entry.
fn strongest(candidates: &[(SectionType, f32)]) -> SectionType {
    let mut best = candidates[0];
    for candidate in &candidates[1..] {
        if candidate.1 > best.1 {
            best = *candidate;
        }
    }
    best.0
}

/// Forced re-split for under-segmented results: if a strategy produced
/// two or fewer sections for non-trivial input, re-partition the element
/// stream at opener-phrase anchors and keep whichever result has more
/// sections.
pub fn force_resplit(sections: Vec<Section>) -> Vec<Section> {
    let element_count: usize = sections.iter().map(|s| s.elements.len()).sum();
    if sections.len() > 2 || element_count < NONTRIVIAL_ELEMENT_COUNT {
        return sections;
    }

    let elements: Vec<SemanticElement> = sections
        .iter()
        .flat_map(|s| s.elements.iter().cloned())
        .collect();

    let mut acc = Accumulator::default();
    for element in elements {
        let scores = features::score_frameworks(&element.content);
        if features::is_section_opener(&element.content)
            && acc.current().map(|c| c.len() > 0).unwrap_or(false)
        {
            acc.flush();
        }
        acc.push(element, &scores);
    }
    let resplit = acc.finish();

    if resplit.len() > sections.len() {
        resplit
    } else {
        sections
    }
}
