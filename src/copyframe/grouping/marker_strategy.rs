//! Marker grouping strategy (structured path)
//!
//! Groups pre-extracted structural elements. Supplied structure is
//! assumed more reliable than raw-text heuristics, so this strategy is
//! intentionally conservative: it breaks only on top-level headings,
//! major-section opening phrases, or generous size ceilings.

use crate::copyframe::elements::SemanticElement;
use crate::copyframe::grouping::Accumulator;
use crate::copyframe::lexing::features;
use crate::copyframe::sections::Section;

/// Element-count ceiling per section on the structured path
pub const MARKER_MAX_ELEMENTS: usize = 15;
/// Word-count ceiling per section on the structured path
pub const MARKER_MAX_WORDS: usize = 800;

/// Group adapted structural elements into sections.
pub fn group_markers(elements: &[SemanticElement]) -> Vec<Section> {
    let mut acc = Accumulator::default();

    for element in elements {
        if should_break(&acc, element) {
            acc.flush();
        }
        let scores = features::score_frameworks(&element.content);
        acc.push(element.clone(), &scores);
    }

    acc.finish()
}

fn should_break(acc: &Accumulator, element: &SemanticElement) -> bool {
    let current = match acc.current() {
        Some(current) if current.len() > 0 => current,
        _ => return false,
    };

    if element.heading_level() == Some(1) {
        return true;
    }
    if element.is_heading() && features::is_major_section_opener(&element.content) {
        return true;
    }
    if current.len() >= MARKER_MAX_ELEMENTS {
        return true;
    }
    if current.words() > MARKER_MAX_WORDS {
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::copyframe::elements::{adapt_markers, StructuralMarker};

    #[test]
    fn test_top_level_heading_breaks() {
        let markers = vec![
            StructuralMarker::heading(1, "Welcome aboard"),
            StructuralMarker::paragraph("We keep your projects tidy."),
            StructuralMarker::heading(1, "Pricing details"),
            StructuralMarker::paragraph("Simple plans for every team."),
        ];
        let sections = group_markers(&adapt_markers(&markers));
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].elements.len(), 2);
    }

    #[test]
    fn test_minor_heading_does_not_break() {
        let markers = vec![
            StructuralMarker::heading(1, "Welcome aboard"),
            StructuralMarker::heading(3, "A small label"),
            StructuralMarker::paragraph("Body copy sits underneath."),
        ];
        let sections = group_markers(&adapt_markers(&markers));
        assert_eq!(sections.len(), 1);
    }

    #[test]
    fn test_major_opener_heading_breaks() {
        let markers = vec![
            StructuralMarker::heading(1, "Welcome aboard"),
            StructuralMarker::paragraph("We keep your projects tidy."),
            StructuralMarker::heading(2, "How it works"),
            StructuralMarker::paragraph("Three steps and you are done."),
        ];
        let sections = group_markers(&adapt_markers(&markers));
        assert_eq!(sections.len(), 2);
    }

    #[test]
    fn test_element_ceiling_respected() {
        let mut markers = vec![StructuralMarker::heading(1, "Welcome aboard")];
        for i in 0..20 {
            markers.push(StructuralMarker::paragraph(format!(
                "Short paragraph number {i}."
            )));
        }
        let sections = group_markers(&adapt_markers(&markers));
        assert!(sections.len() >= 2);
        assert!(sections
            .iter()
            .all(|s| s.elements.len() <= MARKER_MAX_ELEMENTS));
    }

    #[test]
    fn test_word_ceiling_breaks() {
        // The ceiling must already be exceeded when the next element
        // arrives, so three 300-word paragraphs (900 words) break before
        // the fourth
        let long = "word ".repeat(300);
        let markers: Vec<StructuralMarker> = (0..4)
            .map(|_| StructuralMarker::paragraph(long.clone()))
            .collect();
        let sections = group_markers(&adapt_markers(&markers));
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].elements.len(), 3);
        assert_eq!(sections[1].elements.len(), 1);
    }
}
