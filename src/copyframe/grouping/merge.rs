//! Tiny-section merge pass
//!
//! Folds single-element sections into the following section when both
//! carry the same type, so local fragmentation from the grouper does not
//! survive into resolution. Single pass, no iteration to fixpoint:
//! fragmentation is adjacent by construction.

use crate::copyframe::sections::Section;

/// Merge every one-element section into its successor when the successor
/// has the same type. Element order is preserved.
pub fn merge_tiny_sections(sections: Vec<Section>) -> Vec<Section> {
    let mut out: Vec<Section> = Vec::new();
    // A singleton waiting to see whether its successor matches
    let mut pending: Option<Section> = None;

    for section in sections {
        let section = match pending.take() {
            Some(prev) if prev.kind == section.kind => prev.merged_into(section),
            Some(prev) => {
                out.push(prev);
                section
            }
            None => section,
        };

        if section.elements.len() == 1 {
            pending = Some(section);
        } else {
            out.push(section);
        }
    }

    if let Some(prev) = pending {
        out.push(prev);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::copyframe::elements::SemanticElement;
    use crate::copyframe::sections::SectionType;

    fn section(kind: SectionType, contents: &[&str]) -> Section {
        let elements = contents
            .iter()
            .map(|c| SemanticElement::paragraph(*c))
            .collect();
        Section::from_elements(kind, elements, None)
    }

    #[test]
    fn test_singleton_merges_into_same_typed_next() {
        let sections = vec![
            section(SectionType::Content, &["lonely piece"]),
            section(SectionType::Content, &["first body", "second body"]),
        ];
        let merged = merge_tiny_sections(sections);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].elements.len(), 3);
        assert_eq!(merged[0].elements[0].content, "lonely piece");
    }

    #[test]
    fn test_singleton_kept_when_next_differs() {
        let sections = vec![
            section(SectionType::Problem, &["lonely problem"]),
            section(SectionType::Solution, &["fix one", "fix two"]),
        ];
        let merged = merge_tiny_sections(sections);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_two_singletons_same_type_chain() {
        let sections = vec![
            section(SectionType::Content, &["one"]),
            section(SectionType::Content, &["two"]),
        ];
        let merged = merge_tiny_sections(sections);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].elements.len(), 2);
    }

    #[test]
    fn test_trailing_singleton_survives() {
        let sections = vec![
            section(SectionType::Content, &["first body", "second body"]),
            section(SectionType::Cta, &["final push"]),
        ];
        let merged = merge_tiny_sections(sections);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[1].elements.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(merge_tiny_sections(Vec::new()).is_empty());
    }
}
