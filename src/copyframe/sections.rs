//! Section model
//!
//! A section is a contiguous, ordered run of semantic elements carrying
//! one semantic type, plus the derived counts the template selector and
//! the type resolver consult.

use crate::copyframe::elements::SemanticElement;
use crate::copyframe::lexing::features::{self, FrameworkFamily};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed enumeration of section types. Every section carries exactly
/// one of these; there is no untyped state in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    Hero,
    Problem,
    Solution,
    About,
    Features,
    Testimonial,
    Cta,
    Content,
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SectionType::Hero => "hero",
            SectionType::Problem => "problem",
            SectionType::Solution => "solution",
            SectionType::About => "about",
            SectionType::Features => "features",
            SectionType::Testimonial => "testimonial",
            SectionType::Cta => "cta",
            SectionType::Content => "content",
        };
        write!(f, "{name}")
    }
}

/// One grouped section. Element order is insertion order, which equals
/// source order; the grouper never reorders or duplicates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    #[serde(rename = "type")]
    pub kind: SectionType,
    pub elements: Vec<SemanticElement>,
    pub bullet_count: usize,
    pub heading_count: usize,
    pub total_words: usize,
    pub dominant_framework: Option<FrameworkFamily>,
}

impl Section {
    /// Build a section from its elements, deriving the counts.
    pub fn from_elements(
        kind: SectionType,
        elements: Vec<SemanticElement>,
        dominant_framework: Option<FrameworkFamily>,
    ) -> Self {
        let bullet_count = elements.iter().filter(|e| e.is_bullet()).count();
        let heading_count = elements.iter().filter(|e| e.is_heading()).count();
        let total_words = elements.iter().map(SemanticElement::word_count).sum();

        Section {
            kind,
            elements,
            bullet_count,
            heading_count,
            total_words,
            dominant_framework,
        }
    }

    /// All element content joined with newlines, for keyword matching.
    pub fn concatenated_text(&self) -> String {
        let parts: Vec<&str> = self.elements.iter().map(|e| e.content.as_str()).collect();
        parts.join("\n")
    }

    /// Fold this section's elements into the front of `next`, keeping
    /// source order. The dominant framework is rescored over the merged
    /// content so the result stays consistent with the rule tables.
    pub fn merged_into(self, next: Section) -> Section {
        let mut elements = self.elements;
        elements.extend(next.elements);

        let mut scores = features::FrameworkScores::default();
        for element in &elements {
            scores.accumulate(&features::score_frameworks(&element.content));
        }

        Section::from_elements(next.kind, elements, scores.dominant_family())
    }
}

/// Derived per-section counts and flags used to choose among template
/// variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentShapeSignals {
    pub element_count: usize,
    pub list_item_count: usize,
    pub has_lists: bool,
    pub has_headings: bool,
    pub is_long: bool,
    pub has_numbers: bool,
    pub has_quotes: bool,
    pub should_use_bullet_list: bool,
    pub should_use_icon_grid: bool,
}

impl ContentShapeSignals {
    pub fn from_section(section: &Section) -> Self {
        let element_count = section.elements.len();
        let list_item_count = section.bullet_count;
        let has_lists = list_item_count > 0;
        let has_headings = section.heading_count > 0;
        let is_long = section.total_words > 100;
        let has_numbers = section
            .elements
            .iter()
            .any(|e| e.content.chars().any(|c| c.is_ascii_digit()));
        let has_quotes = section
            .elements
            .iter()
            .any(|e| e.content.contains(['"', '\u{201C}', '\u{201D}']));

        let should_use_bullet_list = list_item_count >= 4;
        let should_use_icon_grid =
            !should_use_bullet_list && (2..=6).contains(&list_item_count);

        ContentShapeSignals {
            element_count,
            list_item_count,
            has_lists,
            has_headings,
            is_long,
            has_numbers,
            has_quotes,
            should_use_bullet_list,
            should_use_icon_grid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bullet_section(count: usize) -> Section {
        let elements = (0..count)
            .map(|i| SemanticElement::bullet(format!("Item number {i}")))
            .collect();
        Section::from_elements(SectionType::Features, elements, None)
    }

    #[test]
    fn test_from_elements_counts() {
        let section = Section::from_elements(
            SectionType::Content,
            vec![
                SemanticElement::heading(2, "A heading"),
                SemanticElement::paragraph("Two words here indeed"),
                SemanticElement::bullet("One item"),
            ],
            None,
        );
        assert_eq!(section.heading_count, 1);
        assert_eq!(section.bullet_count, 1);
        assert_eq!(section.total_words, 8);
    }

    #[test]
    fn test_merged_into_preserves_order() {
        let first = Section::from_elements(
            SectionType::Content,
            vec![SemanticElement::paragraph("first part")],
            None,
        );
        let second = Section::from_elements(
            SectionType::Content,
            vec![SemanticElement::paragraph("second part")],
            None,
        );
        let merged = first.merged_into(second);
        assert_eq!(merged.elements[0].content, "first part");
        assert_eq!(merged.elements[1].content, "second part");
        assert_eq!(merged.total_words, 4);
    }

    #[test]
    fn test_shape_bullet_list_threshold() {
        let shape = ContentShapeSignals::from_section(&bullet_section(4));
        assert!(shape.should_use_bullet_list);
        assert!(!shape.should_use_icon_grid);
    }

    #[test]
    fn test_shape_icon_grid_range() {
        let shape = ContentShapeSignals::from_section(&bullet_section(3));
        assert!(!shape.should_use_bullet_list);
        assert!(shape.should_use_icon_grid);
    }

    #[test]
    fn test_shape_flags() {
        let section = Section::from_elements(
            SectionType::Content,
            vec![SemanticElement::paragraph(r#"Over 500 teams said "wow" already"#)],
            None,
        );
        let shape = ContentShapeSignals::from_section(&section);
        assert!(shape.has_numbers);
        assert!(shape.has_quotes);
        assert!(!shape.has_lists);
        assert!(!shape.is_long);
    }
}
