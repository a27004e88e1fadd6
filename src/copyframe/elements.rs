//! Semantic elements and the structured-input adapter
//!
//! `SemanticElement` is the unit the section grouper consumes. Elements
//! are either synthesized from classified lines (text path) or adapted
//! from externally supplied structural markers (structured path), which
//! are trusted as given and never reclassified.

use crate::copyframe::lexing::features;
use crate::copyframe::lexing::line_classification::{ClassifiedLine, LineKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The smallest classified content unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ElementKind {
    Heading { level: u8 },
    Paragraph,
    Bullet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticElement {
    #[serde(flatten)]
    pub kind: ElementKind,
    pub content: String,
}

impl SemanticElement {
    pub fn heading(level: u8, content: impl Into<String>) -> Self {
        SemanticElement {
            kind: ElementKind::Heading {
                level: level.clamp(1, 3),
            },
            content: content.into(),
        }
    }

    pub fn paragraph(content: impl Into<String>) -> Self {
        SemanticElement {
            kind: ElementKind::Paragraph,
            content: content.into(),
        }
    }

    pub fn bullet(content: impl Into<String>) -> Self {
        SemanticElement {
            kind: ElementKind::Bullet,
            content: content.into(),
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self.kind, ElementKind::Heading { .. })
    }

    pub fn is_bullet(&self) -> bool {
        self.kind == ElementKind::Bullet
    }

    pub fn heading_level(&self) -> Option<u8> {
        match self.kind {
            ElementKind::Heading { level } => Some(level),
            _ => None,
        }
    }

    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}

/// Synthesize an element from a classified line. Bullet and heading
/// markers are stripped so element content is clean copy.
pub fn element_from_line(line: &ClassifiedLine) -> SemanticElement {
    match line.kind {
        LineKind::Bullet { .. } => {
            SemanticElement::bullet(features::strip_bullet_marker(&line.line.text).trim())
        }
        LineKind::Heading { level } => {
            SemanticElement::heading(level, features::strip_heading_marker(&line.line.text).trim())
        }
        LineKind::Paragraph => SemanticElement::paragraph(line.line.text.trim()),
    }
}

/// Externally produced structural marker, typically derived from a
/// markup-parsing collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralMarker {
    #[serde(rename = "type")]
    pub kind: MarkerKind,
    #[serde(default)]
    pub level: Option<u8>,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Heading,
    Paragraph,
    ListItem,
    ListContainer,
}

impl StructuralMarker {
    pub fn heading(level: u8, content: impl Into<String>) -> Self {
        StructuralMarker {
            kind: MarkerKind::Heading,
            level: Some(level),
            content: content.into(),
        }
    }

    pub fn paragraph(content: impl Into<String>) -> Self {
        StructuralMarker {
            kind: MarkerKind::Paragraph,
            level: None,
            content: content.into(),
        }
    }

    pub fn list_item(content: impl Into<String>) -> Self {
        StructuralMarker {
            kind: MarkerKind::ListItem,
            level: None,
            content: content.into(),
        }
    }
}

/// Error raised when a marker payload cannot be understood.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkerError {
    Parse(String),
}

impl fmt::Display for MarkerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerError::Parse(msg) => write!(f, "Invalid structural markers: {msg}"),
        }
    }
}

impl std::error::Error for MarkerError {}

/// Parse a JSON array of structural markers. An unrecognized `type` or a
/// malformed payload is the pipeline's one hard error.
pub fn parse_markers(json: &str) -> Result<Vec<StructuralMarker>, MarkerError> {
    serde_json::from_str(json).map_err(|err| MarkerError::Parse(err.to_string()))
}

/// Adapt supplied markers into the element shape the text path produces.
///
/// Labels are trusted as given. Blank markers are skipped; a
/// `list_container` contributes one bullet per non-blank inner line and
/// an empty container is purely structural.
pub fn adapt_markers(markers: &[StructuralMarker]) -> Vec<SemanticElement> {
    let mut elements = Vec::new();

    for marker in markers {
        match marker.kind {
            MarkerKind::Heading => {
                let content = marker.content.trim();
                if !content.is_empty() {
                    elements.push(SemanticElement::heading(marker.level.unwrap_or(2), content));
                }
            }
            MarkerKind::Paragraph => {
                let content = marker.content.trim();
                if !content.is_empty() {
                    elements.push(SemanticElement::paragraph(content));
                }
            }
            MarkerKind::ListItem => {
                let content = marker.content.trim();
                if !content.is_empty() {
                    elements.push(SemanticElement::bullet(content));
                }
            }
            MarkerKind::ListContainer => {
                for item in marker.content.lines() {
                    let item = item.trim();
                    if !item.is_empty() {
                        elements.push(SemanticElement::bullet(item));
                    }
                }
            }
        }
    }

    elements
}
