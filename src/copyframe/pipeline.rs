//! High-level wireframe pipeline
//!
//! `WireframePipeline` ties the stages together: normalize, tokenize and
//! classify (or adapt supplied structure), group, merge, resolve, and
//! select templates. The computation is pure and deterministic; given
//! identical input and catalog the output is byte-identical. The only
//! hard error is structurally invalid marker input; every heuristic
//! ambiguity resolves to a deterministic fallback instead.

use crate::copyframe::elements::{self, MarkerError, SemanticElement, StructuralMarker};
use crate::copyframe::grouping::{self, force_resplit, merge_tiny_sections};
use crate::copyframe::lexing::line_classification::classify_lines;
use crate::copyframe::lexing::tokenizer::tokenize;
use crate::copyframe::normalize::normalize;
use crate::copyframe::resolve;
use crate::copyframe::sections::{ContentShapeSignals, Section, SectionType};
use crate::copyframe::templates::{select_template, Template, TemplateCatalog};
use serde::Serialize;
use std::fmt;

/// Errors that can occur during pipeline operations
#[derive(Debug, Clone, PartialEq)]
pub enum WireframeError {
    InvalidInput(String),
}

impl fmt::Display for WireframeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireframeError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
        }
    }
}

impl std::error::Error for WireframeError {}

impl From<MarkerError> for WireframeError {
    fn from(err: MarkerError) -> Self {
        WireframeError::InvalidInput(err.to_string())
    }
}

/// Pipeline input: raw copy, optionally accompanied by pre-extracted
/// structural markers. Empty or absent markers fall back to the text
/// path on the raw content.
#[derive(Debug, Clone, Default)]
pub struct ContentInput {
    pub raw: String,
    pub markers: Option<Vec<StructuralMarker>>,
}

impl ContentInput {
    pub fn text(raw: impl Into<String>) -> Self {
        ContentInput {
            raw: raw.into(),
            markers: None,
        }
    }

    pub fn with_markers(raw: impl Into<String>, markers: Vec<StructuralMarker>) -> Self {
        ContentInput {
            raw: raw.into(),
            markers: Some(markers),
        }
    }
}

/// Final output unit: a typed section with its selected template and
/// content shape signals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WireframeSection {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SectionType,
    pub elements: Vec<SemanticElement>,
    pub template: Template,
    pub shape: ContentShapeSignals,
}

/// The whole content-to-structure pipeline behind one entry point.
///
/// Stateless between runs: each invocation builds its sections fresh and
/// shares nothing, so concurrent runs need no coordination.
pub struct WireframePipeline {
    catalog: TemplateCatalog,
}

impl WireframePipeline {
    /// Pipeline over the built-in template catalog.
    pub fn new() -> Self {
        WireframePipeline {
            catalog: TemplateCatalog::with_defaults(),
        }
    }

    /// Pipeline over an externally owned catalog. The catalog is only
    /// ever read.
    pub fn with_catalog(catalog: TemplateCatalog) -> Self {
        WireframePipeline { catalog }
    }

    /// Run the pipeline on raw copy.
    pub fn run_text(&self, raw: &str) -> Vec<WireframeSection> {
        self.assemble(self.text_sections(raw))
    }

    /// Run the pipeline on raw copy plus a marker JSON payload. This is
    /// the one entry point that can fail: malformed markers surface as
    /// `InvalidInput`.
    pub fn run_markers_json(
        &self,
        raw: &str,
        markers_json: &str,
    ) -> Result<Vec<WireframeSection>, WireframeError> {
        let markers = elements::parse_markers(markers_json)?;
        self.run(&ContentInput::with_markers(raw, markers))
    }

    /// Run the pipeline on a prepared input.
    pub fn run(&self, input: &ContentInput) -> Result<Vec<WireframeSection>, WireframeError> {
        let sections = match &input.markers {
            Some(markers) if !markers.is_empty() => {
                let adapted = elements::adapt_markers(markers);
                if adapted.is_empty() {
                    // Structure carried no content; trust the raw text instead
                    self.text_sections(&input.raw)
                } else {
                    grouping::group_markers(&adapted)
                }
            }
            _ => self.text_sections(&input.raw),
        };

        Ok(self.assemble(sections))
    }

    fn text_sections(&self, raw: &str) -> Vec<Section> {
        let normalized = normalize(raw);
        let classified = classify_lines(tokenize(&normalized));
        grouping::group_lines(&classified)
    }

    fn assemble(&self, sections: Vec<Section>) -> Vec<WireframeSection> {
        let sections = force_resplit(sections);
        let sections = merge_tiny_sections(sections);
        let sections = resolve::finalize(sections);

        sections
            .into_iter()
            .enumerate()
            .map(|(index, section)| {
                let shape = ContentShapeSignals::from_section(&section);
                let template = select_template(&self.catalog, &section, &shape);
                WireframeSection {
                    id: format!("section-{}", index + 1),
                    kind: section.kind,
                    elements: section.elements,
                    template,
                    shape,
                }
            })
            .collect()
    }
}

impl Default for WireframePipeline {
    fn default() -> Self {
        WireframePipeline::new()
    }
}
