//! # copyframe
//!
//! A deterministic, rule-based engine that partitions unstructured
//! marketing copy into an ordered sequence of semantically typed
//! sections (hero, problem, solution, about, features, testimonial,
//! cta, content) and assigns each one a concrete layout template from a
//! fixed catalog.
//!
//! The pipeline is pure and total: it never fails on malformed copy,
//! never drops content, and resolves every heuristic tie through fixed,
//! documented priority orders. Given identical input and template
//! catalog, the output is byte-identical.

pub mod copyframe;

pub use copyframe::elements::{SemanticElement, StructuralMarker};
pub use copyframe::pipeline::{
    ContentInput, WireframeError, WireframePipeline, WireframeSection,
};
pub use copyframe::sections::SectionType;
