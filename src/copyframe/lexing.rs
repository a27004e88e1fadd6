//! Lexing stage: atomic line tokenization, feature extraction, and line
//! classification.

pub mod features;
pub mod line_classification;
pub mod tokenizer;

pub use features::{FrameworkFamily, FrameworkScores};
pub use line_classification::{classify_line, classify_lines, ClassifiedLine, LineKind};
pub use tokenizer::{tokenize, AtomicLine};
