//! Line classification
//!
//! Assigns each atomic line a discrete type plus a confidence value and
//! the dominant copywriting-framework family for the line.
//!
//! Classification follows this specific order (important for correctness):
//! 1. Bullet lines (marker score at threshold, or an explicit list pattern)
//! 2. Heading lines (heading score at threshold, or an explicit pattern)
//! 3. Default to paragraph

use crate::copyframe::lexing::features::{
    self, FrameworkFamily, BULLET_THRESHOLD, HEADING_THRESHOLD,
};
use crate::copyframe::lexing::tokenizer::AtomicLine;

/// Discrete line type with its subtype payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Bullet { numbered: bool },
    Heading { level: u8 },
    Paragraph,
}

/// An atomic line plus its classification outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedLine {
    pub line: AtomicLine,
    pub kind: LineKind,
    pub confidence: f32,
    pub framework: Option<FrameworkFamily>,
}

/// Classify every line in a tokenized sequence.
pub fn classify_lines(lines: Vec<AtomicLine>) -> Vec<ClassifiedLine> {
    lines.into_iter().map(classify_line).collect()
}

/// Classify one line. First match wins; the fallback is paragraph, so
/// every line receives a type.
pub fn classify_line(line: AtomicLine) -> ClassifiedLine {
    let framework = line.framework_scores.dominant_family();

    if line.bullet_score >= BULLET_THRESHOLD || features::is_numbered_marker(&line.text) {
        let confidence = line.bullet_score.clamp(0.0, 1.0);
        return ClassifiedLine {
            kind: LineKind::Bullet {
                numbered: features::is_numbered_marker(&line.text),
            },
            confidence,
            framework,
            line,
        };
    }

    if line.heading_score >= HEADING_THRESHOLD || features::is_explicit_heading(&line.text) {
        let confidence = line.heading_score.max(HEADING_THRESHOLD).clamp(0.0, 1.0);
        let level = heading_level(&line, confidence);
        return ClassifiedLine {
            kind: LineKind::Heading { level },
            confidence,
            framework,
            line,
        };
    }

    let confidence = (1.0 - line.heading_score.max(line.bullet_score)).clamp(0.0, 1.0);
    ClassifiedLine {
        kind: LineKind::Paragraph,
        confidence,
        framework,
        line,
    }
}

/// Heading level from combined signal strength: level 1 for the opening
/// line or very confident headings, level 3 for short colon-terminated
/// labels, level 2 otherwise.
fn heading_level(line: &AtomicLine, confidence: f32) -> u8 {
    if line.index == 0 || confidence >= 0.8 {
        1
    } else if line.length <= 30 && line.text.trim_end().ends_with(':') {
        3
    } else {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::copyframe::lexing::tokenizer::tokenize;

    fn classify(text: &str) -> Vec<ClassifiedLine> {
        classify_lines(tokenize(text))
    }

    #[test]
    fn test_classify_bullet_line() {
        let lines = classify("Filler opening line here\n- Fast setup in minutes");
        assert_eq!(lines[1].kind, LineKind::Bullet { numbered: false });
        assert!(lines[1].confidence >= 0.7);
    }

    #[test]
    fn test_classify_numbered_bullet() {
        let lines = classify("Filler opening line here\n1. Connect your account");
        assert_eq!(lines[1].kind, LineKind::Bullet { numbered: true });
    }

    #[test]
    fn test_classify_paragraph() {
        let lines = classify("Filler opening line here.\nThis is a plain sentence that explains things.");
        assert_eq!(lines[1].kind, LineKind::Paragraph);
        assert!(lines[1].confidence >= 0.0 && lines[1].confidence <= 1.0);
    }

    #[test]
    fn test_classify_heading_levels() {
        let lines = classify("The Big Announcement\nSome body text follows right here.\nKey details:");
        // Index 0 heading is level 1
        assert_eq!(lines[0].kind, LineKind::Heading { level: 1 });
        // Short colon-terminated label is level 3
        assert_eq!(lines[2].kind, LineKind::Heading { level: 3 });
    }

    #[test]
    fn test_classify_explicit_markdown_heading() {
        let lines = classify("Filler opening line here.\nSome body text follows right here.\nSome more body text continues on.\nAnd still more body text sits here.\n## What You Get Today");
        let last = lines.last().unwrap();
        assert!(matches!(last.kind, LineKind::Heading { .. }));
    }

    #[test]
    fn test_framework_family_attached() {
        let lines = classify("Filler opening line here.\nYou're not shipping as fast as you could be.");
        assert_eq!(lines[1].framework, Some(FrameworkFamily::Pas));
    }

    #[test]
    fn test_confidence_in_unit_range() {
        let lines = classify("The Big Announcement\n- Fast setup in minutes\nA plain closing sentence ends this.");
        for line in &lines {
            assert!((0.0..=1.0).contains(&line.confidence));
        }
    }
}
