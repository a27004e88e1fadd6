//! Line-score grouping strategy (text path)
//!
//! Scans classified lines in order and starts a new section whenever the
//! break score clears the threshold, a size ceiling is exceeded, or the
//! incoming framework family flips away from the section's dominant
//! family with high confidence. The very first line always opens a
//! section; there is no backtracking.

use crate::copyframe::elements::element_from_line;
use crate::copyframe::grouping::Accumulator;
use crate::copyframe::lexing::features::SECTION_BREAK_THRESHOLD;
use crate::copyframe::lexing::line_classification::ClassifiedLine;
use crate::copyframe::sections::Section;

/// Running word-count ceiling per section
pub const MAX_SECTION_WORDS: usize = 500;
/// Element-count ceiling per section
pub const MAX_SECTION_ELEMENTS: usize = 8;
/// Elements a section must already hold before a family flip can break it
const FAMILY_SWITCH_MIN_ELEMENTS: usize = 3;
/// Aggregate family score the incoming line needs for a family-flip break
const FAMILY_SWITCH_CONFIDENCE: f32 = 0.6;

/// Group classified lines into sections.
pub fn group_lines(lines: &[ClassifiedLine]) -> Vec<Section> {
    let mut acc = Accumulator::default();

    for line in lines {
        if should_break(&acc, line) {
            acc.flush();
        }
        acc.push(element_from_line(line), &line.line.framework_scores);
    }

    acc.finish()
}

fn should_break(acc: &Accumulator, line: &ClassifiedLine) -> bool {
    let current = match acc.current() {
        Some(current) if current.len() > 0 => current,
        _ => return false,
    };

    if line.line.section_break_score > SECTION_BREAK_THRESHOLD {
        return true;
    }
    if current.words() > MAX_SECTION_WORDS {
        return true;
    }
    if current.len() >= MAX_SECTION_ELEMENTS {
        return true;
    }

    // Framework flip: only once the section has substance, and only when
    // the incoming line is confidently in a different family
    if current.len() > FAMILY_SWITCH_MIN_ELEMENTS {
        if let (Some(incoming), Some(dominant)) = (line.framework, current.dominant_family()) {
            if incoming != dominant
                && line.line.framework_scores.strongest() >= FAMILY_SWITCH_CONFIDENCE
            {
                return true;
            }
        }
    }

    false
}
