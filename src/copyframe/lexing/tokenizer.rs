//! Atomic line tokenization
//!
//! Splits normalized copy into candidate lines and computes the feature
//! bundle each downstream heuristic consumes. When a text arrives as one
//! or two very long lines, a secondary intelligent split (paragraph
//! breaks, then opener anchors, then sentence chunking) restores the
//! granularity the scoring heuristics expect.

use crate::copyframe::lexing::features::{
    self, FrameworkScores, STRONG_FRAMEWORK_SIGNAL,
};
use once_cell::sync::Lazy;
use regex::Regex;

/// Lines at or below this trimmed length are dropped as noise
pub const MIN_LINE_LEN: usize = 5;
/// Texts longer than this with two or fewer lines get the secondary split
pub const LONG_TEXT_THRESHOLD: usize = 200;
/// Target ceiling for sentence-chunked pieces
const CHUNK_TARGET_LEN: usize = 160;

/// Sentence terminators followed by whitespace mark chunk boundaries
static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+\s+").unwrap());

/// One candidate line with its precomputed feature bundle.
///
/// Produced once per line and immutable thereafter; every score is a pure
/// function of the line text, its index, and the running average length.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomicLine {
    pub index: usize,
    pub text: String,
    pub length: usize,
    pub word_count: usize,
    pub bullet_score: f32,
    pub heading_score: f32,
    pub framework_scores: FrameworkScores,
    pub section_break_score: f32,
}

/// Tokenize normalized text into scored atomic lines.
pub fn tokenize(text: &str) -> Vec<AtomicLine> {
    let mut candidates: Vec<String> = text
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    if candidates.len() <= 2 && text.len() > LONG_TEXT_THRESHOLD {
        candidates = intelligent_split(text);
    }

    let mut lines = Vec::new();
    let mut running_total = 0usize;

    for candidate in candidates {
        let trimmed = candidate.trim();
        if trimmed.len() <= MIN_LINE_LEN {
            continue;
        }

        let index = lines.len();
        // Average length of the lines kept so far, for the outlier bonus
        let running_avg = if index > 0 {
            running_total as f32 / index as f32
        } else {
            0.0
        };

        lines.push(build_line(trimmed, index, running_avg));
        running_total += trimmed.len();
    }

    lines
}

fn build_line(text: &str, index: usize, running_avg: f32) -> AtomicLine {
    let bullet_score = features::bullet_score(text);
    // Bullets never double as headings
    let heading_score = if bullet_score >= features::BULLET_THRESHOLD {
        0.0
    } else {
        features::heading_score(text, index)
    };
    let framework_scores = features::score_frameworks(text);

    let section_break_score = compute_break_score(
        text,
        index,
        heading_score,
        &framework_scores,
        running_avg,
    );

    AtomicLine {
        index,
        text: text.to_string(),
        length: text.len(),
        word_count: text.split_whitespace().count(),
        bullet_score,
        heading_score,
        framework_scores,
        section_break_score,
    }
}

/// Additive break score, clamped to [0, 1].
///
/// Components: heading confidence, index-0 bonus, strong framework
/// signal, explicit section-opening phrase, and a length outlier (line
/// more than double the running average).
fn compute_break_score(
    text: &str,
    index: usize,
    heading_score: f32,
    frameworks: &FrameworkScores,
    running_avg: f32,
) -> f32 {
    let mut score = 0.8 * heading_score;

    if index == 0 {
        score += 0.3;
    }
    if frameworks.strongest() >= STRONG_FRAMEWORK_SIGNAL {
        score += 0.3;
    }
    if features::is_section_opener(text) {
        score += 0.45;
    }
    if running_avg > 0.0 && text.len() as f32 > 2.0 * running_avg {
        score += 0.2;
    }

    score.clamp(0.0, 1.0)
}

/// Secondary split for texts that arrive as one or two long lines.
///
/// Tried in order: paragraph-break detection, keyword-anchored
/// re-splitting around section-opening phrases, then sentence-boundary
/// chunking for any remaining over-long run.
fn intelligent_split(text: &str) -> Vec<String> {
    let paragraphs: Vec<&str> = text
        .split("\n\n")
        .flat_map(|block| block.lines())
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect();

    let mut pieces: Vec<String> = Vec::new();
    for paragraph in paragraphs {
        pieces.extend(split_at_anchors(paragraph));
    }

    pieces
        .into_iter()
        .flat_map(|piece| {
            if piece.len() > LONG_TEXT_THRESHOLD {
                chunk_sentences(&piece)
            } else {
                vec![piece]
            }
        })
        .collect()
}

/// Split one run of text at opener-phrase anchors, keeping every byte.
fn split_at_anchors(text: &str) -> Vec<String> {
    let offsets: Vec<usize> = features::anchor_offsets(text)
        .into_iter()
        .filter(|offset| *offset > 0)
        .collect();

    if offsets.is_empty() {
        return vec![text.to_string()];
    }

    let mut pieces = Vec::new();
    let mut start = 0usize;
    for offset in offsets {
        let piece = text[start..offset].trim();
        if !piece.is_empty() {
            pieces.push(piece.to_string());
        }
        start = offset;
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        pieces.push(tail.to_string());
    }
    pieces
}

/// Greedily pack whole sentences into chunks near the target length.
fn chunk_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0usize;
    for found in SENTENCE_BOUNDARY.find_iter(text) {
        sentences.push(text[start..found.end()].trim().to_string());
        start = found.end();
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    let mut chunks: Vec<String> = Vec::new();
    let mut current = String::new();
    for sentence in sentences {
        if !current.is_empty() && current.len() + sentence.len() + 1 > CHUNK_TARGET_LEN {
            chunks.push(current.clone());
            current.clear();
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&sentence);
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
