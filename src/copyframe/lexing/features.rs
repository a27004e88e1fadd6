//! Feature extraction rule tables
//!
//! All heuristics live here as declarative tables of (pattern, weight)
//! rules compiled once. Matching is additive and order-independent for
//! scoring; family tie-breaks follow declaration order of the family
//! enumeration. Grouping and resolution logic never inline pattern
//! literals; they call the scoring functions in this module.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Score at or above which a line is treated as a bullet
pub const BULLET_THRESHOLD: f32 = 0.7;
/// Score at or above which a line is treated as a heading
pub const HEADING_THRESHOLD: f32 = 0.5;
/// Break score above which the line grouper starts a new section
pub const SECTION_BREAK_THRESHOLD: f32 = 0.7;
/// A single framework signal family at or above this is a strong signal
pub const STRONG_FRAMEWORK_SIGNAL: f32 = 0.4;

/// The eleven rhetorical signals tracked per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameworkSignal {
    Attention,
    Interest,
    Desire,
    Action,
    Problem,
    Agitation,
    Solution,
    HeroSignal,
    FeatureSignal,
    SocialProofSignal,
    CtaSignal,
}

/// Copywriting-framework families, in tie-break declaration order:
/// AIDA first, then PAS, then the landing-page signal group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameworkFamily {
    Aida,
    Pas,
    LandingPage,
}

impl fmt::Display for FrameworkFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameworkFamily::Aida => write!(f, "aida"),
            FrameworkFamily::Pas => write!(f, "pas"),
            FrameworkFamily::LandingPage => write!(f, "landing_page"),
        }
    }
}

/// Per-line (or per-section, when summed) framework signal scores.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameworkScores {
    pub attention: f32,
    pub interest: f32,
    pub desire: f32,
    pub action: f32,
    pub problem: f32,
    pub agitation: f32,
    pub solution: f32,
    pub hero_signal: f32,
    pub feature_signal: f32,
    pub social_proof_signal: f32,
    pub cta_signal: f32,
}

impl FrameworkScores {
    fn add(&mut self, signal: FrameworkSignal, weight: f32) {
        let slot = match signal {
            FrameworkSignal::Attention => &mut self.attention,
            FrameworkSignal::Interest => &mut self.interest,
            FrameworkSignal::Desire => &mut self.desire,
            FrameworkSignal::Action => &mut self.action,
            FrameworkSignal::Problem => &mut self.problem,
            FrameworkSignal::Agitation => &mut self.agitation,
            FrameworkSignal::Solution => &mut self.solution,
            FrameworkSignal::HeroSignal => &mut self.hero_signal,
            FrameworkSignal::FeatureSignal => &mut self.feature_signal,
            FrameworkSignal::SocialProofSignal => &mut self.social_proof_signal,
            FrameworkSignal::CtaSignal => &mut self.cta_signal,
        };
        *slot = (*slot + weight).min(1.0);
    }

    /// Accumulate another score bundle (used when summing over a section).
    pub fn accumulate(&mut self, other: &FrameworkScores) {
        self.attention += other.attention;
        self.interest += other.interest;
        self.desire += other.desire;
        self.action += other.action;
        self.problem += other.problem;
        self.agitation += other.agitation;
        self.solution += other.solution;
        self.hero_signal += other.hero_signal;
        self.feature_signal += other.feature_signal;
        self.social_proof_signal += other.social_proof_signal;
        self.cta_signal += other.cta_signal;
    }

    /// Aggregate score of the AIDA family.
    pub fn aida(&self) -> f32 {
        self.attention + self.interest + self.desire + self.action
    }

    /// Aggregate score of the PAS family.
    pub fn pas(&self) -> f32 {
        self.problem + self.agitation + self.solution
    }

    /// Aggregate score of the landing-page signal family.
    pub fn landing_page(&self) -> f32 {
        self.hero_signal + self.feature_signal + self.social_proof_signal + self.cta_signal
    }

    /// The family with the strictly highest aggregate, or `None` when all
    /// aggregates are zero. Ties resolve to the earlier family in
    /// declaration order (AIDA, then PAS, then landing page).
    pub fn dominant_family(&self) -> Option<FrameworkFamily> {
        let families = [
            (FrameworkFamily::Aida, self.aida()),
            (FrameworkFamily::Pas, self.pas()),
            (FrameworkFamily::LandingPage, self.landing_page()),
        ];

        let mut best: Option<(FrameworkFamily, f32)> = None;
        for (family, score) in families {
            if score <= 0.0 {
                continue;
            }
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((family, score)),
            }
        }
        best.map(|(family, _)| family)
    }

    /// Strongest family aggregate (0.0 when nothing matched).
    pub fn strongest(&self) -> f32 {
        self.aida().max(self.pas()).max(self.landing_page())
    }
}

/// Bullet-marker rules: (pattern, weight, numbered)
const BULLET_RULES: &[(&str, f32, bool)] = &[
    (r"^\s*[-*•‣▸►]\s+", 0.9, false),
    (r"^\s*\d{1,3}[.)]\s+", 0.85, true),
    (r"^\s*[→➔➜➤]\s+", 0.8, false),
    (r"^\s*[✓✔✗✦★]\s+", 0.8, false),
];

static COMPILED_BULLET_RULES: Lazy<Vec<(Regex, f32, bool)>> = Lazy::new(|| {
    BULLET_RULES
        .iter()
        .map(|(pattern, weight, numbered)| (Regex::new(pattern).unwrap(), *weight, *numbered))
        .collect()
});

/// Framework signal rules: (signal, pattern, weight)
const FRAMEWORK_RULES: &[(FrameworkSignal, &str, f32)] = &[
    // AIDA: attention
    (FrameworkSignal::Attention, r"(?i)\bimagine\b", 0.4),
    (FrameworkSignal::Attention, r"(?i)\bwhat if\b", 0.4),
    (FrameworkSignal::Attention, r"(?i)\bwelcome to\b", 0.4),
    (FrameworkSignal::Attention, r"(?i)\bdid you know\b", 0.4),
    (FrameworkSignal::Attention, r"(?i)\bpicture this\b", 0.4),
    // AIDA: interest
    (FrameworkSignal::Interest, r"(?i)\bhow it works\b", 0.4),
    (FrameworkSignal::Interest, r"(?i)\bwhy it matters\b", 0.4),
    (FrameworkSignal::Interest, r"(?i)\bdiscover\b", 0.3),
    (FrameworkSignal::Interest, r"(?i)\bdesigned to\b", 0.3),
    // AIDA: desire
    (FrameworkSignal::Desire, r"(?i)\byou'll love\b", 0.4),
    (FrameworkSignal::Desire, r"(?i)\btransform\b", 0.3),
    (FrameworkSignal::Desire, r"(?i)\bunlock\b", 0.3),
    (FrameworkSignal::Desire, r"(?i)\bachieve\b", 0.3),
    // AIDA: action
    (FrameworkSignal::Action, r"(?i)\bget started\b", 0.4),
    (FrameworkSignal::Action, r"(?i)\bsign up\b", 0.4),
    (FrameworkSignal::Action, r"(?i)\bbuy now\b", 0.4),
    (FrameworkSignal::Action, r"(?i)\bjoin (us|now|today)\b", 0.4),
    (FrameworkSignal::Action, r"(?i)\bbook a\b", 0.4),
    // PAS: problem
    (FrameworkSignal::Problem, r"(?i)\byou're not\b", 0.4),
    (FrameworkSignal::Problem, r"(?i)\btired of\b", 0.4),
    (FrameworkSignal::Problem, r"(?i)\bthe problem\b", 0.4),
    (FrameworkSignal::Problem, r"(?i)\bstruggl", 0.4),
    (FrameworkSignal::Problem, r"(?i)\bfrustrat", 0.3),
    (FrameworkSignal::Problem, r"(?i)\boverwhelm", 0.3),
    // PAS: agitation
    (FrameworkSignal::Agitation, r"(?i)\bit gets worse\b", 0.4),
    (FrameworkSignal::Agitation, r"(?i)\bcosting you\b", 0.4),
    (FrameworkSignal::Agitation, r"(?i)\bevery day you wait\b", 0.4),
    (FrameworkSignal::Agitation, r"(?i)\bcan't afford\b", 0.3),
    // PAS: solution
    (FrameworkSignal::Solution, r"(?i)\byou don't need\b", 0.4),
    (FrameworkSignal::Solution, r"(?i)\bthe solution\b", 0.4),
    (FrameworkSignal::Solution, r"(?i)\bwe help\b", 0.4),
    (FrameworkSignal::Solution, r"(?i)\bintroducing\b", 0.4),
    (FrameworkSignal::Solution, r"(?i)\bthat's why we\b", 0.3),
    // Landing page: hero
    (FrameworkSignal::HeroSignal, r"(?i)\bwelcome\b", 0.4),
    (FrameworkSignal::HeroSignal, r"(?i)\bwe are\b", 0.3),
    (FrameworkSignal::HeroSignal, r"(?i)\byour partner\b", 0.3),
    // Landing page: features
    (FrameworkSignal::FeatureSignal, r"(?i)\bfeatures?\b", 0.4),
    (FrameworkSignal::FeatureSignal, r"(?i)\bwhat you get\b", 0.4),
    (FrameworkSignal::FeatureSignal, r"(?i)\beverything you need\b", 0.4),
    (FrameworkSignal::FeatureSignal, r"(?i)\bincludes\b", 0.3),
    // Landing page: social proof
    (FrameworkSignal::SocialProofSignal, r"(?i)\btestimonial", 0.4),
    (
        FrameworkSignal::SocialProofSignal,
        r"(?i)\bwhat our (clients|customers)\b",
        0.4,
    ),
    (FrameworkSignal::SocialProofSignal, r"(?i)\btrusted by\b", 0.4),
    (FrameworkSignal::SocialProofSignal, r"(?i)\bcustomers? say\b", 0.4),
    (FrameworkSignal::SocialProofSignal, r"(?i)\breviews?\b", 0.3),
    // Landing page: call to action
    (FrameworkSignal::CtaSignal, r"(?i)\bget started\b", 0.4),
    (FrameworkSignal::CtaSignal, r"(?i)\bcontact us\b", 0.4),
    (FrameworkSignal::CtaSignal, r"(?i)\bfree trial\b", 0.4),
    (FrameworkSignal::CtaSignal, r"(?i)\bready to\b", 0.4),
    (FrameworkSignal::CtaSignal, r"(?i)\bstart today\b", 0.4),
    (FrameworkSignal::CtaSignal, r"(?i)\bschedule a\b", 0.4),
];

static COMPILED_FRAMEWORK_RULES: Lazy<Vec<(FrameworkSignal, Regex, f32)>> = Lazy::new(|| {
    FRAMEWORK_RULES
        .iter()
        .map(|(signal, pattern, weight)| (*signal, Regex::new(pattern).unwrap(), *weight))
        .collect()
});

/// Section-opening phrases, anchored at line start. A line leading with
/// one of these is a strong candidate for opening a new section.
const SECTION_OPENER_PATTERNS: &[&str] = &[
    r"(?i)^you're not\b",
    r"(?i)^you don't need\b",
    r"(?i)^introducing\b",
    r"(?i)^imagine\b",
    r"(?i)^what if\b",
    r"(?i)^ready to\b",
    r"(?i)^(our|the|my) story\b",
    r"(?i)^about us\b",
    r"(?i)^how it works\b",
    r"(?i)^what our (clients|customers)\b",
    r"(?i)^trusted by\b",
    r"(?i)^get started\b",
    r"(?i)^the problem\b",
    r"(?i)^the solution\b",
    r"(?i)^meet \b",
    r"(?i)^what you get\b",
];

static COMPILED_SECTION_OPENERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    SECTION_OPENER_PATTERNS
        .iter()
        .map(|pattern| Regex::new(pattern).unwrap())
        .collect()
});

/// Unanchored variants of the opener phrases, used when re-splitting a
/// wall of text at keyword anchors.
static COMPILED_RESPLIT_ANCHORS: Lazy<Vec<Regex>> = Lazy::new(|| {
    SECTION_OPENER_PATTERNS
        .iter()
        .map(|pattern| {
            let unanchored = pattern.replacen('^', r"\b", 1);
            Regex::new(&unanchored).unwrap()
        })
        .collect()
});

/// Heading phrases that always open a new section on the structured path.
const MAJOR_SECTION_OPENER_PATTERNS: &[&str] = &[
    r"(?i)^(about|features|pricing|testimonials|faq|contact)\b",
    r"(?i)^(our|the) story\b",
    r"(?i)^how it works\b",
    r"(?i)^what (you get|our clients|our customers)\b",
    r"(?i)^why choose\b",
];

static COMPILED_MAJOR_OPENERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    MAJOR_SECTION_OPENER_PATTERNS
        .iter()
        .map(|pattern| Regex::new(pattern).unwrap())
        .collect()
});

/// Bullet-likelihood score of a line: the strongest matching marker rule.
pub fn bullet_score(text: &str) -> f32 {
    COMPILED_BULLET_RULES
        .iter()
        .filter(|(regex, _, _)| regex.is_match(text))
        .map(|(_, weight, _)| *weight)
        .fold(0.0, f32::max)
}

/// Whether the line carries a numbered (ordered) list marker.
pub fn is_numbered_marker(text: &str) -> bool {
    COMPILED_BULLET_RULES
        .iter()
        .any(|(regex, _, numbered)| *numbered && regex.is_match(text))
}

/// Strip a leading bullet/number marker from a line, if present.
pub fn strip_bullet_marker(text: &str) -> &str {
    for (regex, _, _) in COMPILED_BULLET_RULES.iter() {
        if let Some(found) = regex.find(text) {
            if found.start() == 0 {
                return &text[found.end()..];
            }
        }
    }
    text
}

/// Heading-likelihood score of a line.
///
/// Rewards short length, a trailing colon, absence of sentence
/// punctuation, and position near the start of the document. A trailing
/// sentence terminator pushes the score back down. Bullet lines never
/// score as headings (the caller suppresses this for them).
pub fn heading_score(text: &str, index: usize) -> f32 {
    let trimmed = text.trim();
    let mut score: f32 = 0.0;

    if trimmed.len() <= 60 {
        score += 0.25;
    }
    if trimmed.len() <= 32 {
        score += 0.15;
    }
    if trimmed.ends_with(':') {
        score += 0.3;
    } else if !trimmed.contains(['.', '!', '?']) {
        score += 0.2;
    }
    if index == 0 {
        score += 0.1;
    } else if index < 3 {
        score += 0.05;
    }
    if is_upper_shouting(trimmed) {
        score += 0.2;
    }
    if trimmed.ends_with(['.', '!', '?']) {
        score -= 0.3;
    }

    score.clamp(0.0, 1.0)
}

/// Explicit heading-like patterns that bypass the scored threshold.
static EXPLICIT_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#{1,6}\s+\S").unwrap());

/// Whether the line matches an explicit heading pattern (markdown-style
/// hash prefix, or a short all-caps run).
pub fn is_explicit_heading(text: &str) -> bool {
    let trimmed = text.trim();
    EXPLICIT_HEADING.is_match(trimmed) || (trimmed.len() <= 50 && is_upper_shouting(trimmed))
}

/// Strip a markdown-style hash prefix from a heading line.
pub fn strip_heading_marker(text: &str) -> &str {
    if let Some(found) = EXPLICIT_HEADING.find(text.trim_start()) {
        let trimmed = text.trim_start();
        // Keep the first content character matched by \S
        return trimmed[found.start()..].trim_start_matches('#').trim_start();
    }
    text
}

fn is_upper_shouting(text: &str) -> bool {
    let letters: Vec<char> = text.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() >= 4 && letters.iter().all(|c| c.is_uppercase())
}

/// Score all eleven framework signals for one line of text.
pub fn score_frameworks(text: &str) -> FrameworkScores {
    let mut scores = FrameworkScores::default();
    for (signal, regex, weight) in COMPILED_FRAMEWORK_RULES.iter() {
        if regex.is_match(text) {
            scores.add(*signal, *weight);
        }
    }
    scores
}

/// Whether the line leads with a known section-opening phrase.
pub fn is_section_opener(text: &str) -> bool {
    let trimmed = text.trim_start();
    COMPILED_SECTION_OPENERS
        .iter()
        .any(|regex| regex.is_match(trimmed))
}

/// Whether a heading matches one of the major-section opening phrases
/// used by the structured-path grouper.
pub fn is_major_section_opener(text: &str) -> bool {
    let trimmed = text.trim_start();
    COMPILED_MAJOR_OPENERS
        .iter()
        .any(|regex| regex.is_match(trimmed))
}

/// Byte offsets of opener-phrase anchors inside a run of text, sorted
/// and deduplicated. Used by the keyword-anchored re-split.
pub fn anchor_offsets(text: &str) -> Vec<usize> {
    let mut offsets: Vec<usize> = COMPILED_RESPLIT_ANCHORS
        .iter()
        .flat_map(|regex| regex.find_iter(text).map(|found| found.start()))
        .collect();
    offsets.sort_unstable();
    offsets.dedup();
    offsets
}
