//! Expression Classifier — maps visitor text to one of Flowey's faces.
//!
//! Decision order is fixed: blank input, then the trigger-word override,
//! then the score ladder. The first rule that matches wins.

use super::expression::Expression;
use super::sentiment::{trim_input, AfinnScorer, LexiconScorer, SentimentMetrics};
use serde::{Deserialize, Serialize};

/// Outcome of classifying one piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub expression: Expression,
    /// Always within `0.0..=1.0`.
    pub confidence: f32,
    pub reasoning: String,
    pub sentiment: SentimentMetrics,
}

impl Verdict {
    fn blank(reasoning: &str) -> Self {
        Self {
            expression: Expression::Neutral,
            confidence: 0.0,
            reasoning: reasoning.to_string(),
            sentiment: SentimentMetrics::default(),
        }
    }
}

// ── Trigger words ──────────────────────────────────────────

/// Substrings that force a jumpscare no matter what else the text says.
/// Matching is plain containment, so "hello" trips "hell".
pub const JUMPSCARE_TRIGGERS: &[&str] = &[
    "kill",
    "murder",
    "death",
    "die",
    "hurt",
    "pain",
    "violence",
    "destroy",
    "hate",
    "evil",
    "dark",
    "scary",
    "nightmare",
    "demon",
    "devil",
    "hell",
    "blood",
    "knife",
    "gun",
    "weapon",
    "fight",
    "attack",
    "revenge",
    "betray",
    "trust",
    "friend",
    "love",
    "save",
    "reset",
    "determination",
    "soul",
    "power",
    "control",
    "manipulate",
    "naive",
    "stupid",
    "idiot",
    "skibidi",
    "zlog",
];

pub const JUMPSCARE_SCORE: i32 = -10;
pub const JUMPSCARE_COMPARATIVE: f32 = -2.0;

pub const REASON_EMPTY: &str = "no text provided";
pub const REASON_SCORER_FAILED: &str = "sentiment scorer failed - treating as no text";
pub const REASON_JUMPSCARE: &str =
    "Detected violent or dark language that triggers Flowey's evil side";
pub const REASON_VERY_POSITIVE: &str = "Very positive sentiment detected - Flowey is pleased";
pub const REASON_POSITIVE: &str = "Positive sentiment detected - Flowey is somewhat pleased";
pub const REASON_VERY_NEGATIVE: &str =
    "Very negative sentiment detected - Flowey is angry and frustrated";
pub const REASON_NEGATIVE: &str = "Negative sentiment detected - Flowey is sad and disappointed";
pub const REASON_MILD_NEGATIVE: &str =
    "Mildly negative sentiment detected - Flowey is somewhat displeased";
pub const REASON_NEUTRAL: &str = "Neutral sentiment - Flowey remains unchanged";

/// Every trigger contained in `lowered`, in table order.
pub fn matched_triggers(lowered: &str) -> Vec<&'static str> {
    JUMPSCARE_TRIGGERS
        .iter()
        .copied()
        .filter(|trigger| lowered.contains(*trigger))
        .collect()
}

/// `min(|comparative| / 2, cap)`, kept inside `0.0..=1.0`. Non-finite input gives 0.
fn scaled_confidence(comparative: f32, cap: f32) -> f32 {
    if !comparative.is_finite() {
        return 0.0;
    }
    (comparative.abs() / 2.0).min(cap).clamp(0.0, 1.0)
}

/// Pick expression, confidence and reasoning from scorer metrics.
///
/// Bands: `> 2` very positive, `1..=2` positive, `< -3` very negative,
/// `-3..=-2` negative, `-1` mildly negative, `0` neutral.
pub fn ladder(metrics: &SentimentMetrics) -> (Expression, f32, &'static str) {
    let c = metrics.comparative;
    match metrics.score {
        s if s > 2 => (Expression::Happy, scaled_confidence(c, 1.0), REASON_VERY_POSITIVE),
        s if s > 0 => (Expression::Happy, scaled_confidence(c, 0.8), REASON_POSITIVE),
        s if s < -3 => (Expression::Mad, scaled_confidence(c, 1.0), REASON_VERY_NEGATIVE),
        s if s < -1 => (Expression::Sad, scaled_confidence(c, 0.9), REASON_NEGATIVE),
        s if s < 0 => (Expression::Sad, scaled_confidence(c, 0.8), REASON_MILD_NEGATIVE),
        _ => (Expression::Neutral, 0.5, REASON_NEUTRAL),
    }
}

// ── Classifier ─────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct Classifier<S = AfinnScorer> {
    scorer: S,
}

impl<S: LexiconScorer> Classifier<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Classify free text. Never fails; scorer errors come back as a
    /// zero-confidence neutral verdict.
    pub fn classify(&self, text: &str) -> Verdict {
        let clean = trim_input(text);
        if clean.is_empty() {
            return Verdict::blank(REASON_EMPTY);
        }

        let lowered = clean.to_lowercase();
        let triggers = matched_triggers(&lowered);
        if !triggers.is_empty() {
            tracing::debug!("[Classifier] Trigger words {:?} -> jumpscare", triggers);
            return Verdict {
                expression: Expression::Jumpscare,
                confidence: 1.0,
                reasoning: REASON_JUMPSCARE.to_string(),
                sentiment: SentimentMetrics {
                    score: JUMPSCARE_SCORE,
                    comparative: JUMPSCARE_COMPARATIVE,
                    positive_words: Vec::new(),
                    negative_words: triggers.into_iter().map(str::to_string).collect(),
                },
            };
        }

        let metrics = match self.scorer.score(clean) {
            Ok(m) => m,
            Err(e) => {
                tracing::warn!("[Classifier] Scorer failed, falling back to neutral: {}", e);
                return Verdict::blank(REASON_SCORER_FAILED);
            }
        };

        let (expression, confidence, reasoning) = ladder(&metrics);
        tracing::debug!(
            "[Classifier] score={} comparative={:.3} -> {} ({:.2})",
            metrics.score,
            metrics.comparative,
            expression,
            confidence
        );

        Verdict {
            expression,
            confidence,
            reasoning: reasoning.to_string(),
            sentiment: metrics,
        }
    }
}

/// Classify with the stock lexicon scorer.
pub fn classify(text: &str) -> Verdict {
    Classifier::new(AfinnScorer::default()).classify(text)
}
