//! Lexicon Sentiment Scoring — word-weight scoring of visitor text.
//!
//! The classifier only sees the [`LexiconScorer`] seam; [`AfinnScorer`] is the
//! stock implementation over the embedded [`Lexicon`]. The report helpers at
//! the bottom give a coarse connotation reading of a phrase without going
//! through the expression ladder.

use super::lexicon::Lexicon;
use serde::{Deserialize, Serialize};

/// Raw scorer output for one piece of text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentMetrics {
    /// Sum of the matched word weights.
    pub score: i32,
    /// `score` divided by the token count.
    pub comparative: f32,
    /// Tokens that contributed positively, in text order.
    #[serde(rename = "positive")]
    pub positive_words: Vec<String>,
    /// Tokens that contributed negatively, in text order.
    #[serde(rename = "negative")]
    pub negative_words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoreError {
    #[error("input has {count} tokens, limit is {max}")]
    TooManyTokens { count: usize, max: usize },
    #[error("scorer unavailable: {0}")]
    Unavailable(String),
}

/// Anything that can turn text into [`SentimentMetrics`].
pub trait LexiconScorer {
    fn score(&self, text: &str) -> Result<SentimentMetrics, ScoreError>;
}

impl<S: LexiconScorer + ?Sized> LexiconScorer for &S {
    fn score(&self, text: &str) -> Result<SentimentMetrics, ScoreError> {
        (**self).score(text)
    }
}

impl<S: LexiconScorer + ?Sized> LexiconScorer for Box<S> {
    fn score(&self, text: &str) -> Result<SentimentMetrics, ScoreError> {
        (**self).score(text)
    }
}

// ── AFINN-style scorer ─────────────────────────────────────

pub const DEFAULT_MAX_TOKENS: usize = 2000;

const SEPARATORS: &[char] = &[
    '.', ',', '/', '#', '!', '?', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '_', '`', '"',
    '~', '(', ')',
];

/// Lower-case, blank out punctuation, split on whitespace.
///
/// Apostrophes and hyphens survive so "don't" stays one token.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| if SEPARATORS.contains(&c) { ' ' } else { c })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone)]
pub struct AfinnScorer {
    lexicon: Lexicon,
    max_tokens: usize,
}

impl Default for AfinnScorer {
    fn default() -> Self {
        Self::new(Lexicon::default())
    }
}

impl AfinnScorer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

impl LexiconScorer for AfinnScorer {
    fn score(&self, text: &str) -> Result<SentimentMetrics, ScoreError> {
        let tokens = tokenize(text);
        if tokens.len() > self.max_tokens {
            return Err(ScoreError::TooManyTokens {
                count: tokens.len(),
                max: self.max_tokens,
            });
        }

        let mut metrics = SentimentMetrics::default();
        for (i, token) in tokens.iter().enumerate() {
            let Some(mut weight) = self.lexicon.weight(token) else {
                continue;
            };
            if i > 0 && Lexicon::is_negator(&tokens[i - 1]) {
                weight = -weight;
            }
            metrics.score += weight;
            if weight > 0 {
                metrics.positive_words.push(token.clone());
            } else if weight < 0 {
                metrics.negative_words.push(token.clone());
            }
        }

        if !tokens.is_empty() {
            metrics.comparative = metrics.score as f32 / tokens.len() as f32;
        }
        Ok(metrics)
    }
}

// ── Connotation report ─────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connotation {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

/// Metrics plus a coarse reading of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    #[serde(flatten)]
    pub metrics: SentimentMetrics,
    pub connotation: Connotation,
    pub confidence: ConfidenceLevel,
}

impl Default for SentimentReport {
    fn default() -> Self {
        Self {
            metrics: SentimentMetrics::default(),
            connotation: Connotation::Neutral,
            confidence: ConfidenceLevel::Low,
        }
    }
}

/// Strip surrounding whitespace and byte-order marks from visitor text.
pub fn trim_input(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Analyze a word or phrase. Blank input and scorer failures read as neutral.
pub fn analyze<S: LexiconScorer + ?Sized>(scorer: &S, text: &str) -> SentimentReport {
    let clean = trim_input(text);
    if clean.is_empty() {
        return SentimentReport::default();
    }

    let metrics = match scorer.score(clean) {
        Ok(m) => m,
        Err(e) => {
            tracing::warn!("[Sentiment] Scoring failed: {}", e);
            return SentimentReport::default();
        }
    };

    let connotation = match metrics.score {
        s if s > 0 => Connotation::Positive,
        s if s < 0 => Connotation::Negative,
        _ => Connotation::Neutral,
    };

    let strength = metrics.comparative.abs();
    let confidence = if strength >= 1.5 {
        ConfidenceLevel::High
    } else if strength >= 0.5 {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    };

    SentimentReport {
        metrics,
        connotation,
        confidence,
    }
}

pub fn connotation<S: LexiconScorer + ?Sized>(scorer: &S, text: &str) -> Connotation {
    analyze(scorer, text).connotation
}

pub fn analyze_batch<S, T>(scorer: &S, texts: &[T]) -> Vec<SentimentReport>
where
    S: LexiconScorer + ?Sized,
    T: AsRef<str>,
{
    texts.iter().map(|t| analyze(scorer, t.as_ref())).collect()
}

/// Human-readable label such as "slightly happy" or "very sad".
pub fn emotion_label<S: LexiconScorer + ?Sized>(scorer: &S, text: &str) -> &'static str {
    let report = analyze(scorer, text);
    match (report.connotation, report.confidence) {
        (Connotation::Positive, ConfidenceLevel::High) => "very happy",
        (Connotation::Positive, ConfidenceLevel::Medium) => "happy",
        (Connotation::Positive, ConfidenceLevel::Low) => "slightly happy",
        (Connotation::Negative, ConfidenceLevel::High) => "very sad",
        (Connotation::Negative, ConfidenceLevel::Medium) => "sad",
        (Connotation::Negative, ConfidenceLevel::Low) => "slightly sad",
        (Connotation::Neutral, _) => "neutral",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> AfinnScorer {
        AfinnScorer::default()
    }

    #[test]
    fn tokenize_strips_punctuation_keeps_apostrophes() {
        assert_eq!(
            tokenize("  Don't STOP, friend-ish!! (ok)"),
            vec!["don't", "stop", "friend-ish", "ok"]
        );
        assert!(tokenize("?!...").is_empty());
    }

    #[test]
    fn positive_sentence_scores_positive() {
        let m = scorer().score("What a wonderful, amazing day!").unwrap();
        assert_eq!(m.score, 8);
        assert!((m.comparative - 1.6).abs() < 1e-6);
        assert_eq!(m.positive_words, vec!["wonderful", "amazing"]);
        assert!(m.negative_words.is_empty());
    }

    #[test]
    fn negative_words_collected_in_order() {
        let m = scorer().score("You are ugly and rude and boring").unwrap();
        assert_eq!(m.score, -8);
        assert_eq!(m.negative_words, vec!["ugly", "rude", "boring"]);
    }

    #[test]
    fn negator_flips_following_word() {
        let m = scorer().score("not good").unwrap();
        assert_eq!(m.score, -3);
        assert_eq!(m.negative_words, vec!["good"]);

        let m = scorer().score("that is not bad at all").unwrap();
        assert_eq!(m.score, 3);
        assert_eq!(m.positive_words, vec!["bad"]);
    }

    #[test]
    fn unknown_words_score_zero() {
        let m = scorer().score("The weather is cloudy").unwrap();
        assert_eq!(m, SentimentMetrics::default());
    }

    #[test]
    fn comparative_is_score_over_tokens() {
        let m = scorer().score("a b c d e f g h i j good").unwrap();
        assert_eq!(m.score, 3);
        assert!((m.comparative - 3.0 / 11.0).abs() < 1e-6);
    }

    #[test]
    fn punctuation_only_has_zero_comparative() {
        let m = scorer().score("!!!").unwrap();
        assert_eq!(m.score, 0);
        assert_eq!(m.comparative, 0.0);
    }

    #[test]
    fn token_limit_is_enforced() {
        let s = scorer().with_max_tokens(3);
        let err = s.score("one two three four").unwrap_err();
        assert_eq!(err, ScoreError::TooManyTokens { count: 4, max: 3 });
    }

    #[test]
    fn metrics_serialize_with_short_field_names() {
        let m = scorer().score("good").unwrap();
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["positive"][0], "good");
        assert!(v.get("positive_words").is_none());
    }

    #[test]
    fn report_levels() {
        let s = scorer();
        let r = analyze(&s, "nice");
        assert_eq!(r.connotation, Connotation::Positive);
        assert_eq!(r.confidence, ConfidenceLevel::High);

        let r = analyze(&s, "I like cheese");
        assert_eq!(r.confidence, ConfidenceLevel::Medium);

        let r = analyze(&s, "I am a bit sad");
        assert_eq!(r.connotation, Connotation::Negative);
        assert_eq!(r.confidence, ConfidenceLevel::Low);
    }

    #[test]
    fn blank_report_is_neutral_low() {
        let r = analyze(&scorer(), "   ");
        assert_eq!(r, SentimentReport::default());
    }

    #[test]
    fn failing_scorer_reads_as_neutral() {
        let s = scorer().with_max_tokens(0);
        assert_eq!(connotation(&s, "good"), Connotation::Neutral);
    }

    #[test]
    fn labels_cover_polarities() {
        let s = scorer();
        assert_eq!(emotion_label(&s, "nice"), "very happy");
        assert_eq!(emotion_label(&s, "I like cheese"), "happy");
        assert_eq!(emotion_label(&s, "a b c d e f g h i j good"), "slightly happy");
        assert_eq!(emotion_label(&s, "This is bad"), "sad");
        assert_eq!(emotion_label(&s, "The weather is cloudy"), "neutral");
    }

    #[test]
    fn batch_preserves_order() {
        let reports = analyze_batch(&scorer(), &["good", "bad", ""]);
        let tones: Vec<_> = reports.iter().map(|r| r.connotation).collect();
        assert_eq!(
            tones,
            vec![Connotation::Positive, Connotation::Negative, Connotation::Neutral]
        );
    }
}
