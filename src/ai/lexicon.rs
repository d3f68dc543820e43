//! Word-weight lexicon backing the default sentiment scorer.
//!
//! Weights follow the AFINN convention: integers in `-5..=5`, where the
//! sign carries polarity and the magnitude carries strength. The embedded
//! table is deliberately small; a JSON file of `{ "word": weight }` pairs can
//! be layered over it at startup.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const MIN_WEIGHT: i32 = -5;
pub const MAX_WEIGHT: i32 = 5;

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("failed to read lexicon file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse lexicon: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("weight {weight} for '{word}' is outside -5..=5")]
    WeightOutOfRange { word: String, weight: i32 },
}

// ── Word tables ────────────────────────────────────────────

const POSITIVE_WORDS: &[(&str, i32)] = &[
    ("abundant", 1), ("accept", 1), ("accepted", 1), ("admire", 3), ("adorable", 3),
    ("adore", 3), ("agree", 1), ("alive", 1), ("amazed", 2), ("amazing", 4), ("amuse", 3),
    ("amused", 3), ("appreciate", 2), ("appreciated", 2), ("awesome", 4), ("beautiful", 3),
    ("best", 3), ("better", 2), ("bless", 2), ("blessed", 3), ("bliss", 3), ("brave", 2),
    ("breathtaking", 5), ("bright", 1), ("brilliant", 4), ("calm", 2), ("care", 2),
    ("charming", 3), ("cheer", 2), ("cheerful", 2), ("clean", 2), ("clever", 2), ("comfort", 2),
    ("cool", 1), ("cute", 2), ("delight", 3), ("delighted", 3), ("easy", 1), ("enjoy", 2),
    ("excellent", 3), ("excited", 3), ("exciting", 3), ("fabulous", 4), ("fair", 2),
    ("fantastic", 4), ("fine", 2), ("flower", 1), ("free", 1), ("fresh", 1), ("fun", 4),
    ("funny", 4), ("generous", 2), ("gentle", 2), ("glad", 3), ("glorious", 2), ("good", 3),
    ("gorgeous", 3), ("grand", 3), ("grateful", 3), ("great", 3), ("greetings", 1),
    ("happiness", 3), ("happy", 3), ("harmony", 2), ("heaven", 2), ("help", 2), ("helpful", 2),
    ("hero", 2), ("honest", 2), ("hope", 2), ("hopeful", 2), ("hug", 2), ("hugs", 2),
    ("humor", 2), ("interesting", 2), ("joy", 3), ("joyful", 3), ("kind", 2), ("kindness", 2),
    ("laugh", 1), ("like", 2), ("liked", 2), ("lucky", 3), ("magnificent", 3), ("marvelous", 3),
    ("nice", 3), ("ok", 2), ("okay", 2), ("outstanding", 5), ("peace", 2), ("peaceful", 2),
    ("perfect", 3), ("pleasant", 3), ("please", 1), ("pleased", 3), ("polite", 2),
    ("positive", 2), ("pretty", 1), ("proud", 2), ("relaxed", 2), ("respect", 2), ("safe", 1),
    ("smart", 1), ("smile", 2), ("smiles", 2), ("smiling", 2), ("special", 2), ("splendid", 3),
    ("sunshine", 2), ("super", 3), ("superb", 5), ("support", 2), ("sure", 1), ("sweet", 2),
    ("thank", 2), ("thanks", 2), ("thoughtful", 2), ("thrilled", 5), ("tremendous", 3),
    ("warm", 1), ("welcome", 2), ("win", 4), ("wonderful", 4), ("wow", 4), ("yay", 3),
    ("yes", 1), ("yummy", 3),
];

const NEGATIVE_WORDS: &[(&str, i32)] = &[
    ("abandon", -2), ("abandoned", -2), ("afraid", -2), ("alone", -2), ("anger", -3),
    ("angry", -3), ("annoy", -2), ("annoyed", -2), ("annoying", -2), ("annoys", -2),
    ("anxious", -2), ("ashamed", -2), ("awful", -3), ("bad", -3), ("bastard", -5),
    ("bitter", -2), ("bored", -2), ("boring", -3), ("broken", -1), ("bully", -2),
    ("catastrophic", -4), ("cold", -1), ("complain", -2), ("confused", -2), ("cruel", -3),
    ("cry", -1), ("crying", -2), ("damn", -4), ("disappointed", -2), ("disappointing", -2),
    ("disaster", -2), ("disgust", -3), ("disgusting", -3), ("dislike", -2), ("dumb", -3),
    ("empty", -1), ("fail", -2), ("failure", -2), ("fake", -3), ("fear", -2), ("fool", -2),
    ("foolish", -2), ("frustrated", -2), ("garbage", -1), ("gloomy", -2), ("greedy", -2),
    ("grief", -2), ("gross", -2), ("guilty", -3), ("hopeless", -2), ("hopelessly", -2),
    ("horrible", -3), ("jealous", -2), ("jerk", -3), ("lame", -2), ("liar", -3), ("lonely", -2),
    ("lose", -3), ("loser", -3), ("lost", -3), ("lousy", -2), ("mad", -3), ("mean", -1),
    ("mess", -2), ("miserable", -3), ("miss", -2), ("moron", -3), ("nasty", -3), ("no", -1),
    ("pathetic", -2), ("poor", -2), ("rotten", -3), ("rude", -2), ("sad", -2), ("scared", -2),
    ("selfish", -3), ("shame", -2), ("shut", -2), ("sick", -2), ("sorry", -1), ("sucks", -3),
    ("terrible", -3), ("tired", -2), ("trash", -2), ("ugly", -3), ("unhappy", -2),
    ("upset", -2), ("useless", -2), ("weak", -2), ("weird", -2), ("worried", -3), ("worse", -3),
    ("worst", -3), ("worthless", -2), ("wrong", -2), ("yuck", -2),
];

/// Tokens that flip the polarity of the word right after them.
const NEGATORS: &[&str] = &[
    "don't", "dont", "not", "no", "never", "isn't", "isnt", "aren't", "arent", "wasn't", "wasnt",
    "can't", "cant", "won't", "wont", "doesn't", "doesnt", "didn't", "didnt", "shouldn't",
    "wouldn't", "couldn't", "without", "nor", "neither",
];

// ── Lexicon ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    weights: HashMap<String, i32>,
}

impl Default for Lexicon {
    fn default() -> Self {
        let weights = POSITIVE_WORDS
            .iter()
            .chain(NEGATIVE_WORDS.iter())
            .map(|(word, weight)| (word.to_string(), *weight))
            .collect();
        Self { weights }
    }
}

impl Lexicon {
    /// Weight of a lower-cased token, if the lexicon knows it.
    pub fn weight(&self, token: &str) -> Option<i32> {
        self.weights.get(token).copied()
    }

    pub fn is_negator(token: &str) -> bool {
        NEGATORS.contains(&token)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Insert or replace a word. Keys are stored lower-cased.
    pub fn insert(&mut self, word: &str, weight: i32) -> Result<(), LexiconError> {
        if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&weight) {
            return Err(LexiconError::WeightOutOfRange {
                word: word.to_string(),
                weight,
            });
        }
        self.weights.insert(word.trim().to_lowercase(), weight);
        Ok(())
    }

    /// Merge `{ "word": weight }` pairs over this lexicon. All or nothing:
    /// a single bad weight leaves the lexicon untouched.
    pub fn merge_json(&mut self, json: &str) -> Result<usize, LexiconError> {
        let overrides: HashMap<String, i32> = serde_json::from_str(json)?;
        let mut merged = self.clone();
        for (word, weight) in &overrides {
            merged.insert(word, *weight)?;
        }
        *self = merged;
        Ok(overrides.len())
    }

    /// The default table with a JSON override file layered on top.
    pub fn load_overrides(path: &Path) -> Result<Self, LexiconError> {
        let json = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let mut lexicon = Self::default();
        let count = lexicon.merge_json(&json)?;
        tracing::info!(
            "[Lexicon] Merged {} override(s) from {}",
            count,
            path.display()
        );
        Ok(lexicon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_table_has_both_polarities() {
        let lex = Lexicon::default();
        assert_eq!(lex.weight("good"), Some(3));
        assert_eq!(lex.weight("bad"), Some(-3));
        assert_eq!(lex.weight("cloudy"), None);
        assert!(!lex.is_empty());
    }

    #[test]
    fn default_weights_stay_in_range() {
        for (word, weight) in POSITIVE_WORDS.iter().chain(NEGATIVE_WORDS.iter()) {
            assert!(
                (MIN_WEIGHT..=MAX_WEIGHT).contains(weight) && *weight != 0,
                "bad weight for {}",
                word
            );
        }
    }

    #[test]
    fn merge_overrides_and_lowercases() {
        let mut lex = Lexicon::default();
        let n = lex.merge_json(r#"{"Cloudy": -1, "good": 1}"#).unwrap();
        assert_eq!(n, 2);
        assert_eq!(lex.weight("cloudy"), Some(-1));
        assert_eq!(lex.weight("good"), Some(1));
    }

    #[test]
    fn out_of_range_weight_is_rejected() {
        let mut lex = Lexicon::default();
        let err = lex.merge_json(r#"{"sublime": 9}"#).unwrap_err();
        assert!(matches!(err, LexiconError::WeightOutOfRange { weight: 9, .. }));
    }

    #[test]
    fn rejected_merge_leaves_lexicon_unchanged() {
        let json = r#"{"good": -5, "sublime": 9, "petal": 1, "thorn": -1, "dew": 1}"#;
        for _ in 0..20 {
            let mut lex = Lexicon::default();
            let before = lex.len();
            assert!(lex.merge_json(json).is_err());
            assert_eq!(lex.len(), before);
            assert_eq!(lex.weight("good"), Some(3));
            assert_eq!(lex.weight("petal"), None);
            assert_eq!(lex.weight("sublime"), None);
        }
    }

    #[test]
    fn load_overrides_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"petal": 2}}"#).unwrap();
        let lex = Lexicon::load_overrides(file.path()).unwrap();
        assert_eq!(lex.weight("petal"), Some(2));
        assert_eq!(lex.weight("good"), Some(3));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Lexicon::load_overrides(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, LexiconError::Io { .. }));
    }

    #[test]
    fn negators_are_recognized() {
        assert!(Lexicon::is_negator("not"));
        assert!(Lexicon::is_negator("don't"));
        assert!(!Lexicon::is_negator("good"));
    }
}
