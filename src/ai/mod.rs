pub mod classifier;
pub mod dialogue;
pub mod expression;
pub mod heartbeat;
pub mod idle_chatter;
pub mod lexicon;
pub mod sentiment;
pub mod session;


pub use classifier::{classify, Classifier, Verdict};
pub use dialogue::{DialogueSelector, FollowUp};
pub use expression::Expression;
pub use sentiment::{AfinnScorer, LexiconScorer, ScoreError, SentimentMetrics};
pub use session::{FloweySession, Reply, SubmitError};
