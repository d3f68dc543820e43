use crate::ai::classifier::Verdict;
use crate::ai::expression::Expression;
use crate::ai::sentiment::{LexiconScorer, SentimentMetrics};
use crate::ai::session::{FloweySession, SubmitError};
use serde::Serialize;
use std::time::Instant;

pub const CHARACTER_NAME: &str = "Flowey";

#[derive(Debug, Serialize)]
pub struct CharacterState {
    pub name: String,
    pub current_expression: Expression,
    /// Opening line, present until the first message is accepted.
    pub prompt: Option<String>,
    pub is_holding: bool,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub text: String,
    pub expression: Expression,
    pub confidence: f32,
    pub reasoning: String,
    pub sentiment: SentimentMetrics,
    /// Milliseconds to keep a jumpscare on screen, if any.
    pub hold_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("Message cannot be empty")]
    EmptyMessage,
    #[error("Busy: {0}")]
    Busy(String),
}

impl From<SubmitError> for CommandError {
    fn from(e: SubmitError) -> Self {
        match e {
            SubmitError::EmptyInput => CommandError::EmptyMessage,
            held @ SubmitError::JumpscareActive { .. } => CommandError::Busy(held.to_string()),
        }
    }
}

/// Returns the current character state for the front end.
pub fn get_character_state<S: LexiconScorer>(session: &FloweySession<S>) -> CharacterState {
    CharacterState {
        name: CHARACTER_NAME.to_string(),
        current_expression: session.current_expression(),
        prompt: session.prompt_line().map(str::to_string),
        is_holding: session.is_holding(Instant::now()),
    }
}

/// Sends a visitor message and returns Flowey's reaction.
pub fn send_message<S: LexiconScorer>(
    session: &mut FloweySession<S>,
    message: &str,
) -> Result<ChatResponse, CommandError> {
    let reply = session.submit(message)?;
    let Verdict {
        expression,
        confidence,
        reasoning,
        sentiment,
    } = reply.verdict;

    Ok(ChatResponse {
        text: reply.dialogue.to_string(),
        expression,
        confidence,
        reasoning,
        sentiment,
        hold_ms: reply.hold.map(|d| d.as_millis() as u64),
    })
}

/// Score breakdown shown under a reply.
pub fn render_debug(verdict: &Verdict) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Expression: {} ({}% confidence)",
            verdict.expression,
            (verdict.confidence * 100.0).round() as u32
        ),
        format!("Sentiment Score: {}", verdict.sentiment.score),
    ];
    if !verdict.sentiment.positive_words.is_empty() {
        lines.push(format!(
            "Positive words: {}",
            verdict.sentiment.positive_words.join(", ")
        ));
    }
    if !verdict.sentiment.negative_words.is_empty() {
        lines.push(format!(
            "Negative words: {}",
            verdict.sentiment.negative_words.join(", ")
        ));
    }
    lines
}
