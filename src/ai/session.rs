//! Visitor Session — the caller-side state around the classifier.
//!
//! Holds what the core deliberately does not: the previous expression used
//! for follow-up lines, whether anything has been submitted yet, and the
//! window during which a jumpscare stays on screen and input is refused.

use super::classifier::{Classifier, Verdict};
use super::dialogue::{DialogueSelector, OPENING_LINE};
use super::expression::Expression;
use super::sentiment::{trim_input, AfinnScorer, LexiconScorer};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

pub const DEFAULT_JUMPSCARE_HOLD: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error("message is empty")]
    EmptyInput,
    #[error("Flowey is still glaring at you ({remaining_ms} ms left)")]
    JumpscareActive { remaining_ms: u64 },
}

/// What Flowey says back to one accepted submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub verdict: Verdict,
    pub dialogue: &'static str,
    /// Set when the reply is a jumpscare the caller should hold on screen.
    pub hold: Option<Duration>,
}

pub struct FloweySession<S = AfinnScorer> {
    classifier: Classifier<S>,
    selector: DialogueSelector,
    rng: StdRng,
    follow_ups: bool,
    jumpscare_hold: Duration,
    previous: Option<Expression>,
    last_verdict: Option<Verdict>,
    hold_until: Option<Instant>,
    last_activity: Instant,
}

impl FloweySession<AfinnScorer> {
    pub fn new() -> Self {
        Self::with_classifier(Classifier::new(AfinnScorer::default()))
    }
}

impl Default for FloweySession<AfinnScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: LexiconScorer> FloweySession<S> {
    pub fn with_classifier(classifier: Classifier<S>) -> Self {
        Self {
            classifier,
            selector: DialogueSelector::default(),
            rng: StdRng::from_entropy(),
            follow_ups: true,
            jumpscare_hold: DEFAULT_JUMPSCARE_HOLD,
            previous: None,
            last_verdict: None,
            hold_until: None,
            last_activity: Instant::now(),
        }
    }

    pub fn selector(mut self, selector: DialogueSelector) -> Self {
        self.selector = selector;
        self
    }

    pub fn follow_ups(mut self, enabled: bool) -> Self {
        self.follow_ups = enabled;
        self
    }

    pub fn jumpscare_hold(mut self, hold: Duration) -> Self {
        self.jumpscare_hold = hold;
        self
    }

    /// Fix the RNG seed so dialogue picks are reproducible.
    pub fn seeded(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn submit(&mut self, text: &str) -> Result<Reply, SubmitError> {
        self.submit_at(text, Instant::now())
    }

    /// Classify a submission as of `now` and pick Flowey's line.
    pub fn submit_at(&mut self, text: &str, now: Instant) -> Result<Reply, SubmitError> {
        if let Some(remaining) = self.hold_remaining(now) {
            return Err(SubmitError::JumpscareActive {
                remaining_ms: remaining.as_millis() as u64,
            });
        }
        if trim_input(text).is_empty() {
            return Err(SubmitError::EmptyInput);
        }

        let verdict = self.classifier.classify(text);
        let dialogue = match self.previous {
            Some(previous) if self.follow_ups => {
                self.selector
                    .select_follow_up(previous, &verdict, &mut self.rng)
            }
            _ => self.selector.select_dialogue(&verdict, &mut self.rng),
        };

        let hold = (verdict.expression == Expression::Jumpscare).then_some(self.jumpscare_hold);
        self.hold_until = hold.map(|h| now + h);
        self.previous = Some(verdict.expression);
        self.last_verdict = Some(verdict.clone());
        self.last_activity = now;

        tracing::info!(
            "[Session] {} ({:.0}%) -> {}",
            verdict.expression,
            verdict.confidence * 100.0,
            dialogue
        );

        Ok(Reply {
            verdict,
            dialogue,
            hold,
        })
    }

    fn hold_remaining(&self, now: Instant) -> Option<Duration> {
        self.hold_until
            .and_then(|until| until.checked_duration_since(now))
            .filter(|d| !d.is_zero())
    }

    pub fn is_holding(&self, now: Instant) -> bool {
        self.hold_remaining(now).is_some()
    }

    /// Expression to display right now.
    pub fn current_expression(&self) -> Expression {
        self.previous.unwrap_or_default()
    }

    pub fn previous_expression(&self) -> Option<Expression> {
        self.previous
    }

    pub fn last_verdict(&self) -> Option<&Verdict> {
        self.last_verdict.as_ref()
    }

    pub fn has_submitted(&self) -> bool {
        self.last_verdict.is_some()
    }

    /// The opening line until something is submitted.
    pub fn prompt_line(&self) -> Option<&'static str> {
        (!self.has_submitted()).then_some(OPENING_LINE)
    }

    pub fn last_activity(&self) -> Instant {
        self.last_activity
    }

    pub fn idle_seconds(&self, now: Instant) -> u64 {
        now.saturating_duration_since(self.last_activity).as_secs()
    }

    /// Mark the visitor as active without submitting (e.g. typing).
    pub fn touch(&mut self, now: Instant) {
        self.last_activity = now;
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::dialogue::{BETRAYAL, JUMPSCARE_LINES, NEUTRAL_LINES, TRUST_BUILDING};

    fn session() -> FloweySession {
        FloweySession::new().seeded(3)
    }

    #[test]
    fn opening_line_until_first_submission() {
        let mut s = session();
        assert_eq!(s.prompt_line(), Some(OPENING_LINE));
        assert_eq!(s.current_expression(), Expression::Neutral);
        s.submit("The weather is cloudy").unwrap();
        assert_eq!(s.prompt_line(), None);
        assert!(s.has_submitted());
    }

    #[test]
    fn blank_submission_is_ignored() {
        let mut s = session();
        assert_eq!(s.submit("   ").unwrap_err(), SubmitError::EmptyInput);
        assert_eq!(s.submit("\u{feff}").unwrap_err(), SubmitError::EmptyInput);
        assert!(!s.has_submitted());
        assert_eq!(s.previous_expression(), None);
    }

    #[test]
    fn first_reply_uses_plain_pool() {
        let mut s = session();
        let reply = s.submit("The weather is cloudy").unwrap();
        assert_eq!(reply.verdict.expression, Expression::Neutral);
        assert!(NEUTRAL_LINES.contains(&reply.dialogue));
        assert_eq!(reply.hold, None);
    }

    #[test]
    fn second_reply_uses_follow_up() {
        let mut s = session();
        s.submit("This is good").unwrap();
        let reply = s.submit("I am bored").unwrap();
        assert_eq!(reply.verdict.expression, Expression::Sad);
        assert!(BETRAYAL.contains(&reply.dialogue));

        let mut s = session();
        s.submit("nice").unwrap();
        let reply = s.submit("This is great").unwrap();
        assert!(TRUST_BUILDING.contains(&reply.dialogue));
    }

    #[test]
    fn follow_ups_can_be_disabled() {
        let mut s = session().follow_ups(false);
        s.submit("This is good").unwrap();
        let reply = s.submit("I am bored").unwrap();
        assert!(!BETRAYAL.contains(&reply.dialogue));
    }

    #[test]
    fn jumpscare_holds_then_releases() {
        let mut s = session().jumpscare_hold(Duration::from_millis(3000));
        let t0 = Instant::now();
        let reply = s.submit_at("zlog", t0).unwrap();
        assert_eq!(reply.verdict.expression, Expression::Jumpscare);
        assert!(JUMPSCARE_LINES.contains(&reply.dialogue));
        assert_eq!(reply.hold, Some(Duration::from_millis(3000)));

        let during = t0 + Duration::from_millis(1000);
        assert!(s.is_holding(during));
        match s.submit_at("This is good", during) {
            Err(SubmitError::JumpscareActive { remaining_ms }) => assert_eq!(remaining_ms, 2000),
            other => panic!("expected hold, got {:?}", other),
        }
        assert_eq!(s.current_expression(), Expression::Jumpscare);

        let after = t0 + Duration::from_millis(3000);
        assert!(!s.is_holding(after));
        let reply = s.submit_at("This is good", after).unwrap();
        assert_eq!(reply.verdict.expression, Expression::Happy);
    }

    #[test]
    fn idle_seconds_track_last_submission() {
        let mut s = session();
        let t0 = Instant::now();
        s.submit_at("hmm", t0).unwrap();
        assert_eq!(s.idle_seconds(t0 + Duration::from_secs(42)), 42);
        s.touch(t0 + Duration::from_secs(50));
        assert_eq!(s.idle_seconds(t0 + Duration::from_secs(52)), 2);
    }
}
