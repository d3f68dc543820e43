//! Idle Chatter — unprompted lines when the visitor goes quiet.

use super::dialogue::{sinister_hint, vulnerable_line};
use super::expression::Expression;
use rand::Rng;
use serde::Serialize;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "line")]
pub enum IdleLine {
    #[serde(rename = "sinister_hint")]
    SinisterHint(&'static str),
    #[serde(rename = "vulnerable")]
    Vulnerable(&'static str),
}

impl IdleLine {
    pub fn text(&self) -> &'static str {
        match self {
            IdleLine::SinisterHint(line) | IdleLine::Vulnerable(line) => line,
        }
    }
}

#[derive(Debug, Clone)]
pub struct IdleChatterConfig {
    /// Visitor must be quiet at least this long.
    pub min_idle_secs: u64,
    /// Minimum gap between two idle lines.
    pub cooldown: Duration,
    /// Chance per check once both gates are open.
    pub chance: f64,
}

impl Default for IdleChatterConfig {
    fn default() -> Self {
        Self {
            min_idle_secs: 20,
            cooldown: Duration::from_secs(30),
            chance: 0.35,
        }
    }
}

pub struct IdleChatter {
    config: IdleChatterConfig,
    last_line_ts: Option<Instant>,
}

impl IdleChatter {
    pub fn new(config: IdleChatterConfig) -> Self {
        Self {
            config,
            last_line_ts: None,
        }
    }

    pub fn decide<R: Rng + ?Sized>(
        &mut self,
        idle_secs: u64,
        previous: Option<Expression>,
        rng: &mut R,
    ) -> Option<IdleLine> {
        self.decide_at(idle_secs, previous, Instant::now(), rng)
    }

    /// Decide whether Flowey speaks up unprompted.
    ///
    /// After a sad or mad exchange Flowey leans toward playing the victim;
    /// otherwise toward dropping hints.
    pub fn decide_at<R: Rng + ?Sized>(
        &mut self,
        idle_secs: u64,
        previous: Option<Expression>,
        now: Instant,
        rng: &mut R,
    ) -> Option<IdleLine> {
        if idle_secs < self.config.min_idle_secs {
            return None;
        }
        if let Some(last) = self.last_line_ts {
            if now.saturating_duration_since(last) < self.config.cooldown {
                return None;
            }
        }
        if !rng.gen_bool(self.config.chance.clamp(0.0, 1.0)) {
            return None;
        }

        self.last_line_ts = Some(now);

        let vulnerable_odds = match previous {
            Some(Expression::Sad) | Some(Expression::Mad) => 0.7,
            _ => 0.3,
        };
        let line = if rng.gen_bool(vulnerable_odds) {
            IdleLine::Vulnerable(vulnerable_line(rng))
        } else {
            IdleLine::SinisterHint(sinister_hint(rng))
        };
        tracing::debug!("[IdleChatter] idle={}s -> {:?}", idle_secs, line);
        Some(line)
    }
}
