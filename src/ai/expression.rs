//! The five faces Flowey can show.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expression {
    #[default]
    Neutral,
    Happy,
    Sad,
    Mad,
    Jumpscare,
}

impl Expression {
    pub const ALL: [Expression; 5] = [
        Expression::Neutral,
        Expression::Happy,
        Expression::Sad,
        Expression::Mad,
        Expression::Jumpscare,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Expression::Neutral => "neutral",
            Expression::Happy => "happy",
            Expression::Sad => "sad",
            Expression::Mad => "mad",
            Expression::Jumpscare => "jumpscare",
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown expression: {0}")]
pub struct UnknownExpression(pub String);

impl FromStr for Expression {
    type Err = UnknownExpression;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expression::ALL
            .iter()
            .copied()
            .find(|e| e.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownExpression(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for e in Expression::ALL {
            assert_eq!(e.as_str().parse::<Expression>().unwrap(), e);
        }
        assert_eq!(" HAPPY ".parse::<Expression>().unwrap(), Expression::Happy);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "smug".parse::<Expression>().unwrap_err();
        assert_eq!(err, UnknownExpression("smug".to_string()));
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Expression::Jumpscare).unwrap();
        assert_eq!(json, "\"jumpscare\"");
    }
}
