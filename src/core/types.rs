// src/core/types.rs
use crate::error::ConverseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A correspondence between a "standard" term (`a`) and a "dialect" term (`b`).
/// On disk this is a two-element array: `["captain", "cap'n"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Pair {
    pub a: String,
    pub b: String,
}

impl Pair {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self { a: a.into(), b: b.into() }
    }
}

impl From<(String, String)> for Pair {
    fn from((a, b): (String, String)) -> Self {
        Self { a, b }
    }
}

impl From<Pair> for (String, String) {
    fn from(pair: Pair) -> Self {
        (pair.a, pair.b)
    }
}

/// Granularity class of a pair. Earlier tiers always win over later ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Phrases,
    Words,
    Characters,
}

impl Tier {
    /// Matching order.
    pub const PRIORITY: [Tier; 3] = [Tier::Phrases, Tier::Words, Tier::Characters];

    pub fn name(self) -> &'static str {
        match self {
            Tier::Phrases => "phrases",
            Tier::Words => "words",
            Tier::Characters => "characters",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Tier::Phrases => 0,
            Tier::Words => 1,
            Tier::Characters => 2,
        }
    }
}

/// Which side of a pair is the source of a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// `a` -> `b`, token `"ab"`.
    #[default]
    AToB,
    /// `b` -> `a`, token `"ba"`.
    BToA,
}

impl Direction {
    pub fn token(self) -> &'static str {
        match self {
            Direction::AToB => "ab",
            Direction::BToA => "ba",
        }
    }

    /// Splits a pair into `(key, value)` for this direction.
    pub fn orient(self, pair: &Pair) -> (&str, &str) {
        match self {
            Direction::AToB => (&pair.a, &pair.b),
            Direction::BToA => (&pair.b, &pair.a),
        }
    }
}

impl FromStr for Direction {
    type Err = ConverseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ab" => Ok(Direction::AToB),
            "ba" => Ok(Direction::BToA),
            other => Err(ConverseError::invalid_direction(other)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
