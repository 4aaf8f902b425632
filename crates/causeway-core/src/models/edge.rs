//! Structured identifier for an edge whose causal direction is not yet fixed.
//! Parsed once from the host's string encoding at selection time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GraphError;

/// Separator used by the host's string encoding ("A,B").
const ENCODING_SEPARATOR: char = ',';

/// An undirected edge between two named graph nodes.
///
/// Endpoint order is the host's presentation order, not a causal claim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct EdgeKey {
    left: String,
    right: String,
}

impl EdgeKey {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    /// First endpoint as listed by the host.
    pub fn left(&self) -> &str {
        &self.left
    }

    /// Second endpoint as listed by the host.
    pub fn right(&self) -> &str {
        &self.right
    }

    /// The host's selection encoding; inverse of `FromStr`.
    pub fn encoded(&self) -> String {
        format!("{}{}{}", self.left, ENCODING_SEPARATOR, self.right)
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.left, self.right)
    }
}

impl FromStr for EdgeKey {
    type Err = GraphError;

    /// Parse the host's "A,B" selection encoding.
    ///
    /// Anything that does not yield exactly two non-empty node identifiers is
    /// rejected outright.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || GraphError::MalformedEdgeSelection {
            input: s.to_string(),
        };
        let mut parts = s.split(ENCODING_SEPARATOR);
        let left = parts.next().map(str::trim).ok_or_else(malformed)?;
        let right = parts.next().map(str::trim).ok_or_else(malformed)?;
        if left.is_empty() || right.is_empty() || parts.next().is_some() {
            return Err(malformed());
        }
        Ok(Self::new(left, right))
    }
}

impl From<(String, String)> for EdgeKey {
    fn from((left, right): (String, String)) -> Self {
        Self { left, right }
    }
}

impl From<EdgeKey> for (String, String) {
    fn from(edge: EdgeKey) -> Self {
        (edge.left, edge.right)
    }
}

/// Direction chosen for a pending edge.
///
/// For an edge `(A, B)`, `Left` orients the arc `B -> A` and `Right` orients
/// `A -> B`, matching the arrow controls the host renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// The (source, target) pair this direction gives an edge.
    pub fn orient(self, edge: &EdgeKey) -> (&str, &str) {
        match self {
            Direction::Left => (edge.right(), edge.left()),
            Direction::Right => (edge.left(), edge.right()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_host_encoding() {
        let edge: EdgeKey = "A,B".parse().unwrap();
        assert_eq!(edge, EdgeKey::new("A", "B"));
        assert_eq!(edge.to_string(), "A - B");
    }

    #[test]
    fn trims_whitespace_around_identifiers() {
        let edge: EdgeKey = " X , Y ".parse().unwrap();
        assert_eq!(edge, EdgeKey::new("X", "Y"));
    }

    #[test]
    fn rejects_malformed_selections() {
        for raw in ["", "A", "A,", ",B", "A,B,C", " , "] {
            let err = raw.parse::<EdgeKey>().unwrap_err();
            assert!(matches!(err, GraphError::MalformedEdgeSelection { .. }), "{raw:?}");
        }
    }

    #[test]
    fn serializes_as_a_pair() {
        let edge = EdgeKey::new("A", "B");
        assert_eq!(
            serde_json::to_value(&edge).unwrap(),
            serde_json::json!(["A", "B"])
        );
    }
}
