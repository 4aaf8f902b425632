//! Per-variable maximum state values, fetched once from the remote service
//! and used as input-validation upper bounds.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Upper bound for one variable's encoded state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Known(f64),
    /// The bounds fetch failed or never covered this variable.
    Unknown,
}

/// Outcome of checking a candidate value against a variable's bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundCheck {
    Within,
    Exceeds { max: f64 },
    Unknown,
}

/// Mapping from variable name to its maximum valid state value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateBounds {
    vals: BTreeMap<String, f64>,
}

impl StateBounds {
    /// Bounds with no entries; every lookup is `Unknown`.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }

    /// All known bounds, for display hints.
    pub fn known(&self) -> &BTreeMap<String, f64> {
        &self.vals
    }

    pub fn bound(&self, var: &str) -> Bound {
        match self.vals.get(var) {
            Some(max) => Bound::Known(*max),
            None => Bound::Unknown,
        }
    }

    /// Check a candidate value against the variable's bound.
    pub fn check(&self, var: &str, value: f64) -> BoundCheck {
        match self.bound(var) {
            Bound::Known(max) if value <= max => BoundCheck::Within,
            Bound::Known(max) => BoundCheck::Exceeds { max },
            Bound::Unknown => BoundCheck::Unknown,
        }
    }
}

impl From<BTreeMap<String, f64>> for StateBounds {
    fn from(vals: BTreeMap<String, f64>) -> Self {
        Self { vals }
    }
}

impl FromIterator<(String, f64)> for StateBounds {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            vals: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_is_inclusive_at_the_bound() {
        let bounds: StateBounds = [("X".to_string(), 3.0)].into_iter().collect();
        assert_eq!(bounds.check("X", 3.0), BoundCheck::Within);
        assert_eq!(bounds.check("X", 3.5), BoundCheck::Exceeds { max: 3.0 });
        assert_eq!(bounds.check("Y", 0.0), BoundCheck::Unknown);
    }

    #[test]
    fn empty_bounds_know_nothing() {
        assert_eq!(StateBounds::empty().check("X", 1.0), BoundCheck::Unknown);
    }
}
