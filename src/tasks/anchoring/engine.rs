//! Anchoring entries: the same three market-history estimates are asked
//! twice, with the reference figures revealed between rounds.

use crate::core::num::parse_field;

/// Reference answers for the three estimates, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorTruth {
    pub best_year: f64,
    pub worst_year: f64,
    pub average_year: f64,
}

pub const TRUTH: AnchorTruth = AnchorTruth {
    best_year: 37.0,
    worst_year: -37.0,
    average_year: 11.0,
};

/// One round of estimates as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnchorEntry {
    pub best_year: String,
    pub worst_year: String,
    pub average_year: String,
}

impl AnchorEntry {
    pub fn parse(&self) -> AnchorValues {
        AnchorValues {
            best_year: parse_field(&self.best_year),
            worst_year: parse_field(&self.worst_year),
            average_year: parse_field(&self.average_year),
        }
    }
}

/// Parsed round; unanswered or non-numeric fields are missing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnchorValues {
    pub best_year: Option<f64>,
    pub worst_year: Option<f64>,
    pub average_year: Option<f64>,
}

impl AnchorValues {
    pub fn is_blank(&self) -> bool {
        self.best_year.is_none() && self.worst_year.is_none() && self.average_year.is_none()
    }
}
