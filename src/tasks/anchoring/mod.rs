//! Two-round anchoring questionnaire.

pub mod engine;
pub mod metrics;

pub use engine::{AnchorEntry, AnchorTruth, AnchorValues, TRUTH};
pub use metrics::{AnchorFieldScore, AnchoringMetrics};
