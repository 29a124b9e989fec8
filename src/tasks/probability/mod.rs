//! Probability weighting choice task.

pub mod engine;
pub mod metrics;

pub use engine::{LotteryChoice, LotteryItem, ProbabilityEngine, ProbabilityRecord};
pub use metrics::ProbabilityMetrics;
