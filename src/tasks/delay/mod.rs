//! Delay discounting staircase.

pub mod engine;
pub mod metrics;

pub use engine::{ChoiceRecord, DelayConfig, DelayEngine, TimeChoice};
pub use metrics::DelayMetrics;
