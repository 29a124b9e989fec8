//! Monetary incentive delay task.

pub mod engine;
pub mod metrics;

pub use engine::{Incentive, MidConfig, MidOutcome, MidProtocol};
pub use metrics::MidMetrics;
