//! Balloon analogue risk task.

pub mod engine;
pub mod metrics;

pub use engine::{BalloonRecord, BartConfig, BartEngine, PumpResult};
pub use metrics::BartMetrics;
