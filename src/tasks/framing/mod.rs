//! Gain/loss framing choice task.

pub mod engine;
pub mod metrics;

pub use engine::{
    Frame, FramingConfig, FramingEngine, FramingRecord, FramingTrial, GambleChoice,
};
pub use metrics::FramingMetrics;
