//! Color-word stroop interference task.

pub mod engine;
pub mod metrics;

pub use engine::{InkColor, StroopConfig, StroopOutcome, StroopProtocol, StroopStimulus};
pub use metrics::StroopMetrics;
