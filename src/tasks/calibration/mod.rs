//! Confidence calibration (90% interval) questionnaire.

pub mod engine;
pub mod metrics;

pub use engine::{CalibrationForm, CalibrationItem, CalibrationItemResult, IntervalAnswer};
pub use metrics::CalibrationMetrics;
