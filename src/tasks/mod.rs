//! Task implementations.
//!
//! Timed tasks (go/no-go, stroop, MID) are protocols plugged into the
//! generic scheduler in `crate::core::scheduler`. Self-paced tasks (BART,
//! delay discounting, framing, probability weighting, calibration,
//! anchoring) are small synchronous engines advanced directly by user
//! choices. Every task ships a pure `metrics` reducer over its trial log.

pub mod anchoring;
pub mod bart;
pub mod calibration;
pub mod delay;
pub mod framing;
pub mod gonogo;
pub mod mid;
pub mod probability;
pub mod stroop;
