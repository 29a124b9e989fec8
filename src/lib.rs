//! Behavioral task battery core.
//!
//! The crate is split into three layers, mirroring the one-way data flow
//! scheduler → classifier → trial log → reducer → normalizer → scorer:
//!
//! - [`core`]: the generic trial scheduler state machine, its async driver,
//!   timing, missing-value numerics, quality flags, and summary records.
//! - [`tasks`]: one module per task. Timed tasks (go/no-go, stroop, MID)
//!   plug a protocol into the generic scheduler; self-paced tasks (BART,
//!   delay discounting, framing, probability weighting, calibration,
//!   anchoring) are small explicit engines. Every task ships a pure
//!   reducer from its trial log to a serializable metrics summary.
//! - [`battery`]: collects completed summaries, maps them to bounded
//!   dimension and trait scores, and folds those into the three-way
//!   Growth/Preservation/Income allocation tilt.

pub mod battery;
pub mod core;
pub mod tasks;
