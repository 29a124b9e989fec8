//! Platform-agnostic core: timing, the generic trial scheduler and its
//! async driver, missing-value numerics, quality flags, and summary records.

pub mod driver;
pub mod num;
pub mod platform;
pub mod qc;
pub mod scheduler;
pub mod storage;
pub mod timing;
