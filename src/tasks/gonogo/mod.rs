//! Go/no-go response inhibition task.

pub mod engine;
pub mod metrics;

pub use engine::{Cue, GoNoGoConfig, GoNoGoOutcome, GoNoGoProtocol};
pub use metrics::{GoNoGoCounts, GoNoGoMetrics};
