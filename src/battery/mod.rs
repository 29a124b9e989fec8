//! Cross-task aggregation: collected summaries are normalized into
//! behavioral dimension and trait scores, then mapped to an allocation
//! style tilt with plain-language advisories.

pub mod advisory;
pub mod allocation;
pub mod profile;
pub mod score;

use serde::{Deserialize, Serialize};

use crate::tasks::anchoring::AnchoringMetrics;
use crate::tasks::bart::BartMetrics;
use crate::tasks::calibration::CalibrationMetrics;
use crate::tasks::delay::DelayMetrics;
use crate::tasks::framing::FramingMetrics;
use crate::tasks::gonogo::GoNoGoMetrics;
use crate::tasks::mid::MidMetrics;
use crate::tasks::probability::ProbabilityMetrics;
use crate::tasks::stroop::StroopMetrics;

pub use advisory::{advisories, Advisory};
pub use allocation::{AllocationStyle, AllocationTilt};
pub use profile::{dimension_scores, trait_scores, DimensionScore, TraitScores};

/// Latest summary per task; tasks not yet run stay `None` and drop out of
/// every downstream average instead of polluting it with zeros.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatteryResults {
    pub gonogo: Option<GoNoGoMetrics>,
    pub stroop: Option<StroopMetrics>,
    pub mid: Option<MidMetrics>,
    pub bart: Option<BartMetrics>,
    pub delay: Option<DelayMetrics>,
    pub framing: Option<FramingMetrics>,
    pub probability: Option<ProbabilityMetrics>,
    pub calibration: Option<CalibrationMetrics>,
    pub anchoring: Option<AnchoringMetrics>,
}

impl BatteryResults {
    /// At least one task has produced a summary.
    pub fn any_present(&self) -> bool {
        self.gonogo.is_some()
            || self.stroop.is_some()
            || self.mid.is_some()
            || self.bart.is_some()
            || self.delay.is_some()
            || self.framing.is_some()
            || self.probability.is_some()
            || self.calibration.is_some()
            || self.anchoring.is_some()
    }
}
