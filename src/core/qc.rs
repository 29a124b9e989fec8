//! Quality control markers for task sessions.

use serde::{Deserialize, Serialize};

use super::platform::{platform_string, user_agent_string};

/// Context captured alongside a run that helps interpret its metrics:
/// interruption counters plus a device snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QualityFlags {
    /// Times the task surface lost visibility mid-run (tab switch, blur).
    pub visibility_blur_events: u32,
    /// Times the response target lost input focus.
    pub focus_lost_events: u32,
    /// Whether the run reached the task's minimum trial count.
    pub min_trials_met: bool,
    pub device: DeviceSnapshot,
}

impl QualityFlags {
    pub fn pristine() -> Self {
        Self {
            visibility_blur_events: 0,
            focus_lost_events: 0,
            min_trials_met: true,
            device: DeviceSnapshot::capture(),
        }
    }

    pub fn log_visibility_blur(&mut self) {
        self.visibility_blur_events = self.visibility_blur_events.saturating_add(1);
    }

    pub fn log_focus_loss(&mut self) {
        self.focus_lost_events = self.focus_lost_events.saturating_add(1);
    }

    pub fn mark_min_trials(&mut self, met: bool) {
        self.min_trials_met = met;
    }

    /// A run with zero interruptions that met its trial floor.
    pub fn is_clean(&self) -> bool {
        self.min_trials_met && self.visibility_blur_events == 0 && self.focus_lost_events == 0
    }
}

impl Default for QualityFlags {
    fn default() -> Self {
        Self::pristine()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeviceSnapshot {
    pub platform: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl DeviceSnapshot {
    pub fn capture() -> Self {
        Self {
            platform: platform_string(),
            user_agent: user_agent_string(),
        }
    }
}
