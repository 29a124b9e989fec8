//! Adjusting-amount staircase: "X now" versus a fixed later reward. Each
//! choice moves the immediate offer toward the indifference point.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeChoice {
    /// Take the smaller immediate amount.
    Now,
    /// Wait for the full delayed amount.
    Later,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceRecord {
    /// Immediate amount on offer when the choice was made.
    pub offered_now: u32,
    pub choice: TimeChoice,
    /// Immediate amount after the staircase adjusted.
    pub adjusted_now: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayConfig {
    pub later_amount: u32,
    pub delay_days: u32,
    pub trials: usize,
}

impl DelayConfig {
    pub fn standard() -> Self {
        Self {
            later_amount: 100,
            delay_days: 14,
            trials: 12,
        }
    }

    pub fn demo() -> Self {
        Self {
            trials: 6,
            ..Self::standard()
        }
    }
}

#[derive(Debug)]
pub struct DelayEngine {
    config: DelayConfig,
    current_now: u32,
    records: Vec<ChoiceRecord>,
}

impl DelayEngine {
    pub fn new(config: DelayConfig) -> Self {
        Self {
            config,
            current_now: config.later_amount / 2,
            records: Vec::new(),
        }
    }

    pub fn config(&self) -> &DelayConfig {
        &self.config
    }

    /// Immediate amount on offer for the next choice.
    pub fn current_offer(&self) -> u32 {
        self.current_now
    }

    pub fn records(&self) -> &[ChoiceRecord] {
        &self.records
    }

    pub fn is_done(&self) -> bool {
        self.records.len() >= self.config.trials
    }

    /// Distance-scaled step toward the hyperbolic indifference estimate,
    /// never smaller than 2.
    fn step(&self) -> u32 {
        let pivot = self.config.later_amount as f64
            / (1.0 + 0.2 * self.config.delay_days as f64);
        let distance = (self.current_now as f64 - pivot).abs();
        ((distance / 3.0).round() as u32).max(2)
    }

    /// Record a choice and adjust the offer. `None` once the staircase is
    /// complete.
    pub fn choose(&mut self, choice: TimeChoice) -> Option<u32> {
        if self.is_done() {
            return None;
        }
        let offered = self.current_now;
        let step = self.step();
        let adjusted = match choice {
            // Waiting was preferred: sweeten the immediate side.
            TimeChoice::Later => (offered + step).min(self.config.later_amount - 1),
            // Immediacy won: make waiting more attractive.
            TimeChoice::Now => offered.saturating_sub(step).max(1),
        };
        self.current_now = adjusted;
        self.records.push(ChoiceRecord {
            offered_now: offered,
            choice,
            adjusted_now: adjusted,
        });
        Some(adjusted)
    }

    pub fn restart(&mut self) {
        self.records.clear();
        self.current_now = self.config.later_amount / 2;
    }
}
