//! Balloon engine: self-paced pump-or-bank choices against a hidden burst
//! point drawn fresh for each balloon.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BartConfig {
    pub balloons: usize,
    /// Upper bound of the uniform burst-point draw.
    pub max_burst: u32,
}

impl BartConfig {
    pub fn standard() -> Self {
        Self {
            balloons: 25,
            max_burst: 15,
        }
    }

    pub fn demo() -> Self {
        Self {
            balloons: 6,
            max_burst: 15,
        }
    }
}

/// One resolved balloon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalloonRecord {
    /// Pumps applied, including the bursting pump.
    pub pumps: u32,
    pub burst: bool,
    pub banked: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpResult {
    Inflated { pumps: u32 },
    Burst,
}

#[derive(Debug)]
pub struct BartEngine {
    config: BartConfig,
    rng: StdRng,
    pumps: u32,
    burst_point: u32,
    records: Vec<BalloonRecord>,
}

impl BartEngine {
    pub fn new(config: BartConfig) -> Self {
        Self::seeded(config, rand::thread_rng().gen())
    }

    pub fn seeded(config: BartConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let burst_point = draw_burst_point(&mut rng, config.max_burst);
        Self {
            config,
            rng,
            pumps: 0,
            burst_point,
            records: Vec::new(),
        }
    }

    pub fn config(&self) -> &BartConfig {
        &self.config
    }

    pub fn records(&self) -> &[BalloonRecord] {
        &self.records
    }

    /// Index of the balloon currently being inflated.
    pub fn balloon_index(&self) -> usize {
        self.records.len()
    }

    pub fn current_pumps(&self) -> u32 {
        self.pumps
    }

    pub fn is_done(&self) -> bool {
        self.records.len() >= self.config.balloons
    }

    /// Apply one pump. `None` once the run is over.
    pub fn pump(&mut self) -> Option<PumpResult> {
        if self.is_done() {
            return None;
        }
        let next = self.pumps + 1;
        if next >= self.burst_point {
            self.records.push(BalloonRecord {
                pumps: next,
                burst: true,
                banked: 0,
            });
            self.next_balloon();
            Some(PumpResult::Burst)
        } else {
            self.pumps = next;
            Some(PumpResult::Inflated { pumps: next })
        }
    }

    /// Bank the current balloon at its pump count. `None` once done.
    pub fn bank(&mut self) -> Option<u32> {
        if self.is_done() {
            return None;
        }
        let banked = self.pumps;
        self.records.push(BalloonRecord {
            pumps: banked,
            burst: false,
            banked,
        });
        self.next_balloon();
        Some(banked)
    }

    fn next_balloon(&mut self) {
        self.pumps = 0;
        self.burst_point = draw_burst_point(&mut self.rng, self.config.max_burst);
    }

    pub fn restart(&mut self) {
        self.records.clear();
        self.next_balloon();
    }
}

fn draw_burst_point(rng: &mut StdRng, max_burst: u32) -> u32 {
    rng.gen_range(1..=max_burst.max(1))
}
