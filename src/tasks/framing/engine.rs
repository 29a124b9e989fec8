//! Framing engine: the same lotteries posed twice, once as a sure gain
//! against a gamble and once as a sure loss, with repeats for a
//! within-subject consistency check.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Expected-value-matched base items: sure amount equals `p` times the
/// gamble payout of 100.
const ITEM_PROBABILITIES: [f64; 6] = [0.5, 0.25, 0.75, 0.6, 0.4, 0.9];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frame {
    Gain,
    Loss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GambleChoice {
    Sure,
    Gamble,
}

/// One presented lottery.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramingTrial {
    pub item_id: u8,
    pub frame: Frame,
    /// Probability of the gamble's nonzero payout.
    pub p: f64,
    pub sure_amount: f64,
    pub gamble_amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramingRecord {
    pub item_id: u8,
    pub frame: Frame,
    pub choice: GambleChoice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramingConfig {
    /// Cap on total presentations; `None` runs the full double deck.
    pub limit: Option<usize>,
}

impl FramingConfig {
    pub fn standard() -> Self {
        Self { limit: None }
    }

    pub fn demo() -> Self {
        Self { limit: Some(8) }
    }
}

#[derive(Debug)]
pub struct FramingEngine {
    queue: Vec<FramingTrial>,
    cursor: usize,
    records: Vec<FramingRecord>,
}

impl FramingEngine {
    pub fn new(config: FramingConfig) -> Self {
        Self::seeded(config, rand::thread_rng().gen())
    }

    pub fn seeded(config: FramingConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self {
            queue: build_queue(config, &mut rng),
            cursor: 0,
            records: Vec::new(),
        }
    }

    pub fn current(&self) -> Option<&FramingTrial> {
        self.queue.get(self.cursor)
    }

    pub fn records(&self) -> &[FramingRecord] {
        &self.records
    }

    pub fn is_done(&self) -> bool {
        self.cursor >= self.queue.len()
    }

    pub fn remaining(&self) -> usize {
        self.queue.len() - self.cursor
    }

    /// Record a choice for the current trial and advance.
    pub fn choose(&mut self, choice: GambleChoice) -> Option<FramingRecord> {
        let trial = self.queue.get(self.cursor)?;
        let record = FramingRecord {
            item_id: trial.item_id,
            frame: trial.frame,
            choice,
        };
        self.records.push(record);
        self.cursor += 1;
        Some(record)
    }
}

fn base_trials() -> Vec<FramingTrial> {
    let mut trials = Vec::with_capacity(ITEM_PROBABILITIES.len() * 2);
    for (id, p) in ITEM_PROBABILITIES.iter().enumerate() {
        let sure = 100.0 * p;
        trials.push(FramingTrial {
            item_id: id as u8,
            frame: Frame::Gain,
            p: *p,
            sure_amount: sure,
            gamble_amount: 100.0,
        });
        trials.push(FramingTrial {
            item_id: id as u8,
            frame: Frame::Loss,
            p: *p,
            sure_amount: -sure,
            gamble_amount: -100.0,
        });
    }
    trials
}

/// Two independently shuffled passes over the deck, shuffled again as a
/// whole so the repeat of an item is not always a full deck away.
fn build_queue(config: FramingConfig, rng: &mut StdRng) -> Vec<FramingTrial> {
    let mut first = base_trials();
    first.shuffle(rng);
    let mut second = base_trials();
    second.shuffle(rng);
    first.extend(second);
    first.shuffle(rng);
    if let Some(limit) = config.limit {
        first.truncate(limit);
    }
    first
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_deck_presents_each_item_frame_pair_twice() {
        let engine = FramingEngine::seeded(FramingConfig::standard(), 17);
        assert_eq!(engine.remaining(), 24);
        for id in 0..6u8 {
            for frame in [Frame::Gain, Frame::Loss] {
                let count = engine
                    .queue
                    .iter()
                    .filter(|t| t.item_id == id && t.frame == frame)
                    .count();
                assert_eq!(count, 2);
            }
        }
    }

    #[test]
    fn demo_deck_is_capped() {
        let engine = FramingEngine::seeded(FramingConfig::demo(), 17);
        assert_eq!(engine.remaining(), 8);
    }

    #[test]
    fn loss_frame_mirrors_the_gain_amounts() {
        for trial in base_trials() {
            match trial.frame {
                Frame::Gain => {
                    assert!(trial.sure_amount > 0.0);
                    assert_eq!(trial.gamble_amount, 100.0);
                    assert!((trial.sure_amount - 100.0 * trial.p).abs() < 1e-12);
                }
                Frame::Loss => {
                    assert!(trial.sure_amount < 0.0);
                    assert_eq!(trial.gamble_amount, -100.0);
                }
            }
        }
    }

    #[test]
    fn choices_advance_until_the_deck_is_spent() {
        let mut engine = FramingEngine::seeded(FramingConfig::demo(), 4);
        while !engine.is_done() {
            assert!(engine.choose(GambleChoice::Sure).is_some());
        }
        assert_eq!(engine.records().len(), 8);
        assert!(engine.choose(GambleChoice::Gamble).is_none());
    }
}
