//! Probability weighting engine: sure amounts traded against a 100-point
//! lottery across a sweep of win probabilities. Sure amounts sit slightly
//! below expected value so a value-neutral chooser leans lottery.

const LOTTERY_REWARD: f64 = 100.0;

/// (win probability, sure amount) sweep, presented in this ascending order.
const ITEMS: [(f64, f64); 7] = [
    (0.01, 0.5),
    (0.05, 3.0),
    (0.10, 7.0),
    (0.20, 16.0),
    (0.50, 45.0),
    (0.80, 70.0),
    (0.95, 85.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LotteryChoice {
    Sure,
    Lottery,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LotteryItem {
    pub p: f64,
    pub sure_amount: f64,
    pub reward: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbabilityRecord {
    pub p: f64,
    pub sure_amount: f64,
    pub choice: LotteryChoice,
}

#[derive(Debug)]
pub struct ProbabilityEngine {
    queue: Vec<LotteryItem>,
    cursor: usize,
    records: Vec<ProbabilityRecord>,
}

impl ProbabilityEngine {
    pub fn new() -> Self {
        let queue: Vec<LotteryItem> = ITEMS
            .iter()
            .map(|(p, sure)| LotteryItem {
                p: *p,
                sure_amount: *sure,
                reward: LOTTERY_REWARD,
            })
            .collect();
        Self {
            queue,
            cursor: 0,
            records: Vec::new(),
        }
    }

    pub fn current(&self) -> Option<&LotteryItem> {
        self.queue.get(self.cursor)
    }

    pub fn records(&self) -> &[ProbabilityRecord] {
        &self.records
    }

    pub fn is_done(&self) -> bool {
        self.cursor >= self.queue.len()
    }

    pub fn choose(&mut self, choice: LotteryChoice) -> Option<ProbabilityRecord> {
        let item = self.queue.get(self.cursor)?;
        let record = ProbabilityRecord {
            p: item.p,
            sure_amount: item.sure_amount,
            choice,
        };
        self.records.push(record);
        self.cursor += 1;
        Some(record)
    }
}

impl Default for ProbabilityEngine {
    fn default() -> Self {
        Self::new()
    }
}
