//! Calibration items and interval scoring: the respondent supplies a 90%
//! confidence interval for each quantity as free text.

use crate::core::num::parse_field;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationItem {
    pub id: &'static str,
    pub prompt: &'static str,
    pub true_value: f64,
}

pub const ITEMS: [CalibrationItem; 4] = [
    CalibrationItem {
        id: "sp500-2024",
        prompt: "S&P 500 total return in 2024, percent",
        true_value: 25.0,
    },
    CalibrationItem {
        id: "us-cpi-2024",
        prompt: "US CPI inflation over 2024, percent",
        true_value: 3.0,
    },
    CalibrationItem {
        id: "ust10y-end-2024",
        prompt: "10-year US treasury yield at end of 2024, percent",
        true_value: 4.0,
    },
    CalibrationItem {
        id: "sp500-2022",
        prompt: "S&P 500 total return in 2022, percent",
        true_value: -18.0,
    },
];

/// Raw interval bounds as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalAnswer {
    pub lower: String,
    pub upper: String,
}

/// Answers aligned with [`ITEMS`] by index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalibrationForm {
    pub answers: Vec<IntervalAnswer>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationItemResult {
    pub item_id: &'static str,
    pub true_value: f64,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
    /// Both bounds parsed to finite numbers.
    pub valid: bool,
    pub width: Option<f64>,
    /// True value inside the interval; always false for invalid answers.
    pub hit: bool,
}

/// Score a submitted form against the item list. Items without an answer
/// come back invalid rather than being dropped.
pub fn score_form(form: &CalibrationForm) -> Vec<CalibrationItemResult> {
    ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let answer = form.answers.get(i);
            let lower = answer.and_then(|a| parse_field(&a.lower));
            let upper = answer.and_then(|a| parse_field(&a.upper));
            match (lower, upper) {
                (Some(lo), Some(hi)) => CalibrationItemResult {
                    item_id: item.id,
                    true_value: item.true_value,
                    lower,
                    upper,
                    valid: true,
                    width: Some((hi - lo).abs()),
                    hit: lo <= item.true_value && item.true_value <= hi,
                },
                _ => CalibrationItemResult {
                    item_id: item.id,
                    true_value: item.true_value,
                    lower,
                    upper,
                    valid: false,
                    width: None,
                    hit: false,
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(lower: &str, upper: &str) -> IntervalAnswer {
        IntervalAnswer {
            lower: lower.to_string(),
            upper: upper.to_string(),
        }
    }

    #[test]
    fn intervals_are_scored_against_true_values() {
        let form = CalibrationForm {
            answers: vec![
                answer("10", "30"),
                answer("5", "8"),
                answer("3.5", "4.5"),
                answer("-25", "-10"),
            ],
        };
        let results = score_form(&form);
        assert_eq!(results.len(), 4);
        assert!(results[0].hit);
        // CPI 3.0 sits below the offered 5..8 interval.
        assert!(!results[1].hit);
        assert!(results[1].valid);
        assert!(results[2].hit);
        assert!(results[3].hit);
        assert_eq!(results[0].width, Some(20.0));
    }

    #[test]
    fn unparsable_or_missing_bounds_invalidate_the_item() {
        let form = CalibrationForm {
            answers: vec![answer("ten", "30"), answer("", "8")],
        };
        let results = score_form(&form);
        assert!(!results[0].valid);
        assert!(!results[0].hit);
        assert_eq!(results[0].upper, Some(30.0));
        assert!(!results[1].valid);
        // Items 3 and 4 were never answered.
        assert!(!results[2].valid);
        assert!(!results[3].valid);
    }
}
