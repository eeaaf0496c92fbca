//! Per-category occurrence counts

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Hole, ProblemCategory, Round};
use crate::util::round_to_tenth;

/// Number of holes on which each problem occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryCounts(BTreeMap<ProblemCategory, u32>);

impl Default for CategoryCounts {
    fn default() -> Self {
        Self(ProblemCategory::ALL.iter().map(|&c| (c, 0)).collect())
    }
}

impl CategoryCounts {
    /// Count problem occurrences across holes
    pub fn tally<'a>(holes: impl IntoIterator<Item = &'a Hole>) -> Self {
        let mut counts = Self::default();
        for hole in holes {
            for category in ProblemCategory::ALL {
                if category.occurred_on(hole) {
                    *counts.0.entry(category).or_insert(0) += 1;
                }
            }
        }
        counts
    }

    pub fn get(&self, category: ProblemCategory) -> u32 {
        self.0.get(&category).copied().unwrap_or(0)
    }

    /// Counts in enumeration order
    pub fn iter(&self) -> impl Iterator<Item = (ProblemCategory, u32)> + '_ {
        ProblemCategory::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// The category with the highest count.
    ///
    /// A category replaces the current pick only with a strictly greater
    /// count, so ties go to the one enumerated first. `None` when nothing
    /// occurred.
    pub fn biggest(&self) -> Option<(ProblemCategory, u32)> {
        let mut biggest = None;
        let mut max = 0;
        for (category, count) in self.iter() {
            if count > max {
                max = count;
                biggest = Some((category, count));
            }
        }
        biggest
    }

    /// Per-round averages rounded to one decimal; all zero when `rounds == 0`
    pub fn per_round(&self, rounds: u32) -> BTreeMap<ProblemCategory, f64> {
        self.iter()
            .map(|(category, count)| {
                let average = if rounds == 0 {
                    0.0
                } else {
                    round_to_tenth(f64::from(count) / f64::from(rounds))
                };
                (category, average)
            })
            .collect()
    }
}

/// Mean total score of the rounds that have one, rounded to the nearest
/// stroke. `0` when no round has a total.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn average_score(rounds: &[Round]) -> u32 {
    let scores = rounds
        .iter()
        .filter_map(|round| round.total_score)
        .collect::<Vec<_>>();

    if scores.is_empty() {
        return 0;
    }

    let sum = scores.iter().map(|&score| u64::from(score)).sum::<u64>();
    (sum as f64 / scores.len() as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HoleEvents, HoleInput, OwnerId, Penalty, RoundId, ThreePutt, WedgeRange};

    fn hole(number: u8, strokes: u32, events: HoleEvents) -> Hole {
        Hole::from_input(
            RoundId::new(),
            HoleInput::new(number, 4, strokes).with_events(events),
        )
    }

    fn three_putt() -> HoleEvents {
        HoleEvents {
            three_putt: Some(ThreePutt {
                occurred: true,
                first_putt_distance: None,
            }),
            ..HoleEvents::default()
        }
    }

    fn penalty() -> HoleEvents {
        HoleEvents {
            penalty: Some(Penalty {
                occurred: true,
                ..Penalty::default()
            }),
            ..HoleEvents::default()
        }
    }

    fn wedge(shots: u32) -> HoleEvents {
        HoleEvents {
            wedge_range: Some(WedgeRange {
                was_in_wedge_range: true,
                shots_from_wedge_range: Some(shots),
                reason: None,
            }),
            ..HoleEvents::default()
        }
    }

    #[test]
    fn test_tally_counts_each_category() {
        let holes = vec![
            hole(1, 6, three_putt()),
            hole(2, 4, penalty()),
            hole(3, 5, three_putt()),
            hole(4, 4, HoleEvents::default()),
        ];

        let counts = CategoryCounts::tally(&holes);
        assert_eq!(counts.get(ProblemCategory::ThreePutt), 2);
        assert_eq!(counts.get(ProblemCategory::Penalty), 1);
        assert_eq!(counts.get(ProblemCategory::DoubleBogeyOrWorse), 1);
        assert_eq!(counts.get(ProblemCategory::OutOfPosition), 0);
    }

    #[test]
    fn test_wedge_range_counts_only_over_target() {
        let holes = vec![hole(1, 4, wedge(3)), hole(2, 5, wedge(4))];
        let counts = CategoryCounts::tally(&holes);
        assert_eq!(counts.get(ProblemCategory::WedgeRange), 1);

        let on_target = CategoryCounts::tally(&[hole(1, 4, wedge(3))]);
        assert_eq!(on_target.get(ProblemCategory::WedgeRange), 0);
    }

    #[test]
    fn test_biggest_tie_goes_to_first_enumerated() {
        // Three-putts are enumerated before penalties
        let holes = vec![
            hole(1, 4, penalty()),
            hole(2, 4, penalty()),
            hole(3, 4, three_putt()),
            hole(4, 4, three_putt()),
        ];

        let counts = CategoryCounts::tally(&holes);
        assert_eq!(counts.biggest(), Some((ProblemCategory::ThreePutt, 2)));
    }

    #[test]
    fn test_biggest_none_when_clean() {
        let holes = vec![hole(1, 4, HoleEvents::default())];
        assert_eq!(CategoryCounts::tally(&holes).biggest(), None);
        assert_eq!(CategoryCounts::default().biggest(), None);
    }

    #[test]
    fn test_per_round_zero_rounds() {
        let counts = CategoryCounts::tally(&[hole(1, 4, penalty())]);
        let averages = counts.per_round(0);
        assert_eq!(averages.len(), ProblemCategory::ALL.len());
        assert!(averages.values().all(|&value| value == 0.0));
    }

    #[test]
    fn test_per_round_rounds_to_tenth() {
        let holes = vec![
            hole(1, 4, penalty()),
            hole(2, 4, penalty()),
            hole(3, 4, penalty()),
            hole(4, 4, penalty()),
        ];
        let averages = CategoryCounts::tally(&holes).per_round(3);
        assert!((averages[&ProblemCategory::Penalty] - 1.3).abs() < 1e-9);
        assert!(averages[&ProblemCategory::ThreePutt].abs() < f64::EPSILON);
    }

    #[test]
    fn test_average_score_skips_missing_totals() {
        let owner = OwnerId::new("alice").unwrap();
        let mut rounds = vec![
            Round::new(owner.clone(), "A"),
            Round::new(owner.clone(), "B"),
            Round::new(owner, "C"),
        ];
        rounds[0].total_score = Some(85);
        rounds[1].total_score = Some(90);

        assert_eq!(average_score(&rounds), 88);
        assert_eq!(average_score(&rounds[2..]), 0);
        assert_eq!(average_score(&[]), 0);
    }
}
