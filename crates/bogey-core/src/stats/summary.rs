//! Summaries built from rounds and holes

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::counts::{average_score, CategoryCounts};
use crate::models::{Hole, OwnerId, ProblemCategory, Round, RoundTotals};
use crate::util::{now_millis, round_to_tenth};

fn round_count(rounds: &[Round]) -> u32 {
    u32::try_from(rounds.len()).unwrap_or(u32::MAX)
}

/// Lifetime stats over every completed round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatsSummary {
    pub rounds_played: u32,
    pub average_score: u32,
    /// Average occurrences per round, keyed by category
    pub stats: BTreeMap<ProblemCategory, f64>,
}

impl UserStatsSummary {
    /// No rounds played: every figure is zero
    pub fn empty() -> Self {
        Self {
            rounds_played: 0,
            average_score: 0,
            stats: CategoryCounts::default().per_round(0),
        }
    }

    /// Reduce completed rounds and all of their holes
    pub fn from_rounds(rounds: &[Round], holes: &[Hole]) -> Self {
        if rounds.is_empty() {
            return Self::empty();
        }

        let rounds_played = round_count(rounds);
        Self {
            rounds_played,
            average_score: average_score(rounds),
            stats: CategoryCounts::tally(holes).per_round(rounds_played),
        }
    }
}

/// The most frequent problem over a window of recent rounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemSummary {
    pub problem: ProblemCategory,
    /// Display name of `problem`
    pub name: String,
    pub avg_per_round: f64,
    /// Holes on which the problem occurred
    pub total: u32,
    pub rounds_analyzed: u32,
}

impl ProblemSummary {
    /// `None` when there are no rounds, no holes, or nothing went wrong
    pub fn from_rounds(rounds: &[Round], holes: &[Hole]) -> Option<Self> {
        if rounds.is_empty() || holes.is_empty() {
            return None;
        }

        let (problem, total) = CategoryCounts::tally(holes).biggest()?;
        let rounds_analyzed = round_count(rounds);

        Some(Self {
            problem,
            name: problem.display_name().to_string(),
            avg_per_round: round_to_tenth(f64::from(total) / f64::from(rounds_analyzed)),
            total,
            rounds_analyzed,
        })
    }
}

/// Most recent completed rounds and their average score
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentRounds {
    pub rounds: Vec<Round>,
    pub average_score: u32,
}

impl RecentRounds {
    pub fn from_rounds(rounds: Vec<Round>) -> Self {
        let average_score = average_score(&rounds);
        Self {
            rounds,
            average_score,
        }
    }
}

/// Scorecard summary of a single round, complete or not
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSummary {
    #[serde(flatten)]
    pub totals: RoundTotals,
    pub score_to_par: i64,
    pub holes_played: usize,
    pub counts: CategoryCounts,
    /// The round's most frequent problem, if any
    pub main_issue: Option<ProblemCategory>,
}

impl RoundSummary {
    pub fn from_holes(holes: &[Hole]) -> crate::Result<Self> {
        let totals = RoundTotals::from_holes(holes)?;
        let counts = CategoryCounts::tally(holes);
        let main_issue = counts.biggest().map(|(category, _)| category);

        Ok(Self {
            totals,
            score_to_par: totals.score_to_par(),
            holes_played: holes.len(),
            counts,
            main_issue,
        })
    }
}

/// Materialized copy of a user's lifetime stats.
///
/// May be stale; the live figures always come from [`UserStatsSummary`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedUserStats {
    pub owner_id: OwnerId,
    pub rounds_played: u32,
    pub average_score: u32,
    pub averages: BTreeMap<ProblemCategory, f64>,
    /// Refresh timestamp (Unix ms)
    pub last_updated: i64,
}

impl CachedUserStats {
    pub fn from_summary(owner_id: OwnerId, summary: &UserStatsSummary) -> Self {
        Self {
            owner_id,
            rounds_played: summary.rounds_played,
            average_score: summary.average_score,
            averages: summary.stats.clone(),
            last_updated: now_millis(),
        }
    }
}
