//! Round model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::hole::Hole;
use super::owner::OwnerId;

/// A unique identifier for a round, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundId(Uuid);

impl RoundId {
    /// Create a new unique round ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for RoundId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RoundId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A round of golf logged by one golfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    /// Unique identifier
    pub id: RoundId,
    /// Golfer who logged the round
    pub owner_id: OwnerId,
    pub course_name: String,
    /// Date played (Unix ms), set when the round is started
    pub date: i64,
    /// Creation timestamp (Unix ms)
    pub created_at: i64,
    pub is_complete: bool,
    /// Set when the round is completed
    pub total_score: Option<u32>,
    /// Set when the round is completed
    pub total_par: Option<u32>,
    /// Completion timestamp (Unix ms)
    pub completed_at: Option<i64>,
}

impl Round {
    /// Start a new open round
    #[must_use]
    pub fn new(owner_id: OwnerId, course_name: impl Into<String>) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Self {
            id: RoundId::new(),
            owner_id,
            course_name: course_name.into(),
            date: now,
            created_at: now,
            is_complete: false,
            total_score: None,
            total_par: None,
            completed_at: None,
        }
    }

    /// Score relative to par, once both totals are frozen
    #[must_use]
    pub fn score_to_par(&self) -> Option<i64> {
        Some(i64::from(self.total_score?) - i64::from(self.total_par?))
    }
}

/// A round together with its holes, ordered by hole number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundWithHoles {
    #[serde(flatten)]
    pub round: Round,
    pub holes: Vec<Hole>,
}

/// Totals a caller passes when completing a round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundTotals {
    pub total_score: u32,
    pub total_par: u32,
}

impl RoundTotals {
    /// Sum strokes and par over the given holes.
    ///
    /// Fails with `Error::Validation` when a total no longer fits in `u32`.
    pub fn from_holes(holes: &[Hole]) -> crate::Result<Self> {
        holes.iter().try_fold(Self::default(), |totals, hole| {
            let overflow = || {
                crate::Error::Validation(format!(
                    "round total overflows at hole {}",
                    hole.hole_number
                ))
            };

            Ok(Self {
                total_score: totals
                    .total_score
                    .checked_add(hole.strokes)
                    .ok_or_else(overflow)?,
                total_par: totals
                    .total_par
                    .checked_add(u32::from(hole.par))
                    .ok_or_else(overflow)?,
            })
        })
    }

    #[must_use]
    pub fn score_to_par(&self) -> i64 {
        i64::from(self.total_score) - i64::from(self.total_par)
    }
}
