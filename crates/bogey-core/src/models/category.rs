//! Problem categories tallied by the stats engine

use serde::{Deserialize, Serialize};
use std::fmt;

use super::hole::Hole;

/// A recurring mistake the stats engine counts.
///
/// Declaration order is the enumeration order used for every tally and for
/// tie-breaking the biggest problem: on equal counts the earlier variant wins.
/// `Ord` follows it too, so maps keyed by category iterate in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProblemCategory {
    OutOfPosition,
    FailedEasyUpDown,
    DoubleBogeyOrWorse,
    ThreePutt,
    Penalty,
    WedgeRange,
}

impl ProblemCategory {
    /// All categories in enumeration order
    pub const ALL: [Self; 6] = [
        Self::OutOfPosition,
        Self::FailedEasyUpDown,
        Self::DoubleBogeyOrWorse,
        Self::ThreePutt,
        Self::Penalty,
        Self::WedgeRange,
    ];

    /// Stable key, matching the serialized form
    pub const fn key(self) -> &'static str {
        match self {
            Self::OutOfPosition => "outOfPosition",
            Self::FailedEasyUpDown => "failedEasyUpDown",
            Self::DoubleBogeyOrWorse => "doubleBogeyOrWorse",
            Self::ThreePutt => "threePutt",
            Self::Penalty => "penalty",
            Self::WedgeRange => "wedgeRange",
        }
    }

    /// Human-readable name
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::OutOfPosition => "Out of Position",
            Self::FailedEasyUpDown => "Failed Easy Up & Downs",
            Self::DoubleBogeyOrWorse => "Double Bogeys+",
            Self::ThreePutt => "Three-Putts",
            Self::Penalty => "Penalties",
            Self::WedgeRange => "Wedge Range Performance",
        }
    }

    /// Whether this problem happened on the hole.
    ///
    /// Wedge range only counts when the golfer needed more than the target
    /// number of shots from inside wedge range.
    pub fn occurred_on(self, hole: &Hole) -> bool {
        match self {
            Self::OutOfPosition => hole.out_of_position.as_ref().is_some_and(|e| e.occurred),
            Self::FailedEasyUpDown => hole
                .failed_easy_up_down
                .as_ref()
                .is_some_and(|e| e.occurred),
            Self::DoubleBogeyOrWorse => hole.double_bogey_or_worse.occurred,
            Self::ThreePutt => hole.three_putt.as_ref().is_some_and(|e| e.occurred),
            Self::Penalty => hole.penalty.as_ref().is_some_and(|e| e.occurred),
            Self::WedgeRange => hole
                .wedge_range
                .as_ref()
                .is_some_and(super::events::WedgeRange::missed_target),
        }
    }
}

impl fmt::Display for ProblemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
