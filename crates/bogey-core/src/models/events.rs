//! Structured per-hole events
//!
//! Each event is optional on a hole. Text fields are kept exactly as the
//! golfer entered them.

use serde::{Deserialize, Serialize};

/// Shots allowed from wedge range (≤120 yards) to holed out before it counts
/// as a problem
pub const WEDGE_RANGE_TARGET_SHOTS: u32 = 3;

/// Whether a score is a double bogey or worse
#[must_use]
pub fn is_double_bogey_or_worse(strokes: u32, par: u8) -> bool {
    strokes >= u32::from(par) + 2
}

/// An event with an optional free-text reason.
///
/// Used for "out of position" (behind trees, no normal swing) and "failed
/// easy up and down".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReasonedEvent {
    pub occurred: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ReasonedEvent {
    #[must_use]
    pub fn new(reason: Option<String>) -> Self {
        Self {
            occurred: true,
            reason,
        }
    }
}

/// Double bogey or worse, derived from strokes and par
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoubleBogeyOrWorse {
    pub occurred: bool,
    /// What led to the big number ("drive", "approach", "chip", "putt")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caused_by: Option<String>,
}

impl DoubleBogeyOrWorse {
    /// Derive the flag from the score. A cause is only kept when the flag is set.
    #[must_use]
    pub fn derive(strokes: u32, par: u8, caused_by: Option<String>) -> Self {
        let occurred = is_double_bogey_or_worse(strokes, par);
        Self {
            occurred,
            caused_by: caused_by.filter(|_| occurred),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreePutt {
    pub occurred: bool,
    /// Distance of the first putt, in feet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_putt_distance: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Penalty {
    pub occurred: bool,
    /// "water", "OB", "lost ball"
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WedgeRange {
    pub was_in_wedge_range: bool,
    /// Total shots from wedge range to holed out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shots_from_wedge_range: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl WedgeRange {
    /// Inside wedge range and needed more than the target to hole out
    #[must_use]
    pub fn missed_target(&self) -> bool {
        self.was_in_wedge_range
            && self
                .shots_from_wedge_range
                .is_some_and(|shots| shots > WEDGE_RANGE_TARGET_SHOTS)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroShotsAvoided {
    pub occurred: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
