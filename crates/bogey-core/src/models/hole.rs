//! Hole model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::events::{
    DoubleBogeyOrWorse, HeroShotsAvoided, Penalty, ReasonedEvent, ThreePutt, WedgeRange,
};
use super::round::RoundId;
use crate::error::{Error, Result};

/// Highest hole number on a card
pub const MAX_HOLE_NUMBER: u8 = 18;

/// A unique identifier for a hole, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HoleId(Uuid);

impl HoleId {
    /// Create a new unique hole ID using UUID v7
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

impl Default for HoleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HoleId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Events the golfer reports for a hole.
///
/// There is no double bogey flag here: it is always derived from the score.
/// Only the optional cause can be supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleEvents {
    #[serde(default)]
    pub out_of_position: Option<ReasonedEvent>,
    #[serde(default)]
    pub failed_easy_up_down: Option<ReasonedEvent>,
    #[serde(default)]
    pub double_bogey_cause: Option<String>,
    #[serde(default)]
    pub three_putt: Option<ThreePutt>,
    #[serde(default)]
    pub penalty: Option<Penalty>,
    #[serde(default)]
    pub wedge_range: Option<WedgeRange>,
    #[serde(default)]
    pub hero_shots_avoided: Option<HeroShotsAvoided>,
}

/// A hole submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleInput {
    pub hole_number: u8,
    pub par: u8,
    pub strokes: u32,
    #[serde(flatten)]
    pub events: HoleEvents,
}

impl HoleInput {
    /// Create a submission with no events
    #[must_use]
    pub fn new(hole_number: u8, par: u8, strokes: u32) -> Self {
        Self {
            hole_number,
            par,
            strokes,
            events: HoleEvents::default(),
        }
    }

    #[must_use]
    pub fn with_events(mut self, events: HoleEvents) -> Self {
        self.events = events;
        self
    }

    /// Check ranges: hole 1-18, par 3-5, at least one stroke
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_HOLE_NUMBER).contains(&self.hole_number) {
            return Err(Error::Validation(format!(
                "hole number must be between 1 and {MAX_HOLE_NUMBER}, got {}",
                self.hole_number
            )));
        }
        if !(3..=5).contains(&self.par) {
            return Err(Error::Validation(format!(
                "par must be 3, 4, or 5, got {}",
                self.par
            )));
        }
        if self.strokes == 0 {
            return Err(Error::Validation("strokes must be at least 1".into()));
        }
        Ok(())
    }
}

/// A played hole within a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hole {
    /// Unique identifier
    pub id: HoleId,
    /// Owning round
    pub round_id: RoundId,
    /// 1-18, unique within the round
    pub hole_number: u8,
    pub par: u8,
    pub strokes: u32,
    pub out_of_position: Option<ReasonedEvent>,
    pub failed_easy_up_down: Option<ReasonedEvent>,
    /// Always derived from `strokes` and `par`
    pub double_bogey_or_worse: DoubleBogeyOrWorse,
    pub three_putt: Option<ThreePutt>,
    pub penalty: Option<Penalty>,
    pub wedge_range: Option<WedgeRange>,
    pub hero_shots_avoided: Option<HeroShotsAvoided>,
    /// Creation timestamp (Unix ms)
    pub created_at: i64,
    /// Last save timestamp (Unix ms)
    pub updated_at: i64,
}

impl Hole {
    /// Build a hole from a submission. Does not validate.
    #[must_use]
    pub fn from_input(round_id: RoundId, input: HoleInput) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        let HoleInput {
            hole_number,
            par,
            strokes,
            events,
        } = input;

        Self {
            id: HoleId::new(),
            round_id,
            hole_number,
            par,
            strokes,
            out_of_position: events.out_of_position,
            failed_easy_up_down: events.failed_easy_up_down,
            double_bogey_or_worse: DoubleBogeyOrWorse::derive(
                strokes,
                par,
                events.double_bogey_cause,
            ),
            three_putt: events.three_putt,
            penalty: events.penalty,
            wedge_range: events.wedge_range,
            hero_shots_avoided: events.hero_shots_avoided,
            created_at: now,
            updated_at: now,
        }
    }

    /// Strokes relative to par
    #[must_use]
    pub fn score_to_par(&self) -> i64 {
        i64::from(self.strokes) - i64::from(self.par)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hole_id_parse() {
        let id = HoleId::new();
        let parsed: HoleId = id.as_str().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_validate_ranges() {
        assert!(HoleInput::new(1, 3, 1).validate().is_ok());
        assert!(HoleInput::new(18, 5, 12).validate().is_ok());

        for bad in [
            HoleInput::new(0, 4, 4),
            HoleInput::new(19, 4, 4),
            HoleInput::new(1, 2, 4),
            HoleInput::new(1, 6, 4),
            HoleInput::new(1, 4, 0),
        ] {
            assert!(matches!(bad.validate(), Err(Error::Validation(_))));
        }
    }

    #[test]
    fn test_from_input_derives_double_bogey() {
        let round_id = RoundId::new();
        let input = HoleInput::new(7, 4, 6).with_events(HoleEvents {
            double_bogey_cause: Some("approach".into()),
            ..HoleEvents::default()
        });

        let hole = Hole::from_input(round_id, input);
        assert!(hole.double_bogey_or_worse.occurred);
        assert_eq!(
            hole.double_bogey_or_worse.caused_by.as_deref(),
            Some("approach")
        );
        assert_eq!(hole.score_to_par(), 2);
        assert_eq!(hole.created_at, hole.updated_at);
    }

    #[test]
    fn test_input_deserializes_flat_events() {
        let input: HoleInput = serde_json::from_str(
            r#"{
                "holeNumber": 3,
                "par": 4,
                "strokes": 5,
                "threePutt": { "occurred": true, "firstPuttDistance": 35 }
            }"#,
        )
        .unwrap();

        assert_eq!(input.hole_number, 3);
        assert_eq!(
            input.events.three_putt,
            Some(ThreePutt {
                occurred: true,
                first_putt_distance: Some(35),
            })
        );
        assert_eq!(input.events.penalty, None);
    }
}
