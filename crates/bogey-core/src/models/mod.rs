//! Data models for Bogey

mod category;
mod events;
mod hole;
mod owner;
mod round;

pub use category::ProblemCategory;
pub use events::{
    is_double_bogey_or_worse, DoubleBogeyOrWorse, HeroShotsAvoided, Penalty, ReasonedEvent,
    ThreePutt, WedgeRange, WEDGE_RANGE_TARGET_SHOTS,
};
pub use hole::{Hole, HoleEvents, HoleId, HoleInput, MAX_HOLE_NUMBER};
pub use owner::OwnerId;
pub use round::{Round, RoundId, RoundTotals, RoundWithHoles};
