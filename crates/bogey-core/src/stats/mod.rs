//! Stats engine
//!
//! Pure reductions from rounds and holes to the numbers the front end shows.
//! Fetching is done by [`crate::services::GolfService`]; everything here is
//! deterministic and iterates categories in [`ProblemCategory::ALL`] order.
//!
//! [`ProblemCategory::ALL`]: crate::models::ProblemCategory::ALL

mod counts;
mod summary;

pub use counts::{average_score, CategoryCounts};
pub use summary::{CachedUserStats, ProblemSummary, RecentRounds, RoundSummary, UserStatsSummary};
