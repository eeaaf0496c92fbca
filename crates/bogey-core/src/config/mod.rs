//! Stats engine configuration.
//!
//! Window sizes and list defaults shared by the CLI and any other front end.
//! Every field has a default, so a partial (or empty) JSON object is valid.

use serde::{Deserialize, Serialize};

const DEFAULT_PROBLEM_WINDOW: usize = 10;
const DEFAULT_RECENT_ROUNDS: usize = 5;
const DEFAULT_ROUNDS_LIST: usize = 10;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StatsConfig {
    /// Most recent completed rounds scanned for the biggest problem
    #[serde(default = "default_problem_window")]
    pub problem_window: usize,
    /// Rounds returned by `recent_rounds` when the caller gives no count
    #[serde(default = "default_recent_rounds")]
    pub recent_rounds_default: usize,
    /// Rounds returned by `get_rounds` when the caller gives no limit
    #[serde(default = "default_rounds_list")]
    pub rounds_list_default: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            problem_window: DEFAULT_PROBLEM_WINDOW,
            recent_rounds_default: DEFAULT_RECENT_ROUNDS,
            rounds_list_default: DEFAULT_ROUNDS_LIST,
        }
    }
}

impl StatsConfig {
    /// Replace zero values with defaults.
    ///
    /// A zero window would make every aggregate empty.
    #[must_use]
    pub const fn normalized(mut self) -> Self {
        if self.problem_window == 0 {
            self.problem_window = DEFAULT_PROBLEM_WINDOW;
        }
        if self.recent_rounds_default == 0 {
            self.recent_rounds_default = DEFAULT_RECENT_ROUNDS;
        }
        if self.rounds_list_default == 0 {
            self.rounds_list_default = DEFAULT_ROUNDS_LIST;
        }
        self
    }
}

const fn default_problem_window() -> usize {
    DEFAULT_PROBLEM_WINDOW
}

const fn default_recent_rounds() -> usize {
    DEFAULT_RECENT_ROUNDS
}

const fn default_rounds_list() -> usize {
    DEFAULT_ROUNDS_LIST
}
