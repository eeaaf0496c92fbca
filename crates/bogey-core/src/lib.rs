//! bogey-core - Core library for Bogey
//!
//! This crate contains the round/hole models, the `SQLite` storage layer, and
//! the stats engine that turns logged holes into a "biggest problem" signal.
//! The CLI (and any other front end) talks to it through [`services::GolfService`].

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod stats;
pub mod util;

pub use error::{Error, Result};
pub use models::{Hole, HoleId, HoleInput, OwnerId, ProblemCategory, Round, RoundId};
