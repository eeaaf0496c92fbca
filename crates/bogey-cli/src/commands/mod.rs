pub mod common;
pub mod config;
pub mod hole;
pub mod round;
pub mod stats;
