//! Async service layer shared by front ends.

mod golf;
mod holes;
mod rounds;
mod stats;

#[cfg(test)]
mod testing;

pub use golf::GolfService;
