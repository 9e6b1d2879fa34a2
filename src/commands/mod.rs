//! Command implementations

pub mod play;

pub use play::{RoundOutcome, run_play};
