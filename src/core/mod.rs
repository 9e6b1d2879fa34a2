//! Core domain types for hangman
//!
//! This module contains the game engine and its supporting types with zero
//! I/O dependencies. Everything here is pure, testable state manipulation.

mod game;
mod word;

pub use game::{
    ERROR_PENALTY_SCORE, EmptyWordList, Game, MAX_SCORE, MAX_TRIES, NonAlphabeticInput,
    RoundStatus,
};
pub use word::{Word, WordError};
