//! Terminal output formatting
//!
//! Display utilities for the play loop and the gallows drawing.

pub mod display;
pub mod gallows;

pub use display::{
    print_banner, print_empty_input, print_invalid_input, print_loss, print_score, print_turn,
    print_win,
};
pub use gallows::gallows;
