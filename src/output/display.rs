//! Display functions for the play loop

use crate::core::{Game, NonAlphabeticInput};
use crate::output::gallows::gallows;
use colored::Colorize;

/// Print the game banner shown once at startup
pub fn print_banner() {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                           Hangman                            ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the secret word one letter at a time.");
    println!("Six wrong guesses and the game is over.");
}

/// Print the per-turn view: masked word, guessed letters, gallows
pub fn print_turn(game: &Game) {
    println!("\nCurrent state: {}", game.current_state().bold());
    println!("Guessed letters: {}", sorted_letters(game));
    println!("{}", gallows(game.wrong_guesses()));
}

/// Print the rejection message for a non-alphabetic guess
pub fn print_invalid_input(err: &NonAlphabeticInput) {
    println!("{}", err.to_string().red());
}

/// Print the rejection message for an empty input line
pub fn print_empty_input() {
    println!("{}", "input must be a single alphabetic character".red());
}

/// Print the end-of-round report for a won round
pub fn print_win(game: &Game) {
    println!(
        "\n{} You guessed the word: {}",
        "Congratulations!".bright_green().bold(),
        game.secret_word().bright_yellow().bold()
    );
}

/// Print the end-of-round report for a lost round
pub fn print_loss(game: &Game) {
    println!(
        "\n{} The word was: {}",
        "Game over!".bright_red().bold(),
        game.secret_word().bright_yellow().bold()
    );
    println!("{}", gallows(game.wrong_guesses()));
}

/// Print the final score of a round
pub fn print_score(game: &Game) {
    println!(
        "\nYour score is {}",
        game.score().to_string().bright_cyan().bold()
    );
}

fn sorted_letters(game: &Game) -> String {
    let mut letters: Vec<char> = game.guessed_letters().iter().copied().collect();
    letters.sort_unstable();

    let mut out = String::new();
    for (i, letter) in letters.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push(*letter);
    }
    out
}
