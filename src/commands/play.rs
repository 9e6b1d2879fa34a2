//! Interactive play loop
//!
//! Drives the game engine from a line reader, renders the state each turn,
//! and offers a replay after each round.

use crate::core::{Game, Word};
use crate::input::LineReader;
use crate::output::display;
use std::io::{self, Write};

/// Outcome of one finished round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub won: bool,
    pub secret: String,
    pub score: u32,
    pub wrong_guesses: u32,
}

/// Run rounds until the player declines a replay
///
/// Returns one outcome per finished round, in order.
///
/// # Errors
///
/// Returns an error if the word list is empty or reading input fails.
pub fn run_play<R: LineReader>(
    words: &[Word],
    reader: &mut R,
) -> Result<Vec<RoundOutcome>, String> {
    display::print_banner();

    let mut game = Game::new(words).map_err(|e| e.to_string())?;
    let mut outcomes = Vec::new();

    loop {
        outcomes.push(play_round(&mut game, reader)?);

        if !wants_replay(reader)? {
            break;
        }
        game.reset(words).map_err(|e| e.to_string())?;
    }

    Ok(outcomes)
}

fn play_round<R: LineReader>(game: &mut Game, reader: &mut R) -> Result<RoundOutcome, String> {
    while !game.is_game_won() && !game.is_game_lost() {
        display::print_turn(game);

        let line = prompt(reader, "Guess a letter")?;
        // Only the first character of the typed line is used
        match line.chars().next() {
            Some(guess) => {
                if let Err(err) = game.make_guess(guess) {
                    display::print_invalid_input(&err);
                }
            }
            None => display::print_empty_input(),
        }
    }

    if game.is_game_won() {
        display::print_win(game);
    } else {
        display::print_loss(game);
    }
    display::print_score(game);

    Ok(RoundOutcome {
        won: game.is_game_won(),
        secret: game.secret_word().to_string(),
        score: game.score(),
        wrong_guesses: game.wrong_guesses(),
    })
}

fn wants_replay<R: LineReader>(reader: &mut R) -> Result<bool, String> {
    let answer = prompt(reader, "Play again? (yes/no)")?;
    Ok(matches!(answer.to_lowercase().as_str(), "yes" | "y"))
}

fn prompt<R: LineReader>(reader: &mut R, label: &str) -> Result<String, String> {
    print!("{label}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;
    reader.read_line().map_err(|e| e.to_string())
}
