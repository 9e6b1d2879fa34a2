//! Hangman round state and transition rules
//!
//! This is the game engine: it owns the secret word, the guessed-letter set,
//! the wrong-guess counter, and the score, and enforces every transition
//! rule. All operations are pure in-memory computations; no I/O happens here.

use crate::core::word::Word;
use rustc_hash::FxHashSet;
use std::fmt;

/// Maximum number of wrong guesses before the round is lost
pub const MAX_TRIES: u32 = 6;

/// Score a round starts with
pub const MAX_SCORE: u32 = 120;

/// Score deducted for each wrong guess
pub const ERROR_PENALTY_SCORE: u32 = 20;

/// Error raised when a guess is not an alphabetic character
///
/// Carries the offending character. This is the only error the engine raises
/// mid-round; it never alters game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonAlphabeticInput(pub char);

impl fmt::Display for NonAlphabeticInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input must be a single alphabetic character")
    }
}

impl std::error::Error for NonAlphabeticInput {}

/// Error returned when a round is started against an empty word list
///
/// The word source contract promises a non-empty list; the engine still
/// defends against violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyWordList;

impl fmt::Display for EmptyWordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "word list is empty")
    }
}

impl std::error::Error for EmptyWordList {}

/// Progress of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// State of one hangman round
///
/// Created by [`Game::new`], mutated only through [`Game::make_guess`], and
/// replaced wholesale by [`Game::reset`]. Won and lost rounds are frozen:
/// further guesses are accepted but change nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    secret: Word,
    guessed: FxHashSet<char>,
    wrong_guesses: u32,
    score: u32,
}

impl Game {
    /// Start a round with a secret word picked uniformly at random
    ///
    /// # Errors
    /// Returns [`EmptyWordList`] if `words` is empty.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Game, MAX_SCORE, Word};
    ///
    /// let words = vec![Word::new("apple").unwrap()];
    /// let game = Game::new(&words).unwrap();
    /// assert_eq!(game.score(), MAX_SCORE);
    /// assert_eq!(game.current_state(), "_____");
    /// ```
    pub fn new(words: &[Word]) -> Result<Self, EmptyWordList> {
        let secret = pick_word(words)?;
        Ok(Self {
            secret,
            guessed: FxHashSet::default(),
            wrong_guesses: 0,
            score: MAX_SCORE,
        })
    }

    /// Start a fresh round in place, picking a new secret word
    ///
    /// Clears all guesses and restores the score. The new word may repeat
    /// the previous one; the picker draws with replacement.
    ///
    /// # Errors
    /// Returns [`EmptyWordList`] if `words` is empty; the current round is
    /// left untouched in that case.
    pub fn reset(&mut self, words: &[Word]) -> Result<(), EmptyWordList> {
        self.secret = pick_word(words)?;
        self.guessed.clear();
        self.wrong_guesses = 0;
        self.score = MAX_SCORE;
        Ok(())
    }

    /// The visible state of the secret word
    ///
    /// Each position shows its letter if guessed, `_` otherwise.
    #[must_use]
    pub fn current_state(&self) -> String {
        self.secret
            .chars()
            .map(|letter| {
                if self.guessed.contains(&letter) {
                    letter
                } else {
                    '_'
                }
            })
            .collect()
    }

    /// Process a guess, updating the round state
    ///
    /// The input is normalized to lowercase. A guess against a finished
    /// round, or a letter already guessed, is a no-op. A letter absent from
    /// the secret word costs one try and [`ERROR_PENALTY_SCORE`] points.
    ///
    /// # Errors
    /// Returns [`NonAlphabeticInput`] if `input` is not alphabetic; the
    /// round state is unchanged.
    pub fn make_guess(&mut self, input: char) -> Result<(), NonAlphabeticInput> {
        if !input.is_alphabetic() {
            return Err(NonAlphabeticInput(input));
        }

        if self.is_game_won() || self.is_game_lost() {
            return Ok(());
        }

        // to_lowercase yields at least one char; compound mappings reduce to
        // their first symbol
        let letter = input.to_lowercase().next().unwrap_or(input);

        if self.guessed.contains(&letter) {
            return Ok(());
        }

        if !self.secret.has_letter(letter) {
            self.wrong_guesses += 1;
            self.score = self.score.saturating_sub(ERROR_PENALTY_SCORE);
        }
        self.guessed.insert(letter);

        Ok(())
    }

    /// True once every distinct letter of the secret word has been guessed
    #[must_use]
    pub fn is_game_won(&self) -> bool {
        self.secret
            .letters()
            .iter()
            .all(|letter| self.guessed.contains(letter))
    }

    /// True once the wrong-guess limit has been reached
    #[must_use]
    pub fn is_game_lost(&self) -> bool {
        self.wrong_guesses >= MAX_TRIES
    }

    /// Current progress of the round
    ///
    /// A guess is exclusively correct or incorrect, so a round can never be
    /// simultaneously won and lost.
    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.is_game_won() {
            RoundStatus::Won
        } else if self.is_game_lost() {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    /// The secret word of the current round
    #[must_use]
    pub fn secret_word(&self) -> &str {
        self.secret.text()
    }

    /// All letters guessed so far, correct and incorrect
    #[must_use]
    pub fn guessed_letters(&self) -> &FxHashSet<char> {
        &self.guessed
    }

    /// Number of incorrect guesses made so far
    #[must_use]
    pub fn wrong_guesses(&self) -> u32 {
        self.wrong_guesses
    }

    /// Current score
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }
}

fn pick_word(words: &[Word]) -> Result<Word, EmptyWordList> {
    use rand::prelude::IndexedRandom;

    words.choose(&mut rand::rng()).cloned().ok_or(EmptyWordList)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with(secret: &str) -> Game {
        Game::new(&[Word::new(secret).unwrap()]).unwrap()
    }

    #[test]
    fn initial_state() {
        let game = game_with("apple");
        assert_eq!(game.secret_word(), "apple");
        assert_eq!(game.wrong_guesses(), 0);
        assert_eq!(game.score(), MAX_SCORE);
        assert!(game.guessed_letters().is_empty());
        assert_eq!(game.current_state(), "_____");
        assert_eq!(game.status(), RoundStatus::InProgress);
    }

    #[test]
    fn empty_word_list_rejected() {
        assert_eq!(Game::new(&[]), Err(EmptyWordList));

        let mut game = game_with("apple");
        assert_eq!(game.reset(&[]), Err(EmptyWordList));
        // The failed reset left the round untouched
        assert_eq!(game.secret_word(), "apple");
    }

    #[test]
    fn non_alphabetic_input_rejected() {
        let mut game = game_with("apple");

        assert_eq!(game.make_guess('1'), Err(NonAlphabeticInput('1')));
        assert_eq!(game.make_guess('*'), Err(NonAlphabeticInput('*')));
        assert_eq!(game.make_guess(' '), Err(NonAlphabeticInput(' ')));

        assert!(game.guessed_letters().is_empty());
        assert_eq!(game.wrong_guesses(), 0);
        assert_eq!(game.score(), MAX_SCORE);
    }

    #[test]
    fn correct_guess_no_penalty() {
        let mut game = game_with("apple");
        game.make_guess('a').unwrap();

        assert!(game.guessed_letters().contains(&'a'));
        assert_eq!(game.wrong_guesses(), 0);
        assert_eq!(game.score(), MAX_SCORE);
        assert_eq!(game.current_state(), "a____");
    }

    #[test]
    fn incorrect_guess_costs_try_and_score() {
        let mut game = game_with("apple");
        game.make_guess('z').unwrap();

        assert!(game.guessed_letters().contains(&'z'));
        assert_eq!(game.wrong_guesses(), 1);
        assert_eq!(game.score(), MAX_SCORE - ERROR_PENALTY_SCORE);
        assert_eq!(game.current_state(), "_____");
    }

    #[test]
    fn repeated_guess_is_idempotent() {
        let mut game = game_with("apple");

        game.make_guess('z').unwrap();
        let after_first = game.clone();
        game.make_guess('z').unwrap();
        assert_eq!(game, after_first);

        game.make_guess('a').unwrap();
        let after_correct = game.clone();
        game.make_guess('a').unwrap();
        assert_eq!(game, after_correct);
    }

    #[test]
    fn uppercase_guess_normalized() {
        let mut game = game_with("apple");

        game.make_guess('A').unwrap();
        assert!(game.guessed_letters().contains(&'a'));
        assert_eq!(game.current_state(), "a____");

        // 'a' again is the same guess, not a new one
        game.make_guess('a').unwrap();
        assert_eq!(game.guessed_letters().len(), 1);
    }

    #[test]
    fn accented_guess_normalized() {
        let mut game = game_with("café");

        game.make_guess('É').unwrap();
        assert!(game.guessed_letters().contains(&'é'));
        assert_eq!(game.wrong_guesses(), 0);
        assert_eq!(game.current_state(), "___é");
    }

    #[test]
    fn wrong_guesses_match_missing_letter_count() {
        let mut game = game_with("apple");

        for letter in ['a', 'z', 'p', 'q', 'x', 'l'] {
            game.make_guess(letter).unwrap();
        }

        let missing = game
            .guessed_letters()
            .iter()
            .filter(|&&letter| !"apple".contains(letter))
            .count();
        assert_eq!(game.wrong_guesses() as usize, missing);
        assert_eq!(
            game.score(),
            MAX_SCORE - ERROR_PENALTY_SCORE * game.wrong_guesses()
        );
    }

    #[test]
    fn win_regardless_of_guess_order() {
        let mut game = game_with("apple");

        for letter in ['e', 'l', 'a', 'p'] {
            assert!(!game.is_game_won());
            game.make_guess(letter).unwrap();
        }

        assert!(game.is_game_won());
        assert!(!game.is_game_lost());
        assert_eq!(game.status(), RoundStatus::Won);
        assert_eq!(game.current_state(), "apple");
    }

    #[test]
    fn duplicate_letters_need_one_guess() {
        let mut game = game_with("apple");

        // 'p' appears twice but counts as one distinct letter
        game.make_guess('p').unwrap();
        assert_eq!(game.current_state(), "_pp__");
        assert_eq!(game.guessed_letters().len(), 1);
    }

    #[test]
    fn loss_after_max_tries() {
        let mut game = game_with("apple");

        for letter in ['z', 'q', 'x', 'd', 't', 'w'] {
            assert!(!game.is_game_lost());
            game.make_guess(letter).unwrap();
        }

        assert!(game.is_game_lost());
        assert!(!game.is_game_won());
        assert_eq!(game.status(), RoundStatus::Lost);
        assert_eq!(game.wrong_guesses(), MAX_TRIES);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn lost_round_is_frozen() {
        let mut game = game_with("apple");
        for letter in ['z', 'q', 'x', 'd', 't', 'w'] {
            game.make_guess(letter).unwrap();
        }

        let snapshot = game.clone();
        game.make_guess('a').unwrap();
        game.make_guess('b').unwrap();
        assert_eq!(game, snapshot);
    }

    #[test]
    fn won_round_is_frozen() {
        let mut game = game_with("apple");
        for letter in ['a', 'p', 'l', 'e'] {
            game.make_guess(letter).unwrap();
        }
        assert!(game.is_game_won());

        let snapshot = game.clone();
        game.make_guess('z').unwrap();
        assert_eq!(game, snapshot);
    }

    #[test]
    fn finished_round_still_rejects_non_alphabetic() {
        let mut game = game_with("apple");
        for letter in ['a', 'p', 'l', 'e'] {
            game.make_guess(letter).unwrap();
        }

        assert_eq!(game.make_guess('!'), Err(NonAlphabeticInput('!')));
    }

    #[test]
    fn reset_starts_a_fresh_round() {
        let mut game = game_with("apple");
        game.make_guess('a').unwrap();
        game.make_guess('z').unwrap();

        game.reset(&[Word::new("grape").unwrap()]).unwrap();

        assert_eq!(game.secret_word(), "grape");
        assert!(game.guessed_letters().is_empty());
        assert_eq!(game.wrong_guesses(), 0);
        assert_eq!(game.score(), MAX_SCORE);
        assert_eq!(game.status(), RoundStatus::InProgress);
    }

    #[test]
    fn apple_scenario() {
        let mut game = game_with("apple");

        game.make_guess('a').unwrap();
        assert_eq!(game.current_state(), "a____");
        assert_eq!(game.wrong_guesses(), 0);
        assert_eq!(game.score(), 120);

        game.make_guess('z').unwrap();
        assert_eq!(game.wrong_guesses(), 1);
        assert_eq!(game.score(), 100);

        game.make_guess('z').unwrap();
        assert_eq!(game.wrong_guesses(), 1);
        assert_eq!(game.score(), 100);

        for letter in ['p', 'l', 'e'] {
            game.make_guess(letter).unwrap();
        }
        assert_eq!(game.current_state(), "apple");
        assert!(game.is_game_won());
    }

    #[test]
    fn score_formula_holds_through_a_round() {
        let mut game = game_with("apple");

        for letter in ['z', 'a', 'q', 'p', 'x', 'd', 'l'] {
            game.make_guess(letter).unwrap();
            assert_eq!(
                game.score(),
                MAX_SCORE.saturating_sub(ERROR_PENALTY_SCORE * game.wrong_guesses())
            );
        }
    }
}
