//! Hangman - CLI
//!
//! Classic hangman word-guessing game for the terminal. Plays with an
//! embedded word list by default; a custom list can be supplied with `-w`.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangman::{
    commands::run_play,
    core::Word,
    input::StdinReader,
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Classic hangman word-guessing game for the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play hangman in the terminal (default)
    Play,
}

/// Load the wordlist based on the -w flag
///
/// "embedded" uses the list compiled into the binary; anything else is
/// treated as a path to a custom list.
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<Word>> {
    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => {
            let words = load_from_file(path)?;
            anyhow::ensure!(!words.is_empty(), "wordlist {path} contains no usable words");
            Ok(words)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_wordlist(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let mut reader = StdinReader;
            run_play(&words, &mut reader).map_err(|e| anyhow::anyhow!(e))?;
        }
    }

    Ok(())
}
