//! Parsing of typed player input.

use crate::session::Action;

/// A parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A stimulus for the session.
    Action(Action),
    /// Start the story over.
    Restart,
    /// Show current luck.
    Luck,
    /// Show help.
    Help,
    /// Leave the game.
    Quit,
    /// Anything else.
    Unknown(String),
}

const CONTINUE_WORDS: &[&str] = &["", "c", "continue", "next", "n"];
const RESTART_WORDS: &[&str] = &["restart", "r", "again", "new"];
const LUCK_WORDS: &[&str] = &["luck", "l", "status"];
const HELP_WORDS: &[&str] = &["help", "h", "?"];
const QUIT_WORDS: &[&str] = &["quit", "q", "exit", "bye"];

/// Parse a line of player input.
///
/// Choices are typed as one-based numbers; a blank line continues.
pub fn parse_input(input: &str) -> Input {
    let word = input.trim().to_lowercase();

    if let Ok(number) = word.parse::<usize>() {
        return match number.checked_sub(1) {
            Some(index) => Input::Action(Action::Choose(index)),
            None => Input::Unknown(word),
        };
    }

    let word = word.as_str();
    if CONTINUE_WORDS.contains(&word) {
        Input::Action(Action::Continue)
    } else if RESTART_WORDS.contains(&word) {
        Input::Restart
    } else if LUCK_WORDS.contains(&word) {
        Input::Luck
    } else if HELP_WORDS.contains(&word) {
        Input::Help
    } else if QUIT_WORDS.contains(&word) {
        Input::Quit
    } else {
        Input::Unknown(input.trim().to_string())
    }
}
