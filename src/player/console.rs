use std::io::{BufRead, Write};

use alloc::string::{String, ToString};

use rand::RngCore;

use crate::card::Rank;
use crate::hand::Hand;

use super::RankSource;

/// Interactive rank source that reads a person's choices line by line.
///
/// Input that is not a rank, or names a rank the player does not hold, is
/// rejected and the prompt repeats.
///
/// # Panics
///
/// Reading past the end of the input, or any I/O error on either stream,
/// panics: the game cannot continue without its player.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given input and output streams.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks whether to play another game, repeating until the answer starts
    /// with `y` or `n`.
    ///
    /// # Panics
    ///
    /// Panics if the input is closed or either stream fails.
    pub fn ask_play_again(&mut self) -> bool {
        loop {
            let answer = self.prompt("Do you want to play again [Y/N]: ");
            match answer.chars().next().map(|c| c.to_ascii_uppercase()) {
                Some('Y') => return true,
                Some('N') => return false,
                _ => self.say("Invalid input"),
            }
        }
    }

    /// Consumes the console and returns its streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn say(&mut self, line: &str) {
        writeln!(self.output, "{line}").expect("failed to write to console");
    }

    fn prompt(&mut self, text: &str) -> String {
        write!(self.output, "{text}").expect("failed to write to console");
        self.output.flush().expect("failed to flush console");

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .expect("failed to read from console");
        assert!(read != 0, "console input closed");
        line.trim().to_string()
    }
}

impl<R: BufRead, W: Write> RankSource for Console<R, W> {
    fn request_rank(&mut self, hand: &Hand, _rng: &mut dyn RngCore) -> Option<Rank> {
        if hand.is_empty() {
            return None;
        }

        loop {
            let answer = self.prompt("What are you looking for? enter a Rank: ");
            match answer.parse::<Rank>() {
                Ok(rank) if hand.has_rank(rank) => return Some(rank),
                _ => self.say(&format!(
                    "Invalid choice '{answer}', enter a valid rank you have"
                )),
            }
        }
    }
}
