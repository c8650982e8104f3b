//! Console session: prompts, input validation and the replay loop.
//!
//! [`Console`] drives a [`Game`] from any [`BufRead`] and reports every card,
//! the running totals and the outcome of each round to any [`Write`]. The
//! binary wires it to stdin and stdout; tests feed it scripted input.

use std::io::{self, BufRead, Write};

use rand::Rng;
use thiserror::Error;

use crate::card::Card;
use crate::error::{ActionError, DealError, ReshuffleError, ShowdownError};
use crate::game::{Game, GameState};
use crate::result::{Outcome, RoundResult};

const BANNER: &str = "
                                BLACKJACK
                                =========

How to play
-----------
1. Type H to hit or S to stand when asked for your move.
2. Cards are shown as two characters, rank then suit: JS is the Jack of
   Spades, TH the Ten of Hearts, 5C the Five of Clubs.
3. The dealer draws until reaching 17 or more.
4. Ties go to you.
";

/// A player decision during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

impl Decision {
    /// Parses `H` or `S` (any case, surrounding whitespace ignored).
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("h") {
            Some(Self::Hit)
        } else if input.eq_ignore_ascii_case("s") {
            Some(Self::Stand)
        } else {
            None
        }
    }
}

/// Parses the answer to "play again?": `Y` or `N`, any case.
#[must_use]
pub fn parse_replay(input: &str) -> Option<bool> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("y") {
        Some(true)
    } else if input.eq_ignore_ascii_case("n") {
        Some(false)
    } else {
        None
    }
}

/// Errors that end a console session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] io::Error),
    /// Input ended while the player still had to decide.
    #[error("input closed before the round finished")]
    InputClosed,
    /// The deck could not be reshuffled.
    #[error(transparent)]
    Reshuffle(#[from] ReshuffleError),
    /// The initial deal failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// Dealer play or showdown failed.
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
}

/// Tally of the rounds played in one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Rounds played to completion.
    pub rounds: u32,
    /// Rounds the player won.
    pub wins: u32,
    /// Rounds the player lost.
    pub losses: u32,
}

impl SessionSummary {
    fn record(&mut self, result: &RoundResult) {
        self.rounds += 1;
        match result.outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
        }
    }
}

/// Text front end for a [`Game`].
#[derive(Debug)]
pub struct Console<I, O> {
    input: I,
    output: O,
    banner: bool,
}

impl<I: BufRead, O: Write> Console<I, O> {
    /// Creates a console reading decisions from `input` and writing the table
    /// to `output`. The instructions banner is shown by default.
    pub const fn new(input: I, output: O) -> Self {
        Self {
            input,
            output,
            banner: true,
        }
    }

    /// Sets whether [`run`](Self::run) starts with the instructions banner.
    #[must_use]
    pub fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }

    /// Returns the underlying input and output.
    pub fn into_inner(self) -> (I, O) {
        (self.input, self.output)
    }

    /// Plays rounds until the player declines another one.
    ///
    /// End of input at the replay prompt counts as declining.
    ///
    /// # Errors
    ///
    /// Returns an error if input ends during the player's turn, the console
    /// cannot be read or written, or the game reports an error (such as an
    /// exhausted deck), which aborts the session.
    pub fn run<R: Rng>(&mut self, game: &mut Game<R>) -> Result<SessionSummary, SessionError> {
        if self.banner {
            writeln!(self.output, "{BANNER}")?;
        }

        let mut summary = SessionSummary::default();
        loop {
            let result = self.play_round(game)?;
            summary.record(&result);

            if !self.prompt_replay()? {
                break;
            }
        }
        game.clear_round();

        writeln!(
            self.output,
            "\nRounds played: {} (won {}, lost {})",
            summary.rounds, summary.wins, summary.losses
        )?;
        self.output.flush()?;
        Ok(summary)
    }

    /// Plays a single round on a freshly shuffled deck and reports its outcome.
    ///
    /// # Errors
    ///
    /// See [`run`](Self::run).
    pub fn play_round<R: Rng>(&mut self, game: &mut Game<R>) -> Result<RoundResult, SessionError> {
        game.start_round()?;
        game.deal()?;

        writeln!(self.output, "\nDealing...")?;
        writeln!(
            self.output,
            "Dealer: {}\tPlayer: {}",
            format_cards(game.dealer_hand().cards()),
            format_cards(game.player_hand().cards())
        )?;
        self.print_totals(game)?;

        loop {
            let Some(decision) = self.prompt_decision()? else {
                return Err(SessionError::InputClosed);
            };

            match decision {
                Decision::Hit => {
                    let card = game.hit()?;
                    writeln!(self.output, "\nDrawn: {card}")?;
                    self.print_totals(game)?;

                    if game.state() == GameState::Resolved {
                        writeln!(self.output, "You went over 21!")?;
                        break;
                    }
                }
                Decision::Stand => {
                    game.stand()?;
                    break;
                }
            }
        }

        if game.state() == GameState::DealerTurn {
            writeln!(self.output, "\nDealer drawing...")?;
            for card in game.dealer_play()? {
                writeln!(self.output, "Drawn: {card}")?;
            }
            self.print_totals(game)?;

            if game.dealer_hand().is_bust() {
                writeln!(self.output, "Dealer went over 21!")?;
            }
        }

        let result = game.showdown()?;
        match result.outcome {
            Outcome::Win => writeln!(self.output, "\n*** You win! ***")?,
            Outcome::Lose => writeln!(self.output, "\n*** You lose! Better luck next time. ***")?,
        }
        Ok(result)
    }

    fn print_totals<R: Rng>(&mut self, game: &Game<R>) -> io::Result<()> {
        writeln!(
            self.output,
            "Totals  Dealer: {}\tPlayer: {}",
            game.dealer_hand().value(),
            game.player_hand().value()
        )
    }

    /// Prints `prompt` and reads one trimmed line, or `None` at end of input.
    fn read_token(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    fn prompt_decision(&mut self) -> io::Result<Option<Decision>> {
        loop {
            let Some(token) = self.read_token("Enter your move: Hit (H) or Stand (S)? ")? else {
                return Ok(None);
            };
            if let Some(decision) = Decision::parse(&token) {
                return Ok(Some(decision));
            }
            log::debug!("rejected move {token:?}");
        }
    }

    fn prompt_replay(&mut self) -> io::Result<bool> {
        loop {
            let Some(token) = self.read_token("\nPlay another round? (Y/N) ")? else {
                return Ok(false);
            };
            if let Some(again) = parse_replay(&token) {
                return Ok(again);
            }
            log::debug!("rejected replay answer {token:?}");
        }
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decisions_are_case_insensitive() {
        assert_eq!(Decision::parse("h"), Some(Decision::Hit));
        assert_eq!(Decision::parse("H"), Some(Decision::Hit));
        assert_eq!(Decision::parse(" s\n"), Some(Decision::Stand));
        assert_eq!(Decision::parse("S"), Some(Decision::Stand));
    }

    #[test]
    fn other_moves_are_rejected() {
        assert_eq!(Decision::parse(""), None);
        assert_eq!(Decision::parse("hit"), None);
        assert_eq!(Decision::parse("x"), None);
        assert_eq!(Decision::parse("y"), None);
    }

    #[test]
    fn replay_answers() {
        assert_eq!(parse_replay("y"), Some(true));
        assert_eq!(parse_replay("Y"), Some(true));
        assert_eq!(parse_replay("n"), Some(false));
        assert_eq!(parse_replay("N "), Some(false));
        assert_eq!(parse_replay("yes"), None);
        assert_eq!(parse_replay("h"), None);
    }

    #[test]
    fn cards_are_space_separated() {
        let cards = ["AS", "TD"].map(|code| code.parse::<Card>().unwrap());
        assert_eq!(format_cards(&cards), "AS TD");
        assert_eq!(format_cards(&[]), "");
    }
}
