//! Console session tests.

use std::io::Cursor;

use bjconsole::console::{Console, SessionError, SessionSummary};
use bjconsole::{Game, GameState};
use rand::RngCore;

/// Always yields zero, so each shuffle rotates the deck right by one card.
///
/// From a fresh deck the first round deals AS to the dealer, 2C and 3C to the
/// player, then 4C, 5C, 6C... The next shuffle starts with KS, AS, 2C...
#[derive(Debug)]
struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}

fn run<R: rand::Rng>(
    game: &mut Game<R>,
    input: &str,
) -> (Result<SessionSummary, SessionError>, String) {
    let mut console =
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new()).with_banner(false);
    let result = console.run(game);
    let (_, output) = console.into_inner();
    (result, String::from_utf8(output).unwrap())
}

#[test]
fn no_ends_session_after_one_round() {
    let mut game = Game::new(10);
    let (result, output) = run(&mut game, "s\nn\n");

    let summary = result.unwrap();
    assert_eq!(summary.rounds, 1);
    assert_eq!(summary.wins + summary.losses, 1);
    assert_eq!(output.matches("*** You").count(), 1);
    assert_eq!(output.matches("Play another round?").count(), 1);
    assert_eq!(game.rounds_started(), 1);
    assert_eq!(game.state(), GameState::Waiting);
}

#[test]
fn yes_plays_another_round() {
    let mut game = Game::new(11);
    let (result, output) = run(&mut game, "S\nY\ns\nN\n");

    let summary = result.unwrap();
    assert_eq!(summary.rounds, 2);
    assert_eq!(output.matches("*** You").count(), 2);
    assert_eq!(output.matches("Dealing...").count(), 2);
    assert_eq!(game.rounds_started(), 2);
}

#[test]
fn invalid_input_is_prompted_again() {
    let mut game = Game::new(12);
    let (result, output) = run(&mut game, "x\nhit\n\ns\nmaybe\nyes\nn\n");

    assert_eq!(result.unwrap().rounds, 1);
    assert_eq!(output.matches("Enter your move").count(), 4);
    assert_eq!(output.matches("Play another round?").count(), 3);
}

#[test]
fn round_report_lists_every_card_and_total() {
    let mut game = Game::with_rng(ZeroRng);
    let (result, output) = run(&mut game, "h\ns\nn\n");

    let summary = result.unwrap();
    assert_eq!(summary.wins, 1);

    assert!(output.contains("Dealer: AS\tPlayer: 2C 3C"));
    assert!(output.contains("Totals  Dealer: 11\tPlayer: 5"));
    assert!(output.contains("Drawn: 4C"));
    assert!(output.contains("Totals  Dealer: 11\tPlayer: 9"));
    assert!(output.contains("Dealer drawing...\nDrawn: 5C\nDrawn: 6C\n"));
    assert!(output.contains("Totals  Dealer: 22\tPlayer: 9"));
    assert!(output.contains("Dealer went over 21!"));
    assert!(output.contains("*** You win! ***"));
    assert!(output.contains("Rounds played: 1 (won 1, lost 0)"));
}

#[test]
fn second_round_uses_a_reshuffled_deck() {
    let mut game = Game::with_rng(ZeroRng);
    let (result, output) = run(&mut game, "h\ns\ny\ns\nn\n");

    let summary = result.unwrap();
    assert_eq!(
        summary,
        SessionSummary {
            rounds: 2,
            wins: 1,
            losses: 1
        }
    );

    // KS(10) vs AS 2C (13); dealer draws 3C and 4C to stand on 17.
    assert!(output.contains("Dealer: KS\tPlayer: AS 2C"));
    assert!(output.contains("Drawn: 3C\nDrawn: 4C\n"));
    assert!(output.contains("Totals  Dealer: 17\tPlayer: 13"));
    assert!(output.contains("*** You lose!"));
}

#[test]
fn player_bust_skips_dealer_turn() {
    let mut game = Game::with_rng(ZeroRng);
    // 5 -> 9 -> 14 -> 20 -> 27
    let (result, output) = run(&mut game, "h\nh\nh\nh\nn\n");

    assert_eq!(result.unwrap().losses, 1);
    assert!(output.contains("Totals  Dealer: 11\tPlayer: 27"));
    assert!(output.contains("You went over 21!"));
    assert!(!output.contains("Dealer drawing..."));
}

#[test]
fn closed_input_during_turn_is_an_error() {
    let mut game = Game::new(13);
    let (result, _) = run(&mut game, "");
    assert!(matches!(result, Err(SessionError::InputClosed)));
}

#[test]
fn closed_input_at_replay_ends_session() {
    let mut game = Game::new(14);
    let (result, output) = run(&mut game, "s\n");
    assert_eq!(result.unwrap().rounds, 1);
    assert!(output.contains("Rounds played: 1"));
}

#[test]
fn banner_is_optional() {
    let input = "s\nn\n";

    let mut console = Console::new(Cursor::new(input), Vec::new());
    console.run(&mut Game::new(15)).unwrap();
    let (_, shown) = console.into_inner();
    assert!(String::from_utf8(shown).unwrap().contains("How to play"));

    let (_, hidden) = run(&mut Game::new(15), input);
    assert!(!hidden.contains("How to play"));
}
