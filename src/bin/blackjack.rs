//! Console blackjack against the dealer.
//!
//! Usage: blackjack [--seed <n>] [--no-banner] [-v...]

use std::io;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use bjconsole::Game;
use bjconsole::console::Console;
use clap::Parser;
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "blackjack")]
#[command(about = "Play blackjack against the dealer in the terminal")]
#[command(version)]
struct Args {
    /// Seed for the shuffle (defaults to the current time)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Do not print the instructions before the first round
    #[arg(long = "no-banner")]
    no_banner: bool,

    /// Log to stderr: -v info, -vv debug, -vvv trace (RUST_LOG overrides)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    let seed = args.seed.unwrap_or_else(time_seed);
    log::info!("shuffle seed {seed}");

    let mut game = Game::new(seed);
    let mut console = Console::new(io::stdin().lock(), io::stdout()).with_banner(!args.no_banner);

    match console.run(&mut game) {
        Ok(summary) => {
            log::info!(
                "session over after {} rounds ({} won)",
                summary.rounds,
                summary.wins
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("session aborted: {err}");
            eprintln!("blackjack: {err}");
            ExitCode::FAILURE
        }
    }
}
