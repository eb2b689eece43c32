use clap::Parser;
use std::io::{self, BufRead, IsTerminal};
use std::process::ExitCode;
use thirteen_rs::deck::seeded_hand;
use thirteen_rs::hand::{Hand, HandError};
use thirteen_rs::search::{SearchError, SearchOptions, Solver, Strategy};

/// Finds the strongest split of 13 cards into top (3), middle (5) and bottom (5)
/// with bottom >= middle >= top.
///
/// Cards are rank + suit, e.g. AH TD 7c. Without CARDS, lines are read from
/// stdin and joined.
#[derive(Parser, Debug)]
#[command(name = "thirteen", version)]
struct Cli {
    /// Spread the search over all cores (needs the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    /// Deal a reproducible random hand from this seed
    #[arg(long, value_name = "SEED", conflicts_with = "cards")]
    random: Option<u64>,

    /// Thirteen cards, as separate arguments or quoted groups
    cards: Vec<String>,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("could not read stdin: {0}")]
    Io(#[from] io::Error),
    #[error("invalid hand: {0}")]
    Input(#[from] HandError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Search(_) => 2,
            _ => 1,
        }
    }
}

fn read_hand(cli: &Cli) -> Result<Hand, CliError> {
    if let Some(seed) = cli.random {
        return Ok(seeded_hand(seed));
    }
    if !cli.cards.is_empty() {
        return Ok(Hand::from_parts(cli.cards.iter().map(String::as_str))?);
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("enter 13 cards (one or two lines), then EOF:");
    }
    let lines = stdin.lock().lines().collect::<Result<Vec<_>, _>>()?;
    Ok(Hand::from_parts(lines.iter().map(String::as_str))?)
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let hand = read_hand(cli)?;
    log::info!("hand: {hand}");

    let strategy = if cli.parallel { Strategy::Parallel } else { Strategy::Sequential };
    let solver = Solver::new(SearchOptions::default().with_strategy(strategy));
    let best = solver.solve(&hand)?;
    println!("{best}");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Usage errors share exit code 1 with bad cards; 2 stays reserved for the search.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() { ExitCode::from(1) } else { ExitCode::SUCCESS };
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
