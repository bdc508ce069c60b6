use std::path::PathBuf;

use clap::Parser;
use flagquiz::app::{App, Tui};
use flagquiz::config::QuizConfig;
use flagquiz::logging::init_logging;
use flagquiz::quiz::QuizSession;
use flagquiz::simple::run_plain;
use flagquiz::{error, Result};

/// Guess the flag: pick the right one of three, eight rounds per game
#[derive(Debug, Parser)]
#[command(name = "flagquiz", version, about)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for reproducible rounds
    #[arg(short, long)]
    seed: Option<u64>,

    /// Rounds per game
    #[arg(short, long)]
    rounds: Option<u32>,

    /// Line-based mode without the full-screen interface
    #[arg(long)]
    plain: bool,

    /// Mirror log output to stderr (plain mode only)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let _logging = init_logging(cli.plain && cli.verbose);

    if let Err(err) = run(cli) {
        tracing::error!(%err, "flagquiz exited with an error");
        eprintln!("{}", error::user_friendly_message(&err));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => QuizConfig::load_from(path)?,
        None => QuizConfig::load()?,
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(rounds) = cli.rounds {
        config = config.with_rounds_per_session(rounds);
    }
    config.validate()?;

    tracing::info!(
        seed = ?config.seed,
        rounds = config.rounds_per_session,
        plain = cli.plain,
        "starting flagquiz"
    );

    if cli.plain {
        let mut session = QuizSession::from_config(&config)?;
        let stdin = std::io::stdin();
        return run_plain(&mut session, stdin.lock(), std::io::stdout());
    }

    let mut app = App::new(&config)?;
    let mut tui = Tui::new()?;
    tui.init()?;
    let result = app.run(&mut tui);
    tui.restore()?;
    result
}
