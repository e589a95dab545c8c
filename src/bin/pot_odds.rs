use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::LevelFilter;
use pot_odds::odds::{Decision, OddsError};
use pot_odds::puzzle::{ConfigError, PuzzleConfig, PuzzleGenerator};
use pot_odds::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::path::PathBuf;
use std::time::Duration;

/// Texas Hold'em pot-odds trainer.
#[derive(Parser, Debug)]
#[command(name = "pot-odds", version, about)]
struct Args {
    /// Seed for reproducible puzzles.
    #[arg(long)]
    seed: Option<u64>,
    /// Deals to try before settling for an unconstrained one.
    #[arg(long, default_value_t = PuzzleConfig::default().max_attempts)]
    attempts: u32,
    /// Pot and bet are multiples of this amount.
    #[arg(long, default_value_t = PuzzleConfig::default().stake_step)]
    stake_step: u64,
    /// Largest pot or bet, in stake steps.
    #[arg(long, default_value_t = PuzzleConfig::default().stake_max_steps)]
    stake_steps: u64,
    /// Print one puzzle as text and exit.
    #[arg(long)]
    plain: bool,
    /// With --plain, judge this answer (call or fold).
    #[arg(long)]
    decision: Option<Decision>,
    /// Write logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Odds(#[from] OddsError),
    #[error("logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn init_logging(args: &Args, tui: bool) -> Result<(), CliError> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    match (&args.log_file, tui) {
        (Some(path), _) => {
            let file = std::fs::File::create(path)?;
            simplelog::WriteLogger::init(args.log_level, config, file)?;
        }
        // the TUI owns the terminal
        (None, true) => {}
        (None, false) => {
            simplelog::TermLogger::init(
                args.log_level,
                config,
                simplelog::TerminalMode::Stderr,
                simplelog::ColorChoice::Auto,
            )?;
        }
    }
    Ok(())
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn print_plain(mut generator: PuzzleGenerator, decision: Option<Decision>) -> Result<(), CliError> {
    let puzzle = generator.generate();
    println!("{}", puzzle.prompt());
    if !puzzle.constrained {
        println!("(no drawing spot found in {} deals)", puzzle.attempts);
    }
    if let Some(decision) = decision {
        let verdict = puzzle.judge(decision)?;
        println!();
        println!("Pot odds: {:.1}% ({:.2}:1)", verdict.pot_odds, verdict.pot_odds_ratio);
        println!("Odds against: {:.1}% ({} outs)", verdict.odds_against, verdict.outs);
        println!(
            "You chose {}; the right play is {}. {}",
            verdict.user,
            verdict.correct,
            if verdict.is_correct() { "Correct!" } else { "Incorrect." }
        );
        println!("{}", verdict.reasoning());
    }
    Ok(())
}

fn main() -> Result<(), CliError> {
    let args = Args::parse();
    let tui = !args.plain && io::stdout().is_terminal();
    init_logging(&args, tui)?;

    let config = PuzzleConfig {
        max_attempts: args.attempts,
        stake_step: args.stake_step,
        stake_max_steps: args.stake_steps,
    };
    config.validate()?;
    let generator = match args.seed {
        Some(seed) => PuzzleGenerator::seeded(config, seed),
        None => PuzzleGenerator::new(config),
    };
    log::info!("pot-odds {} starting", pot_odds::VERSION);

    if !tui {
        return print_plain(generator, args.decision);
    }

    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = AppState::new(generator);

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    log::info!("answered {} puzzles, {} correct", app.answered, app.correct);
    Ok(res?)
}
