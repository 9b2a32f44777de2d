//! Bandadle - CLI
//!
//! Daily before-&-after word puzzle with TUI and line modes.

use anyhow::{Context, Result};
use bandadle::{
    commands::{SubmitTarget, list_dates, print_dates, run_check, run_reset, run_simple, run_submit},
    config::{Config, Overrides},
    interactive::{App, run_tui},
    puzzles::parse_puzzle_date,
    storage::{intro_seen, restore_or_initialize},
};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "bandadle",
    about = "Daily before & after word puzzle",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Play (or export for) this date instead of today, as YYYY-MM-DD
    #[arg(short, long, global = true)]
    date: Option<String>,

    /// Puzzle dataset JSON file (default: bundled puzzles)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Directory for saved progress and logs
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-by-line game without TUI
    Simple,

    /// List the available puzzle dates
    Dates,

    /// Check every puzzle in the dataset against the authoring rules
    Check,

    /// Validate a puzzle draft and export it as JSON
    Submit {
        /// Draft JSON file with title, questions, answers and extraWords
        draft: PathBuf,

        /// Write the exported puzzle to this file instead of stdout
        #[arg(short, long, conflicts_with = "into")]
        output: Option<PathBuf>,

        /// Add the exported puzzle to this dataset file
        #[arg(long)]
        into: Option<PathBuf>,
    },

    /// Forget saved progress
    Reset,
}

/// Log to stderr, or to a file while the TUI owns the terminal
fn init_logging(verbose: bool, log_file: Option<&Path>) {
    let default_filter = if verbose { "debug" } else { "warn" };

    let writer = log_file
        .and_then(|path| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .ok()
        })
        .map_or_else(
            || BoxMakeWriter::new(io::stderr),
            |file| BoxMakeWriter::new(Mutex::new(file)),
        );

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(log_file.is_none()),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env(Overrides {
        date: cli.date,
        data: cli.data,
        state_dir: cli.state_dir,
    })?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let log_file = matches!(command, Commands::Play).then(|| config.log_path());
    if log_file.is_some() {
        // The log lives in the state directory
        config.open_store()?;
    }
    init_logging(cli.verbose, log_file.as_deref());

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Dates => {
            let dataset = config.load_dataset()?;
            print_dates(&list_dates(&dataset, Config::today()));
            Ok(())
        }
        Commands::Check => run_check(&config.load_dataset()?),
        Commands::Submit {
            draft,
            output,
            into,
        } => run_submit_command(&config, &draft, output.as_deref(), into.as_deref()),
        Commands::Reset => run_reset(&mut config.open_store()?),
    }
}

fn run_play_command(config: &Config) -> Result<()> {
    let dataset = config.load_dataset()?;
    let mut store = config.open_store()?;
    let today = Config::today();

    let startup = restore_or_initialize(&store, &dataset, today, config.date.as_deref());
    let show_intro = config.date.is_some() || !intro_seen(&store, today);
    if !startup.resumed {
        bandadle::storage::persist(&mut store, &startup.session);
    }

    let app = App::new(startup.session, store, show_intro, Utc::now());
    run_tui(app)
}

fn run_simple_command(config: &Config) -> Result<()> {
    let dataset = config.load_dataset()?;
    let mut store = config.open_store()?;
    let today = Config::today();

    let startup = restore_or_initialize(&store, &dataset, today, config.date.as_deref());
    if startup.resumed {
        println!("Resuming today's puzzle.");
    }
    let mut session = startup.session;
    run_simple(&mut session, &mut store)
}

fn run_submit_command(
    config: &Config,
    draft: &Path,
    output: Option<&Path>,
    into: Option<&Path>,
) -> Result<()> {
    let date = match config.date.as_deref() {
        Some(text) => parse_puzzle_date(text)
            .with_context(|| format!("Invalid date {text:?}, expected YYYY-MM-DD"))?,
        None => Config::today(),
    };

    let target = match (output, into) {
        (Some(path), _) => SubmitTarget::File(path),
        (None, Some(path)) => SubmitTarget::Dataset(path),
        (None, None) => SubmitTarget::Stdout,
    };
    run_submit(draft, date, target)
}
