//! Command-line front end for the grouping engine.
//!
//! Reads a roster, generates groups, prints them as plain text, and
//! optionally saves the result to a JSON history file.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use u_group::history::{HistoryStore, JsonFileHistoryStore};
use u_group::models::{PairHistory, Roster, RosterFormat};
use u_group::report::{render_partition, render_rounds, GroupingStats};
use u_group::search::RngSource;
use u_group::{GroupingConfig, GroupingResult, Grouper, ValidationLimits};

/// Fair group generator with repeat-aware search
#[derive(Parser)]
#[command(name = "u-group")]
#[command(about = "Splits a roster into groups while avoiding repeated pairings")]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate groups from a roster
    Generate(GenerateArgs),
    /// Inspect or reset a history file
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(ClapArgs)]
struct GenerateArgs {
    /// Roster file, one name per line ("-" or absent reads stdin)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Also split entries on commas and semicolons
    #[arg(long)]
    delimited: bool,

    /// JSON configuration file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Target group size
    #[arg(long)]
    group_size: Option<usize>,

    /// Candidates sampled per round
    #[arg(long)]
    iterations: Option<usize>,

    /// Minimum accepted iterations
    #[arg(long, default_value_t = u_group::config::DEFAULT_MIN_ITERATIONS)]
    min_iterations: usize,

    /// Fixed-size groups plus a remainder group instead of balanced sizes
    #[arg(long)]
    no_balance: bool,

    /// Skip history scoring and return one random split
    #[arg(long)]
    allow_repeats: bool,

    /// Number of rounds to generate
    #[arg(long)]
    rounds: Option<usize>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Pair history file
    #[arg(long)]
    history: Option<PathBuf>,

    /// Save the generated groups to the history file
    #[arg(long, requires = "history")]
    save: bool,
}

#[derive(Subcommand)]
enum HistoryAction {
    /// Print session count, pair count, and last save time
    Show {
        #[arg(long)]
        history: PathBuf,
    },
    /// Reset the history file
    Clear {
        #[arg(long)]
        history: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let result = match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::History { action } => run_history(action),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run_generate(args: GenerateArgs) -> GroupingResult<()> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| {
                u_group::GroupingError::Storage {
                    path: path.clone(),
                    source,
                }
            })?;
            GroupingConfig::from_json_str(&text)?
        }
        None => GroupingConfig::default(),
    };
    if let Some(group_size) = args.group_size {
        config.group_size = group_size;
    }
    if let Some(iterations) = args.iterations {
        config.iterations = iterations;
    }
    if let Some(rounds) = args.rounds {
        config.rounds = rounds;
    }
    if args.no_balance {
        config.balance = false;
    }
    if args.allow_repeats {
        config.avoid_repeats = false;
    }

    let text = read_roster(args.input.as_ref())?;
    let format = if args.delimited {
        RosterFormat::Delimited
    } else {
        RosterFormat::Lines
    };
    let roster = Roster::parse(&text, format);

    let mut store = args.history.as_ref().map(JsonFileHistoryStore::new);
    let history = store
        .as_ref()
        .map(|s| s.get().pairs)
        .unwrap_or_else(PairHistory::new);

    let grouper = Grouper::new(config.clone())
        .with_limits(ValidationLimits::default().with_min_iterations(args.min_iterations));
    let generation = match args.seed {
        Some(seed) => grouper.generate(&roster, &history, &mut RngSource::seeded(seed))?,
        None => grouper.generate(&roster, &history, &mut RngSource::from_entropy())?,
    };

    if !generation.duplicates.is_empty() {
        eprintln!("Duplicate names may limit future history: {}", generation.duplicates.join(", "));
    }

    if generation.rounds.len() == 1 {
        let round = &generation.rounds[0];
        println!("{}", render_partition(&round.partition));
        if let Some(score) = round.score {
            println!("\nRepeat score: {score}");
        }
    } else {
        println!("{}", render_rounds(&generation.rounds));
        let stats = GroupingStats::calculate(&generation.rounds, &generation.working_history);
        println!(
            "\nGroups: {}  Smallest group: {}  Repeats: {}",
            stats.group_count,
            stats.min_group_size.map_or_else(|| "-".to_string(), |s| s.to_string()),
            stats.repeat_count
        );
    }

    if args.save {
        // Saving is offered only for a single repeat-aware round.
        match (store.as_mut(), generation.partition()) {
            (Some(store), Some(partition)) if config.avoid_repeats && config.rounds == 1 => {
                let record = store.save(partition)?;
                eprintln!("Saved this round to history ({} sessions).", record.sessions);
            }
            _ => eprintln!("Not saved: saving requires repeat avoidance and a single round."),
        }
    }

    Ok(())
}

fn run_history(action: HistoryAction) -> GroupingResult<()> {
    match action {
        HistoryAction::Show { history } => {
            let record = JsonFileHistoryStore::new(history).get();
            println!("Sessions: {}", record.sessions);
            println!("Pairs: {}", record.pairs.distinct_pairs());
            println!(
                "Last saved: {}",
                record
                    .updated_at
                    .map_or_else(|| "Never".to_string(), |t| t.to_rfc3339())
            );
        }
        HistoryAction::Clear { history } => {
            JsonFileHistoryStore::new(history).clear()?;
            println!("History cleared.");
        }
    }
    Ok(())
}

fn read_roster(input: Option<&PathBuf>) -> GroupingResult<String> {
    let storage_error = |path: PathBuf| {
        move |source: io::Error| u_group::GroupingError::Storage { path, source }
    };
    match input {
        Some(path) if path.as_os_str() != "-" => {
            fs::read_to_string(path).map_err(storage_error(path.clone()))
        }
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(storage_error(PathBuf::from("<stdin>")))?;
            Ok(text)
        }
    }
}
