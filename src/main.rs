//! Unscramble - CLI
//!
//! Word unscrambling game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use unscramble::{
    commands::{SimulationConfig, run_simple, run_simulation},
    game::{DEFAULT_MAX_ROUNDS, DEFAULT_SCORE_INCREASE, GameConfig, Session, WordCatalog},
    output::{print_simulation_result, simulation_progress},
    wordlists::loader::{default_catalog, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "unscramble",
    about = "Unscramble the letters to find the hidden word",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Words served per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ROUNDS)]
    rounds: usize,

    /// Points for each correct guess
    #[arg(long, global = true, default_value_t = DEFAULT_SCORE_INCREASE)]
    score_increase: u32,

    /// Wordlist: 'default' (embedded) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "default")]
    wordlist: String,

    /// Seed for reproducible games (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based prompts without TUI)
    Simple,

    /// Play automated sessions and report score statistics
    Simulate {
        /// Number of sessions to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Probability that the bot guesses a word instead of skipping it
        #[arg(short, long, default_value = "0.5")]
        accuracy: f64,
    },
}

/// Load the catalog selected by the -w flag
fn load_catalog(wordlist: &str) -> Result<WordCatalog> {
    match wordlist {
        "default" => default_catalog().context("embedded word list is invalid"),
        path => load_from_file(path).with_context(|| format!("failed to load word list '{path}'")),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let catalog = load_catalog(&cli.wordlist)?;
    let config = GameConfig::new(cli.rounds, cli.score_increase);
    config
        .validate(&catalog)
        .context("invalid game configuration")?;

    log::info!(
        "catalog of {} words, {} rounds, {} points per word",
        catalog.len(),
        config.max_rounds,
        config.score_increase
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&catalog, config, cli.seed),
        Commands::Simple => run_simple_command(&catalog, config, cli.seed),
        Commands::Simulate { count, accuracy } => {
            run_simulate_command(&catalog, config, cli.seed, count, accuracy)
        }
    }
}

fn run_play_command(catalog: &WordCatalog, config: GameConfig, seed: Option<u64>) -> Result<()> {
    use unscramble::interactive::{App, run_tui};

    let session = Session::new(catalog, config, make_rng(seed))?;
    run_tui(App::new(session))
}

fn run_simple_command(catalog: &WordCatalog, config: GameConfig, seed: Option<u64>) -> Result<()> {
    let mut session = Session::new(catalog, config, make_rng(seed))?;
    run_simple(&mut session)?;
    Ok(())
}

fn run_simulate_command(
    catalog: &WordCatalog,
    config: GameConfig,
    seed: Option<u64>,
    count: usize,
    accuracy: f64,
) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    let sim_config = SimulationConfig::new(count, accuracy, seed, config)?;
    println!("Simulating {count} sessions (seed {seed}, accuracy {accuracy:.2})...");

    let progress = simulation_progress(count);
    let result = run_simulation(catalog, &sim_config, &progress)?;

    print_simulation_result(&result);
    Ok(())
}
