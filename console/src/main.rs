mod config;
mod game_runner;
mod prompt;
mod render;

use clap::Parser;
use tictactoe_common::games::SessionRng;
use tictactoe_common::{log, logger};

use config::{Config, get_config_manager};
use game_runner::GameRunner;

#[derive(Parser)]
#[command(
    name = "tictactoe",
    about = "Tic-tac-toe in the terminal against a friend or an unbeatable computer"
)]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<String>,

    /// Seed for the computer's tie-breaking
    #[arg(long)]
    seed: Option<u64>,

    /// Print diagnostic log lines to stderr
    #[arg(long)]
    verbose: bool,

    /// Tag log lines with the configured prefix, or "TicTacToe"
    #[arg(long)]
    use_log_prefix: bool,

    /// Write the default config file and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config_manager = get_config_manager(args.config.as_deref());

    if args.init_config {
        config_manager.set_config(&Config::default())?;
        println!("Default config written.");
        return Ok(());
    }

    let (config, config_error) = match config_manager.get_config() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let prefix = if args.use_log_prefix {
        Some(config.logging.prefix.clone().unwrap_or_else(|| "TicTacToe".to_string()))
    } else {
        config.logging.prefix.clone()
    };
    logger::init_logger(prefix, args.verbose || config.logging.enabled);

    if let Some(e) = config_error {
        eprintln!("Ignoring config: {}", e);
    }

    let rng = match args.seed.or(config.rng_seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session rng seed: {}", rng.seed());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut runner = GameRunner::new(stdin.lock(), stdout.lock(), rng, config.show_cell_numbers);
    match runner.run()? {
        Some(status) => log!("Game finished: {:?}", status),
        None => log!("Input closed before the game finished"),
    }

    Ok(())
}
