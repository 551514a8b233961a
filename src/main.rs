use clap::Parser;
use cligames::app::App;
use cligames::config::GameConfig;
use cligames::game::RandomCoin;
use cligames::{logging, Result};
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(name = "cligames", version, about = "Terminal game menu with an animated coin flip")]
struct Cli {
    /// Path to a TOML configuration file
    #[clap(long, short)]
    config: Option<PathBuf>,

    /// Start the coin flip with auto-replay turned off
    #[clap(long)]
    no_auto_replay: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[clap(long)]
    log_level: Option<String>,

    /// Seed the coin for a reproducible sequence of flips
    #[clap(long)]
    seed: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load_from(path)?,
        None => GameConfig::load()?,
    };
    if cli.no_auto_replay {
        config.auto_replay = false;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    config.validate()?;

    // The UI owns the terminal, so a missing log file only costs us the logs
    if let Err(e) = logging::log_file_path()
        .and_then(|path| logging::init(&path, config.level_filter()?))
    {
        eprintln!("Warning: {}", e);
    }
    info!("starting with {:?}", config);

    let coin = match cli.seed {
        Some(seed) => RandomCoin::seeded(seed),
        None => RandomCoin::new(),
    };

    let mut app = App::new(config, Box::new(coin))?;
    app.init()?;
    app.run_and_restore().await
}
