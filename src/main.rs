use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use snake_game::audio::AudioSession;
use snake_game::config::AppConfig;
use snake_game::game::GameEngine;
use snake_game::logging;
use snake_game::modes::HumanMode;

#[derive(Parser)]
#[command(name = "snake_game")]
#[command(version, about = "Snake in the terminal")]
struct Cli {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board size (the board is N x N)
    #[arg(long)]
    grid_size: Option<usize>,

    /// Initial movement tick interval in milliseconds (lowers the speed
    /// floor to match when it is faster than the floor)
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Fastest movement tick interval in milliseconds
    #[arg(long)]
    min_tick_ms: Option<u64>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Looping soundtrack file
    #[arg(long)]
    track: Option<PathBuf>,

    /// Disable audio
    #[arg(long)]
    mute: bool,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn app_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        if let Some(grid_size) = self.grid_size {
            config.game.grid_size = grid_size;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.game.initial_tick_ms = tick_ms;
            if self.min_tick_ms.is_none() {
                config.game.min_tick_ms = config.game.min_tick_ms.min(tick_ms);
            }
        }
        if let Some(min_tick_ms) = self.min_tick_ms {
            config.game.min_tick_ms = min_tick_ms;
        }
        if let Some(track) = &self.track {
            config.audio.track = Some(track.clone());
        }
        if self.mute {
            config.audio.enabled = false;
        }

        // Checked once, after the overrides
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        logging::init_file_logging(path)?;
    }

    // Validate everything before the terminal is taken over
    let config = cli.app_config()?;
    tracing::info!(?config, "configuration loaded");

    let engine = match cli.seed {
        Some(seed) => GameEngine::with_seed(config.game.clone(), seed)?,
        None => GameEngine::new(config.game.clone())?,
    };
    let audio = AudioSession::from_config(&config.audio);

    let mut human_mode = HumanMode::new(engine, audio);
    human_mode.run().await?;

    Ok(())
}
