use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use war_cards::shared::{DEFAULT_LEADERBOARD_PATH, DEFAULT_PACE_MS};
use war_cards::{run_terminal, AppConfig, AppError};

/// War against the computer, with power cards, chip betting and high scores.
#[derive(Parser, Debug)]
#[command(name = "war-cards", version, about)]
struct Args {
    /// Leaderboard JSON file
    #[arg(long, env = "WAR_CARDS_LEADERBOARD", default_value = DEFAULT_LEADERBOARD_PATH)]
    leaderboard: PathBuf,

    /// Seed for a reproducible shuffle
    #[arg(long)]
    seed: Option<u64>,

    /// Delay between revealed lines in milliseconds (0 disables)
    #[arg(long, default_value_t = DEFAULT_PACE_MS)]
    pace_ms: u64,
}

impl From<Args> for AppConfig {
    fn from(args: Args) -> Self {
        Self {
            leaderboard_path: args.leaderboard,
            seed: args.seed,
            pace: Duration::from_millis(args.pace_ms),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    // Logs go to stderr so they never interleave with the game on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "war_cards=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::from(Args::parse());
    info!(?config, "Starting War");

    // The game blocks on stdin, so it runs off the runtime thread while the
    // runtime waits for Ctrl-C.
    let mut game = tokio::task::spawn_blocking(move || run_terminal(config));

    tokio::select! {
        joined = &mut game => {
            let exit = joined.map_err(|e| AppError::Internal(e.to_string()))??;
            info!(?exit, "Game closed");
            Ok(())
        }
        Ok(()) = tokio::signal::ctrl_c() => {
            println!("\nGame interrupted. Goodbye!");
            // The blocking reader cannot be cancelled, so leave without waiting for it.
            std::process::exit(0);
        }
    }
}
