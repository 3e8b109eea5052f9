//! Coders of Catan session host.

use settlers_core::{Board, GameSession};
use settlers_host::{repl, HostConfig, SessionHandle};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = HostConfig::from_env()?;
    let mut rng = config.rng();

    info!(
        "Starting session for {} players (seed: {:?})",
        config.players, config.seed
    );

    let board = Board::standard_with_rng(&mut rng);
    let session = GameSession::with_board(board, config.game_config())?;
    let handle = SessionHandle::spawn(session, rng);

    repl::run(handle, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;
    Ok(())
}
