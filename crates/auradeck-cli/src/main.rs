//! Auradeck binary
//!
//! Reads commands from stdin, one per line.

use std::sync::Arc;

use auradeck_cli::{App, AppConfig, InMemoryBackend, DEFAULT_LOG_FILTER, HELP};
use auradeck_deck::FixtureSource;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays clean for replies
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(layout = ?config.wizard.layout, threshold = config.deck.decision_threshold, "Starting Auradeck");

    let backend = Arc::new(InMemoryBackend::new());
    let mut app = App::new(config, &FixtureSource::bundled(), backend).await?;

    let mut stdout = tokio::io::stdout();
    stdout.write_all(format!("Auradeck\n{HELP}\n").as_bytes()).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let reply = app.handle_line(&line).await;
        for text in &reply.lines {
            stdout.write_all(text.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
        }
        stdout.flush().await?;
        if reply.quit {
            break;
        }
    }

    Ok(())
}
