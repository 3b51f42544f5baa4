//! Animus CLI - interactive terminal session with the companion service.
//!
//! This crate is the *composition root*: it loads configuration, wires the
//! sync client, subscribes to its event bus, and hands control to the REPL.

mod repl;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use animus_client::{ClientConfig, StateEvent, StateSyncClient};

/// Creates a cancellation token and spawns a task that cancels it on SIGTERM/SIGINT
fn setup_shutdown_signal(cancel_token: CancellationToken) {
    tokio::spawn(async move {
        let ctrl_c = async {
            tokio::signal::ctrl_c()
                .await
                .expect("failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("failed to install signal handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                tracing::info!("Received Ctrl+C, shutting down...");
            }
            _ = terminate => {
                tracing::info!("Received SIGTERM, shutting down...");
            }
        }

        cancel_token.cancel();
    });
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "animus_cli=info,animus_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env()?;
    tracing::info!("Starting Animus CLI");
    tracing::info!("  Service: {}", config.base_url);
    tracing::info!("  Poll interval: {}ms", config.poll_interval.as_millis());

    let cancel_token = CancellationToken::new();
    setup_shutdown_signal(cancel_token.clone());

    let client = StateSyncClient::new(config);

    // Surface state transitions in the logs; the REPL prints replies itself.
    client
        .events()
        .subscribe(|event| match event {
            StateEvent::EmotionChanged(emotion) => {
                tracing::debug!("Emotion changed: {}", emotion.summary());
            }
            StateEvent::AvatarChanged(avatar) => {
                tracing::debug!("Avatar changed: {}", avatar.summary());
            }
            StateEvent::ResponseReceived(text) => {
                tracing::debug!("Response received ({} chars)", text.len());
            }
        })
        .await;

    client.start();

    repl::run(&client, cancel_token).await?;

    client.shutdown();
    tracing::info!("Goodbye");
    Ok(())
}
