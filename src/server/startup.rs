use std::sync::Arc;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tracing_subscriber::EnvFilter;

use crate::server::error::AppError;

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` and falls back to `info` when the variable
/// is unset or cannot be parsed.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Waits for the bot's `ready` event.
///
/// Returns early if the bot task ends first, since no `ready` event can follow.
///
/// # Arguments
/// - `ready` - Notified by the `ready` event handler
/// - `bot` - Task running the Discord client
///
/// # Returns
/// - `Ok(())` - The bot is connected to the gateway
/// - `Err(AppError)` - The bot stopped before connecting
pub async fn wait_for_bot(
    ready: &Arc<Notify>,
    bot: &mut JoinHandle<Result<(), AppError>>,
) -> Result<(), AppError> {
    tokio::select! {
        _ = ready.notified() => Ok(()),
        finished = bot => match finished {
            Ok(Ok(())) => Err(serenity::Error::Other("Discord bot stopped before it was ready").into()),
            Ok(Err(e)) => Err(e),
            Err(_) => Err(serenity::Error::Other("Discord bot task panicked").into()),
        },
    }
}
