use serenity::all::{Client, GatewayIntents};
use songbird::{SerenityInit, Songbird};
use std::sync::Arc;
use tokio::sync::Notify;

use crate::server::{bot::handler::Handler, config::Config, error::AppError};

/// Builds the Discord client with songbird registered.
///
/// The client is not connected yet; pass it to [`start_bot`] from a spawned task.
/// `ready` is notified once the gateway handshake completes.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `ready` - Notified by the `ready` event handler
///
/// # Returns
/// - `Ok((Client, Arc<Songbird>))` - The client and the voice manager registered on it
/// - `Err(AppError)` - The client could not be built
pub async fn init_bot(
    config: &Config,
    ready: Arc<Notify>,
) -> Result<(Client, Arc<Songbird>), AppError> {
    // GUILD_VOICE_STATES drives songbird's connection handshake
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_VOICE_STATES;

    let manager = Songbird::serenity();

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(ready))
        .register_songbird_with(manager.clone())
        .await?;

    Ok((client, manager))
}

/// Runs the Discord client until its shards shut down.
///
/// This function blocks until the bot shuts down, so call it from within a
/// `tokio::spawn` task.
///
/// # Returns
/// - `Ok(())` - The shard manager was shut down
/// - `Err(AppError)` - The gateway connection failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
