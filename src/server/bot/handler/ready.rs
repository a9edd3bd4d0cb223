//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. Playback
//! must not start before this point since voice connections are negotiated
//! over the same gateway.

use serenity::all::{Context, Ready};
use tokio::sync::Notify;

/// Handles the ready event when the bot connects to Discord.
///
/// The event fires again after a session is re-established; the stored permit
/// makes repeated notifications harmless.
///
/// # Arguments
/// - `signal` - Notification the binary waits on before starting playback
/// - `ctx` - Discord context, unused
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(signal: &Notify, _ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    signal.notify_one();
}
