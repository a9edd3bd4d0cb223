use crate::server::{
    model::session::{SessionState, SessionTracker},
    voice::{VoiceConnection, VoiceGateway},
};

/// Disconnects a session that got past connect.
///
/// Consumes the connection, which releases any audio source still attached to
/// it. A failed disconnect is logged and swallowed since there is nothing left
/// to do but report the original outcome.
///
/// A session that already `Failed` stays in that state; the disconnect is
/// still issued.
pub async fn disconnect<C: VoiceConnection>(connection: C, tracker: &mut SessionTracker) {
    let failed = tracker.state().is_terminal();
    if !failed {
        tracker.advance(SessionState::Disconnecting);
    }

    match connection.disconnect().await {
        Ok(()) => {
            if !failed {
                tracker.advance(SessionState::Disconnected);
            }
            tracing::info!("Disconnected from voice channel");
        }
        Err(e) => {
            tracing::warn!("Failed to disconnect from voice channel: {}", e);
            if !failed {
                tracker.advance(SessionState::Failed);
            }
        }
    }
}

/// Releases gateway state left behind by a connect attempt that failed.
pub async fn abandon<G: VoiceGateway>(gateway: &G, guild_id: u64) {
    if let Err(e) = gateway.release(guild_id).await {
        tracing::warn!(
            "Failed to release voice state for guild {} after failed connect: {}",
            guild_id,
            e
        );
    }
}
