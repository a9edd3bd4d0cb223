use crate::server::{
    data::discord::ChannelDirectory,
    error::voice::VoiceError,
    model::discord::ChannelRef,
};

/// Resolves a channel ID to a voice-capable channel.
///
/// The cache is consulted first and is treated as advisory: a miss is not an
/// answer, it only means the gateway has not delivered the channel yet, so the
/// resolver falls back to a single REST fetch.
pub struct ChannelResolver<'a, D> {
    directory: &'a D,
}

impl<'a, D: ChannelDirectory> ChannelResolver<'a, D> {
    pub fn new(directory: &'a D) -> Self {
        Self { directory }
    }

    /// Resolves the channel and checks that a voice connection can be opened in it.
    ///
    /// # Arguments
    /// - `channel_id` - Discord channel ID to resolve
    ///
    /// # Returns
    /// - `Ok(ChannelRef)` - Voice or stage channel, guild possibly missing
    /// - `Err(VoiceError::ChannelNotFound)` - Discord does not know the channel
    /// - `Err(VoiceError::ChannelFetchError)` - REST fetch failed
    /// - `Err(VoiceError::InvalidChannelKind)` - Channel is not a voice channel
    pub async fn resolve(&self, channel_id: u64) -> Result<ChannelRef, VoiceError> {
        let channel = match self.directory.cached_channel(channel_id) {
            Some(channel) => {
                tracing::debug!("Channel {} found in cache", channel);
                channel
            }
            None => {
                tracing::info!("Channel {} not in cache, fetching from Discord", channel_id);
                let fetched = self
                    .directory
                    .fetch_channel(channel_id)
                    .await
                    .map_err(|source| VoiceError::ChannelFetchError { channel_id, source })?;

                let channel = fetched.ok_or(VoiceError::ChannelNotFound { channel_id })?;
                tracing::info!("Fetched channel {} (kind: {})", channel, channel.kind);
                channel
            }
        };

        if !channel.kind.is_voice_capable() {
            return Err(VoiceError::InvalidChannelKind {
                channel_id,
                kind: channel.kind,
            });
        }

        Ok(channel)
    }
}
