use crate::server::{
    data::discord::ChannelDirectory,
    error::voice::VoiceError,
    model::discord::{ChannelRef, VoiceTarget},
};

/// Ensures a resolved channel carries its owning guild.
///
/// Channels served from the cache can arrive before their guild does, and
/// channels fetched over REST never carry one. Voice connections are keyed by
/// guild, so the binder backfills it before anything tries to connect.
pub struct GuildBinder<'a, D> {
    directory: &'a D,
}

impl<'a, D: ChannelDirectory> GuildBinder<'a, D> {
    pub fn new(directory: &'a D) -> Self {
        Self { directory }
    }

    /// Binds the channel to its guild.
    ///
    /// If the channel already has a guild this is a no-op. Otherwise the guild
    /// is fetched once using the supplied `guild_id`.
    ///
    /// # Arguments
    /// - `channel` - Voice-capable channel, guild possibly missing
    /// - `guild_id` - Guild to fetch when the channel has none
    ///
    /// # Returns
    /// - `Ok(VoiceTarget)` - Channel with guild resolved
    /// - `Err(VoiceError::GuildFetchError)` - Guild fetch failed
    pub async fn bind(&self, channel: ChannelRef, guild_id: u64) -> Result<VoiceTarget, VoiceError> {
        if let Some(guild) = channel.guild.clone() {
            return Ok(VoiceTarget { channel, guild });
        }

        if let Some(hint) = channel.guild_id.filter(|hint| *hint != guild_id) {
            tracing::warn!(
                "Channel {} reports guild {} but guild {} was requested; using {}",
                channel,
                hint,
                guild_id,
                guild_id
            );
        }

        tracing::info!("Channel {} has no guild, fetching guild {}", channel, guild_id);
        let guild = self
            .directory
            .fetch_guild(guild_id)
            .await
            .map_err(|source| VoiceError::GuildFetchError { guild_id, source })?;
        tracing::info!("Guild set for channel {}: {}", channel, guild.name);

        let channel = channel.with_guild(guild.clone());
        Ok(VoiceTarget { channel, guild })
    }
}
