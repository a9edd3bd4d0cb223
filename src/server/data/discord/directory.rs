use serenity::all::{Cache, Channel, ChannelId, GuildChannel, GuildId, Http};
use serenity::async_trait;
use std::sync::Arc;

use crate::server::{
    error::voice::SourceError,
    model::discord::{ChannelKind, ChannelRef, GuildRef},
};

/// Placeholder channel type for channel variants this crate does not know about.
const UNKNOWN_CHANNEL_TYPE: u8 = u8::MAX;

/// Read access to Discord channels and guilds.
///
/// The cache lookup is a non-blocking sample of whatever the gateway has
/// delivered so far and may miss channels that exist. The fetch methods hit the
/// REST API and are authoritative.
#[async_trait]
pub trait ChannelDirectory: Send + Sync {
    /// Looks the channel up in the local cache without blocking.
    ///
    /// # Returns
    /// - `Some(ChannelRef)` - Channel is cached; `guild` is set only if its guild is cached too
    /// - `None` - Channel is not cached (it may still exist)
    fn cached_channel(&self, channel_id: u64) -> Option<ChannelRef>;

    /// Fetches the channel from the Discord API.
    ///
    /// # Returns
    /// - `Ok(Some(ChannelRef))` - Channel exists; `guild` is never set
    /// - `Ok(None)` - Discord reported the channel as unknown
    /// - `Err(SourceError)` - Request failed
    async fn fetch_channel(&self, channel_id: u64) -> Result<Option<ChannelRef>, SourceError>;

    async fn fetch_guild(&self, guild_id: u64) -> Result<GuildRef, SourceError>;
}

/// `ChannelDirectory` backed by Serenity's cache and HTTP client.
#[derive(Clone)]
pub struct SerenityChannelDirectory {
    cache: Arc<Cache>,
    http: Arc<Http>,
}

impl SerenityChannelDirectory {
    pub fn new(cache: Arc<Cache>, http: Arc<Http>) -> Self {
        Self { cache, http }
    }
}

#[async_trait]
impl ChannelDirectory for SerenityChannelDirectory {
    fn cached_channel(&self, channel_id: u64) -> Option<ChannelRef> {
        // Clone out of the cache before looking up the guild so no two cache
        // guards are held at once.
        let channel: GuildChannel = self
            .cache
            .channel(ChannelId::new(channel_id))
            .map(|cached| GuildChannel::clone(&cached))?;

        let guild = self
            .cache
            .guild(channel.guild_id)
            .map(|cached| GuildRef::from(&*cached));

        Some(ChannelRef::from_guild_channel(&channel, guild))
    }

    async fn fetch_channel(&self, channel_id: u64) -> Result<Option<ChannelRef>, SourceError> {
        match self.http.get_channel(ChannelId::new(channel_id)).await {
            Ok(Channel::Guild(channel)) => Ok(Some(ChannelRef::from_guild_channel(&channel, None))),
            Ok(Channel::Private(channel)) => Ok(Some(ChannelRef {
                id: channel.id.get(),
                name: channel.name(),
                kind: channel.kind.into(),
                guild_id: None,
                guild: None,
            })),
            Ok(other) => Ok(Some(ChannelRef {
                id: other.id().get(),
                name: String::new(),
                kind: ChannelKind::Other(UNKNOWN_CHANNEL_TYPE),
                guild_id: None,
                guild: None,
            })),
            Err(e) if is_not_found(status_code(&e)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn fetch_guild(&self, guild_id: u64) -> Result<GuildRef, SourceError> {
        let guild = self.http.get_guild(GuildId::new(guild_id)).await?;

        Ok(GuildRef::from(guild))
    }
}

/// Maps the result of a REST channel fetch.
///
/// # Returns
/// - `Ok(Some(ChannelRef))` - Channel exists; `guild` is never set
/// - `Ok(None)` - Discord answered 404
/// - `Err(SourceError)` - Any other failure
pub(super) fn fetched_channel(
    result: Result<Channel, serenity::Error>,
) -> Result<Option<ChannelRef>, SourceError> {
    match result {
        Ok(channel) => Ok(Some(channel_ref(channel))),
        Err(e) if is_not_found(status_code(&e)) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Converts any channel returned by the REST API.
pub(super) fn channel_ref(channel: Channel) -> ChannelRef {
    match channel {
        Channel::Guild(channel) => ChannelRef::from_guild_channel(&channel, None),
        Channel::Private(channel) => ChannelRef {
            id: channel.id.get(),
            name: channel.name(),
            kind: channel.kind.into(),
            guild_id: None,
            guild: None,
        },
        other => ChannelRef {
            id: other.id().get(),
            name: String::new(),
            kind: ChannelKind::Other(UNKNOWN_CHANNEL_TYPE),
            guild_id: None,
            guild: None,
        },
    }
}

/// HTTP status Discord answered with, if the error came from a response.
fn status_code(err: &serenity::Error) -> Option<u16> {
    match err {
        serenity::Error::Http(http_err) => http_err.status_code().map(|status| status.as_u16()),
        _ => None,
    }
}

pub(super) fn is_not_found(status: Option<u16>) -> bool {
    status == Some(404)
}
