//! Discord channel references used to target a voice connection.
//!
//! A `ChannelRef` is materialized either from Serenity's in-memory cache, which
//! is populated lazily from gateway events and may lack the owning guild, or
//! from the REST API. A `VoiceTarget` is a channel whose kind has been checked
//! and whose guild has been resolved, and is the only thing a voice connection
//! can be opened against.

use serenity::all::{ChannelType, GuildChannel};
use std::fmt;

use super::GuildRef;

/// Kind of a Discord channel as far as voice playback is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    /// Regular guild voice channel.
    Voice,
    /// Stage channel.
    StageVoice,
    /// Any other channel type, carrying Discord's numeric type.
    Other(u8),
}

impl ChannelKind {
    /// Returns true if a voice connection can be opened in channels of this kind.
    pub fn is_voice_capable(self) -> bool {
        matches!(self, Self::Voice | Self::StageVoice)
    }
}

impl From<ChannelType> for ChannelKind {
    fn from(kind: ChannelType) -> Self {
        match kind {
            ChannelType::Voice => Self::Voice,
            ChannelType::Stage => Self::StageVoice,
            other => Self::Other(u8::from(other)),
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Voice => write!(f, "voice"),
            Self::StageVoice => write!(f, "stage-voice"),
            Self::Other(kind) => write!(f, "other({})", kind),
        }
    }
}

/// A Discord channel as seen by the voice orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelRef {
    /// Discord channel ID as a u64.
    pub id: u64,
    /// Channel display name.
    pub name: String,
    /// Channel kind.
    pub kind: ChannelKind,
    /// Guild ID reported alongside the channel, if any.
    pub guild_id: Option<u64>,
    /// Owning guild, present only when it could be resolved together with the channel.
    pub guild: Option<GuildRef>,
}

impl ChannelRef {
    /// Builds a channel reference from a Serenity guild channel.
    ///
    /// # Arguments
    /// - `channel` - Guild channel from the cache or the REST API
    /// - `guild` - Owning guild if it is already known, `None` to leave it for backfill
    pub fn from_guild_channel(channel: &GuildChannel, guild: Option<GuildRef>) -> Self {
        Self {
            id: channel.id.get(),
            name: channel.name.clone(),
            kind: channel.kind.into(),
            guild_id: Some(channel.guild_id.get()),
            guild,
        }
    }

    /// Attaches the owning guild, replacing any previous one.
    pub fn with_guild(mut self, guild: GuildRef) -> Self {
        self.guild_id = Some(guild.id);
        self.guild = Some(guild);
        self
    }
}

impl fmt::Display for ChannelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// A voice-capable channel with its owning guild resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceTarget {
    pub channel: ChannelRef,
    pub guild: GuildRef,
}
