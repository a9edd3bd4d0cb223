use std::time::Duration;
use tokio::time::Instant;

use crate::server::{
    error::voice::VoiceError,
    model::{
        discord::{ChannelKind, GuildRef, VoiceTarget},
        playback::{PlaybackRequest, PlaybackTimings},
        session::SessionState,
    },
    service::voice::{
        binder::GuildBinder, playback, readiness, resolver::ChannelResolver, VoicePlaybackService,
    },
    voice::{VoiceConnection, VoiceGateway},
};

use self::fake::{
    guild, text_channel, voice_channel, FakeConnection, FakeDirectory, FakeEngine, FakeGateway,
    Script, CHANNEL_ID, GUILD_ID,
};

mod fake;

fn request() -> PlaybackRequest {
    PlaybackRequest::new(GUILD_ID, CHANNEL_ID, "music.mp3")
}

fn target() -> VoiceTarget {
    VoiceTarget {
        channel: voice_channel(Some(guild())),
        guild: guild(),
    }
}
