//! Voice transport and audio source collaborators.
//!
//! The orchestrator in `service::voice` only sees the traits defined here.
//! Production implementations live in `call` (songbird) and `transcoder`
//! (an `ffmpeg` child process).
//!
//! # Notification
//!
//! Each connection exposes a `Notify` that it fires whenever its readiness or
//! playback state may have changed. Waiters still re-sample the predicates on a
//! fixed interval, so a missed notification only delays detection by one tick.

pub mod call;
pub mod transcoder;

use serenity::async_trait;
use std::sync::Arc;
use tokio::sync::Notify;

use crate::server::{
    error::voice::SourceError,
    model::{discord::VoiceTarget, playback::AudioOptions},
};

pub use call::{SongbirdConnection, SongbirdGateway};
pub use transcoder::{AudioSource, FfmpegTranscoder};

/// Opens voice connections.
#[async_trait]
pub trait VoiceGateway: Send + Sync {
    type Connection: VoiceConnection;

    /// Joins the target channel.
    ///
    /// Returning `Ok` does not mean audio can be sent yet; the transport
    /// handshake may still be running. See [`VoiceConnection::is_ready`].
    async fn connect(&self, target: &VoiceTarget) -> Result<Self::Connection, SourceError>;

    /// Drops whatever voice state the gateway still holds for a guild.
    ///
    /// Used after a failed connect, when no connection value exists to disconnect.
    async fn release(&self, guild_id: u64) -> Result<(), SourceError>;
}

/// A live voice connection owned by exactly one playback request.
#[async_trait]
pub trait VoiceConnection: Send + Sync {
    /// Handle fired when readiness or playback state may have changed.
    fn signal(&self) -> Arc<Notify>;

    /// Samples whether the transport handshake has completed.
    async fn is_ready(&self) -> bool;

    /// Starts streaming the source. Returns as soon as playback has been handed to the driver.
    async fn play(&mut self, source: AudioSource) -> Result<(), SourceError>;

    /// Samples whether audio is currently being streamed.
    async fn is_playing(&self) -> bool;

    /// Leaves the channel and releases any audio source still attached.
    ///
    /// Consumes the connection so it cannot be disconnected twice.
    async fn disconnect(self) -> Result<(), SourceError>;
}

/// Opens audio sources for playback.
#[async_trait]
pub trait PlaybackEngine: Send + Sync {
    async fn open(&self, filename: &str, options: &AudioOptions) -> Result<AudioSource, SourceError>;
}
