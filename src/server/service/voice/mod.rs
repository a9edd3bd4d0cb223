//! Voice session orchestration.
//!
//! `VoicePlaybackService` plays one file into one voice channel by running a
//! fixed pipeline of stages:
//!
//! 1. **Resolve** (`resolver`) - cache lookup, REST fallback, channel kind check
//! 2. **Bind** (`binder`) - backfill the channel's guild when it is missing
//! 3. **Connect** - join the channel through the `VoiceGateway`
//! 4. **Await ready** (`readiness`) - bounded wait for the transport handshake
//! 5. **Play** (`playback`) - open the audio source and wait for the stream to end
//! 6. **Teardown** (`teardown`) - disconnect exactly once
//!
//! Stages run strictly in order and the first failure skips to teardown.
//! Failures before connect leave nothing to tear down. From connect on, every
//! path ends with exactly one teardown call before the result is returned.
//!
//! Collaborators are injected, so the same pipeline runs against Serenity and
//! songbird in the binary and against in-memory fakes in tests.

pub mod binder;
pub mod playback;
pub mod readiness;
pub mod resolver;
pub mod teardown;

use std::time::Duration;

use crate::server::{
    data::discord::ChannelDirectory,
    error::voice::VoiceError,
    model::{
        discord::VoiceTarget,
        playback::{PlaybackOutcome, PlaybackRequest, PlaybackTimings},
        session::{SessionState, SessionTracker},
    },
    voice::{PlaybackEngine, VoiceGateway},
};

use self::{binder::GuildBinder, resolver::ChannelResolver};

/// Service playing audio files into Discord voice channels.
///
/// Holds references to its collaborators; one instance can serve any number of
/// sequential requests, but requests must not overlap on the same guild.
pub struct VoicePlaybackService<'a, D, G, E> {
    /// Channel and guild lookups
    directory: &'a D,
    /// Voice connections
    gateway: &'a G,
    /// Audio sources
    engine: &'a E,
    timings: PlaybackTimings,
}

impl<'a, D, G, E> VoicePlaybackService<'a, D, G, E>
where
    D: ChannelDirectory,
    G: VoiceGateway,
    E: PlaybackEngine,
{
    /// Creates a new VoicePlaybackService instance.
    ///
    /// # Arguments
    /// - `directory` - Channel and guild lookups
    /// - `gateway` - Opens voice connections
    /// - `engine` - Opens audio sources
    /// - `timings` - Readiness timeout, poll interval, and end-of-stream debounce
    pub fn new(directory: &'a D, gateway: &'a G, engine: &'a E, timings: PlaybackTimings) -> Self {
        Self {
            directory,
            gateway,
            engine,
            timings,
        }
    }

    /// Plays the requested file into the requested channel and waits until it ends.
    ///
    /// Errors are logged here before being returned; callers may ignore them.
    ///
    /// # Arguments
    /// - `request` - Target guild and channel, file, and encoding options
    ///
    /// # Returns
    /// - `Ok(PlaybackOutcome)` - Stream played to the end and the session was torn down
    /// - `Err(VoiceError)` - The stage that failed; any session was torn down first
    pub async fn play(&self, request: &PlaybackRequest) -> Result<PlaybackOutcome, VoiceError> {
        tracing::info!(
            "Looking up channel: guild_id={}, channel_id={}",
            request.guild_id,
            request.channel_id
        );

        let result = self.run(request).await;

        match &result {
            Ok(outcome) => {
                tracing::info!(
                    "Finished playing '{}' in {} after {:.1}s",
                    request.filename,
                    outcome.target.channel,
                    outcome.played_for.as_secs_f64()
                );
                tracing::debug!("Voice session states: {:?}", outcome.states);
            }
            Err(e) if e.is_resolution_error() => {
                tracing::error!("Voice playback failed before connecting: {}", e)
            }
            Err(e) => tracing::error!("Voice playback failed: {}", e),
        }

        result
    }

    async fn run(&self, request: &PlaybackRequest) -> Result<PlaybackOutcome, VoiceError> {
        let channel = ChannelResolver::new(self.directory)
            .resolve(request.channel_id)
            .await?;
        let target = GuildBinder::new(self.directory)
            .bind(channel, request.guild_id)
            .await?;

        tracing::info!(
            "Channel ready: {}, guild: {}",
            target.channel,
            target.guild.name
        );

        let mut tracker = SessionTracker::new(target.channel.id);
        tracker.advance(SessionState::Connecting);

        let mut connection = match self.gateway.connect(&target).await {
            Ok(connection) => connection,
            Err(source) => {
                tracker.advance(SessionState::Failed);
                teardown::abandon(self.gateway, target.guild.id).await;
                return Err(VoiceError::ConnectError {
                    channel_id: target.channel.id,
                    source,
                });
            }
        };
        tracker.advance(SessionState::AwaitingReady);
        tracing::info!("Connected to {}, waiting for voice to become ready", target.channel);

        let result = self
            .stream(&mut connection, &target, request, &mut tracker)
            .await;

        teardown::disconnect(connection, &mut tracker).await;
        if result.is_err() {
            tracing::debug!("Voice session states: {:?}", tracker.history());
        }

        result.map(|played_for| PlaybackOutcome {
            target,
            played_for,
            states: tracker.into_history(),
        })
    }

    /// Runs the stages between connect and teardown.
    async fn stream(
        &self,
        connection: &mut G::Connection,
        target: &VoiceTarget,
        request: &PlaybackRequest,
        tracker: &mut SessionTracker,
    ) -> Result<Duration, VoiceError> {
        let Some(waited) = readiness::wait_until_ready(connection, &self.timings).await else {
            tracker.advance(SessionState::Failed);
            return Err(VoiceError::VoiceReadyTimeout {
                channel_id: target.channel.id,
                timeout: self.timings.ready_timeout,
            });
        };
        tracker.advance(SessionState::Ready);
        tracing::info!("Voice connection ready after {}ms", waited.as_millis());

        if let Err(e) = playback::start(connection, self.engine, request).await {
            tracker.advance(SessionState::Failed);
            return Err(e);
        }
        tracker.advance(SessionState::Playing);

        Ok(playback::wait_until_finished(connection, &self.timings).await)
    }
}

#[cfg(test)]
mod test;
