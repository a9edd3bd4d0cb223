//! Voice session error taxonomy.
//!
//! Every failure of a playback request maps to exactly one `VoiceError` variant.
//! Resolution-stage variants (`ChannelNotFound`, `InvalidChannelKind`,
//! `ChannelFetchError`, `GuildFetchError`) are raised before any voice session
//! exists. Post-connect variants (`ConnectError`, `VoiceReadyTimeout`,
//! `PlaybackError`) are only surfaced after teardown has run.

use std::time::Duration;
use thiserror::Error;

use crate::server::model::discord::ChannelKind;

/// Boxed error raised by an external collaborator (Discord REST, voice gateway, transcoder).
pub type SourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum VoiceError {
    /// Channel is neither cached nor known to the Discord API.
    #[error("Channel {channel_id} not found")]
    ChannelNotFound { channel_id: u64 },

    /// Channel exists but audio cannot be streamed into it.
    ///
    /// Only voice and stage channels accept a voice connection.
    #[error("Channel {channel_id} is not a voice channel (kind: {kind})")]
    InvalidChannelKind { channel_id: u64, kind: ChannelKind },

    /// Fetching the channel from the Discord API failed.
    #[error("Failed to fetch channel {channel_id}: {source}")]
    ChannelFetchError {
        channel_id: u64,
        #[source]
        source: SourceError,
    },

    /// Fetching the owning guild from the Discord API failed.
    ///
    /// Terminal for the request since a voice connection requires guild context.
    #[error("Failed to fetch guild {guild_id}: {source}")]
    GuildFetchError {
        guild_id: u64,
        #[source]
        source: SourceError,
    },

    /// Joining the voice channel failed.
    #[error("Failed to connect to voice channel {channel_id}: {source}")]
    ConnectError {
        channel_id: u64,
        #[source]
        source: SourceError,
    },

    /// Voice connection did not become ready within the deadline.
    #[error("Voice connection to channel {channel_id} not ready after {}ms", timeout.as_millis())]
    VoiceReadyTimeout { channel_id: u64, timeout: Duration },

    /// Opening the audio source or starting playback failed.
    #[error("Failed to play '{filename}': {source}")]
    PlaybackError {
        filename: String,
        #[source]
        source: SourceError,
    },
}

impl VoiceError {
    /// Returns true for errors raised before a voice session could exist.
    ///
    /// These require no teardown.
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            Self::ChannelNotFound { .. }
                | Self::InvalidChannelKind { .. }
                | Self::ChannelFetchError { .. }
                | Self::GuildFetchError { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests which errors are raised before a voice session exists.
    ///
    /// Expected: lookup failures are resolution errors, session failures are not
    #[test]
    fn classifies_resolution_errors() {
        let resolution = [
            VoiceError::ChannelNotFound { channel_id: 1 },
            VoiceError::InvalidChannelKind {
                channel_id: 1,
                kind: ChannelKind::Other(0),
            },
            VoiceError::ChannelFetchError {
                channel_id: 1,
                source: "503".into(),
            },
            VoiceError::GuildFetchError {
                guild_id: 2,
                source: "403".into(),
            },
        ];
        let session = [
            VoiceError::ConnectError {
                channel_id: 1,
                source: "timed out".into(),
            },
            VoiceError::VoiceReadyTimeout {
                channel_id: 1,
                timeout: Duration::from_secs(10),
            },
            VoiceError::PlaybackError {
                filename: "music.mp3".to_string(),
                source: "no such file".into(),
            },
        ];

        assert!(resolution.iter().all(VoiceError::is_resolution_error));
        assert!(!session.iter().any(VoiceError::is_resolution_error));
    }

    /// Tests the message of a readiness timeout.
    ///
    /// Expected: channel ID and timeout in milliseconds
    #[test]
    fn ready_timeout_message() {
        let err = VoiceError::VoiceReadyTimeout {
            channel_id: 42,
            timeout: Duration::from_millis(2500),
        };

        assert_eq!(
            err.to_string(),
            "Voice connection to channel 42 not ready after 2500ms"
        );
    }
}
