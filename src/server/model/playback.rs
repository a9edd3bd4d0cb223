//! Playback request parameters and results.

use std::time::Duration;

use crate::server::model::{discord::VoiceTarget, session::SessionState};

/// Default Opus bitrate in kbps.
pub const DEFAULT_BITRATE_KBPS: u32 = 128;

/// Default upper bound for the transcoder's reconnect back-off.
pub const DEFAULT_RECONNECT_DELAY_MAX: Duration = Duration::from_secs(5);

/// Default bound on waiting for a voice connection to become ready.
pub const DEFAULT_READY_TIMEOUT: Duration = Duration::from_secs(10);

/// Default interval between readiness and playback samples.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Default number of consecutive idle samples that mark the end of a stream.
pub const DEFAULT_END_DEBOUNCE: u32 = 3;

/// How the transcoder should recover from dropped network input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconnectPolicy {
    /// Also reconnect streamed (non-seekable) inputs.
    pub streamed: bool,
    /// Maximum delay between reconnect attempts.
    pub delay_max: Duration,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self {
            streamed: true,
            delay_max: DEFAULT_RECONNECT_DELAY_MAX,
        }
    }
}

/// Encoding options for an audio source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioOptions {
    /// Target Opus bitrate in kbps.
    pub bitrate_kbps: u32,
    /// Reconnect policy, `None` to let the input fail on the first network error.
    pub reconnect: Option<ReconnectPolicy>,
}

impl Default for AudioOptions {
    fn default() -> Self {
        Self {
            bitrate_kbps: DEFAULT_BITRATE_KBPS,
            reconnect: Some(ReconnectPolicy::default()),
        }
    }
}

/// A single request to play one file into one voice channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackRequest {
    /// Guild used to backfill the channel's guild when the cache lacks it.
    pub guild_id: u64,
    /// Voice or stage channel to join.
    pub channel_id: u64,
    /// File path or URL handed to the transcoder.
    pub filename: String,
    pub options: AudioOptions,
}

impl PlaybackRequest {
    pub fn new(guild_id: u64, channel_id: u64, filename: impl Into<String>) -> Self {
        Self {
            guild_id,
            channel_id,
            filename: filename.into(),
            options: AudioOptions::default(),
        }
    }

    pub fn with_options(mut self, options: AudioOptions) -> Self {
        self.options = options;
        self
    }
}

/// Timing contract of the readiness gate and the playback driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackTimings {
    /// Bound on waiting for the voice connection to become ready.
    pub ready_timeout: Duration,
    /// Interval between samples of the readiness and playback predicates.
    pub poll_interval: Duration,
    /// Consecutive "not playing" samples required before playback counts as finished.
    pub end_debounce: u32,
}

impl Default for PlaybackTimings {
    fn default() -> Self {
        Self {
            ready_timeout: DEFAULT_READY_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            end_debounce: DEFAULT_END_DEBOUNCE,
        }
    }
}

/// Result of a playback request that streamed to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackOutcome {
    pub target: VoiceTarget,
    /// Time from the start of playback until the stream was detected as finished.
    pub played_for: Duration,
    /// Every state the voice session passed through, in order.
    pub states: Vec<SessionState>,
}
