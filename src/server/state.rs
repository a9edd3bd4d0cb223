//! Collaborators shared by playback requests.
//!
//! `AppState` is built once the Discord client exists and hands out
//! `VoicePlaybackService` instances borrowing its collaborators. Every field is
//! cheap to clone since it only holds reference-counted handles and a path.

use serenity::all::{Cache, Http};
use songbird::Songbird;
use std::sync::Arc;

use crate::server::{
    data::discord::SerenityChannelDirectory,
    model::playback::PlaybackTimings,
    service::voice::VoicePlaybackService,
    voice::{FfmpegTranscoder, SongbirdGateway},
};

#[derive(Clone)]
pub struct AppState {
    /// Channel lookups against the Serenity cache with REST fallback.
    pub directory: SerenityChannelDirectory,

    /// Voice connections through the songbird manager registered on the client.
    pub gateway: SongbirdGateway,

    /// Spawns ffmpeg to produce Ogg/Opus audio.
    pub transcoder: FfmpegTranscoder,
}

impl AppState {
    /// Creates a new application state from the Discord client's handles.
    ///
    /// # Arguments
    /// - `cache` - Serenity cache of the running client
    /// - `http` - Serenity REST client
    /// - `manager` - Songbird manager registered on the client
    /// - `ffmpeg_path` - Path or name of the ffmpeg binary
    pub fn new(
        cache: Arc<Cache>,
        http: Arc<Http>,
        manager: Arc<Songbird>,
        ffmpeg_path: &str,
    ) -> Self {
        Self {
            directory: SerenityChannelDirectory::new(cache, http),
            gateway: SongbirdGateway::new(manager),
            transcoder: FfmpegTranscoder::new(ffmpeg_path),
        }
    }

    /// Returns a playback service borrowing this state's collaborators.
    pub fn playback_service(
        &self,
        timings: PlaybackTimings,
    ) -> VoicePlaybackService<'_, SerenityChannelDirectory, SongbirdGateway, FfmpegTranscoder>
    {
        VoicePlaybackService::new(&self.directory, &self.gateway, &self.transcoder, timings)
    }
}
