//! `ffmpeg` transcoding pipeline.
//!
//! Each audio source is an `ffmpeg` child process that reads the input file or
//! URL and writes Ogg Opus at 48 kHz stereo to its stdout, which is the format
//! the voice driver can pass through without re-encoding.

use serenity::async_trait;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use super::PlaybackEngine;
use crate::server::{error::voice::SourceError, model::playback::AudioOptions};

/// An opened transcoding pipeline.
///
/// The child process is killed and reaped when the source is dropped without
/// having been handed to a voice connection.
#[derive(Debug)]
pub struct AudioSource {
    filename: String,
    child: Option<Child>,
}

impl AudioSource {
    pub fn new(filename: impl Into<String>, child: Child) -> Self {
        Self {
            filename: filename.into(),
            child: Some(child),
        }
    }

    /// A source without a backing process, for connections that do not stream real audio.
    #[cfg(test)]
    pub fn detached(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            child: None,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Hands ownership of the transcoder process to the caller.
    ///
    /// # Returns
    /// - `Some(Child)` - The running transcoder
    /// - `None` - The process was already taken or never existed
    pub fn take_child(&mut self) -> Option<Child> {
        self.child.take()
    }
}

impl Drop for AudioSource {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Err(e) = child.kill() {
                tracing::debug!("Transcoder for '{}' already exited: {}", self.filename, e);
            }
            if let Err(e) = child.wait() {
                tracing::warn!("Failed to reap transcoder for '{}': {}", self.filename, e);
            }
        }
    }
}

/// Playback engine that spawns `ffmpeg` for each source.
#[derive(Debug, Clone)]
pub struct FfmpegTranscoder {
    binary: PathBuf,
}

impl FfmpegTranscoder {
    pub fn new(binary: impl AsRef<Path>) -> Self {
        Self {
            binary: binary.as_ref().to_path_buf(),
        }
    }

    /// Builds the ffmpeg argument list for an input.
    ///
    /// Reconnect options are HTTP protocol options, so they are only emitted for
    /// `http://` and `https://` inputs.
    pub fn args(filename: &str, options: &AudioOptions) -> Vec<String> {
        let mut args = Vec::new();

        if let Some(reconnect) = options.reconnect.filter(|_| is_network_input(filename)) {
            args.extend(["-reconnect".to_string(), "1".to_string()]);
            if reconnect.streamed {
                args.extend(["-reconnect_streamed".to_string(), "1".to_string()]);
            }
            args.extend([
                "-reconnect_delay_max".to_string(),
                reconnect.delay_max.as_secs().to_string(),
            ]);
        }

        args.extend(["-i".to_string(), filename.to_string()]);
        args.extend(
            [
                "-map_metadata",
                "-1",
                "-vn",
                "-c:a",
                "libopus",
                "-ar",
                "48000",
                "-ac",
                "2",
                "-b:a",
            ]
            .map(String::from),
        );
        args.push(format!("{}k", options.bitrate_kbps));
        args.extend(["-f", "opus", "-loglevel", "warning", "pipe:1"].map(String::from));

        args
    }
}

#[async_trait]
impl PlaybackEngine for FfmpegTranscoder {
    async fn open(&self, filename: &str, options: &AudioOptions) -> Result<AudioSource, SourceError> {
        let args = Self::args(filename, options);
        tracing::debug!("Spawning {:?} {}", self.binary, args.join(" "));

        let child = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| format!("Failed to spawn {:?}: {}", self.binary, e))?;

        Ok(AudioSource::new(filename, child))
    }
}

fn is_network_input(filename: &str) -> bool {
    filename.starts_with("http://") || filename.starts_with("https://")
}
