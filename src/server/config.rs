use std::str::FromStr;
use std::time::Duration;

use crate::server::{
    error::{config::ConfigError, AppError},
    model::playback::{
        AudioOptions, PlaybackRequest, PlaybackTimings, ReconnectPolicy, DEFAULT_BITRATE_KBPS,
        DEFAULT_END_DEBOUNCE, DEFAULT_POLL_INTERVAL, DEFAULT_READY_TIMEOUT,
    },
};

const DEFAULT_FFMPEG_PATH: &str = "ffmpeg";

pub struct Config {
    pub discord_bot_token: String,

    pub guild_id: u64,
    pub channel_id: u64,

    pub audio_file: String,
    pub audio_bitrate: u32,
    pub audio_reconnect: bool,
    pub ffmpeg_path: String,

    pub ready_timeout: Duration,
    pub poll_interval: Duration,
    pub end_debounce: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Required variables fail with `MissingEnvVar` when absent or empty; optional
    /// ones fall back to their defaults when absent.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env { lookup };

        Ok(Self {
            discord_bot_token: env.required("DISCORD_BOT_TOKEN")?,
            guild_id: env.parse_required("VOICE_GUILD_ID")?,
            channel_id: env.parse_required("VOICE_CHANNEL_ID")?,
            audio_file: env.required("AUDIO_FILE")?,
            audio_bitrate: env.positive("AUDIO_BITRATE", DEFAULT_BITRATE_KBPS)?,
            audio_reconnect: env.flag("AUDIO_RECONNECT", true)?,
            ffmpeg_path: env
                .optional("FFMPEG_PATH")
                .unwrap_or_else(|| DEFAULT_FFMPEG_PATH.to_string()),
            ready_timeout: env.millis("VOICE_READY_TIMEOUT_MS", DEFAULT_READY_TIMEOUT)?,
            poll_interval: env.millis("VOICE_POLL_INTERVAL_MS", DEFAULT_POLL_INTERVAL)?,
            end_debounce: env.positive("PLAYBACK_END_SAMPLES", DEFAULT_END_DEBOUNCE)?,
        })
    }

    /// The playback request described by this configuration.
    pub fn playback_request(&self) -> PlaybackRequest {
        let options = AudioOptions {
            bitrate_kbps: self.audio_bitrate,
            reconnect: self.audio_reconnect.then(ReconnectPolicy::default),
        };

        PlaybackRequest::new(self.guild_id, self.channel_id, self.audio_file.clone())
            .with_options(options)
    }

    pub fn timings(&self) -> PlaybackTimings {
        PlaybackTimings {
            ready_timeout: self.ready_timeout,
            poll_interval: self.poll_interval,
            end_debounce: self.end_debounce,
        }
    }
}

struct Env<F> {
    lookup: F,
}

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn optional(&self, name: &str) -> Option<String> {
        (self.lookup)(name)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn required(&self, name: &str) -> Result<String, ConfigError> {
        self.optional(name)
            .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
    }

    fn parse_required<T>(&self, name: &str) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let value = self.required(name)?;
        parse(name, &value)
    }

    /// Parses an optional unsigned integer that must be at least 1.
    fn positive<T>(&self, name: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr + PartialEq + From<u8>,
        T::Err: std::fmt::Display,
    {
        let Some(value) = self.optional(name) else {
            return Ok(default);
        };

        let parsed: T = parse(name, &value)?;
        if parsed == T::from(0) {
            return Err(invalid(name, &value, "must be at least 1"));
        }

        Ok(parsed)
    }

    fn millis(&self, name: &str, default: Duration) -> Result<Duration, ConfigError> {
        let Some(value) = self.optional(name) else {
            return Ok(default);
        };

        let millis: u64 = parse(name, &value)?;
        if millis == 0 {
            return Err(invalid(name, &value, "duration must be greater than zero"));
        }

        Ok(Duration::from_millis(millis))
    }

    fn flag(&self, name: &str, default: bool) -> Result<bool, ConfigError> {
        let Some(value) = self.optional(name) else {
            return Ok(default);
        };

        match value.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(invalid(name, &value, "expected true or false")),
        }
    }
}

fn parse<T>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e: T::Err| invalid(name, value, &e.to_string()))
}

fn invalid(name: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
