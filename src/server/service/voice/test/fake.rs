//! In-memory collaborators that count every call made to them.

use serenity::async_trait;
use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::time::Duration;
use tokio::sync::Notify;
use tokio::time::Instant;

use crate::server::{
    data::discord::ChannelDirectory,
    error::voice::SourceError,
    model::{
        discord::{ChannelKind, ChannelRef, GuildRef, VoiceTarget},
        playback::AudioOptions,
    },
    voice::{AudioSource, PlaybackEngine, VoiceConnection, VoiceGateway},
};

pub const GUILD_ID: u64 = 1400425075240472596;
pub const CHANNEL_ID: u64 = 1400430839397093386;

pub fn guild() -> GuildRef {
    GuildRef::new(GUILD_ID, "Test Guild")
}

pub fn voice_channel(guild: Option<GuildRef>) -> ChannelRef {
    ChannelRef {
        id: CHANNEL_ID,
        name: "Lounge".to_string(),
        kind: ChannelKind::Voice,
        guild_id: Some(GUILD_ID),
        guild,
    }
}

pub fn text_channel() -> ChannelRef {
    ChannelRef {
        kind: ChannelKind::Other(0),
        name: "general".to_string(),
        ..voice_channel(None)
    }
}

fn count(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}

#[derive(Default)]
pub struct FakeDirectory {
    cached: HashMap<u64, ChannelRef>,
    remote: HashMap<u64, ChannelRef>,
    guilds: HashMap<u64, GuildRef>,
    fail_channel_fetch: bool,
    fail_guild_fetch: bool,
    channel_fetches: AtomicUsize,
    guild_fetches: AtomicUsize,
}

impl FakeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cached(mut self, channel: ChannelRef) -> Self {
        self.cached.insert(channel.id, channel);
        self
    }

    pub fn remote(mut self, channel: ChannelRef) -> Self {
        self.remote.insert(channel.id, channel);
        self
    }

    pub fn guild(mut self, guild: GuildRef) -> Self {
        self.guilds.insert(guild.id, guild);
        self
    }

    pub fn failing_channel_fetch(mut self) -> Self {
        self.fail_channel_fetch = true;
        self
    }

    pub fn failing_guild_fetch(mut self) -> Self {
        self.fail_guild_fetch = true;
        self
    }

    pub fn channel_fetches(&self) -> usize {
        count(&self.channel_fetches)
    }

    pub fn guild_fetches(&self) -> usize {
        count(&self.guild_fetches)
    }
}

#[async_trait]
impl ChannelDirectory for FakeDirectory {
    fn cached_channel(&self, channel_id: u64) -> Option<ChannelRef> {
        self.cached.get(&channel_id).cloned()
    }

    async fn fetch_channel(&self, channel_id: u64) -> Result<Option<ChannelRef>, SourceError> {
        self.channel_fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_channel_fetch {
            return Err("503 Service Unavailable".into());
        }

        // REST responses never carry the guild object.
        Ok(self.remote.get(&channel_id).cloned().map(|channel| ChannelRef {
            guild: None,
            ..channel
        }))
    }

    async fn fetch_guild(&self, guild_id: u64) -> Result<GuildRef, SourceError> {
        self.guild_fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_guild_fetch {
            return Err("403 Missing Access".into());
        }

        self.guilds
            .get(&guild_id)
            .cloned()
            .ok_or_else(|| format!("404 Unknown Guild {}", guild_id).into())
    }
}

/// Calls made against a gateway and the connections it handed out.
#[derive(Default)]
pub struct CallLog {
    connects: AtomicUsize,
    releases: AtomicUsize,
    plays: AtomicUsize,
    disconnects: AtomicUsize,
}

impl CallLog {
    pub fn connects(&self) -> usize {
        count(&self.connects)
    }

    pub fn releases(&self) -> usize {
        count(&self.releases)
    }

    pub fn plays(&self) -> usize {
        count(&self.plays)
    }

    pub fn disconnects(&self) -> usize {
        count(&self.disconnects)
    }
}

/// Behaviour of the connections handed out by a `FakeGateway`.
#[derive(Clone)]
pub struct Script {
    /// Delay after connect until the connection reports ready, `None` for never.
    pub ready_after: Option<Duration>,
    /// How long a started stream reports playing.
    pub play_for: Duration,
    /// Windows `(offset, length)` after playback start during which the stream reports idle.
    pub stalls: Vec<(Duration, Duration)>,
    pub fail_connect: bool,
    pub fail_play: bool,
    pub fail_disconnect: bool,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            ready_after: Some(Duration::ZERO),
            play_for: Duration::from_secs(2),
            stalls: Vec::new(),
            fail_connect: false,
            fail_play: false,
            fail_disconnect: false,
        }
    }
}

pub struct FakeGateway {
    pub log: Arc<CallLog>,
    script: Script,
}

impl FakeGateway {
    pub fn new(script: Script) -> Self {
        Self {
            log: Arc::new(CallLog::default()),
            script,
        }
    }
}

#[async_trait]
impl VoiceGateway for FakeGateway {
    type Connection = FakeConnection;

    async fn connect(&self, _target: &VoiceTarget) -> Result<FakeConnection, SourceError> {
        self.log.connects.fetch_add(1, Ordering::SeqCst);
        if self.script.fail_connect {
            return Err("voice gateway timed out".into());
        }

        Ok(FakeConnection::new(self.log.clone(), self.script.clone()))
    }

    async fn release(&self, _guild_id: u64) -> Result<(), SourceError> {
        self.log.releases.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub struct FakeConnection {
    log: Arc<CallLog>,
    script: Script,
    connected_at: Instant,
    started_at: Option<Instant>,
    signal: Arc<Notify>,
}

impl FakeConnection {
    pub fn new(log: Arc<CallLog>, script: Script) -> Self {
        Self {
            log,
            script,
            connected_at: Instant::now(),
            started_at: None,
            signal: Arc::new(Notify::new()),
        }
    }
}

#[async_trait]
impl VoiceConnection for FakeConnection {
    fn signal(&self) -> Arc<Notify> {
        self.signal.clone()
    }

    async fn is_ready(&self) -> bool {
        self.script
            .ready_after
            .is_some_and(|delay| self.connected_at.elapsed() >= delay)
    }

    async fn play(&mut self, _source: AudioSource) -> Result<(), SourceError> {
        self.log.plays.fetch_add(1, Ordering::SeqCst);
        if self.script.fail_play {
            return Err("voice driver rejected track".into());
        }

        self.started_at = Some(Instant::now());
        Ok(())
    }

    async fn is_playing(&self) -> bool {
        let Some(started_at) = self.started_at else {
            return false;
        };

        let offset = started_at.elapsed();
        let stalled = self
            .script
            .stalls
            .iter()
            .any(|(from, length)| offset >= *from && offset < *from + *length);

        offset < self.script.play_for && !stalled
    }

    async fn disconnect(self) -> Result<(), SourceError> {
        self.log.disconnects.fetch_add(1, Ordering::SeqCst);
        if self.script.fail_disconnect {
            return Err("already disconnected".into());
        }

        Ok(())
    }
}

#[derive(Default)]
pub struct FakeEngine {
    fail: bool,
    opens: AtomicUsize,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn opens(&self) -> usize {
        count(&self.opens)
    }
}

#[async_trait]
impl PlaybackEngine for FakeEngine {
    async fn open(&self, filename: &str, _options: &AudioOptions) -> Result<AudioSource, SourceError> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(format!("{}: No such file or directory", filename).into());
        }

        Ok(AudioSource::detached(filename))
    }
}
