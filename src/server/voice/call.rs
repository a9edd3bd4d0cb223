//! Voice connections through songbird.

use serenity::all::{ChannelId, GuildId};
use serenity::async_trait;
use songbird::{
    error::JoinError,
    input::{AudioStream, ChildContainer, Input, LiveInput},
    tracks::{PlayMode, TrackHandle},
    Call, CoreEvent, Event, EventContext, EventHandler as VoiceEventHandler, Songbird, TrackEvent,
};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use symphonia::core::{
    io::{MediaSource, ReadOnlySource},
    probe::Hint,
};
use tokio::sync::{Mutex, Notify};

use super::{AudioSource, VoiceConnection, VoiceGateway};
use crate::server::{error::voice::SourceError, model::discord::VoiceTarget};

/// `VoiceGateway` backed by the songbird manager registered on the Serenity client.
#[derive(Clone)]
pub struct SongbirdGateway {
    manager: Arc<Songbird>,
}

impl SongbirdGateway {
    pub fn new(manager: Arc<Songbird>) -> Self {
        Self { manager }
    }
}

#[async_trait]
impl VoiceGateway for SongbirdGateway {
    type Connection = SongbirdConnection;

    async fn connect(&self, target: &VoiceTarget) -> Result<SongbirdConnection, SourceError> {
        let guild_id = GuildId::new(target.guild.id);
        let call = self
            .manager
            .join(guild_id, ChannelId::new(target.channel.id))
            .await?;

        let state = Arc::new(CallState::default());
        {
            let mut handler = call.lock().await;
            // Driver events from before this point are not replayed.
            state.set_connected(handler.current_connection().is_some());
            for event in [
                CoreEvent::DriverConnect,
                CoreEvent::DriverReconnect,
                CoreEvent::DriverDisconnect,
            ] {
                handler.add_global_event(
                    Event::Core(event),
                    UpdateOnEvent {
                        state: state.clone(),
                    },
                );
            }
        }

        Ok(SongbirdConnection {
            guild_id,
            manager: self.manager.clone(),
            call,
            state,
            track: None,
        })
    }

    async fn release(&self, guild_id: u64) -> Result<(), SourceError> {
        remove_call(&self.manager, GuildId::new(guild_id)).await
    }
}

/// A joined songbird call playing at most one track.
pub struct SongbirdConnection {
    guild_id: GuildId,
    manager: Arc<Songbird>,
    call: Arc<Mutex<Call>>,
    state: Arc<CallState>,
    track: Option<TrackHandle>,
}

#[async_trait]
impl VoiceConnection for SongbirdConnection {
    fn signal(&self) -> Arc<Notify> {
        self.state.signal.clone()
    }

    async fn is_ready(&self) -> bool {
        self.state.is_connected()
    }

    async fn play(&mut self, mut source: AudioSource) -> Result<(), SourceError> {
        let child = source
            .take_child()
            .ok_or_else(|| format!("Audio source '{}' has no transcoder", source.filename()))?;
        let input = ogg_input(ChildContainer::from(child));

        let handle = self.call.lock().await.play_input(input);
        for event in [TrackEvent::End, TrackEvent::Error] {
            handle.add_event(
                Event::Track(event),
                UpdateOnEvent {
                    state: self.state.clone(),
                },
            )?;
        }
        self.track = Some(handle);

        Ok(())
    }

    async fn is_playing(&self) -> bool {
        if self.state.is_finished() {
            return false;
        }

        let Some(track) = &self.track else {
            return false;
        };

        match track.get_info().await {
            Ok(state) => matches!(state.playing, PlayMode::Play),
            Err(_) => false,
        }
    }

    async fn disconnect(self) -> Result<(), SourceError> {
        if let Some(track) = &self.track {
            // The track may already have ended on its own.
            let _ = track.stop();
        }

        remove_call(&self.manager, self.guild_id).await
    }
}

/// Wraps transcoder output as a live input probed as Ogg.
fn ogg_input(container: ChildContainer) -> Input {
    let mut hint = Hint::new();
    hint.with_extension("ogg").mime_type("audio/ogg");

    let stream = AudioStream {
        input: Box::new(ReadOnlySource::new(container)) as Box<dyn MediaSource>,
        hint: Some(hint),
    };
    Input::Live(LiveInput::Raw(stream), None)
}

/// Leaves the guild's voice channel and drops its call, treating "no call" as success.
async fn remove_call(manager: &Songbird, guild_id: GuildId) -> Result<(), SourceError> {
    match manager.remove(guild_id).await {
        Ok(()) | Err(JoinError::NoCall) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Driver and track state of one call, updated from songbird events.
///
/// Every change fires `signal` so waiters re-sample immediately.
#[derive(Default)]
struct CallState {
    signal: Arc<Notify>,
    connected: AtomicBool,
    /// Set once the track ends or errors. Never cleared, since a connection plays one track.
    finished: AtomicBool,
}

impl CallState {
    fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
        self.signal.notify_waiters();
    }

    fn finish(&self) {
        self.finished.store(true, Ordering::SeqCst);
        self.signal.notify_waiters();
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    fn is_finished(&self) -> bool {
        self.finished.load(Ordering::SeqCst)
    }
}

struct UpdateOnEvent {
    state: Arc<CallState>,
}

#[async_trait]
impl VoiceEventHandler for UpdateOnEvent {
    async fn act(&self, ctx: &EventContext<'_>) -> Option<Event> {
        match ctx {
            EventContext::DriverConnect(_) | EventContext::DriverReconnect(_) => {
                tracing::debug!("Voice driver connected");
                self.state.set_connected(true);
            }
            EventContext::DriverDisconnect(data) => {
                tracing::debug!("Voice driver disconnected: {:?}", data.reason);
                self.state.set_connected(false);
            }
            EventContext::Track(tracks) => {
                for (state, _) in tracks.iter() {
                    tracing::debug!("Track event, play mode {:?}", state.playing);
                }
                self.state.finish();
            }
            _ => {}
        }

        None
    }
}
