//! Discord bot client carrying the voice session.
//!
//! The bot connects to the gateway, keeps the Serenity cache the channel
//! directory reads from, and hosts the songbird manager that voice
//! connections are opened through. It does not react to any guild events
//! beyond `ready`; playback is driven by the binary once the bot is connected.
//!
//! The client runs in a separate tokio task so the binary can wait for
//! readiness and drive playback while the gateway connection stays alive.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Populate the cache with guilds and their channels
//! - `GUILD_VOICE_STATES` - Receive the voice state and server updates songbird
//!   needs to complete a voice connection

pub mod handler;
pub mod start;
