//! Discord data access.
//!
//! The voice orchestrator never talks to Serenity directly. It reads channels and
//! guilds through the `ChannelDirectory` trait, which treats the in-memory cache
//! as advisory and the REST API as authoritative.

pub mod discord;
