//! Voice playback backend.
//!
//! This module contains everything needed to join a Discord voice channel and
//! stream an audio file into it. Serenity provides the gateway, REST client and
//! cache, songbird provides the voice transport, and ffmpeg transcodes the file
//! to Ogg/Opus.
//!
//! # Architecture
//!
//! The backend follows a layered architecture with clear separation of concerns:
//!
//! - **Service Layer** (`service/`) - Orchestrates a playback request from channel lookup to teardown
//! - **Data Layer** (`data/`) - Channel and guild lookups against the Discord cache and REST API
//! - **Voice Layer** (`voice/`) - Voice connections and transcoded audio sources
//! - **Model Layer** (`model/`) - Domain models, request parameters, and the session lifecycle
//! - **Error Layer** (`error/`) - Application and voice error types
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Collaborators shared by playback requests
//! - **Startup** (`startup`) - Logging setup and waiting for the bot to connect
//! - **Bot** (`bot/`) - Discord client construction and event handlers
//!
//! # Request Flow
//!
//! A playback request flows through these stages:
//!
//! 1. **Data** resolves the channel from the cache, falling back to REST
//! 2. **Data** backfills the channel's guild when the cache lacks it
//! 3. **Voice** joins the channel and the service waits for the connection to become ready
//! 4. **Voice** spawns the transcoder and hands its output to the call
//! 5. **Service** waits for the stream to end and disconnects

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod state;
pub mod voice;
