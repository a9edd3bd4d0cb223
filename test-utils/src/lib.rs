//! Voicecast Test Utils
//!
//! Shared testing utilities for the voicecast crate. Discord model types from
//! Serenity cannot be constructed directly because most of their fields are
//! private or non-exhaustive, so the factories here build them by deserializing
//! JSON shaped like a Discord API payload.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_guild, create_test_voice_channel};
//!
//! #[tokio::test]
//! async fn converts_cached_channel() {
//!     let guild = create_test_guild(1400425075240472596, "Test Guild");
//!     let channel = create_test_voice_channel(1400430839397093386, guild.id.get(), "Lounge");
//!     // Use in your tests...
//! }
//! ```

pub mod serenity;
