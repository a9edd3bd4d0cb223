//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON,
//! simulating what Discord's REST API or gateway would deliver. They panic on
//! invalid JSON since that indicates broken test data rather than a failure of
//! the code under test.
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Create Serenity Guild objects
//! - `channel::create_test_channel` - Create Serenity GuildChannel objects of any kind
//! - `channel::create_test_voice_channel` - Shorthand for a voice channel
//! - `channel::create_test_private_channel` - Create Serenity PrivateChannel objects

pub mod channel;
pub mod guild;

pub use channel::{create_test_channel, create_test_private_channel, create_test_voice_channel};
pub use guild::create_test_guild;
