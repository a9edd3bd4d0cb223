//! Test factory for creating Serenity GuildChannel objects.

use serenity::all::{GuildChannel, PrivateChannel};

/// Discord channel type number for a guild voice channel.
pub const VOICE: u8 = 2;
/// Discord channel type number for a stage channel.
pub const STAGE_VOICE: u8 = 13;
/// Discord channel type number for a guild text channel.
pub const TEXT: u8 = 0;
/// Discord channel type number for a direct message channel.
pub const DIRECT_MESSAGE: u8 = 1;

/// Creates a test Serenity GuildChannel of the given Discord channel type.
///
/// Voice-related fields (bitrate, user limit, RTC region) are always present;
/// Serenity ignores them for channel kinds that do not use them.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Discord guild ID owning the channel
/// - `name` - Channel name
/// - `kind` - Discord channel type number (see [`VOICE`], [`STAGE_VOICE`], [`TEXT`])
///
/// # Returns
/// - `GuildChannel` - A valid Serenity GuildChannel struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_channel(channel_id: u64, guild_id: u64, name: &str, kind: u8) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": kind,
        "name": name,
        "position": 0,
        "permission_overwrites": [],
        "nsfw": false,
        "parent_id": null,
        "bitrate": 64000,
        "user_limit": 0,
        "rtc_region": null,
        "rate_limit_per_user": 0,
        "last_message_id": null,
    }))
    .expect("Failed to create test channel - invalid JSON structure")
}

/// Creates a test Serenity GuildChannel of voice kind.
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::create_test_voice_channel;
///
/// let channel = create_test_voice_channel(222, 111, "Lounge");
/// assert_eq!(channel.guild_id.get(), 111);
/// ```
pub fn create_test_voice_channel(channel_id: u64, guild_id: u64, name: &str) -> GuildChannel {
    create_test_channel(channel_id, guild_id, name, VOICE)
}

/// Creates a test Serenity PrivateChannel with a single recipient.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `recipient_id` - Discord user ID of the other party
/// - `recipient_name` - Username of the other party
///
/// # Panics
/// - If the JSON cannot be deserialized into a PrivateChannel (indicates invalid test data)
pub fn create_test_private_channel(
    channel_id: u64,
    recipient_id: u64,
    recipient_name: &str,
) -> PrivateChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "type": DIRECT_MESSAGE,
        "last_message_id": null,
        "last_pin_timestamp": null,
        "recipients": [{
            "id": recipient_id.to_string(),
            "username": recipient_name,
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
            "bot": false,
        }],
    }))
    .expect("Failed to create test private channel - invalid JSON structure")
}
