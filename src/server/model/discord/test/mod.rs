use serenity::all::ChannelType;
use test_utils::serenity::{channel, create_test_channel, create_test_guild, create_test_voice_channel};

use crate::server::model::discord::{ChannelKind, ChannelRef, GuildRef};

/// Tests converting a cached voice channel without its guild.
///
/// Verifies that the channel ID, name, and guild ID hint are carried over and
/// the guild itself is left for backfill.
///
/// Expected: voice kind, guild_id hint set, guild None
#[test]
fn converts_voice_channel_without_guild() {
    let channel = create_test_voice_channel(1400430839397093386, 1400425075240472596, "Lounge");

    let channel_ref = ChannelRef::from_guild_channel(&channel, None);

    assert_eq!(channel_ref.id, 1400430839397093386);
    assert_eq!(channel_ref.name, "Lounge");
    assert_eq!(channel_ref.kind, ChannelKind::Voice);
    assert_eq!(channel_ref.guild_id, Some(1400425075240472596));
    assert!(channel_ref.guild.is_none());
}

/// Tests converting a stage channel with its guild already cached.
///
/// Expected: stage-voice kind with guild attached
#[test]
fn converts_stage_channel_with_guild() {
    let guild = create_test_guild(111, "Test Guild");
    let channel = create_test_channel(222, 111, "Town Hall", channel::STAGE_VOICE);

    let channel_ref = ChannelRef::from_guild_channel(&channel, Some(GuildRef::from(&guild)));

    assert_eq!(channel_ref.kind, ChannelKind::StageVoice);
    assert_eq!(channel_ref.guild, Some(GuildRef::new(111, "Test Guild")));
}

/// Tests that text channels are not voice capable.
///
/// Expected: Other(0), not voice capable
#[test]
fn text_channel_is_not_voice_capable() {
    let channel = create_test_channel(222, 111, "general", channel::TEXT);

    let channel_ref = ChannelRef::from_guild_channel(&channel, None);

    assert_eq!(channel_ref.kind, ChannelKind::Other(0));
    assert!(!channel_ref.kind.is_voice_capable());
    assert_eq!(channel_ref.kind.to_string(), "other(0)");
}

/// Tests the mapping from Serenity channel types.
///
/// Expected: only Voice and Stage map to voice-capable kinds
#[test]
fn maps_serenity_channel_types() {
    assert_eq!(ChannelKind::from(ChannelType::Voice), ChannelKind::Voice);
    assert_eq!(ChannelKind::from(ChannelType::Stage), ChannelKind::StageVoice);
    assert_eq!(ChannelKind::from(ChannelType::Category), ChannelKind::Other(4));
    assert!(ChannelKind::Voice.is_voice_capable());
    assert!(ChannelKind::StageVoice.is_voice_capable());
}

/// Tests attaching a backfilled guild to a channel.
///
/// Verifies that the guild ID hint follows the attached guild.
///
/// Expected: guild and guild_id both updated
#[test]
fn with_guild_overrides_guild_hint() {
    let channel = create_test_voice_channel(222, 999, "Lounge");
    let channel_ref = ChannelRef::from_guild_channel(&channel, None);

    let bound = channel_ref.with_guild(GuildRef::new(111, "Test Guild"));

    assert_eq!(bound.guild_id, Some(111));
    assert_eq!(bound.guild.map(|g| g.name), Some("Test Guild".to_string()));
}
