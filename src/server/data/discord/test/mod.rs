use serenity::all::{Cache, Channel, Http};
use std::sync::Arc;
use test_utils::serenity::{
    channel, create_test_channel, create_test_private_channel, create_test_voice_channel,
};

use crate::server::{
    data::discord::{
        directory::{channel_ref, fetched_channel, is_not_found},
        ChannelDirectory, SerenityChannelDirectory,
    },
    model::discord::ChannelKind,
};

/// Tests the status check used for REST channel fetches.
///
/// Expected: only a 404 response counts as "not found"
#[test]
fn only_404_is_not_found() {
    assert!(is_not_found(Some(404)));
    assert!(!is_not_found(Some(403)));
    assert!(!is_not_found(Some(500)));
    assert!(!is_not_found(None));
}

/// Tests mapping a successful fetch of a voice channel.
///
/// Verifies that REST channels carry the guild ID hint but never the guild.
///
/// Expected: Ok(Some) with voice kind and guild left for backfill
#[test]
fn maps_fetched_voice_channel() {
    let channel = create_test_voice_channel(1400430839397093386, 1400425075240472596, "Lounge");

    let channel_ref = fetched_channel(Ok(Channel::Guild(channel)))
        .unwrap()
        .expect("voice channel should be mapped");

    assert_eq!(channel_ref.id, 1400430839397093386);
    assert_eq!(channel_ref.kind, ChannelKind::Voice);
    assert_eq!(channel_ref.guild_id, Some(1400425075240472596));
    assert!(channel_ref.guild.is_none());
}

/// Tests mapping a fetch error that did not come from a 404 response.
///
/// Expected: Err carrying the original message
#[test]
fn propagates_other_fetch_errors() {
    let result = fetched_channel(Err(serenity::Error::Other("gateway unavailable")));

    let err = result.expect_err("non-404 errors must propagate");
    assert!(err.to_string().contains("gateway unavailable"));
}

/// Tests converting a direct message channel returned by the REST API.
///
/// Expected: direct message kind, not voice capable, no guild hint
#[test]
fn converts_private_channel() {
    let channel = create_test_private_channel(222, 333, "alice");

    let channel_ref = channel_ref(Channel::Private(channel));

    assert_eq!(channel_ref.id, 222);
    assert_eq!(
        channel_ref.kind,
        ChannelKind::Other(channel::DIRECT_MESSAGE)
    );
    assert!(!channel_ref.kind.is_voice_capable());
    assert!(channel_ref.guild_id.is_none());
    assert!(channel_ref.guild.is_none());
}

/// Tests converting a fetched text channel.
///
/// Expected: Other kind with Discord's type number
#[test]
fn converts_fetched_text_channel() {
    let channel = create_test_channel(222, 111, "general", channel::TEXT);

    let channel_ref = channel_ref(Channel::Guild(channel));

    assert_eq!(channel_ref.kind, ChannelKind::Other(channel::TEXT));
    assert_eq!(channel_ref.guild_id, Some(111));
}

/// Tests a cache lookup before the gateway delivered anything.
///
/// Expected: None, so the resolver falls back to REST
#[test]
fn empty_cache_misses() {
    let directory = SerenityChannelDirectory::new(Arc::new(Cache::new()), Arc::new(Http::new("")));

    assert!(directory.cached_channel(1400430839397093386).is_none());
}
