use std::time::Duration;
use tokio::time::{sleep, timeout, Instant};

use crate::server::{model::playback::PlaybackTimings, voice::VoiceConnection};

/// Waits until the connection reports ready.
///
/// The readiness flag is sampled immediately, then again whenever the
/// connection signals or one poll interval passes, whichever comes first.
///
/// # Returns
/// - `Some(Duration)` - Time it took for the connection to become ready
/// - `None` - Not ready before `timings.ready_timeout` elapsed
pub async fn wait_until_ready<C: VoiceConnection>(
    connection: &C,
    timings: &PlaybackTimings,
) -> Option<Duration> {
    let started = Instant::now();
    let signal = connection.signal();

    let wait = async {
        loop {
            if connection.is_ready().await {
                return;
            }

            tokio::select! {
                _ = signal.notified() => {}
                _ = sleep(timings.poll_interval) => {}
            }
        }
    };

    timeout(timings.ready_timeout, wait)
        .await
        .ok()
        .map(|_| started.elapsed())
}
