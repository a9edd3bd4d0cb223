use std::time::Duration;
use tokio::time::{sleep, Instant};

use crate::server::{
    error::voice::VoiceError,
    model::playback::{PlaybackRequest, PlaybackTimings},
    voice::{PlaybackEngine, VoiceConnection},
};

/// Opens the request's audio source and hands it to the connection.
///
/// # Returns
/// - `Ok(())` - Playback started
/// - `Err(VoiceError::PlaybackError)` - Source could not be opened or playback could not start
pub async fn start<C, E>(
    connection: &mut C,
    engine: &E,
    request: &PlaybackRequest,
) -> Result<(), VoiceError>
where
    C: VoiceConnection,
    E: PlaybackEngine,
{
    let playback_error = |source| VoiceError::PlaybackError {
        filename: request.filename.clone(),
        source,
    };

    let source = engine
        .open(&request.filename, &request.options)
        .await
        .map_err(playback_error)?;

    connection.play(source).await.map_err(playback_error)?;

    tracing::info!("Playback of '{}' started", request.filename);

    Ok(())
}

/// Waits for the stream started by [`start`] to finish.
///
/// The playing predicate is sampled every poll interval, and immediately when
/// the connection signals. Playback is over once `timings.end_debounce`
/// consecutive samples report nothing playing, so a momentary stall in the
/// transcoder is not mistaken for the end of the stream.
///
/// # Returns
/// - `Duration` - Time from the call until the end of the stream was confirmed
pub async fn wait_until_finished<C: VoiceConnection>(
    connection: &C,
    timings: &PlaybackTimings,
) -> Duration {
    let started = Instant::now();
    let signal = connection.signal();
    let required = timings.end_debounce.max(1);
    let mut idle_samples = 0;

    loop {
        if connection.is_playing().await {
            idle_samples = 0;
        } else {
            idle_samples += 1;
            if idle_samples >= required {
                break;
            }
        }

        tokio::select! {
            _ = signal.notified() => {}
            _ = sleep(timings.poll_interval) => {}
        }
    }

    started.elapsed()
}
