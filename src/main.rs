mod server;

use std::sync::Arc;
use tokio::sync::Notify;

use crate::server::{
    bot, config::Config, error::AppError, startup, state::AppState, voice::VoiceGateway,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let request = config.playback_request();

    let ready = Arc::new(Notify::new());
    let (client, manager) = bot::start::init_bot(&config, ready.clone()).await?;

    let state = AppState::new(
        client.cache.clone(),
        client.http.clone(),
        manager,
        &config.ffmpeg_path,
    );
    let shard_manager = client.shard_manager.clone();

    // Start Discord bot in a separate task
    let mut bot_task = tokio::spawn(bot::start::start_bot(client));

    startup::wait_for_bot(&ready, &mut bot_task).await?;

    let service = state.playback_service(config.timings());
    tokio::select! {
        // Failures are logged by the service
        _ = service.play(&request) => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Interrupted, leaving voice channel");
            if let Err(e) = state.gateway.release(request.guild_id).await {
                tracing::warn!("Failed to leave voice channel: {}", e);
            }
        }
    }

    tracing::info!("Shutting down Discord bot");
    shard_manager.shutdown_all().await;

    match bot_task.await {
        Ok(Err(e)) => tracing::error!("Discord bot error: {}", e),
        Err(e) => tracing::error!("Discord bot task failed: {}", e),
        Ok(Ok(())) => {}
    }

    Ok(())
}
