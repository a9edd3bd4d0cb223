use serenity::all::{Context, EventHandler, Ready};
use serenity::async_trait;
use std::sync::Arc;
use tokio::sync::Notify;

pub mod ready;

/// Discord bot event handler
pub struct Handler {
    /// Released once the bot is connected
    pub ready: Arc<Notify>,
}

impl Handler {
    pub fn new(ready: Arc<Notify>) -> Self {
        Self { ready }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.ready, ctx, ready).await;
    }
}
