pub mod channel;
pub mod guild;

pub use channel::{ChannelKind, ChannelRef, VoiceTarget};
pub use guild::GuildRef;

#[cfg(test)]
mod test;
