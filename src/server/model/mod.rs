//! Domain models for voice playback.
//!
//! These types are independent of the collaborators that produce them: Serenity
//! values are converted into `discord` models at the data boundary, and the voice
//! session state machine is tracked in `session`.

pub mod discord;
pub mod playback;
pub mod session;
