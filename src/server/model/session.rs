//! Voice session lifecycle.
//!
//! ```text
//! Disconnected -> Connecting -> AwaitingReady -> Ready -> Playing -> Disconnecting -> Disconnected
//! ```
//!
//! `Failed` is terminal and reachable from every other state.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Disconnected,
    Connecting,
    AwaitingReady,
    Ready,
    Playing,
    Disconnecting,
    Failed,
}

impl SessionState {
    /// Returns true if the lifecycle allows moving from `self` to `next`.
    pub fn can_transition_to(self, next: SessionState) -> bool {
        use SessionState::*;

        match (self, next) {
            (Failed, _) => false,
            (_, Failed) => true,
            (Disconnected, Connecting)
            | (Connecting, AwaitingReady)
            | (AwaitingReady, Ready)
            | (Ready, Playing)
            | (Ready, Disconnecting)
            | (Playing, Disconnecting)
            | (Disconnecting, Disconnected) => true,
            _ => false,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == SessionState::Failed
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Disconnected => "disconnected",
            Self::Connecting => "connecting",
            Self::AwaitingReady => "awaiting-ready",
            Self::Ready => "ready",
            Self::Playing => "playing",
            Self::Disconnecting => "disconnecting",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Records the lifecycle of one voice session.
///
/// Transitions the lifecycle does not allow are logged and ignored, so a
/// misordered call can never move a `Failed` session back to life.
#[derive(Debug)]
pub struct SessionTracker {
    channel_id: u64,
    history: Vec<SessionState>,
}

impl SessionTracker {
    pub fn new(channel_id: u64) -> Self {
        Self {
            channel_id,
            history: vec![SessionState::Disconnected],
        }
    }

    pub fn state(&self) -> SessionState {
        *self
            .history
            .last()
            .unwrap_or(&SessionState::Disconnected)
    }

    /// Moves the session to `next`.
    ///
    /// # Returns
    /// - `true` - Transition recorded
    /// - `false` - Transition not allowed from the current state, nothing recorded
    pub fn advance(&mut self, next: SessionState) -> bool {
        let current = self.state();
        if !current.can_transition_to(next) {
            tracing::warn!(
                "Ignoring voice session transition {} -> {} for channel {}",
                current,
                next,
                self.channel_id
            );
            return false;
        }

        tracing::debug!(
            "Voice session for channel {}: {} -> {}",
            self.channel_id,
            current,
            next
        );
        self.history.push(next);
        true
    }

    pub fn history(&self) -> &[SessionState] {
        &self.history
    }

    pub fn into_history(self) -> Vec<SessionState> {
        self.history
    }
}
