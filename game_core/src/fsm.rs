//! Play-State Machine
//!
//! Tracks where a single play session is: waiting for the start key,
//! playing, settling after a point, or finished.

/// Play states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    NotStarted,
    Playing,
    /// Transient: always resolves straight back to `Playing`
    Scored,
    Won,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayAction {
    /// Start key observed while not started
    Start,
    /// Score settle delay elapsed
    SettleElapsed,
    /// Automatic hand-back after a settled point
    Resume,
    /// A side reached the win score
    WinReached,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    success: bool,
    from_state: PlayState,
    to_state: PlayState,
    action: PlayAction,
}

impl TransitionResult {
    pub fn success(&self) -> bool {
        self.success
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn from_state(&self) -> PlayState {
        self.from_state
    }

    pub fn to_state(&self) -> PlayState {
        self.to_state
    }

    pub fn action(&self) -> PlayAction {
        self.action
    }
}

/// Play Finite State Machine
#[derive(Debug, Clone)]
pub struct PlayFsm {
    state: PlayState,
}

impl PlayFsm {
    pub fn new() -> Self {
        Self {
            state: PlayState::NotStarted,
        }
    }

    /// Get current state
    pub fn state(&self) -> PlayState {
        self.state
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: PlayAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: PlayAction) -> Option<PlayState> {
        match (self.state, action) {
            (PlayState::NotStarted, PlayAction::Start) => Some(PlayState::Playing),

            (PlayState::Playing, PlayAction::SettleElapsed) => Some(PlayState::Scored),
            (PlayState::Playing, PlayAction::WinReached) => Some(PlayState::Won),

            (PlayState::Scored, PlayAction::Resume) => Some(PlayState::Playing),
            (PlayState::Scored, PlayAction::WinReached) => Some(PlayState::Won),

            // Won is terminal for the session
            _ => None,
        }
    }
}

impl Default for PlayFsm {
    fn default() -> Self {
        Self::new()
    }
}
