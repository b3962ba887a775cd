//! Two-step confirmation for destructive actions
//!
//! The first press arms the gate; a second press before the deadline
//! confirms. Once the deadline passes the gate falls back to idle and the
//! next press arms it again. Time is passed in explicitly so the state
//! machine never reads a clock itself.

use std::time::{Duration, Instant};

/// Current gate state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmState {
    Idle,
    PendingConfirm { deadline: Instant },
}

/// Result of pressing the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// First press: waiting for a second one
    Armed,
    /// Second press within the window: go ahead
    Confirmed,
}

/// Confirm-then-act gate
#[derive(Debug, Clone)]
pub struct ConfirmGate {
    state: ConfirmState,
    window: Duration,
}

impl ConfirmGate {
    pub fn new(window: Duration) -> Self {
        Self {
            state: ConfirmState::Idle,
            window,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// State as of `now`, expiring a stale confirmation first
    pub fn state(&mut self, now: Instant) -> ConfirmState {
        self.expire(now);
        self.state
    }

    pub fn is_pending(&mut self, now: Instant) -> bool {
        matches!(self.state(now), ConfirmState::PendingConfirm { .. })
    }

    /// Register a press of the destructive action
    pub fn press(&mut self, now: Instant) -> ConfirmOutcome {
        self.expire(now);
        match self.state {
            ConfirmState::Idle => {
                self.state = ConfirmState::PendingConfirm {
                    deadline: now + self.window,
                };
                ConfirmOutcome::Armed
            }
            ConfirmState::PendingConfirm { .. } => {
                self.state = ConfirmState::Idle;
                ConfirmOutcome::Confirmed
            }
        }
    }

    /// Drop any pending confirmation
    pub fn cancel(&mut self) {
        self.state = ConfirmState::Idle;
    }

    fn expire(&mut self, now: Instant) {
        if let ConfirmState::PendingConfirm { deadline } = self.state {
            if now >= deadline {
                self.state = ConfirmState::Idle;
            }
        }
    }
}
