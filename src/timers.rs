//! Feedback Timers
//!
//! Cancellable wrappers around `gloo_timers` timeouts. Every delayed visual
//! transition runs through a named slot, and a reset cancels the slots, so a
//! stale callback can never fire against discarded round state.

use gloo_timers::callback::Timeout;

pub const VICTORY_SHOW_MS: u32 = 500;
pub const VICTORY_HIDE_MS: u32 = 3000;
pub const WRONG_CLEAR_MS: u32 = 2000;
pub const SAVE_NOTICE_MS: u32 = 5000;

/// A single replaceable delayed action. Scheduling over a pending timeout, or
/// dropping the slot, cancels it.
#[derive(Default)]
pub struct TimerSlot {
    pending: Option<Timeout>,
}

impl TimerSlot {
    pub fn schedule(&mut self, delay_ms: u32, action: impl FnOnce() + 'static) {
        self.pending = Some(Timeout::new(delay_ms, action));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }
}

/// All pending visual-feedback delays for the session
#[derive(Default)]
pub struct FeedbackTimers {
    pub wrong_clear: TimerSlot,
    pub victory_show: TimerSlot,
    pub victory_hide: TimerSlot,
    pub save_notice: TimerSlot,
}

impl FeedbackTimers {
    /// Cancel everything tied to the current round. The save notice is
    /// editor-level and survives a game reset.
    pub fn cancel_round_feedback(&mut self) {
        self.wrong_clear.cancel();
        self.victory_show.cancel();
        self.victory_hide.cancel();
    }
}
