//! Stepped playback of a generated trace.
//!
//! [`Playback`] owns the current [`Trace`] and an index into it, and provides
//! the transport operations (play, pause, reset, step, seek, speed) plus the
//! timed auto-advance that drives play mode.
//!
//! Timing is deadline-based: at most one armed deadline exists per controller,
//! and every operation that changes what the timer should do cancels it and,
//! if still playing, re-arms it from the `Instant` the caller passes in. The
//! event loop supplies `Instant::now()`; tests supply synthetic instants, so
//! no test ever sleeps.

use std::time::{Duration, Instant};

use crate::trace::{Step, Trace};

/// Fastest allowed inter-step delay offered by the UI.
pub const MIN_SPEED_MS: u64 = 300;
/// Slowest allowed inter-step delay offered by the UI.
pub const MAX_SPEED_MS: u64 = 1000;
/// Default inter-step delay.
pub const DEFAULT_SPEED_MS: u64 = 600;

/// The stepped-playback state machine.
///
/// States: Idle (empty trace), Ready-Paused, Ready-Playing. All transport
/// operations are guarded no-ops outside valid ranges; nothing here fails.
#[derive(Debug)]
pub struct Playback {
    trace: Trace,
    current: usize,
    playing: bool,
    speed: Duration,
    /// The single outstanding timer: when the next auto-advance fires.
    /// `Some` iff `playing`.
    deadline: Option<Instant>,
}

impl Playback {
    /// Create an idle controller with no trace loaded.
    pub fn new() -> Self {
        Playback {
            trace: Trace::default(),
            current: 0,
            playing: false,
            speed: Duration::from_millis(DEFAULT_SPEED_MS),
            deadline: None,
        }
    }

    /// Replace the current trace, discarding the old one, and reset playback
    /// to the first step, paused. Cancels any outstanding timer.
    pub fn load_trace(&mut self, trace: Trace) {
        self.trace = trace;
        self.current = 0;
        self.playing = false;
        self.deadline = None;
    }

    /// The loaded trace.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// The step at the current position, if a trace is loaded.
    pub fn current_step(&self) -> Option<&Step> {
        self.trace.get(self.current)
    }

    /// Current position into the trace.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of steps in the loaded trace.
    pub fn total_steps(&self) -> usize {
        self.trace.len()
    }

    /// Whether auto-advance is active.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// The inter-step delay.
    pub fn speed(&self) -> Duration {
        self.speed
    }

    /// Whether the current position is the last step.
    pub fn at_end(&self) -> bool {
        !self.trace.is_empty() && self.current + 1 == self.trace.len()
    }

    /// Enter play mode. Playing from the last step restarts from the
    /// beginning. No-op while the trace is empty.
    pub fn play(&mut self, now: Instant) {
        if self.trace.is_empty() {
            return;
        }
        if self.at_end() {
            self.current = 0;
        }
        self.playing = true;
        self.rearm(now);
    }

    /// Leave play mode, cancelling the outstanding timer. Idempotent.
    pub fn pause(&mut self) {
        self.playing = false;
        self.deadline = None;
    }

    /// Return to the first step, paused. Idempotent.
    pub fn reset(&mut self) {
        self.current = 0;
        self.pause();
    }

    /// Advance one step. No-op at the last step. Manual navigation while
    /// playing implicitly pauses so a stale timer can never fire afterwards.
    pub fn next_step(&mut self) {
        self.pause();
        if self.current + 1 < self.trace.len() {
            self.current += 1;
        }
    }

    /// Go back one step. No-op at the first step. Implicitly pauses.
    pub fn prev_step(&mut self) {
        self.pause();
        if self.current > 0 {
            self.current -= 1;
        }
    }

    /// Jump to an arbitrary step. Out-of-range indices are ignored.
    /// Implicitly pauses.
    pub fn seek(&mut self, index: usize) {
        self.pause();
        if index < self.trace.len() {
            self.current = index;
        }
    }

    /// Set the inter-step delay. A zero delay is clamped to 1 ms; range
    /// clamping beyond that is the caller's concern. While playing, the
    /// pending wait restarts from `now` with the new delay.
    pub fn set_speed(&mut self, ms: u64, now: Instant) {
        self.speed = Duration::from_millis(ms.max(1));
        self.rearm(now);
    }

    /// Poll the auto-advance timer. Fires at most once per call: if playing
    /// and the deadline has passed, advance one step and re-arm, or pause on
    /// reaching the last step. Returns whether any state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = match self.deadline {
            Some(deadline) if self.playing => now >= deadline,
            _ => false,
        };
        if !due {
            return false;
        }

        if self.current + 1 < self.trace.len() {
            self.current += 1;
            if self.current + 1 == self.trace.len() {
                self.pause();
            } else {
                self.rearm(now);
            }
        } else {
            self.pause();
        }
        true
    }

    /// Cancel the outstanding timer and schedule a fresh one iff playing.
    fn rearm(&mut self, now: Instant) {
        self.deadline = if self.playing {
            Some(now + self.speed)
        } else {
            None
        };
    }
}

impl Default for Playback {
    fn default() -> Self {
        Self::new()
    }
}
