//! Arbitration between value writes and mode writes.
//!
//! A value write (hue/saturation or temperature) already puts the channels in
//! the right state, so a mode write that trails it closely must not re-derive
//! and re-send them. Every accepted value write arms a short window; a mode
//! write that finds the window armed consumes it and only records the mode.

use embassy_time::{Duration, Instant};

/// Default span of the debounce window
pub const DEFAULT_DEBOUNCE_WINDOW: Duration = Duration::from_millis(200);

/// Handle of an armed debounce window.
///
/// Arming a new window invalidates the previous handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceWindow {
    generation: u32,
    expires_at: Instant,
}

impl DebounceWindow {
    pub const fn generation(&self) -> u32 {
        self.generation
    }

    pub const fn expires_at(&self) -> Instant {
        self.expires_at
    }

    /// Returns true while the window has not elapsed
    pub fn is_open(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// What a mode write should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeWriteDecision {
    /// A value write just happened: record the mode, send nothing
    Suppress,
    /// Mode write is authoritative: derive channels and send them
    Rederive,
}

/// Holds at most one armed debounce window
#[derive(Debug)]
pub struct DebounceArbiter {
    span: Duration,
    generation: u32,
    window: Option<DebounceWindow>,
}

impl DebounceArbiter {
    pub const fn new(span: Duration) -> Self {
        Self {
            span,
            generation: 0,
            window: None,
        }
    }

    /// Arm a window starting at `now`, replacing any armed one
    pub fn arm(&mut self, now: Instant) -> DebounceWindow {
        self.generation = self.generation.wrapping_add(1);
        let window = DebounceWindow {
            generation: self.generation,
            expires_at: now + self.span,
        };
        self.window = Some(window);
        window
    }

    /// Currently armed window, if it has not elapsed yet
    pub fn armed(&self, now: Instant) -> Option<DebounceWindow> {
        self.window.filter(|window| window.is_open(now))
    }

    pub fn is_armed(&self, now: Instant) -> bool {
        self.armed(now).is_some()
    }

    /// Disarm the window, returning it if it was still open
    pub fn disarm(&mut self, now: Instant) -> Option<DebounceWindow> {
        self.window.take().filter(|window| window.is_open(now))
    }

    /// Disarm `window` if it is still the armed one.
    ///
    /// A window armed later is left alone. Returns true if `window` was
    /// disarmed.
    pub fn cancel(&mut self, window: DebounceWindow) -> bool {
        match self.window {
            Some(armed) if armed.generation == window.generation => {
                self.window = None;
                true
            }
            _ => false,
        }
    }

    /// Decide a mode write evaluated at `now`.
    ///
    /// An open window is consumed, so only the first mode write after a
    /// value write is suppressed.
    pub fn evaluate_mode_write(&mut self, now: Instant) -> ModeWriteDecision {
        match self.disarm(now) {
            Some(_) => ModeWriteDecision::Suppress,
            None => ModeWriteDecision::Rederive,
        }
    }
}

impl Default for DebounceArbiter {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_WINDOW)
    }
}
