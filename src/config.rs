use embassy_time::Duration;

use crate::debounce::DEFAULT_DEBOUNCE_WINDOW;

/// Delay before a mode write is evaluated.
///
/// Gives a concurrent value write the chance to arm the debounce window first.
pub const DEFAULT_MODE_WRITE_DELAY: Duration = Duration::from_millis(50);

/// Delay between capability registration and the boot channel reads
pub const DEFAULT_BOOT_READ_DELAY: Duration = Duration::from_millis(500);

/// Timings of the color mode controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Span of the window that suppresses a trailing mode write
    pub debounce_window: Duration,
    /// Delay before a mode write decision is taken
    pub mode_write_delay: Duration,
    /// Delay before the boot reads are issued. Tune per transport.
    pub boot_read_delay: Duration,
}

pub const DEFAULT_CONTROLLER_CONFIG: ControllerConfig = ControllerConfig {
    debounce_window: DEFAULT_DEBOUNCE_WINDOW,
    mode_write_delay: DEFAULT_MODE_WRITE_DELAY,
    boot_read_delay: DEFAULT_BOOT_READ_DELAY,
};

impl ControllerConfig {
    /// Same timings with a different boot read delay
    #[must_use]
    pub const fn with_boot_read_delay(mut self, delay: Duration) -> Self {
        self.boot_read_delay = delay;
        self
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        DEFAULT_CONTROLLER_CONFIG
    }
}
