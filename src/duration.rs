//! Transition duration encoding.
//!
//! The dimmer understands a single duration byte:
//!
//! | Byte          | Meaning                      |
//! |---------------|------------------------------|
//! | `0x00`        | instant                      |
//! | `0x01..=0x7F` | 1 to 127 seconds             |
//! | `0x80..=0xFE` | 1 to 127 minutes             |
//! | `0xFF`        | factory default              |

use embassy_time::Duration;

/// Longest duration that is still encoded in seconds
const MAX_SECONDS: u64 = 127;

/// Longest duration that can be encoded at all (in minutes)
const MAX_MINUTES: u64 = 127;

/// First byte of the minutes range (1 minute)
const MINUTES_BASE: u8 = 0x80;

/// Factory default duration byte
pub const FACTORY_DEFAULT_BYTE: u8 = 0xFF;

/// Duration attached to a color set command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionDuration {
    /// Let the device use its configured default
    FactoryDefault,
    /// Already-encoded duration byte
    Quantized(u8),
}

impl TransitionDuration {
    /// Quantize a duration to the nearest encodable step.
    ///
    /// Up to 127 s the step is one second; above that it is one minute,
    /// saturating at 127 minutes.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_duration(duration: Duration) -> Self {
        let millis = duration.as_millis();
        let seconds = (millis + 500) / 1000;
        if seconds <= MAX_SECONDS {
            return Self::Quantized(seconds as u8);
        }

        let mut minutes = (millis + 30_000) / 60_000;
        if minutes > MAX_MINUTES {
            minutes = MAX_MINUTES;
        }
        // 0x80 is one minute
        Self::Quantized(MINUTES_BASE + (minutes as u8 - 1))
    }

    /// Wire representation
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::FactoryDefault => FACTORY_DEFAULT_BYTE,
            Self::Quantized(value) => value,
        }
    }

    /// Inverse of [`TransitionDuration::as_byte`]
    pub const fn from_byte(value: u8) -> Self {
        if value == FACTORY_DEFAULT_BYTE {
            Self::FactoryDefault
        } else {
            Self::Quantized(value)
        }
    }
}

impl From<Duration> for TransitionDuration {
    fn from(duration: Duration) -> Self {
        Self::from_duration(duration)
    }
}
