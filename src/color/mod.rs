mod hsv;
mod white;

pub use hsv::{channels_to_hsv, hsv_to_channels};
pub(crate) use hsv::wrap_hue;
use smart_leds::RGB8;
pub use white::{channels_to_temperature, temperature_to_channels};

pub type Rgb = RGB8;

/// Convert a fraction in `[0, 1]` to an 8-bit channel intensity.
///
/// Rounds half away from zero and clamps to guard against overshoot.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn quantize(fraction: f32) -> u8 {
    libm::roundf(fraction * 255.0).clamp(0.0, 255.0) as u8
}
