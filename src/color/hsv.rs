use super::{Rgb, quantize};

/// Convert hue/saturation/brightness (all `0.0..=1.0`) to RGB channels.
///
/// Hue wraps around, so `1.0` is the same as `0.0`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsv_to_channels(hue: f32, saturation: f32, brightness: f32) -> Rgb {
    let hue = wrap_hue(hue);
    let saturation = saturation.clamp(0.0, 1.0);
    let value = brightness.clamp(0.0, 1.0);

    let sector_position = hue * 6.0;
    let sector = libm::floorf(sector_position);
    let fraction = sector_position - sector;

    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * fraction);
    let t = value * (1.0 - saturation * (1.0 - fraction));

    let (r, g, b) = match sector as u8 % 6 {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    Rgb {
        r: quantize(r),
        g: quantize(g),
        b: quantize(b),
    }
}

/// Convert RGB channels back to `(hue, saturation)`.
///
/// Hue is in `[0, 1)`, saturation in `[0, 1]`. Grey and black map to hue 0.
pub fn channels_to_hsv(red: u8, green: u8, blue: u8) -> (f32, f32) {
    let r = f32::from(red) / 255.0;
    let g = f32::from(green) / 255.0;
    let b = f32::from(blue) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let saturation = if max > 0.0 { delta / max } else { 0.0 };

    if delta <= 0.0 {
        return (0.0, saturation);
    }

    let sector = if red >= green && red >= blue {
        (g - b) / delta
    } else if green >= blue {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    (wrap_hue(sector / 6.0), saturation)
}

/// Wrap a hue into `[0, 1)`
pub(crate) fn wrap_hue(hue: f32) -> f32 {
    let mut wrapped = libm::fmodf(hue, 1.0);
    if wrapped < 0.0 {
        wrapped += 1.0;
    }
    // -epsilon + 1.0 rounds up to exactly 1.0
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}
