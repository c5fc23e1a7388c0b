use super::quantize;

/// Split a white temperature into warm/cold intensities.
///
/// `0.0` is fully cold, `1.0` is fully warm.
pub fn temperature_to_channels(temperature: f32) -> (u8, u8) {
    let temperature = temperature.clamp(0.0, 1.0);
    (quantize(temperature), quantize(1.0 - temperature))
}

/// Recover the white temperature from the warm channel.
///
/// The result has two-decimal resolution.
pub fn channels_to_temperature(warm: u8) -> f32 {
    libm::roundf(f32::from(warm) / 255.0 * 100.0) / 100.0
}
