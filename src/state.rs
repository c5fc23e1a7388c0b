use crate::channels::ChannelIntensities;
use crate::color::{hsv_to_channels, temperature_to_channels, wrap_hue};
use crate::mode::LightMode;

/// Reference brightness used when deriving RGB.
///
/// The dim level is owned by the dimming capability and applied on top.
const REFERENCE_BRIGHTNESS: f32 = 1.0;

/// Last known color mode values
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ColorState {
    /// Hue in `[0, 1)`
    pub hue: f32,
    /// Saturation in `[0, 1]`
    pub saturation: f32,
}

impl ColorState {
    /// Create a color state, wrapping hue and clamping saturation
    pub fn new(hue: f32, saturation: f32) -> Self {
        Self {
            hue: wrap_hue(hue),
            saturation: saturation.clamp(0.0, 1.0),
        }
    }

    /// Channel set expressing this color at full brightness
    pub fn channels(&self) -> ChannelIntensities {
        ChannelIntensities::from_rgb(hsv_to_channels(
            self.hue,
            self.saturation,
            REFERENCE_BRIGHTNESS,
        ))
    }
}

/// Last known temperature mode value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureState {
    /// `0.0` is fully cold, `1.0` is fully warm
    pub temperature: f32,
}

impl TemperatureState {
    pub fn new(temperature: f32) -> Self {
        Self {
            temperature: temperature.clamp(0.0, 1.0),
        }
    }

    /// Channel set expressing this temperature at full brightness
    pub fn channels(&self) -> ChannelIntensities {
        let (warm, cold) = temperature_to_channels(self.temperature);
        ChannelIntensities::from_white(warm, cold)
    }
}

impl Default for TemperatureState {
    fn default() -> Self {
        Self { temperature: 0.5 }
    }
}

/// Values published to the capability sink.
///
/// Fields that did not change are `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapabilityUpdate {
    pub mode: LightMode,
    pub hue: Option<f32>,
    pub saturation: Option<f32>,
    pub temperature: Option<f32>,
}

impl CapabilityUpdate {
    pub const fn mode(mode: LightMode) -> Self {
        Self {
            mode,
            hue: None,
            saturation: None,
            temperature: None,
        }
    }

    pub const fn color(mode: LightMode, color: &ColorState) -> Self {
        Self {
            mode,
            hue: Some(color.hue),
            saturation: Some(color.saturation),
            temperature: None,
        }
    }

    pub const fn temperature(mode: LightMode, temperature: &TemperatureState) -> Self {
        Self {
            mode,
            hue: None,
            saturation: None,
            temperature: Some(temperature.temperature),
        }
    }
}
