//! Hardware channel layout of the dimmer.
//!
//! The module exposes exactly five intensity outputs. Each one is addressed
//! on the wire by a stable component identifier.

use crate::color::{Rgb, quantize};

/// Number of color components addressed by a single set command
pub const COLOR_COMPONENT_COUNT: usize = 5;

/// Wire identifier of a color component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ColorComponentId {
    WarmWhite = 0,
    ColdWhite = 1,
    Red = 2,
    Green = 3,
    Blue = 4,
}

impl ColorComponentId {
    /// All components in wire order
    pub const ALL: [ColorComponentId; COLOR_COMPONENT_COUNT] = [
        ColorComponentId::WarmWhite,
        ColorComponentId::ColdWhite,
        ColorComponentId::Red,
        ColorComponentId::Green,
        ColorComponentId::Blue,
    ];

    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub const fn from_raw(value: u8) -> Option<Self> {
        match value {
            0 => Some(ColorComponentId::WarmWhite),
            1 => Some(ColorComponentId::ColdWhite),
            2 => Some(ColorComponentId::Red),
            3 => Some(ColorComponentId::Green),
            4 => Some(ColorComponentId::Blue),
            _ => None,
        }
    }
}

/// Intensities of all five channels (0-255 each)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelIntensities {
    pub warm: u8,
    pub cold: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl ChannelIntensities {
    /// All channels off
    pub const OFF: Self = Self {
        warm: 0,
        cold: 0,
        red: 0,
        green: 0,
        blue: 0,
    };

    /// Color group only, white channels off
    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self {
            warm: 0,
            cold: 0,
            red: rgb.r,
            green: rgb.g,
            blue: rgb.b,
        }
    }

    /// White group only, color channels off
    pub const fn from_white(warm: u8, cold: u8) -> Self {
        Self {
            warm,
            cold,
            red: 0,
            green: 0,
            blue: 0,
        }
    }

    /// Red, green and blue channels as a color
    pub const fn rgb(&self) -> Rgb {
        Rgb {
            r: self.red,
            g: self.green,
            b: self.blue,
        }
    }

    /// Get the intensity of a single component
    pub const fn get(&self, id: ColorComponentId) -> u8 {
        match id {
            ColorComponentId::WarmWhite => self.warm,
            ColorComponentId::ColdWhite => self.cold,
            ColorComponentId::Red => self.red,
            ColorComponentId::Green => self.green,
            ColorComponentId::Blue => self.blue,
        }
    }

    /// Returns true if both white channels are off
    pub const fn is_white_off(&self) -> bool {
        self.warm == 0 && self.cold == 0
    }

    /// Scale every channel by a dim level in `[0, 1]`.
    ///
    /// Values outside the range are clamped; the product is rounded to the
    /// nearest integer intensity.
    #[must_use]
    pub fn scaled(self, level: f32) -> Self {
        let level = level.clamp(0.0, 1.0);
        let scale = |value: u8| quantize(f32::from(value) / 255.0 * level);
        Self {
            warm: scale(self.warm),
            cold: scale(self.cold),
            red: scale(self.red),
            green: scale(self.green),
            blue: scale(self.blue),
        }
    }
}
