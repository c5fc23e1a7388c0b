//! Light mode state machine.

/// Which channel group the device is expressing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightMode {
    /// Hue/saturation on the RGB channels
    Color,
    /// Warm/cold white mix
    Temperature,
    /// Not determined yet (before boot reconciliation or the first write)
    #[default]
    Unknown,
}

/// Something that may move the mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeEvent {
    /// Mode inferred from channel readings at boot
    Inferred(LightMode),
    /// Hue/saturation write was accepted
    ColorWritten,
    /// Temperature write was accepted
    TemperatureWritten,
    /// Mode write was accepted (applied or suppressed)
    Requested(LightMode),
}

impl LightMode {
    /// Next mode after `event`.
    ///
    /// `Unknown` is never entered again once a concrete mode is known.
    #[must_use]
    pub const fn transition(self, event: ModeEvent) -> Self {
        match event {
            ModeEvent::ColorWritten => LightMode::Color,
            ModeEvent::TemperatureWritten => LightMode::Temperature,
            ModeEvent::Inferred(mode) | ModeEvent::Requested(mode) => match mode {
                LightMode::Unknown => self,
                mode => mode,
            },
        }
    }

    pub const fn is_known(self) -> bool {
        !matches!(self, LightMode::Unknown)
    }

    /// Capability value of the mode
    pub const fn as_str(self) -> &'static str {
        match self {
            LightMode::Color => "color",
            LightMode::Temperature => "temperature",
            LightMode::Unknown => "unknown",
        }
    }

    /// Parse a capability value
    pub fn parse_from_str(value: &str) -> Option<Self> {
        match value {
            "color" => Some(LightMode::Color),
            "temperature" => Some(LightMode::Temperature),
            _ => None,
        }
    }
}
