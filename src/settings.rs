//! Transition duration device setting.
//!
//! The dimmer stores the auto scene transition duration in a single
//! parameter. Minutes are distinguished from seconds by an offset of 1000.

/// Offset added to the parameter value when the unit is minutes
pub const MINUTES_OFFSET: u16 = 1000;

/// Unit of the transition duration setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurationUnit {
    #[default]
    Seconds,
    Minutes,
}

impl DurationUnit {
    pub const fn as_str(self) -> &'static str {
        match self {
            DurationUnit::Seconds => "sec",
            DurationUnit::Minutes => "min",
        }
    }

    pub fn parse_from_str(value: &str) -> Option<Self> {
        match value {
            "sec" => Some(DurationUnit::Seconds),
            "min" => Some(DurationUnit::Minutes),
            _ => None,
        }
    }
}

/// Transition duration as configured by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransitionSettings {
    pub duration: u16,
    pub unit: DurationUnit,
}

impl TransitionSettings {
    pub const fn new(duration: u16, unit: DurationUnit) -> Self {
        Self { duration, unit }
    }

    /// Value written to the device parameter
    pub const fn parameter_value(&self) -> u16 {
        match self.unit {
            DurationUnit::Seconds => self.duration,
            DurationUnit::Minutes => self.duration.saturating_add(MINUTES_OFFSET),
        }
    }

    /// Parameter to write after a settings change, if any.
    ///
    /// Changing only the unit still requires re-sending the duration,
    /// because the unit is encoded in the same parameter.
    pub fn changed_parameter(old: &Self, new: &Self) -> Option<u16> {
        if old == new {
            return None;
        }
        Some(new.parameter_value())
    }
}
