#![no_std]

pub mod boot;
pub mod channels;
pub mod color;
pub mod command;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod duration;
pub mod error;
pub mod mode;
pub mod settings;
pub mod state;

pub use boot::{BootInference, BootReconciler};
pub use channels::{ChannelIntensities, ColorComponentId};
pub use command::{ColorComponent, ColorSetBuilder, ColorSetCommand};
pub use config::{ControllerConfig, DEFAULT_CONTROLLER_CONFIG};
pub use controller::{ColorModeController, ModeWrite};
pub use debounce::{DebounceArbiter, DebounceWindow, ModeWriteDecision};
pub use duration::TransitionDuration;
pub use error::{ControllerError, TransportError};
pub use mode::{LightMode, ModeEvent};
pub use settings::{DurationUnit, TransitionSettings};
pub use state::{CapabilityUpdate, ColorState, TemperatureState};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Command transport to one physical dimmer
///
/// Implement this trait on top of the wire protocol stack.
/// The controller is generic over this trait.
#[allow(async_fn_in_trait)]
pub trait ColorTransport {
    /// Negotiated version of the color command protocol
    fn protocol_version(&self) -> u8;

    /// Send a color set command and wait for the acknowledgment
    async fn send(&self, command: &ColorSetCommand) -> Result<(), TransportError>;

    /// Read the current intensity of a single component
    async fn read_channel(&self, id: ColorComponentId) -> Result<u8, TransportError>;
}

/// Source of the current dim level (`0.0..=1.0`)
///
/// The level belongs to the dimming capability; the controller only reads it.
pub trait DimLevelProvider {
    fn dim_level(&self) -> f32;
}

/// Dim level provider for callers that scale the output elsewhere
#[derive(Debug, Clone, Copy, Default)]
pub struct FullBrightness;

impl DimLevelProvider for FullBrightness {
    fn dim_level(&self) -> f32 {
        1.0
    }
}

/// Receiver of capability values, notified after every accepted change
pub trait CapabilitySink {
    fn publish(&self, update: &CapabilityUpdate);
}

impl CapabilitySink for () {
    fn publish(&self, _update: &CapabilityUpdate) {}
}
