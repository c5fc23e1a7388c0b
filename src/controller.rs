//! Color mode controller - the orchestrator
//!
//! Owns the mode and the last known color/temperature values of one device
//! and turns capability writes into color set commands.
//!
//! Entry points take `&self`, so a value write and a mode write for the same
//! device can be in flight together. State is only touched inside critical
//! sections, never across an await point.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex as AsyncMutex;
use embassy_time::{Duration, Instant, Timer};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::boot::{BootInference, BootReconciler};
use crate::channels::ChannelIntensities;
use crate::command::ColorSetBuilder;
use crate::config::ControllerConfig;
use crate::debounce::{DebounceArbiter, ModeWriteDecision};
use crate::duration::TransitionDuration;
use crate::error::{ControllerError, TransportError};
use crate::mode::{LightMode, ModeEvent};
use crate::state::{CapabilityUpdate, ColorState, TemperatureState};
use crate::{CapabilitySink, ColorTransport, DimLevelProvider};

/// Result of an accepted mode write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeWrite {
    /// Channels were derived from the mode and sent
    Applied,
    /// A value write had just happened; mode recorded, nothing sent
    Suppressed,
}

/// Channel group driven by a requestable mode
#[derive(Debug, Clone, Copy)]
enum ChannelGroup {
    Color,
    White,
}

impl ChannelGroup {
    const fn of(mode: LightMode) -> Option<Self> {
        match mode {
            LightMode::Color => Some(ChannelGroup::Color),
            LightMode::Temperature => Some(ChannelGroup::White),
            LightMode::Unknown => None,
        }
    }
}

#[derive(Debug)]
struct ControllerState {
    mode: LightMode,
    color: ColorState,
    temperature: TemperatureState,
    debounce: DebounceArbiter,
}

impl ControllerState {
    fn channels_for(&self, group: ChannelGroup) -> ChannelIntensities {
        match group {
            ChannelGroup::Color => self.color.channels(),
            ChannelGroup::White => self.temperature.channels(),
        }
    }

    fn capability_update(&self) -> CapabilityUpdate {
        match self.mode {
            LightMode::Color => CapabilityUpdate::color(self.mode, &self.color),
            LightMode::Temperature => CapabilityUpdate::temperature(self.mode, &self.temperature),
            LightMode::Unknown => CapabilityUpdate::mode(self.mode),
        }
    }
}

/// Mode-aware controller of a 5-channel RGBW dimmer
pub struct ColorModeController<T: ColorTransport, D: DimLevelProvider, S: CapabilitySink> {
    // External dependencies and configuration
    transport: T,
    dim: D,
    sink: S,
    config: ControllerConfig,

    // Internal state
    state: Mutex<RefCell<ControllerState>>,
    /// One outbound color command in flight per device
    outbound: AsyncMutex<CriticalSectionRawMutex, ()>,
}

impl<T: ColorTransport, D: DimLevelProvider, S: CapabilitySink> ColorModeController<T, D, S> {
    /// Create a controller in the `Unknown` mode
    pub fn new(transport: T, dim: D, sink: S, config: ControllerConfig) -> Self {
        Self {
            transport,
            dim,
            sink,
            config,
            state: Mutex::new(RefCell::new(ControllerState {
                mode: LightMode::Unknown,
                color: ColorState::default(),
                temperature: TemperatureState::default(),
                debounce: DebounceArbiter::new(config.debounce_window),
            })),
            outbound: AsyncMutex::new(()),
        }
    }

    pub fn mode(&self) -> LightMode {
        self.with_state(|state| state.mode)
    }

    pub fn color(&self) -> ColorState {
        self.with_state(|state| state.color)
    }

    pub fn temperature(&self) -> TemperatureState {
        self.with_state(|state| state.temperature)
    }

    pub const fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Set hue/saturation and switch the channels to the color group.
    ///
    /// On failure the previous state stays untouched.
    pub async fn set_color(
        &self,
        hue: f32,
        saturation: f32,
        duration: Option<Duration>,
    ) -> Result<(), ControllerError> {
        let color = ColorState::new(hue, saturation);
        self.send_value(&color.channels(), duration).await?;

        let update = self.with_state(|state| {
            state.color = color;
            state.mode = state.mode.transition(ModeEvent::ColorWritten);
            CapabilityUpdate::color(state.mode, &state.color)
        });
        self.sink.publish(&update);
        Ok(())
    }

    /// Set the white temperature and switch the channels to the white group.
    ///
    /// On failure the previous state stays untouched.
    pub async fn set_temperature(
        &self,
        temperature: f32,
        duration: Option<Duration>,
    ) -> Result<(), ControllerError> {
        let temperature = TemperatureState::new(temperature);
        self.send_value(&temperature.channels(), duration).await?;

        let update = self.with_state(|state| {
            state.temperature = temperature;
            state.mode = state.mode.transition(ModeEvent::TemperatureWritten);
            CapabilityUpdate::temperature(state.mode, &state.temperature)
        });
        self.sink.publish(&update);
        Ok(())
    }

    /// Switch the mode.
    ///
    /// The decision is taken after the mode write delay. If a value write
    /// armed the debounce window in the meantime, the mode is only recorded.
    /// Otherwise the channels are derived from the last known values of the
    /// requested mode and sent.
    pub async fn set_mode(
        &self,
        mode: LightMode,
        duration: Option<Duration>,
    ) -> Result<ModeWrite, ControllerError> {
        let Some(group) = ChannelGroup::of(mode) else {
            return Err(ControllerError::UnknownMode);
        };

        Timer::after(self.config.mode_write_delay).await;

        let (decision, channels) = self.with_state(|state| {
            let decision = state.debounce.evaluate_mode_write(Instant::now());
            (decision, state.channels_for(group))
        });

        if decision == ModeWriteDecision::Suppress {
            #[cfg(feature = "esp32-log")]
            println!("mode: {} recorded, value write already applied", mode.as_str());

            let update = self.with_state(|state| {
                state.mode = state.mode.transition(ModeEvent::Requested(mode));
                CapabilityUpdate::mode(state.mode)
            });
            self.sink.publish(&update);
            return Ok(ModeWrite::Suppressed);
        }

        self.send(&channels, duration).await?;

        let update = self.with_state(|state| {
            state.mode = state.mode.transition(ModeEvent::Requested(mode));
            state.capability_update()
        });
        self.sink.publish(&update);
        Ok(ModeWrite::Applied)
    }

    /// Poll the channels and adopt the inferred mode and values.
    ///
    /// Never fails. Can be called again; it re-polls and overwrites the state.
    pub async fn reconcile_from_boot(&self) -> BootInference {
        let inference = BootReconciler::new(self.config.boot_read_delay)
            .reconcile(&self.transport)
            .await;

        let update = self.with_state(|state| {
            match inference {
                BootInference::Color { hue, saturation } => {
                    state.color = ColorState::new(hue, saturation);
                }
                BootInference::Temperature { temperature } => {
                    state.temperature = TemperatureState::new(temperature);
                }
            }
            state.mode = state.mode.transition(ModeEvent::Inferred(inference.mode()));
            state.capability_update()
        });
        self.sink.publish(&update);

        inference
    }

    /// Send a value write.
    ///
    /// The debounce window is armed before the send so a concurrent mode
    /// write sees it. A failed send disarms it again unless a newer value
    /// write has re-armed it meanwhile.
    async fn send_value(
        &self,
        channels: &ChannelIntensities,
        duration: Option<Duration>,
    ) -> Result<(), TransportError> {
        let window = self.with_state(|state| state.debounce.arm(Instant::now()));

        self.send(channels, duration).await.inspect_err(|_| {
            self.with_state(|state| state.debounce.cancel(window));
        })
    }

    /// Scale by the dim level, build the command and send it
    async fn send(
        &self,
        channels: &ChannelIntensities,
        duration: Option<Duration>,
    ) -> Result<(), TransportError> {
        let channels = channels.scaled(self.dim.dim_level());
        let command = ColorSetBuilder::new(self.transport.protocol_version())
            .build(&channels, duration.map(TransitionDuration::from_duration));

        let _guard = self.outbound.lock().await;
        self.transport.send(&command).await.inspect_err(|_error| {
            #[cfg(feature = "esp32-log")]
            println!("color: sending {:?} failed: {}", channels, _error);
        })
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut ControllerState) -> R) -> R {
        critical_section::with(|cs| f(&mut self.state.borrow(cs).borrow_mut()))
    }
}
