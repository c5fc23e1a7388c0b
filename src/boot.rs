//! Startup reconciliation.
//!
//! Reads all five channels concurrently and infers the mode from them. A read
//! that fails counts as an off channel, so reconciliation itself never fails.

use embassy_futures::join::join5;
use embassy_time::{Duration, Timer};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::ColorTransport;
use crate::channels::{ChannelIntensities, ColorComponentId};
use crate::color::{channels_to_hsv, channels_to_temperature};
use crate::mode::LightMode;

/// Mode and values inferred from the channel readings
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BootInference {
    Color { hue: f32, saturation: f32 },
    Temperature { temperature: f32 },
}

impl BootInference {
    /// Infer the mode from channel readings.
    ///
    /// Both white channels off means color mode. This can't tell a color
    /// mode at black from a temperature mode at full cold; color wins.
    pub fn from_channels(channels: &ChannelIntensities) -> Self {
        if channels.is_white_off() {
            let rgb = channels.rgb();
            let (hue, saturation) = channels_to_hsv(rgb.r, rgb.g, rgb.b);
            return BootInference::Color { hue, saturation };
        }

        BootInference::Temperature {
            temperature: channels_to_temperature(channels.warm),
        }
    }

    pub const fn mode(&self) -> LightMode {
        match self {
            BootInference::Color { .. } => LightMode::Color,
            BootInference::Temperature { .. } => LightMode::Temperature,
        }
    }
}

/// Polls the device once its capabilities are registered
#[derive(Debug, Clone, Copy)]
pub struct BootReconciler {
    delay: Duration,
}

impl BootReconciler {
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Wait for the boot delay, read all channels and infer the mode
    pub async fn reconcile<T: ColorTransport>(&self, transport: &T) -> BootInference {
        Timer::after(self.delay).await;

        let channels = read_channels(transport).await;
        let inference = BootInference::from_channels(&channels);

        #[cfg(feature = "esp32-log")]
        println!("boot: channels {:?} -> {:?}", channels, inference);

        inference
    }
}

/// Read all five channels concurrently.
///
/// Failed reads are reported as 0.
pub async fn read_channels<T: ColorTransport>(transport: &T) -> ChannelIntensities {
    let (warm, cold, red, green, blue) = join5(
        read_or_off(transport, ColorComponentId::WarmWhite),
        read_or_off(transport, ColorComponentId::ColdWhite),
        read_or_off(transport, ColorComponentId::Red),
        read_or_off(transport, ColorComponentId::Green),
        read_or_off(transport, ColorComponentId::Blue),
    )
    .await;

    ChannelIntensities {
        warm,
        cold,
        red,
        green,
        blue,
    }
}

async fn read_or_off<T: ColorTransport>(transport: &T, id: ColorComponentId) -> u8 {
    match transport.read_channel(id).await {
        Ok(value) => value,
        Err(_error) => {
            #[cfg(feature = "esp32-log")]
            println!("boot: reading component {} failed: {}", id.as_u8(), _error);
            0
        }
    }
}
