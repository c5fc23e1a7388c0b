#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use embassy_time::{Duration, Timer};
use rgbw_color_mode::{
    CapabilitySink, CapabilityUpdate, ChannelIntensities, ColorComponentId, ColorSetCommand,
    ColorTransport, DimLevelProvider, TransportError,
};

/// Transport double that records sent commands and serves canned readings
pub struct MockTransport {
    version: u8,
    readings: [Result<u8, TransportError>; 5],
    read_delay: Duration,
    send_error: Cell<Option<TransportError>>,
    sent: RefCell<Vec<ColorSetCommand>>,
    reads_in_flight: Cell<usize>,
    max_reads_in_flight: Cell<usize>,
}

impl MockTransport {
    pub fn new(version: u8) -> Self {
        Self {
            version,
            readings: [Ok(0); 5],
            read_delay: Duration::from_millis(0),
            send_error: Cell::new(None),
            sent: RefCell::new(Vec::new()),
            reads_in_flight: Cell::new(0),
            max_reads_in_flight: Cell::new(0),
        }
    }

    /// Readings in wire order: warm, cold, red, green, blue
    pub fn with_readings(mut self, readings: [Result<u8, TransportError>; 5]) -> Self {
        self.readings = readings;
        self
    }

    pub fn with_read_delay(mut self, delay: Duration) -> Self {
        self.read_delay = delay;
        self
    }

    pub fn fail_sends(&self, error: Option<TransportError>) {
        self.send_error.set(error);
    }

    pub fn sent(&self) -> Vec<ColorSetCommand> {
        self.sent.borrow().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.borrow().len()
    }

    pub fn max_reads_in_flight(&self) -> usize {
        self.max_reads_in_flight.get()
    }
}

impl ColorTransport for MockTransport {
    fn protocol_version(&self) -> u8 {
        self.version
    }

    async fn send(&self, command: &ColorSetCommand) -> Result<(), TransportError> {
        if let Some(error) = self.send_error.get() {
            return Err(error);
        }
        self.sent.borrow_mut().push(command.clone());
        Ok(())
    }

    async fn read_channel(&self, id: ColorComponentId) -> Result<u8, TransportError> {
        let in_flight = self.reads_in_flight.get() + 1;
        self.reads_in_flight.set(in_flight);
        self.max_reads_in_flight
            .set(self.max_reads_in_flight.get().max(in_flight));

        if self.read_delay.as_millis() > 0 {
            Timer::after(self.read_delay).await;
        }

        self.reads_in_flight.set(self.reads_in_flight.get() - 1);
        self.readings[id.as_u8() as usize]
    }
}

/// Sink that keeps every published update
#[derive(Default)]
pub struct RecordingSink {
    updates: RefCell<Vec<CapabilityUpdate>>,
}

impl RecordingSink {
    pub fn updates(&self) -> Vec<CapabilityUpdate> {
        self.updates.borrow().clone()
    }

    pub fn last(&self) -> Option<CapabilityUpdate> {
        self.updates.borrow().last().copied()
    }
}

impl CapabilitySink for RecordingSink {
    fn publish(&self, update: &CapabilityUpdate) {
        self.updates.borrow_mut().push(*update);
    }
}

/// Dim level fixed at construction
pub struct FixedDim(pub f32);

impl DimLevelProvider for FixedDim {
    fn dim_level(&self) -> f32 {
        self.0
    }
}

/// Channel values carried by a structured command
pub fn channels_of(command: &ColorSetCommand) -> ChannelIntensities {
    let ColorSetCommand::Structured { components, .. } = command else {
        panic!("expected a structured command, got {command:?}");
    };
    let value = |id: ColorComponentId| {
        components
            .iter()
            .find(|component| component.id == id)
            .map(|component| component.value)
            .unwrap()
    };
    ChannelIntensities {
        warm: value(ColorComponentId::WarmWhite),
        cold: value(ColorComponentId::ColdWhite),
        red: value(ColorComponentId::Red),
        green: value(ColorComponentId::Green),
        blue: value(ColorComponentId::Blue),
    }
}

pub fn approx_eq(a: f32, b: f32, tolerance: f32) -> bool {
    (a - b).abs() <= tolerance
}
