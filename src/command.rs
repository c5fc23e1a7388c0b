//! Outbound "set all five channels" command.

use crate::channels::{COLOR_COMPONENT_COUNT, ChannelIntensities, ColorComponentId};
use crate::duration::TransitionDuration;

/// Protocol revision whose parser mis-reads the structured duration field
pub const RAW_ENCODING_VERSION: u8 = 2;

/// Length of the raw encoding: count, five (id, value) pairs, duration
pub const RAW_COMMAND_LEN: usize = 1 + COLOR_COMPONENT_COUNT * 2 + 1;

/// A single (component id, intensity) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorComponent {
    pub id: ColorComponentId,
    pub value: u8,
}

/// Color set command ready for the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSetCommand {
    /// Structured command with an optional duration field
    Structured {
        components: [ColorComponent; COLOR_COMPONENT_COUNT],
        duration: Option<TransitionDuration>,
    },
    /// Pre-serialized payload for [`RAW_ENCODING_VERSION`]
    Raw([u8; RAW_COMMAND_LEN]),
}

impl ColorSetCommand {
    /// Returns true if the command was serialized by the builder
    pub const fn is_raw(&self) -> bool {
        matches!(self, Self::Raw(_))
    }
}

/// Builds [`ColorSetCommand`]s for a negotiated protocol version
#[derive(Debug, Clone, Copy)]
pub struct ColorSetBuilder {
    protocol_version: u8,
}

impl ColorSetBuilder {
    pub const fn new(protocol_version: u8) -> Self {
        Self { protocol_version }
    }

    /// Build the command addressing all five components.
    ///
    /// Never fails; sending is up to the transport.
    pub fn build(
        &self,
        channels: &ChannelIntensities,
        duration: Option<TransitionDuration>,
    ) -> ColorSetCommand {
        let components = ColorComponentId::ALL.map(|id| ColorComponent {
            id,
            value: channels.get(id),
        });

        if self.protocol_version == RAW_ENCODING_VERSION {
            return ColorSetCommand::Raw(encode_raw(
                &components,
                duration.unwrap_or(TransitionDuration::FactoryDefault),
            ));
        }

        ColorSetCommand::Structured {
            components,
            duration,
        }
    }
}

/// Serialize the command as a flat byte sequence.
///
/// Layout: component count, then `(id, value)` per component, then the
/// duration byte.
#[allow(clippy::cast_possible_truncation)]
fn encode_raw(
    components: &[ColorComponent; COLOR_COMPONENT_COUNT],
    duration: TransitionDuration,
) -> [u8; RAW_COMMAND_LEN] {
    let mut raw = [0; RAW_COMMAND_LEN];
    raw[0] = COLOR_COMPONENT_COUNT as u8;
    for (i, component) in components.iter().enumerate() {
        raw[1 + i * 2] = component.id.as_u8();
        raw[2 + i * 2] = component.value;
    }
    raw[RAW_COMMAND_LEN - 1] = duration.as_byte();
    raw
}
