//! Static channel descriptor for the ADA4250.
//!
//! The device exposes one output voltage channel with two controllable
//! attributes. The descriptor is plain data for host layers that enumerate
//! channels; the driver itself is addressed through
//! [`read_channel_attribute`](crate::Ada4250::read_channel_attribute) and
//! [`write_channel_attribute`](crate::Ada4250::write_channel_attribute).

/// Kind of quantity a channel carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelKind {
    /// Voltage channel.
    Voltage,
}

/// Per-channel controllable attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelAttribute {
    /// Hardware gain, backed by the GAIN_MUX register.
    HardwareGain,
    /// Output offset. Declared in the channel contract but not backed by
    /// any register operation: reads return zero, writes are ignored.
    Offset,
}

/// Static description of one device channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelSpec {
    /// Kind of quantity.
    pub kind: ChannelKind,
    /// Channel index.
    pub channel: u8,
    /// True for output channels.
    pub output: bool,
    /// Attributes controllable on this channel.
    pub attributes: &'static [ChannelAttribute],
}

/// The channels exposed by the ADA4250: one indexed output voltage channel.
pub const CHANNELS: &[ChannelSpec] = &[ChannelSpec {
    kind: ChannelKind::Voltage,
    channel: 0,
    output: true,
    attributes: &[ChannelAttribute::HardwareGain, ChannelAttribute::Offset],
}];
