//! ADA4250 driver implementation.

use embedded_hal::spi::SpiDevice;

use crate::channel::ChannelAttribute;
use crate::config::{BiasSource, Config, Gain};
use crate::device::DeviceCore;
use crate::error::Error;
use crate::interface::{Interface, SpiInterface};

/// ADA4250 programmable-gain instrumentation amplifier driver.
///
/// One instance controls one physical device and owns its transport for
/// the instance's lifetime. Operations execute in issuance order; there is
/// no internal locking, so an instance must not be shared across execution
/// contexts without external serialization.
pub struct Ada4250<I> {
    core: DeviceCore<I>,
}

/// SPI type alias for the ADA4250 driver.
pub type Ada4250Spi<SPI> = Ada4250<SpiInterface<SPI>>;

impl<SPI> Ada4250<SpiInterface<SPI>>
where
    SPI: SpiDevice,
{
    /// Creates a new SPI-based driver with the default configuration.
    ///
    /// Construction only wraps the transport; no bus traffic is issued
    /// until the first operation (attach cannot fail).
    pub fn new_spi(spi: SPI) -> Self {
        Self::with_spi_config(spi, Config::default())
    }

    /// Creates a new SPI-based driver with a custom configuration.
    pub fn with_spi_config(spi: SPI, config: Config) -> Self {
        Self {
            core: DeviceCore::new(SpiInterface::new(spi), config),
        }
    }

    /// Releases the SPI device, consuming the driver.
    pub fn release(self) -> SPI {
        self.core.release().release()
    }
}

impl<I> Ada4250<I>
where
    I: Interface,
{
    /// Returns the current driver configuration.
    pub const fn config(&self) -> Config {
        self.core.config()
    }

    /// Updates the driver configuration. Takes effect on the next
    /// [`apply_config`](Self::apply_config) or [`init`](Self::init).
    pub fn set_config(&mut self, config: Config) {
        self.core.set_config(config);
    }

    /// Initializes the device: soft reset, then apply the configuration.
    ///
    /// The chip identity registers are never checked here; identification
    /// policy belongs to the host.
    pub fn init(&mut self) -> Result<(), Error> {
        self.core.init()
    }

    /// Pulses the soft reset bit. Issues exactly one write transaction;
    /// the hardware self-clears the bit, so there is no readback.
    pub fn soft_reset(&mut self) -> Result<(), Error> {
        self.core.soft_reset()
    }

    /// Applies the current configuration (gain step + reference buffer).
    pub fn apply_config(&mut self) -> Result<(), Error> {
        self.core.apply_config()
    }

    /// Reads the raw gain mux code. No unit conversion is performed.
    pub fn hardware_gain(&mut self) -> Result<u8, Error> {
        self.core.hardware_gain()
    }

    /// Writes the raw gain mux code. Values outside the 3-bit field are
    /// truncated by the mask, not rejected.
    pub fn set_hardware_gain(&mut self, code: u8) -> Result<(), Error> {
        self.core.set_hardware_gain(code)
    }

    /// Reads the gain step as a typed value.
    pub fn gain(&mut self) -> Result<Gain, Error> {
        Ok(Gain::from_code(self.core.hardware_gain()?))
    }

    /// Sets the gain step.
    pub fn set_gain(&mut self, gain: Gain) -> Result<(), Error> {
        self.core.set_hardware_gain(gain.code())
    }

    /// Reads the reference buffer enable bit.
    pub fn reference_buffer(&mut self) -> Result<bool, Error> {
        self.core.reference_buffer()
    }

    /// Enables or disables the reference buffer.
    pub fn set_reference_buffer(&mut self, enable: bool) -> Result<(), Error> {
        self.core.set_reference_buffer(enable)
    }

    /// Returns the locally cached calibration bias source.
    ///
    /// The bias field has no hardware read-back path; this mirrors the
    /// last value successfully written.
    pub const fn calibration_bias(&self) -> BiasSource {
        self.core.calibration_bias()
    }

    /// Selects the calibration bias source. Read-modify-write that leaves
    /// the range bits of the shared configuration register unchanged.
    pub fn set_calibration_bias(&mut self, bias: BiasSource) -> Result<(), Error> {
        self.core.set_calibration_bias(bias)
    }

    /// Reads the calibration range code.
    pub fn calibration_range(&mut self) -> Result<u8, Error> {
        self.core.calibration_range()
    }

    /// Writes the calibration range code (2 bits, masked). Read-modify-write
    /// that leaves the bias bits unchanged.
    pub fn set_calibration_range(&mut self, code: u8) -> Result<(), Error> {
        self.core.set_calibration_range(code)
    }

    /// Reads the raw sensor calibration byte.
    pub fn calibration_value(&mut self) -> Result<u8, Error> {
        self.core.calibration_value()
    }

    /// Writes the raw sensor calibration byte.
    pub fn set_calibration_value(&mut self, value: u8) -> Result<(), Error> {
        self.core.set_calibration_value(value)
    }

    /// Reads the die revision.
    pub fn die_revision(&mut self) -> Result<u8, Error> {
        self.core.die_revision()
    }

    /// Reads the two chip identification registers as one 16-bit identity
    /// (CHIP_ID2 high, CHIP_ID1 low). The driver attaches regardless of
    /// the value; matching is the host's concern.
    pub fn chip_id(&mut self) -> Result<u16, Error> {
        self.core.chip_id()
    }

    /// Diagnostic passthrough read of any register address. Bypasses field
    /// semantics entirely.
    pub fn raw_read(&mut self, addr: u8) -> Result<u8, Error> {
        self.core.raw_read(addr)
    }

    /// Diagnostic passthrough write of any register address. Bypasses field
    /// semantics entirely.
    pub fn raw_write(&mut self, addr: u8, value: u8) -> Result<(), Error> {
        self.core.raw_write(addr, value)
    }

    /// Reads a channel attribute of the output voltage channel.
    ///
    /// `Offset` has no backing register operation and reads as zero; see
    /// [`ChannelAttribute::Offset`].
    pub fn read_channel_attribute(&mut self, attr: ChannelAttribute) -> Result<u8, Error> {
        match attr {
            ChannelAttribute::HardwareGain => self.core.hardware_gain(),
            ChannelAttribute::Offset => Ok(0),
        }
    }

    /// Writes a channel attribute of the output voltage channel.
    ///
    /// `Offset` writes are accepted and ignored; no bus traffic is issued.
    pub fn write_channel_attribute(
        &mut self,
        attr: ChannelAttribute,
        value: u8,
    ) -> Result<(), Error> {
        match attr {
            ChannelAttribute::HardwareGain => self.core.set_hardware_gain(value),
            ChannelAttribute::Offset => Ok(()),
        }
    }
}
