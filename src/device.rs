//! Device core operations for the ADA4250.

use crate::config::{BiasSource, Config};
use crate::error::Error;
use crate::interface::Interface;
use crate::register::fields;
use crate::regmap::RegisterMap;

/// Domain logic over the register map.
///
/// Holds the only mutable driver state: the configuration last requested by
/// the caller and the mirror of the write-only calibration bias field.
pub(crate) struct DeviceCore<I> {
    regmap: RegisterMap<I>,
    config: Config,
    bias: BiasSource,
}

impl<I> DeviceCore<I> {
    pub(crate) const fn new(interface: I, config: Config) -> Self {
        Self {
            regmap: RegisterMap::new(interface),
            config,
            bias: BiasSource::Disabled,
        }
    }

    pub(crate) const fn config(&self) -> Config {
        self.config
    }

    pub(crate) fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    pub(crate) const fn calibration_bias(&self) -> BiasSource {
        self.bias
    }

    pub(crate) fn release(self) -> I {
        self.regmap.release()
    }
}

impl<I> DeviceCore<I>
where
    I: Interface,
{
    pub(crate) fn init(&mut self) -> Result<(), Error> {
        self.soft_reset()?;
        self.apply_config()
    }

    /// One write transaction, no readback; the reset bit self-clears.
    pub(crate) fn soft_reset(&mut self) -> Result<(), Error> {
        self.regmap.write_field(fields::SOFT_RESET, 1)?;
        self.bias = BiasSource::Disabled;
        Ok(())
    }

    pub(crate) fn apply_config(&mut self) -> Result<(), Error> {
        self.regmap
            .write_field(fields::GAIN_MUX, self.config.gain.code())?;
        self.regmap
            .write_field(fields::REFBUF_EN, self.config.refbuf as u8)
    }

    pub(crate) fn hardware_gain(&mut self) -> Result<u8, Error> {
        self.regmap.read_field(fields::GAIN_MUX)
    }

    pub(crate) fn set_hardware_gain(&mut self, code: u8) -> Result<(), Error> {
        self.regmap.write_field(fields::GAIN_MUX, code)
    }

    pub(crate) fn reference_buffer(&mut self) -> Result<bool, Error> {
        Ok(self.regmap.read_field(fields::REFBUF_EN)? != 0)
    }

    pub(crate) fn set_reference_buffer(&mut self, enable: bool) -> Result<(), Error> {
        self.regmap.write_field(fields::REFBUF_EN, enable as u8)
    }

    /// Bias and range share SNSR_CAL_CNFG, so this is a read-modify-write
    /// that leaves the range bits untouched. The cached mirror is updated
    /// only after the bus write succeeds.
    pub(crate) fn set_calibration_bias(&mut self, bias: BiasSource) -> Result<(), Error> {
        self.regmap.update_field(fields::CAL_BIAS, bias.bits())?;
        self.bias = bias;
        Ok(())
    }

    pub(crate) fn calibration_range(&mut self) -> Result<u8, Error> {
        self.regmap.read_field(fields::CAL_RANGE)
    }

    pub(crate) fn set_calibration_range(&mut self, code: u8) -> Result<(), Error> {
        self.regmap.update_field(fields::CAL_RANGE, code)
    }

    pub(crate) fn calibration_value(&mut self) -> Result<u8, Error> {
        self.regmap.read_field(fields::CAL_VALUE)
    }

    pub(crate) fn set_calibration_value(&mut self, value: u8) -> Result<(), Error> {
        self.regmap.write_field(fields::CAL_VALUE, value)
    }

    pub(crate) fn die_revision(&mut self) -> Result<u8, Error> {
        self.regmap.read_field(fields::DIE_REV)
    }

    pub(crate) fn chip_id(&mut self) -> Result<u16, Error> {
        let low = self.regmap.read_field(fields::CHIP_ID1)?;
        let high = self.regmap.read_field(fields::CHIP_ID2)?;
        Ok(u16::from_le_bytes([low, high]))
    }

    pub(crate) fn raw_read(&mut self, addr: u8) -> Result<u8, Error> {
        self.regmap.raw_read(addr)
    }

    pub(crate) fn raw_write(&mut self, addr: u8, value: u8) -> Result<(), Error> {
        self.regmap.raw_write(addr, value)
    }
}
