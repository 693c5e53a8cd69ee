//! Configuration types for the ADA4250.

/// Amplifier gain step selection (GAIN_MUX[2:0]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gain {
    /// Gain of 1.
    X1,
    /// Gain of 2.
    X2,
    /// Gain of 4.
    X4,
    /// Gain of 8.
    X8,
    /// Gain of 16.
    X16,
    /// Gain of 32.
    X32,
    /// Gain of 64.
    X64,
    /// Gain of 128.
    X128,
}

impl Gain {
    /// Returns the gain factor.
    pub const fn factor(self) -> u16 {
        match self {
            Self::X1 => 1,
            Self::X2 => 2,
            Self::X4 => 4,
            Self::X8 => 8,
            Self::X16 => 16,
            Self::X32 => 32,
            Self::X64 => 64,
            Self::X128 => 128,
        }
    }

    /// Returns the GAIN_MUX code.
    pub const fn code(self) -> u8 {
        match self {
            Self::X1 => 0b000,
            Self::X2 => 0b001,
            Self::X4 => 0b010,
            Self::X8 => 0b011,
            Self::X16 => 0b100,
            Self::X32 => 0b101,
            Self::X64 => 0b110,
            Self::X128 => 0b111,
        }
    }

    /// Decodes a GAIN_MUX code. Only the low three bits are significant.
    pub const fn from_code(code: u8) -> Self {
        match code & 0b111 {
            0b001 => Self::X2,
            0b010 => Self::X4,
            0b011 => Self::X8,
            0b100 => Self::X16,
            0b101 => Self::X32,
            0b110 => Self::X64,
            0b111 => Self::X128,
            _ => Self::X1,
        }
    }
}

/// Calibration bias source selection (SNSR_CAL_CNFG[1:0]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BiasSource {
    /// Calibration bias disabled.
    Disabled,
    /// Bandgap reference.
    BandgapRef,
    /// Derived from AVDD.
    Avdd,
}

impl BiasSource {
    /// Returns the bias-select bits.
    pub(crate) const fn bits(self) -> u8 {
        match self {
            Self::Disabled => 0b00,
            Self::BandgapRef => 0b01,
            Self::Avdd => 0b10,
        }
    }
}

/// ADA4250 configuration settings applied by `init`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Gain step selection.
    pub gain: Gain,
    /// Reference buffer enable.
    pub refbuf: bool,
}

impl Config {
    /// Default configuration: gain of 1, reference buffer disabled.
    pub const DEFAULT: Self = Self {
        gain: Gain::X1,
        refbuf: false,
    };

    /// Creates a default configuration.
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Returns a new configuration with the provided gain step.
    #[must_use]
    pub const fn with_gain(self, gain: Gain) -> Self {
        Self { gain, ..self }
    }

    /// Returns a new configuration with the reference buffer enabled or
    /// disabled.
    #[must_use]
    pub const fn with_refbuf(self, enable: bool) -> Self {
        Self {
            refbuf: enable,
            ..self
        }
    }

}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}
