//! ADA4250 register definitions.
//!
//! This module contains the register map from the datasheet plus the typed
//! bitfield descriptions used by the register map codec.

/// ADA4250 register addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// Gain mux selection register.
    GainMux = 0x00,
    /// Reference buffer enable register.
    RefbufEn = 0x01,
    /// Soft reset register.
    Reset = 0x02,
    /// Sensor calibration value register.
    SnsrCalVal = 0x04,
    /// Sensor calibration configuration register (bias + range).
    SnsrCalCnfg = 0x05,
    /// Die revision register (read-only).
    DieRev = 0x18,
    /// Chip identification low byte (read-only).
    ChipId1 = 0x19,
    /// Chip identification high byte (read-only).
    ChipId2 = 0x1A,
}

impl Register {
    /// Returns the register address.
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

/// Highest documented register address.
pub const MAX_REGISTER: u8 = 0x1A;

/// A named sub-range of bits within one 8-bit register.
///
/// Fields are plain data consumed by the generic encode/decode in
/// [`RegisterMap`](crate::RegisterMap); the driver never hand-rolls
/// per-field shifting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Field {
    register: Register,
    mask: u8,
    shift: u8,
}

impl Field {
    /// Creates a field description. `mask` is the in-register mask, already
    /// shifted into position.
    pub const fn new(register: Register, mask: u8, shift: u8) -> Self {
        Self {
            register,
            mask,
            shift,
        }
    }

    /// Returns the register holding this field.
    pub const fn register(self) -> Register {
        self.register
    }

    /// Returns the address of the register holding this field.
    pub const fn addr(self) -> u8 {
        self.register.addr()
    }

    /// Returns the in-register bit mask.
    pub const fn mask(self) -> u8 {
        self.mask
    }

    /// Shifts `value` into field position. Bits that do not fit the field
    /// width are truncated by the mask, matching hardware mask semantics.
    pub const fn encode(self, value: u8) -> u8 {
        (value << self.shift) & self.mask
    }

    /// Extracts this field from a raw register byte, zero-extended.
    pub const fn decode(self, raw: u8) -> u8 {
        (raw & self.mask) >> self.shift
    }

    /// Returns the largest value the field can hold.
    pub const fn max_value(self) -> u8 {
        self.mask >> self.shift
    }
}

/// Bitfield descriptions for every documented register.
pub mod fields {
    use super::{Field, Register};

    /// Gain mux selection, GAIN_MUX[2:0]. One of eight gain steps.
    pub const GAIN_MUX: Field = Field::new(Register::GainMux, 0b0000_0111, 0);
    /// Reference buffer enable, REFBUF_EN[0].
    pub const REFBUF_EN: Field = Field::new(Register::RefbufEn, 0b0000_0001, 0);
    /// Soft reset, RESET[0]. Writing 1 pulses the reset; the bit self-clears.
    pub const SOFT_RESET: Field = Field::new(Register::Reset, 0b0000_0001, 0);
    /// Raw sensor calibration byte, SNSR_CAL_VAL[7:0].
    pub const CAL_VALUE: Field = Field::new(Register::SnsrCalVal, 0b1111_1111, 0);
    /// Calibration bias source select, SNSR_CAL_CNFG[1:0].
    pub const CAL_BIAS: Field = Field::new(Register::SnsrCalCnfg, 0b0000_0011, 0);
    /// Calibration range select, SNSR_CAL_CNFG[3:2].
    pub const CAL_RANGE: Field = Field::new(Register::SnsrCalCnfg, 0b0000_1100, 2);
    /// Die revision, DIE_REV[7:0].
    pub const DIE_REV: Field = Field::new(Register::DieRev, 0b1111_1111, 0);
    /// Chip identification low byte, CHIP_ID1[7:0].
    pub const CHIP_ID1: Field = Field::new(Register::ChipId1, 0b1111_1111, 0);
    /// Chip identification high byte, CHIP_ID2[7:0].
    pub const CHIP_ID2: Field = Field::new(Register::ChipId2, 0b1111_1111, 0);
}

#[cfg(test)]
mod tests {
    use super::fields::*;
    use super::*;

    const ALL_FIELDS: [Field; 9] = [
        GAIN_MUX, REFBUF_EN, SOFT_RESET, CAL_VALUE, CAL_BIAS, CAL_RANGE, DIE_REV, CHIP_ID1,
        CHIP_ID2,
    ];

    #[test]
    fn encode_decode_round_trip_for_in_width_values() {
        for field in ALL_FIELDS {
            for value in 0..=field.max_value() {
                assert_eq!(field.decode(field.encode(value)), value);
            }
        }
    }

    #[test]
    fn encode_truncates_to_field_width() {
        assert_eq!(GAIN_MUX.encode(0xFF), 0b0000_0111);
        assert_eq!(REFBUF_EN.encode(0xFF), 0b0000_0001);
        assert_eq!(CAL_RANGE.encode(0b101), 0b0000_0100);
    }

    #[test]
    fn bias_and_range_masks_do_not_overlap() {
        assert_eq!(CAL_BIAS.register(), Register::SnsrCalCnfg);
        assert_eq!(CAL_RANGE.register(), Register::SnsrCalCnfg);
        assert_eq!(CAL_BIAS.mask() & CAL_RANGE.mask(), 0);
    }

    #[test]
    fn addresses_match_the_datasheet() {
        assert_eq!(Register::GainMux.addr(), 0x00);
        assert_eq!(Register::RefbufEn.addr(), 0x01);
        assert_eq!(Register::Reset.addr(), 0x02);
        assert_eq!(Register::SnsrCalVal.addr(), 0x04);
        assert_eq!(Register::SnsrCalCnfg.addr(), 0x05);
        assert_eq!(Register::DieRev.addr(), 0x18);
        assert_eq!(Register::ChipId1.addr(), 0x19);
        assert_eq!(Register::ChipId2.addr(), 0x1A);
        assert_eq!(Register::ChipId2.addr(), MAX_REGISTER);
    }
}
