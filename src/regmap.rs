//! Register map codec for the ADA4250.
//!
//! The register map owns no device state: every access is one transport
//! transaction (two for read-modify-write), and the value on the wire is
//! authoritative.

use crate::error::Error;
use crate::interface::Interface;
use crate::register::Field;

/// Byte-addressed register map over a transport interface.
pub struct RegisterMap<I> {
    interface: I,
}

impl<I> RegisterMap<I> {
    /// Creates a register map over the given transport.
    pub const fn new(interface: I) -> Self {
        Self { interface }
    }

    /// Releases the underlying transport.
    pub fn release(self) -> I {
        self.interface
    }
}

impl<I> RegisterMap<I>
where
    I: Interface,
{
    /// Reads a bitfield: one register read, then mask and shift.
    pub fn read_field(&mut self, field: Field) -> Result<u8, Error> {
        let raw = self.interface.read_reg(field.addr())?;
        Ok(field.decode(raw))
    }

    /// Writes a bitfield with a single register write.
    ///
    /// Bits outside the other fields of the register are written as zero,
    /// and `value` bits beyond the field width are silently truncated by
    /// the mask. Use [`update_field`](Self::update_field) when sibling
    /// fields in the same register must be preserved.
    pub fn write_field(&mut self, field: Field, value: u8) -> Result<(), Error> {
        self.interface.write_reg(field.addr(), field.encode(value))
    }

    /// Read-modify-write of a sub-byte field, preserving all other bits of
    /// the register.
    ///
    /// Not atomic with respect to other bus masters; the caller owns the
    /// device exclusively (see crate docs).
    pub fn update_field(&mut self, field: Field, value: u8) -> Result<(), Error> {
        let current = self.interface.read_reg(field.addr())?;
        let merged = (current & !field.mask()) | field.encode(value);
        self.interface.write_reg(field.addr(), merged)
    }

    /// Diagnostic passthrough read. No field semantics, any address.
    pub fn raw_read(&mut self, addr: u8) -> Result<u8, Error> {
        self.interface.read_reg(addr)
    }

    /// Diagnostic passthrough write. No field semantics, any address.
    pub fn raw_write(&mut self, addr: u8, value: u8) -> Result<(), Error> {
        self.interface.write_reg(addr, value)
    }
}
