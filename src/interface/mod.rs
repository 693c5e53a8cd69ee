//! Interface abstraction for register I/O.

pub(crate) mod spi;

pub use spi::SpiInterface;

use crate::error::Error;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Minimal blocking register I/O for the device core.
///
/// One call is one bus transaction. Timeout and retry behavior belong to
/// the transport implementation, not to this trait.
pub trait Interface: sealed::Sealed {
    /// Reads a single register.
    fn read_reg(&mut self, reg: u8) -> Result<u8, Error>;
    /// Writes a single register.
    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error>;
}
