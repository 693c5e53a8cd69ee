//! SPI interface adapter for the ADA4250.

use embedded_hal::spi::{Operation, SpiDevice};

use super::{sealed, Interface};
use crate::error::Error;

/// Read transactions set the MSB of the address byte.
const SPI_READ_MASK: u8 = 0x80;

const fn spi_addr_read(reg: u8) -> u8 {
    (reg & 0x7F) | SPI_READ_MASK
}

const fn spi_addr_write(reg: u8) -> u8 {
    reg & 0x7F
}

/// SPI register interface.
///
/// The `SpiDevice` is expected to manage chip select itself (e.g. an
/// `embedded_hal_bus::spi::ExclusiveDevice`).
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Creates a new SPI interface with the given bus.
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Releases the underlying SPI device.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> Interface for SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    fn read_reg(&mut self, reg: u8) -> Result<u8, Error> {
        let addr_buf = [spi_addr_read(reg)];
        let mut buffer = [0u8];
        let mut ops = [Operation::Write(&addr_buf), Operation::Read(&mut buffer)];
        self.spi.transaction(&mut ops).map_err(|_| Error::Bus)?;
        Ok(buffer[0])
    }

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error> {
        let buffer = [spi_addr_write(reg), value];
        self.spi.write(&buffer).map_err(|_| Error::Bus)
    }
}

impl<SPI> sealed::Sealed for SpiInterface<SPI> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockSpiDevice;

    #[test]
    fn read_sets_the_address_read_flag() {
        let spi = MockSpiDevice::default().with_reg(0x19, 0xA5);
        let mut interface = SpiInterface::new(spi);

        assert_eq!(interface.read_reg(0x19), Ok(0xA5));

        let spi = interface.release();
        assert_eq!(spi.address_bytes(), [0x19 | 0x80]);
    }

    #[test]
    fn write_keeps_the_address_msb_clear() {
        let spi = MockSpiDevice::default();
        let mut interface = SpiInterface::new(spi);

        interface.write_reg(0x00, 0x05).expect("write");

        let spi = interface.release();
        assert_eq!(spi.address_bytes(), [0x00]);
        assert_eq!(spi.reg(0x00), 0x05);
    }
}
