extern crate std;

use core::convert::Infallible;

use std::vec::Vec;

use embedded_hal::spi::{ErrorType, Operation, SpiDevice};

use crate::error::Error;
use crate::interface::{sealed, Interface};

/// Register-level mock transport with transaction logging and failure
/// injection.
#[derive(Clone, Debug)]
pub(crate) struct MockInterface {
    regs: [u8; 256],
    reads: Vec<u8>,
    writes: Vec<(u8, u8)>,
    fail_reads: bool,
    fail_writes: bool,
}

impl Default for MockInterface {
    fn default() -> Self {
        Self {
            regs: [0u8; 256],
            reads: Vec::new(),
            writes: Vec::new(),
            fail_reads: false,
            fail_writes: false,
        }
    }
}

impl MockInterface {
    pub(crate) fn with_reg(mut self, reg: u8, value: u8) -> Self {
        self.regs[reg as usize] = value;
        self
    }

    pub(crate) fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    #[allow(dead_code)]
    pub(crate) fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub(crate) fn reg(&self, reg: u8) -> u8 {
        self.regs[reg as usize]
    }

    /// Addresses read so far, in issuance order.
    pub(crate) fn reads(&self) -> &[u8] {
        &self.reads
    }

    /// (address, value) pairs written so far, in issuance order.
    pub(crate) fn writes(&self) -> &[(u8, u8)] {
        &self.writes
    }
}

impl Interface for MockInterface {
    fn read_reg(&mut self, reg: u8) -> Result<u8, Error> {
        if self.fail_reads {
            return Err(Error::Bus);
        }
        self.reads.push(reg);
        Ok(self.regs[reg as usize])
    }

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error> {
        if self.fail_writes {
            return Err(Error::Bus);
        }
        self.regs[reg as usize] = value;
        self.writes.push((reg, value));
        Ok(())
    }
}

impl sealed::Sealed for MockInterface {}

/// Byte-level mock `SpiDevice` that understands the ADA4250 address
/// framing: write frames are `[addr, value]`, read frames assert bit 7 of
/// the address byte.
#[derive(Clone, Debug, Default)]
pub(crate) struct MockSpiDevice {
    regs: std::collections::BTreeMap<u8, u8>,
    addresses: Vec<u8>,
}

impl MockSpiDevice {
    pub(crate) fn with_reg(mut self, reg: u8, value: u8) -> Self {
        self.regs.insert(reg, value);
        self
    }

    pub(crate) fn reg(&self, reg: u8) -> u8 {
        self.regs.get(&reg).copied().unwrap_or(0)
    }

    /// Raw address bytes seen on the wire, in issuance order.
    pub(crate) fn address_bytes(&self) -> &[u8] {
        &self.addresses
    }
}

impl ErrorType for MockSpiDevice {
    type Error = Infallible;
}

impl SpiDevice for MockSpiDevice {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Infallible> {
        let mut pending_read: Option<u8> = None;
        for operation in operations.iter_mut() {
            match operation {
                Operation::Write(bytes) => {
                    let addr = bytes[0];
                    self.addresses.push(addr);
                    if addr & 0x80 != 0 {
                        pending_read = Some(addr & 0x7F);
                    } else if let Some(value) = bytes.get(1) {
                        self.regs.insert(addr, *value);
                    }
                }
                Operation::Read(buffer) => {
                    let base = pending_read.take().unwrap_or(0);
                    for (offset, slot) in buffer.iter_mut().enumerate() {
                        let addr = base.wrapping_add(offset as u8);
                        *slot = self.regs.get(&addr).copied().unwrap_or(0);
                    }
                }
                _ => unreachable!("operation not used by this driver"),
            }
        }
        Ok(())
    }
}
