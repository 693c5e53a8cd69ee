//! Error type for the ADA4250 driver.

/// Error type for ADA4250 operations.
///
/// Every fallible operation performs at most one bus transaction (two for
/// read-modify-write field updates) and fails whole: a transport error is
/// returned to the caller unchanged, never retried.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Bus communication error (SPI transaction failed).
    Bus,
}
