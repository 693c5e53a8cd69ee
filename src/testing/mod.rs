//! Testing infrastructure (mock transport and SPI device).

pub(crate) mod mock;

pub(crate) use mock::{MockInterface, MockSpiDevice};
