//! Blocking `#![no_std]` driver for the
//! [ADA4250](https://www.analog.com/en/products/ada4250.html)
//! programmable-gain instrumentation amplifier from Analog Devices.
//!
//! The crate exposes the device's register map (gain mux, reference
//! buffer, soft reset, sensor calibration, chip identity) as typed
//! operations over a blocking `embedded-hal` SPI transport. It carries no
//! platform dependencies so it can be reused from adapter or BSP layers.
//!
//! # Quick start (SPI)
//!
//! ```rust,no_run
//! use ada4250::{Ada4250Spi, BiasSource, Config, Gain};
//! # use embedded_hal::spi::SpiDevice;
//! #
//! # fn example<SPI: SpiDevice>(spi: SPI) -> Result<(), ada4250::Error> {
//! let config = Config::new().with_gain(Gain::X8).with_refbuf(true);
//! let mut amp: Ada4250Spi<SPI> = Ada4250Spi::with_spi_config(spi, config);
//! amp.init()?;
//! amp.set_calibration_bias(BiasSource::BandgapRef)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! One driver instance per physical device, accessed from one execution
//! context. Sub-byte field updates are read-modify-write on the bus and
//! are not atomic; callers that share a device must serialize access
//! externally.
//!
//! # Diagnostics
//!
//! [`Ada4250::raw_read`] and [`Ada4250::raw_write`] give unrestricted
//! register passthrough for debug tooling, bypassing all field semantics.
//!
//! # Known limitations
//!
//! The output channel declares an `Offset` attribute for interface
//! compatibility, but the device has no backing register for it: reads
//! return zero and writes are ignored.

#![no_std]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::semicolon_if_nothing_returned,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

mod channel;
mod config;
mod device;
mod driver;
mod error;
mod interface;
mod register;
mod regmap;

#[cfg(test)]
mod testing;

// Interface layer
pub use interface::{Interface, SpiInterface};

// Register map
pub use register::{fields, Field, Register, MAX_REGISTER};
pub use regmap::RegisterMap;

// Configuration
pub use config::{BiasSource, Config, Gain};

// Driver
pub use driver::{Ada4250, Ada4250Spi};

// Channel descriptor
pub use channel::{ChannelAttribute, ChannelKind, ChannelSpec, CHANNELS};

// Errors
pub use error::Error;
