//! Coulomb Hardware Abstraction Layer
//!
//! This crate defines the bus abstraction that the gauge drivers talk
//! through. A driver never touches a peripheral directly; it is handed
//! something implementing [`I2cBus`] and stays agnostic of the chip, the
//! HAL and whether the bus is real at all.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  coulomb-drivers (LTC2943, ...)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  coulomb-hal (this crate - I2cBus)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  EmbeddedI2c  │       │    MockI2c    │
//! │ (embedded-hal)│       │ (host tests)  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Modules
//!
//! - [`i2c`] - the [`I2cBus`] transport contract
//! - [`adapter`] - [`EmbeddedI2c`], `I2cBus` over any `embedded_hal::i2c::I2c`
//! - `mock` - `MockI2c`, a scriptable register file (feature `mock`)

#![no_std]
#![deny(unsafe_code)]

pub mod adapter;
pub mod i2c;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export key types at crate root for convenience
pub use adapter::EmbeddedI2c;
pub use i2c::I2cBus;
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockError, MockI2c, Transaction};
