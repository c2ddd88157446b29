//! LTC2943 multicell battery gas gauge (I2C)
//!
//! The LTC2943 measures charge, voltage, current and temperature and raises
//! alerts when any of them leaves its programmed window.
//!
//! # I2C Protocol
//!
//! - Fixed 7-bit address 0x64
//! - Register write: `[reg, data...]` in one transaction, pointer
//!   auto-increments
//! - Register read: `[reg]` pointer write, then a separate read
//! - 16-bit quantities are big-endian (MSB at the lower address)
//!
//! # Layers
//!
//! - [`registers::RegisterBus`] - transaction framing
//! - [`Ltc2943`] - readiness gate, alert decoding, ADC mode, charge

pub mod device;
pub mod registers;
pub mod regs;
pub mod types;

pub use device::Ltc2943;
pub use registers::RegisterBus;
pub use types::{AdcMode, InvalidModeCode, StatusAlert, StatusFlags};
