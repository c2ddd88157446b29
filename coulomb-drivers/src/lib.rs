//! Battery-gauge driver implementations
//!
//! This crate provides drivers for coulomb-counting gauge ICs on top of
//! the [`coulomb_hal::I2cBus`] transport:
//!
//! - LTC2943 multicell battery gas gauge (alerts, ADC mode, accumulated charge)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod gauge;

pub use gauge::ltc2943::Ltc2943;
pub use gauge::{GaugeError, ResultKind};
