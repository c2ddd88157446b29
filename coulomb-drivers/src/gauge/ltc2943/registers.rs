//! Register access framing
//!
//! The LTC2943 keeps an internal register pointer. A write transaction
//! sets the pointer from its first byte and stores any further bytes at
//! successive registers. A read transaction returns bytes from the pointer
//! onwards. The transport offers no combined write-then-read, so a register
//! read is always two transactions: pointer write, then data read.

use coulomb_hal::I2cBus;
use heapless::Vec;

use super::regs::{I2C_ADDR, REGISTER_COUNT};
use crate::gauge::GaugeError;

/// Largest write transaction: address byte plus the whole register file
const TX_CAPACITY: usize = REGISTER_COUNT + 1;

/// Reject empty spans and spans running past the last register
fn check_span<E>(reg: u8, len: usize) -> Result<(), GaugeError<E>> {
    if len == 0 || reg as usize + len > REGISTER_COUNT {
        Err(GaugeError::InvalidArgument)
    } else {
        Ok(())
    }
}

/// Register-level access to one LTC2943
///
/// Owns the bus for its whole lifetime. No readiness check happens at this
/// layer; that gate belongs to the device operations.
pub struct RegisterBus<I2C> {
    i2c: I2C,
}

impl<I2C> RegisterBus<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Borrow the underlying bus
    pub fn bus(&self) -> &I2C {
        &self.i2c
    }

    /// Give back the underlying bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2cBus> RegisterBus<I2C> {
    /// Read `buf.len()` registers starting at `reg`
    ///
    /// Issues exactly one pointer write then one data read. The read is
    /// skipped if the pointer write fails. `buf` is only meaningful on `Ok`.
    /// The span must be non-empty and stay inside the register map.
    pub fn read(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), GaugeError<I2C::Error>> {
        check_span(reg, buf.len())?;

        #[cfg(feature = "defmt")]
        defmt::trace!("LTC2943 RD @{=u8:#x} -> {=usize}B", reg, buf.len());

        let res = self
            .i2c
            .write(I2C_ADDR, &[reg])
            .and_then(|()| self.i2c.read(I2C_ADDR, buf));

        #[cfg(feature = "defmt")]
        if res.is_err() {
            defmt::warn!("LTC2943 RD ERR @{=u8:#x}", reg);
        }
        res.map_err(GaugeError::Bus)
    }

    /// Write `data` to consecutive registers starting at `reg`
    ///
    /// Sends `[reg] ++ data` as a single transaction. The span must be
    /// non-empty and stay inside the register map.
    pub fn write(&mut self, reg: u8, data: &[u8]) -> Result<(), GaugeError<I2C::Error>> {
        check_span(reg, data.len())?;

        let mut tx: Vec<u8, TX_CAPACITY> = Vec::new();
        tx.push(reg).map_err(|_| GaugeError::InvalidArgument)?;
        tx.extend_from_slice(data).map_err(|_| GaugeError::InvalidArgument)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("LTC2943 WR @{=u8:#x} <- {=[u8]:x}", reg, data);

        let res = self.i2c.write(I2C_ADDR, &tx);

        #[cfg(feature = "defmt")]
        if res.is_err() {
            defmt::warn!("LTC2943 WR ERR @{=u8:#x}", reg);
        }
        res.map_err(GaugeError::Bus)
    }

    pub fn read_u8(&mut self, reg: u8) -> Result<u8, GaugeError<I2C::Error>> {
        let mut b = [0u8; 1];
        self.read(reg, &mut b)?;
        Ok(b[0])
    }

    pub fn write_u8(&mut self, reg: u8, value: u8) -> Result<(), GaugeError<I2C::Error>> {
        self.write(reg, &[value])
    }

    /// Read a big-endian register pair starting at the MSB address
    pub fn read_u16(&mut self, reg_msb: u8) -> Result<u16, GaugeError<I2C::Error>> {
        let mut b = [0u8; 2];
        self.read(reg_msb, &mut b)?;
        Ok(u16::from_be_bytes(b))
    }

    /// Write a big-endian register pair starting at the MSB address
    pub fn write_u16(&mut self, reg_msb: u8, value: u16) -> Result<(), GaugeError<I2C::Error>> {
        self.write(reg_msb, &value.to_be_bytes())
    }
}
