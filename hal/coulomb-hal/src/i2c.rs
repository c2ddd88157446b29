//! I2C bus abstractions
//!
//! The transport contract consumed by the gauge drivers: bring-up,
//! a readiness query, and plain write/read transactions against a
//! 7-bit device address.
//!
//! There is no combined write-then-read operation. Drivers
//! that need to set a register pointer before reading issue a write and a
//! read as two separate transactions.

/// I2C bus master
///
/// All operations are synchronous and blocking. Any timeout policy lives
/// in the implementation; a bus that stops responding simply reports an
/// error.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Bring the bus up
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Shut the bus down
    ///
    /// After this returns, [`I2cBus::is_ready`] reports `false` until the
    /// bus is initialized again.
    fn deinit(&mut self) -> Result<(), Self::Error>;

    /// Check whether the bus is initialized and usable
    fn is_ready(&self) -> bool;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write, sent as one transaction
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Read data from a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `buf` - Buffer to read into; filled completely or not at all
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error>;
}

impl<T: I2cBus + ?Sized> I2cBus for &mut T {
    type Error = T::Error;

    fn init(&mut self) -> Result<(), Self::Error> {
        (**self).init()
    }

    fn deinit(&mut self) -> Result<(), Self::Error> {
        (**self).deinit()
    }

    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write(address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        (**self).read(address, buf)
    }
}
