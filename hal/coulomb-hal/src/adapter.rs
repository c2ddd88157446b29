//! `I2cBus` over embedded-hal
//!
//! Any blocking `embedded_hal::i2c::I2c` (embassy, rp-hal, stm32 HALs,
//! linux-embedded-hal, ...) can back a gauge driver through [`EmbeddedI2c`].
//!
//! embedded-hal has no notion of bus readiness, so the adapter keeps its own
//! flag: [`I2cBus::init`] raises it, [`I2cBus::deinit`] lowers it. Until the
//! bus is initialized every driver operation is refused before any traffic.

use embedded_hal::i2c::I2c;

use crate::i2c::I2cBus;

/// Adapter from an embedded-hal I2C master to [`I2cBus`]
pub struct EmbeddedI2c<I> {
    inner: I,
    ready: bool,
}

impl<I> EmbeddedI2c<I> {
    /// Wrap an embedded-hal I2C master
    ///
    /// The adapter starts out not ready; call [`I2cBus::init`] once the
    /// peripheral has been configured.
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            ready: false,
        }
    }

    /// Wrap an I2C master that is already configured and usable
    pub fn new_ready(inner: I) -> Self {
        Self { inner, ready: true }
    }

    /// Borrow the wrapped I2C master
    pub fn inner(&self) -> &I {
        &self.inner
    }

    /// Give back the wrapped I2C master
    pub fn release(self) -> I {
        self.inner
    }
}

impl<I: I2c> I2cBus for EmbeddedI2c<I> {
    type Error = I::Error;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.ready = true;
        Ok(())
    }

    fn deinit(&mut self) -> Result<(), Self::Error> {
        self.ready = false;
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.inner.write(address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.inner.read(address, buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation};

    /// Minimal embedded-hal master that answers reads with a fixed byte
    /// and remembers the last write
    struct FakeMaster {
        last_address: Option<u8>,
        last_write: heapless::Vec<u8, 8>,
        answer: u8,
        nack: bool,
    }

    impl FakeMaster {
        fn new(answer: u8) -> Self {
            Self {
                last_address: None,
                last_write: heapless::Vec::new(),
                answer,
                nack: false,
            }
        }
    }

    impl ErrorType for FakeMaster {
        type Error = ErrorKind;
    }

    impl I2c for FakeMaster {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.nack {
                return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
            }
            self.last_address = Some(address);
            for op in operations {
                match op {
                    Operation::Write(data) => {
                        self.last_write.clear();
                        self.last_write
                            .extend_from_slice(data)
                            .map_err(|_| ErrorKind::Overrun)?;
                    }
                    Operation::Read(buf) => buf.fill(self.answer),
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_not_ready_until_init() {
        let mut bus = EmbeddedI2c::new(FakeMaster::new(0));
        assert!(!bus.is_ready());

        bus.init().unwrap();
        assert!(bus.is_ready());

        bus.deinit().unwrap();
        assert!(!bus.is_ready());
    }

    #[test]
    fn test_new_ready() {
        let bus = EmbeddedI2c::new_ready(FakeMaster::new(0));
        assert!(bus.is_ready());
    }

    #[test]
    fn test_write_passthrough() {
        let mut bus = EmbeddedI2c::new_ready(FakeMaster::new(0));
        bus.write(0x64, &[0x01, 0xAA]).unwrap();

        assert_eq!(bus.inner().last_address, Some(0x64));
        assert_eq!(bus.inner().last_write.as_slice(), &[0x01, 0xAA]);
    }

    #[test]
    fn test_read_passthrough() {
        let mut bus = EmbeddedI2c::new_ready(FakeMaster::new(0x5A));
        let mut buf = [0u8; 3];
        bus.read(0x64, &mut buf).unwrap();

        assert_eq!(buf, [0x5A; 3]);
    }

    #[test]
    fn test_error_passthrough() {
        let mut master = FakeMaster::new(0);
        master.nack = true;
        let mut bus = EmbeddedI2c::new_ready(master);

        assert_eq!(
            bus.write(0x64, &[0x00]),
            Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address))
        );
        let released = bus.release();
        assert!(released.last_address.is_none());
    }
}
