//! Scriptable register-file bus for host-side tests
//!
//! [`MockI2c`] behaves like a simple register-pointer device at one fixed
//! address: a write sets the internal pointer from its first byte and
//! stores any remaining bytes at successive registers, a read returns
//! bytes from the pointer onwards. The pointer auto-increments and wraps.
//!
//! Every transaction that reaches the wire is recorded, including failed
//! ones, so tests can assert on exact bus traffic. Failures are scripted
//! one-shot with [`MockI2c::fail_next_write`] / [`MockI2c::fail_next_read`].
//! The log holds [`LOG_CAPACITY`] entries; more traffic than that panics,
//! clear it with [`MockI2c::clear_transactions`] in long scenarios.

use heapless::Vec;

use crate::i2c::I2cBus;

/// Transactions kept in the log
pub const LOG_CAPACITY: usize = 64;

/// Largest write payload recorded in the log
pub const MAX_RECORDED_WRITE: usize = 32;

/// Errors reported by the mock bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MockError {
    /// Bus used without being initialized
    NotReady,
    /// No device acknowledged (wrong address or scripted failure)
    Nack,
}

/// A bus transaction as seen on the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    /// Write of `data` to `address`
    Write {
        address: u8,
        data: Vec<u8, MAX_RECORDED_WRITE>,
    },
    /// Read of `len` bytes from `address`
    Read { address: u8, len: usize },
}

impl Transaction {
    /// Build a write record (mostly for assertions)
    pub fn write(address: u8, data: &[u8]) -> Self {
        let mut recorded = Vec::new();
        let keep = data.len().min(MAX_RECORDED_WRITE);
        // Cannot fail, `keep` is within capacity
        let _ = recorded.extend_from_slice(&data[..keep]);
        Transaction::Write {
            address,
            data: recorded,
        }
    }

    /// Build a read record
    pub fn read(address: u8, len: usize) -> Self {
        Transaction::Read { address, len }
    }

    /// Check if this is a write
    pub fn is_write(&self) -> bool {
        matches!(self, Transaction::Write { .. })
    }
}

/// Register-file bus double
pub struct MockI2c {
    device_address: u8,
    registers: [u8; 256],
    pointer: u8,
    ready: bool,
    fail_next_write: bool,
    fail_next_read: bool,
    log: Vec<Transaction, LOG_CAPACITY>,
}

impl MockI2c {
    /// Create a ready bus with one device at `device_address`
    ///
    /// All registers start at zero.
    pub fn new(device_address: u8) -> Self {
        Self {
            device_address,
            registers: [0; 256],
            pointer: 0,
            ready: true,
            fail_next_write: false,
            fail_next_read: false,
            log: Vec::new(),
        }
    }

    /// Preload a register without generating bus traffic
    pub fn with_register(mut self, reg: u8, value: u8) -> Self {
        self.registers[reg as usize] = value;
        self
    }

    /// Set a register without generating bus traffic
    pub fn set_register(&mut self, reg: u8, value: u8) {
        self.registers[reg as usize] = value;
    }

    /// Current register contents
    pub fn register(&self, reg: u8) -> u8 {
        self.registers[reg as usize]
    }

    /// Force the readiness flag
    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    /// Make the next write transaction fail with a NACK
    pub fn fail_next_write(&mut self) {
        self.fail_next_write = true;
    }

    /// Make the next read transaction fail with a NACK
    pub fn fail_next_read(&mut self) {
        self.fail_next_read = true;
    }

    /// Transactions recorded so far, oldest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.log
    }

    /// Forget recorded transactions
    pub fn clear_transactions(&mut self) {
        self.log.clear();
    }

    fn record(&mut self, transaction: Transaction) {
        if self.log.push(transaction).is_err() {
            panic!("MockI2c transaction log full ({} entries)", LOG_CAPACITY);
        }
    }
}

impl I2cBus for MockI2c {
    type Error = MockError;

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
        if !self.ready {
            return Err(MockError::NotReady);
        }
        self.record(Transaction::write(address, data));

        if core::mem::take(&mut self.fail_next_write) || address != self.device_address {
            return Err(MockError::Nack);
        }

        if let Some((&reg, payload)) = data.split_first() {
            self.pointer = reg;
            for &byte in payload {
                self.registers[self.pointer as usize] = byte;
                self.pointer = self.pointer.wrapping_add(1);
            }
        }
        Ok(())
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        if !self.ready {
            return Err(MockError::NotReady);
        }
        self.record(Transaction::read(address, buf.len()));

        if core::mem::take(&mut self.fail_next_read) || address != self.device_address {
            return Err(MockError::Nack);
        }

        for byte in buf.iter_mut() {
            *byte = self.registers[self.pointer as usize];
            self.pointer = self.pointer.wrapping_add(1);
        }
        Ok(())
    }
}
