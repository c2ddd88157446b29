//! LTC2943 device operations
//!
//! Every operation first checks that the bus is ready and sends nothing if
//! it is not. Nothing is cached: each call reads the device again.
//!
//! The driver owns its bus and all operations take `&mut self`, so the
//! read-modify-write in [`Ltc2943::set_adc_mode`] cannot interleave with
//! another operation on the same device. To share one gauge between tasks,
//! put the driver behind a mutex.

use coulomb_hal::I2cBus;

use super::registers::RegisterBus;
use super::regs;
use super::types::{replace_mode_code, AdcMode, StatusAlert, StatusFlags};
use crate::gauge::GaugeError;

/// LTC2943 battery gas gauge
pub struct Ltc2943<I2C> {
    regs: RegisterBus<I2C>,
}

impl<I2C> Ltc2943<I2C> {
    /// Create a driver for the gauge at the fixed address 0x64
    pub fn new(i2c: I2C) -> Self {
        Self {
            regs: RegisterBus::new(i2c),
        }
    }

    /// Borrow the underlying bus
    pub fn bus(&self) -> &I2C {
        self.regs.bus()
    }

    /// Give back the underlying bus
    pub fn release(self) -> I2C {
        self.regs.release()
    }
}

impl<I2C: I2cBus> Ltc2943<I2C> {
    /// Check if the bus is ready for traffic
    pub fn is_ready(&self) -> bool {
        self.regs.bus().is_ready()
    }

    fn ensure_ready(&self) -> Result<(), GaugeError<I2C::Error>> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(GaugeError::NotReady)
        }
    }

    fn read_status_register(&mut self) -> Result<u8, GaugeError<I2C::Error>> {
        self.ensure_ready()?;
        self.regs.read_u8(regs::STATUS)
    }

    /// Check one alert bit of the status register
    ///
    /// The device clears alert bits when the status register is read, so
    /// checking alerts one by one can miss a condition that was latched
    /// together with an earlier one. Use [`Ltc2943::status`] to get all of
    /// them from a single read.
    pub fn check_alert(&mut self, alert: StatusAlert) -> Result<bool, GaugeError<I2C::Error>> {
        let status = self.read_status_register()?;
        Ok(alert.is_set_in(status))
    }

    /// Check the temperature alert (status bit 4)
    pub fn check_temp_alert(&mut self) -> Result<bool, GaugeError<I2C::Error>> {
        self.check_alert(StatusAlert::Temperature)
    }

    /// Check the voltage alert (status bit 1)
    pub fn check_volt_alert(&mut self) -> Result<bool, GaugeError<I2C::Error>> {
        self.check_alert(StatusAlert::Voltage)
    }

    /// Read and decode the whole status register
    pub fn status(&mut self) -> Result<StatusFlags, GaugeError<I2C::Error>> {
        let status = self.read_status_register()?;
        Ok(StatusFlags::from_register(status))
    }

    /// Read the current ADC mode from the control register
    pub fn get_adc_mode(&mut self) -> Result<AdcMode, GaugeError<I2C::Error>> {
        self.ensure_ready()?;
        let control = self.regs.read_u8(regs::CONTROL)?;
        Ok(AdcMode::from_control(control))
    }

    /// Change the ADC mode
    ///
    /// Read-modify-write of the control register: only the mode field
    /// changes. `Undefined` is refused before any bus traffic. If the read
    /// fails nothing is written; if the write fails the register keeps its
    /// old value.
    pub fn set_adc_mode(&mut self, mode: AdcMode) -> Result<(), GaugeError<I2C::Error>> {
        let Some(code) = mode.code() else {
            return Err(GaugeError::InvalidMode);
        };
        self.ensure_ready()?;

        let control = self.regs.read_u8(regs::CONTROL)?;
        let updated = replace_mode_code(control, code);
        self.regs.write_u8(regs::CONTROL, updated)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("LTC2943 ADC mode -> {} (control {=u8:#x})", mode, updated);
        Ok(())
    }

    /// Read the raw 16-bit accumulated charge (registers C, D)
    pub fn accumulated_charge(&mut self) -> Result<u16, GaugeError<I2C::Error>> {
        self.ensure_ready()?;
        self.regs.read_u16(regs::ACC_CHARGE_MSB)
    }

    /// Overwrite the raw 16-bit accumulated charge (registers C, D)
    ///
    /// The datasheet asks for the analog section to be shut down while the
    /// accumulator is written; that is left to the caller.
    pub fn set_accumulated_charge(&mut self, value: u16) -> Result<(), GaugeError<I2C::Error>> {
        self.ensure_ready()?;
        self.regs.write_u16(regs::ACC_CHARGE_MSB, value)
    }
}
