//! LTC2943 register map (datasheet Table 1)
//!
//! Multi-byte quantities are stored MSB first at the lower address.

/// 7-bit I2C address (0b110_0100), fixed in silicon
pub const I2C_ADDR: u8 = 0x64;

/// A: status (read only, alert bits clear on read)
pub const STATUS: u8 = 0x00;
/// B: control (ADC mode, prescaler, ALCC pin, shutdown)
pub const CONTROL: u8 = 0x01;
/// C: accumulated charge MSB
pub const ACC_CHARGE_MSB: u8 = 0x02;
/// D: accumulated charge LSB
pub const ACC_CHARGE_LSB: u8 = 0x03;
/// E, F: charge threshold high
pub const CHARGE_THR_HIGH_MSB: u8 = 0x04;
pub const CHARGE_THR_HIGH_LSB: u8 = 0x05;
/// G, H: charge threshold low
pub const CHARGE_THR_LOW_MSB: u8 = 0x06;
pub const CHARGE_THR_LOW_LSB: u8 = 0x07;
/// I, J: voltage
pub const VOLTAGE_MSB: u8 = 0x08;
pub const VOLTAGE_LSB: u8 = 0x09;
/// K, L: voltage threshold high
pub const VOLTAGE_THR_HIGH_MSB: u8 = 0x0A;
pub const VOLTAGE_THR_HIGH_LSB: u8 = 0x0B;
/// M, N: voltage threshold low
pub const VOLTAGE_THR_LOW_MSB: u8 = 0x0C;
pub const VOLTAGE_THR_LOW_LSB: u8 = 0x0D;
/// O, P: current
pub const CURRENT_MSB: u8 = 0x0E;
pub const CURRENT_LSB: u8 = 0x0F;
/// Q, R: current threshold high
pub const CURRENT_THR_HIGH_MSB: u8 = 0x10;
pub const CURRENT_THR_HIGH_LSB: u8 = 0x11;
/// S, T: current threshold low
pub const CURRENT_THR_LOW_MSB: u8 = 0x12;
pub const CURRENT_THR_LOW_LSB: u8 = 0x13;
/// U, V: temperature
pub const TEMPERATURE_MSB: u8 = 0x14;
pub const TEMPERATURE_LSB: u8 = 0x15;
/// W: temperature threshold high
pub const TEMP_THR_HIGH: u8 = 0x16;
/// X: temperature threshold low
pub const TEMP_THR_LOW: u8 = 0x17;

/// Number of registers in the map
pub const REGISTER_COUNT: usize = 0x18;

/// Status register: bit 7 carries no alert
pub const STATUS_RESERVED: u8 = 1 << 7;

/// Control register: ADC mode field position
///
/// The datasheet places the field at B[7:6]; this driver reads and writes
/// B[1:0]. Moving the field only takes a change to this constant.
pub const ADC_MODE_SHIFT: u8 = 0;
/// Control register: ADC mode field mask
pub const ADC_MODE_MASK: u8 = 0b11 << ADC_MODE_SHIFT;
