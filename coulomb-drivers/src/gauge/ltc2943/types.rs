//! Typed views of LTC2943 register contents

use super::regs::{ADC_MODE_MASK, ADC_MODE_SHIFT};

/// Alert conditions reported in the status register
///
/// The discriminant is the bit position. Bit 7 is reserved and has no
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum StatusAlert {
    /// Analog section was reset by undervoltage lockout
    UndervoltageLockout = 0,
    /// Voltage outside its thresholds
    Voltage = 1,
    /// Accumulated charge below low threshold
    ChargeLow = 2,
    /// Accumulated charge above high threshold
    ChargeHigh = 3,
    /// Temperature outside its thresholds
    Temperature = 4,
    /// Accumulated charge overflowed or underflowed
    AccumulatedChargeOverUnderflow = 5,
    /// Current outside its thresholds
    Current = 6,
}

impl StatusAlert {
    /// Every alert, in bit order
    pub const ALL: [StatusAlert; 7] = [
        StatusAlert::UndervoltageLockout,
        StatusAlert::Voltage,
        StatusAlert::ChargeLow,
        StatusAlert::ChargeHigh,
        StatusAlert::Temperature,
        StatusAlert::AccumulatedChargeOverUnderflow,
        StatusAlert::Current,
    ];

    /// Bit position in the status register
    pub fn bit(self) -> u8 {
        self as u8
    }

    /// Single-bit mask for this alert
    pub fn mask(self) -> u8 {
        1 << self.bit()
    }

    /// Look up the alert at a bit position
    ///
    /// Returns `None` for the reserved bit 7 and anything out of range.
    pub fn from_bit(bit: u8) -> Option<Self> {
        match bit {
            0 => Some(StatusAlert::UndervoltageLockout),
            1 => Some(StatusAlert::Voltage),
            2 => Some(StatusAlert::ChargeLow),
            3 => Some(StatusAlert::ChargeHigh),
            4 => Some(StatusAlert::Temperature),
            5 => Some(StatusAlert::AccumulatedChargeOverUnderflow),
            6 => Some(StatusAlert::Current),
            _ => None,
        }
    }

    /// Test this alert in a raw status byte
    pub fn is_set_in(self, status: u8) -> bool {
        status & self.mask() != 0
    }
}

/// Decoded status register
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusFlags {
    pub undervoltage_lockout: bool,
    pub voltage: bool,
    pub charge_low: bool,
    pub charge_high: bool,
    pub temperature: bool,
    pub acc_charge_over_underflow: bool,
    pub current: bool,
}

impl StatusFlags {
    /// Parse from raw status register value
    pub fn from_register(value: u8) -> Self {
        Self {
            undervoltage_lockout: StatusAlert::UndervoltageLockout.is_set_in(value),
            voltage: StatusAlert::Voltage.is_set_in(value),
            charge_low: StatusAlert::ChargeLow.is_set_in(value),
            charge_high: StatusAlert::ChargeHigh.is_set_in(value),
            temperature: StatusAlert::Temperature.is_set_in(value),
            acc_charge_over_underflow: StatusAlert::AccumulatedChargeOverUnderflow
                .is_set_in(value),
            current: StatusAlert::Current.is_set_in(value),
        }
    }

    /// Check a single alert
    pub fn is_set(&self, alert: StatusAlert) -> bool {
        match alert {
            StatusAlert::UndervoltageLockout => self.undervoltage_lockout,
            StatusAlert::Voltage => self.voltage,
            StatusAlert::ChargeLow => self.charge_low,
            StatusAlert::ChargeHigh => self.charge_high,
            StatusAlert::Temperature => self.temperature,
            StatusAlert::AccumulatedChargeOverUnderflow => self.acc_charge_over_underflow,
            StatusAlert::Current => self.current,
        }
    }

    /// Check if any alert is raised
    pub fn any(&self) -> bool {
        StatusAlert::ALL.iter().any(|&a| self.is_set(a))
    }
}

/// ADC operating mode (control register)
///
/// `Undefined` is never reported by the device. It is the default and
/// marks a mode that has not been read successfully; it cannot be written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AdcMode {
    /// All conversions off
    Sleep,
    /// Single conversion of V, I and T, then sleep
    Manual,
    /// Conversion of V, I and T every 10 s
    Scan,
    /// Continuous conversions
    Automatic,
    #[default]
    Undefined,
}

impl AdcMode {
    /// Every mode the device can be put into
    pub const SETTABLE: [AdcMode; 4] = [
        AdcMode::Sleep,
        AdcMode::Manual,
        AdcMode::Scan,
        AdcMode::Automatic,
    ];

    /// Two-bit field code, `None` for `Undefined`
    pub fn code(self) -> Option<u8> {
        match self {
            AdcMode::Sleep => Some(0b00),
            AdcMode::Manual => Some(0b01),
            AdcMode::Scan => Some(0b10),
            AdcMode::Automatic => Some(0b11),
            AdcMode::Undefined => None,
        }
    }

    /// Mode for a two-bit field code; anything else is `Undefined`
    pub fn from_code(code: u8) -> Self {
        match code {
            0b00 => AdcMode::Sleep,
            0b01 => AdcMode::Manual,
            0b10 => AdcMode::Scan,
            0b11 => AdcMode::Automatic,
            _ => AdcMode::Undefined,
        }
    }

    /// Decode the mode field of a control register value
    pub fn from_control(control: u8) -> Self {
        Self::from_code((control & ADC_MODE_MASK) >> ADC_MODE_SHIFT)
    }

    /// Replace the mode field of a control register value
    ///
    /// Bits outside the field are kept. Returns `None` for `Undefined`.
    pub fn apply_to_control(self, control: u8) -> Option<u8> {
        self.code().map(|code| replace_mode_code(control, code))
    }
}

/// Put a two-bit mode code into the mode field of a control register value
pub fn replace_mode_code(control: u8, code: u8) -> u8 {
    (control & !ADC_MODE_MASK) | ((code << ADC_MODE_SHIFT) & ADC_MODE_MASK)
}

/// Raw mode code outside 0..=3
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidModeCode(pub u8);

impl TryFrom<u8> for AdcMode {
    type Error = InvalidModeCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match Self::from_code(code) {
            AdcMode::Undefined => Err(InvalidModeCode(code)),
            mode => Ok(mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gauge::ltc2943::regs::STATUS_RESERVED;

    #[test]
    fn test_alert_bit_positions() {
        assert_eq!(StatusAlert::UndervoltageLockout.bit(), 0);
        assert_eq!(StatusAlert::Voltage.bit(), 1);
        assert_eq!(StatusAlert::ChargeLow.bit(), 2);
        assert_eq!(StatusAlert::ChargeHigh.bit(), 3);
        assert_eq!(StatusAlert::Temperature.bit(), 4);
        assert_eq!(StatusAlert::AccumulatedChargeOverUnderflow.bit(), 5);
        assert_eq!(StatusAlert::Current.bit(), 6);
    }

    #[test]
    fn test_alert_from_bit() {
        for alert in StatusAlert::ALL {
            assert_eq!(StatusAlert::from_bit(alert.bit()), Some(alert));
        }
        assert_eq!(StatusAlert::from_bit(7), None);
        assert!(StatusAlert::ALL
            .iter()
            .all(|a| a.mask() & STATUS_RESERVED == 0));
        assert_eq!(StatusAlert::from_bit(8), None);
    }

    #[test]
    fn test_status_flags_parsing() {
        let flags = StatusFlags::from_register(0b0001_0010);
        assert!(flags.temperature);
        assert!(flags.voltage);
        assert!(!flags.current);
        assert!(flags.any());

        let flags = StatusFlags::from_register(0x00);
        assert_eq!(flags, StatusFlags::default());
        assert!(!flags.any());
    }

    #[test]
    fn test_reserved_bit_ignored() {
        let flags = StatusFlags::from_register(STATUS_RESERVED);
        assert!(!flags.any());

        let all = StatusFlags::from_register(0xFF);
        for alert in StatusAlert::ALL {
            assert!(all.is_set(alert));
        }
    }

    #[test]
    fn test_mode_codes() {
        assert_eq!(AdcMode::Sleep.code(), Some(0));
        assert_eq!(AdcMode::Manual.code(), Some(1));
        assert_eq!(AdcMode::Scan.code(), Some(2));
        assert_eq!(AdcMode::Automatic.code(), Some(3));
        assert_eq!(AdcMode::Undefined.code(), None);

        for mode in AdcMode::SETTABLE {
            assert_eq!(AdcMode::from_code(mode.code().unwrap()), mode);
        }
    }

    #[test]
    fn test_mode_default_is_undefined() {
        assert_eq!(AdcMode::default(), AdcMode::Undefined);
    }

    #[test]
    fn test_mode_try_from() {
        assert_eq!(AdcMode::try_from(2u8), Ok(AdcMode::Scan));
        assert_eq!(AdcMode::try_from(4u8), Err(InvalidModeCode(4)));
        assert_eq!(AdcMode::try_from(0xFFu8), Err(InvalidModeCode(0xFF)));
    }

    #[test]
    fn test_mode_in_low_bits() {
        assert_eq!(ADC_MODE_MASK, 0b0000_0011);
        assert_eq!(AdcMode::from_control(0b1011_1001), AdcMode::Manual);
        assert_eq!(AdcMode::from_control(0b1111_1100), AdcMode::Sleep);
    }

    #[test]
    fn test_apply_preserves_other_bits() {
        assert_eq!(
            AdcMode::Scan.apply_to_control(0b1011_1001),
            Some(0b1011_1010)
        );
        assert_eq!(AdcMode::Sleep.apply_to_control(0xFF), Some(0b1111_1100));
        assert_eq!(AdcMode::Undefined.apply_to_control(0x00), None);
    }

    #[test]
    fn test_replace_mode_code_stays_in_field() {
        assert_eq!(replace_mode_code(0b1011_1001, 0b10), 0b1011_1010);
        assert_eq!(replace_mode_code(0x00, 0b111), 0b0000_0011);
    }
}
