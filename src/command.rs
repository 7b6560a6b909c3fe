//! ST7565 command definitions
//!
//! This module defines the command bytes understood by the ST7565 LCD
//! controller. Commands are sent over SPI with the A0 (DC) pin low; pixel
//! data is sent with A0 high.
//!
//! Several commands carry their operand in the low bits of the opcode
//! itself (page address, start line, resistor ratio, power mode). The
//! `const fn` helpers in this module build those bytes and mask the operand
//! so it can never spill into the opcode bits.
//!
//! ## Example
//!
//! ```rust,no_run
//! use st7565::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//! # let page_data = [0u8; 128];
//! // Address page 3, column 0
//! let _ = interface.send_command(command::set_page(3));
//! let _ = interface.send_command(command::column_high(0));
//! let _ = interface.send_command(command::column_low(0));
//! let _ = interface.send_data(&page_data);
//! ```

// Display control

/// Display on (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

/// Display off (0xAE)
///
/// Blanks the panel; display RAM is kept.
pub const DISPLAY_OFF: u8 = 0xAE;

/// Normal display, set bits are dark pixels (0xA6)
pub const DISPLAY_NORMAL: u8 = 0xA6;

/// Reverse display, set bits are light pixels (0xA7)
pub const DISPLAY_REVERSE: u8 = 0xA7;

/// Show display RAM contents (0xA4)
pub const ALL_PIXELS_NORMAL: u8 = 0xA4;

/// Force every pixel on regardless of RAM (0xA5)
pub const ALL_PIXELS_ON: u8 = 0xA5;

// Addressing

/// Display start line base (0x40)
///
/// The low 6 bits select the RAM line shown at the top of the panel.
pub const SET_START_LINE: u8 = 0x40;

/// Page address base (0xB0)
///
/// The low 4 bits select the page (8-row band) for subsequent data writes.
pub const SET_PAGE: u8 = 0xB0;

/// Column address upper nibble base (0x10)
pub const COLUMN_UPPER: u8 = 0x10;

/// Column address lower nibble base (0x00)
pub const COLUMN_LOWER: u8 = 0x00;

// Scan direction

/// Segment (column) driver direction normal, ADC normal (0xA0)
pub const SEGMENT_NORMAL: u8 = 0xA0;

/// Segment (column) driver direction reversed, ADC reverse (0xA1)
pub const SEGMENT_REVERSE: u8 = 0xA1;

/// Common (row) output scan direction normal (0xC0)
pub const COMMON_NORMAL: u8 = 0xC0;

/// Common (row) output scan direction reversed (0xC8)
pub const COMMON_REVERSE: u8 = 0xC8;

// Analog setup

/// LCD bias 1/9 (0xA2)
pub const BIAS_1_9: u8 = 0xA2;

/// LCD bias 1/7 (0xA3)
pub const BIAS_1_7: u8 = 0xA3;

/// V0 voltage regulator internal resistor ratio base (0x20)
///
/// The low 3 bits carry the ratio.
pub const SET_RESISTOR_RATIO: u8 = 0x20;

/// Electronic volume (contrast) mode set (0x81)
///
/// Must be followed by a second command byte holding the 6-bit contrast.
pub const SET_CONTRAST: u8 = 0x81;

/// Power control base (0x28)
///
/// The low 3 bits enable booster, regulator and follower.
pub const SET_POWER_CONTROL: u8 = 0x28;

/// Build the "set page address" command for `page` (0..=15)
pub const fn set_page(page: u8) -> u8 {
    SET_PAGE | (page & 0x0F)
}

/// Build the "set display start line" command for `line` (0..=63)
pub const fn set_start_line(line: u8) -> u8 {
    SET_START_LINE | (line & 0x3F)
}

/// Upper nibble of a column address
pub const fn column_high(column: u8) -> u8 {
    COLUMN_UPPER | (column >> 4)
}

/// Lower nibble of a column address
pub const fn column_low(column: u8) -> u8 {
    COLUMN_LOWER | (column & 0x0F)
}

/// Build the resistor ratio command for `ratio` (0..=7)
pub const fn resistor_ratio(ratio: u8) -> u8 {
    SET_RESISTOR_RATIO | (ratio & 0x07)
}

/// Build the power control command for `mode` (0..=7)
pub const fn power_control(mode: u8) -> u8 {
    SET_POWER_CONTROL | (mode & 0x07)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_on_and_off_are_distinct() {
        assert_ne!(DISPLAY_ON, DISPLAY_OFF);
        assert_eq!(DISPLAY_ON, 0xAF);
        assert_eq!(DISPLAY_OFF, 0xAE);
    }

    #[test]
    fn test_set_page() {
        assert_eq!(set_page(0), 0xB0);
        assert_eq!(set_page(7), 0xB7);
        // Operand must not leak into the opcode
        assert_eq!(set_page(0x1F), 0xBF);
    }

    #[test]
    fn test_column_nibbles() {
        assert_eq!(column_high(0), 0x10);
        assert_eq!(column_low(0), 0x00);
        assert_eq!(column_high(127), 0x17);
        assert_eq!(column_low(127), 0x0F);
    }

    #[test]
    fn test_two_part_opcodes() {
        assert_eq!(resistor_ratio(5), 0x25);
        assert_eq!(power_control(7), 0x2F);
        assert_eq!(resistor_ratio(0xFF), 0x27);
        assert_eq!(set_start_line(0), 0x40);
        assert_eq!(set_start_line(63), 0x7F);
    }
}
