//! ST7565 LCD Driver
//!
//! A driver for the ST7565 monochrome dot-matrix LCD controller driving
//! 128x64 panels over SPI.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Fixed 1 KiB frame buffer in the controller's native page layout
//! - Configurable bias, scan direction, regulator and contrast
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use st7565::{Builder, Display, Interface};
//!
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
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let a0 = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, a0, rst);
//! let config = match Builder::new().contrast(0x1B).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! // Resets and initializes the controller
//! let mut display = match Display::new(interface, config, &mut delay) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//!
//! display.buffer_mut().set_pixel(0, 0, true);
//! let _ = display.flush();
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// ST7565 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Page-layout pixel buffer
pub mod framebuffer;
/// Hardware interface abstraction
pub mod interface;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use config::{
    Bias, Builder, CommonDirection, Config, MAX_CONTRAST, MIN_CONTRAST, SegmentDirection,
};
pub use display::{Display, RESET_SETTLE_MS, State};
pub use error::{BuilderError, Error, InitError};
pub use framebuffer::{BUFFER_SIZE, FrameBuffer, HEIGHT, PAGES, WIDTH};
pub use interface::{BusInterface, DisplayInterface, Interface, InterfaceError, RESET_PULSE_US};
