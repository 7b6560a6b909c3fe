//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! Out-of-range pixel coordinates are never an error: the frame buffer
//! ignores writes and returns `None` for reads outside the panel.
//!
//! ## Example
//!
//! ```
//! use st7565::{Builder, BuilderError};
//!
//! // Contrast outside 0x01..=0x3F
//! let result = Builder::new().contrast(0x40).build();
//! assert!(matches!(result, Err(BuilderError::InvalidContrast { value: 0x40 })));
//!
//! // Resistor ratio is a 3-bit field
//! let result = Builder::new().resistor_ratio(8).build();
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Lowest contrast (electronic volume) value accepted by the controller
pub const MIN_CONTRAST: u8 = 0x01;

/// Highest contrast (electronic volume) value accepted by the controller
pub const MAX_CONTRAST: u8 = 0x3F;

/// Highest value of the 3-bit resistor ratio and power control operands
pub const MAX_THREE_BIT_OPERAND: u8 = 0x07;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    /// The operation that produced it was abandoned part-way.
    Interface(I::Error),
    /// The controller has not been initialized
    ///
    /// Returned after [`Display::reset`](crate::Display::reset) or a failed
    /// [`Display::initialize`](crate::Display::initialize) until initialization
    /// completes again.
    NotInitialized,
    /// Contrast value outside `MIN_CONTRAST..=MAX_CONTRAST`
    ///
    /// Only returned by [`Display::try_set_contrast`](crate::Display::try_set_contrast).
    InvalidContrast {
        /// Rejected value
        value: u8,
    },
    /// A [`Config`](crate::Config) field is out of range
    ///
    /// Returned by [`Display::initialize`](crate::Display::initialize) before
    /// anything is sent to the controller.
    InvalidConfig(BuilderError),
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::NotInitialized => write!(f, "Display not initialized"),
            Self::InvalidContrast { value } => write!(
                f,
                "Invalid contrast {value:#04x} (valid {MIN_CONTRAST:#04x}..={MAX_CONTRAST:#04x})"
            ),
            Self::InvalidConfig(e) => write!(f, "Invalid configuration: {e}"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Failed [`Display::new`](crate::Display::new)
///
/// Carries the interface back so the caller can retry with the same SPI
/// device and pins.
#[derive(Debug)]
pub struct InitError<I: DisplayInterface> {
    /// Why initialization failed
    pub error: Error<I>,
    /// The interface passed to `Display::new`
    pub interface: I,
}

impl<I: DisplayInterface> InitError<I> {
    /// Split into the error and the interface
    pub fn into_parts(self) -> (Error<I>, I) {
        (self.error, self.interface)
    }
}

impl<I: DisplayInterface> core::fmt::Display for InitError<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Initialization failed: {}", self.error)
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for InitError<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Initial contrast outside `MIN_CONTRAST..=MAX_CONTRAST`
    InvalidContrast {
        /// Rejected value
        value: u8,
    },
    /// Resistor ratio does not fit in 3 bits
    InvalidResistorRatio {
        /// Rejected value
        value: u8,
    },
    /// Power control mode does not fit in 3 bits
    InvalidPowerMode {
        /// Rejected value
        value: u8,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidContrast { value } => write!(
                f,
                "Invalid contrast {value:#04x} (valid {MIN_CONTRAST:#04x}..={MAX_CONTRAST:#04x})"
            ),
            Self::InvalidResistorRatio { value } => write!(
                f,
                "Invalid resistor ratio {value} (max {MAX_THREE_BIT_OPERAND})"
            ),
            Self::InvalidPowerMode { value } => {
                write!(f, "Invalid power mode {value} (max {MAX_THREE_BIT_OPERAND})")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
