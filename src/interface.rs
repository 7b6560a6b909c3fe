//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and two implementations
//! for talking to the ST7565 over SPI.
//!
//! ## Hardware Requirements
//!
//! The ST7565 requires:
//! - SPI bus (MOSI + SCK), mode 0 or 3, write only
//! - Chip select (CS1B, active low)
//! - 2 GPIO pins:
//!   - **A0 / DC**: Data/Command select (output, low = command)
//!   - **RST**: Reset (output, active low)
//!
//! The controller latches A0 when chip select is asserted, so chip select
//! has to be released after every command or data write. Use:
//!
//! - [`Interface`] with an [`SpiDevice`]; the device asserts chip select for
//!   exactly one transaction per write.
//! - [`BusInterface`] with a raw [`SpiBus`] and a chip select [`OutputPin`]
//!   when the bus is not shared and no `SpiDevice` wrapper is available.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use st7565::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! # let mut delay = MockDelay;
//! // Create interface with SPI and GPIO pins
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//!
//! // Pulse the reset line
//! let _ = interface.reset(&mut delay);
//!
//! // Send command
//! let _ = interface.send_command(0xAF); // Display on
//!
//! // Send data
//! let _ = interface.send_data(&[0xFF, 0x00, 0xFF]);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::{SpiBus, SpiDevice};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// How long the reset line is held low, in microseconds
pub const RESET_PULSE_US: u32 = 1;

/// Trait for hardware interface to ST7565 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation that satisfies embedded-hal traits.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] or [`BusInterface`]. If you
/// need custom behavior (e.g., a parallel bus or inverted pins), implement
/// this trait on your own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a single command byte to the controller
    ///
    /// The implementation must:
    /// 1. Set A0 low (command mode)
    /// 2. Assert chip select
    /// 3. Send the command byte
    /// 4. Release chip select
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send display data bytes to the controller
    ///
    /// Same as [`send_command`](Self::send_command) with A0 high, for an
    /// arbitrary number of bytes inside one chip select window.
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Pulse the reset line
    ///
    /// The implementation must:
    /// 1. Set RST low
    /// 2. Wait [`RESET_PULSE_US`]
    /// 3. Set RST high
    ///
    /// Post-reset settle time is the caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns an error if driving the reset pin fails.
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

fn pulse_reset<RST: OutputPin, D: DelayNs>(
    rst: &mut RST,
    delay: &mut D,
) -> InterfaceResult<(), RST::Error> {
    rst.set_low()?;
    delay.delay_us(RESET_PULSE_US);
    rst.set_high()
}

/// Hardware interface over an [`SpiDevice`]
///
/// The `SpiDevice` owns chip select and asserts it for the duration of each
/// write, which gives the per-write framing the controller needs.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - A0 (Data/Command) pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
///
/// ## Example
///
/// ```rust,no_run
/// use st7565::{Builder, Display, Interface};
/// # use core::convert::Infallible;
/// # use embedded_hal::delay::DelayNs;
/// # use embedded_hal::digital::OutputPin;
/// # use embedded_hal::spi::{Operation, SpiDevice};
/// # struct MockSpi;
/// # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
/// # impl SpiDevice for MockSpi {
/// #     fn transaction(
/// #         &mut self,
/// #         _operations: &mut [Operation<'_, u8>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// # struct MockPin;
/// # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
/// # impl OutputPin for MockPin {
/// #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// # struct MockDelay;
/// # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
/// # let mut delay = MockDelay;
/// let interface = Interface::new(
///     MockSpi,  // SpiDevice
///     MockPin,  // A0
///     MockPin,  // RST
/// );
///
/// // Use with Display
/// # let config = match Builder::new().build() {
/// #     Ok(config) => config,
/// #     Err(_) => return,
/// # };
/// let _display = Display::new(interface, config, &mut delay);
/// ```
pub struct Interface<SPI, DC, RST> {
    /// SPI device for communication
    spi: SPI,
    /// A0 pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
}

impl<SPI, DC, RST> Interface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI device (must implement [`SpiDevice`])
    /// * `dc` - A0 pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low)
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        Self { spi, dc, rst }
    }

    /// Release the SPI device and pins
    pub fn release(self) -> (SPI, DC, RST) {
        (self.spi, self.dc, self.rst)
    }
}

impl<SPI, DC, RST, PinErr> DisplayInterface for Interface<SPI, DC, RST>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.write(data).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        pulse_reset(&mut self.rst, delay).map_err(InterfaceError::Pin)
    }
}

/// Hardware interface over an exclusive [`SpiBus`] with a chip select pin
///
/// Every write drives CS low, transfers, waits for the bus to drain with
/// [`SpiBus::flush`], then drives CS high again. CS is released even when
/// the transfer itself fails; if releasing it fails too, the SPI error is
/// the one reported.
///
/// The CS pin should be configured high (inactive) before the interface is
/// created.
pub struct BusInterface<SPI, DC, CS, RST> {
    /// SPI bus for communication
    spi: SPI,
    /// A0 pin (low=command, high=data)
    dc: DC,
    /// Chip select (active low)
    cs: CS,
    /// Reset pin (active low)
    rst: RST,
}

impl<SPI, DC, CS, RST> BusInterface<SPI, DC, CS, RST>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
{
    /// Create a new BusInterface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI bus (must implement [`SpiBus`])
    /// * `dc` - A0 pin (output, low=command, high=data)
    /// * `cs` - Chip select pin (output, active low)
    /// * `rst` - Reset pin (output, active low)
    pub fn new(spi: SPI, dc: DC, cs: CS, rst: RST) -> Self {
        Self { spi, dc, cs, rst }
    }

    /// Release the SPI bus and pins
    pub fn release(self) -> (SPI, DC, CS, RST) {
        (self.spi, self.dc, self.cs, self.rst)
    }
}

impl<SPI, DC, CS, RST, PinErr> BusInterface<SPI, DC, CS, RST>
where
    SPI: SpiBus,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    CS: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    fn framed_write(
        &mut self,
        bytes: &[u8],
    ) -> InterfaceResult<(), InterfaceError<SPI::Error, PinErr>> {
        self.cs.set_low().map_err(InterfaceError::Pin)?;
        let written = self.spi.write(bytes).and_then(|()| self.spi.flush());
        let released = self.cs.set_high();
        written.map_err(InterfaceError::Spi)?;
        released.map_err(InterfaceError::Pin)
    }
}

impl<SPI, DC, CS, RST, PinErr> DisplayInterface for BusInterface<SPI, DC, CS, RST>
where
    SPI: SpiBus,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    CS: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.framed_write(&[command])
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.framed_write(data)
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        pulse_reset(&mut self.rst, delay).map_err(InterfaceError::Pin)
    }
}
