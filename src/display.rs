//! Core display operations

use embedded_hal::delay::DelayNs;
use log::{debug, trace, warn};

use crate::command::{
    self, ALL_PIXELS_NORMAL, ALL_PIXELS_ON, DISPLAY_NORMAL, DISPLAY_OFF, DISPLAY_ON,
    DISPLAY_REVERSE, SET_CONTRAST,
};
use crate::config::{Config, MAX_CONTRAST, MIN_CONTRAST};
use crate::error::{Error, InitError};
use crate::framebuffer::{FrameBuffer, PAGES};
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Time the controller needs after reset before it accepts commands, in milliseconds
pub const RESET_SETTLE_MS: u32 = 1;

/// Driver state
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum State {
    /// No configuration has been sent, or the controller was reset
    Uninitialized,
    /// The power-up sequence is in progress
    Initializing,
    /// The controller is configured and the display is on
    Ready,
}

/// Core display driver for ST7565
///
/// Owns the hardware interface and a [`FrameBuffer`]. Draw into the buffer
/// with [`buffer_mut`](Self::buffer_mut) (or through embedded-graphics with
/// the `graphics` feature), then call [`flush`](Self::flush) to copy it to
/// the panel.
///
/// The constructor runs the full power-up sequence, so every `Display` a
/// caller holds has been initialized at least once.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Pixel data mirrored to display RAM on flush
    buffer: FrameBuffer,
    /// Last contrast value accepted by the controller
    contrast: u8,
    /// Protocol state
    state: State,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display and initialize the controller
    ///
    /// Runs [`initialize`](Self::initialize): reset pulse, settle delay,
    /// power-up commands, a blank flush and display on.
    ///
    /// # Errors
    ///
    /// Returns an [`InitError`] holding the interface and either the first
    /// interface error hit during initialization or
    /// [`Error::InvalidConfig`] if a `config` field is out of range.
    pub fn new<D: DelayNs>(
        interface: I,
        config: Config,
        delay: &mut D,
    ) -> Result<Self, InitError<I>> {
        let mut display = Self {
            interface,
            contrast: config.contrast,
            config,
            buffer: FrameBuffer::new(),
            state: State::Uninitialized,
        };
        match display.initialize(delay) {
            Ok(()) => Ok(display),
            Err(error) => Err(InitError {
                error,
                interface: display.release(),
            }),
        }
    }

    /// Reset and configure the controller, then show the buffer
    ///
    /// Sequence:
    /// 1. Reset pulse
    /// 2. [`RESET_SETTLE_MS`] settle delay
    /// 3. Display off, bias, segment direction, common direction, resistor
    ///    ratio, contrast select + value, power control
    /// 4. [`flush`](Self::flush)
    /// 5. Display on
    ///
    /// On error the driver is left [`State::Uninitialized`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] if the configuration is out of range, checked
    /// before anything is sent. Otherwise the first interface error.
    pub fn initialize<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.config.validate().map_err(Error::InvalidConfig)?;

        self.state = State::Initializing;
        let result = self.power_up(delay);
        self.state = if result.is_ok() {
            State::Ready
        } else {
            State::Uninitialized
        };
        result
    }

    fn power_up<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        debug!("st7565: reset");
        self.interface.reset(delay).map_err(Error::Interface)?;
        delay.delay_ms(RESET_SETTLE_MS);

        for cmd in self.config.init_sequence() {
            self.send_command(cmd)?;
        }
        self.contrast = self.config.contrast;

        self.flush()?;
        self.send_command(DISPLAY_ON)?;
        debug!("st7565: initialized, contrast {:#04x}", self.contrast);
        Ok(())
    }

    /// Pulse the reset line
    ///
    /// Only the reset pulse is issued. The controller loses its
    /// configuration, so the driver drops back to [`State::Uninitialized`]
    /// and [`initialize`](Self::initialize) must run before the next flush.
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        debug!("st7565: reset");
        self.state = State::Uninitialized;
        self.interface.reset(delay).map_err(Error::Interface)
    }

    /// Copy the whole frame buffer to display RAM
    ///
    /// For each page: start line 0, page address, column 0, then the
    /// page's `WIDTH` bytes in one data write. The column address is reset
    /// for every page, so each page always lands at columns `0..WIDTH`.
    ///
    /// # Errors
    ///
    /// [`Error::NotInitialized`] before initialization, otherwise the first
    /// interface error. Pages already sent stay on the panel.
    pub fn flush(&mut self) -> DisplayResult<I> {
        if self.state == State::Uninitialized {
            return Err(Error::NotInitialized);
        }

        for page in 0..PAGES {
            trace!("st7565: flush page {page}");
            self.send_command(command::set_start_line(0))?;
            self.send_command(command::set_page(page as u8))?;
            self.send_command(command::column_high(0))?;
            self.send_command(command::column_low(0))?;

            let Some(bytes) = self.buffer.page(page) else {
                break;
            };
            self.interface.send_data(bytes).map_err(Error::Interface)?;
        }

        Ok(())
    }

    /// Set the contrast (electronic volume)
    ///
    /// Values outside `0x01..=0x3F` are ignored: nothing is sent and the
    /// stored contrast is unchanged. Use
    /// [`try_set_contrast`](Self::try_set_contrast) to get an error instead.
    /// Takes effect immediately, without a flush.
    pub fn set_contrast(&mut self, value: u8) -> DisplayResult<I> {
        if !(MIN_CONTRAST..=MAX_CONTRAST).contains(&value) {
            warn!("st7565: ignoring contrast {value:#04x}");
            return Ok(());
        }
        self.write_contrast(value)
    }

    /// Set the contrast, rejecting out-of-range values
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidContrast`] for values outside `0x01..=0x3F`.
    pub fn try_set_contrast(&mut self, value: u8) -> DisplayResult<I> {
        if !(MIN_CONTRAST..=MAX_CONTRAST).contains(&value) {
            return Err(Error::InvalidContrast { value });
        }
        self.write_contrast(value)
    }

    fn write_contrast(&mut self, value: u8) -> DisplayResult<I> {
        self.ensure_ready()?;
        self.send_command(SET_CONTRAST)?;
        self.send_command(value)?;
        self.contrast = value;
        Ok(())
    }

    /// Turn the panel on or off
    ///
    /// Display RAM is kept while off.
    pub fn set_display_on(&mut self, on: bool) -> DisplayResult<I> {
        self.ensure_ready()?;
        self.send_command(if on { DISPLAY_ON } else { DISPLAY_OFF })
    }

    /// Swap light and dark pixels in hardware
    pub fn set_inverted(&mut self, inverted: bool) -> DisplayResult<I> {
        self.ensure_ready()?;
        self.send_command(if inverted {
            DISPLAY_REVERSE
        } else {
            DISPLAY_NORMAL
        })
    }

    /// Force every pixel on, ignoring display RAM
    pub fn set_all_pixels_on(&mut self, on: bool) -> DisplayResult<I> {
        self.ensure_ready()?;
        self.send_command(if on { ALL_PIXELS_ON } else { ALL_PIXELS_NORMAL })
    }

    fn ensure_ready(&self) -> DisplayResult<I> {
        if self.state == State::Ready {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Frame buffer
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Frame buffer, for drawing
    pub fn buffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.buffer
    }

    /// Current contrast value
    pub fn contrast(&self) -> u8 {
        self.contrast
    }

    /// Current protocol state
    pub fn state(&self) -> State {
        self.state
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the driver and return the hardware interface
    pub fn release(self) -> I {
        self.interface
    }
}
