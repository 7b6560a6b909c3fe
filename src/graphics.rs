//! Graphics support via embedded-graphics
//!
//! Implements [`DrawTarget`] and [`OriginDimensions`] for [`FrameBuffer`] and
//! [`Display`] using [`BinaryColor`]. `BinaryColor::On` is a dark pixel.
//!
//! Drawing only touches the in-memory buffer; nothing reaches the panel until
//! [`Display::flush`] is called.
//!
//! [`FrameBuffer::clear`] shadows [`DrawTarget::clear`] in method-call
//! syntax. Call `DrawTarget::clear(&mut target, color)` to clear to a color.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     pixelcolor::BinaryColor,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! use st7565::{Builder, Display, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
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
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut delay = MockDelay;
//! # let interface = Interface::new(MockSpi, MockPin, MockPin);
//! # let config = match Builder::new().build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! let mut display = match Display::new(interface, config, &mut delay) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//!
//! let _ = Rectangle::new(Point::new(0, 0), Size::new(128, 64))
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
//!     .draw(&mut display);
//!
//! let _ = Circle::new(Point::new(96, 16), 24)
//!     .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
//!     .draw(&mut display);
//!
//! let _ = Text::new(
//!     "Hello, ST7565!",
//!     Point::new(6, 32),
//!     MonoTextStyle::new(&FONT_6X10, BinaryColor::On),
//! )
//! .draw(&mut display);
//!
//! // Update physical display
//! let _ = display.flush();
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
    prelude::Pixel,
};

use crate::display::Display;
use crate::framebuffer::FrameBuffer;
use crate::interface::DisplayInterface;

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            // Negative coordinates fail the conversion, large ones are
            // rejected by set_pixel
            let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
                continue;
            };
            self.set_pixel(x, y, color.is_on());
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.is_on());
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.width() as u32, self.height() as u32)
    }
}

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.buffer_mut().draw_iter(pixels)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        DrawTarget::clear(self.buffer_mut(), color)
    }
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        self.buffer().size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::framebuffer::{PAGES, WIDTH};
    use embedded_graphics::Drawable;
    use embedded_graphics::prelude::Primitive;
    use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
    use embedded_hal::delay::DelayNs;

    #[derive(Debug)]
    struct MockInterface;

    impl DisplayInterface for MockInterface {
        type Error = core::convert::Infallible;

        fn send_command(&mut self, _command: u8) -> Result<(), Self::Error> {
            Ok(())
        }

        fn send_data(&mut self, _data: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    struct MockDelay;
    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn test_display() -> Display<MockInterface> {
        Display::new(MockInterface, Config::default(), &mut MockDelay).unwrap()
    }

    #[test]
    fn test_size_matches_panel() {
        let fb = FrameBuffer::new();
        assert_eq!((fb.width(), fb.height()), (128, 64));
        assert_eq!(fb.size(), Size::new(128, 64));
        assert_eq!(test_display().size(), Size::new(128, 64));
    }

    #[test]
    fn test_filled_rectangle_fills_one_page() {
        let mut fb = FrameBuffer::new();
        Rectangle::new(Point::new(0, 8), Size::new(128, 8))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut fb)
            .unwrap();

        for page in 0..PAGES {
            let expected = if page == 1 { 0xFF } else { 0x00 };
            assert!(fb.page(page).unwrap().iter().all(|b| *b == expected));
        }
    }

    #[test]
    fn test_top_line_sets_bit_zero() {
        let mut fb = FrameBuffer::new();
        Line::new(Point::new(0, 0), Point::new(127, 0))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut fb)
            .unwrap();

        assert!(fb.page(0).unwrap().iter().all(|b| *b == 0x01));
    }

    #[test]
    fn test_off_color_clears_pixels() {
        let mut fb = FrameBuffer::new();
        fb.fill(true);
        Pixel(Point::new(10, 9), BinaryColor::Off)
            .draw(&mut fb)
            .unwrap();

        assert_eq!(fb.get_pixel(10, 9), Some(false));
        assert_eq!(fb.as_bytes()[WIDTH + 10], !0x02);
    }

    #[test]
    fn test_out_of_bounds_pixels_are_dropped() {
        let mut fb = FrameBuffer::new();
        fb.draw_iter([
            Pixel(Point::new(-1, 0), BinaryColor::On),
            Pixel(Point::new(0, -1), BinaryColor::On),
            Pixel(Point::new(128, 0), BinaryColor::On),
            Pixel(Point::new(0, 64), BinaryColor::On),
        ])
        .unwrap();

        assert!(fb.as_bytes().iter().all(|b| *b == 0));
    }

    #[test]
    fn test_draw_target_clear() {
        let mut display = test_display();
        DrawTarget::clear(&mut display, BinaryColor::On).unwrap();
        assert!(display.buffer().as_bytes().iter().all(|b| *b == 0xFF));

        DrawTarget::clear(&mut display, BinaryColor::Off).unwrap();
        assert!(display.buffer().as_bytes().iter().all(|b| *b == 0x00));
    }

    #[test]
    fn test_drawing_on_display_writes_its_buffer() {
        let mut display = test_display();
        Pixel(Point::new(127, 63), BinaryColor::On)
            .draw(&mut display)
            .unwrap();

        assert_eq!(display.buffer().page(PAGES - 1).unwrap()[WIDTH - 1], 0x80);
    }
}
