//! In-memory pixel buffer in the controller's page layout
//!
//! The ST7565 display RAM is split into [`PAGES`] horizontal bands, each
//! eight pixels tall. Every byte covers one column of one page, with bit 0
//! holding the top row of the band ("vertical, LSB first"):
//!
//! ```text
//!            x=0   x=1         x=127
//! page 0   [byte0][byte1] ... [byte127]   rows 0..=7
//! page 1   [128  ][129  ] ... [255    ]   rows 8..=15
//! ...
//! page 7   [896  ][897  ] ... [1023   ]   rows 56..=63
//! ```
//!
//! The buffer is stored in exactly this order so a page can be sent to the
//! controller as one contiguous slice.
//!
//! Coordinates outside the panel are rejected: writes are ignored and reads
//! return `None`.
//!
//! ## Example
//!
//! ```
//! use st7565::FrameBuffer;
//!
//! let mut fb = FrameBuffer::new();
//! fb.set_pixel(0, 0, true);
//! fb.set_pixel(127, 63, true);
//!
//! assert_eq!(fb.as_bytes()[0], 0x01);
//! assert_eq!(fb.as_bytes()[1023], 0x80);
//! assert_eq!(fb.get_pixel(128, 0), None);
//! ```

/// Panel width in pixels
pub const WIDTH: usize = 128;

/// Panel height in pixels
pub const HEIGHT: usize = 64;

/// Number of 8-row pages
pub const PAGES: usize = HEIGHT / 8;

/// Buffer size in bytes
pub const BUFFER_SIZE: usize = WIDTH * HEIGHT / 8;

/// Monochrome 128x64 frame buffer
#[derive(Clone, PartialEq)]
pub struct FrameBuffer {
    bytes: [u8; BUFFER_SIZE],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("width", &WIDTH)
            .field("height", &HEIGHT)
            .finish_non_exhaustive()
    }
}

impl FrameBuffer {
    /// Create a buffer with every pixel off
    pub const fn new() -> Self {
        Self {
            bytes: [0; BUFFER_SIZE],
        }
    }

    /// Width in pixels
    pub const fn width(&self) -> usize {
        WIDTH
    }

    /// Height in pixels
    pub const fn height(&self) -> usize {
        HEIGHT
    }

    /// Byte index and bit mask for a pixel, or `None` outside the panel
    pub fn pixel_address(x: usize, y: usize) -> Option<(usize, u8)> {
        if x >= WIDTH || y >= HEIGHT {
            return None;
        }
        Some(((y / 8) * WIDTH + x, 1 << (y % 8)))
    }

    /// Turn a pixel on or off
    ///
    /// Out-of-range coordinates are ignored.
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        let Some((index, bit)) = Self::pixel_address(x, y) else {
            return;
        };
        if on {
            self.bytes[index] |= bit;
        } else {
            self.bytes[index] &= !bit;
        }
    }

    /// Read a pixel, `None` outside the panel
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<bool> {
        Self::pixel_address(x, y).map(|(index, bit)| self.bytes[index] & bit != 0)
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.fill(false);
    }

    /// Turn every pixel on or off
    pub fn fill(&mut self, on: bool) {
        self.bytes.fill(if on { 0xFF } else { 0x00 });
    }

    /// Packed bytes, page-major, columns left to right
    pub fn as_bytes(&self) -> &[u8; BUFFER_SIZE] {
        &self.bytes
    }

    /// Mutable packed bytes, for blitting data already in page layout
    pub fn as_bytes_mut(&mut self) -> &mut [u8; BUFFER_SIZE] {
        &mut self.bytes
    }

    /// The `WIDTH` bytes of one page, `None` if `page >= PAGES`
    pub fn page(&self, page: usize) -> Option<&[u8]> {
        if page >= PAGES {
            return None;
        }
        let start = page * WIDTH;
        Some(&self.bytes[start..start + WIDTH])
    }
}
