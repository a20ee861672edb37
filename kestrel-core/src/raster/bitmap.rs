//! 1bpp page-packed frame bitmap
//!
//! Binary contract with the display sink: 128x64 pixels stored as 8
//! horizontal bands of 128 bytes, each byte holding 8 vertically stacked
//! pixels with the topmost pixel in bit 0. This is exactly the tile format
//! the panel's update protocol takes, so bands can be handed over without
//! any repacking:
//!
//! ```text
//! byte = WIDTH * (y / 8) + x
//! bit  = y % 8
//! ```
//!
//! Painting only ever sets bits; a pixel painted once stays set for the
//! rest of the frame.

/// Panel width in pixels
pub const WIDTH: usize = 128;

/// Panel height in pixels
pub const HEIGHT: usize = 64;

/// Number of 8-pixel-tall bands
pub const NUM_BANDS: usize = HEIGHT / 8;

/// Bytes per band
pub const BAND_BYTES: usize = WIDTH;

/// One full frame of the traffic page
#[derive(Clone, Debug)]
pub struct TrafficBitmap {
    bytes: [u8; WIDTH * NUM_BANDS],
}

impl TrafficBitmap {
    /// An all-dark frame
    pub const fn new() -> Self {
        Self {
            bytes: [0; WIDTH * NUM_BANDS],
        }
    }

    /// Set one pixel; coordinates outside the panel are ignored
    pub fn set_pixel(&mut self, x: i32, y: i32) {
        if (0..WIDTH as i32).contains(&x) && (0..HEIGHT as i32).contains(&y) {
            let byte = WIDTH * (y as usize / 8) + x as usize;
            self.bytes[byte] |= 1 << (y as usize % 8);
        }
    }

    /// Read one pixel
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }
        self.bytes[WIDTH * (y / 8) + x] & (1 << (y % 8)) != 0
    }

    /// Paint a filled square centered on (`cx`, `cy`)
    ///
    /// The half-width is `size / 2` with integer truncation on both
    /// extents, matching the panel's established rendering to the pixel.
    /// All shipped sizes are odd, giving symmetric squares.
    pub fn fill_square(&mut self, cx: i32, cy: i32, size: u8) {
        let half = size as i32 / 2;
        for dx in -half..=half {
            for dy in -half..=half {
                self.set_pixel(cx + dx, cy + dy);
            }
        }
    }

    /// One 8-pixel-tall band, top to bottom
    pub fn band(&self, index: usize) -> &[u8] {
        &self.bytes[index * BAND_BYTES..(index + 1) * BAND_BYTES]
    }

    /// The whole frame as raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of lit pixels, for diagnostics
    pub fn lit_pixels(&self) -> u32 {
        self.bytes.iter().map(|b| b.count_ones()).sum()
    }
}

impl Default for TrafficBitmap {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for TrafficBitmap {
    fn eq(&self, other: &Self) -> bool {
        self.bytes[..] == other.bytes[..]
    }
}

impl Eq for TrafficBitmap {}
