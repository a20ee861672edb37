//! Indicator rasterization
//!
//! Turns a [`RadarFrame`](crate::radar::RadarFrame) into the finished
//! 128x64 monochrome bitmap the display sink consumes, one 8-pixel-tall
//! band at a time.

pub mod bitmap;
pub mod indicator;

pub use bitmap::{TrafficBitmap, BAND_BYTES, HEIGHT, NUM_BANDS, WIDTH};
pub use indicator::rasterize;
