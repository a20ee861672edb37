//! Display backend trait
//!
//! Abstracts the panel as the 16x8 grid of 8x8-pixel cells the device's
//! OLED driver exposes, plus raw tile access for the traffic bitmap. The
//! bus protocol and fonts belong to the implementation, not to this crate.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the panel
    Communication,
    /// Coordinates outside the cell grid
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
}

/// Cell grid width of the 128x64 panel
pub const DISPLAY_COLS: u8 = 16;

/// Cell grid height of the 128x64 panel
pub const DISPLAY_ROWS: u8 = 8;

/// Display backend trait
///
/// Coordinates are (column, row) in 8-pixel cells, matching the panel's
/// page-addressed layout. Double-size text occupies a 2x2 cell block per
/// character.
pub trait DisplayBackend {
    /// Clear the entire panel
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text in the regular 8x8 font
    fn text(&mut self, col: u8, row: u8, text: &str) -> Result<(), DisplayError>;

    /// Draw text in the double-size font
    fn text_big(&mut self, col: u8, row: u8, text: &str) -> Result<(), DisplayError>;

    /// Draw a single glyph in the regular font
    fn glyph(&mut self, col: u8, row: u8, ch: char) -> Result<(), DisplayError>;

    /// Draw a single glyph in the double-size font
    fn glyph_big(&mut self, col: u8, row: u8, ch: char) -> Result<(), DisplayError>;

    /// Write raw tile data into one 8-pixel-tall band
    ///
    /// `data` holds one column-packed byte per pixel column starting at
    /// `col * 8`; a 128-byte slice at column 0 replaces the full band.
    fn tiles(&mut self, col: u8, band: u8, data: &[u8]) -> Result<(), DisplayError>;
}
