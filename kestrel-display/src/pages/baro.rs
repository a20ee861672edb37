//! Barometric readings page
//!
//! Altitude, temperature, static pressure and climb/descent rate. The
//! climb rate is clamped to +/-999 and its sign is drawn as a separate
//! small glyph so the three digits stay put.

use core::fmt::Write;

use heapless::String;

use crate::backend::{DisplayBackend, DisplayError};

/// Baro sensor snapshot for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BaroData {
    /// Barometric altitude, meters
    pub altitude_m: i32,
    /// Air temperature, degrees Celsius
    pub temperature_c: i32,
    /// Static pressure, millibar
    pub pressure_mbar: u32,
    /// Climb/descent rate, feet per minute
    pub climb_rate_fpm: i32,
}

/// Baro page with differential-redraw state
pub struct BaroPage {
    titles_drawn: bool,
    prev_altitude: Option<i32>,
    prev_temperature: Option<i32>,
    prev_pressure: Option<u32>,
    prev_climb_rate: Option<i32>,
}

impl BaroPage {
    pub fn new() -> Self {
        Self {
            titles_drawn: false,
            prev_altitude: None,
            prev_temperature: None,
            prev_pressure: None,
            prev_climb_rate: None,
        }
    }

    /// Force a full repaint on the next draw
    pub fn invalidate(&mut self) {
        self.titles_drawn = false;
    }

    pub fn draw<B: DisplayBackend>(
        &mut self,
        data: &BaroData,
        display: &mut B,
    ) -> Result<(), DisplayError> {
        if !self.titles_drawn {
            display.clear()?;

            display.text(2, 1, "ALT M")?;
            display.text(10, 1, "TEMP C")?;
            display.text(1, 5, "PRES MB")?;
            display.text(9, 5, "CDR FPM")?;

            self.prev_altitude = None;
            self.prev_temperature = None;
            self.prev_pressure = None;
            self.prev_climb_rate = None;

            self.titles_drawn = true;
        }

        if self.prev_altitude != Some(data.altitude_m) {
            let mut text: String<12> = String::new();
            let _ = write!(text, "{:4}", data.altitude_m);
            display.text_big(0, 2, &text)?;
            self.prev_altitude = Some(data.altitude_m);
        }

        if self.prev_temperature != Some(data.temperature_c) {
            let mut text: String<12> = String::new();
            let _ = write!(text, "{:3}", data.temperature_c);
            display.text_big(10, 2, &text)?;
            self.prev_temperature = Some(data.temperature_c);
        }

        if self.prev_pressure != Some(data.pressure_mbar) {
            let mut text: String<12> = String::new();
            let _ = write!(text, "{:4}", data.pressure_mbar);
            display.text_big(0, 6, &text)?;
            self.prev_pressure = Some(data.pressure_mbar);
        }

        if self.prev_climb_rate != Some(data.climb_rate_fpm) {
            let clamped = data.climb_rate_fpm.clamp(-999, 999);
            // The 2x2 font has no room for a sign, so an underline glyph
            // in the small font marks descent
            display.glyph(9, 6, if clamped < 0 { '_' } else { ' ' })?;
            let mut text: String<12> = String::new();
            let _ = write!(text, "{:3}", clamped.abs());
            display.text_big(10, 6, &text)?;
            self.prev_climb_rate = Some(data.climb_rate_fpm);
        }

        Ok(())
    }
}

impl Default for BaroPage {
    fn default() -> Self {
        Self::new()
    }
}
