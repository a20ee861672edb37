//! Aircraft/GNSS/battery status page
//!
//! Traffic count, satellites in view, fix validity, uptime as HH:MM and
//! battery voltage with one decimal. Each field keeps its previous value
//! and is redrawn only when it changed.

use core::fmt::Write;

use heapless::String;

use crate::backend::{DisplayBackend, DisplayError};

/// 8x8 tile forming one half of the uptime colon
const DOT_TILE: [u8; 8] = [0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00];

/// Status snapshot for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusData {
    /// Live contacts in the traffic table
    pub aircraft_count: u32,
    /// GNSS satellites in view
    pub satellites: u32,
    /// Whether the GNSS fix is valid
    pub fix_valid: bool,
    /// Uptime hours, 0-23
    pub uptime_hours: u32,
    /// Uptime minutes, 0-59
    pub uptime_minutes: u32,
    /// Battery voltage in decivolts; `None` when the reading is invalid
    pub battery_dv: Option<u16>,
}

/// Status page with differential-redraw state
pub struct StatusPage {
    titles_drawn: bool,
    prev_aircraft: Option<u32>,
    prev_satellites: Option<u32>,
    prev_fix: Option<bool>,
    prev_minutes: Option<u32>,
    prev_battery: Option<Option<u16>>,
}

impl StatusPage {
    pub fn new() -> Self {
        Self {
            titles_drawn: false,
            prev_aircraft: None,
            prev_satellites: None,
            prev_fix: None,
            prev_minutes: None,
            prev_battery: None,
        }
    }

    /// Force a full repaint on the next draw
    pub fn invalidate(&mut self) {
        self.titles_drawn = false;
    }

    pub fn draw<B: DisplayBackend>(
        &mut self,
        data: &StatusData,
        display: &mut B,
    ) -> Result<(), DisplayError> {
        if !self.titles_drawn {
            display.clear()?;

            display.text(1, 1, "ACFTS")?;
            display.text(7, 1, "SATS")?;
            display.text(12, 1, "FIX")?;
            display.text(1, 5, "UPTIME")?;
            display.text(12, 5, "BAT")?;

            display.tiles(4, 6, &DOT_TILE)?;
            display.tiles(4, 7, &DOT_TILE)?;
            display.glyph(13, 7, '.')?;

            self.prev_aircraft = None;
            self.prev_satellites = None;
            self.prev_fix = None;
            self.prev_minutes = None;
            self.prev_battery = None;

            self.titles_drawn = true;
        }

        if self.prev_aircraft != Some(data.aircraft_count) {
            display.text_big(1, 2, &capped_count(data.aircraft_count))?;
            self.prev_aircraft = Some(data.aircraft_count);
        }

        if self.prev_satellites != Some(data.satellites) {
            display.text_big(7, 2, &capped_count(data.satellites))?;
            self.prev_satellites = Some(data.satellites);
        }

        if self.prev_fix != Some(data.fix_valid) {
            display.glyph_big(12, 2, if data.fix_valid { '+' } else { '-' })?;
            self.prev_fix = Some(data.fix_valid);
        }

        if self.prev_minutes != Some(data.uptime_minutes) {
            let mut hours: String<4> = String::new();
            let _ = write!(hours, "{:02}", data.uptime_hours);
            display.text_big(0, 6, &hours)?;

            let mut minutes: String<4> = String::new();
            let _ = write!(minutes, "{:02}", data.uptime_minutes);
            display.text_big(5, 6, &minutes)?;

            self.prev_minutes = Some(data.uptime_minutes);
        }

        if self.prev_battery != Some(data.battery_dv) {
            match data.battery_dv {
                Some(dv) => {
                    let whole = (dv / 10).min(9) as u8;
                    display.glyph_big(11, 6, (b'0' + whole) as char)?;
                    display.glyph_big(14, 6, (b'0' + (dv % 10) as u8) as char)?;
                }
                None => {
                    display.glyph_big(11, 6, 'N')?;
                    display.glyph_big(14, 6, 'A')?;
                }
            }
            self.prev_battery = Some(data.battery_dv);
        }

        Ok(())
    }
}

impl Default for StatusPage {
    fn default() -> Self {
        Self::new()
    }
}

/// Count capped at 99, left-aligned over two cells
fn capped_count(count: u32) -> String<4> {
    let mut text = String::new();
    let _ = write!(text, "{:<2}", count.min(99));
    text
}
