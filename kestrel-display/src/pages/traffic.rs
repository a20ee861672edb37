//! Traffic radar page
//!
//! Runs the radar pipeline from `kestrel-core` — aggregate, rasterize,
//! emit — and advances the blink phase afterwards. Every tick replaces the
//! whole panel band by band, so the page needs no title or
//! differential-redraw state of its own; the blink phase is the only thing
//! it keeps across ticks.

use kestrel_core::config::TrafficSettings;
use kestrel_core::radar::{BlinkState, RadarFrame};
use kestrel_core::raster::{self, NUM_BANDS};
use kestrel_core::traffic::{OwnShip, TrackedObject};

use crate::backend::{DisplayBackend, DisplayError};

/// Traffic page render context
pub struct TrafficPage {
    blink: BlinkState,
}

impl TrafficPage {
    pub fn new() -> Self {
        Self {
            blink: BlinkState::new(),
        }
    }

    /// Current blink phase, for diagnostics
    pub fn blink(&self) -> &BlinkState {
        &self.blink
    }

    pub fn draw<B: DisplayBackend>(
        &mut self,
        traffic: &[TrackedObject],
        own: &OwnShip,
        settings: &TrafficSettings,
        now: u32,
        display: &mut B,
    ) -> Result<(), DisplayError> {
        let frame = RadarFrame::aggregate(traffic, own, settings, now);
        let bitmap = raster::rasterize(&frame, &self.blink, settings);

        for band in 0..NUM_BANDS as u8 {
            display.tiles(0, band, bitmap.band(band as usize))?;
        }

        self.blink.advance(frame.should_blink);
        Ok(())
    }
}

impl Default for TrafficPage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::MockDisplay;
    use kestrel_core::raster::indicator::{ALERT_SIZES, SECTOR_ANCHORS, VERTICAL_ANCHORS};
    use kestrel_core::traffic::AlarmLevel;

    fn own() -> OwnShip {
        OwnShip {
            course: 0.0,
            altitude: 1000.0,
        }
    }

    fn urgent_contact() -> TrackedObject {
        TrackedObject {
            addr: 0xC0FFEE,
            timestamp: 100,
            bearing: 0.0,
            distance: 500.0,
            altitude: 1050.0,
            alarm: AlarmLevel::Urgent,
        }
    }

    /// Read one pixel back out of the mock's band memory
    fn pixel(display: &MockDisplay, x: usize, y: usize) -> bool {
        display.bands[y / 8][x] & (1 << (y % 8)) != 0
    }

    fn lit_around(display: &MockDisplay, anchor: (i32, i32), half: i32) -> u32 {
        let mut count = 0;
        for x in anchor.0 - half..=anchor.0 + half {
            for y in anchor.1 - half..=anchor.1 + half {
                if pixel(display, x as usize, y as usize) {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_emits_all_bands_every_tick() {
        let mut page = TrafficPage::new();
        let mut display = MockDisplay::new();
        page.draw(&[], &own(), &TrafficSettings::default(), 100, &mut display)
            .unwrap();
        assert_eq!(display.ops.len(), 8);
    }

    #[test]
    fn test_urgent_scenario_full_pipeline() {
        let mut page = TrafficPage::new();
        let mut display = MockDisplay::new();
        let settings = TrafficSettings::default();

        page.draw(&[urgent_contact()], &own(), &settings, 100, &mut display)
            .unwrap();

        let urgent = (ALERT_SIZES[3] / 2) as i32;
        let important = (ALERT_SIZES[2] / 2) as i32;
        assert_eq!(
            lit_around(&display, SECTOR_ANCHORS[0], urgent),
            (ALERT_SIZES[3] as u32).pow(2)
        );
        assert_eq!(
            lit_around(&display, SECTOR_ANCHORS[1], important),
            (ALERT_SIZES[2] as u32).pow(2)
        );
        assert_eq!(
            lit_around(&display, SECTOR_ANCHORS[11], important),
            (ALERT_SIZES[2] as u32).pow(2)
        );
        // tan = 50/500, just above level: second vertical indicator
        assert_eq!(
            lit_around(&display, VERTICAL_ANCHORS[1], urgent),
            (ALERT_SIZES[3] as u32).pow(2)
        );
        // Blinking was requested, so the phase advanced into the off half
        assert_eq!(page.blink().phase(), 1);
    }

    #[test]
    fn test_blink_alternates_across_ticks() {
        let mut page = TrafficPage::new();
        let settings = TrafficSettings::default();
        let traffic = [urgent_contact()];
        let urgent = (ALERT_SIZES[3] / 2) as i32;

        let mut on = MockDisplay::new();
        page.draw(&traffic, &own(), &settings, 100, &mut on).unwrap();
        let mut off = MockDisplay::new();
        page.draw(&traffic, &own(), &settings, 100, &mut off).unwrap();

        assert!(lit_around(&on, SECTOR_ANCHORS[0], urgent) > 0);
        assert_eq!(lit_around(&off, SECTOR_ANCHORS[0], urgent), 0);
        // Alarm-free sector dots survive the off phase
        assert_eq!(lit_around(&off, SECTOR_ANCHORS[6], 1), 9);
    }

    #[test]
    fn test_quiet_traffic_resets_phase() {
        let mut page = TrafficPage::new();
        let settings = TrafficSettings::default();
        let mut display = MockDisplay::new();

        page.draw(&[urgent_contact()], &own(), &settings, 100, &mut display)
            .unwrap();
        assert_eq!(page.blink().phase(), 1);

        page.draw(&[], &own(), &settings, 100, &mut display).unwrap();
        assert_eq!(page.blink().phase(), 0);
    }
}
