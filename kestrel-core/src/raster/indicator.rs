//! Indicator placement and sizing
//!
//! Twelve square indicators arranged in a circle for the angular sectors,
//! four more in a column to their right for the vertical zones. Square
//! size encodes severity; alarm-free bins holding close-by traffic get a
//! distinct nearest-traffic size so close contacts surface even without a
//! formal alarm.

use crate::config::TrafficSettings;
use crate::radar::{BlinkState, RadarFrame, SectorBin};
use crate::raster::bitmap::TrafficBitmap;
use crate::traffic::AlarmLevel;

/// Left margin centering the radar circle on the panel
const PADDING: i32 = 16;

/// Screen anchors of the 12 sector indicators, clockwise from dead ahead
///
/// Each entry covers one 30-degree sector; index 0 is 0-29 degrees.
pub const SECTOR_ANCHORS: [(i32, i32); 12] = [
    (PADDING + 39, 6),
    (PADDING + 51, 13),
    (PADDING + 58, 25),
    (PADDING + 58, 39),
    (PADDING + 51, 51),
    (PADDING + 39, 58),
    (PADDING + 25, 58),
    (PADDING + 13, 51),
    (PADDING + 6, 39),
    (PADDING + 6, 25),
    (PADDING + 13, 13),
    (PADDING + 25, 6),
];

/// Column position of the vertical zone indicators
const VERTICAL_COLUMN_X: i32 = PADDING + 78;

/// Screen anchors of the 4 vertical zone indicators, top to bottom
pub const VERTICAL_ANCHORS: [(i32, i32); 4] = [
    (VERTICAL_COLUMN_X, 13),
    (VERTICAL_COLUMN_X, 26),
    (VERTICAL_COLUMN_X, 39),
    (VERTICAL_COLUMN_X, 52),
];

/// Indicator square size by alarm level, NONE through URGENT
pub const ALERT_SIZES: [u8; 4] = [3, 7, 9, 11];

/// Size used for alarm-free bins holding close traffic
pub const NEAREST_SIZE: u8 = 7;

/// Pick the square size for one bin
fn indicator_size(bin: &SectorBin, settings: &TrafficSettings) -> u8 {
    if bin.alert == AlarmLevel::None
        && bin.min_distance < settings.info_distance_m
        && bin.min_vertical < settings.info_vertical_m
    {
        return NEAREST_SIZE;
    }
    ALERT_SIZES[bin.alert.severity() as usize]
}

/// Whether the bin's indicator is drawn this tick
///
/// Alarm-free bins are always drawn; elevated bins blink with the phase.
fn is_drawn(bin: &SectorBin, blink: &BlinkState) -> bool {
    bin.alert == AlarmLevel::None || blink.elevated_visible()
}

/// Render a radar frame into a fresh bitmap
///
/// The caller advances `blink` once per tick after rendering; passing the
/// same frame and phase twice produces bit-identical output.
pub fn rasterize(
    frame: &RadarFrame,
    blink: &BlinkState,
    settings: &TrafficSettings,
) -> TrafficBitmap {
    let mut bmp = TrafficBitmap::new();

    for (bin, &(x, y)) in frame.sectors.iter().zip(SECTOR_ANCHORS.iter()) {
        if is_drawn(bin, blink) {
            bmp.fill_square(x, y, indicator_size(bin, settings));
        }
    }

    for (bin, &(x, y)) in frame.zones.iter().zip(VERTICAL_ANCHORS.iter()) {
        if is_drawn(bin, blink) {
            bmp.fill_square(x, y, indicator_size(bin, settings));
        }
    }

    bmp
}
