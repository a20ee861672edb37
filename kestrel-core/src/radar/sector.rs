//! Sector and vertical zone geometry
//!
//! The compass circle around the own ship is split into 12 fixed 30-degree
//! sectors; elevation is split into 4 zones at 0 and +/-14 degrees. Bearing
//! math runs on integer degrees, mirroring how the wire data arrives.

use crate::traffic::OwnShip;

/// Number of angular sectors around the own ship
pub const NUM_SECTORS: usize = 12;

/// Angular width of one sector, degrees
pub const SECTOR_SPAN_DEG: i32 = 360 / NUM_SECTORS as i32;

/// Number of elevation bands
pub const NUM_VERTICAL_ZONES: usize = 4;

/// tan(14 deg); boundary between the low and high elevation bands
pub const ZONE_TANGENT: f32 = 0.2493;

/// Elevation band of a contact relative to the own ship
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VerticalZone {
    /// More than 14 degrees above
    HighAbove = 0,
    /// Between level and 14 degrees above
    LowAbove = 1,
    /// Between level and 14 degrees below
    LowBelow = 2,
    /// More than 14 degrees below
    HighBelow = 3,
}

impl VerticalZone {
    /// Bin array index, 0-3 top to bottom
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Rotate a bearing into the display reference frame
///
/// In track-up mode the screen-up direction is the own course rather than
/// true north.
pub fn display_bearing(bearing_deg: i32, own: &OwnShip, track_up: bool) -> i32 {
    if track_up {
        (bearing_deg - own.course as i32).rem_euclid(360)
    } else {
        bearing_deg.rem_euclid(360)
    }
}

/// Sector holding the given bearing
pub fn sector_index(bearing_deg: i32) -> usize {
    (bearing_deg.rem_euclid(360) / SECTOR_SPAN_DEG) as usize % NUM_SECTORS
}

/// Sector whose center is closest to the bearing, excluding its own sector
///
/// Used to widen IMPORTANT alerts by one sector toward the side the
/// contact is actually on. Rounding the half-span up can land back on the
/// object's own sector; the previous sector is used in that case.
pub fn closest_neighbor_sector(bearing_deg: i32) -> usize {
    let bearing = bearing_deg.rem_euclid(360);
    let own = sector_index(bearing);
    let neighbor = ((bearing + SECTOR_SPAN_DEG / 2) / SECTOR_SPAN_DEG) as usize % NUM_SECTORS;
    if neighbor == own {
        (neighbor + NUM_SECTORS - 1) % NUM_SECTORS
    } else {
        neighbor
    }
}

/// Elevation band for a contact
///
/// A contact closer than one meter horizontally counts as pure vertical to
/// avoid dividing by zero on an overflight; the sign of the separation
/// picks the band. A level contact falls into the low-above band.
pub fn vertical_zone(vertical_separation: f32, distance: f32) -> VerticalZone {
    let tangent = if distance < 1.0 {
        if vertical_separation >= 0.0 {
            1.0
        } else {
            -1.0
        }
    } else {
        vertical_separation / distance
    };

    if tangent > ZONE_TANGENT {
        VerticalZone::HighAbove
    } else if tangent > 0.0 {
        VerticalZone::LowAbove
    } else if tangent < -ZONE_TANGENT {
        VerticalZone::HighBelow
    } else if tangent < 0.0 {
        VerticalZone::LowBelow
    } else {
        VerticalZone::LowAbove
    }
}
