//! Radar frame aggregation
//!
//! Builds one ephemeral [`RadarFrame`] per render tick from a snapshot of
//! the traffic table. Each active contact lands in exactly one sector bin
//! and one vertical zone bin; elevated alarm levels additionally widen into
//! neighboring sectors as the contact is processed, so the warning wedge
//! grows with severity the way the classic proximity-radar displays do.

use crate::config::{Orientation, TrafficSettings};
use crate::radar::sector::{
    closest_neighbor_sector, display_bearing, sector_index, vertical_zone, NUM_SECTORS,
    NUM_VERTICAL_ZONES,
};
use crate::traffic::{AlarmLevel, OwnShip, TrackedObject};

/// "No traffic in this bin" marker for distances and vertical separations
pub const DISTANCE_SENTINEL: f32 = 100_000.0;

/// Aggregated state of one angular sector or one vertical zone
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SectorBin {
    /// Worst alarm level binned or propagated into this bin
    pub alert: AlarmLevel,
    /// Smallest horizontal distance among this bin's contacts, meters
    pub min_distance: f32,
    /// Smallest signed vertical separation among this bin's contacts, meters
    pub min_vertical: f32,
}

impl SectorBin {
    /// An empty bin
    pub const EMPTY: Self = Self {
        alert: AlarmLevel::None,
        min_distance: DISTANCE_SENTINEL,
        min_vertical: DISTANCE_SENTINEL,
    };

    fn raise_to(&mut self, level: AlarmLevel) {
        if self.alert < level {
            self.alert = level;
        }
    }

    fn note_distances(&mut self, distance: f32, vertical: f32) {
        if distance < self.min_distance {
            self.min_distance = distance;
        }
        if vertical < self.min_vertical {
            self.min_vertical = vertical;
        }
    }
}

impl Default for SectorBin {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// One render tick's worth of binned traffic
///
/// Recomputed from scratch every tick; the blink phase is the only state
/// the radar keeps across ticks and it lives in
/// [`BlinkState`](crate::radar::BlinkState), not here.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RadarFrame {
    /// Angular bins, sector 0 centered dead ahead of screen-up
    pub sectors: [SectorBin; NUM_SECTORS],
    /// Elevation bins, top to bottom
    pub zones: [SectorBin; NUM_VERTICAL_ZONES],
    /// Whether any contact this tick warrants blinking
    pub should_blink: bool,
}

impl RadarFrame {
    /// An all-sentinel frame with no traffic
    pub const EMPTY: Self = Self {
        sectors: [SectorBin::EMPTY; NUM_SECTORS],
        zones: [SectorBin::EMPTY; NUM_VERTICAL_ZONES],
        should_blink: false,
    };

    /// Bin every active contact of `objects` at time `now`
    pub fn aggregate(
        objects: &[TrackedObject],
        own: &OwnShip,
        settings: &TrafficSettings,
        now: u32,
    ) -> Self {
        let mut frame = Self::EMPTY;
        let track_up = settings.orientation == Orientation::TrackUp;

        for obj in objects {
            if !obj.is_active(now, settings.expiry_s) {
                continue;
            }

            let bearing = display_bearing(obj.bearing as i32, own, track_up);
            let sector = sector_index(bearing);
            let vertical_separation = obj.altitude - own.altitude;
            let zone = vertical_zone(vertical_separation, obj.distance);

            frame.sectors[sector].raise_to(obj.alarm);

            match obj.alarm {
                AlarmLevel::Urgent => {
                    // Three adjacent sectors light up with the contact in
                    // the middle one
                    frame.should_blink = true;
                    frame.sectors[(sector + 1) % NUM_SECTORS].raise_to(AlarmLevel::Important);
                    frame.sectors[(sector + NUM_SECTORS - 1) % NUM_SECTORS]
                        .raise_to(AlarmLevel::Important);
                }
                AlarmLevel::Important => {
                    // Two sectors, widened toward the side the contact is on
                    frame.should_blink = true;
                    frame.sectors[closest_neighbor_sector(bearing)].raise_to(AlarmLevel::Important);
                }
                AlarmLevel::Low => {
                    frame.should_blink = true;
                }
                AlarmLevel::None => {}
            }

            frame.sectors[sector].note_distances(obj.distance, vertical_separation);

            let zone_bin = &mut frame.zones[zone.index()];
            zone_bin.raise_to(obj.alarm);
            zone_bin.note_distances(obj.distance, vertical_separation);
        }

        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(bearing: f32, distance: f32, rel_altitude: f32, alarm: AlarmLevel) -> TrackedObject {
        TrackedObject {
            addr: 0xDD_4711,
            timestamp: 100,
            bearing,
            distance,
            altitude: 1000.0 + rel_altitude,
            alarm,
        }
    }

    fn own() -> OwnShip {
        OwnShip {
            course: 0.0,
            altitude: 1000.0,
        }
    }

    fn aggregate(objects: &[TrackedObject]) -> RadarFrame {
        RadarFrame::aggregate(objects, &own(), &TrafficSettings::default(), 100)
    }

    #[test]
    fn test_empty_snapshot_is_all_sentinel() {
        let frame = aggregate(&[]);
        assert_eq!(frame, RadarFrame::EMPTY);
        assert!(!frame.should_blink);
    }

    #[test]
    fn test_stale_and_unused_slots_skipped() {
        let mut stale = contact(0.0, 500.0, 50.0, AlarmLevel::Urgent);
        stale.timestamp = 10;
        let mut unused = contact(0.0, 500.0, 50.0, AlarmLevel::Urgent);
        unused.addr = 0;
        let frame = aggregate(&[stale, unused]);
        assert_eq!(frame, RadarFrame::EMPTY);
    }

    #[test]
    fn test_urgent_widens_both_neighbors() {
        // Dead ahead, 500 m out, 50 m above, URGENT
        let frame = aggregate(&[contact(0.0, 500.0, 50.0, AlarmLevel::Urgent)]);

        assert_eq!(frame.sectors[0].alert, AlarmLevel::Urgent);
        assert_eq!(frame.sectors[1].alert, AlarmLevel::Important);
        assert_eq!(frame.sectors[11].alert, AlarmLevel::Important);
        assert_eq!(frame.sectors[2].alert, AlarmLevel::None);
        // tan = 50/500 = 0.1, just above level
        assert_eq!(frame.zones[1].alert, AlarmLevel::Urgent);
        assert!(frame.should_blink);
        // Distances stay in the contact's own bin
        assert_eq!(frame.sectors[0].min_distance, 500.0);
        assert_eq!(frame.sectors[1].min_distance, DISTANCE_SENTINEL);
    }

    #[test]
    fn test_urgent_propagation_is_floor_not_assignment() {
        let frame = aggregate(&[
            contact(40.0, 800.0, 0.0, AlarmLevel::Urgent),
            contact(70.0, 300.0, 0.0, AlarmLevel::Urgent),
        ]);
        // Sector 2's own URGENT must not be lowered by sector 1's spread
        assert_eq!(frame.sectors[1].alert, AlarmLevel::Urgent);
        assert_eq!(frame.sectors[2].alert, AlarmLevel::Urgent);
        assert_eq!(frame.sectors[0].alert, AlarmLevel::Important);
        assert_eq!(frame.sectors[3].alert, AlarmLevel::Important);
    }

    #[test]
    fn test_important_widens_closest_neighbor_only() {
        // 50 deg sits in sector 1, closer to sector 2
        let frame = aggregate(&[contact(50.0, 800.0, 0.0, AlarmLevel::Important)]);
        assert_eq!(frame.sectors[1].alert, AlarmLevel::Important);
        assert_eq!(frame.sectors[2].alert, AlarmLevel::Important);
        assert_eq!(frame.sectors[0].alert, AlarmLevel::None);
        assert!(frame.should_blink);
    }

    #[test]
    fn test_low_blinks_without_spreading() {
        let frame = aggregate(&[contact(90.0, 800.0, 0.0, AlarmLevel::Low)]);
        assert_eq!(frame.sectors[3].alert, AlarmLevel::Low);
        assert_eq!(frame.sectors[2].alert, AlarmLevel::None);
        assert_eq!(frame.sectors[4].alert, AlarmLevel::None);
        assert!(frame.should_blink);
    }

    #[test]
    fn test_none_does_not_blink() {
        let frame = aggregate(&[contact(90.0, 800.0, 0.0, AlarmLevel::None)]);
        assert!(!frame.should_blink);
        assert_eq!(frame.sectors[3].min_distance, 800.0);
    }

    #[test]
    fn test_zones_not_subject_to_propagation() {
        let frame = aggregate(&[contact(0.0, 500.0, 300.0, AlarmLevel::Urgent)]);
        // tan = 0.6, high above; the other zones stay untouched
        assert_eq!(frame.zones[0].alert, AlarmLevel::Urgent);
        assert_eq!(frame.zones[1].alert, AlarmLevel::None);
        assert_eq!(frame.zones[2].alert, AlarmLevel::None);
        assert_eq!(frame.zones[3].alert, AlarmLevel::None);
    }

    #[test]
    fn test_min_tracking_across_contacts() {
        let frame = aggregate(&[
            contact(10.0, 900.0, 200.0, AlarmLevel::None),
            contact(20.0, 400.0, 350.0, AlarmLevel::None),
        ]);
        // Both land in sector 0; mins are tracked per field independently
        assert_eq!(frame.sectors[0].min_distance, 400.0);
        assert_eq!(frame.sectors[0].min_vertical, 200.0);
    }

    #[test]
    fn test_track_up_moves_contact_into_rotated_sector() {
        let settings = TrafficSettings {
            orientation: Orientation::TrackUp,
            ..TrafficSettings::default()
        };
        let own = OwnShip {
            course: 90.0,
            altitude: 1000.0,
        };
        let frame = RadarFrame::aggregate(
            &[contact(90.0, 800.0, 0.0, AlarmLevel::Low)],
            &own,
            &settings,
            100,
        );
        // Contact on the nose ends up dead ahead on screen
        assert_eq!(frame.sectors[0].alert, AlarmLevel::Low);
        assert_eq!(frame.sectors[3].alert, AlarmLevel::None);
    }

    #[test]
    fn test_overflight_binned_by_separation_sign() {
        let above = aggregate(&[contact(0.0, 0.0, 10.0, AlarmLevel::None)]);
        assert_eq!(above.zones[0].min_vertical, 10.0);
        let below = aggregate(&[contact(0.0, 0.0, -10.0, AlarmLevel::None)]);
        assert_eq!(below.zones[3].min_vertical, -10.0);
    }
}
