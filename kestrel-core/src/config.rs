//! Traffic display settings
//!
//! Plain value types; the device firmware loads them from its settings
//! store and hands a copy to the render path. Nothing here touches storage.

/// Display reference frame for the radar page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Screen-up is true north
    #[default]
    NorthUp,
    /// Screen-up is the own ship's current course
    TrackUp,
}

/// Settings consumed by the traffic radar pipeline
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrafficSettings {
    /// Radar reference frame
    pub orientation: Orientation,
    /// Horizontal distance under which alarm-free traffic is still shown
    /// with the nearest-traffic indicator, meters
    pub info_distance_m: f32,
    /// Vertical separation under which alarm-free traffic is still shown
    /// with the nearest-traffic indicator, meters (compared signed)
    pub info_vertical_m: f32,
    /// Contacts not refreshed within this many seconds are stale
    pub expiry_s: u32,
}

impl Default for TrafficSettings {
    fn default() -> Self {
        Self {
            orientation: Orientation::NorthUp,
            info_distance_m: 2000.0,
            info_vertical_m: 300.0,
            expiry_s: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = TrafficSettings::default();
        assert_eq!(settings.orientation, Orientation::NorthUp);
        assert_eq!(settings.expiry_s, 5);
        assert!(settings.info_distance_m > 0.0);
        assert!(settings.info_vertical_m > 0.0);
    }
}
