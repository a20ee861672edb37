//! Tracked-object data model
//!
//! The traffic subsystem owns a bounded table of slots; this core reads a
//! snapshot of it once per render tick and never mutates it. A slot with a
//! zero address is unused, and a slot that has not been refreshed within
//! the expiry window is stale. Both are skipped during aggregation.

/// Maximum number of tracked-object slots in the traffic table
pub const MAX_TRACKED_OBJECTS: usize = 8;

/// Proximity threat classification, ascending severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlarmLevel {
    /// No threat
    None = 0,
    /// Traffic advisory
    Low = 1,
    /// Conflict developing
    Important = 2,
    /// Immediate action required
    Urgent = 3,
}

impl AlarmLevel {
    /// Numeric severity, 0-3
    pub const fn severity(self) -> u8 {
        self as u8
    }
}

/// A single tracked aircraft/object as reported by the traffic subsystem
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TrackedObject {
    /// Transponder/radio address; zero marks the slot unused
    pub addr: u32,
    /// Monotonic time of the last update, seconds
    pub timestamp: u32,
    /// Direction from the own ship, degrees [0, 360)
    pub bearing: f32,
    /// Horizontal separation, meters
    pub distance: f32,
    /// Absolute altitude, same unit as the own ship's altitude
    pub altitude: f32,
    /// Threat classification assigned by the collision predictor
    pub alarm: AlarmLevel,
}

impl TrackedObject {
    /// An unused slot
    pub const EMPTY: Self = Self {
        addr: 0,
        timestamp: 0,
        bearing: 0.0,
        distance: 0.0,
        altitude: 0.0,
        alarm: AlarmLevel::None,
    };

    /// Whether this slot holds a live contact at time `now`
    ///
    /// Live means a non-zero address refreshed within `expiry_s` seconds.
    pub fn is_active(&self, now: u32, expiry_s: u32) -> bool {
        self.addr != 0 && now.wrapping_sub(self.timestamp) <= expiry_s
    }
}

impl Default for TrackedObject {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Own-ship state sampled from the navigation collaborator
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OwnShip {
    /// Ground course, degrees [0, 360)
    pub course: f32,
    /// Altitude, same unit as tracked-object altitudes
    pub altitude: f32,
}
