//! Traffic source trait

use crate::traffic::TrackedObject;

/// Read access to the traffic subsystem's slot table
///
/// The table is bounded and some slots may be unused or stale; callers
/// validate each entry with [`TrackedObject::is_active`] as they read it.
pub trait TrafficSource {
    /// The current slot table, unused slots included
    fn tracked_objects(&self) -> &[TrackedObject];

    /// Number of live contacts at time `now`
    fn active_count(&self, now: u32, expiry_s: u32) -> usize {
        self.tracked_objects()
            .iter()
            .filter(|o| o.is_active(now, expiry_s))
            .count()
    }
}

impl TrafficSource for [TrackedObject] {
    fn tracked_objects(&self) -> &[TrackedObject] {
        self
    }
}

impl<const N: usize> TrafficSource for [TrackedObject; N] {
    fn tracked_objects(&self) -> &[TrackedObject] {
        self
    }
}
