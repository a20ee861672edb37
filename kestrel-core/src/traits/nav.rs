//! Navigation source trait

use crate::traffic::OwnShip;

/// Read access to the own ship's navigation state
pub trait Navigation {
    /// Ground course, degrees [0, 360)
    fn course(&self) -> f32;

    /// Current altitude, same unit as tracked-object altitudes
    fn altitude(&self) -> f32;

    /// Snapshot both fields for one render tick
    fn own_ship(&self) -> OwnShip {
        OwnShip {
            course: self.course(),
            altitude: self.altitude(),
        }
    }
}

impl Navigation for OwnShip {
    fn course(&self) -> f32 {
        self.course
    }

    fn altitude(&self) -> f32 {
        self.altitude
    }
}
