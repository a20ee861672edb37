//! Radar frame construction
//!
//! Bins tracked objects into 12 angular sectors and 4 vertical zones,
//! spreads elevated alarm levels to neighboring sectors, and tracks the
//! blink phase that makes elevated indicators flash.

pub mod blink;
pub mod frame;
pub mod sector;

pub use blink::BlinkState;
pub use frame::{RadarFrame, SectorBin, DISTANCE_SENTINEL};
pub use sector::{VerticalZone, NUM_SECTORS, NUM_VERTICAL_ZONES};
