//! Collaborator traits
//!
//! Seams toward the subsystems the radar core reads from. The core never
//! mutates anything behind these traits; a slightly stale snapshot per
//! render tick is acceptable.

pub mod nav;
pub mod traffic;

pub use nav::Navigation;
pub use traffic::TrafficSource;
