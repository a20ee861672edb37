//! Board-agnostic traffic radar core for the Kestrel traffic display
//!
//! This crate contains everything the traffic page of the OLED needs that
//! does not depend on specific hardware:
//!
//! - Tracked-object data model and collaborator traits
//! - Sector aggregation (12 angular sectors, 4 vertical zones)
//! - Alert propagation to neighboring sectors
//! - Indicator rasterization into a 1bpp page-packed bitmap
//! - Blink phase tracking
//! - Display settings type definitions
//!
//! The pipeline runs once per render tick, fully inside the caller's
//! thread: snapshot -> aggregate -> rasterize -> hand bands to the display
//! sink. The only state that survives across ticks is the blink phase.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod radar;
pub mod raster;
pub mod traffic;
pub mod traits;
