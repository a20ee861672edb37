//! OLED page renderers for the Kestrel traffic display
//!
//! This crate provides:
//! - `DisplayBackend` trait abstracting the 128x64 panel's cell surface
//! - Page renderers (radio, status, baro, traffic) with differential redraw
//! - `Panel`, the render context that owns page state and cycles pages
//!
//! # Architecture
//!
//! The device firmware implements `DisplayBackend` with its bus-level
//! driver (font rendering and the pixel push protocol live there, not
//! here). Each render tick the firmware's scheduler calls
//! [`Panel::render`](pages::Panel::render) with fresh data snapshots; the
//! pages draw only what changed since the previous tick, and the traffic
//! page runs the radar pipeline from `kestrel-core` and hands the finished
//! bitmap to the backend one band at a time.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod pages;

pub use backend::{DisplayBackend, DisplayError};
pub use pages::Panel;
