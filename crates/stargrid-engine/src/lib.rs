//! Stargrid engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the demo:
//! window loop, surface lifecycle, draw streams and the stroke renderers.

pub mod device;
pub mod window;
pub mod input;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
