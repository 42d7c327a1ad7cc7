//! Shape renderers.

mod common;

pub mod ellipse;
pub mod line;
