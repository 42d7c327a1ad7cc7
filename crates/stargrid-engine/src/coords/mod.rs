//! Coordinate and geometry types shared across engine renderers and the app.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Renderers convert to NDC in shaders using a viewport uniform.

mod ellipse;
mod vec2;
mod viewport;

pub use ellipse::Ellipse;
pub use vec2::Vec2;
pub use viewport::Viewport;
