//! Paint model shared between the app and renderers.
//!
//! Only solid colors exist; strokes carry a width and a color.

pub mod color;

pub use color::Color;

/// Outline stroke used by ellipse and line commands.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    /// Width in logical pixels.
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    #[inline]
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }

    /// A stroke that would produce no pixels.
    #[inline]
    pub fn is_invisible(self) -> bool {
        !(self.width > 0.0) || self.color.a <= 0.0
    }
}
