/// Viewport size in logical pixels.
///
/// Also used as the drawable size of a window surface handed to the app.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns a copy with negative or non-finite extents replaced by zero.
    #[inline]
    pub fn sanitized(self) -> Self {
        let clean = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self::new(clean(self.width), clean(self.height))
    }
}
