use crate::coords::{Ellipse, Vec2};
use crate::paint::Stroke;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Stroked ellipse outline payload.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseCmd {
    pub ellipse: Ellipse,
    pub stroke: Stroke,
}

impl EllipseCmd {
    #[inline]
    pub fn new(ellipse: Ellipse, stroke: Stroke) -> Self {
        Self { ellipse, stroke }
    }
}

impl DrawList {
    /// Records an ellipse outline.
    #[inline]
    pub fn push_ellipse(&mut self, z: ZIndex, ellipse: Ellipse, stroke: Stroke) {
        self.push(z, DrawCmd::Ellipse(EllipseCmd::new(ellipse, stroke)));
    }

    /// Records a circle outline of radius `radius` around `center`.
    #[inline]
    pub fn push_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, stroke: Stroke) {
        self.push_ellipse(z, Ellipse::circle(center, radius), stroke);
    }
}
