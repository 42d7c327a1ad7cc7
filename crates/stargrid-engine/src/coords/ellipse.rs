use super::Vec2;

/// Axis-aligned ellipse in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Ellipse {
    pub center: Vec2,
    pub radius_x: f32,
    pub radius_y: f32,
}

impl Ellipse {
    #[inline]
    pub const fn new(center: Vec2, radius_x: f32, radius_y: f32) -> Self {
        Self { center, radius_x, radius_y }
    }

    /// Circle of radius `r` around `center`.
    #[inline]
    pub const fn circle(center: Vec2, r: f32) -> Self {
        Self::new(center, r, r)
    }

    /// Point on the boundary at `radians`, measured clockwise from +X on screen (+Y down).
    #[inline]
    pub fn point_at(self, radians: f32) -> Vec2 {
        Vec2::new(
            self.center.x + self.radius_x * radians.cos(),
            self.center.y + self.radius_y * radians.sin(),
        )
    }

    /// True when both radii are positive and finite.
    #[inline]
    pub fn is_drawable(self) -> bool {
        self.center.is_finite()
            && self.radius_x.is_finite()
            && self.radius_y.is_finite()
            && self.radius_x > 0.0
            && self.radius_y > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_at_zero_lies_on_positive_x_axis() {
        let e = Ellipse::new(Vec2::new(5.0, 5.0), 3.0, 2.0);
        let p = e.point_at(0.0);
        assert!((p.x - 8.0).abs() < 1e-6);
        assert!((p.y - 5.0).abs() < 1e-6);
    }

    #[test]
    fn point_at_quarter_turn_uses_radius_y() {
        let e = Ellipse::new(Vec2::zero(), 3.0, 2.0);
        let p = e.point_at(core::f32::consts::FRAC_PI_2);
        assert!(p.x.abs() < 1e-6);
        assert!((p.y - 2.0).abs() < 1e-6);
    }

    #[test]
    fn zero_radius_is_not_drawable() {
        assert!(!Ellipse::new(Vec2::zero(), 0.0, 4.0).is_drawable());
        assert!(!Ellipse::new(Vec2::zero(), 4.0, f32::NAN).is_drawable());
        assert!(Ellipse::circle(Vec2::zero(), 5.0).is_drawable());
    }
}
