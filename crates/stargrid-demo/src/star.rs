//! Pentagram inscribed in an ellipse.

use stargrid_engine::coords::{Ellipse, Vec2};
use stargrid_engine::paint::Stroke;
use stargrid_engine::scene::{DrawList, ZIndex};

/// The five boundary points of a star, indexed 0..4.
pub type StarVertices = [Vec2; 5];

/// Angular spacing between consecutive vertices, in degrees.
const STEP_DEGREES: u32 = 72;

/// Edge `i` joins vertex `i` to vertex `(i + 2) % 5`.
pub const STAR_EDGE_INDICES: [(usize, usize); 5] = [(0, 2), (1, 3), (2, 4), (3, 0), (4, 1)];

/// Optional decorations drawn with each star.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StarStyle {
    /// Radius of the circle drawn at each vertex; `None` disables markers.
    pub marker_radius: Option<f32>,
}

impl Default for StarStyle {
    fn default() -> Self {
        Self { marker_radius: Some(5.0) }
    }
}

/// Vertex `k` sits at angle `k * 72°` on the ellipse boundary.
pub fn star_vertices(ellipse: &Ellipse) -> StarVertices {
    let mut vertices = [Vec2::zero(); 5];
    let mut degrees: u32 = 0;
    for v in &mut vertices {
        *v = ellipse.point_at((degrees as f32).to_radians());
        degrees += STEP_DEGREES;
    }
    vertices
}

pub fn star_edges(vertices: &StarVertices) -> [(Vec2, Vec2); 5] {
    STAR_EDGE_INDICES.map(|(a, b)| (vertices[a], vertices[b]))
}

/// Records the star's edges and vertex markers at [`ZIndex::OVERLAY`].
pub fn push_star(list: &mut DrawList, ellipse: &Ellipse, stroke: Stroke, style: StarStyle) {
    let vertices = star_vertices(ellipse);

    for (from, to) in star_edges(&vertices) {
        list.push_line(ZIndex::OVERLAY, from, to, stroke);
    }

    if let Some(r) = style.marker_radius {
        for v in vertices {
            list.push_circle(ZIndex::OVERLAY, v, r, stroke);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stargrid_engine::paint::Color;
    use stargrid_engine::scene::DrawCmd;

    const EPS: f32 = 1e-3;

    fn assert_near(p: Vec2, x: f32, y: f32) {
        assert!((p.x - x).abs() < EPS && (p.y - y).abs() < EPS, "{p:?} != ({x}, {y})");
    }

    // ── vertices ──────────────────────────────────────────────────────────

    #[test]
    fn unit_star_vertices() {
        let v = star_vertices(&Ellipse::circle(Vec2::zero(), 10.0));
        assert_near(v[0], 10.0, 0.0);
        assert_near(v[1], 3.0902, 9.5106);
        assert_near(v[2], -8.0902, 5.8779);
        assert_near(v[3], -8.0902, -5.8779);
        assert_near(v[4], 3.0902, -9.5106);
    }

    #[test]
    fn vertices_follow_each_radius() {
        let e = Ellipse::new(Vec2::new(100.0, 50.0), 40.0, 20.0);
        for (k, v) in star_vertices(&e).into_iter().enumerate() {
            let a = (k as f32 * 72.0).to_radians();
            assert_near(v, 100.0 + 40.0 * a.cos(), 50.0 + 20.0 * a.sin());
        }
    }

    // ── edges ─────────────────────────────────────────────────────────────

    #[test]
    fn edges_join_every_second_vertex() {
        let v = star_vertices(&Ellipse::circle(Vec2::zero(), 10.0));
        let edges = star_edges(&v);
        for (i, (from, to)) in edges.into_iter().enumerate() {
            assert_eq!(from, v[i]);
            assert_eq!(to, v[(i + 2) % 5]);
        }
    }

    #[test]
    fn each_vertex_has_degree_two() {
        let mut degree = [0; 5];
        for (a, b) in STAR_EDGE_INDICES {
            degree[a] += 1;
            degree[b] += 1;
        }
        assert_eq!(degree, [2; 5]);
    }

    // ── recording ─────────────────────────────────────────────────────────

    #[test]
    fn push_star_records_edges_and_markers() {
        let stroke = Stroke::new(1.0, Color::yellow());
        let e = Ellipse::circle(Vec2::new(50.0, 50.0), 50.0);

        let mut list = DrawList::new();
        push_star(&mut list, &e, stroke, StarStyle::default());
        let lines = list.items().iter().filter(|i| matches!(i.cmd, DrawCmd::Line(_))).count();
        let circles = list.items().iter().filter(|i| matches!(i.cmd, DrawCmd::Ellipse(_))).count();
        assert_eq!((lines, circles), (5, 5));
        assert!(list.items().iter().all(|i| i.key.z == ZIndex::OVERLAY));

        list.clear();
        push_star(&mut list, &e, stroke, StarStyle { marker_radius: None });
        assert_eq!(list.len(), 5);
    }
}
