use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};

use super::common::{InstancedQuads, QuadInstance};

/// Renderer for `DrawCmd::Ellipse` outlines.
///
/// Each ellipse becomes one instanced quad; the fragment shader evaluates an
/// approximate signed distance to the boundary and keeps a band of
/// `stroke.width` logical pixels, anti-aliased over one physical pixel.
#[derive(Default)]
pub struct EllipseRenderer {
    quads: InstancedQuads<EllipseInstance>,
    instances: Vec<EllipseInstance>,
}

impl EllipseRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        self.instances.clear();

        for item in draw_list.iter_in_paint_order() {
            let DrawCmd::Ellipse(cmd) = &item.cmd else { continue };

            if !cmd.ellipse.is_drawable() || cmd.stroke.is_invisible() {
                continue;
            }

            self.instances.push(EllipseInstance {
                center: [cmd.ellipse.center.x, cmd.ellipse.center.y],
                radii: [cmd.ellipse.radius_x, cmd.ellipse.radius_y],
                stroke: [cmd.stroke.width, 0.0],
                color: cmd.stroke.color.to_array(),
            });
        }

        self.quads.draw(ctx, target, &self.instances);
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (40 bytes):
///
///  offset  0  center  [f32; 2]   loc 1
///  offset  8  radii   [f32; 2]   loc 2
///  offset 16  stroke  [f32; 2]   loc 3  (.x = width, .y unused)
///  offset 24  color   [f32; 4]   loc 4
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct EllipseInstance {
    center: [f32; 2],
    radii: [f32; 2],
    stroke: [f32; 2],
    color: [f32; 4],
}

impl QuadInstance for EllipseInstance {
    const LABEL: &'static str = "ellipse";
    const SHADER: &'static str = include_str!("shaders/ellipse.wgsl");

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
            1 => Float32x2, // center
            2 => Float32x2, // radii
            3 => Float32x2, // stroke
            4 => Float32x4  // color
        ];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<EllipseInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_layout_matches_struct_size() {
        assert_eq!(std::mem::size_of::<EllipseInstance>(), 40);
        let layout = EllipseInstance::layout();
        assert_eq!(layout.array_stride, 40);
        assert_eq!(layout.attributes.last().map(|a| a.offset), Some(24));
    }
}
