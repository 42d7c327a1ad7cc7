use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};

use super::common::{InstancedQuads, QuadInstance};

/// Renderer for `DrawCmd::Line` segments.
///
/// Segments are extruded along their normal in the vertex shader and get
/// round caps in the fragment shader.
#[derive(Default)]
pub struct LineRenderer {
    quads: InstancedQuads<LineInstance>,
    instances: Vec<LineInstance>,
}

impl LineRenderer {
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
            let DrawCmd::Line(cmd) = &item.cmd else { continue };

            if !cmd.from.is_finite() || !cmd.to.is_finite() || cmd.stroke.is_invisible() {
                continue;
            }

            self.instances.push(LineInstance {
                from: [cmd.from.x, cmd.from.y],
                to: [cmd.to.x, cmd.to.y],
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
///  offset  0  from    [f32; 2]   loc 1
///  offset  8  to      [f32; 2]   loc 2
///  offset 16  stroke  [f32; 2]   loc 3  (.x = width, .y unused)
///  offset 24  color   [f32; 4]   loc 4
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct LineInstance {
    from: [f32; 2],
    to: [f32; 2],
    stroke: [f32; 2],
    color: [f32; 4],
}

impl QuadInstance for LineInstance {
    const LABEL: &'static str = "line";
    const SHADER: &'static str = include_str!("shaders/line.wgsl");

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
            1 => Float32x2, // from
            2 => Float32x2, // to
            3 => Float32x2, // stroke
            4 => Float32x4  // color
        ];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &ATTRS,
        }
    }
}
