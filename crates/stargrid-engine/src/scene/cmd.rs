use crate::scene::shapes::ellipse::EllipseCmd;
use crate::scene::shapes::line::LineCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - add a matching renderer under `render::shapes::*`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Ellipse(EllipseCmd),
    Line(LineCmd),
}
