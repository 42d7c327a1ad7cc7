pub(crate) mod ellipse;
pub(crate) mod line;

pub use ellipse::EllipseCmd;
pub use line::LineCmd;
