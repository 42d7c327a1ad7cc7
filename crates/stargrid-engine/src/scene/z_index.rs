/// Z-ordering key for draw items.
///
/// Higher values appear on top of lower values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    /// Grid ellipse outlines.
    pub const BACKGROUND: ZIndex = ZIndex(0);
    /// Strokes drawn on top of the outlines.
    pub const OVERLAY: ZIndex = ZIndex(1);
}
