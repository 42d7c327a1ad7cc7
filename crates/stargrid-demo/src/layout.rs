//! Grid layout: one ellipse per cell of a rows × cols partition of the surface.

use std::fmt;
use std::str::FromStr;

use stargrid_engine::coords::{Ellipse, Vec2, Viewport};

/// Row/column count of the grid. Both are at least 1.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GridShape {
    rows: u32,
    cols: u32,
}

/// Returned when a grid shape is empty or cannot be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridShapeError {
    /// Zero rows or columns.
    Empty { rows: u32, cols: u32 },
    /// Text that is not `ROWSxCOLS`.
    Malformed(String),
}

impl fmt::Display for GridShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridShapeError::Empty { rows, cols } => write!(
                f,
                "invalid grid shape {rows}x{cols}: rows and columns must be at least 1"
            ),
            GridShapeError::Malformed(text) => {
                write!(f, "invalid grid shape {text:?}: expected ROWSxCOLS")
            }
        }
    }
}

impl std::error::Error for GridShapeError {}

impl GridShape {
    /// 5 rows of 10 ellipses.
    pub const DEFAULT: GridShape = GridShape { rows: 5, cols: 10 };

    pub fn new(rows: u32, cols: u32) -> Result<Self, GridShapeError> {
        if rows == 0 || cols == 0 {
            return Err(GridShapeError::Empty { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    #[inline]
    pub fn rows(self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn cols(self) -> u32 {
        self.cols
    }

    #[inline]
    pub fn cell_count(self) -> usize {
        self.rows as usize * self.cols as usize
    }
}

/// Parses `ROWSxCOLS`, e.g. `5x10`.
impl FromStr for GridShape {
    type Err = GridShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || GridShapeError::Malformed(s.to_string());

        let (rows, cols) = s.trim().split_once(['x', 'X']).ok_or_else(malformed)?;
        let rows = rows.trim().parse().map_err(|_| malformed())?;
        let cols = cols.trim().parse().map_err(|_| malformed())?;
        GridShape::new(rows, cols)
    }
}

impl Default for GridShape {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Ellipses laid out row-major for one surface size.
///
/// A grid is never edited; a new size means a new grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    shape: GridShape,
    viewport: Viewport,
    ellipses: Vec<Ellipse>,
}

impl Grid {
    /// The (sanitized) surface size this grid was computed for.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Row-major: index `row * cols + col`.
    pub fn ellipses(&self) -> &[Ellipse] {
        &self.ellipses
    }

    #[cfg(test)]
    pub fn get(&self, row: u32, col: u32) -> Option<&Ellipse> {
        if row >= self.shape.rows || col >= self.shape.cols {
            return None;
        }
        self.ellipses.get(row as usize * self.shape.cols as usize + col as usize)
    }

    pub fn len(&self) -> usize {
        self.ellipses.len()
    }
}

/// Partitions `surface` into equal cells and centers one ellipse in each.
///
/// Radii are half the cell extents. Negative or non-finite sizes are treated as
/// zero and yield degenerate (zero-radius) ellipses rather than an error.
pub fn compute_grid(surface: Viewport, shape: GridShape) -> Grid {
    let viewport = surface.sanitized();
    let cell_w = viewport.width / shape.cols as f32;
    let cell_h = viewport.height / shape.rows as f32;

    let mut ellipses = Vec::with_capacity(shape.cell_count());
    for i in 0..shape.rows {
        for j in 0..shape.cols {
            // Per-cell, so rounding never accumulates across the row.
            let center = Vec2::new(
                (j + 1) as f32 * cell_w - cell_w / 2.0,
                (i + 1) as f32 * cell_h - cell_h / 2.0,
            );
            ellipses.push(Ellipse::new(center, cell_w / 2.0, cell_h / 2.0));
        }
    }

    Grid { shape, viewport, ellipses }
}
