//! Cursor-to-cell hit testing.
//!
//! Each cell's ground tile has a shape in each projection: a diamond in the
//! isometric view and a rectangle in the planar view. [`HitIndex`] answers
//! "which cell is under this point" by inverting the projection to a candidate
//! cell and confirming with the candidate's shape, so no spatial search is
//! needed.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::projection::{Point, Projection};

/// A grid cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub x: usize,
    pub y: usize,
}

impl GridPos {
    #[must_use]
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Hit geometry of one ground cell, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellShape {
    /// Rhombus with vertices at the bounding box's edge midpoints.
    Diamond { top_left: Point, width: f64, height: f64 },
    /// Axis-aligned rectangle, left/top edges inclusive.
    Rect { top_left: Point, width: f64, height: f64 },
}

impl CellShape {
    /// Shape of a cell whose bounding box starts at `top_left`.
    #[must_use]
    pub fn for_projection(projection: Projection, top_left: Point) -> Self {
        let (width, height) = projection.tile_size();
        match projection {
            Projection::Isometric => Self::Diamond { top_left, width, height },
            Projection::Planar => Self::Rect { top_left, width, height },
        }
    }

    /// Whether `pt` lies inside or on the boundary of the shape.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        match *self {
            Self::Diamond { top_left, width, height } => {
                let hw = width / 2.0;
                let hh = height / 2.0;
                let dx = (pt.x - (top_left.x + hw)).abs() / hw;
                let dy = (pt.y - (top_left.y + hh)).abs() / hh;
                dx + dy <= 1.0
            }
            Self::Rect { top_left, width, height } => {
                pt.x >= top_left.x
                    && pt.x < top_left.x + width
                    && pt.y >= top_left.y
                    && pt.y < top_left.y + height
            }
        }
    }
}

/// Cell lookup for one projection of a fixed-size grid.
#[derive(Debug, Clone)]
pub struct HitIndex {
    projection: Projection,
    origin: Point,
    width: usize,
    height: usize,
    /// Row-major shapes, one per cell.
    shapes: Vec<CellShape>,
}

impl HitIndex {
    /// Register the shape of every cell of a `width × height` grid.
    #[must_use]
    pub fn new(projection: Projection, origin: Point, width: usize, height: usize) -> Self {
        let shapes = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| CellShape::for_projection(projection, projection.cell_origin(origin, x, y)))
            .collect();
        Self { projection, origin, width, height, shapes }
    }

    #[must_use]
    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Shape registered for `pos`, if it is on the grid.
    #[must_use]
    pub fn shape(&self, pos: GridPos) -> Option<&CellShape> {
        if pos.x >= self.width || pos.y >= self.height {
            return None;
        }
        self.shapes.get(pos.y * self.width + pos.x)
    }

    /// The cell whose shape contains `pt`, if any.
    #[must_use]
    pub fn cell_at(&self, pt: Point) -> Option<GridPos> {
        let (fx, fy) = self.projection.cell_coords(self.origin, pt);
        let pos = GridPos::new(to_index(fx, self.width)?, to_index(fy, self.height)?);
        self.shape(pos).filter(|shape| shape.contains(pt)).map(|_| pos)
    }
}

/// Nearest integer cell index to `f`, if within `0..len`.
///
/// Halves round up, so `len - 0.5` (the far edge of the last cell) would
/// land one past the end; it is pulled back onto the last cell and left to
/// the containment check.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn to_index(f: f64, len: usize) -> Option<usize> {
    let last = len.checked_sub(1)? as f64;
    let rounded = (f + 0.5).floor();
    if !rounded.is_finite() || rounded < 0.0 || rounded > last + 1.0 {
        return None;
    }
    Some(rounded.min(last) as usize)
}
