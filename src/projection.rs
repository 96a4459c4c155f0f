#[cfg(test)]
#[path = "projection_test.rs"]
mod projection_test;

use crate::consts::{
    FULL_DEPTH_2D, FULL_DEPTH_ISO, HALF_DEPTH_2D, HALF_DEPTH_ISO, ISO_ORIGIN_Y_DIVISOR, PLANAR_ORIGIN_Y_DIVISOR,
    TILE_HEIGHT_2D, TILE_HEIGHT_ISO, TILE_WIDTH_2D, TILE_WIDTH_ISO,
};
use crate::tile::HeightClass;

/// A point in screen pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// This point moved up by `dy` pixels.
    #[must_use]
    pub fn raised(self, dy: f64) -> Self {
        Self { x: self.x, y: self.y - dy }
    }
}

/// Viewport size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSize {
    pub width: f64,
    pub height: f64,
}

impl ScreenSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Grid-to-screen transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Projection {
    /// Diamond grid; +x goes right-and-up, +y goes right-and-down.
    Isometric,
    /// Plain row/column layout.
    Planar,
}

impl Projection {
    pub const ALL: [Self; 2] = [Self::Isometric, Self::Planar];

    /// Bounding-box size of one ground cell.
    #[must_use]
    pub fn tile_size(self) -> (f64, f64) {
        match self {
            Self::Isometric => (TILE_WIDTH_ISO, TILE_HEIGHT_ISO),
            Self::Planar => (TILE_WIDTH_2D, TILE_HEIGHT_2D),
        }
    }

    /// Top-left pixel of cell `(x, y)` relative to `origin`.
    #[must_use]
    pub fn cell_origin(self, origin: Point, x: usize, y: usize) -> Point {
        let (fx, fy) = (x as f64, y as f64);
        let (tw, th) = self.tile_size();
        match self {
            Self::Isometric => Point {
                x: origin.x + (fx + fy) * (tw / 2.0),
                y: origin.y + (fy - fx) * (th / 2.0),
            },
            Self::Planar => Point {
                x: origin.x + fx * tw,
                y: origin.y + fy * th,
            },
        }
    }

    /// Fractional cell coordinates of `pt`, such that the cell `(x, y)`
    /// whose shape contains `pt` satisfies `|fx - x| <= 0.5` and
    /// `|fy - y| <= 0.5`.
    #[must_use]
    pub fn cell_coords(self, origin: Point, pt: Point) -> (f64, f64) {
        let (tw, th) = self.tile_size();
        match self {
            Self::Isometric => {
                // Offsets from the centre of cell (0, 0), in half-tile units.
                let a = (pt.x - origin.x - tw / 2.0) / (tw / 2.0);
                let b = (pt.y - origin.y - th / 2.0) / (th / 2.0);
                ((a - b) / 2.0, (a + b) / 2.0)
            }
            Self::Planar => {
                let fx = (pt.x - origin.x) / tw - 0.5;
                let fy = (pt.y - origin.y) / th - 0.5;
                (fx, fy)
            }
        }
    }

    /// Board origin that centres a `width × height` grid on `screen`.
    #[must_use]
    pub fn board_origin(self, screen: ScreenSize, width: usize, height: usize) -> Point {
        let (tw, th) = self.tile_size();
        let divisor = match self {
            Self::Isometric => ISO_ORIGIN_Y_DIVISOR,
            Self::Planar => PLANAR_ORIGIN_Y_DIVISOR,
        };
        Point {
            x: screen.width / 2.0 - (width as f64 * tw) / 2.0,
            y: screen.height / divisor - (height as f64 * th) / 2.0,
        }
    }

    /// How far a unit of the given height class rises above the unit beneath it.
    #[must_use]
    pub fn stack_depth(self, height: HeightClass) -> f64 {
        match (self, height) {
            (_, HeightClass::Flat) => 0.0,
            (Self::Isometric, HeightClass::Half) => HALF_DEPTH_ISO,
            (Self::Isometric, HeightClass::Full) => FULL_DEPTH_ISO,
            (Self::Planar, HeightClass::Half) => HALF_DEPTH_2D,
            (Self::Planar, HeightClass::Full) => FULL_DEPTH_2D,
        }
    }
}
