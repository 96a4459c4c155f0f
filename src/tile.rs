//! Tiles and per-cell tile stacks.
//!
//! A `Tile` is one placed unit (the ground or a block). It never changes after
//! creation: its sprites and its pixel position in both projections are fixed
//! when it is stacked. A `TileStack` is the ordered column of tiles occupying a
//! single grid cell, ground first, with a running height measured in abstract
//! units (see [`HeightClass`]).
//!
//! Capacity is the caller's concern: [`TileStack::add_tile`] stacks
//! unconditionally and the board checks [`TileStack::has_capacity`] first.

#[cfg(test)]
#[path = "tile_test.rs"]
mod tile_test;

use crate::assets::SpriteId;
use crate::projection::{Point, Projection};

/// Abstract height of a unit. A full block takes twice the capacity of a half block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeightClass {
    /// Ground tile; occupies no capacity.
    Flat,
    /// Half-height block.
    Half,
    /// Full-height block.
    Full,
}

impl HeightClass {
    /// Capacity units consumed by this class.
    #[must_use]
    pub fn units(self) -> u32 {
        match self {
            Self::Flat => 0,
            Self::Half => 1,
            Self::Full => 2,
        }
    }
}

/// Colour variant of a placed block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Blue,
    Red,
    Yellow,
}

/// One unit on a stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    sprite_iso: SpriteId,
    sprite_2d: SpriteId,
    height: HeightClass,
    point_iso: Point,
    point_2d: Point,
}

impl Tile {
    /// The flat ground tile at the given projected positions.
    #[must_use]
    pub fn ground(point_iso: Point, point_2d: Point) -> Self {
        Self {
            sprite_iso: SpriteId::GroundIso,
            sprite_2d: SpriteId::Ground2D,
            height: HeightClass::Flat,
            point_iso,
            point_2d,
        }
    }

    /// A block of `height` and `color` resting on `below`.
    #[must_use]
    pub fn block_on(below: &Tile, height: HeightClass, color: BlockColor) -> Self {
        Self {
            sprite_iso: SpriteId::block(color, height, Projection::Isometric),
            sprite_2d: SpriteId::block(color, height, Projection::Planar),
            height,
            point_iso: below.point_iso.raised(Projection::Isometric.stack_depth(height)),
            point_2d: below.point_2d.raised(Projection::Planar.stack_depth(height)),
        }
    }

    #[must_use]
    pub fn height(&self) -> HeightClass {
        self.height
    }

    /// Sprite drawn for this tile in `projection`.
    #[must_use]
    pub fn sprite(&self, projection: Projection) -> SpriteId {
        match projection {
            Projection::Isometric => self.sprite_iso,
            Projection::Planar => self.sprite_2d,
        }
    }

    /// Top-left draw position in `projection`.
    #[must_use]
    pub fn point(&self, projection: Projection) -> Point {
        match projection {
            Projection::Isometric => self.point_iso,
            Projection::Planar => self.point_2d,
        }
    }
}

/// The column of tiles on one grid cell, ground first.
#[derive(Debug, Clone)]
pub struct TileStack {
    tiles: Vec<Tile>,
    current_height: u32,
    max_height: u32,
    pub is_hovered: bool,
}

impl TileStack {
    /// A stack holding only `ground`, accepting up to `max_height` units above it.
    #[must_use]
    pub fn new(ground: Tile, max_height: u32) -> Self {
        let current_height = ground.height().units();
        Self { tiles: vec![ground], current_height, max_height, is_hovered: false }
    }

    /// Whether a unit of `height` fits without exceeding the maximum.
    #[must_use]
    pub fn has_capacity(&self, height: HeightClass) -> bool {
        self.current_height + height.units() <= self.max_height
    }

    /// Stack a new block on top. Capacity is checked by the caller.
    pub fn add_tile(&mut self, height: HeightClass, color: BlockColor) {
        let tile = Tile::block_on(self.top(), height, color);
        self.current_height += height.units();
        self.tiles.push(tile);
    }

    /// Remove the top block. Returns `None` when only the ground is left.
    pub fn delete_top_tile(&mut self) -> Option<Tile> {
        if self.tiles.len() < 2 {
            return None;
        }
        let tile = self.tiles.pop()?;
        self.current_height -= tile.height().units();
        Some(tile)
    }

    /// The most recently placed tile (the ground on an empty stack).
    #[must_use]
    pub fn top(&self) -> &Tile {
        // The ground tile is never removed, so the stack is never empty.
        &self.tiles[self.tiles.len() - 1]
    }

    /// Tiles bottom to top.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false: the ground tile is permanent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn current_height(&self) -> u32 {
        self.current_height
    }

    #[must_use]
    pub fn max_height(&self) -> u32 {
        self.max_height
    }
}
