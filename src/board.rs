//! The board: a fixed grid of tile stacks in two projections.
//!
//! `Board` owns every [`TileStack`], the origin of each projection, and a
//! [`HitIndex`] per projection. It is built once with fixed dimensions and
//! mutated only by [`Board::update`], once per frame. Rendering reads the
//! board through [`Board::draw_order`], which yields stacks in the
//! back-to-front order each projection needs.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use crate::hit::{GridPos, HitIndex};
use crate::input::{FrameInput, InputAction};
use crate::projection::{Point, Projection, ScreenSize};
use crate::tile::{HeightClass, Tile, TileStack};
use crate::ui::{BlockOperation, BlockSize, UiState};

/// A change made to the board during an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    TilePlaced { pos: GridPos, height: HeightClass },
    TileRemoved { pos: GridPos, height: HeightClass },
}

pub struct Board {
    width: usize,
    height: usize,
    /// Row-major: index `y * width + x`.
    stacks: Vec<TileStack>,
    origin_iso: Point,
    origin_2d: Point,
    hit_iso: HitIndex,
    hit_2d: HitIndex,
}

impl Board {
    /// Build a `width × height` board of bare ground centred on `screen`.
    #[must_use]
    pub fn new(width: usize, height: usize, max_stack_height: u32, screen: ScreenSize) -> Self {
        let origin_iso = Projection::Isometric.board_origin(screen, width, height);
        let origin_2d = Projection::Planar.board_origin(screen, width, height);

        let mut stacks = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let ground = Tile::ground(
                    Projection::Isometric.cell_origin(origin_iso, x, y),
                    Projection::Planar.cell_origin(origin_2d, x, y),
                );
                stacks.push(TileStack::new(ground, max_stack_height));
            }
        }

        Self {
            width,
            height,
            stacks,
            origin_iso,
            origin_2d,
            hit_iso: HitIndex::new(Projection::Isometric, origin_iso, width, height),
            hit_2d: HitIndex::new(Projection::Planar, origin_2d, width, height),
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Board origin for `projection`.
    #[must_use]
    pub fn origin(&self, projection: Projection) -> Point {
        match projection {
            Projection::Isometric => self.origin_iso,
            Projection::Planar => self.origin_2d,
        }
    }

    /// Hit geometry for `projection`.
    #[must_use]
    pub fn hit_index(&self, projection: Projection) -> &HitIndex {
        match projection {
            Projection::Isometric => &self.hit_iso,
            Projection::Planar => &self.hit_2d,
        }
    }

    #[must_use]
    pub fn stack(&self, pos: GridPos) -> Option<&TileStack> {
        let idx = self.index(pos)?;
        self.stacks.get(idx)
    }

    fn stack_mut(&mut self, pos: GridPos) -> Option<&mut TileStack> {
        let idx = self.index(pos)?;
        self.stacks.get_mut(idx)
    }

    fn index(&self, pos: GridPos) -> Option<usize> {
        (pos.x < self.width && pos.y < self.height).then_some(pos.y * self.width + pos.x)
    }

    /// The hovered cell, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<GridPos> {
        let idx = self.stacks.iter().position(|s| s.is_hovered)?;
        Some(GridPos::new(idx % self.width, idx / self.width))
    }

    /// Run one frame: resolve hover in the active projection and apply the
    /// pressed action to the hovered stack.
    ///
    /// A SELECT that cannot place (pointer operation, or no room) falls
    /// through to DELETE in the same frame.
    pub fn update(&mut self, frame: &FrameInput, ui: &UiState) -> Option<BoardEvent> {
        for stack in &mut self.stacks {
            stack.is_hovered = false;
        }

        let projection = ui.render_mode.projection();
        let pos = self.hit_index(projection).cell_at(frame.cursor)?;
        let stack = self.stack_mut(pos)?;
        stack.is_hovered = true;

        if frame.just_pressed(InputAction::Select) && self.try_add(pos, ui.block_size, ui.operation) {
            let height = ui.block_size.height_class();
            return Some(BoardEvent::TilePlaced { pos, height });
        } else if frame.just_pressed(InputAction::Delete) {
            let removed = self.delete_top(pos)?;
            return Some(BoardEvent::TileRemoved { pos, height: removed.height() });
        }
        None
    }

    /// Place a block of `size` on `pos` if the operation places blocks and
    /// the stack has room. Returns whether a block was added.
    pub fn try_add(&mut self, pos: GridPos, size: BlockSize, operation: BlockOperation) -> bool {
        let Some(color) = operation.color() else {
            return false;
        };
        let height = size.height_class();
        let Some(stack) = self.stack_mut(pos) else {
            return false;
        };
        if !stack.has_capacity(height) {
            return false;
        }
        stack.add_tile(height, color);
        true
    }

    /// Remove the top block at `pos`. Returns the removed tile, if any.
    pub fn delete_top(&mut self, pos: GridPos) -> Option<Tile> {
        self.stack_mut(pos)?.delete_top_tile()
    }

    /// Cells in painter's order for `projection`.
    ///
    /// Planar: rows top to bottom, columns left to right. Isometric: rows top
    /// to bottom, columns right to left, so cells further back (higher x) are
    /// drawn before the cells that overlap them.
    pub fn draw_order(&self, projection: Projection) -> impl Iterator<Item = (GridPos, &TileStack)> + '_ {
        let width = self.width;
        (0..self.height)
            .flat_map(move |y| {
                let xs: Box<dyn Iterator<Item = usize>> = match projection {
                    Projection::Planar => Box::new(0..width),
                    Projection::Isometric => Box::new((0..width).rev()),
                };
                xs.map(move |x| GridPos::new(x, y))
            })
            .filter_map(|pos| self.stack(pos).map(|stack| (pos, stack)))
    }
}
