use super::*;
use crate::assets::SpriteId;

fn screen() -> ScreenSize {
    ScreenSize::new(480.0, 360.0)
}

fn board(width: usize, height: usize, max: u32) -> Board {
    Board::new(width, height, max, screen())
}

fn centre(board: &Board, projection: Projection, pos: GridPos) -> Point {
    let (tw, th) = projection.tile_size();
    let tl = projection.cell_origin(board.origin(projection), pos.x, pos.y);
    Point::new(tl.x + tw / 2.0, tl.y + th / 2.0)
}

fn placing(size: BlockSize, operation: BlockOperation) -> UiState {
    UiState { block_size: size, operation, ..UiState::default() }
}

fn hover(cursor: Point) -> FrameInput {
    FrameInput { cursor, select: false, delete: false }
}

fn select(cursor: Point) -> FrameInput {
    FrameInput { cursor, select: true, delete: false }
}

fn delete(cursor: Point) -> FrameInput {
    FrameInput { cursor, select: false, delete: true }
}

fn height_at(board: &Board, pos: GridPos) -> u32 {
    board.stack(pos).map_or(0, TileStack::current_height)
}

fn len_at(board: &Board, pos: GridPos) -> usize {
    board.stack(pos).map_or(0, TileStack::len)
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_board_is_bare_ground() {
    let b = board(4, 3, 5);
    assert_eq!(b.width(), 4);
    assert_eq!(b.height(), 3);
    for y in 0..3 {
        for x in 0..4 {
            let pos = GridPos::new(x, y);
            assert_eq!(height_at(&b, pos), 0);
            assert_eq!(len_at(&b, pos), 1);
        }
    }
    assert!(b.hovered().is_none());
}

#[test]
fn origins_match_projection() {
    let b = board(10, 10, 5);
    for projection in Projection::ALL {
        assert_eq!(b.origin(projection), projection.board_origin(screen(), 10, 10));
        assert_eq!(b.hit_index(projection).projection(), projection);
    }
}

#[test]
fn ground_tiles_sit_at_cell_origins() {
    let b = board(10, 10, 5);
    let pos = GridPos::new(3, 4);
    let Some(stack) = b.stack(pos) else {
        panic!("missing stack");
    };
    for projection in Projection::ALL {
        let expected = projection.cell_origin(b.origin(projection), 3, 4);
        assert_eq!(stack.top().point(projection), expected);
    }
}

#[test]
fn stack_out_of_range_is_none() {
    let b = board(3, 2, 5);
    assert!(b.stack(GridPos::new(3, 0)).is_none());
    assert!(b.stack(GridPos::new(0, 2)).is_none());
}

// =============================================================
// Hover
// =============================================================

#[test]
fn hover_marks_only_the_cell_under_cursor() {
    let mut b = board(10, 10, 5);
    let ui = UiState::default();
    let pos = GridPos::new(2, 3);
    let event = b.update(&hover(centre(&b, Projection::Isometric, pos)), &ui);
    assert!(event.is_none());
    assert_eq!(b.hovered(), Some(pos));
    let hovered = b.draw_order(Projection::Isometric).filter(|(_, s)| s.is_hovered).count();
    assert_eq!(hovered, 1);
}

#[test]
fn hover_clears_when_cursor_leaves_board() {
    let mut b = board(10, 10, 5);
    let ui = UiState::default();
    b.update(&hover(centre(&b, Projection::Isometric, GridPos::new(5, 5))), &ui);
    assert!(b.hovered().is_some());
    b.update(&hover(Point::new(0.0, 0.0)), &ui);
    assert!(b.hovered().is_none());
}

#[test]
fn hover_follows_render_mode() {
    let mut b = board(10, 10, 5);
    let ui = UiState { render_mode: crate::ui::RenderMode::Planar, ..UiState::default() };
    let pos = GridPos::new(7, 1);
    b.update(&hover(centre(&b, Projection::Planar, pos)), &ui);
    assert_eq!(b.hovered(), Some(pos));
}

// =============================================================
// Place / remove
// =============================================================

#[test]
fn single_cell_fill_and_remove() {
    let mut b = board(1, 1, 4);
    let pos = GridPos::new(0, 0);
    let cursor = centre(&b, Projection::Isometric, pos);
    let full = placing(BlockSize::Full, BlockOperation::PlaceBlue);

    let event = b.update(&select(cursor), &full);
    assert_eq!(event, Some(BoardEvent::TilePlaced { pos, height: HeightClass::Full }));
    assert_eq!((height_at(&b, pos), len_at(&b, pos)), (2, 2));

    b.update(&select(cursor), &full);
    assert_eq!((height_at(&b, pos), len_at(&b, pos)), (4, 3));

    let half = placing(BlockSize::Half, BlockOperation::PlaceBlue);
    assert!(b.update(&select(cursor), &half).is_none());
    assert_eq!((height_at(&b, pos), len_at(&b, pos)), (4, 3));

    let event = b.update(&delete(cursor), &half);
    assert_eq!(event, Some(BoardEvent::TileRemoved { pos, height: HeightClass::Full }));
    assert_eq!((height_at(&b, pos), len_at(&b, pos)), (2, 2));
}

#[test]
fn pointer_operation_never_places() {
    let mut b = board(10, 10, 5);
    let pos = GridPos::new(4, 4);
    let cursor = centre(&b, Projection::Isometric, pos);
    assert!(b.update(&select(cursor), &UiState::default()).is_none());
    assert_eq!(len_at(&b, pos), 1);
}

#[test]
fn placed_block_uses_selected_colour() {
    let mut b = board(10, 10, 5);
    let pos = GridPos::new(1, 1);
    let cursor = centre(&b, Projection::Isometric, pos);
    b.update(&select(cursor), &placing(BlockSize::Half, BlockOperation::PlaceYellow));
    let sprite = b.stack(pos).map(|s| s.top().sprite(Projection::Isometric));
    assert_eq!(sprite, Some(SpriteId::YellowHalfCubeIso));
}

#[test]
fn delete_on_ground_is_silent() {
    let mut b = board(10, 10, 5);
    let pos = GridPos::new(0, 9);
    let cursor = centre(&b, Projection::Isometric, pos);
    assert!(b.update(&delete(cursor), &UiState::default()).is_none());
    assert_eq!(len_at(&b, pos), 1);
}

#[test]
fn successful_place_suppresses_delete_in_same_frame() {
    let mut b = board(10, 10, 5);
    let pos = GridPos::new(3, 3);
    let cursor = centre(&b, Projection::Isometric, pos);
    let both = FrameInput { cursor, select: true, delete: true };
    let event = b.update(&both, &placing(BlockSize::Half, BlockOperation::PlaceRed));
    assert_eq!(event, Some(BoardEvent::TilePlaced { pos, height: HeightClass::Half }));
    assert_eq!(height_at(&b, pos), 1);
}

#[test]
fn failed_place_falls_through_to_delete() {
    let mut b = board(10, 10, 2);
    let pos = GridPos::new(3, 3);
    let cursor = centre(&b, Projection::Isometric, pos);
    let full = placing(BlockSize::Full, BlockOperation::PlaceRed);
    b.update(&select(cursor), &full);
    assert_eq!(height_at(&b, pos), 2);

    let both = FrameInput { cursor, select: true, delete: true };
    let event = b.update(&both, &full);
    assert_eq!(event, Some(BoardEvent::TileRemoved { pos, height: HeightClass::Full }));
    assert_eq!(height_at(&b, pos), 0);
}

#[test]
fn pointer_select_with_delete_removes() {
    let mut b = board(10, 10, 5);
    let pos = GridPos::new(6, 2);
    let cursor = centre(&b, Projection::Isometric, pos);
    b.update(&select(cursor), &placing(BlockSize::Half, BlockOperation::PlaceBlue));

    let both = FrameInput { cursor, select: true, delete: true };
    let event = b.update(&both, &UiState::default());
    assert_eq!(event, Some(BoardEvent::TileRemoved { pos, height: HeightClass::Half }));
}

#[test]
fn press_off_board_changes_nothing() {
    let mut b = board(10, 10, 5);
    let ui = placing(BlockSize::Full, BlockOperation::PlaceBlue);
    assert!(b.update(&select(Point::new(1.0, 1.0)), &ui).is_none());
    assert!(b.draw_order(Projection::Planar).all(|(_, s)| s.len() == 1));
}

#[test]
fn try_add_reports_capacity() {
    let mut b = board(2, 2, 3);
    let pos = GridPos::new(1, 0);
    assert!(b.try_add(pos, BlockSize::Full, BlockOperation::PlaceBlue));
    assert!(!b.try_add(pos, BlockSize::Full, BlockOperation::PlaceBlue));
    assert!(b.try_add(pos, BlockSize::Half, BlockOperation::PlaceBlue));
    assert!(!b.try_add(pos, BlockSize::Half, BlockOperation::PlaceBlue));
    assert!(!b.try_add(GridPos::new(5, 5), BlockSize::Half, BlockOperation::PlaceBlue));
    assert!(!b.try_add(GridPos::new(0, 0), BlockSize::Half, BlockOperation::Select));
}

#[test]
fn delete_top_out_of_range_is_none() {
    let mut b = board(2, 2, 3);
    assert!(b.delete_top(GridPos::new(2, 2)).is_none());
}

// =============================================================
// Draw order
// =============================================================

#[test]
fn planar_draw_order_is_row_major() {
    let b = board(3, 2, 5);
    let order: Vec<(usize, usize)> = b.draw_order(Projection::Planar).map(|(p, _)| (p.x, p.y)).collect();
    assert_eq!(order, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
}

#[test]
fn iso_draw_order_walks_columns_backwards() {
    let b = board(3, 2, 5);
    let order: Vec<(usize, usize)> = b.draw_order(Projection::Isometric).map(|(p, _)| (p.x, p.y)).collect();
    assert_eq!(order, vec![(2, 0), (1, 0), (0, 0), (2, 1), (1, 1), (0, 1)]);
}

#[test]
fn draw_order_visits_every_cell_once() {
    let b = board(10, 10, 5);
    for projection in Projection::ALL {
        assert_eq!(b.draw_order(projection).count(), 100);
    }
}
