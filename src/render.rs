//! Rendering: draws the full scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads engine state and produces pixels. It never mutates any
//! game state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::assets::{FontId, SpriteAtlas, SpriteId};
use crate::board::Board;
use crate::consts::{ALERT_COLOR, ALERT_FONT_SIZE_PX, BACKGROUND_COLOR, HOVER_HUE_ROTATION_RAD, PANEL_PADDING};
use crate::engine::EngineCore;
use crate::projection::{Point, Projection};
use crate::tile::TileStack;

/// Draw the full scene: background, board, control panel, and alert.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(ctx: &CanvasRenderingContext2d, atlas: &SpriteAtlas, core: &EngineCore) -> Result<(), JsValue> {
    // Layer 1: clear.
    ctx.set_image_smoothing_enabled(false);
    ctx.set_fill_style_str(BACKGROUND_COLOR);
    ctx.fill_rect(0.0, 0.0, core.screen.width, core.screen.height);

    // Layer 2: board in the active projection.
    draw_board(ctx, atlas, &core.board, core.ui.render_mode.projection())?;

    // Layer 3: control panel, backdrop then face.
    for button in core.panel.buttons() {
        let origin = Point::new(button.rect.x, button.rect.y);
        draw_sprite(ctx, atlas, button.kind.backdrop(), origin)?;
        draw_sprite(ctx, atlas, button.kind.sprite(&core.ui), origin)?;
    }

    // Layer 4: alert banner.
    if let Some(text) = core.alert.visible_text() {
        draw_alert(ctx, text, core.screen.width)?;
    }

    Ok(())
}

// =============================================================
// Board
// =============================================================

fn draw_board(
    ctx: &CanvasRenderingContext2d,
    atlas: &SpriteAtlas,
    board: &Board,
    projection: Projection,
) -> Result<(), JsValue> {
    for (_, stack) in board.draw_order(projection) {
        draw_stack(ctx, atlas, stack, projection)?;
    }
    Ok(())
}

/// Draw one stack bottom to top, hue-shifted when hovered.
fn draw_stack(
    ctx: &CanvasRenderingContext2d,
    atlas: &SpriteAtlas,
    stack: &TileStack,
    projection: Projection,
) -> Result<(), JsValue> {
    ctx.save();
    if stack.is_hovered {
        ctx.set_filter(&format!("hue-rotate({HOVER_HUE_ROTATION_RAD}rad)"));
    }
    for tile in stack.tiles() {
        draw_sprite(ctx, atlas, tile.sprite(projection), tile.point(projection))?;
    }
    ctx.restore();
    Ok(())
}

// =============================================================
// Helpers
// =============================================================

fn draw_sprite(
    ctx: &CanvasRenderingContext2d,
    atlas: &SpriteAtlas,
    id: SpriteId,
    at: Point,
) -> Result<(), JsValue> {
    let Some(image) = atlas.get(id) else {
        return Ok(());
    };
    ctx.draw_image_with_html_image_element(image, at.x, at.y)
}

fn draw_alert(ctx: &CanvasRenderingContext2d, text: &str, screen_width: f64) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_fill_style_str(ALERT_COLOR);
    ctx.set_text_align("center");
    ctx.set_text_baseline("top");
    ctx.set_font(&format!("{ALERT_FONT_SIZE_PX}px {}, monospace", FontId::Default.family()));
    ctx.fill_text(text, screen_width / 2.0, PANEL_PADDING)?;
    ctx.restore();
    Ok(())
}
