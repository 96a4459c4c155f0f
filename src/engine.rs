use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::alert::Alert;
use crate::assets::SpriteAtlas;
use crate::board::{Board, BoardEvent};
use crate::config::GameConfig;
use crate::input::{Button, InputState};
use crate::projection::{Point, ScreenSize};
use crate::render;
use crate::ui::{UiMessage, UiPanel, UiState};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// What happened during a frame, for the host to log or react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    UiChanged(UiMessage),
    Board(BoardEvent),
}

/// Engine state and logic that does not touch the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub board: Board,
    pub ui: UiState,
    pub panel: UiPanel,
    pub input: InputState,
    pub alert: Alert,
    pub screen: ScreenSize,
}

impl EngineCore {
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let screen = config.screen();
        Self {
            board: Board::new(config.board_width, config.board_height, config.max_stack_height, screen),
            ui: UiState::default(),
            panel: UiPanel::new(screen),
            input: InputState::new(),
            alert: Alert::new(),
            screen,
        }
    }

    // --- Input events ---

    pub fn on_pointer_move(&mut self, pt: Point) {
        self.input.pointer_moved(pt);
    }

    pub fn on_pointer_down(&mut self, pt: Point, button: Button) {
        self.input.pointer_down(pt, button);
    }

    // --- Frame ---

    /// Advance one frame: panel clicks first, then the board, then the alert.
    ///
    /// A SELECT press that lands on a panel button is consumed by the panel
    /// and does not reach the board.
    pub fn tick(&mut self) -> Vec<Action> {
        let mut frame = self.input.take_frame();
        let mut actions = Vec::new();

        if frame.select {
            if let Some(msg) = self.panel.message_at(frame.cursor) {
                frame.select = false;
                if self.apply_ui(msg) {
                    actions.push(Action::UiChanged(msg));
                }
            }
        }

        if let Some(event) = self.board.update(&frame, &self.ui) {
            actions.push(Action::Board(event));
        }

        self.alert.tick();
        actions
    }

    /// Apply a panel message. Returns `true` if the UI state changed.
    pub fn apply_ui(&mut self, msg: UiMessage) -> bool {
        if !self.ui.apply(msg) {
            return false;
        }
        log::debug!("ui state changed by {msg:?}: {:?}", self.ui);
        if msg == UiMessage::ToggleView {
            self.alert.animate(self.ui.render_mode.label());
        }
        true
    }
}

/// The full game engine. Wraps `EngineCore` and owns the canvas context and sprites.
pub struct Engine {
    ctx: CanvasRenderingContext2d,
    atlas: SpriteAtlas,
    pub core: EngineCore,
}

impl Engine {
    #[must_use]
    pub fn new(ctx: CanvasRenderingContext2d, atlas: SpriteAtlas, config: &GameConfig) -> Self {
        Self { ctx, atlas, core: EngineCore::new(config) }
    }

    pub fn on_pointer_move(&mut self, pt: Point) {
        self.core.on_pointer_move(pt);
    }

    pub fn on_pointer_down(&mut self, pt: Point, button: Button) {
        self.core.on_pointer_down(pt, button);
    }

    /// One update followed by one draw.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a canvas call fails during the draw.
    pub fn frame(&mut self) -> Result<Vec<Action>, JsValue> {
        let actions = self.core.tick();
        self.render()?;
        Ok(actions)
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        render::draw(&self.ctx, &self.atlas, &self.core)
    }
}
