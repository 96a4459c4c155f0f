//! Input model: mouse buttons, logical actions, and per-frame press tracking.
//!
//! DOM events arrive at arbitrary times between animation frames. `InputState`
//! records the pointer position and every mapped press as it happens; once per
//! frame the engine calls [`InputState::take_frame`] to get a [`FrameInput`]
//! snapshot holding what was "just pressed" since the previous frame.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::projection::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button.
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// Logical game actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Place a block (or press a panel button).
    Select,
    /// Remove the top block.
    Delete,
}

impl InputAction {
    /// The fixed keymap: left places, right deletes, middle is unbound.
    #[must_use]
    pub fn for_button(button: Button) -> Option<Self> {
        match button {
            Button::Primary => Some(Self::Select),
            Button::Secondary => Some(Self::Delete),
            Button::Middle => None,
        }
    }
}

/// What happened since the previous frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Pointer position in logical screen pixels.
    pub cursor: Point,
    /// SELECT was pressed at least once this frame.
    pub select: bool,
    /// DELETE was pressed at least once this frame.
    pub delete: bool,
}

impl FrameInput {
    #[must_use]
    pub fn just_pressed(&self, action: InputAction) -> bool {
        match action {
            InputAction::Select => self.select,
            InputAction::Delete => self.delete,
        }
    }
}

/// Accumulates pointer input between frames.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    cursor: Point,
    pending: FrameInput,
}

impl InputState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer move.
    pub fn pointer_moved(&mut self, pt: Point) {
        self.cursor = pt;
    }

    /// Record a button press at `pt`. Unmapped buttons only move the cursor.
    pub fn pointer_down(&mut self, pt: Point, button: Button) {
        self.cursor = pt;
        match InputAction::for_button(button) {
            Some(InputAction::Select) => self.pending.select = true,
            Some(InputAction::Delete) => self.pending.delete = true,
            None => {}
        }
    }

    /// Current pointer position.
    #[must_use]
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Snapshot this frame's input and clear the presses.
    pub fn take_frame(&mut self) -> FrameInput {
        let frame = FrameInput { cursor: self.cursor, ..self.pending };
        self.pending = FrameInput::default();
        frame
    }
}
