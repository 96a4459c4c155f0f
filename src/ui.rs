//! Control panel state, messages, and layout.
//!
//! DESIGN
//! ======
//! Panel buttons never mutate state directly. A click resolves to a
//! [`UiMessage`] and the engine applies it with [`UiState::apply`], the only
//! mutator. The board reads `UiState` each frame and never writes it.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::assets::SpriteId;
use crate::consts::{
    PANEL_BUTTON_SIZE, PANEL_PADDING, PANEL_SPACING, RADIO_SPACING, VIEW_BUTTON_HEIGHT, VIEW_BUTTON_WIDTH,
};
use crate::projection::{Point, Projection, ScreenSize};
use crate::tile::{BlockColor, HeightClass};

/// Which projection the board is drawn and hit-tested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Isometric,
    Planar,
}

impl RenderMode {
    #[must_use]
    pub fn projection(self) -> Projection {
        match self {
            Self::Isometric => Projection::Isometric,
            Self::Planar => Projection::Planar,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Isometric => Self::Planar,
            Self::Planar => Self::Isometric,
        }
    }

    /// Banner text shown when switching to this mode.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Isometric => "ISOMETRIC",
            Self::Planar => "2D",
        }
    }
}

/// Size of the next placed block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockSize {
    #[default]
    Half,
    Full,
}

impl BlockSize {
    #[must_use]
    pub fn height_class(self) -> HeightClass {
        match self {
            Self::Half => HeightClass::Half,
            Self::Full => HeightClass::Full,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Half => Self::Full,
            Self::Full => Self::Half,
        }
    }
}

/// What a SELECT press on the board does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockOperation {
    /// Pointer only; nothing is placed.
    #[default]
    Select,
    PlaceBlue,
    PlaceRed,
    PlaceYellow,
}

impl BlockOperation {
    pub const ALL: [Self; 4] = [Self::Select, Self::PlaceBlue, Self::PlaceRed, Self::PlaceYellow];

    /// Colour placed by this operation; `None` for the pointer.
    #[must_use]
    pub fn color(self) -> Option<BlockColor> {
        match self {
            Self::Select => None,
            Self::PlaceBlue => Some(BlockColor::Blue),
            Self::PlaceRed => Some(BlockColor::Red),
            Self::PlaceYellow => Some(BlockColor::Yellow),
        }
    }
}

/// A request from the control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMessage {
    ToggleView,
    ToggleBlockSize,
    SelectOperation(BlockOperation),
}

/// Current panel selections, read by the board every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiState {
    pub render_mode: RenderMode,
    pub block_size: BlockSize,
    pub operation: BlockOperation,
}

impl UiState {
    /// Apply a panel message. Returns `true` if anything changed.
    pub fn apply(&mut self, msg: UiMessage) -> bool {
        let before = *self;
        match msg {
            UiMessage::ToggleView => self.render_mode = self.render_mode.toggled(),
            UiMessage::ToggleBlockSize => self.block_size = self.block_size.toggled(),
            UiMessage::SelectOperation(op) => self.operation = op,
        }
        *self != before
    }
}

/// Axis-aligned screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x < self.x + self.width && pt.y >= self.y && pt.y < self.y + self.height
    }
}

/// A panel control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    ViewToggle,
    SizeToggle,
    Operation(BlockOperation),
}

impl ButtonKind {
    /// Message sent when the control is clicked.
    #[must_use]
    pub fn message(self) -> UiMessage {
        match self {
            Self::ViewToggle => UiMessage::ToggleView,
            Self::SizeToggle => UiMessage::ToggleBlockSize,
            Self::Operation(op) => UiMessage::SelectOperation(op),
        }
    }

    /// Frame drawn under the control's face sprite.
    #[must_use]
    pub fn backdrop(self) -> SpriteId {
        match self {
            Self::ViewToggle => SpriteId::ViewBtnDisabled,
            Self::SizeToggle => SpriteId::SizeBtnDisabled,
            Self::Operation(_) => SpriteId::PanelBtnDisabled,
        }
    }

    /// Sprite reflecting the control's current state.
    #[must_use]
    pub fn sprite(self, state: &UiState) -> SpriteId {
        match self {
            Self::ViewToggle => match state.render_mode {
                RenderMode::Isometric => SpriteId::ViewBtnIso,
                RenderMode::Planar => SpriteId::ViewBtn2D,
            },
            Self::SizeToggle => match state.block_size {
                BlockSize::Half => SpriteId::SizeBtnHalf,
                BlockSize::Full => SpriteId::SizeBtnFull,
            },
            Self::Operation(op) => {
                let selected = state.operation == op;
                match (op, selected) {
                    (BlockOperation::Select, true) => SpriteId::CursorBtnSelected,
                    (BlockOperation::Select, false) => SpriteId::CursorBtnIdle,
                    (BlockOperation::PlaceBlue, true) => SpriteId::BlueBlockBtnSelected,
                    (BlockOperation::PlaceBlue, false) => SpriteId::BlueBlockBtnIdle,
                    (BlockOperation::PlaceRed, true) => SpriteId::RedBlockBtnSelected,
                    (BlockOperation::PlaceRed, false) => SpriteId::RedBlockBtnIdle,
                    (BlockOperation::PlaceYellow, true) => SpriteId::YellowBlockBtnSelected,
                    (BlockOperation::PlaceYellow, false) => SpriteId::YellowBlockBtnIdle,
                }
            }
        }
    }
}

/// A placed panel control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelButton {
    pub kind: ButtonKind,
    pub rect: Rect,
}

/// Control panel layout for a fixed screen size.
///
/// The view toggle sits in the top-left corner. Along the bottom edge, centred,
/// are the size toggle and then the four operation buttons.
#[derive(Debug, Clone)]
pub struct UiPanel {
    buttons: Vec<PanelButton>,
}

impl UiPanel {
    #[must_use]
    pub fn new(screen: ScreenSize) -> Self {
        let mut buttons = vec![PanelButton {
            kind: ButtonKind::ViewToggle,
            rect: Rect { x: PANEL_PADDING, y: PANEL_PADDING, width: VIEW_BUTTON_WIDTH, height: VIEW_BUTTON_HEIGHT },
        }];

        let ops = BlockOperation::ALL.len() as f64;
        let row_width = PANEL_BUTTON_SIZE + PANEL_SPACING + ops * PANEL_BUTTON_SIZE + (ops - 1.0) * RADIO_SPACING;
        let y = screen.height - PANEL_PADDING - PANEL_BUTTON_SIZE;
        let mut x = (screen.width - row_width) / 2.0;

        buttons.push(PanelButton { kind: ButtonKind::SizeToggle, rect: square(x, y) });
        x += PANEL_BUTTON_SIZE + PANEL_SPACING;
        for op in BlockOperation::ALL {
            buttons.push(PanelButton { kind: ButtonKind::Operation(op), rect: square(x, y) });
            x += PANEL_BUTTON_SIZE + RADIO_SPACING;
        }

        Self { buttons }
    }

    #[must_use]
    pub fn buttons(&self) -> &[PanelButton] {
        &self.buttons
    }

    /// The message for a click at `pt`, if it lands on a control.
    #[must_use]
    pub fn message_at(&self, pt: Point) -> Option<UiMessage> {
        self.buttons
            .iter()
            .find(|b| b.rect.contains(pt))
            .map(|b| b.kind.message())
    }
}

fn square(x: f64, y: f64) -> Rect {
    Rect { x, y, width: PANEL_BUTTON_SIZE, height: PANEL_BUTTON_SIZE }
}
