//! Shared numeric constants for the board, projections, and control panel.

// ── Tiles ───────────────────────────────────────────────────────

/// Width of an isometric ground diamond in pixels.
pub const TILE_WIDTH_ISO: f64 = 32.0;

/// Height of an isometric ground diamond in pixels.
pub const TILE_HEIGHT_ISO: f64 = 16.0;

/// Width of a planar ground tile in pixels.
pub const TILE_WIDTH_2D: f64 = 24.0;

/// Height of a planar ground tile in pixels.
pub const TILE_HEIGHT_2D: f64 = 18.0;

// ── Stacking ────────────────────────────────────────────────────

/// Vertical rise of a half block in the isometric projection.
pub const HALF_DEPTH_ISO: f64 = 8.0;

/// Vertical rise of a full block in the isometric projection.
pub const FULL_DEPTH_ISO: f64 = 16.0;

/// Vertical rise of a half block in the planar projection.
pub const HALF_DEPTH_2D: f64 = 5.0;

/// Vertical rise of a full block in the planar projection.
pub const FULL_DEPTH_2D: f64 = 10.0;

// ── Layout ──────────────────────────────────────────────────────

/// Divisor placing the isometric board's vertical centre on screen.
pub const ISO_ORIGIN_Y_DIVISOR: f64 = 1.25;

/// Divisor placing the planar board's vertical centre on screen.
pub const PLANAR_ORIGIN_Y_DIVISOR: f64 = 1.5;

/// Inset of the control panel from every screen edge.
pub const PANEL_PADDING: f64 = 5.0;

/// Gap between the size toggle and the operation buttons.
pub const PANEL_SPACING: f64 = 20.0;

/// Gap between adjacent operation buttons.
pub const RADIO_SPACING: f64 = 2.0;

/// View toggle button size.
pub const VIEW_BUTTON_WIDTH: f64 = 32.0;
pub const VIEW_BUTTON_HEIGHT: f64 = 16.0;

/// Size toggle and operation button size.
pub const PANEL_BUTTON_SIZE: f64 = 16.0;

// ── Rendering ───────────────────────────────────────────────────

/// Screen clear colour.
pub const BACKGROUND_COLOR: &str = "#151d28";

/// Hue rotation applied to a hovered stack, in radians.
pub const HOVER_HUE_ROTATION_RAD: f64 = 1.25;

/// Alert banner text colour.
pub const ALERT_COLOR: &str = "#f4f4f4";

/// Alert banner font size in pixels.
pub const ALERT_FONT_SIZE_PX: f64 = 12.0;
