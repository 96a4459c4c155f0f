//! Isometric / 2D block-placement demo.
//!
//! This crate is compiled to WebAssembly and runs in the browser. A fixed grid
//! of cells, each holding a stack of blocks on a ground tile, is drawn in one
//! of two projections. The pointer hovers a cell; the left button places a
//! block of the selected colour and size, the right button removes the top
//! block. A small in-canvas panel switches projection, block size and colour.
//!
//! Everything except [`render`], [`host`] and the sprite loader in [`assets`]
//! is plain Rust and is tested natively through [`engine::EngineCore`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`host`] | Wasm entry point, DOM listeners, animation-frame loop |
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`board`] | Grid of tile stacks, hover, place/remove, draw order |
//! | [`tile`] | Tiles, height classes and per-cell stacks |
//! | [`projection`] | Isometric and planar grid-to-screen transforms |
//! | [`hit`] | Cell shapes and cursor-to-cell lookup |
//! | [`input`] | Mouse buttons, logical actions, per-frame presses |
//! | [`ui`] | Panel state, messages and layout |
//! | [`alert`] | Blinking banner text |
//! | [`assets`] | Sprite/font ids, file table and atlas loader |
//! | [`render`] | Scene rendering |
//! | [`config`] | JSON configuration with defaults |
//! | [`error`] | Bootstrap error type |
//! | [`consts`] | Shared numeric constants (tile sizes, depths, layout) |

pub mod alert;
pub mod assets;
pub mod board;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod hit;
pub mod host;
pub mod input;
pub mod projection;
pub mod render;
pub mod tile;
pub mod ui;
