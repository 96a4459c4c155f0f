//! Error types for bootstrap failures.
//!
//! Everything here is fatal: the game cannot start without its canvas, its
//! configuration, or its bundled assets. Gameplay itself has no error paths;
//! invalid placements and deletions are silent no-ops.

use wasm_bindgen::JsValue;

use crate::config::ConfigError;

/// Error returned by [`crate::host::start`] and the loaders it calls.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The JSON configuration was malformed or out of range.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    /// A bundled sprite or font could not be fetched or decoded.
    #[error("failed to load asset {path}: {reason}")]
    Asset { path: String, reason: String },
    /// A required DOM object (window, canvas, 2D context) was unavailable.
    #[error("dom error: {0}")]
    Dom(String),
}

impl GameError {
    /// Wrap a JavaScript failure raised while loading `path`.
    #[must_use]
    pub fn asset(path: &str, err: &JsValue) -> Self {
        Self::Asset { path: path.to_owned(), reason: describe(err) }
    }

    /// Wrap a JavaScript failure raised by a DOM call.
    #[must_use]
    pub fn dom(err: &JsValue) -> Self {
        Self::Dom(describe(err))
    }
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
