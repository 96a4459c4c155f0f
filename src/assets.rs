//! Bundled sprites and fonts.
//!
//! Every image the game draws is named by a [`SpriteId`]; the id-to-file table
//! lives here and nowhere else. [`SpriteAtlas`] loads the whole table through
//! the browser once at startup. A missing or undecodable file is a packaging
//! defect, so loading stops at the first failure and reports the file name.

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

use std::collections::HashMap;

use wasm_bindgen_futures::JsFuture;
use web_sys::{FontFace, HtmlImageElement};

use crate::error::GameError;
use crate::projection::Projection;
use crate::tile::{BlockColor, HeightClass};

/// Every sprite shipped with the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Ground2D,
    GroundIso,
    BlueCube2D,
    BlueCubeIso,
    BlueHalfCube2D,
    BlueHalfCubeIso,
    RedCube2D,
    RedCubeIso,
    RedHalfCube2D,
    RedHalfCubeIso,
    YellowCube2D,
    YellowCubeIso,
    YellowHalfCube2D,
    YellowHalfCubeIso,
    ViewBtn2D,
    ViewBtnIso,
    ViewBtnDisabled,
    CursorBtnIdle,
    CursorBtnSelected,
    BlueBlockBtnIdle,
    BlueBlockBtnSelected,
    RedBlockBtnIdle,
    RedBlockBtnSelected,
    YellowBlockBtnIdle,
    YellowBlockBtnSelected,
    PanelBtnDisabled,
    SizeBtnFull,
    SizeBtnHalf,
    SizeBtnDisabled,
}

impl SpriteId {
    pub const ALL: [Self; 29] = [
        Self::Ground2D,
        Self::GroundIso,
        Self::BlueCube2D,
        Self::BlueCubeIso,
        Self::BlueHalfCube2D,
        Self::BlueHalfCubeIso,
        Self::RedCube2D,
        Self::RedCubeIso,
        Self::RedHalfCube2D,
        Self::RedHalfCubeIso,
        Self::YellowCube2D,
        Self::YellowCubeIso,
        Self::YellowHalfCube2D,
        Self::YellowHalfCubeIso,
        Self::ViewBtn2D,
        Self::ViewBtnIso,
        Self::ViewBtnDisabled,
        Self::CursorBtnIdle,
        Self::CursorBtnSelected,
        Self::BlueBlockBtnIdle,
        Self::BlueBlockBtnSelected,
        Self::RedBlockBtnIdle,
        Self::RedBlockBtnSelected,
        Self::YellowBlockBtnIdle,
        Self::YellowBlockBtnSelected,
        Self::PanelBtnDisabled,
        Self::SizeBtnFull,
        Self::SizeBtnHalf,
        Self::SizeBtnDisabled,
    ];

    /// File name of the sprite, relative to the asset base URL.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Ground2D => "ground-2d.png",
            Self::GroundIso => "ground-iso.png",
            Self::BlueCube2D => "blue-2d-cube.png",
            Self::BlueCubeIso => "blue-iso-cube.png",
            Self::BlueHalfCube2D => "blue-2d-half-cube.png",
            Self::BlueHalfCubeIso => "blue-iso-half-cube.png",
            Self::RedCube2D => "red-2d-cube.png",
            Self::RedCubeIso => "red-iso-cube.png",
            Self::RedHalfCube2D => "red-2d-half-cube.png",
            Self::RedHalfCubeIso => "red-iso-half-cube.png",
            Self::YellowCube2D => "yellow-2d-cube.png",
            Self::YellowCubeIso => "yellow-iso-cube.png",
            Self::YellowHalfCube2D => "yellow-2d-half-cube.png",
            Self::YellowHalfCubeIso => "yellow-iso-half-cube.png",
            Self::ViewBtn2D => "view-btn-2d.png",
            Self::ViewBtnIso => "view-btn-iso.png",
            Self::ViewBtnDisabled => "view-btn-disabled.png",
            Self::CursorBtnIdle => "cursor-btn-idle.png",
            Self::CursorBtnSelected => "cursor-btn-selected.png",
            Self::BlueBlockBtnIdle => "blue-block-btn-idle.png",
            Self::BlueBlockBtnSelected => "blue-block-btn-selected.png",
            Self::RedBlockBtnIdle => "red-block-btn-idle.png",
            Self::RedBlockBtnSelected => "red-block-btn-selected.png",
            Self::YellowBlockBtnIdle => "yellow-block-btn-idle.png",
            Self::YellowBlockBtnSelected => "yellow-block-btn-selected.png",
            Self::PanelBtnDisabled => "panel-btn-disabled.png",
            Self::SizeBtnFull => "size-btn-full.png",
            Self::SizeBtnHalf => "size-btn-half.png",
            Self::SizeBtnDisabled => "size-btn-disabled.png",
        }
    }

    /// Sprite for a stacked unit. Flat units use the ground sprite.
    #[must_use]
    pub fn block(color: BlockColor, height: HeightClass, projection: Projection) -> Self {
        use BlockColor::{Blue, Red, Yellow};
        use HeightClass::{Flat, Full, Half};
        use Projection::{Isometric as Iso, Planar};

        match (color, height, projection) {
            (_, Flat, Iso) => Self::GroundIso,
            (_, Flat, Planar) => Self::Ground2D,
            (Blue, Full, Iso) => Self::BlueCubeIso,
            (Blue, Full, Planar) => Self::BlueCube2D,
            (Blue, Half, Iso) => Self::BlueHalfCubeIso,
            (Blue, Half, Planar) => Self::BlueHalfCube2D,
            (Red, Full, Iso) => Self::RedCubeIso,
            (Red, Full, Planar) => Self::RedCube2D,
            (Red, Half, Iso) => Self::RedHalfCubeIso,
            (Red, Half, Planar) => Self::RedHalfCube2D,
            (Yellow, Full, Iso) => Self::YellowCubeIso,
            (Yellow, Full, Planar) => Self::YellowCube2D,
            (Yellow, Half, Iso) => Self::YellowHalfCubeIso,
            (Yellow, Half, Planar) => Self::YellowHalfCube2D,
        }
    }
}

/// Fonts shipped with the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontId {
    Default,
}

impl FontId {
    /// File name of the font, relative to the asset base URL.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Default => "fibberish.ttf",
        }
    }

    /// CSS family name the font is registered under.
    #[must_use]
    pub fn family(self) -> &'static str {
        match self {
            Self::Default => "fibberish",
        }
    }
}

/// Join a base URL and a file name with exactly one separator.
#[must_use]
pub fn asset_url(base_url: &str, path: &str) -> String {
    if base_url.is_empty() {
        return path.to_owned();
    }
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}

/// Decoded sprites keyed by id.
pub struct SpriteAtlas {
    images: HashMap<SpriteId, HtmlImageElement>,
}

impl SpriteAtlas {
    /// Load and decode every sprite and register the default font.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Asset`] naming the first file that fails to load.
    pub async fn load(base_url: &str) -> Result<Self, GameError> {
        let mut images = HashMap::with_capacity(SpriteId::ALL.len());
        for id in SpriteId::ALL {
            let url = asset_url(base_url, id.path());
            let image = load_image(&url).await?;
            log::debug!("loaded sprite {id:?} from {url}");
            images.insert(id, image);
        }
        load_font(base_url, FontId::Default).await?;
        log::info!("loaded {} sprites", images.len());
        Ok(Self { images })
    }

    #[must_use]
    pub fn get(&self, id: SpriteId) -> Option<&HtmlImageElement> {
        self.images.get(&id)
    }
}

async fn load_image(url: &str) -> Result<HtmlImageElement, GameError> {
    let image = HtmlImageElement::new().map_err(|e| GameError::asset(url, &e))?;
    image.set_src(url);
    JsFuture::from(image.decode()).await.map_err(|e| GameError::asset(url, &e))?;
    Ok(image)
}

async fn load_font(base_url: &str, id: FontId) -> Result<(), GameError> {
    let url = asset_url(base_url, id.path());
    let source = format!("url({url})");
    let face = FontFace::new_with_str(id.family(), &source).map_err(|e| GameError::asset(&url, &e))?;
    let promise = face.load().map_err(|e| GameError::asset(&url, &e))?;
    JsFuture::from(promise).await.map_err(|e| GameError::asset(&url, &e))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| GameError::Dom("no document".into()))?;
    document.fonts().add(&face).map_err(|e| GameError::asset(&url, &e))?;
    log::debug!("loaded font {id:?} from {url}");
    Ok(())
}
