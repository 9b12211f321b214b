//! The shared symbol texture atlas.
//!
//! Atlas-rendered symbols are pre-rasterized glyphs packed into an 8×8
//! grid inside a single texture. The cell for a symbol is implied by its
//! discriminant, so the grid layout is a fixed contract with the atlas
//! asset: changing the cell count or ordering requires a synchronized
//! change to [`atlas_uv`].

use std::sync::OnceLock;

use log::info;

use crate::error::TextureError;
use crate::symbol::SymbolId;

/// The asset id of the shared symbol atlas.
pub const ATLAS_ASSET: &str = "asset://symbols.png";

/// Number of glyph columns (and rows) in the atlas grid.
pub const ATLAS_COLUMNS: usize = 8;

/// An opaque handle to a texture uploaded by the rendering backend.
///
/// `width`/`height` are the image dimensions; `storage_width`/
/// `storage_height` are the dimensions of the backing texture storage,
/// which may be larger when the backend pads images up to a
/// power-of-two size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureHandle {
    width: u32,
    height: u32,
    storage_width: u32,
    storage_height: u32,
}

impl TextureHandle {
    /// Creates a handle for an image occupying the top-left
    /// `width × height` region of a `storage_width × storage_height`
    /// texture.
    pub fn new(width: u32, height: u32, storage_width: u32, storage_height: u32) -> Self {
        Self {
            width,
            height,
            storage_width,
            storage_height,
        }
    }

    /// Returns the image width in pixels.
    pub fn width(self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(self) -> u32 {
        self.height
    }

    /// Returns the backing storage width in pixels.
    pub fn storage_width(self) -> u32 {
        self.storage_width
    }

    /// Returns the backing storage height in pixels.
    pub fn storage_height(self) -> u32 {
        self.storage_height
    }

    /// Returns true if the image fills its storage exactly, so that UV
    /// coordinates in `[0, 1]` address the image without rescaling.
    pub fn fills_storage(self) -> bool {
        self.width == self.storage_width && self.height == self.storage_height
    }
}

/// The texture-loading collaborator, implemented by the rendering backend.
pub trait TextureLoader: Send + Sync {
    /// Loads (and uploads) the texture for `asset`.
    fn load(&self, asset: &str) -> Result<TextureHandle, TextureError>;
}

/// Process-scoped owner of the shared atlas texture.
///
/// The texture is loaded lazily on first use and exactly once for the
/// lifetime of the atlas, even when painted from multiple threads.
/// Typically one `SymbolAtlas` lives for the whole process.
///
/// # Panics
///
/// [`texture`](SymbolAtlas::texture) panics if the loader fails or if the
/// loaded image does not fill its texture storage exactly. The atlas
/// asset is a build-time invariant and there is no degraded rendering
/// path without it, so failure here is a fatal configuration error.
pub struct SymbolAtlas {
    loader: Box<dyn TextureLoader>,
    texture: OnceLock<TextureHandle>,
}

impl SymbolAtlas {
    /// Creates an atlas that will load its texture through `loader` on
    /// first use.
    pub fn new(loader: impl TextureLoader + 'static) -> Self {
        Self {
            loader: Box::new(loader),
            texture: OnceLock::new(),
        }
    }

    /// Returns the shared atlas texture, loading it on the first call.
    pub fn texture(&self) -> &TextureHandle {
        self.texture.get_or_init(|| {
            let texture = self
                .loader
                .load(ATLAS_ASSET)
                .unwrap_or_else(|err| panic!("failed to load symbol atlas `{ATLAS_ASSET}`: {err}"));
            assert!(
                texture.fills_storage(),
                "symbol atlas `{ATLAS_ASSET}` must fill its texture storage exactly \
                 ({}x{} image in {}x{} storage)",
                texture.width(),
                texture.height(),
                texture.storage_width(),
                texture.storage_height(),
            );
            info!(width = texture.width(), height = texture.height(); "loaded symbol atlas");
            texture
        })
    }
}

impl std::fmt::Debug for SymbolAtlas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolAtlas")
            .field("texture", &self.texture.get())
            .finish_non_exhaustive()
    }
}

/// Computes the four UV corners of a symbol's atlas cell, in the order
/// top-left, top-right, bottom-left, bottom-right.
///
/// The cell column is `index mod 8` and the row `index div 8`, each cell
/// spanning `1/8` of the atlas in both axes.
pub fn atlas_uv(symbol: SymbolId) -> [[f32; 2]; 4] {
    let index = symbol.atlas_index();
    let column = index % ATLAS_COLUMNS;
    let row = index / ATLAS_COLUMNS;

    let mut uv = [[0.0f32; 2]; 4];
    for (corner, slot) in uv.iter_mut().enumerate() {
        slot[0] = (column + corner % 2) as f32 / ATLAS_COLUMNS as f32;
        slot[1] = (row + corner / 2) as f32 / ATLAS_COLUMNS as f32;
    }
    uv
}
