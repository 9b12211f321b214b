//! Skymark - astronomical object symbols.
//!
//! Resolves an astronomical-object classification code to a visual marker
//! and renders that marker either procedurally (vector shapes composited
//! from primitives) or by sampling a pre-rasterized glyph from a shared
//! texture atlas.
//!
//! The crate never draws pixels itself: rasterization, texture upload and
//! the object-type hierarchy are collaborator interfaces ([`Painter`],
//! [`TextureLoader`] and [`TypeHierarchy`]) implemented by the embedding
//! renderer.
//!
//! # Examples
//!
//! ```
//! use skymark::{paint_symbol, resolve_symbol, SymbolAtlas, SymbolId};
//! use skymark::geometry::{Point, Size};
//! use std::collections::HashMap;
//!
//! // The type hierarchy is external; a child -> parent map works.
//! let mut hierarchy = HashMap::new();
//! hierarchy.insert("AGN".to_string(), "G".to_string());
//!
//! // "AGN" has no symbol of its own but falls back to the galaxy glyph.
//! assert_eq!(resolve_symbol(&hierarchy, "AGN"), Some(SymbolId::Galaxy));
//!
//! // Rendering goes through a backend-provided painter and atlas loader.
//! # struct NullPainter;
//! # impl skymark::Painter for NullPainter {
//! #     fn draw_ellipse(
//! #         &mut self,
//! #         _: &skymark::Style,
//! #         _: &skymark::geometry::Transform,
//! #         _: Option<f32>,
//! #     ) {}
//! #     fn draw_rect(&mut self, _: &skymark::Style, _: &skymark::geometry::Transform) {}
//! #     fn draw_line(
//! #         &mut self,
//! #         _: &skymark::Style,
//! #         _: &skymark::geometry::Transform,
//! #         _: Point,
//! #         _: Point,
//! #     ) {}
//! #     fn draw_textured_quad(
//! #         &mut self,
//! #         _: &skymark::TextureHandle,
//! #         _: &[[f32; 2]; 4],
//! #         _: Point,
//! #         _: f32,
//! #         _: &skymark::Style,
//! #         _: f32,
//! #     ) -> usize { 0 }
//! # }
//! # struct NullLoader;
//! # impl skymark::TextureLoader for NullLoader {
//! #     fn load(&self, _: &str) -> Result<skymark::TextureHandle, skymark::TextureError> {
//! #         Ok(skymark::TextureHandle::new(8, 8, 8, 8))
//! #     }
//! # }
//! let atlas = SymbolAtlas::new(NullLoader);
//! let mut painter = NullPainter;
//! let drawn = paint_symbol(
//!     &mut painter,
//!     &atlas,
//!     resolve_symbol(&hierarchy, "AGN"),
//!     Point::new(120.0, 80.0),
//!     Size::square(16.0),
//!     None,
//!     0.0,
//! );
//! assert_eq!(drawn, 0);
//! ```

pub mod atlas;
pub mod painter;
pub mod symbol;

mod error;
mod render;
mod resolve;

pub use skymark_core::{color, geometry};

pub use atlas::{atlas_uv, SymbolAtlas, TextureHandle, TextureLoader, ATLAS_ASSET, ATLAS_COLUMNS};
pub use error::TextureError;
pub use painter::{Painter, Style};
pub use render::paint_symbol;
pub use resolve::{resolve_symbol, TypeHierarchy};
pub use symbol::{ProceduralShape, SymbolEntry, SymbolId};
