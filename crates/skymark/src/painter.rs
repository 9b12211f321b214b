//! The primitive-painter collaborator interface.

use skymark_core::color::Rgba;
use skymark_core::geometry::{Point, Transform};

use crate::atlas::TextureHandle;

/// A snapshot of paint state taken once per [`paint_symbol`] call.
///
/// The resolved color is copied here so that drawing a symbol never
/// mutates the caller's own painter state.
///
/// [`paint_symbol`]: crate::paint_symbol
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    color: Rgba,
}

impl Style {
    /// Creates a style with the given stroke/fill color.
    pub fn new(color: Rgba) -> Self {
        Self { color }
    }

    /// Returns the resolved color for this paint call.
    pub fn color(&self) -> Rgba {
        self.color
    }
}

/// Low-level rasterization primitives, implemented by the rendering
/// backend.
///
/// All vector primitives operate in a normalized `[-1, 1]` local square
/// mapped to the screen by the supplied transform. The methods draw into
/// backend-owned state; this crate never observes the result beyond the
/// draw count reported by [`draw_textured_quad`](Painter::draw_textured_quad).
pub trait Painter {
    /// Strokes the unit ellipse inscribed in the local square.
    ///
    /// `dash_period` is the angular length (in radians, along the unit
    /// circle) of one dash-plus-gap cycle; `None` draws a solid outline.
    fn draw_ellipse(&mut self, style: &Style, transform: &Transform, dash_period: Option<f32>);

    /// Strokes the local square's outline.
    fn draw_rect(&mut self, style: &Style, transform: &Transform);

    /// Strokes a line segment between two local-space points.
    fn draw_line(&mut self, style: &Style, transform: &Transform, a: Point, b: Point);

    /// Samples `uv` corners from `texture` and blits the quad centered at
    /// `center`, `size` pixels wide (atlas glyphs are square), tinted with
    /// the style color and rotated by `angle` radians.
    ///
    /// Returns the backend's reported draw count.
    fn draw_textured_quad(
        &mut self,
        texture: &TextureHandle,
        uv: &[[f32; 2]; 4],
        center: Point,
        size: f32,
        style: &Style,
        angle: f32,
    ) -> usize;
}
