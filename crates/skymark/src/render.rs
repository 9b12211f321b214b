//! Symbol painting: transform construction and draw-path dispatch.

use std::f32::consts::PI;

use skymark_core::color::Rgba;
use skymark_core::geometry::{Point, Size, Transform};

use crate::atlas::{atlas_uv, SymbolAtlas};
use crate::painter::{Painter, Style};
use crate::symbol::{ProceduralShape, SymbolId};

/// Dash period for the open-cluster outline, chosen so a unit circle gets
/// 8 dashes at the symbol's design size of 12.
const OPEN_CLUSTER_DASH: f32 = PI * 12.0 / 8.0;

/// Dash period for the star-cluster inner ellipse, shrunk with the 0.8
/// sub-scale so the dash count matches the open cluster's.
const STAR_CLUSTER_DASH: f32 = PI * 12.0 * 0.8 / 8.0;

/// Paints `symbol` centered at `center`.
///
/// Passing `None` for `symbol` is a defined no-op returning 0, so callers
/// can feed [`resolve_symbol`](crate::resolve_symbol) results straight in
/// without filtering. When `color` is `None` the symbol's registered
/// default color is used.
///
/// Procedural symbols are drawn as vector primitives in a normalized
/// `[-1, 1]` local square placed by translate(center) → rotate(angle) →
/// scale(w/2, h/2); their draw count is reported as 0. Atlas symbols are
/// sampled from the shared texture (sized by `size.width()` only — atlas
/// glyphs are square) and return the backend's reported draw count.
pub fn paint_symbol<P>(
    painter: &mut P,
    atlas: &SymbolAtlas,
    symbol: Option<SymbolId>,
    center: Point,
    size: Size,
    color: Option<Rgba>,
    angle: f32,
) -> usize
where
    P: Painter + ?Sized,
{
    let Some(symbol) = symbol else {
        return 0;
    };

    let entry = symbol.entry();
    let style = Style::new(color.unwrap_or_else(|| entry.default_color()));

    match entry.shape() {
        Some(shape) => {
            let transform = Transform::identity()
                .translate(center.x(), center.y())
                .rotate_z(angle)
                .scale(size.width() / 2.0, size.height() / 2.0);
            paint_procedural(painter, &style, shape, &transform);
            0
        }
        None => painter.draw_textured_quad(
            atlas.texture(),
            &atlas_uv(symbol),
            center,
            size.width(),
            &style,
            angle,
        ),
    }
}

/// Dispatches to the drawing routine for `shape`.
///
/// Routines receive the transform by shared reference and compose any
/// sub-scales on local copies, so the caller's transform is never
/// mutated.
fn paint_procedural<P>(painter: &mut P, style: &Style, shape: ProceduralShape, transform: &Transform)
where
    P: Painter + ?Sized,
{
    match shape {
        ProceduralShape::OpenCluster => paint_open_cluster(painter, style, transform),
        ProceduralShape::GlobularCluster => paint_globular_cluster(painter, style, transform),
        ProceduralShape::StarCluster => paint_star_cluster(painter, style, transform),
        ProceduralShape::Galaxy => paint_galaxy(painter, style, transform),
        ProceduralShape::PlanetaryNebula => paint_planetary_nebula(painter, style, transform),
        ProceduralShape::DiffuseNebula => paint_diffuse_nebula(painter, style, transform),
        ProceduralShape::BrightNebula => paint_bright_nebula(painter, style, transform),
    }
}

fn paint_open_cluster<P: Painter + ?Sized>(painter: &mut P, style: &Style, transform: &Transform) {
    painter.draw_ellipse(style, transform, Some(OPEN_CLUSTER_DASH));
}

fn paint_globular_cluster<P: Painter + ?Sized>(
    painter: &mut P,
    style: &Style,
    transform: &Transform,
) {
    painter.draw_ellipse(style, transform, None);
    painter.draw_line(style, transform, Point::new(-1.0, 0.0), Point::new(1.0, 0.0));
    painter.draw_line(style, transform, Point::new(0.0, -1.0), Point::new(0.0, 1.0));
}

fn paint_star_cluster<P: Painter + ?Sized>(painter: &mut P, style: &Style, transform: &Transform) {
    painter.draw_rect(style, transform);
    let inner = transform.scale(0.8, 0.8);
    painter.draw_ellipse(style, &inner, Some(STAR_CLUSTER_DASH));
}

fn paint_galaxy<P: Painter + ?Sized>(painter: &mut P, style: &Style, transform: &Transform) {
    painter.draw_ellipse(style, transform, None);
}

fn paint_planetary_nebula<P: Painter + ?Sized>(
    painter: &mut P,
    style: &Style,
    transform: &Transform,
) {
    // Four radial ticks from the rim toward the center.
    painter.draw_line(
        style,
        transform,
        Point::new(-1.0, 0.0),
        Point::new(-0.25, 0.0),
    );
    painter.draw_line(style, transform, Point::new(1.0, 0.0), Point::new(0.25, 0.0));
    painter.draw_line(
        style,
        transform,
        Point::new(0.0, -1.0),
        Point::new(0.0, -0.25),
    );
    painter.draw_line(style, transform, Point::new(0.0, 1.0), Point::new(0.0, 0.25));

    // Two concentric shells.
    let outer = transform.scale(0.75, 0.75);
    painter.draw_ellipse(style, &outer, None);
    let inner = outer.scale(1.0 / 3.0, 1.0 / 3.0);
    painter.draw_ellipse(style, &inner, None);
}

fn paint_diffuse_nebula<P: Painter + ?Sized>(
    painter: &mut P,
    style: &Style,
    transform: &Transform,
) {
    painter.draw_ellipse(style, transform, None);
}

fn paint_bright_nebula<P: Painter + ?Sized>(painter: &mut P, style: &Style, transform: &Transform) {
    painter.draw_rect(style, transform);
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use skymark_core::geometry::Transform;

    use super::*;
    use crate::atlas::{TextureHandle, TextureLoader};
    use crate::error::TextureError;

    /// A painter double that records every primitive call.
    #[derive(Default)]
    struct RecordingPainter {
        ellipses: Vec<(Transform, Option<f32>)>,
        rects: Vec<Transform>,
        lines: Vec<(Transform, Point, Point)>,
        quads: Vec<([[f32; 2]; 4], Point, f32, Rgba, f32)>,
        quad_draw_count: usize,
    }

    impl Painter for RecordingPainter {
        fn draw_ellipse(&mut self, _style: &Style, transform: &Transform, dash: Option<f32>) {
            self.ellipses.push((*transform, dash));
        }

        fn draw_rect(&mut self, _style: &Style, transform: &Transform) {
            self.rects.push(*transform);
        }

        fn draw_line(&mut self, _style: &Style, transform: &Transform, a: Point, b: Point) {
            self.lines.push((*transform, a, b));
        }

        fn draw_textured_quad(
            &mut self,
            _texture: &TextureHandle,
            uv: &[[f32; 2]; 4],
            center: Point,
            size: f32,
            style: &Style,
            angle: f32,
        ) -> usize {
            self.quads.push((*uv, center, size, style.color(), angle));
            self.quad_draw_count
        }
    }

    struct StubLoader;

    impl TextureLoader for StubLoader {
        fn load(&self, _asset: &str) -> Result<TextureHandle, TextureError> {
            Ok(TextureHandle::new(256, 256, 256, 256))
        }
    }

    fn test_atlas() -> SymbolAtlas {
        SymbolAtlas::new(StubLoader)
    }

    fn total_calls(painter: &RecordingPainter) -> usize {
        painter.ellipses.len() + painter.rects.len() + painter.lines.len() + painter.quads.len()
    }

    #[test]
    fn test_no_symbol_is_a_no_op() {
        let mut painter = RecordingPainter::default();
        let count = paint_symbol(
            &mut painter,
            &test_atlas(),
            None,
            Point::new(0.0, 0.0),
            Size::square(2.0),
            None,
            0.0,
        );
        assert_eq!(count, 0);
        assert_eq!(total_calls(&painter), 0);
    }

    #[test]
    fn test_planetary_nebula_draws_four_lines_and_two_ellipses() {
        let mut painter = RecordingPainter::default();
        let count = paint_symbol(
            &mut painter,
            &test_atlas(),
            Some(SymbolId::PlanetaryNebula),
            Point::new(0.0, 0.0),
            Size::square(2.0),
            None,
            0.0,
        );
        assert_eq!(count, 0);
        assert_eq!(painter.lines.len(), 4);
        assert_eq!(painter.ellipses.len(), 2);
        assert_eq!(painter.rects.len(), 0);
        assert_eq!(painter.quads.len(), 0);
    }

    #[test]
    fn test_planetary_nebula_shell_scales() {
        let mut painter = RecordingPainter::default();
        paint_symbol(
            &mut painter,
            &test_atlas(),
            Some(SymbolId::PlanetaryNebula),
            Point::new(0.0, 0.0),
            Size::square(2.0),
            None,
            0.0,
        );
        // With a unit base transform (size 2 ⇒ half-size 1), the shells
        // land at radii 0.75 and 0.25.
        let outer = painter.ellipses[0].0.apply(Point::new(1.0, 0.0));
        let inner = painter.ellipses[1].0.apply(Point::new(1.0, 0.0));
        assert_approx_eq!(f32, outer.x(), 0.75, epsilon = 1e-5);
        assert_approx_eq!(f32, inner.x(), 0.25, epsilon = 1e-5);
    }

    #[test]
    fn test_every_procedural_symbol_draws_something() {
        for id in SymbolId::ALL {
            if id.entry().shape().is_none() {
                continue;
            }
            let mut painter = RecordingPainter::default();
            paint_symbol(
                &mut painter,
                &test_atlas(),
                Some(id),
                Point::new(3.0, 4.0),
                Size::new(10.0, 8.0),
                None,
                0.5,
            );
            assert!(total_calls(&painter) > 0, "{id:?} drew nothing");
            assert!(painter.quads.is_empty(), "{id:?} should not sample the atlas");
        }
    }

    #[test]
    fn test_procedural_routines_do_not_mutate_the_transform() {
        let transform = Transform::identity().translate(5.0, 6.0).scale(3.0, 2.0);
        for shape in [
            ProceduralShape::OpenCluster,
            ProceduralShape::GlobularCluster,
            ProceduralShape::StarCluster,
            ProceduralShape::Galaxy,
            ProceduralShape::PlanetaryNebula,
            ProceduralShape::DiffuseNebula,
            ProceduralShape::BrightNebula,
        ] {
            let mut painter = RecordingPainter::default();
            let before = transform;
            paint_procedural(&mut painter, &Style::new(Rgba::default()), shape, &transform);
            assert_eq!(transform, before);
        }
    }

    #[test]
    fn test_star_cluster_inner_ellipse_is_scaled_down() {
        let mut painter = RecordingPainter::default();
        paint_symbol(
            &mut painter,
            &test_atlas(),
            Some(SymbolId::ClusterOfStars),
            Point::new(0.0, 0.0),
            Size::square(2.0),
            None,
            0.0,
        );
        assert_eq!(painter.rects.len(), 1);
        assert_eq!(painter.ellipses.len(), 1);
        let (ellipse_transform, dash) = painter.ellipses[0];
        let rim = ellipse_transform.apply(Point::new(1.0, 0.0));
        assert_approx_eq!(f32, rim.x(), 0.8, epsilon = 1e-5);
        assert_approx_eq!(f32, dash.unwrap(), PI * 12.0 * 0.8 / 8.0);
    }

    #[test]
    fn test_open_cluster_is_dashed() {
        let mut painter = RecordingPainter::default();
        paint_symbol(
            &mut painter,
            &test_atlas(),
            Some(SymbolId::OpenGalacticCluster),
            Point::new(0.0, 0.0),
            Size::square(2.0),
            None,
            0.0,
        );
        assert_eq!(painter.ellipses.len(), 1);
        assert_approx_eq!(f32, painter.ellipses[0].1.unwrap(), PI * 12.0 / 8.0);
    }

    #[test]
    fn test_transform_places_local_square() {
        let mut painter = RecordingPainter::default();
        paint_symbol(
            &mut painter,
            &test_atlas(),
            Some(SymbolId::BrightNebula),
            Point::new(100.0, 50.0),
            Size::new(8.0, 6.0),
            None,
            0.0,
        );
        // Local corner (1, 1) lands at center + half-size.
        let corner = painter.rects[0].apply(Point::new(1.0, 1.0));
        assert_approx_eq!(f32, corner.x(), 104.0, epsilon = 1e-4);
        assert_approx_eq!(f32, corner.y(), 53.0, epsilon = 1e-4);
    }

    #[test]
    fn test_atlas_path_passes_through_draw_count() {
        let mut painter = RecordingPainter {
            quad_draw_count: 6,
            ..RecordingPainter::default()
        };
        let count = paint_symbol(
            &mut painter,
            &test_atlas(),
            Some(SymbolId::Pointer),
            Point::new(10.0, 20.0),
            Size::square(24.0),
            None,
            0.0,
        );
        assert_eq!(count, 6);
        assert_eq!(painter.quads.len(), 1);

        let (uv, center, size, color, _angle) = painter.quads[0];
        assert_eq!(uv, atlas_uv(SymbolId::Pointer));
        assert_eq!(center, Point::new(10.0, 20.0));
        assert_eq!(size, 24.0);
        assert_eq!(color.to_packed(), 0x4CFF4CFF);
    }

    #[test]
    fn test_default_color_round_trip() {
        // The default-color path must reproduce the packed registry color
        // within float tolerance.
        let mut painter = RecordingPainter::default();
        paint_symbol(
            &mut painter,
            &test_atlas(),
            Some(SymbolId::ArtificialSatellite),
            Point::new(0.0, 0.0),
            Size::square(2.0),
            None,
            0.0,
        );
        let color = painter.quads[0].3;
        let expected = Rgba::from_packed(SymbolId::ArtificialSatellite.entry().packed_color());
        for (actual, expected) in color.components().into_iter().zip(expected.components()) {
            assert_approx_eq!(f32, actual, expected);
        }
    }

    #[test]
    fn test_color_override_wins() {
        let mut painter = RecordingPainter::default();
        let override_color = Rgba::new(0.1, 0.2, 0.3, 0.4);
        paint_symbol(
            &mut painter,
            &test_atlas(),
            Some(SymbolId::Pointer),
            Point::new(0.0, 0.0),
            Size::square(2.0),
            Some(override_color),
            0.0,
        );
        assert_eq!(painter.quads[0].3, override_color);
    }
}
