use std::f32::consts::PI;

use rand::RngCore;
use tiny_skia::{BlendMode, LineCap, LineJoin, Point};

use super::{unit, PaintStage};
use crate::rendering::canvas::Canvas;
use crate::rendering::paint::{rgba, Style};
use crate::rendering::path;

/// Straight-line pieces per bolt
pub const SEGMENTS: usize = 16;

/// Start and end of each bolt as fractions of width and height
pub const BOLTS: [((f32, f32), (f32, f32)); 3] = [
    ((0.12, 0.22), (0.46, 0.46)),
    ((0.78, 0.16), (0.56, 0.44)),
    ((0.88, 0.48), (0.62, 0.58)),
];

/// Three jagged bolts striking towards the figure, each a blurred glow pass
/// under a thin bright core.
#[derive(Debug, Default, Clone, Copy)]
pub struct Lightning;

impl Lightning {
    /// Largest sideways offset allowed at progress `t`; zero at both ends
    pub fn lateral_envelope(t: f32, width: f32) -> f32 {
        ((t * PI * 2.2).sin() * width * 0.045 * (t * PI).sin() / 1.4).abs()
    }

    /// Jagged point sequence from `start` to `end`: `SEGMENTS + 1` points with
    /// both endpoints exact.
    pub fn bolt_path(start: Point, end: Point, width: f32, rng: &mut dyn RngCore) -> Vec<Point> {
        let mut points = Vec::with_capacity(SEGMENTS + 1);
        points.push(start);

        for i in 1..SEGMENTS {
            let t = i as f32 / SEGMENTS as f32;
            let base_x = start.x + (end.x - start.x) * t;
            let base_y = start.y + (end.y - start.y) * t;
            let displacement = Self::lateral_envelope(t, width);
            points.push(Point::from_xy(
                base_x + (unit(rng) - 0.5) * displacement,
                base_y + (unit(rng) - 0.5) * width * 0.02,
            ));
        }

        points.push(end);
        points
    }

    fn strike(ctx: &mut Canvas<'_>, points: &[Point], width: f32) {
        let Some(bolt) = path::polyline(points) else {
            return;
        };

        ctx.save();
        ctx.set_blend_mode(BlendMode::Screen);
        ctx.set_line_cap(LineCap::Round);
        ctx.set_line_join(LineJoin::Round);

        let halo = rgba(120, 210, 255, 0.7);
        ctx.set_shadow(halo, width * 0.04);
        ctx.stroke_path(&bolt, &Style::Solid(rgba(110, 205, 255, 0.6)), width * 0.018);

        ctx.set_shadow(halo, width * 0.012);
        ctx.stroke_path(&bolt, &Style::Solid(rgba(224, 244, 255, 0.92)), width * 0.006);

        ctx.restore();
    }
}

impl PaintStage for Lightning {
    fn name(&self) -> &'static str {
        "lightning"
    }

    fn paint(&self, ctx: &mut Canvas<'_>, width: f32, height: f32, rng: &mut dyn RngCore) {
        for ((sx, sy), (ex, ey)) in BOLTS {
            let start = Point::from_xy(width * sx, height * sy);
            let end = Point::from_xy(width * ex, height * ey);
            let points = Self::bolt_path(start, end, width, rng);
            Self::strike(ctx, &points, width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn bolt_has_pinned_endpoints() {
        let mut rng = Pcg64::seed_from_u64(3);
        let start = Point::from_xy(10.0, 20.0);
        let end = Point::from_xy(300.0, 400.0);
        let pts = Lightning::bolt_path(start, end, 1000.0, &mut rng);
        assert_eq!(pts.len(), SEGMENTS + 1);
        assert_eq!(pts[0], start);
        assert_eq!(pts[SEGMENTS], end);
    }

    #[test]
    fn jitter_stays_inside_envelope() {
        let mut rng = Pcg64::seed_from_u64(11);
        let width = 800.0;
        let start = Point::from_xy(0.0, 0.0);
        let end = Point::from_xy(160.0, 320.0);
        for _ in 0..20 {
            let pts = Lightning::bolt_path(start, end, width, &mut rng);
            for (i, p) in pts.iter().enumerate().skip(1).take(SEGMENTS - 1) {
                let t = i as f32 / SEGMENTS as f32;
                let dx = p.x - 160.0 * t;
                let dy = p.y - 320.0 * t;
                assert!(dx.abs() <= Lightning::lateral_envelope(t, width) / 2.0 + 1e-3);
                assert!(dy.abs() <= width * 0.01 + 1e-3);
            }
        }
    }

    #[test]
    fn envelope_tapers_at_the_ends() {
        assert!(Lightning::lateral_envelope(0.0, 1000.0) < 1e-3);
        assert!(Lightning::lateral_envelope(1.0, 1000.0) < 1e-3);
        assert!(Lightning::lateral_envelope(0.25, 1000.0) > 10.0);
    }

    #[test]
    fn three_fixed_bolts() {
        assert_eq!(BOLTS.len(), 3);
        for ((sx, sy), (ex, ey)) in BOLTS {
            for v in [sx, sy, ex, ey] {
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }
}
