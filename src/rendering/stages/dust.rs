use std::f32::consts::PI;

use rand::RngCore;

use super::{unit, PaintStage};
use crate::rendering::canvas::Canvas;
use crate::rendering::paint::{hsla, Style};

const PARTICLE_COUNT: usize = 480;

/// Amber dust swirling along a flattened spiral in the lower frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct DustVortices;

impl DustVortices {
    /// Spiral angle and radius for progress `t` in `[0, 1)` plus angular jitter
    pub fn spiral(t: f32, jitter: f32, width: f32) -> (f32, f32) {
        let angle = t * PI * 5.8 + jitter;
        let radius = width * (0.15 + t.powf(1.2) * 0.5);
        (angle, radius)
    }
}

impl PaintStage for DustVortices {
    fn name(&self) -> &'static str {
        "dust-vortices"
    }

    fn paint(&self, ctx: &mut Canvas<'_>, width: f32, height: f32, rng: &mut dyn RngCore) {
        for i in 0..PARTICLE_COUNT {
            let t = i as f32 / PARTICLE_COUNT as f32;
            let (angle, radius) = Self::spiral(t, unit(rng) * 0.4, width);
            let cx = width / 2.0 + angle.cos() * radius * 0.55;
            let cy = height * 0.72 + angle.sin() * radius * 0.18;

            let size = unit(rng) * width * 0.004 + width * 0.001;

            let hue = 24.0 + unit(rng) * 16.0;
            let saturation = 60.0 + unit(rng) * 20.0;
            let lightness = 40.0 + unit(rng) * 30.0;
            let alpha = 0.05 + unit(rng) * 0.25;

            let rx = size * (1.8 + unit(rng));
            let ry = size * (0.6 + unit(rng));
            let fleck = Style::Solid(hsla(hue, saturation, lightness, alpha));
            ctx.fill_ellipse(cx, cy, rx, ry, angle * 0.9, &fleck);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spiral_widens_with_progress() {
        let w = 1000.0;
        let (_, r0) = DustVortices::spiral(0.0, 0.0, w);
        let (_, r_end) = DustVortices::spiral(0.999, 0.0, w);
        assert!((r0 - 150.0).abs() < 1e-3);
        assert!(r_end < 650.0 && r_end > 640.0);
    }

    #[test]
    fn spiral_winds_almost_three_turns() {
        let (a, _) = DustVortices::spiral(1.0, 0.0, 1.0);
        assert!((a / (2.0 * PI) - 2.9).abs() < 1e-4);
        let (jittered, _) = DustVortices::spiral(0.5, 0.4, 1.0);
        assert!((jittered - (0.5 * PI * 5.8 + 0.4)).abs() < 1e-5);
    }
}
