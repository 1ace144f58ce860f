use std::f32::consts::PI;

use rand::RngCore;

use super::{unit, PaintStage};
use crate::rendering::canvas::Canvas;
use crate::rendering::paint::{rgba, Style};

const EMBER_COUNT: usize = 380;

/// Warm glow over the bottom 40% of the frame with flickering embers that
/// crowd towards the ground.
#[derive(Debug, Default, Clone, Copy)]
pub struct GroundEmbers;

impl GroundEmbers {
    /// Vertical position from two uniform draws; biased low by `u^1.4`
    pub fn ember_y(height: f32, u: f32, spread: f32) -> f32 {
        height * 0.68 + u.powf(1.4) * height * 0.32 * spread
    }
}

impl PaintStage for GroundEmbers {
    fn name(&self) -> &'static str {
        "ground-embers"
    }

    fn paint(&self, ctx: &mut Canvas<'_>, width: f32, height: f32, rng: &mut dyn RngCore) {
        let glow = Style::linear(
            (0.0, height * 0.7),
            (0.0, height),
            &[
                (0.0, rgba(16, 7, 0, 0.0)),
                (0.35, rgba(40, 20, 5, 0.2)),
                (1.0, rgba(120, 58, 20, 0.55)),
            ],
        );
        ctx.fill_rect(0.0, height * 0.6, width, height * 0.4, &glow);

        for _ in 0..EMBER_COUNT {
            let x = unit(rng) * width;
            let u = unit(rng);
            let y = Self::ember_y(height, u, unit(rng));
            let size = unit(rng).powi(2) * width * 0.007 + width * 0.002;
            let flicker = unit(rng) * 0.15 + 0.1;

            let green = (180.0 + unit(rng) * 40.0).round() as u8;
            let blue = (120.0 + unit(rng) * 40.0).round() as u8;
            let spark = Style::Solid(rgba(255, green, blue, flicker));

            let ry = size * (0.6 + unit(rng) * 0.7);
            ctx.fill_ellipse(x, y, size, ry, unit(rng) * PI, &spark);
        }
    }
}
