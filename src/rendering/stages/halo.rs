use rand::RngCore;

use super::PaintStage;
use crate::rendering::canvas::Canvas;
use crate::rendering::paint::{rgba, Style};

const LAYERS: usize = 6;

/// Six stacked, shrinking glow ellipses above the centre of the frame, each
/// turned a further 12°.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnergyHalo;

impl EnergyHalo {
    /// Radius, vertical squash, rotation (radians) and opacity of layer `i`
    pub fn layer(i: usize, max_radius: f32) -> (f32, f32, f32, f32) {
        let fi = i as f32;
        let radius = max_radius * (1.0 - fi * 0.12);
        let squash = 0.82 - fi * 0.03;
        let rotation = (fi * 12.0).to_radians();
        let alpha = 0.85 - fi * 0.12;
        (radius, squash, rotation, alpha)
    }
}

impl PaintStage for EnergyHalo {
    fn name(&self) -> &'static str {
        "energy-halo"
    }

    fn paint(&self, ctx: &mut Canvas<'_>, width: f32, height: f32, _rng: &mut dyn RngCore) {
        ctx.save();
        ctx.translate(width / 2.0, height * 0.45);

        let max_radius = width * 0.58;
        for i in 0..LAYERS {
            let fi = i as f32;
            let (radius, squash, rotation, alpha) = Self::layer(i, max_radius);
            let glow = Style::radial(
                (0.0, 0.0),
                radius * 0.2,
                radius,
                &[
                    (0.0, rgba(75, 140, 255, 0.38 - fi * 0.04)),
                    (0.5, rgba(47, 102, 255, 0.16 - fi * 0.02)),
                    (1.0, rgba(12, 24, 64, 0.0)),
                ],
            );

            ctx.set_global_alpha(alpha);
            ctx.fill_ellipse(0.0, 0.0, radius, radius * squash, rotation, &glow);
        }

        ctx.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_shrink_fade_and_turn() {
        let mut prev = EnergyHalo::layer(0, 100.0);
        assert_eq!(prev.2, 0.0);
        for i in 1..LAYERS {
            let next = EnergyHalo::layer(i, 100.0);
            assert!(next.0 < prev.0);
            assert!(next.3 < prev.3);
            assert!((next.2 - prev.2 - 12f32.to_radians()).abs() < 1e-5);
            prev = next;
        }
        assert!(prev.3 > 0.0);
    }
}
