use std::f32::consts::PI;

use rand::RngCore;
use tiny_skia::BlendMode;

use super::PaintStage;
use crate::rendering::canvas::Canvas;
use crate::rendering::paint::{rgba, Style};

const MIST_LAYERS: usize = 4;

/// Top of the vignette band as a fraction of the frame height
pub const VIGNETTE_TOP: f32 = 0.55;

/// Screen-blended mist drifting across the lower frame, then a darkening
/// vignette over the bottom 45%.
#[derive(Debug, Clone, Copy)]
pub struct ForegroundMist {
    pub vignette: bool,
}

impl Default for ForegroundMist {
    fn default() -> Self {
        Self { vignette: true }
    }
}

impl ForegroundMist {
    /// Mist only, vignette left off
    pub fn without_vignette() -> Self {
        Self { vignette: false }
    }
}

impl PaintStage for ForegroundMist {
    fn name(&self) -> &'static str {
        "foreground-mist"
    }

    fn paint(&self, ctx: &mut Canvas<'_>, width: f32, height: f32, _rng: &mut dyn RngCore) {
        ctx.save();
        ctx.set_blend_mode(BlendMode::Screen);

        for i in 0..MIST_LAYERS {
            let fi = i as f32;
            let x = width * (0.2 + fi * 0.2);
            let haze = Style::radial(
                (x, height * (0.74 + fi * 0.06)),
                width * 0.02,
                width * 0.4,
                &[
                    (0.0, rgba(120, 150, 220, 0.12 - fi * 0.02)),
                    (1.0, rgba(10, 20, 40, 0.0)),
                ],
            );
            ctx.fill_ellipse(
                x,
                height * (0.78 + fi * 0.04),
                width * 0.46,
                height * 0.14,
                PI / 10.0 * fi,
                &haze,
            );
        }

        ctx.restore();

        if self.vignette {
            let top = height * VIGNETTE_TOP;
            let shade = Style::linear(
                (0.0, top),
                (0.0, height),
                &[(0.0, rgba(0, 0, 0, 0.0)), (1.0, rgba(0, 0, 0, 0.55))],
            );
            ctx.fill_rect(0.0, top, width, height - top, &shade);
        }
    }
}
