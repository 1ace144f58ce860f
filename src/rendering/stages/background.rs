use rand::RngCore;

use super::PaintStage;
use crate::rendering::canvas::Canvas;
use crate::rendering::paint::{hex, rgba, Style};

/// Dark diagonal base with a blue aurora glowing behind the figure.
#[derive(Debug, Default, Clone, Copy)]
pub struct Background;

impl PaintStage for Background {
    fn name(&self) -> &'static str {
        "background"
    }

    fn paint(&self, ctx: &mut Canvas<'_>, width: f32, height: f32, _rng: &mut dyn RngCore) {
        let base = Style::linear(
            (0.0, 0.0),
            (width, height),
            &[
                (0.0, hex(0x05070f)),
                (0.3, hex(0x0b1124)),
                (0.65, hex(0x06090f)),
                (1.0, hex(0x020205)),
            ],
        );
        ctx.fill_rect(0.0, 0.0, width, height, &base);

        let aurora = Style::radial(
            (width * 0.5, height * 0.38),
            width * 0.05,
            width * 0.55,
            &[
                (0.0, rgba(90, 153, 255, 0.55)),
                (0.3, rgba(38, 79, 170, 0.4)),
                (0.6, rgba(16, 32, 70, 0.18)),
                (1.0, rgba(4, 8, 17, 0.0)),
            ],
        );
        ctx.fill_rect(0.0, 0.0, width, height, &aurora);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::surface::Surface;

    #[test]
    fn background_is_opaque_everywhere() {
        let mut surface = Surface::with_backing(24, 52);
        {
            let mut ctx = surface.context().expect("context");
            Background.paint(&mut ctx, 24.0, 52.0, &mut rand::rng());
        }
        for (x, y) in [(0, 0), (23, 51), (12, 20), (0, 51)] {
            assert_eq!(surface.pixel(x, y).expect("pixel").alpha(), 255);
        }
    }

    #[test]
    fn aurora_brightens_the_centre() {
        let mut surface = Surface::with_backing(100, 216);
        {
            let mut ctx = surface.context().expect("context");
            Background.paint(&mut ctx, 100.0, 216.0, &mut rand::rng());
        }
        let centre = surface.pixel(50, 82).expect("pixel");
        let corner = surface.pixel(0, 215).expect("pixel");
        assert!(centre.blue() > corner.blue());
    }
}
