use std::f32::consts::PI;

use rand::RngCore;
use tiny_skia::LineCap;

use super::{canonical_scale, PaintStage};
use crate::rendering::canvas::Canvas;
use crate::rendering::paint::{rgba, Style};
use crate::rendering::path::{self, Seg};

use crate::rendering::path::Seg::{Cubic, Move};

/// Coiled body, canonical units relative to the serpent origin
const BODY: &[Seg] = &[
    Move(-30.0, -20.0),
    Cubic(120.0, -260.0, 80.0, -450.0, 20.0, -540.0),
    Cubic(-20.0, -580.0, -90.0, -520.0, -70.0, -460.0),
    Cubic(-20.0, -280.0, -10.0, 40.0, -60.0, 280.0),
    Cubic(-80.0, 380.0, -30.0, 460.0, 50.0, 430.0),
    Cubic(140.0, 390.0, 210.0, 260.0, 160.0, 180.0),
    Cubic(110.0, 100.0, 60.0, 20.0, -10.0, -10.0),
];

/// Horizontal offset of the serpent origin from the frame centre, canonical units
const ORIGIN_OFFSET_X: f32 = 120.0;

/// An ellipse as centre, radii and rotation in radians
pub type Ellipse = (f32, f32, f32, f32, f32);

/// Iris and pupil of one eye
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Eye {
    pub iris: Ellipse,
    pub pupil: Ellipse,
}

pub const SERPENT_EYES: [Eye; 2] = [
    Eye {
        iris: (45.0, -480.0, 28.0, 18.0, PI / 8.0),
        pupil: (52.0, -480.0, 10.0, 12.0, PI / 10.0),
    },
    Eye {
        iris: (-20.0, -506.0, 24.0, 16.0, -PI / 10.0),
        pupil: (-14.0, -505.0, 8.0, 11.0, -PI / 12.0),
    },
];

/// The serpent coiled beside the figure: a glowing body stroke and two eyes.
#[derive(Debug, Default, Clone, Copy)]
pub struct Serpent;

impl Serpent {
    pub fn body() -> &'static [Seg] {
        BODY
    }
}

impl PaintStage for Serpent {
    fn name(&self) -> &'static str {
        "serpent"
    }

    fn paint(&self, ctx: &mut Canvas<'_>, width: f32, height: f32, _rng: &mut dyn RngCore) {
        let scale = canonical_scale(width);
        ctx.save();
        ctx.translate(width / 2.0 + ORIGIN_OFFSET_X * scale, height * 0.36);
        ctx.scale(scale, scale);

        if let Some(body) = path::build(BODY) {
            ctx.set_line_cap(LineCap::Round);
            ctx.set_shadow(rgba(66, 142, 255, 0.6), 50.0);
            ctx.stroke_path(&body, &Style::Solid(rgba(44, 94, 160, 0.92)), 32.0);

            ctx.set_shadow(rgba(66, 142, 255, 0.6), 20.0);
            ctx.stroke_path(&body, &Style::Solid(rgba(120, 205, 255, 0.9)), 18.0);
        }

        ctx.clear_shadow();
        let iris = Style::Solid(rgba(70, 160, 255, 0.92));
        let pupil = Style::Solid(rgba(13, 28, 60, 0.92));
        for eye in SERPENT_EYES {
            let (x, y, rx, ry, rot) = eye.iris;
            ctx.fill_ellipse(x, y, rx, ry, rot, &iris);
            let (x, y, rx, ry, rot) = eye.pupil;
            ctx.fill_ellipse(x, y, rx, ry, rot, &pupil);
        }

        ctx.restore();
    }
}
