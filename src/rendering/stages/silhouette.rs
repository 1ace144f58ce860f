use std::f32::consts::PI;

use rand::RngCore;
use tiny_skia::{LineCap, LineJoin};

use super::{canonical_scale, PaintStage};
use crate::rendering::canvas::Canvas;
use crate::rendering::paint::{rgba, Style};
use crate::rendering::path::{self, Seg};

use crate::rendering::path::Seg::{Close, Line, Move, Quad};

// Outlines below are in canonical-frame units, relative to the figure origin
// at (width / 2, height * 0.6).

const TORSO: &[Seg] = &[
    Move(-80.0, -780.0),
    Quad(-130.0, -620.0, -162.0, -470.0),
    Seg::Cubic(-210.0, -280.0, -320.0, -160.0, -260.0, 40.0),
    Quad(-150.0, -40.0, -76.0, -12.0),
    Quad(-20.0, -80.0, 55.0, -110.0),
    Quad(140.0, -145.0, 220.0, -280.0),
    Quad(240.0, -320.0, 210.0, -360.0),
    Quad(160.0, -420.0, 60.0, -410.0),
    Quad(90.0, -520.0, 92.0, -640.0),
    Quad(96.0, -760.0, 32.0, -780.0),
    Close,
];

const RIGHT_LEG: &[Seg] = &[
    Move(78.0, -150.0),
    Quad(140.0, -30.0, 200.0, 260.0),
    Quad(160.0, 310.0, 90.0, 300.0),
    Quad(40.0, 140.0, 40.0, -20.0),
    Close,
];

const LEFT_LEG: &[Seg] = &[
    Move(-60.0, -140.0),
    Quad(-180.0, 40.0, -220.0, 360.0),
    Quad(-140.0, 420.0, -60.0, 360.0),
    Quad(-18.0, 220.0, 10.0, 20.0),
    Quad(20.0, -110.0, -20.0, -140.0),
    Close,
];

const RIGHT_ARM: &[Seg] = &[
    Move(70.0, -460.0),
    Quad(210.0, -520.0, 300.0, -360.0),
    Quad(240.0, -300.0, 150.0, -260.0),
    Quad(70.0, -300.0, 70.0, -380.0),
    Close,
];

const LEFT_ARM: &[Seg] = &[
    Move(-90.0, -430.0),
    Quad(-240.0, -470.0, -330.0, -300.0),
    Quad(-250.0, -250.0, -150.0, -240.0),
    Quad(-60.0, -260.0, -70.0, -340.0),
    Close,
];

/// Relative to the raised right hand at (240, -350)
const TRIDENT: &[Seg] = &[
    Move(10.0, -380.0),
    Quad(60.0, -420.0, 56.0, -300.0),
    Quad(80.0, -320.0, 90.0, -350.0),
    Quad(120.0, -260.0, 90.0, -200.0),
    Quad(80.0, -170.0, 90.0, -140.0),
    Line(50.0, -100.0),
    Line(50.0, 220.0),
    Line(-20.0, 220.0),
    Line(-20.0, -100.0),
    Line(-60.0, -140.0),
    Quad(-50.0, -170.0, -60.0, -200.0),
    Quad(-92.0, -260.0, -60.0, -360.0),
    Quad(-43.0, -320.0, -20.0, -300.0),
    Quad(-20.0, -420.0, 20.0, -380.0),
    Close,
];

const TRIDENT_GRIP: (f32, f32) = (240.0, -350.0);
const FACE_CENTRE: (f32, f32) = (-8.0, -680.0);

/// Outline width in canonical units
const OUTLINE_WIDTH: f32 = 18.0;

/// The dancing figure: torso, legs, arms, trident and a glow on the face.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silhouette;

impl Silhouette {
    /// Every closed outline of the figure, in canonical units, in paint order
    pub fn outlines() -> [&'static [Seg]; 6] {
        [TORSO, RIGHT_LEG, LEFT_LEG, RIGHT_ARM, LEFT_ARM, TRIDENT]
    }

    fn limb(ctx: &mut Canvas<'_>, outline: &[Seg], fill: &Style, edge: &Style) {
        if let Some(shape) = path::build(outline) {
            ctx.fill_path(&shape, fill);
            ctx.stroke_path(&shape, edge, OUTLINE_WIDTH);
        }
    }
}

impl PaintStage for Silhouette {
    fn name(&self) -> &'static str {
        "silhouette"
    }

    fn paint(&self, ctx: &mut Canvas<'_>, width: f32, height: f32, _rng: &mut dyn RngCore) {
        let scale = canonical_scale(width);
        ctx.save();
        ctx.translate(width / 2.0, height * 0.6);
        ctx.scale(scale, scale);
        ctx.set_line_join(LineJoin::Round);
        ctx.set_line_cap(LineCap::Round);

        let edge = Style::Solid(rgba(118, 176, 255, 0.55));

        ctx.set_shadow(rgba(30, 80, 200, 0.4), 60.0);
        Self::limb(ctx, TORSO, &Style::Solid(rgba(9, 16, 36, 0.94)), &edge);
        ctx.clear_shadow();

        let limb_fill = Style::Solid(rgba(12, 20, 40, 0.92));
        for outline in [RIGHT_LEG, LEFT_LEG, RIGHT_ARM, LEFT_ARM] {
            Self::limb(ctx, outline, &limb_fill, &edge);
        }

        ctx.save();
        ctx.translate(TRIDENT_GRIP.0, TRIDENT_GRIP.1);
        Self::limb(ctx, TRIDENT, &Style::Solid(rgba(25, 60, 120, 0.9)), &edge);
        ctx.restore();

        ctx.save();
        ctx.translate(FACE_CENTRE.0, FACE_CENTRE.1);
        let face_glow = Style::radial(
            (0.0, 0.0),
            4.0,
            120.0,
            &[
                (0.0, rgba(147, 200, 255, 0.8)),
                (1.0, rgba(30, 70, 140, 0.0)),
            ],
        );
        ctx.fill_ellipse(0.0, 0.0, 120.0, 140.0, PI / 12.0, &face_glow);
        ctx.restore();

        ctx.restore();
    }
}
