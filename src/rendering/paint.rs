/// Fill and stroke styles used by the paint stages

use tiny_skia::{
    Color, GradientStop, LinearGradient, Point, RadialGradient, Shader, SpreadMode, Transform,
};

/// A colour stop: offset in `[0, 1]` and colour
pub type Stop = (f32, Color);

/// What a shape is filled or stroked with.
///
/// Gradient coordinates live in the user space of the draw call, so they
/// follow the canvas transform like a canvas gradient does.
#[derive(Debug, Clone, PartialEq)]
pub enum Style {
    Solid(Color),
    Linear {
        start: Point,
        end: Point,
        stops: Vec<Stop>,
    },
    /// Concentric radial gradient; everything inside `inner_radius` takes the
    /// first stop colour.
    Radial {
        center: Point,
        inner_radius: f32,
        radius: f32,
        stops: Vec<Stop>,
    },
}

impl Style {
    pub fn linear(start: (f32, f32), end: (f32, f32), stops: &[Stop]) -> Self {
        Style::Linear {
            start: Point::from_xy(start.0, start.1),
            end: Point::from_xy(end.0, end.1),
            stops: stops.to_vec(),
        }
    }

    pub fn radial(center: (f32, f32), inner_radius: f32, radius: f32, stops: &[Stop]) -> Self {
        Style::Radial {
            center: Point::from_xy(center.0, center.1),
            inner_radius,
            radius,
            stops: stops.to_vec(),
        }
    }

    /// Build a shader with `opacity` (the canvas global alpha) folded into
    /// every colour. Returns `None` for degenerate gradients.
    pub fn shader(&self, opacity: f32) -> Option<Shader<'static>> {
        match self {
            Style::Solid(color) => Some(Shader::SolidColor(with_opacity(*color, opacity))),
            Style::Linear { start, end, stops } => LinearGradient::new(
                *start,
                *end,
                gradient_stops(stops, 0.0, opacity),
                SpreadMode::Pad,
                Transform::identity(),
            ),
            Style::Radial {
                center,
                inner_radius,
                radius,
                stops,
            } => {
                if !(*radius > 0.0) {
                    return None;
                }
                let inner = (inner_radius / radius).clamp(0.0, 1.0);
                RadialGradient::new(
                    *center,
                    *center,
                    *radius,
                    gradient_stops(stops, inner, opacity),
                    SpreadMode::Pad,
                    Transform::identity(),
                )
            }
        }
    }
}

// Offsets are squeezed into [inner, 1] so a gradient that starts at an inner
// radius can be drawn with a plain centre-out radial shader.
fn gradient_stops(stops: &[Stop], inner: f32, opacity: f32) -> Vec<GradientStop> {
    stops
        .iter()
        .map(|(offset, color)| {
            let offset = inner + offset.clamp(0.0, 1.0) * (1.0 - inner);
            GradientStop::new(offset, with_opacity(*color, opacity))
        })
        .collect()
}

pub fn with_opacity(mut color: Color, opacity: f32) -> Color {
    color.set_alpha((color.alpha() * opacity).clamp(0.0, 1.0));
    color
}

/// Colour from 8-bit channels and a `[0, 1]` alpha
pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Color {
    Color::from_rgba(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        a.clamp(0.0, 1.0),
    )
    .unwrap_or(Color::TRANSPARENT)
}

/// Opaque colour from a `0xRRGGBB` literal
pub fn hex(rgb: u32) -> Color {
    rgba((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 1.0)
}

/// Colour from hue in degrees, saturation and lightness in percent
pub fn hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Color {
    let h = hue.rem_euclid(360.0) / 60.0;
    let s = (saturation / 100.0).clamp(0.0, 1.0);
    let l = (lightness / 100.0).clamp(0.0, 1.0);

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = l - chroma / 2.0;

    Color::from_rgba(
        (r + m).clamp(0.0, 1.0),
        (g + m).clamp(0.0, 1.0),
        (b + m).clamp(0.0, 1.0),
        alpha.clamp(0.0, 1.0),
    )
    .unwrap_or(Color::TRANSPARENT)
}
