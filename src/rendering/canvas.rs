//! Immediate-mode 2D drawing context over a [`Surface`](super::surface::Surface).
//!
//! The API mirrors the parts of a canvas 2D context the wallpaper needs:
//! a save/restore state stack, affine transforms, global alpha, blend mode,
//! shadows, and path fill/stroke with solid or gradient styles.

use log::trace;
use tiny_skia::{
    BlendMode, Color, FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, Rect, Stroke,
    Transform,
};

use super::paint::{with_opacity, Style};
use super::path;

/// Number of outline strokes used to approximate a blurred shadow
const SHADOW_STEPS: usize = 4;

/// A soft glow drawn beneath fills and strokes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: Color,
    /// Spread in user-space units
    pub blur: f32,
}

/// Drawing state saved and restored by `save`/`restore`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawState {
    pub transform: Transform,
    pub global_alpha: f32,
    pub blend_mode: BlendMode,
    pub shadow: Option<Shadow>,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: Transform::identity(),
            global_alpha: 1.0,
            blend_mode: BlendMode::SourceOver,
            shadow: None,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
        }
    }
}

/// Drawing context borrowed from a surface.
///
/// State changes write through to the surface, so a context acquired later
/// from the same surface sees whatever state the previous one left behind.
pub struct Canvas<'a> {
    pub(super) pixmap: &'a mut Pixmap,
    pub(super) state: &'a mut DrawState,
    pub(super) stack: &'a mut Vec<DrawState>,
}

impl<'a> Canvas<'a> {
    /// Clear every pixel and return all state to its defaults.
    pub fn reset(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
        *self.state = DrawState::default();
        self.stack.clear();
    }

    pub fn save(&mut self) {
        self.stack.push(*self.state);
    }

    /// Pop the last saved state. Unbalanced calls are ignored.
    pub fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            *self.state = state;
        }
    }

    pub fn translate(&mut self, tx: f32, ty: f32) {
        self.state.transform = self.state.transform.pre_translate(tx, ty);
    }

    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.state.transform = self.state.transform.pre_scale(sx, sy);
    }

    /// Rotate by `angle` radians
    pub fn rotate(&mut self, angle: f32) {
        self.state.transform = self.state.transform.pre_rotate(angle.to_degrees());
    }

    pub fn transform(&self) -> Transform {
        self.state.transform
    }

    pub fn set_global_alpha(&mut self, alpha: f32) {
        self.state.global_alpha = alpha.clamp(0.0, 1.0);
    }

    pub fn set_blend_mode(&mut self, mode: BlendMode) {
        self.state.blend_mode = mode;
    }

    pub fn set_shadow(&mut self, color: Color, blur: f32) {
        self.state.shadow = Some(Shadow { color, blur });
    }

    pub fn clear_shadow(&mut self) {
        self.state.shadow = None;
    }

    pub fn set_line_cap(&mut self, cap: LineCap) {
        self.state.line_cap = cap;
    }

    pub fn set_line_join(&mut self, join: LineJoin) {
        self.state.line_join = join;
    }

    /// Backing store size in device pixels
    pub fn size(&self) -> (u32, u32) {
        (self.pixmap.width(), self.pixmap.height())
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, style: &Style) {
        if let Some(rect) = Rect::from_xywh(x, y, width, height) {
            self.fill_path(&PathBuilder::from_rect(rect), style);
        }
    }

    pub fn fill_path(&mut self, path: &Path, style: &Style) {
        if let Some(shadow) = self.state.shadow {
            self.draw_shadow(path, 0.0, shadow);
        }
        if let Some(paint) = self.paint(style) {
            self.pixmap
                .fill_path(path, &paint, FillRule::Winding, self.state.transform, None);
        }
    }

    pub fn stroke_path(&mut self, path: &Path, style: &Style, width: f32) {
        if let Some(shadow) = self.state.shadow {
            self.draw_shadow(path, width, shadow);
        }
        if let Some(paint) = self.paint(style) {
            let stroke = self.stroke(width);
            self.pixmap
                .stroke_path(path, &paint, &stroke, self.state.transform, None);
        }
    }

    pub fn fill_ellipse(
        &mut self,
        cx: f32,
        cy: f32,
        rx: f32,
        ry: f32,
        rotation: f32,
        style: &Style,
    ) {
        match path::ellipse(cx, cy, rx, ry, rotation) {
            Some(oval) => self.fill_path(&oval, style),
            None => trace!("skipping degenerate ellipse {}x{}", rx, ry),
        }
    }

    fn paint(&self, style: &Style) -> Option<Paint<'static>> {
        let shader = style.shader(self.state.global_alpha)?;
        let mut paint = Paint::default();
        paint.shader = shader;
        paint.blend_mode = self.state.blend_mode;
        paint.anti_alias = true;
        Some(paint)
    }

    fn stroke(&self, width: f32) -> Stroke {
        Stroke {
            width,
            line_cap: self.state.line_cap,
            line_join: self.state.line_join,
            ..Stroke::default()
        }
    }

    // Widest ring first; each ring carries a share of the shadow alpha so the
    // overlap builds up towards the outline.
    fn draw_shadow(&mut self, path: &Path, base_width: f32, shadow: Shadow) {
        if !(shadow.blur > 0.0) || shadow.color.alpha() <= 0.0 {
            return;
        }
        let share = 1.0 / SHADOW_STEPS as f32;
        let color = with_opacity(shadow.color, share * self.state.global_alpha);
        let mut paint = Paint::default();
        paint.set_color(color);
        paint.blend_mode = self.state.blend_mode;
        paint.anti_alias = true;

        for step in (1..=SHADOW_STEPS).rev() {
            let spread = shadow.blur * step as f32 * share;
            let stroke = Stroke {
                width: base_width + spread * 2.0,
                line_cap: LineCap::Round,
                line_join: LineJoin::Round,
                ..Stroke::default()
            };
            self.pixmap
                .stroke_path(path, &paint, &stroke, self.state.transform, None);
        }
    }
}
