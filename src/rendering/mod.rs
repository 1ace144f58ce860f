//! Scene rendering: surface, drawing context, styles and the paint pipeline

pub mod canvas;
pub mod paint;
pub mod path;
pub mod raster;
pub mod stages;
pub mod surface;

use log::{debug, trace};
use rand::RngCore;

use crate::Resolution;
use stages::{
    Background, DustVortices, EnergyHalo, ForegroundMist, GroundEmbers, Lightning, PaintStage,
    Serpent, Silhouette,
};
pub use surface::Surface;

/// An encoded frame
#[derive(Debug, Clone)]
pub struct Screenshot {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl Screenshot {
    pub fn empty(width: u32, height: u32) -> Self {
        Self { width, height, png_data: Vec::new() }
    }
}

/// Ordered list of paint stages; later stages draw over earlier ones.
pub struct Scene {
    stages: Vec<Box<dyn PaintStage>>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(vec![
            Box::new(Background),
            Box::new(EnergyHalo),
            Box::new(DustVortices),
            Box::new(Lightning),
            Box::new(GroundEmbers),
            Box::new(Silhouette),
            Box::new(Serpent),
            Box::new(ForegroundMist::default()),
        ])
    }
}

impl Scene {
    pub fn new(stages: Vec<Box<dyn PaintStage>>) -> Self {
        Self { stages }
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Swap the stage called `name` for `stage`, keeping its position.
    pub fn with_stage_replaced(mut self, name: &str, stage: impl PaintStage + 'static) -> Self {
        if let Some(slot) = self.stages.iter_mut().find(|s| s.name() == name) {
            *slot = Box::new(stage);
        }
        self
    }

    /// Paint the whole scene onto `surface` at `resolution` logical pixels.
    ///
    /// The backing store becomes `floor(resolution * pixel_density)` device
    /// pixels and every earlier pixel and drawing state is discarded first, so
    /// repeated renders on one surface never accumulate. If no drawing context
    /// can be acquired (zero-area target) nothing happens.
    pub fn render(
        &self,
        surface: &mut Surface,
        resolution: Resolution,
        pixel_density: f32,
        rng: &mut dyn RngCore,
    ) {
        let density = pixel_density as f64;
        let backing_w = (resolution.width as f64 * density).floor() as u32;
        let backing_h = (resolution.height as f64 * density).floor() as u32;
        surface.resize_backing(backing_w, backing_h);
        surface.set_logical_size(resolution);

        let Some(mut ctx) = surface.context() else {
            debug!(
                "No drawing context for {} @{}x; skipping render",
                resolution, pixel_density
            );
            return;
        };

        ctx.reset();
        ctx.scale(pixel_density, pixel_density);

        let (width, height) = (resolution.width as f32, resolution.height as f32);
        ctx.save();
        for stage in &self.stages {
            trace!("painting {}", stage.name());
            stage.paint(&mut ctx, width, height, rng);
        }
        ctx.restore();

        debug!(
            "Rendered {} stages at {} ({}x{} px)",
            self.stages.len(),
            resolution,
            backing_w,
            backing_h
        );
    }
}

/// Render the default scene. See [`Scene::render`].
pub fn render_scene(
    surface: &mut Surface,
    resolution: Resolution,
    pixel_density: f32,
    rng: &mut dyn RngCore,
) {
    Scene::default().render(surface, resolution, pixel_density, rng);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_runs_stages_in_paint_order() {
        assert_eq!(
            Scene::default().stage_names(),
            vec![
                "background",
                "energy-halo",
                "dust-vortices",
                "lightning",
                "ground-embers",
                "silhouette",
                "serpent",
                "foreground-mist",
            ]
        );
    }

    #[test]
    fn replacing_a_stage_keeps_its_slot() {
        let scene = Scene::default()
            .with_stage_replaced("foreground-mist", ForegroundMist::without_vignette())
            .with_stage_replaced("no-such-stage", Background);
        let names = scene.stage_names();
        assert_eq!(names.len(), 8);
        assert_eq!(names[7], "foreground-mist");
    }

    #[test]
    fn screenshot_empty() {
        let s = Screenshot::empty(128, 64);
        assert_eq!(s.width, 128);
        assert!(s.png_data.is_empty());
    }
}
