//! The eight paint stages of the wallpaper, back to front.
//!
//! Each stage draws one visual layer and shares nothing with the others
//! except the surface it paints on. Randomness comes in through the `rng`
//! argument so a seeded generator reproduces a frame exactly.

use rand::{Rng, RngCore};

use super::canvas::Canvas;

mod background;
mod dust;
mod embers;
mod halo;
mod lightning;
mod mist;
mod serpent;
mod silhouette;

pub use background::Background;
pub use dust::DustVortices;
pub use embers::GroundEmbers;
pub use halo::EnergyHalo;
pub use lightning::Lightning;
pub use mist::ForegroundMist;
pub use serpent::{Eye, Serpent, SERPENT_EYES};
pub use silhouette::Silhouette;

/// One ordered drawing routine contributing a layer to the scene.
pub trait PaintStage: Send + Sync {
    /// Stable identifier, used for logging and stage replacement
    fn name(&self) -> &'static str;

    /// Draw into `ctx` using logical coordinates `0..width` × `0..height`.
    fn paint(&self, ctx: &mut Canvas<'_>, width: f32, height: f32, rng: &mut dyn RngCore);
}

/// Uniform draw in `[0, 1)`
pub(crate) fn unit(rng: &mut dyn RngCore) -> f32 {
    rng.random::<f32>()
}

/// Scale from the canonical authoring frame to a frame `width` wide
pub(crate) fn canonical_scale(width: f32) -> f32 {
    width / crate::BASE_WIDTH as f32
}
