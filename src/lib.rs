//! Tandav Wallpaper Renderer
//!
//! Renders the Shiva Tandav wallpaper (a deity silhouette with lightning,
//! dust, embers and a serpent) into a software raster, drives a scaled
//! preview, and exports a high-resolution PNG.
//!
//! # Features
//!
//! - **Fixed paint pipeline**: eight ordered stages composited back to front
//! - **Resolution independent**: figure geometry is authored in a canonical
//!   1536×3328 frame and scaled to any output width
//! - **Reproducible**: every random draw goes through an injectable RNG
//!
//! # Example
//!
//! ```no_run
//! use tandav::platform::DirectorySink;
//! use tandav::{Exporter, WallpaperConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = WallpaperConfig {
//!     seed: Some(7),
//!     ..Default::default()
//! };
//!
//! let mut rng = config.rng();
//! let exporter = Exporter::new(config)?;
//! let mut sink = DirectorySink::new(".");
//! let outcome = exporter.export(&mut sink, &mut rng)?;
//! println!("{:?}", outcome);
//! # Ok(())
//! # }
//! ```

use rand::SeedableRng;
use rand_pcg::Pcg64;

pub mod error;
pub use error::{Error, Result};

pub mod resolution;
pub use resolution::{clamp_resolution, export_resolution};

pub mod rendering;
pub use rendering::{render_scene, Scene, Screenshot};

// Host environment surfaces (display metrics, file downloads)
pub mod platform;

pub mod preview;
pub use preview::{PreviewController, StatusLine};

pub mod export;
pub use export::{ExportOutcome, ExportReport, Exporter, SkipReason};

// Worker-thread backed export handle for async callers
#[cfg(feature = "async")]
pub mod async_api;

#[cfg(feature = "async")]
pub use async_api::WallpaperWorker;

/// Width of the canonical authoring frame
pub const BASE_WIDTH: u32 = 1536;

/// Height of the canonical authoring frame
pub const BASE_HEIGHT: u32 = 3328;

/// Maximum preview width in logical pixels
pub const PREVIEW_CAP: u32 = 420;

/// Multiplier applied to the canonical frame for export (1536 * 5 = 7680px wide)
pub const EXPORT_SCALE: f32 = 5.0;

/// File name of the exported wallpaper
pub const EXPORT_FILE_NAME: &str = "shiva-tandav-8k-wallpaper.png";

/// Logical (CSS pixel) size of a render target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Height over width of the canonical frame
    pub fn aspect() -> f64 {
        BASE_HEIGHT as f64 / BASE_WIDTH as f64
    }

    /// Build a resolution whose height follows the canonical aspect ratio
    pub fn from_width(width: u32) -> Self {
        Self {
            width,
            height: (width as f64 * Self::aspect()).round() as u32,
        }
    }

    /// True when either dimension is zero; painting such a target is a no-op
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} × {}", self.width, self.height)
    }
}

/// Viewport dimensions and density as reported by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub device_pixel_ratio: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            device_pixel_ratio: 1.0,
        }
    }
}

impl Viewport {
    /// Device pixel ratio, falling back to 1 for unusable values
    pub fn pixel_density(&self) -> f32 {
        if self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio
        } else {
            1.0
        }
    }
}

/// Configuration for preview and export
///
/// The defaults reproduce the shipped wallpaper: a preview capped at 420
/// logical pixels and a 5× export (7680×16640) named
/// `shiva-tandav-8k-wallpaper.png`.
///
/// # Examples
///
/// ```
/// let cfg = tandav::WallpaperConfig::default();
/// assert_eq!(cfg.preview_cap, 420);
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct WallpaperConfig {
    /// Largest preview width in logical pixels
    pub preview_cap: u32,
    /// Multiplier applied to the canonical frame on export
    pub export_scale: f32,
    /// Name given to the exported file
    pub file_name: String,
    /// Fixed seed for particle scatter; `None` draws a fresh seed
    pub seed: Option<u64>,
}

impl Default for WallpaperConfig {
    fn default() -> Self {
        Self {
            preview_cap: PREVIEW_CAP,
            export_scale: EXPORT_SCALE,
            file_name: EXPORT_FILE_NAME.to_string(),
            seed: None,
        }
    }
}

impl WallpaperConfig {
    /// Check that the configuration can produce an image
    pub fn validate(&self) -> Result<()> {
        if self.preview_cap == 0 {
            return Err(Error::ConfigError("preview_cap must be positive".into()));
        }
        if !self.export_scale.is_finite() || self.export_scale <= 0.0 {
            return Err(Error::ConfigError(format!(
                "export_scale must be a positive number, got {}",
                self.export_scale
            )));
        }
        if self.file_name.trim().is_empty() {
            return Err(Error::ConfigError("file_name must not be empty".into()));
        }
        Ok(())
    }

    /// Random source for particle scatter and bolt jitter
    pub fn rng(&self) -> Pcg64 {
        match self.seed {
            Some(seed) => Pcg64::seed_from_u64(seed),
            None => Pcg64::from_rng(&mut rand::rng()),
        }
    }
}
