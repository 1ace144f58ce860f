//! Display and export sizing

use crate::{Resolution, BASE_HEIGHT, BASE_WIDTH};

/// Share of the viewport width the preview may occupy
const VIEWPORT_FILL: f64 = 0.9;

/// Preview size for a viewport: 90% of its width, capped at `cap`, with the
/// height following the canonical aspect ratio.
///
/// A zero-width viewport yields a zero-area resolution; rendering it is a
/// silent no-op.
pub fn clamp_resolution(viewport_width: u32, cap: u32) -> Resolution {
    let fitted = (viewport_width as f64 * VIEWPORT_FILL).floor() as u32;
    Resolution::from_width(cap.min(fitted))
}

/// Absolute pixel size of the exported raster for a given scale.
pub fn export_resolution(scale: f32) -> Resolution {
    let scale = scale as f64;
    Resolution {
        width: (BASE_WIDTH as f64 * scale).round() as u32,
        height: (BASE_HEIGHT as f64 * scale).round() as u32,
    }
}
