//! High-resolution export: render into a detached surface, encode, deliver.

use std::path::PathBuf;

use log::{info, warn};
use rand::RngCore;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::platform::DownloadSink;
use crate::rendering::{Scene, Surface};
use crate::{export_resolution, Error, Resolution, Result, WallpaperConfig};

/// What was delivered to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    pub file_name: String,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub byte_len: usize,
    /// Hex SHA-256 of the delivered PNG
    pub sha256: String,
}

/// Why an export finished without producing a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    SurfaceUnavailable,
    EncodeFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Delivered(ExportReport),
    /// Completed silently without a file
    Skipped(SkipReason),
}

impl ExportOutcome {
    pub fn report(&self) -> Option<&ExportReport> {
        match self {
            ExportOutcome::Delivered(report) => Some(report),
            ExportOutcome::Skipped(_) => None,
        }
    }
}

/// Renders the wallpaper at export size and hands the PNG to a sink.
pub struct Exporter {
    config: WallpaperConfig,
    scene: Scene,
}

impl Exporter {
    pub fn new(config: WallpaperConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            scene: Scene::default(),
        })
    }

    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.scene = scene;
        self
    }

    /// Absolute pixel size of the export; independent of any preview
    pub fn resolution(&self) -> Resolution {
        export_resolution(self.config.export_scale)
    }

    pub fn file_name(&self) -> &str {
        &self.config.file_name
    }

    /// Render, encode and deliver one export.
    ///
    /// A surface that cannot be drawn or encoded ends the export quietly with
    /// [`ExportOutcome::Skipped`]; only a failing sink is an error.
    pub fn export(
        &self,
        sink: &mut dyn DownloadSink,
        rng: &mut dyn RngCore,
    ) -> Result<ExportOutcome> {
        let target = self.resolution();
        info!("Rendering {} export at {}", self.config.file_name, target);

        // Export size is already absolute, so density stays at 1
        let mut surface = Surface::new();
        self.scene.render(&mut surface, target, 1.0, rng);

        let encoded = surface.encode_png();
        drop(surface);
        let bytes = match encoded {
            Ok(bytes) if !bytes.is_empty() => bytes,
            Ok(_) => {
                warn!("Export encoded to zero bytes; nothing to save");
                return Ok(ExportOutcome::Skipped(SkipReason::EncodeFailed));
            }
            Err(Error::SurfaceUnavailable) => {
                warn!("Export surface unavailable at {}; nothing to save", target);
                return Ok(ExportOutcome::Skipped(SkipReason::SurfaceUnavailable));
            }
            Err(e) => {
                warn!("Export produced no image data: {}", e);
                return Ok(ExportOutcome::Skipped(SkipReason::EncodeFailed));
            }
        };

        let sha256 = hex::encode(Sha256::digest(&bytes));
        let path = sink.deliver(&self.config.file_name, &bytes)?;

        Ok(ExportOutcome::Delivered(ExportReport {
            file_name: self.config.file_name.clone(),
            path,
            width: target.width,
            height: target.height,
            byte_len: bytes.len(),
            sha256,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::canvas::Canvas;
    use crate::rendering::paint::{hex, Style};
    use crate::rendering::stages::PaintStage;
    use crate::EXPORT_FILE_NAME;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[derive(Default)]
    struct Capture {
        files: Vec<(String, Vec<u8>)>,
    }

    impl DownloadSink for Capture {
        fn deliver(&mut self, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
            self.files.push((file_name.to_string(), bytes.to_vec()));
            Ok(PathBuf::from(file_name))
        }
    }

    struct Refuse;

    impl DownloadSink for Refuse {
        fn deliver(&mut self, _file_name: &str, _bytes: &[u8]) -> Result<PathBuf> {
            Err(Error::DeliveryError("disk full".into()))
        }
    }

    fn small(scale: f32) -> Exporter {
        Exporter::new(WallpaperConfig {
            export_scale: scale,
            ..Default::default()
        })
        .expect("exporter")
    }

    #[test]
    fn default_export_is_7680_by_16640() {
        let exporter = Exporter::new(WallpaperConfig::default()).expect("exporter");
        assert_eq!(exporter.resolution(), Resolution { width: 7680, height: 16640 });
        assert_eq!(exporter.file_name(), EXPORT_FILE_NAME);
    }

    #[test]
    fn delivers_png_under_fixed_name() {
        let mut sink = Capture::default();
        let outcome = small(0.0625)
            .export(&mut sink, &mut Pcg64::seed_from_u64(1))
            .expect("export");

        let report = outcome.report().expect("delivered");
        assert_eq!((report.width, report.height), (96, 208));
        assert_eq!(sink.files.len(), 1);
        assert_eq!(sink.files[0].0, EXPORT_FILE_NAME);
        assert_eq!(report.byte_len, sink.files[0].1.len());
        assert_eq!(&sink.files[0].1[0..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn vanishing_scale_is_skipped_quietly() {
        let mut sink = Capture::default();
        let outcome = small(0.0001)
            .export(&mut sink, &mut Pcg64::seed_from_u64(1))
            .expect("export");
        assert_eq!(outcome, ExportOutcome::Skipped(SkipReason::SurfaceUnavailable));
        assert!(sink.files.is_empty());
    }

    #[test]
    fn sink_failure_is_reported() {
        let err = small(0.0625)
            .export(&mut Refuse, &mut Pcg64::seed_from_u64(1))
            .unwrap_err();
        assert!(matches!(err, Error::DeliveryError(_)));
    }

    #[test]
    fn invalid_config_is_rejected() {
        assert!(Exporter::new(WallpaperConfig {
            export_scale: -1.0,
            ..Default::default()
        })
        .is_err());
    }

    #[test]
    fn custom_scene_renders_at_export_size() {
        let exporter = small(0.0625).with_scene(Scene::new(vec![Box::new(Solid)]));
        let mut sink = Capture::default();
        let outcome = exporter
            .export(&mut sink, &mut Pcg64::seed_from_u64(1))
            .expect("export");
        assert_eq!(outcome.report().map(|r| (r.width, r.height)), Some((96, 208)));

        // A flat frame compresses far smaller than the full scene
        let full = small(0.0625)
            .export(&mut Capture::default(), &mut Pcg64::seed_from_u64(1))
            .expect("export");
        let full_len = full.report().expect("delivered").byte_len;
        assert!(sink.files[0].1.len() < full_len);
    }

    struct Solid;

    impl PaintStage for Solid {
        fn name(&self) -> &'static str {
            "solid"
        }

        fn paint(
            &self,
            ctx: &mut Canvas<'_>,
            width: f32,
            height: f32,
            _rng: &mut dyn RngCore,
        ) {
            ctx.fill_rect(0.0, 0.0, width, height, &Style::Solid(hex(0x0b0614)));
        }
    }
}
