//! Preview display glue: sizing, frame scheduling and status text.
//!
//! The controller follows the host's frame loop. Mounting and every resize
//! only *request* a frame; the render itself happens in
//! [`PreviewController::on_animation_frame`], and any number of requests
//! between two frames collapse into a single render at the latest viewport.

use std::fmt;
use std::sync::Arc;

use log::{debug, trace};
use rand::RngCore;

use crate::platform::DisplayHost;
use crate::rendering::{Scene, Surface};
use crate::{clamp_resolution, Resolution, Viewport, WallpaperConfig};

/// Label shown on the download control while idle
pub const DOWNLOAD_LABEL: &str = "Download 8K";

/// Label shown on the download control while a render is in progress
pub const BUSY_LABEL: &str = "Rendering…";

/// Text shown next to the preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    /// Either [`DOWNLOAD_LABEL`] or [`BUSY_LABEL`]
    pub download: &'static str,
    /// `Preview W × H` once a frame has been drawn
    pub preview: Option<String>,
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.preview {
            Some(preview) => write!(f, "{} | {}", self.download, preview),
            None => f.write_str(self.download),
        }
    }
}

pub struct PreviewController {
    config: WallpaperConfig,
    scene: Scene,
    host: Arc<dyn DisplayHost>,
    surface: Surface,
    mounted: bool,
    frame_pending: bool,
    resized_to: Option<Viewport>,
    rendering: bool,
    exporting: bool,
    last_render: Option<Resolution>,
    render_count: u64,
}

impl PreviewController {
    pub fn new(config: WallpaperConfig, host: Arc<dyn DisplayHost>) -> Self {
        Self {
            config,
            scene: Scene::default(),
            host,
            surface: Surface::new(),
            mounted: false,
            frame_pending: false,
            resized_to: None,
            // Busy until the first frame lands
            rendering: true,
            exporting: false,
            last_render: None,
            render_count: 0,
        }
    }

    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.scene = scene;
        self
    }

    /// Attach to the display and schedule the first frame
    pub fn mount(&mut self) {
        self.mounted = true;
        self.request_frame();
    }

    /// Detach; a frame scheduled but not yet run is cancelled
    pub fn unmount(&mut self) {
        if self.frame_pending {
            debug!("Cancelling pending preview frame");
        }
        self.mounted = false;
        self.frame_pending = false;
        self.resized_to = None;
    }

    /// The viewport changed. The latest size wins if several arrive before
    /// the next frame.
    pub fn on_resize(&mut self, viewport: Viewport) {
        if self.mounted {
            self.resized_to = Some(viewport);
            self.request_frame();
        }
    }

    fn request_frame(&mut self) {
        if self.frame_pending {
            trace!("Preview frame already pending; coalescing");
        }
        self.frame_pending = true;
    }

    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Run the pending frame, if any. Returns whether a render happened.
    pub fn on_animation_frame(&mut self, rng: &mut dyn RngCore) -> bool {
        if !self.mounted || !self.frame_pending {
            return false;
        }
        self.frame_pending = false;
        self.rendering = true;

        let viewport = self
            .resized_to
            .take()
            .unwrap_or_else(|| self.host.viewport());
        let resolution = clamp_resolution(viewport.width, self.config.preview_cap);
        self.scene
            .render(&mut self.surface, resolution, viewport.pixel_density(), rng);

        self.last_render = Some(resolution);
        self.render_count += 1;
        self.rendering = false;
        debug!(
            "Preview frame {} at {} @{}x",
            self.render_count,
            resolution,
            viewport.pixel_density()
        );
        true
    }

    /// Mark a high-resolution export as started or finished
    pub fn set_exporting(&mut self, exporting: bool) {
        self.exporting = exporting;
    }

    /// True before the first frame, while a frame draws and while an
    /// export is marked in progress
    pub fn is_rendering(&self) -> bool {
        self.rendering || self.exporting
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn last_render(&self) -> Option<Resolution> {
        self.last_render
    }

    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    pub fn status_line(&self) -> StatusLine {
        StatusLine {
            download: if self.is_rendering() {
                BUSY_LABEL
            } else {
                DOWNLOAD_LABEL
            },
            preview: self.last_render.map(|r| format!("Preview {}", r)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::FixedDisplay;
    use crate::rendering::canvas::Canvas;
    use crate::rendering::stages::{Background, PaintStage};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn controller(width: u32) -> (PreviewController, Arc<FixedDisplay>) {
        let host = Arc::new(FixedDisplay::new(Viewport {
            width,
            height: 800,
            device_pixel_ratio: 1.0,
        }));
        let ctl = PreviewController::new(WallpaperConfig::default(), host.clone());
        (ctl, host)
    }

    #[test]
    fn nothing_renders_before_mount() {
        let (mut ctl, _) = controller(100);
        assert!(!ctl.on_animation_frame(&mut rand::rng()));
        ctl.on_resize(Viewport::default());
        assert!(!ctl.frame_pending());
    }

    #[test]
    fn mount_renders_once() {
        let (mut ctl, _) = controller(100);
        ctl.mount();
        assert!(ctl.on_animation_frame(&mut rand::rng()));
        assert!(!ctl.on_animation_frame(&mut rand::rng()));
        assert_eq!(ctl.render_count(), 1);
        assert_eq!(ctl.last_render(), Some(Resolution { width: 90, height: 195 }));
    }

    #[test]
    fn unmount_cancels_pending_frame() {
        let (mut ctl, _) = controller(100);
        ctl.mount();
        ctl.unmount();
        assert!(!ctl.on_animation_frame(&mut rand::rng()));
        assert_eq!(ctl.render_count(), 0);
    }

    #[test]
    fn busy_until_first_frame_and_while_exporting() {
        let (mut ctl, _) = controller(100);
        assert!(ctl.is_rendering());
        ctl.mount();
        assert!(ctl.is_rendering());
        ctl.on_animation_frame(&mut rand::rng());
        assert!(!ctl.is_rendering());

        ctl.set_exporting(true);
        assert!(ctl.is_rendering());
        ctl.set_exporting(false);
        assert!(!ctl.is_rendering());
    }

    #[test]
    fn status_line_follows_state() {
        let (mut ctl, _) = controller(100);
        let status = ctl.status_line();
        assert_eq!(status.download, BUSY_LABEL);
        assert_eq!(status.preview, None);
        assert_eq!(status.to_string(), "Rendering…");

        ctl.mount();
        ctl.on_animation_frame(&mut rand::rng());
        let status = ctl.status_line();
        assert_eq!(status.download, DOWNLOAD_LABEL);
        assert_eq!(status.preview.as_deref(), Some("Preview 90 × 195"));
        assert_eq!(status.to_string(), "Download 8K | Preview 90 × 195");

        ctl.set_exporting(true);
        assert_eq!(ctl.status_line().download, BUSY_LABEL);
    }

    struct Counting(Arc<AtomicUsize>);

    impl PaintStage for Counting {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn paint(
            &self,
            _ctx: &mut Canvas<'_>,
            _width: f32,
            _height: f32,
            _rng: &mut dyn RngCore,
        ) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn custom_scene_is_used_for_frames() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (ctl, _) = controller(100);
        let mut ctl = ctl.with_scene(Scene::new(vec![
            Box::new(Background),
            Box::new(Counting(calls.clone())),
        ]));
        ctl.mount();
        ctl.on_animation_frame(&mut rand::rng());
        ctl.on_resize(Viewport {
            width: 200,
            ..Viewport::default()
        });
        ctl.on_animation_frame(&mut rand::rng());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(ctl.last_render(), Some(Resolution { width: 180, height: 390 }));
    }
}
