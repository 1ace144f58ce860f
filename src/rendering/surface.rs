//! Raster target with a backing store, a logical display size and persistent
//! drawing state.

use tiny_skia::{Pixmap, PremultipliedColorU8, Transform};

use super::canvas::{Canvas, DrawState};
use crate::{Error, Resolution, Result};

/// A drawable surface, owned by whoever displays or exports it.
///
/// The backing store is absent while either dimension is zero; no drawing
/// context can be acquired in that state.
#[derive(Default)]
pub struct Surface {
    pixmap: Option<Pixmap>,
    logical: Option<Resolution>,
    state: DrawState,
    stack: Vec<DrawState>,
}

impl Surface {
    /// An empty surface with no backing store
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_backing(width: u32, height: u32) -> Self {
        let mut surface = Self::new();
        surface.resize_backing(width, height);
        surface
    }

    /// Resize the backing store in device pixels. Pixels are kept when the size
    /// is unchanged; drawing state is never touched here.
    pub fn resize_backing(&mut self, width: u32, height: u32) {
        if self.backing_size() == (width, height) && self.pixmap.is_some() {
            return;
        }
        self.pixmap = Pixmap::new(width, height);
    }

    /// Size the surface is presented at, in logical pixels
    pub fn set_logical_size(&mut self, resolution: Resolution) {
        self.logical = Some(resolution);
    }

    pub fn logical_size(&self) -> Option<Resolution> {
        self.logical
    }

    /// Backing store size in device pixels, `(0, 0)` when unallocated
    pub fn backing_size(&self) -> (u32, u32) {
        self.pixmap
            .as_ref()
            .map(|p| (p.width(), p.height()))
            .unwrap_or((0, 0))
    }

    /// Current transform of the drawing state
    pub fn transform(&self) -> Transform {
        self.state.transform
    }

    /// Number of states currently saved on the stack
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    pub fn pixmap(&self) -> Option<&Pixmap> {
        self.pixmap.as_ref()
    }

    /// Premultiplied pixel at device coordinates
    pub fn pixel(&self, x: u32, y: u32) -> Option<PremultipliedColorU8> {
        self.pixmap.as_ref()?.pixel(x, y)
    }

    /// Acquire the drawing context. `None` when there is nothing to draw into.
    pub fn context(&mut self) -> Option<Canvas<'_>> {
        let pixmap = self.pixmap.as_mut()?;
        Some(Canvas {
            pixmap,
            state: &mut self.state,
            stack: &mut self.stack,
        })
    }

    /// Serialize the backing store as a PNG (lossless RGBA).
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let pixmap = self.pixmap.as_ref().ok_or(Error::SurfaceUnavailable)?;
        pixmap
            .encode_png()
            .map_err(|e| Error::EncodeError(e.to_string()))
    }
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("backing", &self.backing_size())
            .field("logical", &self.logical)
            .field("save_depth", &self.stack.len())
            .finish()
    }
}
