/// Display metrics read from the host (viewport width, device pixel ratio)

use crate::Viewport;

pub trait DisplayHost: Send + Sync {
    /// Current viewport; read at paint time, never written back
    fn viewport(&self) -> Viewport;
}

/// Host whose metrics are set explicitly, as from a CLI or a test
pub struct FixedDisplay {
    viewport: std::sync::Mutex<Viewport>,
}

impl FixedDisplay {
    pub fn new(viewport: Viewport) -> Self {
        FixedDisplay {
            viewport: std::sync::Mutex::new(viewport),
        }
    }

    /// Simulate the window changing size or moving to another screen
    pub fn set_viewport(&self, viewport: Viewport) {
        let mut g = self.viewport.lock().unwrap_or_else(|e| e.into_inner());
        *g = viewport;
    }
}

impl Default for FixedDisplay {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl DisplayHost for FixedDisplay {
    fn viewport(&self) -> Viewport {
        *self.viewport.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_display_can_be_updated() {
        let d = FixedDisplay::default();
        assert_eq!(d.viewport().width, 1280);
        d.set_viewport(Viewport {
            width: 360,
            height: 640,
            device_pixel_ratio: 3.0,
        });
        let v = d.viewport();
        assert_eq!(v.width, 360);
        assert_eq!(v.device_pixel_ratio, 3.0);
    }
}
