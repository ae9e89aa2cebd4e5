//! Window viewport state: logical size, pixel-ratio cap, backing size.
//!
//! Wave geometry is computed in logical pixels; the surface backing
//! buffer is logical size times the capped pixel ratio. Capping the
//! ratio bounds backing memory on dense displays; the compositor
//! upscales the difference.

/// Viewport snapshot, rebuilt on every resize or scale change
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Logical width (pixels)
    pub width: f32,

    /// Logical height (pixels)
    pub height: f32,

    /// Effective pixel ratio after capping
    pub scale: f64,

    /// Backing buffer width (physical pixels)
    pub backing_width: u32,

    /// Backing buffer height (physical pixels)
    pub backing_height: u32,
}

impl Viewport {
    /// Build from the window's physical inner size and scale factor.
    ///
    /// `max_ratio` caps the device pixel ratio used for the backing
    /// buffer (the window itself keeps its native scale).
    pub fn from_physical(physical: (u32, u32), scale_factor: f64, max_ratio: f64) -> Self {
        let scale_factor = if scale_factor.is_finite() && scale_factor > 0.0 {
            scale_factor
        } else {
            1.0
        };
        let width = (physical.0 as f64 / scale_factor) as f32;
        let height = (physical.1 as f64 / scale_factor) as f32;
        let scale = scale_factor.min(max_ratio);
        Self {
            width,
            height,
            scale,
            backing_width: (width as f64 * scale).round() as u32,
            backing_height: (height as f64 * scale).round() as u32,
        }
    }

    /// Integer pixel columns spanned by one wave line
    pub fn columns(&self) -> u32 {
        self.width.max(0.0) as u32
    }

    /// Physical dimensions the surface swapchain is configured at
    pub fn backing_size(&self) -> (u32, u32) {
        (self.backing_width, self.backing_height)
    }

    /// True when either backing dimension collapsed to zero
    /// (minimized window); rendering skips such frames
    pub fn is_empty(&self) -> bool {
        self.backing_width == 0 || self.backing_height == 0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_physical((1280, 720), 1.0, 1.5)
    }
}
