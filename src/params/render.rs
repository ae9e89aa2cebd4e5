//! Rendering and timing configuration.

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Initial window width (logical pixels)
    pub window_width: u32,

    /// Initial window height (logical pixels)
    pub window_height: u32,

    /// Tick-rate cap (frames per second); the display refresh rate
    /// still bounds the effective rate from below
    pub fps_cap: u32,

    /// Upper bound on the device pixel ratio, to bound backing-buffer
    /// memory on very dense displays
    pub max_pixel_ratio: f64,

    /// Background clear color (linear RGBA)
    pub clear_color: [f64; 4],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            fps_cap: 60,
            max_pixel_ratio: 1.5,
            clear_color: [0.02, 0.02, 0.04, 1.0], // near-black night blue
        }
    }
}

/// Cosmetic amplitude-jitter configuration
///
/// A sub-pixel random term (< 0.005 px) is added to the amplitude each
/// column so back-to-back frames never repeat bit-exactly. Purely
/// cosmetic, so it can be disabled or seeded for reproducible output.
#[derive(Debug, Clone)]
pub struct JitterConfig {
    /// Whether the jitter term is applied at all
    pub enabled: bool,

    /// Fixed seed; None reseeds from entropy on every run
    pub seed: Option<u64>,
}

impl Default for JitterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_defaults() {
        let c = RenderConfig::default();
        assert_eq!(c.fps_cap, 60);
        assert_eq!(c.max_pixel_ratio, 1.5);
    }
}
