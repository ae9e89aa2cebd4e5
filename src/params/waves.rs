//! Wave appearance and motion parameters.

/// RGBA color with 0-255 channels and 0-1 alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,

    /// Opacity (0 = transparent, 1 = opaque)
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Channels as linear-ish 0-1 floats with an explicit alpha override
    pub fn to_array_with_alpha(self, alpha: f32) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            alpha.clamp(0.0, 1.0),
        ]
    }
}

/// Tunable wave parameters, live-edited by the control panel
#[derive(Debug, Clone)]
pub struct WaveParams {
    /// Stroke color of every wave line (alpha channel is editable but
    /// the per-line stroke alpha is derived from noise, not from it)
    pub wave_color: Rgba,

    /// Glow color drawn beneath each stroke
    pub shadow_color: Rgba,

    /// Glow radius in logical pixels (0 disables the glow)
    pub shadow_blur: f32,

    /// Stroke width in logical pixels
    pub line_stroke: f32,

    /// Vertical scale applied to the noise value (logical pixels)
    pub amplitude: f32,

    /// Horizontal noise frequency (noise units per pixel column)
    pub variation: f32,

    /// Configured wave count; one extra boundary line is always drawn
    pub lines: i32,

    /// Phase spacing between consecutive lines (noise units)
    pub factor: f32,

    /// Phase advance per line per tick (noise units)
    pub speed: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            wave_color: Rgba::new(255, 255, 255, 0.7),
            shadow_color: Rgba::new(13, 14, 76, 0.5),
            shadow_blur: 50.0,
            line_stroke: 1.0,
            amplitude: 200.0,
            variation: 0.0004, // long, slow undulations at ~1k px wide
            lines: 9,
            factor: 0.08,
            speed: 0.003,
        }
    }
}

impl WaveParams {
    /// Copy with render-breaking values replaced by safe ones.
    ///
    /// The panel clamps edits to its declared ranges, but nothing stops
    /// other code from writing oddities; a frame must tolerate them
    /// without crashing. Non-finite scalars fall back to defaults and
    /// negative magnitudes are zeroed. Out-of-range finite values are
    /// left alone (they only clip visually).
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let keep = |v: f32, fallback: f32| if v.is_finite() { v } else { fallback };
        Self {
            wave_color: self.wave_color,
            shadow_color: self.shadow_color,
            shadow_blur: keep(self.shadow_blur, defaults.shadow_blur).max(0.0),
            line_stroke: keep(self.line_stroke, defaults.line_stroke).max(0.0),
            amplitude: keep(self.amplitude, defaults.amplitude),
            variation: keep(self.variation, defaults.variation),
            lines: self.lines,
            factor: keep(self.factor, defaults.factor),
            speed: keep(self.speed, defaults.speed),
        }
    }
}
