//! Line phase table and per-line wave sampling.

use glam::Vec2;

use crate::noise::NoiseField;
use crate::params::WaveParams;
use crate::viewport::Viewport;

/// Phase offsets for a line count: element i equals `i * factor`.
///
/// Pure and O(lines). A negative count is treated as zero lines.
pub fn line_offsets(lines: i32, factor: f64) -> Vec<f64> {
    let count = lines.max(0) as usize;
    (0..count).map(|i| i as f64 * factor).collect()
}

/// Per-line phase state sampled into wave polylines.
///
/// One stroke is drawn per phase. Since the renderer draws one extra
/// boundary line beyond the configured count, the table holds
/// `lines + 1` entries: the `line_offsets` progression plus its
/// continuation at index `lines`. Rebuilding fully replaces the table;
/// between rebuilds each entry grows by `speed` every tick. Phases
/// accumulate for the process lifetime, so the table is f64; an f32
/// step rounds away once the total grows large and the animation
/// freezes.
pub struct WaveField {
    phases: Vec<f64>,
}

impl WaveField {
    pub fn new(lines: i32, factor: f64) -> Self {
        let mut field = Self { phases: Vec::new() };
        field.rebuild(lines, factor);
        field
    }

    /// Replace the phase table from the current count and spacing.
    /// Stale entries never survive: shrinking truncates, growing
    /// continues the arithmetic progression.
    pub fn rebuild(&mut self, lines: i32, factor: f64) {
        let count = lines.max(0);
        self.phases = line_offsets(count, factor);
        // boundary line, one step past the configured count
        self.phases.push(count as f64 * factor);
    }

    pub fn phases(&self) -> &[f64] {
        &self.phases
    }

    /// Number of strokes one frame draws (`lines + 1`)
    pub fn line_count(&self) -> usize {
        self.phases.len()
    }

    /// Advance one line's phase after it has been stroked
    pub fn advance(&mut self, index: usize, speed: f64) {
        if let Some(phase) = self.phases.get_mut(index) {
            *phase += speed;
        }
    }

    /// Sample the polyline for line `index` into `out`.
    ///
    /// The polyline starts at the vertical center of the left edge,
    /// then carries one point per integer pixel column. `jitter`
    /// supplies the cosmetic amplitude wobble per column (a closure so
    /// tests can pin it to zero). Returns the final noise value, which
    /// drives the line's stroke opacity.
    pub fn sample_line<F>(
        &self,
        index: usize,
        params: &WaveParams,
        viewport: &Viewport,
        noise: &NoiseField,
        mut jitter: F,
        out: &mut Vec<Vec2>,
    ) -> f32
    where
        F: FnMut() -> f32,
    {
        out.clear();
        let phase = self.phases.get(index).copied().unwrap_or(0.0);
        let variation = params.variation as f64;
        let center_y = viewport.height * 0.5;

        out.push(Vec2::new(0.0, center_y));

        let mut noise_value = 0.0f32;
        for x in 0..=viewport.columns() {
            let fx = x as f64 * variation;
            noise_value = noise.sample_3d(fx + phase, fx, 1.0);
            let offset = (params.amplitude + jitter()) * noise_value;
            out.push(Vec2::new(x as f32, center_y + offset));
        }
        noise_value
    }
}
