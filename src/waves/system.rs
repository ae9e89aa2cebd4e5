//! Frame assembly: phases + noise in, stroke geometry out.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::noise::NoiseField;
use crate::params::{JitterConfig, WaveParams};
use crate::stroke::FrameGeometry;
use crate::viewport::Viewport;
use crate::waves::field::WaveField;

/// Peak per-column amplitude wobble, in logical pixels
const JITTER_SCALE: f32 = 0.005;

/// Floor added to the noise magnitude so a line never fully vanishes
const OPACITY_FLOOR: f32 = 0.001;

/// Upper bound on per-line opacity
const OPACITY_CEIL: f32 = 0.3;

/// Per-line opacity from the line's final noise sample
pub fn line_opacity(last_noise: f32) -> f32 {
    (last_noise.abs() + OPACITY_FLOOR).min(OPACITY_CEIL)
}

/// Stroke alpha: doubled opacity, clamped to valid range
pub fn stroke_alpha(opacity: f32) -> f32 {
    (opacity * 2.0).clamp(0.0, 1.0)
}

/// Drives the wave animation: owns the phase table, the noise source,
/// and the jitter stream, and tessellates one frame of strokes at a
/// time into a caller-provided [`FrameGeometry`].
pub struct WaveSystem {
    field: WaveField,
    noise: NoiseField,
    jitter: Option<SmallRng>,
    /// Scratch polyline reused across lines and frames
    polyline: Vec<Vec2>,
}

impl WaveSystem {
    pub fn new(params: &WaveParams, noise_seed: u32, jitter: &JitterConfig) -> Self {
        let params = params.sanitized();
        let jitter = if jitter.enabled {
            Some(match jitter.seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_entropy(),
            })
        } else {
            None
        };
        Self {
            field: WaveField::new(params.lines, params.factor as f64),
            noise: NoiseField::new(noise_seed),
            jitter,
            polyline: Vec::new(),
        }
    }

    /// Rebuild the phase table after `lines` or `factor` changed.
    /// Animation progress accumulated in the old table is dropped.
    pub fn rebuild_phases(&mut self, params: &WaveParams) {
        let params = params.sanitized();
        self.field.rebuild(params.lines, params.factor as f64);
    }

    pub fn phases(&self) -> &[f64] {
        self.field.phases()
    }

    /// Tessellate one frame of wave strokes into `geometry`.
    ///
    /// For each line: sample its polyline, lay down the shadow glow
    /// beneath the core stroke, then advance the line's phase. Line
    /// count follows the phase table, not `params.lines`, so count
    /// changes only take effect once the table is rebuilt.
    pub fn render_frame(
        &mut self,
        params: &WaveParams,
        viewport: &Viewport,
        geometry: &mut FrameGeometry,
    ) {
        geometry.clear();
        if viewport.is_empty() {
            return;
        }
        let params = params.sanitized();
        let glow_half_width = params.line_stroke * 0.5 + params.shadow_blur;

        let Self {
            field,
            noise,
            jitter,
            polyline,
        } = self;

        for index in 0..field.line_count() {
            let last_noise = field.sample_line(
                index,
                &params,
                viewport,
                noise,
                || match jitter.as_mut() {
                    Some(rng) => rng.gen::<f32>() * JITTER_SCALE,
                    None => 0.0,
                },
                polyline,
            );

            let alpha = stroke_alpha(line_opacity(last_noise));
            if params.shadow_blur > 0.0 {
                // shadow alpha tracks the stroke it sits under
                let glow = params
                    .shadow_color
                    .to_array_with_alpha(params.shadow_color.a * alpha);
                geometry.push_glow(polyline, glow_half_width, glow);
            }
            let color = params.wave_color.to_array_with_alpha(alpha);
            geometry.push_stroke(polyline, params.line_stroke, color);

            field.advance(index, params.speed as f64);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_viewport() -> Viewport {
        Viewport::from_physical((200, 100), 1.0, 1.5)
    }

    fn quiet_jitter() -> JitterConfig {
        JitterConfig {
            enabled: false,
            seed: None,
        }
    }

    #[test]
    fn test_opacity_floor_and_ceiling() {
        assert_eq!(line_opacity(0.0), 0.001);
        assert_eq!(line_opacity(10.0), 0.3);
        assert_eq!(line_opacity(-10.0), 0.3);
        let mid = line_opacity(0.1);
        assert!(mid > 0.1 && mid < 0.102);
    }

    #[test]
    fn test_stroke_alpha_doubles_and_clamps() {
        assert_eq!(stroke_alpha(0.001), 0.002);
        assert_eq!(stroke_alpha(0.3), 0.6);
        assert_eq!(stroke_alpha(0.8), 1.0);
        assert_eq!(stroke_alpha(-1.0), 0.0);
    }

    #[test]
    fn test_frame_draws_one_stroke_per_phase() {
        for lines in [0, 1, 9] {
            let mut params = WaveParams::default();
            params.lines = lines;
            let mut system = WaveSystem::new(&params, 42, &quiet_jitter());
            let mut geometry = FrameGeometry::new();

            system.render_frame(&params, &test_viewport(), &mut geometry);
            assert_eq!(geometry.core_strokes(), lines as usize + 1);
        }
    }

    #[test]
    fn test_phases_advance_by_speed_each_frame() {
        let params = WaveParams::default();
        let mut system = WaveSystem::new(&params, 42, &quiet_jitter());
        let before: Vec<f64> = system.phases().to_vec();
        let mut geometry = FrameGeometry::new();

        system.render_frame(&params, &test_viewport(), &mut geometry);

        for (b, a) in before.iter().zip(system.phases()) {
            assert!((a - b - params.speed as f64).abs() < 1e-6);
        }
    }

    #[test]
    fn test_hundred_frames_accumulate_speed() {
        let mut params = WaveParams::default();
        params.lines = 0;
        params.factor = 0.08;
        params.speed = 0.003;
        let mut system = WaveSystem::new(&params, 42, &quiet_jitter());
        let mut geometry = FrameGeometry::new();

        for _ in 0..100 {
            system.render_frame(&params, &test_viewport(), &mut geometry);
            assert_eq!(geometry.core_strokes(), 1);
        }
        assert!((system.phases()[0] - 0.3).abs() < 1e-4);
    }

    #[test]
    fn test_rebuild_resizes_phase_table() {
        let mut params = WaveParams::default();
        params.lines = 5;
        let mut system = WaveSystem::new(&params, 42, &quiet_jitter());
        assert_eq!(system.phases().len(), 6);

        params.lines = 2;
        system.rebuild_phases(&params);
        assert_eq!(system.phases().len(), 3);

        params.lines = -3;
        system.rebuild_phases(&params);
        assert_eq!(system.phases().len(), 1);
    }

    #[test]
    fn test_stale_count_until_rebuild() {
        let mut params = WaveParams::default();
        params.lines = 4;
        let mut system = WaveSystem::new(&params, 42, &quiet_jitter());
        let mut geometry = FrameGeometry::new();

        // editing the count alone does not change what gets drawn
        params.lines = 10;
        system.render_frame(&params, &test_viewport(), &mut geometry);
        assert_eq!(geometry.core_strokes(), 5);

        system.rebuild_phases(&params);
        system.render_frame(&params, &test_viewport(), &mut geometry);
        assert_eq!(geometry.core_strokes(), 11);
    }

    #[test]
    fn test_zero_blur_skips_glow() {
        let mut params = WaveParams::default();
        params.shadow_blur = 0.0;
        let mut system = WaveSystem::new(&params, 42, &quiet_jitter());
        let mut geometry = FrameGeometry::new();

        system.render_frame(&params, &test_viewport(), &mut geometry);
        assert_eq!(geometry.core_strokes(), params.lines as usize + 1);
        // every span is a core stroke
        assert_eq!(geometry.spans.len(), geometry.core_strokes());
    }

    #[test]
    fn test_default_blur_emits_glow_spans() {
        let params = WaveParams::default();
        let mut system = WaveSystem::new(&params, 42, &quiet_jitter());
        let mut geometry = FrameGeometry::new();

        system.render_frame(&params, &test_viewport(), &mut geometry);
        // one glow + one core per line
        assert_eq!(geometry.spans.len(), 2 * (params.lines as usize + 1));
    }

    #[test]
    fn test_empty_viewport_emits_nothing() {
        let params = WaveParams::default();
        let mut system = WaveSystem::new(&params, 42, &quiet_jitter());
        let mut geometry = FrameGeometry::new();

        let viewport = Viewport::from_physical((0, 100), 1.0, 1.5);
        system.render_frame(&params, &viewport, &mut geometry);
        assert!(geometry.vertices.is_empty());
        assert!(geometry.spans.is_empty());
    }

    #[test]
    fn test_seeded_jitter_is_reproducible() {
        let params = WaveParams::default();
        let jitter = JitterConfig {
            enabled: true,
            seed: Some(7),
        };
        let mut a = WaveSystem::new(&params, 42, &jitter);
        let mut b = WaveSystem::new(&params, 42, &jitter);
        let (mut ga, mut gb) = (FrameGeometry::new(), FrameGeometry::new());

        a.render_frame(&params, &test_viewport(), &mut ga);
        b.render_frame(&params, &test_viewport(), &mut gb);
        assert_eq!(ga.vertices, gb.vertices);
    }

    #[test]
    fn test_geometry_capacity_is_reused() {
        let params = WaveParams::default();
        let mut system = WaveSystem::new(&params, 42, &quiet_jitter());
        let mut geometry = FrameGeometry::new();

        system.render_frame(&params, &test_viewport(), &mut geometry);
        let first = geometry.vertices.len();
        system.render_frame(&params, &test_viewport(), &mut geometry);
        assert_eq!(geometry.vertices.len(), first);
    }
}
