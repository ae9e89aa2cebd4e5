//! Stroke geometry: polylines tessellated into triangle ribbons.
//!
//! Wave lines are function graphs sampled once per pixel column, so
//! the ribbons stay well behaved: each point is offset along the
//! perpendicular of its neighboring segments, with no miter handling
//! needed. A stroke produces a two-row ribbon of solid color; its
//! glow is a three-row ribbon whose edges fade to transparent,
//! reading as a soft drop shadow under the line.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Vertex data for stroke ribbons (logical-pixel position + RGBA)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

/// Ribbon class of one draw span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RibbonKind {
    /// The stroke itself
    Core,

    /// Soft under-glow beneath a stroke
    Glow,
}

/// One indexed draw span inside the frame's shared buffers
#[derive(Debug, Clone, Copy)]
pub struct DrawSpan {
    pub kind: RibbonKind,
    pub index_start: u32,
    pub index_count: u32,
}

/// Geometry for one frame, rebuilt every tick into reused buffers
#[derive(Debug, Default)]
pub struct FrameGeometry {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub spans: Vec<DrawSpan>,
}

impl FrameGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the frame's contents, keeping allocations for the next one
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.spans.clear();
    }

    /// Number of stroke ribbons recorded this frame
    pub fn core_strokes(&self) -> usize {
        self.spans
            .iter()
            .filter(|s| s.kind == RibbonKind::Core)
            .count()
    }

    /// Tessellate a solid stroke of `width` logical pixels
    pub fn push_stroke(&mut self, points: &[Vec2], width: f32, color: [f32; 4]) {
        if points.len() < 2 {
            return;
        }
        let half = (width * 0.5).max(0.5);
        let base = self.vertices.len() as u32;
        let index_start = self.indices.len() as u32;

        for (i, &p) in points.iter().enumerate() {
            let n = point_normal(points, i);
            let off = n * half;
            self.vertices.push(Vertex {
                position: (p + off).to_array(),
                color,
            });
            self.vertices.push(Vertex {
                position: (p - off).to_array(),
                color,
            });
        }
        for i in 0..(points.len() as u32 - 1) {
            let a = base + 2 * i;
            self.indices
                .extend_from_slice(&[a, a + 1, a + 2, a + 2, a + 1, a + 3]);
        }

        self.spans.push(DrawSpan {
            kind: RibbonKind::Core,
            index_start,
            index_count: self.indices.len() as u32 - index_start,
        });
    }

    /// Tessellate a glow ribbon: full `color` along the spine, fading
    /// to transparent at `half_width` on both sides
    pub fn push_glow(&mut self, points: &[Vec2], half_width: f32, color: [f32; 4]) {
        if points.len() < 2 || half_width <= 0.0 || color[3] <= 0.0 {
            return;
        }
        let edge = [color[0], color[1], color[2], 0.0];
        let base = self.vertices.len() as u32;
        let index_start = self.indices.len() as u32;

        for (i, &p) in points.iter().enumerate() {
            let off = point_normal(points, i) * half_width;
            self.vertices.push(Vertex {
                position: (p + off).to_array(),
                color: edge,
            });
            self.vertices.push(Vertex {
                position: p.to_array(),
                color,
            });
            self.vertices.push(Vertex {
                position: (p - off).to_array(),
                color: edge,
            });
        }
        for i in 0..(points.len() as u32 - 1) {
            let a = base + 3 * i;
            // upper half of the ribbon, then lower half
            self.indices
                .extend_from_slice(&[a, a + 1, a + 3, a + 3, a + 1, a + 4]);
            self.indices
                .extend_from_slice(&[a + 1, a + 2, a + 4, a + 4, a + 2, a + 5]);
        }

        self.spans.push(DrawSpan {
            kind: RibbonKind::Glow,
            index_start,
            index_count: self.indices.len() as u32 - index_start,
        });
    }
}

/// Unit perpendicular at point `i`, averaged over adjacent segments.
/// Falls back to vertical for degenerate (coincident-point) spans.
fn point_normal(points: &[Vec2], i: usize) -> Vec2 {
    let dir = if i == 0 {
        points[1] - points[0]
    } else if i == points.len() - 1 {
        points[i] - points[i - 1]
    } else {
        points[i + 1] - points[i - 1]
    };
    let perp = Vec2::new(-dir.y, dir.x);
    if perp.length_squared() > f32::EPSILON {
        perp.normalize()
    } else {
        Vec2::new(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_line(n: usize, y: f32) -> Vec<Vec2> {
        (0..n).map(|x| Vec2::new(x as f32, y)).collect()
    }

    #[test]
    fn test_stroke_vertex_and_index_counts() {
        let mut geo = FrameGeometry::new();
        geo.push_stroke(&flat_line(5, 10.0), 4.0, [1.0, 1.0, 1.0, 0.5]);
        assert_eq!(geo.vertices.len(), 10);
        assert_eq!(geo.indices.len(), 24);
        assert_eq!(geo.spans.len(), 1);
        assert_eq!(geo.spans[0].kind, RibbonKind::Core);
        assert_eq!(geo.spans[0].index_count, 24);
        assert_eq!(geo.core_strokes(), 1);
    }

    #[test]
    fn test_stroke_offsets_straddle_the_spine() {
        let mut geo = FrameGeometry::new();
        geo.push_stroke(&flat_line(3, 10.0), 4.0, [1.0; 4]);
        let ys: Vec<f32> = geo.vertices.iter().map(|v| v.position[1]).collect();
        assert!(ys.iter().all(|&y| (y - 8.0).abs() < 1e-4 || (y - 12.0).abs() < 1e-4));
    }

    #[test]
    fn test_glow_counts_and_edge_alpha() {
        let mut geo = FrameGeometry::new();
        geo.push_glow(&flat_line(4, 0.0), 20.0, [0.1, 0.1, 0.3, 0.5]);
        assert_eq!(geo.vertices.len(), 12);
        assert_eq!(geo.indices.len(), 36);
        assert_eq!(geo.spans[0].kind, RibbonKind::Glow);
        // spine carries the color, edges are fully transparent
        for (i, v) in geo.vertices.iter().enumerate() {
            let expected = if i % 3 == 1 { 0.5 } else { 0.0 };
            assert_eq!(v.color[3], expected);
        }
        assert_eq!(geo.core_strokes(), 0);
    }

    #[test]
    fn test_degenerate_polylines_emit_nothing() {
        let mut geo = FrameGeometry::new();
        geo.push_stroke(&[], 2.0, [1.0; 4]);
        geo.push_stroke(&[Vec2::ZERO], 2.0, [1.0; 4]);
        geo.push_glow(&flat_line(4, 0.0), 0.0, [1.0; 4]);
        geo.push_glow(&flat_line(4, 0.0), 10.0, [1.0, 1.0, 1.0, 0.0]);
        assert!(geo.vertices.is_empty());
        assert!(geo.indices.is_empty());
        assert!(geo.spans.is_empty());
    }

    #[test]
    fn test_coincident_points_stay_finite() {
        let mut geo = FrameGeometry::new();
        let points = vec![Vec2::new(0.0, 300.0), Vec2::new(0.0, 300.0), Vec2::new(1.0, 299.0)];
        geo.push_stroke(&points, 2.0, [1.0; 4]);
        assert!(geo
            .vertices
            .iter()
            .all(|v| v.position[0].is_finite() && v.position[1].is_finite()));
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut geo = FrameGeometry::new();
        geo.push_stroke(&flat_line(100, 0.0), 2.0, [1.0; 4]);
        let cap = geo.vertices.capacity();
        geo.clear();
        assert!(geo.vertices.is_empty() && geo.spans.is_empty());
        assert_eq!(geo.vertices.capacity(), cap);
    }

    #[test]
    fn test_indices_reference_valid_vertices() {
        let mut geo = FrameGeometry::new();
        geo.push_glow(&flat_line(6, 5.0), 12.0, [0.2, 0.2, 0.6, 0.4]);
        geo.push_stroke(&flat_line(6, 5.0), 1.0, [1.0; 4]);
        let max = *geo.indices.iter().max().unwrap();
        assert!((max as usize) < geo.vertices.len());
    }
}
