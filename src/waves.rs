//! Flowing wave lines driven by 3D coherent noise.

mod field;
mod system;

// Re-export public types
pub use field::{line_offsets, WaveField};
pub use system::{line_opacity, stroke_alpha, WaveSystem};
