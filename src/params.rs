//! Parameter definitions with documented ranges and semantics.
//!
//! All tunable numbers are gathered here with:
//! - Units (logical pixels, noise units, ticks)
//! - Documented ranges and defaults
//! - The control-panel binding table

mod fields;
mod render;
mod waves;

// Re-export all types
pub use fields::{FieldId, FieldKind, PanelField, PANEL_FIELDS};
pub use render::{JitterConfig, RenderConfig};
pub use waves::{Rgba, WaveParams};
