//! Control-panel bindings for the wave parameters.
//!
//! The panel never names concrete struct fields; it walks this table
//! and resolves each entry through the accessor methods below.

use super::waves::{Rgba, WaveParams};

/// Identifies one editable field of [`WaveParams`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    WaveColor,
    ShadowColor,
    ShadowBlur,
    LineStroke,
    Amplitude,
    Variation,
    Lines,
    Factor,
    Speed,
}

/// Widget class a field binds to
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Slider over an inclusive range with a fixed step
    Scalar { min: f64, max: f64, step: f64 },

    /// Integer slider
    Count { min: i32, max: i32 },

    /// RGBA color button
    Color,
}

/// One panel binding: which field, how to edit it, and whether a
/// change must rebuild the line phase table before the next frame
pub struct PanelField {
    pub id: FieldId,
    pub label: &'static str,
    pub kind: FieldKind,
    pub rebuilds_phases: bool,
}

/// Panel bindings in display order
pub const PANEL_FIELDS: &[PanelField] = &[
    PanelField {
        id: FieldId::WaveColor,
        label: "wave color",
        kind: FieldKind::Color,
        rebuilds_phases: false,
    },
    PanelField {
        id: FieldId::ShadowColor,
        label: "shadow color",
        kind: FieldKind::Color,
        rebuilds_phases: false,
    },
    PanelField {
        id: FieldId::ShadowBlur,
        label: "shadow blur",
        kind: FieldKind::Scalar {
            min: 0.0,
            max: 50.0,
            step: 1.0,
        },
        rebuilds_phases: false,
    },
    PanelField {
        id: FieldId::LineStroke,
        label: "line stroke",
        kind: FieldKind::Scalar {
            min: 1.0,
            max: 10.0,
            step: 1.0,
        },
        rebuilds_phases: false,
    },
    PanelField {
        id: FieldId::Amplitude,
        label: "amplitude",
        kind: FieldKind::Scalar {
            min: 10.0,
            max: 300.0,
            step: 0.1,
        },
        rebuilds_phases: false,
    },
    PanelField {
        id: FieldId::Variation,
        label: "variation",
        kind: FieldKind::Scalar {
            min: 0.0001,
            max: 0.01,
            step: 0.0001,
        },
        rebuilds_phases: false,
    },
    PanelField {
        id: FieldId::Lines,
        label: "lines",
        kind: FieldKind::Count { min: 0, max: 50 },
        rebuilds_phases: true,
    },
    PanelField {
        id: FieldId::Factor,
        label: "factor",
        kind: FieldKind::Scalar {
            min: 0.001,
            max: 0.5,
            step: 0.001,
        },
        rebuilds_phases: true,
    },
    PanelField {
        id: FieldId::Speed,
        label: "speed",
        kind: FieldKind::Scalar {
            min: 0.001,
            max: 0.02,
            step: 0.0001,
        },
        rebuilds_phases: false,
    },
];

impl WaveParams {
    /// Resolve a scalar binding to its storage
    pub fn scalar_mut(&mut self, id: FieldId) -> Option<&mut f32> {
        match id {
            FieldId::ShadowBlur => Some(&mut self.shadow_blur),
            FieldId::LineStroke => Some(&mut self.line_stroke),
            FieldId::Amplitude => Some(&mut self.amplitude),
            FieldId::Variation => Some(&mut self.variation),
            FieldId::Factor => Some(&mut self.factor),
            FieldId::Speed => Some(&mut self.speed),
            _ => None,
        }
    }

    /// Resolve an integer binding to its storage
    pub fn count_mut(&mut self, id: FieldId) -> Option<&mut i32> {
        match id {
            FieldId::Lines => Some(&mut self.lines),
            _ => None,
        }
    }

    /// Resolve a color binding to its storage
    pub fn color_mut(&mut self, id: FieldId) -> Option<&mut Rgba> {
        match id {
            FieldId::WaveColor => Some(&mut self.wave_color),
            FieldId::ShadowColor => Some(&mut self.shadow_color),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_bound_exactly_once() {
        assert_eq!(PANEL_FIELDS.len(), 9);
        for (i, a) in PANEL_FIELDS.iter().enumerate() {
            for b in &PANEL_FIELDS[i + 1..] {
                assert!(a.id != b.id, "duplicate binding for {:?}", a.id);
            }
        }
    }

    #[test]
    fn test_bindings_resolve_to_matching_storage() {
        let mut params = WaveParams::default();
        for field in PANEL_FIELDS {
            match field.kind {
                FieldKind::Scalar { min, max, .. } => {
                    let v = *params.scalar_mut(field.id).expect("scalar storage");
                    assert!(min <= max);
                    assert!(
                        (min..=max).contains(&(v as f64)),
                        "{:?} default {} outside {}..={}",
                        field.id,
                        v,
                        min,
                        max
                    );
                }
                FieldKind::Count { min, max } => {
                    let v = *params.count_mut(field.id).expect("count storage");
                    assert!((min..=max).contains(&v));
                }
                FieldKind::Color => {
                    assert!(params.color_mut(field.id).is_some());
                }
            }
        }
    }

    #[test]
    fn test_only_lines_and_factor_rebuild_phases() {
        let rebuilding: Vec<_> = PANEL_FIELDS
            .iter()
            .filter(|f| f.rebuilds_phases)
            .map(|f| f.id)
            .collect();
        assert_eq!(rebuilding, vec![FieldId::Lines, FieldId::Factor]);
    }
}
