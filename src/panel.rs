//! Live parameter panel drawn with egui.

use winit::event::WindowEvent;
use winit::window::Window;

use crate::params::{FieldKind, PanelField, Rgba, WaveParams, PANEL_FIELDS};
use crate::rendering::PanelFrame;

/// Outcome of one panel pass
pub struct PanelResponse {
    /// Paint data for this frame, absent while the panel is hidden
    pub frame: Option<PanelFrame>,
    /// A line-count or spacing edit landed; the phase table must be
    /// rebuilt before the next frame
    pub rebuild_phases: bool,
}

/// egui-backed settings panel bound to [`PANEL_FIELDS`]
pub struct ControlPanel {
    egui_ctx: egui::Context,
    state: egui_winit::State,
    visible: bool,
}

impl ControlPanel {
    pub fn new(window: &Window) -> Self {
        let egui_ctx = egui::Context::default();
        let state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        Self {
            egui_ctx,
            state,
            visible: true,
        }
    }

    /// Feed a window event to egui. Returns true when egui consumed it
    /// (pointer over the panel, slider drag, ...).
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Run one egui pass over the parameter bindings
    pub fn run(&mut self, window: &Window, params: &mut WaveParams) -> PanelResponse {
        if !self.visible {
            return PanelResponse {
                frame: None,
                rebuild_phases: false,
            };
        }

        let mut rebuild_phases = false;
        let raw_input = self.state.take_egui_input(window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            egui::SidePanel::left("wave_settings")
                .resizable(false)
                .show(ctx, |ui| {
                    ui.heading("Waves");
                    ui.separator();
                    for field in PANEL_FIELDS {
                        if edit_field(ui, field, params) && field.rebuilds_phases {
                            rebuild_phases = true;
                        }
                    }
                });
        });

        self.state
            .handle_platform_output(window, full_output.platform_output);
        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        PanelResponse {
            frame: Some(PanelFrame {
                textures_delta: full_output.textures_delta,
                paint_jobs,
            }),
            rebuild_phases,
        }
    }
}

/// Draw the widget for one binding. Returns true when the value changed.
fn edit_field(ui: &mut egui::Ui, field: &PanelField, params: &mut WaveParams) -> bool {
    match field.kind {
        FieldKind::Scalar { min, max, step } => match params.scalar_mut(field.id) {
            Some(value) => ui
                .add(
                    egui::Slider::new(value, min as f32..=max as f32)
                        .step_by(step)
                        .text(field.label),
                )
                .changed(),
            None => false,
        },
        FieldKind::Count { min, max } => match params.count_mut(field.id) {
            Some(value) => ui
                .add(egui::Slider::new(value, min..=max).text(field.label))
                .changed(),
            None => false,
        },
        FieldKind::Color => match params.color_mut(field.id) {
            Some(color) => {
                let mut srgba = [color.r, color.g, color.b, (color.a * 255.0).round() as u8];
                let mut changed = false;
                ui.horizontal(|ui| {
                    changed = ui.color_edit_button_srgba_unmultiplied(&mut srgba).changed();
                    ui.label(field.label);
                });
                if changed {
                    *color = Rgba {
                        r: srgba[0],
                        g: srgba[1],
                        b: srgba[2],
                        a: srgba[3] as f32 / 255.0,
                    };
                }
                changed
            }
            None => false,
        },
    }
}
