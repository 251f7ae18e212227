/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. It provides controls for adjusting simulation parameters.
 * Parameter change detection is handled by the SimulationParams struct.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::SimulationParams;

// What the frame driver has to act on after the panel ran
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiActions {
    pub reset_requested: bool,
    pub num_boids_changed: bool,
}

// Update the UI and report resets and parameter changes
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    debug_info: &DebugInfo,
    boid_count: usize,
    visible: bool,
) -> UiActions {
    let mut reset_requested = false;

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    // egui needs a frame every update, even when nothing is shown
    let ctx = egui.begin_frame();
    if !visible {
        return UiActions::default();
    }

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flocking Behavior", |ui| {
                ui.add(egui::Slider::new(&mut params.separation_weight, SimulationParams::get_weight_range()).text("Separation"));
                ui.add(egui::Slider::new(&mut params.alignment_weight, SimulationParams::get_weight_range()).text("Alignment"));
                ui.add(egui::Slider::new(&mut params.cohesion_weight, SimulationParams::get_weight_range()).text("Cohesion"));
            });

            ui.collapsing("Boid Parameters", |ui| {
                ui.add(egui::Slider::new(&mut params.max_speed, SimulationParams::get_max_speed_range()).text("Max Speed"));
                ui.add(egui::Slider::new(&mut params.perception_radius, SimulationParams::get_radius_range()).text("Perception Radius"));
                ui.add(egui::Slider::new(&mut params.num_boids, SimulationParams::get_num_boids_range()).text("Total Boids"));
            });

            ui.horizontal(|ui| {
                if ui.button("Reset").on_hover_text("Reset the simulation").clicked() {
                    reset_requested = true;
                }
                ui.checkbox(&mut params.show_perception, "Show Perception")
                    .on_hover_text("Show the perception range of a boid");
                ui.checkbox(&mut params.pause_simulation, "Pause");
            });

            ui.separator();

            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time_ms()));
            ui.label(format!("Boids: {}", boid_count));
            ui.label(format!("Ticks: {}", debug_info.ticks));
            ui.label("M / Space / Esc or the red tab hides this panel");
        });

    // Sliders clamp already; this also covers typed-in values
    params.sanitize();

    let changes = params.detect_changes();
    if changes.any_changed {
        tracing::debug!(?params, "parameters edited");
    }

    UiActions {
        reset_requested,
        num_boids_changed: changes.num_boids_changed,
    }
}
