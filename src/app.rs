/*
 * Application Module
 *
 * This module defines the main application model for the boid simulation.
 * It wires the window, the control panel and the frame clock to the
 * Simulation, which owns all simulation state. The window size is the
 * simulation domain: resizing the window reseeds the flock.
 */

use std::sync::OnceLock;
use std::time::Instant;

use nannou::prelude::*;
use nannou_egui::Egui;
use tracing::{info, warn};

use crate::clock::FrameClock;
use crate::config::SimulationConfig;
use crate::debug::DebugInfo;
use crate::input;
use crate::renderer;
use crate::simulation::Simulation;
use crate::ui;

// nannou builds the model from a plain fn, so the config is handed over here
static CONFIG: OnceLock<SimulationConfig> = OnceLock::new();

// Main model for the application
pub struct Model {
    pub simulation: Simulation,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub clock: FrameClock,
    pub show_panel: bool,
}

// Start the window and event loop; does not return until the window closes
pub fn run(config: SimulationConfig) {
    if CONFIG.set(config).is_err() {
        warn!("configuration was already set, keeping the first one");
    }

    nannou::app(model).update(update).run();
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let config = CONFIG.get().cloned().unwrap_or_default();

    // nannou quits on Escape unless told otherwise
    app.set_exit_on_escape(input::exits_on_escape());

    // Create the main window
    let window_id = app
        .new_window()
        .title("Boids Simulation")
        .size(config.window_width as u32, config.window_height as u32)
        .view(renderer::view)
        .resized(resized)
        .key_released(input::key_released)
        .mouse_pressed(input::mouse_pressed)
        .raw_event(input::raw_window_event)
        .build()
        .expect("failed to create the main window");

    let window = app.window(window_id).expect("main window closed during start-up");
    let egui = Egui::from_window(&window);

    // The domain matches what the window really got, which can differ from the request
    let window_rect = window.rect();
    let config = SimulationConfig {
        window_width: window_rect.w(),
        window_height: window_rect.h(),
        ..config
    };

    let simulation = Simulation::new(&config).unwrap_or_else(|err| {
        warn!(%err, "invalid configuration, falling back to defaults");
        Simulation::new(&SimulationConfig {
            window_width: window_rect.w(),
            window_height: window_rect.h(),
            ..SimulationConfig::default()
        })
        .expect("default configuration is valid")
    });

    info!(fps = config.target_fps, "window ready");

    Model {
        simulation,
        egui,
        debug_info: DebugInfo::default(),
        clock: FrameClock::new(config.target_fps),
        // Starts hidden like a game menu
        show_panel: false,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.record_frame(app.fps(), update.since_last);

    let boid_count = model.simulation.flock().len();
    let actions = ui::update_ui(
        &mut model.egui,
        model.simulation.params_mut(),
        &model.debug_info,
        boid_count,
        model.show_panel,
    );

    // Reset wins over a count change made in the same frame
    if actions.reset_requested {
        model.simulation.reset_to_defaults();
    } else if actions.num_boids_changed {
        let count = model.simulation.params().num_boids;
        model.simulation.set_agent_count(count);
    }

    if model.clock.should_tick(Instant::now()) {
        model.simulation.tick();
    }
    model.debug_info.ticks = model.simulation.tick_count();
}

// Window resized: new domain, new flock
pub fn resized(_app: &App, model: &mut Model, size: Vec2) {
    model.simulation.resize_domain(size.x, size.y);
}
