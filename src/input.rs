/*
 * Input Module
 *
 * Keyboard and raw window event handling.
 *
 * Features:
 * - M, Space or Escape toggles the control panel and plots
 * - Left click on the menu tab toggles them too
 * - Raw events are forwarded to egui
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::renderer;

// Keys that show or hide the control panel
pub fn toggles_panel(key: Key) -> bool {
    matches!(key, Key::M | Key::Space | Key::Escape)
}

// Escape belongs to the panel, so it must not also close the app
pub fn exits_on_escape() -> bool {
    !toggles_panel(Key::Escape)
}

fn toggle_panel(model: &mut Model) {
    model.show_panel = !model.show_panel;
    tracing::debug!(visible = model.show_panel, "control panel toggled");
}

// Key released event handler
pub fn key_released(_app: &App, model: &mut Model, key: Key) {
    // Typing into an egui field must not flip the panel
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }

    if toggles_panel(key) {
        toggle_panel(model);
    }
}

// Mouse pressed event handler
pub fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    // Clicks on the egui window are for egui
    if button != MouseButton::Left || model.egui.ctx().is_pointer_over_area() {
        return;
    }

    if renderer::menu_tab_contains(app.window_rect(), model.show_panel, app.mouse.position()) {
        toggle_panel(model);
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
