/*
 * Renderer Module
 *
 * This module handles the rendering of the boid simulation.
 * It draws the boids, the optional perception radius and the live plots.
 *
 * The simulation domain uses screen coordinates (origin top-left, y down);
 * everything is mapped into nannou's centred, y-up window space here.
 */

use std::f32::consts::PI;

use nannou::prelude::*;

use crate::app::Model;
use crate::boid::Boid;
use crate::plot::{self, PlotStyle};
use crate::BOID_SIZE;

const MENU_TAB_SEGMENTS: usize = 24;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();

    draw.background().color(rgb(135u8, 190, 235));

    let flock = model.simulation.flock();
    for boid in flock.boids() {
        draw_boid(&draw, boid, window_rect);
    }

    // Perception radius of the first boid
    let params = model.simulation.params();
    if params.show_perception {
        if let Some(first) = flock.boids().first() {
            draw.ellipse()
                .xy(to_window(first.position, window_rect))
                .radius(params.perception_radius)
                .no_fill()
                .stroke(RED)
                .stroke_weight(2.0);
        }
    }

    if model.show_panel {
        let (velocity_rect, neighbour_rect) = plot_rects(window_rect);
        plot::draw_plot(&draw, model.simulation.velocity_history(), velocity_rect, &PlotStyle::velocity());
        plot::draw_plot(&draw, model.simulation.neighbour_history(), neighbour_rect, &PlotStyle::neighbours());
    }

    draw_menu_tab(&draw, window_rect, model.show_panel);

    // Finish drawing
    if let Err(err) = draw.to_frame(app, &frame) {
        tracing::error!(?err, "failed to draw frame");
    }

    // Draw the egui UI
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        tracing::error!(?err, "failed to draw control panel");
    }
}

// Draw the boid as a triangle pointing along its heading
fn draw_boid(draw: &Draw, boid: &Boid, window_rect: Rect) {
    let points = [
        pt2(BOID_SIZE, 0.0),
        pt2(-BOID_SIZE, BOID_SIZE / 2.0),
        pt2(-BOID_SIZE, -BOID_SIZE / 2.0),
    ];

    // The y flip mirrors the angle
    draw.polygon()
        .color(rgb(30u8, 30, 40))
        .points(points)
        .xy(to_window(boid.position, window_rect))
        .rotate(-boid.heading());
}

// Red half disc hanging from the top edge, or from under the plots while
// they are shown; clicking it toggles the panel
fn draw_menu_tab(draw: &Draw, window_rect: Rect, panel_open: bool) {
    let (centre, radius) = menu_tab(window_rect, panel_open);

    let arc = (0..=MENU_TAB_SEGMENTS).map(|i| {
        let angle = PI + PI * i as f32 / MENU_TAB_SEGMENTS as f32;
        centre + vec2(angle.cos(), angle.sin()) * radius
    });
    draw.polygon().color(rgb(200u8, 0, 0)).points(arc);
    draw.text("Menu")
        .x_y(centre.x, centre.y - radius * 0.35)
        .color(WHITE)
        .font_size(16);
    draw.text("Click or press space")
        .x_y(centre.x, centre.y - radius * 0.65)
        .w(radius * 2.0)
        .color(WHITE)
        .font_size(10);
}

// Centre of the flat edge and radius of the menu tab, scaled with the window width
pub fn menu_tab(window_rect: Rect, panel_open: bool) -> (Point2, f32) {
    let radius = 3.0 * window_rect.w() / 37.0;
    let y = if panel_open {
        plot_rects(window_rect).1.bottom() - 0.5 * window_rect.h() / 9.0
    } else {
        window_rect.top()
    };
    (pt2(window_rect.x(), y), radius)
}

// Hit test for the lower half disc of the menu tab, in window coordinates
pub fn menu_tab_contains(window_rect: Rect, panel_open: bool, point: Point2) -> bool {
    let (centre, radius) = menu_tab(window_rect, panel_open);
    point.y <= centre.y && point.distance(centre) <= radius
}

// Domain coordinates to window coordinates
pub fn to_window(position: Point2, window_rect: Rect) -> Point2 {
    pt2(window_rect.left() + position.x, window_rect.top() - position.y)
}

// Velocity plot near the top, neighbor plot below it, both a quarter of the
// window wide and a fifth of its height
pub fn plot_rects(window_rect: Rect) -> (Rect, Rect) {
    let w = window_rect.w() / 4.0;
    let h = window_rect.h() / 5.0;
    let left = window_rect.left() + 1.8 * window_rect.w() / 5.0;
    let top = window_rect.top() - 0.5 * window_rect.h() / 9.0;

    let velocity = Rect::from_x_y_w_h(left + w / 2.0, top - h / 2.0, w, h);
    let neighbours = Rect::from_x_y_w_h(left + w / 2.0, top - 1.7 * h - h / 2.0, w, h);
    (velocity, neighbours)
}
