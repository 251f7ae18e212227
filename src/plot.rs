/*
 * Live Plot Module
 *
 * Draws a StatsHistory as two line series (current and reference) inside a
 * framed box, with Y ticks, a legend and a caption showing the latest
 * current value. The Y axis tops out at the history's series_bounds().
 */

use std::f32::consts::FRAC_PI_2;

use nannou::prelude::*;

use crate::stats::StatsHistory;

const NUM_TICKS: usize = 5;
const LINE_WEIGHT: f32 = 2.5;
const FONT_SIZE: u32 = 12;

pub struct PlotStyle {
    pub y_label: &'static str,
    pub current_label: &'static str,
    pub reference_label: &'static str,
    pub current_color: Rgb<u8>,
    pub reference_color: Rgb<u8>,
}

impl PlotStyle {
    pub fn velocity() -> Self {
        Self {
            y_label: "Velocity",
            current_label: "Avg Velocity",
            reference_label: "Max Speed",
            current_color: rgb(255, 0, 0),
            reference_color: rgb(0, 0, 255),
        }
    }

    pub fn neighbours() -> Self {
        Self {
            y_label: "Neighbors",
            current_label: "Avg Neighbors",
            reference_label: "Max Neighbors",
            current_color: rgb(0, 200, 0),
            reference_color: rgb(0, 0, 255),
        }
    }
}

// Map a series into plot space. X spacing uses the full capacity so the
// line grows from the left until the history fills up.
pub fn series_points(values: impl Iterator<Item = f32>, rect: Rect, capacity: usize, max_y: f32) -> Vec<Point2> {
    let scale_x = rect.w() / capacity.max(1) as f32;
    let scale_y = if max_y > 0.0 { rect.h() / max_y } else { 0.0 };

    values
        .enumerate()
        .map(|(i, value)| pt2(rect.left() + i as f32 * scale_x, rect.bottom() + value * scale_y))
        .collect()
}

pub fn draw_plot(draw: &Draw, history: &StatsHistory, rect: Rect, style: &PlotStyle) {
    // Plot background and frame
    draw.rect()
        .xy(rect.xy())
        .wh(rect.wh())
        .color(WHITE)
        .stroke(BLACK)
        .stroke_weight(2.0);

    // Rotated axis label to the left of the tick labels
    draw.text(style.y_label)
        .x_y(rect.left() - 55.0, rect.y())
        .rotate(FRAC_PI_2)
        .color(BLACK)
        .font_size(FONT_SIZE);

    // Legend above the plot
    draw.text(style.current_label)
        .x_y(rect.left() + rect.w() * 0.25, rect.top() + 12.0)
        .color(style.current_color)
        .font_size(FONT_SIZE);
    draw.text(style.reference_label)
        .x_y(rect.left() + rect.w() * 0.75, rect.top() + 12.0)
        .color(style.reference_color)
        .font_size(FONT_SIZE);

    if history.is_empty() {
        return;
    }

    let max_y = history.series_bounds();

    for i in 0..=NUM_TICKS {
        let value = max_y / NUM_TICKS as f32 * i as f32;
        let y = rect.bottom() + rect.h() * i as f32 / NUM_TICKS as f32;
        draw.text(&format!("{value:.1}"))
            .x_y(rect.left() - 22.0, y)
            .color(BLACK)
            .font_size(FONT_SIZE);
    }

    let current = series_points(history.current(), rect, history.capacity(), max_y);
    let reference = series_points(history.reference(), rect, history.capacity(), max_y);

    if current.len() > 1 {
        draw.polyline()
            .weight(LINE_WEIGHT)
            .color(style.current_color)
            .points(current);
    }
    if reference.len() > 1 {
        draw.polyline()
            .weight(LINE_WEIGHT)
            .color(style.reference_color)
            .points(reference);
    }

    if let Some((latest, _)) = history.latest() {
        draw.text(&format!("{} ~ {latest:.2}", style.current_label))
            .x_y(rect.x(), rect.bottom() - 16.0)
            .color(BLACK)
            .font_size(FONT_SIZE);
    }
}
