//! Inline SVG rendering for the two dashboard charts.

use crate::models::{CaloriesPoint, DurationPoint};
use std::fmt::Write;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 260.0;
const PADDING_X: f64 = 44.0;
const PADDING_Y: f64 = 34.0;
const TOP: f64 = 24.0;
const TICKS: u32 = 4;

const BAR_ROW: f64 = 30.0;
const BAR_LABEL_WIDTH: f64 = 96.0;
const BAR_VALUE_WIDTH: f64 = 72.0;

pub const EMPTY_MESSAGE: &str = "No exercise recorded yet.";

pub fn render_duration_chart(points: &[DurationPoint]) -> String {
    if points.is_empty() {
        return empty_chart("Minutes per day");
    }

    let max = points.iter().map(|point| point.duration).max().unwrap_or(0).max(1) as f64;
    let x_step = if points.len() > 1 {
        (WIDTH - PADDING_X * 2.0) / (points.len() - 1) as f64
    } else {
        0.0
    };
    let scale_y = (HEIGHT - TOP - PADDING_Y) / max;
    let x = |index: usize| {
        if points.len() == 1 {
            WIDTH / 2.0
        } else {
            PADDING_X + index as f64 * x_step
        }
    };
    let y = |value: f64| HEIGHT - PADDING_Y - value * scale_y;

    let mut svg = open_svg(HEIGHT, "Minutes per day");

    for i in 0..=TICKS {
        let value = max * f64::from(i) / f64::from(TICKS);
        let y_pos = y(value);
        let _ = write!(
            svg,
            r#"<line class="chart-grid" x1="{PADDING_X}" y1="{y_pos:.2}" x2="{:.2}" y2="{y_pos:.2}" /><text class="chart-label" x="{:.2}" y="{:.2}" text-anchor="end">{}</text>"#,
            WIDTH - PADDING_X,
            PADDING_X - 10.0,
            y_pos + 4.0,
            format_axis_value(value),
        );
    }

    svg.push_str(&y_axis_label(TOP + (HEIGHT - TOP - PADDING_Y) / 2.0, "Minutes"));

    let path = points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let command = if index == 0 { 'M' } else { 'L' };
            format!("{command} {:.2} {:.2}", x(index), y(point.duration as f64))
        })
        .collect::<Vec<_>>()
        .join(" ");
    let _ = write!(svg, r#"<path class="chart-line" d="{path}" />"#);

    let label_every = points.len().div_ceil(8).max(1);
    for (index, point) in points.iter().enumerate() {
        let _ = write!(
            svg,
            r#"<circle class="chart-point" cx="{:.2}" cy="{:.2}" r="4"><title>{}: {} min</title></circle>"#,
            x(index),
            y(point.duration as f64),
            point.date,
            point.duration,
        );
        if index % label_every == 0 {
            let _ = write!(
                svg,
                r#"<text class="chart-label" x="{:.2}" y="{:.2}" text-anchor="middle">{}</text>"#,
                x(index),
                HEIGHT - PADDING_Y + 18.0,
                point.date.format("%m-%d"),
            );
        }
    }

    svg.push_str("</svg>");
    svg
}

pub fn render_calories_chart(points: &[CaloriesPoint]) -> String {
    if points.is_empty() {
        return empty_chart("Calories by exercise type");
    }

    let height = TOP + points.len() as f64 * BAR_ROW + PADDING_Y;
    let max = points.iter().map(|point| point.calories).max().unwrap_or(0).max(1) as f64;
    let bar_space = WIDTH - BAR_LABEL_WIDTH - BAR_VALUE_WIDTH;

    let mut svg = open_svg(height, "Calories by exercise type");

    let axis_y = height - PADDING_Y + 6.0;
    let _ = write!(
        svg,
        r#"<line class="chart-axis" x1="{BAR_LABEL_WIDTH}" y1="{TOP}" x2="{BAR_LABEL_WIDTH}" y2="{axis_y:.2}" />"#,
    );

    for (index, point) in points.iter().enumerate() {
        let top = TOP + index as f64 * BAR_ROW;
        let bar_width = (point.calories as f64 / max * bar_space).max(1.0);
        let _ = write!(
            svg,
            r#"<text class="chart-label" x="{:.2}" y="{:.2}" text-anchor="end">{}</text><rect class="chart-bar" x="{BAR_LABEL_WIDTH}" y="{:.2}" width="{bar_width:.2}" height="{:.2}" rx="4" /><text class="chart-label" x="{:.2}" y="{:.2}">{} kcal</text>"#,
            BAR_LABEL_WIDTH - 10.0,
            top + BAR_ROW / 2.0 + 4.0,
            point.label,
            top + 5.0,
            BAR_ROW - 10.0,
            BAR_LABEL_WIDTH + bar_width + 8.0,
            top + BAR_ROW / 2.0 + 4.0,
            point.calories,
        );
    }

    svg.push_str(&y_axis_label(TOP + (height - TOP - PADDING_Y) / 2.0, "Exercise type"));

    let _ = write!(
        svg,
        r#"<text class="chart-label" x="{:.2}" y="{:.2}" text-anchor="middle">Calories burned (kcal)</text>"#,
        BAR_LABEL_WIDTH + bar_space / 2.0,
        height - 8.0,
    );

    svg.push_str("</svg>");
    svg
}

fn open_svg(height: f64, label: &str) -> String {
    format!(
        r#"<svg class="chart" viewBox="0 0 {WIDTH} {height}" role="img" aria-label="{label}">"#
    )
}

fn y_axis_label(center_y: f64, text: &str) -> String {
    format!(
        r#"<text class="chart-label chart-axis-title" x="12" y="{center_y:.2}" text-anchor="middle" transform="rotate(-90 12 {center_y:.2})">{text}</text>"#
    )
}

fn empty_chart(label: &str) -> String {
    let mut svg = open_svg(120.0, label);
    let _ = write!(
        svg,
        r#"<text class="chart-label" x="50%" y="50%" text-anchor="middle">{EMPTY_MESSAGE}</text></svg>"#
    );
    svg
}

fn format_axis_value(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}
