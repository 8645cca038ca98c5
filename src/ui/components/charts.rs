//! Minimal SVG/CSS charts: pie, horizontal bars and a line trend.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use dioxus::prelude::*;

use crate::ui::theme;
use crate::util::format_thousands;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartDatum {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
}

impl ChartDatum {
    pub fn new(label: impl Into<String>, value: f64, color: &'static str) -> Self {
        Self {
            label: label.into(),
            value,
            color,
        }
    }
}

// ============================================
// GEOMETRY
// ============================================

#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub datum: ChartDatum,
    pub fraction: f64,
    /// Radians, clockwise from twelve o'clock.
    pub start: f64,
    pub end: f64,
}

impl PieSlice {
    pub fn is_full_circle(&self) -> bool {
        self.fraction >= 1.0 - 1e-9
    }

    pub fn mid_angle(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Slices for every positive datum; empty when nothing is positive.
pub fn pie_slices(data: &[ChartDatum]) -> Vec<PieSlice> {
    let total: f64 = data.iter().map(|d| d.value.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut cursor = 0.0;
    data.iter()
        .filter(|d| d.value > 0.0)
        .map(|datum| {
            let fraction = datum.value / total;
            let start = cursor;
            cursor += fraction * TAU;
            PieSlice {
                datum: datum.clone(),
                fraction,
                start,
                end: cursor,
            }
        })
        .collect()
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    let a = angle - FRAC_PI_2;
    (cx + r * a.cos(), cy + r * a.sin())
}

/// SVG path for a wedge between two angles.
pub fn arc_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let (x0, y0) = polar(cx, cy, r, start);
    let (x1, y1) = polar(cx, cy, r, end);
    let large_arc = u8::from(end - start > PI);
    format!("M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z")
}

/// Bar lengths as a percentage of the largest value.
pub fn bar_percentages(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    values
        .iter()
        .map(|v| if max > 0.0 { (v.max(0.0) / max) * 100.0 } else { 0.0 })
        .collect()
}

/// Evenly spaced x, y scaled into `height - 2 * pad` (SVG y grows downward).
pub fn line_points(values: &[f64], width: f64, height: f64, pad: f64) -> Vec<(f64, f64)> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    let inner_w = width - 2.0 * pad;
    let inner_h = height - 2.0 * pad;
    let steps = values.len().saturating_sub(1);

    values
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            let x = if steps == 0 {
                width / 2.0
            } else {
                pad + inner_w * idx as f64 / steps as f64
            };
            let y = if span > 0.0 {
                pad + inner_h * (1.0 - (value - min) / span)
            } else {
                height / 2.0
            };
            (x, y)
        })
        .collect()
}

// ============================================
// COMPONENTS
// ============================================

const PIE_SIZE: f64 = 200.0;

#[component]
pub fn PieChart(title: String, data: Vec<ChartDatum>) -> Element {
    let slices = pie_slices(&data);
    let center = PIE_SIZE / 2.0;
    let radius = center - 4.0;

    rsx! {
        div { class: "chart-card {theme::PANEL}",
            h3 { class: "{theme::SECTION_TITLE}", "{title}" }
            if slices.is_empty() {
                p { class: "mt-4 text-sm {theme::TEXT_MUTED}", "Nothing to chart yet." }
            } else {
                svg {
                    class: "mx-auto mt-4 block",
                    width: "{PIE_SIZE}",
                    height: "{PIE_SIZE}",
                    view_box: "0 0 {PIE_SIZE} {PIE_SIZE}",
                    for slice in slices.iter() {
                        if slice.is_full_circle() {
                            circle { cx: "{center}", cy: "{center}", r: "{radius}", fill: slice.datum.color }
                        } else {
                            path {
                                d: arc_path(center, center, radius, slice.start, slice.end),
                                fill: slice.datum.color,
                                stroke: "#0f172a",
                                stroke_width: "1",
                            }
                        }
                    }
                    for slice in slices.iter() {
                        PieLabel { slice: slice.clone(), center, radius }
                    }
                }
                ul { class: "mt-4 space-y-1 text-xs",
                    for slice in slices.iter() {
                        li { class: "flex items-center justify-between gap-3 {theme::TEXT_SECONDARY}",
                            span { class: "flex items-center gap-2",
                                span { class: "legend-swatch", style: "background: {slice.datum.color}" }
                                "{slice.datum.label}"
                            }
                            span { class: "{theme::TEXT_MUTED}",
                                {format!("{} ({:.1}%)", format_thousands(slice.datum.value as u64), slice.fraction * 100.0)}
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PieLabel(slice: PieSlice, center: f64, radius: f64) -> Element {
    let (x, y) = if slice.is_full_circle() {
        (center, center)
    } else {
        polar(center, center, radius * 0.6, slice.mid_angle())
    };
    rsx! {
        text {
            x: "{x:.2}",
            y: "{y:.2}",
            class: "chart-label",
            text_anchor: "middle",
            dominant_baseline: "middle",
            {format!("{:.0}%", slice.fraction * 100.0)}
        }
    }
}

#[component]
pub fn BarChart(title: String, data: Vec<ChartDatum>, unit: &'static str) -> Element {
    let values: Vec<f64> = data.iter().map(|d| d.value).collect();
    let bars: Vec<(ChartDatum, f64)> = data.into_iter().zip(bar_percentages(&values)).collect();

    rsx! {
        div { class: "chart-card {theme::PANEL}",
            h3 { class: "{theme::SECTION_TITLE}", "{title}" }
            div { class: "mt-4 space-y-3",
                for (datum, pct) in bars {
                    div {
                        div { class: "flex justify-between text-xs {theme::TEXT_SECONDARY}",
                            span { "{datum.label}" }
                            span { class: "{theme::TEXT_MUTED}", {format!("{} {unit}", format_thousands(datum.value as u64))} }
                        }
                        div { class: "bar-track mt-1",
                            div { class: "bar-fill", style: "width: {pct:.1}%; background: {datum.color}" }
                        }
                    }
                }
            }
        }
    }
}

const LINE_WIDTH: f64 = 560.0;
const LINE_HEIGHT: f64 = 220.0;
const LINE_PAD: f64 = 24.0;

#[component]
pub fn LineChart(title: String, labels: Vec<String>, values: Vec<f64>, color: &'static str) -> Element {
    let points = line_points(&values, LINE_WIDTH, LINE_HEIGHT, LINE_PAD);
    let polyline = points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ");
    let markers: Vec<(f64, f64, f64, String, f64)> = points
        .iter()
        .zip(labels.iter().zip(values.iter()))
        .map(|((x, y), (label, value))| (*x, *y, y - 10.0, label.clone(), *value))
        .collect();
    let axis_y = LINE_HEIGHT - 4.0;

    rsx! {
        div { class: "chart-card {theme::PANEL}",
            h3 { class: "{theme::SECTION_TITLE}", "{title}" }
            svg {
                class: "mt-4 block w-full",
                view_box: "0 0 {LINE_WIDTH} {LINE_HEIGHT}",
                polyline {
                    points: "{polyline}",
                    fill: "none",
                    stroke: color,
                    stroke_width: "3",
                }
                for (x, y, value_y, label, value) in markers {
                    circle { cx: "{x:.1}", cy: "{y:.1}", r: "4", fill: color }
                    text {
                        x: "{x:.1}",
                        y: "{value_y:.1}",
                        class: "chart-label",
                        text_anchor: "middle",
                        {format_thousands(value as u64)}
                    }
                    text {
                        x: "{x:.1}",
                        y: "{axis_y:.1}",
                        class: "chart-axis",
                        text_anchor: "middle",
                        "{label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datum(value: f64) -> ChartDatum {
        ChartDatum::new("x", value, "#000000")
    }

    #[test]
    fn pie_slices_cover_the_full_turn() {
        let slices = pie_slices(&[datum(1.0), datum(2.0), datum(1.0)]);
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].start, 0.0);
        assert!((slices[1].fraction - 0.5).abs() < 1e-12);
        assert!((slices[2].end - TAU).abs() < 1e-9);
    }

    #[test]
    fn zero_values_are_left_out_of_the_pie() {
        let slices = pie_slices(&[datum(0.0), datum(5.0)]);
        assert_eq!(slices.len(), 1);
        assert!(slices[0].is_full_circle());
        assert!(pie_slices(&[datum(0.0)]).is_empty());
    }

    #[test]
    fn arc_path_flags_large_wedges() {
        let small = arc_path(100.0, 100.0, 50.0, 0.0, FRAC_PI_2);
        assert!(small.starts_with("M 100.00 100.00 L 100.00 50.00 A 50.00 50.00 0 0 1 150.00 100.00"));
        let large = arc_path(100.0, 100.0, 50.0, 0.0, 1.5 * PI);
        assert!(large.contains(" 0 1 1 "));
    }

    #[test]
    fn bars_scale_to_the_largest_value() {
        assert_eq!(bar_percentages(&[2.0, 1.0, 0.0]), vec![100.0, 50.0, 0.0]);
        assert_eq!(bar_percentages(&[0.0, 0.0]), vec![0.0, 0.0]);
    }

    #[test]
    fn line_points_span_the_padded_box() {
        let points = line_points(&[10.0, 20.0, 15.0], 100.0, 50.0, 5.0);
        assert_eq!(points, vec![(5.0, 45.0), (50.0, 5.0), (95.0, 25.0)]);
    }

    #[test]
    fn flat_or_single_series_sits_in_the_middle() {
        assert_eq!(line_points(&[7.0], 100.0, 50.0, 5.0), vec![(50.0, 25.0)]);
        let flat = line_points(&[3.0, 3.0], 100.0, 50.0, 5.0);
        assert!(flat.iter().all(|(_, y)| *y == 25.0));
    }
}
