use std::f64::consts::{FRAC_PI_2, TAU};

use dsa_core::model::Difficulty;
use dsa_core::stats::{DifficultyCounts, OverallProgress};

const CENTER: f64 = 100.0;
const OUTER_RADIUS: f64 = 96.0;
/// Hole size as a fraction of the outer radius.
const CUTOUT: f64 = 0.65;

const COMPLETED_FILL: &str = "rgb(74, 222, 128)";
const COMPLETED_BORDER: &str = "rgb(34, 197, 94)";
const REMAINING_FILL: &str = "rgb(203, 213, 225)";
const REMAINING_BORDER: &str = "rgb(148, 163, 184)";

#[derive(Clone, Debug, PartialEq)]
pub struct DonutSegmentVm {
    pub label: String,
    pub fill: &'static str,
    pub border: &'static str,
    /// SVG path data for the ring slice.
    pub path: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegendItemVm {
    pub label: String,
    pub value: usize,
    pub fill: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DonutVm {
    pub title: Option<String>,
    pub segments: Vec<DonutSegmentVm>,
    pub legend: Vec<LegendItemVm>,
    /// Path of the empty track drawn when every value is zero.
    pub track: Option<String>,
}

struct Slice {
    label: &'static str,
    value: usize,
    fill: &'static str,
    border: &'static str,
}

#[must_use]
pub fn overall_donut(progress: OverallProgress) -> DonutVm {
    let slices = [
        Slice {
            label: "Completed",
            value: progress.completed,
            fill: COMPLETED_FILL,
            border: COMPLETED_BORDER,
        },
        Slice {
            label: "Remaining",
            value: progress.remaining(),
            fill: REMAINING_FILL,
            border: REMAINING_BORDER,
        },
    ];
    let mut vm = build_donut(&slices);
    vm.title = Some(format!("Overall Completion: {}%", progress.percentage_label()));
    vm
}

#[must_use]
pub fn difficulty_donut(counts: DifficultyCounts) -> DonutVm {
    let slices = Difficulty::ALL.map(|difficulty| Slice {
        label: difficulty.as_str(),
        value: counts.get(difficulty),
        fill: difficulty_fill(difficulty),
        border: difficulty_border(difficulty),
    });
    build_donut(&slices)
}

fn difficulty_fill(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "rgb(74, 222, 128)",
        Difficulty::Medium => "rgb(251, 191, 36)",
        Difficulty::Hard => "rgb(239, 68, 68)",
    }
}

fn difficulty_border(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "rgb(34, 197, 94)",
        Difficulty::Medium => "rgb(245, 158, 11)",
        Difficulty::Hard => "rgb(220, 38, 38)",
    }
}

#[allow(clippy::cast_precision_loss)]
fn build_donut(slices: &[Slice]) -> DonutVm {
    let legend = slices
        .iter()
        .map(|slice| LegendItemVm {
            label: slice.label.to_string(),
            value: slice.value,
            fill: slice.fill,
        })
        .collect();

    let total: usize = slices.iter().map(|slice| slice.value).sum();
    if total == 0 {
        return DonutVm {
            title: None,
            segments: Vec::new(),
            legend,
            track: Some(full_ring_path()),
        };
    }

    let mut segments = Vec::new();
    let mut start = -FRAC_PI_2;
    for slice in slices.iter().filter(|slice| slice.value > 0) {
        let sweep = slice.value as f64 / total as f64 * TAU;
        let path = if slice.value == total {
            full_ring_path()
        } else {
            ring_slice_path(start, sweep)
        };
        segments.push(DonutSegmentVm {
            label: slice.label.to_string(),
            fill: slice.fill,
            border: slice.border,
            path,
        });
        start += sweep;
    }

    DonutVm {
        title: None,
        segments,
        legend,
        track: None,
    }
}

fn inner_radius() -> f64 {
    OUTER_RADIUS * CUTOUT
}

fn point(radius: f64, angle: f64) -> (f64, f64) {
    (CENTER + radius * angle.cos(), CENTER + radius * angle.sin())
}

fn ring_slice_path(start: f64, sweep: f64) -> String {
    let inner = inner_radius();
    let end = start + sweep;
    let large = u8::from(sweep > std::f64::consts::PI);
    let (ox0, oy0) = point(OUTER_RADIUS, start);
    let (ox1, oy1) = point(OUTER_RADIUS, end);
    let (ix1, iy1) = point(inner, end);
    let (ix0, iy0) = point(inner, start);
    format!(
        "M{ox0:.3} {oy0:.3} A{OUTER_RADIUS:.3} {OUTER_RADIUS:.3} 0 {large} 1 {ox1:.3} {oy1:.3} \
         L{ix1:.3} {iy1:.3} A{inner:.3} {inner:.3} 0 {large} 0 {ix0:.3} {iy0:.3} Z"
    )
}

/// A whole ring; arcs cannot span 360 degrees so each circle is two halves.
/// Rendered with `fill-rule: evenodd`.
fn full_ring_path() -> String {
    let inner = inner_radius();
    let top_outer = CENTER - OUTER_RADIUS;
    let bottom_outer = CENTER + OUTER_RADIUS;
    let top_inner = CENTER - inner;
    let bottom_inner = CENTER + inner;
    format!(
        "M{CENTER:.3} {top_outer:.3} A{OUTER_RADIUS:.3} {OUTER_RADIUS:.3} 0 1 1 {CENTER:.3} {bottom_outer:.3} \
         A{OUTER_RADIUS:.3} {OUTER_RADIUS:.3} 0 1 1 {CENTER:.3} {top_outer:.3} \
         M{CENTER:.3} {top_inner:.3} A{inner:.3} {inner:.3} 0 1 0 {CENTER:.3} {bottom_inner:.3} \
         A{inner:.3} {inner:.3} 0 1 0 {CENTER:.3} {top_inner:.3} Z"
    )
}
