//! Inline SVG charts for the dashboard screen.
//!
//! Geometry is computed here from constant series; the views only emit
//! paths and rects.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use std::f64::consts::PI;

use leptos::prelude::*;

/// One slice of a donut chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slice {
	pub name: &'static str,
	pub value: f64,
	pub color: &'static str,
}

/// Angular extent of a slice, in degrees clockwise from 12 o'clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sweep {
	pub start: f64,
	pub end: f64,
}

/// Split the circle proportionally among `values`, leaving `padding`
/// degrees between consecutive slices.
pub fn donut_sweeps(values: &[f64], padding: f64) -> Vec<Sweep> {
	let total: f64 = values.iter().sum();
	if total <= 0.0 || values.is_empty() {
		return Vec::new();
	}
	let available = 360.0 - padding * values.len() as f64;
	let mut cursor = 0.0;
	values
		.iter()
		.map(|v| {
			let span = available * v / total;
			let sweep = Sweep {
				start: cursor,
				end: cursor + span,
			};
			cursor += span + padding;
			sweep
		})
		.collect()
}

fn polar(cx: f64, cy: f64, r: f64, degrees: f64) -> (f64, f64) {
	let rad = (degrees - 90.0) * PI / 180.0;
	(cx + r * rad.cos(), cy + r * rad.sin())
}

/// SVG path for an annular sector.
pub fn annulus_path(cx: f64, cy: f64, inner: f64, outer: f64, sweep: Sweep) -> String {
	let large = u8::from(sweep.end - sweep.start > 180.0);
	let (ox0, oy0) = polar(cx, cy, outer, sweep.start);
	let (ox1, oy1) = polar(cx, cy, outer, sweep.end);
	let (ix1, iy1) = polar(cx, cy, inner, sweep.end);
	let (ix0, iy0) = polar(cx, cy, inner, sweep.start);
	format!(
		"M {ox0:.2} {oy0:.2} A {outer} {outer} 0 {large} 1 {ox1:.2} {oy1:.2} \
		 L {ix1:.2} {iy1:.2} A {inner} {inner} 0 {large} 0 {ix0:.2} {iy0:.2} Z"
	)
}

/// A bar positioned inside a chart box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

/// Lay out bars left to right, scaled so the largest value fills `height`.
/// Each bar takes `fill` of its slot's width.
pub fn bar_layout(values: &[f64], width: f64, height: f64, fill: f64) -> Vec<Bar> {
	let max = values.iter().copied().fold(0.0_f64, f64::max);
	if max <= 0.0 {
		return Vec::new();
	}
	let slot = width / values.len() as f64;
	let bar_width = slot * fill;
	values
		.iter()
		.enumerate()
		.map(|(i, v)| {
			let h = height * v / max;
			Bar {
				x: slot * i as f64 + (slot - bar_width) / 2.0,
				y: height - h,
				width: bar_width,
				height: h,
			}
		})
		.collect()
}

#[component]
pub fn DonutChart(slices: &'static [Slice]) -> impl IntoView {
	let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
	let sweeps = donut_sweeps(&values, 5.0);
	let paths = slices
		.iter()
		.zip(sweeps)
		.map(|(slice, sweep)| {
			view! { <path d={annulus_path(50.0, 50.0, 25.0, 40.0, sweep)} fill=slice.color /> }
		})
		.collect_view();

	view! {
		<svg class="donut-chart" viewBox="0 0 100 100" preserveAspectRatio="xMidYMid meet">
			{paths}
		</svg>
	}
}

#[component]
pub fn BarChart(values: &'static [(&'static str, f64)], color: &'static str) -> impl IntoView {
	let heights: Vec<f64> = values.iter().map(|(_, v)| *v).collect();
	let rects = bar_layout(&heights, 200.0, 96.0, 0.7)
		.into_iter()
		.zip(values.iter())
		.map(|(bar, (day, _))| {
			view! {
				<rect
					x=bar.x.to_string()
					y=bar.y.to_string()
					width=bar.width.to_string()
					height=bar.height.to_string()
					rx="2"
					fill=color
					data-day={*day}
				/>
			}
		})
		.collect_view();

	view! {
		<svg class="bar-chart" viewBox="0 0 200 96" preserveAspectRatio="none">
			{rects}
		</svg>
	}
}
