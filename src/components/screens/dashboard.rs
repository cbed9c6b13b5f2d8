use leptos::prelude::*;

use super::chart::{BarChart, DonutChart, Slice};
use super::shared::{StandardLayout, Tab};
use crate::components::blueprint::DeviceClass;

const STATUS: [Slice; 3] = [
	Slice {
		name: "Active",
		value: 450.0,
		color: "#10b981",
	},
	Slice {
		name: "Maint",
		value: 120.0,
		color: "#f59e0b",
	},
	Slice {
		name: "Retired",
		value: 80.0,
		color: "#64748b",
	},
];

const CHECK_INS: [(&str, f64); 5] = [
	("Mon", 40.0),
	("Tue", 30.0),
	("Wed", 55.0),
	("Thu", 45.0),
	("Fri", 60.0),
];

#[component]
fn StatCard(
	label: &'static str,
	value: &'static str,
	note: &'static str,
	trend: bool,
) -> impl IntoView {
	let note_class = if trend {
		"stat-card__note stat-card__note--up"
	} else {
		"stat-card__note"
	};
	view! {
		<div class="card stat-card">
			<p class="stat-card__label">{label}</p>
			<div class="stat-card__row">
				<span class="stat-card__value">{value}</span>
				<span class=note_class>{note}</span>
			</div>
		</div>
	}
}

#[component]
pub fn DashboardScreen(device: DeviceClass) -> impl IntoView {
	let legend = STATUS
		.iter()
		.map(|s| {
			view! {
				<div class="legend__row">
					<span class="legend__dot" style=format!("background: {};", s.color)></span>
					<span>{s.name}</span>
					<span class="legend__value">{s.value.to_string()}</span>
				</div>
			}
		})
		.collect_view();

	view! {
		<StandardLayout title="Dashboard" active=Tab::Home device=device>
			<div class="stack">
				<div class="grid-2">
					<StatCard label="Total Assets" value="650" note="↗ +12%" trend=true />
					<StatCard label="Total Value" value="$1.2M" note="USD" trend=false />
				</div>
				<div class="card">
					<div class="card__title-row">
						<h3>"Asset Status"</h3>
						<span class="muted" aria-hidden="true">"⋯"</span>
					</div>
					<div class="status-chart">
						<DonutChart slices=&STATUS />
						<div class="legend">{legend}</div>
					</div>
				</div>
				<div class="card">
					<h3>"Check-ins/outs"</h3>
					<BarChart values=&CHECK_INS color="#10b981" />
				</div>
			</div>
		</StandardLayout>
	}
}
