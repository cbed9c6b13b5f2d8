use leptos::prelude::*;

use super::shared::{Button, StandardLayout, Tab, Variant};
use crate::components::blueprint::DeviceClass;

#[component]
fn InfoTile(
	label: &'static str,
	value: &'static str,
	#[prop(optional)] highlight: bool,
) -> impl IntoView {
	let value_class = if highlight {
		"info-tile__value info-tile__value--ok"
	} else {
		"info-tile__value"
	};
	view! {
		<div class="card info-tile">
			<p class="info-tile__label">{label}</p>
			<p class=value_class>{value}</p>
		</div>
	}
}

#[component]
pub fn AssetDetailScreen(device: DeviceClass) -> impl IntoView {
	view! {
		<StandardLayout title="AST-001" active=Tab::Assets device=device show_back=true>
			<div class="stack detail">
				<div class="card detail__hero">
					<div class="detail__image" aria-hidden="true">"💻"</div>
					<h1 class="detail__name">"MacBook Pro M2"</h1>
					<div class="detail__tags">
						<span class="tag tag--ok">"Assigned"</span>
						<span class="tag">"Electronics"</span>
					</div>
				</div>
				<div class="grid-2">
					<InfoTile label="Purchase Date" value="Oct 24, 2023" />
					<InfoTile label="Warranty" value="Valid (2025)" highlight=true />
				</div>
				<div class="card">
					<h3 class="section-label">"Currently Assigned To"</h3>
					<div class="assignee">
						<div class="avatar">"JD"</div>
						<div>
							<p class="assignee__name">"Jane Doe"</p>
							<p class="muted">"Engineering Dept"</p>
						</div>
						<div class="assignee__action">
							<Button variant=Variant::Secondary small=true>"History"</Button>
						</div>
					</div>
				</div>
				<div class="grid-2">
					<Button variant=Variant::Secondary full_width=true small=true>"Report Issue"</Button>
					<Button full_width=true small=true>"Audit Check"</Button>
				</div>
			</div>
		</StandardLayout>
	}
}
