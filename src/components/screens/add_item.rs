use leptos::prelude::*;

use super::shared::{Button, StandardLayout, Tab, Variant};
use crate::components::blueprint::DeviceClass;

const CATEGORIES: [&str; 3] = ["Laptop", "Monitor", "Furniture"];

#[component]
fn TextField(label: &'static str, kind: &'static str, placeholder: &'static str) -> impl IntoView {
	view! {
		<div class="field">
			<label>{label}</label>
			<input type=kind placeholder=placeholder />
		</div>
	}
}

#[component]
pub fn AddItemScreen(device: DeviceClass) -> impl IntoView {
	let options = CATEGORIES.iter().map(|c| view! { <option>{*c}</option> }).collect_view();

	view! {
		<StandardLayout title="Add New Asset" active=Tab::Assets device=device show_back=true>
			<div class="card form-card">
				<h3 class="form-card__section">"Core Information"</h3>
				<div class="form-stack">
					<TextField label="Asset Name" kind="text" placeholder="e.g. MacBook Pro 16" />
					<div class="field">
						<label>"Category"</label>
						<select>{options}</select>
					</div>
					<TextField label="Serial Number" kind="text" placeholder="S/N..." />
					<TextField label="Purchase Cost" kind="number" placeholder="0.00" />
				</div>
				<h3 class="form-card__section">"Assignment"</h3>
				<div class="assign-row">
					<div class="avatar avatar--empty" aria-hidden="true">"👤"</div>
					<div class="assign-row__text">
						<p class="assign-row__title">"Assign to User"</p>
						<p class="muted">"Search for an employee..."</p>
					</div>
					<Button variant=Variant::Secondary small=true>"Select"</Button>
				</div>
			</div>
			<div class="card form-footer">
				<Button full_width=true>"Save Asset"</Button>
			</div>
		</StandardLayout>
	}
}
