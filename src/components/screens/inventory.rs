use leptos::prelude::*;

use super::shared::{StandardLayout, Tab};
use crate::components::blueprint::DeviceClass;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Status {
	Active,
	Maintenance,
	Retired,
}

impl Status {
	fn dot_class(self) -> &'static str {
		match self {
			Status::Active => "status-dot status-dot--active",
			Status::Maintenance => "status-dot status-dot--maint",
			Status::Retired => "status-dot status-dot--retired",
		}
	}

	fn icon_class(self) -> &'static str {
		if self == Status::Active {
			"asset-row__icon asset-row__icon--active"
		} else {
			"asset-row__icon"
		}
	}
}

struct Asset {
	id: &'static str,
	name: &'static str,
	category: &'static str,
	status: Status,
}

const ASSETS: [Asset; 6] = [
	Asset {
		id: "AST-001",
		name: "MacBook Pro M2",
		category: "Laptop",
		status: Status::Active,
	},
	Asset {
		id: "AST-002",
		name: "Dell UltraSharp",
		category: "Monitor",
		status: Status::Active,
	},
	Asset {
		id: "AST-003",
		name: "Herman Miller",
		category: "Furniture",
		status: Status::Maintenance,
	},
	Asset {
		id: "AST-004",
		name: "iPad Pro 12.9",
		category: "Tablet",
		status: Status::Retired,
	},
	Asset {
		id: "AST-005",
		name: "Logitech MX",
		category: "Peripheral",
		status: Status::Active,
	},
	Asset {
		id: "AST-006",
		name: "Conference TV",
		category: "Monitor",
		status: Status::Active,
	},
];

#[component]
pub fn InventoryScreen(device: DeviceClass) -> impl IntoView {
	let rows = ASSETS
		.iter()
		.map(|asset| {
			view! {
				<div class="asset-row" data-asset=asset.id>
					<div class="asset-row__main">
						<div class=asset.status.icon_class() aria-hidden="true">"▣"</div>
						<div>
							<p class="asset-row__name">{asset.name}</p>
							<p class="asset-row__meta">{format!("{} • {}", asset.id, asset.category)}</p>
						</div>
					</div>
					<div class="asset-row__trail">
						<span class=asset.status.dot_class()></span>
						<span class="asset-row__arrow" aria-hidden="true">"→"</span>
					</div>
				</div>
			}
		})
		.collect_view();

	let fab = match device {
		DeviceClass::Mobile => view! {
			<div class="fab fab--mobile">
				<button class="fab__button">"+"</button>
			</div>
		}
		.into_any(),
		DeviceClass::Desktop => view! {
			<div class="fab fab--desktop">
				<button class="fab__button">
					"+"
					<span class="fab__label">"New Asset"</span>
				</button>
			</div>
		}
		.into_any(),
	};

	view! {
		<StandardLayout title="Inventory" active=Tab::Assets device=device show_back=true>
			<div class="search">
				<span class="search__icon" aria-hidden="true">"⌕"</span>
				<input class="search__input" placeholder="Search assets..." />
				<span class="search__filter" aria-hidden="true">"⚲"</span>
			</div>
			<div class="stack stack--tight">{rows}</div>
			{fab}
		</StandardLayout>
	}
}
