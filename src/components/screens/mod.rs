//! Static mock screens shown inside the blueprint's device frames.
//!
//! Every screen is hard-coded markup with inline constant data. Each has a
//! mobile and a desktop rendition; the blueprint only ever sees them
//! through [`Renderable`].

mod add_item;
mod chart;
mod dashboard;
mod detail;
mod inventory;
mod login;
mod scanner;
mod shared;

use leptos::prelude::*;

use crate::components::blueprint::{DeviceClass, Renderable};

use add_item::AddItemScreen;
use dashboard::DashboardScreen;
use detail::AssetDetailScreen;
use inventory::InventoryScreen;
use login::LoginScreen;
use scanner::ScannerScreen;

/// Content handle for a blueprint node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
	/// Sign-in form.
	Login,
	/// Stat cards, status donut and check-in bars.
	Dashboard,
	/// Searchable asset list.
	Inventory,
	/// Single asset with its history.
	AssetDetail,
	/// Camera viewfinder for barcode capture.
	Scanner,
	/// New asset form.
	AddItem,
}

impl Renderable for Screen {
	fn render(&self, device: DeviceClass) -> AnyView {
		match self {
			Screen::Login => view! { <LoginScreen device=device /> }.into_any(),
			Screen::Dashboard => view! { <DashboardScreen device=device /> }.into_any(),
			Screen::Inventory => view! { <InventoryScreen device=device /> }.into_any(),
			Screen::AssetDetail => view! { <AssetDetailScreen device=device /> }.into_any(),
			Screen::Scanner => view! { <ScannerScreen device=device /> }.into_any(),
			Screen::AddItem => view! { <AddItemScreen device=device /> }.into_any(),
		}
	}
}
