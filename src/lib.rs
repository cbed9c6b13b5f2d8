//! asset-blueprint: interactive product blueprint for the Asset Manager app.
//!
//! This crate renders a pan/zoom canvas of mobile or desktop mockup screens
//! joined by labeled flow arrows, alongside a static requirements page and
//! an embedded design board.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;
pub mod config;

pub use components::blueprint::{BlueprintCanvas, DeviceClass, Point};
pub use components::shell::{ActiveView, Shell};
pub use config::{BlueprintConfig, ConfigError, load_config};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("asset-blueprint: logging initialized");
}

/// Main application component.
/// Reads the boot configuration from the DOM and mounts the shell.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Asset Manager Blueprint" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Shell config=config />
	}
}
