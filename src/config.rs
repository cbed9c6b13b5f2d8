//! Boot configuration read from the host page.
//!
//! The page may embed
//!
//! ```html
//! <script type="application/json" id="blueprint-config">
//!   { "device": "desktop", "zoom": 0.6, "pan": { "x": 40, "y": 20 } }
//! </script>
//! ```
//!
//! Every field is optional. A missing element yields the defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

use crate::components::blueprint::viewport::{DEFAULT_PAN, DEFAULT_ZOOM, ViewportState};
use crate::components::blueprint::{DeviceClass, Point};

/// Id of the script element holding the JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "blueprint-config";

/// Embed URL of the design board shown in the design-board view.
pub const DEFAULT_DESIGN_BOARD_URL: &str = "https://embed.figma.com/board/ozGf3JlsoNiKNNx6ia0bXd/\
	Asset---Inventory-Management-%E2%80%93-Decision-Based-Sub-Flow?node-id=0-1&embed-host=share";

/// Errors raised while reading the boot configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The element text is not a valid configuration object.
	#[error("malformed blueprint config: {0}")]
	Malformed(#[from] serde_json::Error),
}

/// Initial state of the blueprint application.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BlueprintConfig {
	/// Device class shown at startup.
	pub device: DeviceClass,
	/// Initial zoom factor. Clamped to the wheel zoom range on use.
	pub zoom: f64,
	/// Initial pan offset in screen pixels.
	pub pan: Point,
	/// URL embedded by the design-board view.
	pub design_board_url: String,
}

impl Default for BlueprintConfig {
	fn default() -> Self {
		Self {
			device: DeviceClass::default(),
			zoom: DEFAULT_ZOOM,
			pan: DEFAULT_PAN,
			design_board_url: DEFAULT_DESIGN_BOARD_URL.to_string(),
		}
	}
}

impl BlueprintConfig {
	/// Parse a configuration object. Absent fields take their defaults.
	pub fn from_json(text: &str) -> Result<Self, ConfigError> {
		Ok(serde_json::from_str(text)?)
	}

	/// Initial viewport, with zoom clamped.
	pub fn viewport(&self) -> ViewportState {
		ViewportState::new(self.zoom, self.pan)
	}
}

fn config_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Read the configuration from the page, falling back to defaults.
pub fn load_config() -> BlueprintConfig {
	let Some(text) = config_text() else {
		return BlueprintConfig::default();
	};

	match BlueprintConfig::from_json(&text) {
		Ok(config) => {
			info!(
				"asset-blueprint: config loaded (device {}, zoom {})",
				config.device.as_str(),
				config.zoom
			);
			config
		}
		Err(e) => {
			warn!("asset-blueprint: {}, using defaults", e);
			BlueprintConfig::default()
		}
	}
}
