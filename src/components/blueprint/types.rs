//! Data structures shared by the blueprint geometry, layout and renderer.

use leptos::prelude::AnyView;
use serde::Deserialize;

use crate::components::screens::Screen;

/// Form factor the mock screens are rendered for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
	/// Phone frame, 320×640.
	#[default]
	Mobile,
	/// Browser window frame, 800×540.
	Desktop,
}

impl DeviceClass {
	/// Horizontal distance between layout columns.
	pub fn column_step(self) -> f64 {
		match self {
			DeviceClass::Mobile => 800.0,
			DeviceClass::Desktop => 1200.0,
		}
	}

	/// Short lowercase name, used in CSS classes and logs.
	pub fn as_str(self) -> &'static str {
		match self {
			DeviceClass::Mobile => "mobile",
			DeviceClass::Desktop => "desktop",
		}
	}
}

/// A position in canvas space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct Point {
	/// Horizontal coordinate, growing rightwards.
	pub x: f64,
	/// Vertical coordinate, growing downwards.
	pub y: f64,
}

impl Point {
	/// Point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Bounding box dimensions of a device frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
	/// Horizontal extent in canvas units.
	pub width: f64,
	/// Vertical extent in canvas units.
	pub height: f64,
}

/// Anything that can be drawn inside a device frame.
///
/// Nodes carry a content handle implementing this instead of being
/// specialised per screen.
pub trait Renderable {
	/// Render the content for the given device class. The result is laid
	/// out inside a fixed-size frame and must not assume any outer scale.
	fn render(&self, device: DeviceClass) -> AnyView;
}

/// A mock screen placed on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	/// Unique identifier, stable across device classes.
	pub id: &'static str,
	/// Display label shown as a badge above the frame.
	pub title: &'static str,
	/// Content rendered inside the frame.
	pub content: Screen,
	/// Top-left corner in canvas space.
	pub position: Point,
}

/// A directed flow arrow between two nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Connection {
	/// Unique identifier.
	pub id: &'static str,
	/// Source node id.
	pub from: &'static str,
	/// Target node id.
	pub to: &'static str,
	/// Text drawn on a pill at the midpoint, if any.
	pub label: Option<&'static str>,
}
