//! Fixed placement of the mock screens and the flows between them.
//!
//! The layout is a pure function of the device class: the same class always
//! yields the same nodes at the same positions, so the shell can memoize it
//! and swap the whole set when the class changes.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use log::{info, warn};
use thiserror::Error;

use super::geometry::{self, BezierPath};
use super::types::{Connection, DeviceClass, Node, Point, Size};
use crate::components::screens::Screen;

/// Row for the primary flow (login, dashboard).
const PRIMARY_ROW_Y: f64 = 400.0;
/// Row for the browse branch (inventory list, asset detail).
const BROWSE_ROW_Y: f64 = 100.0;

/// Row for the scan branch, 100 lower on desktop.
fn scan_row_y(device: DeviceClass) -> f64 {
	match device {
		DeviceClass::Mobile => 900.0,
		DeviceClass::Desktop => 1000.0,
	}
}

/// The flows drawn between screens. Independent of device class.
pub const CONNECTIONS: [Connection; 5] = [
	Connection {
		id: "c1",
		from: "login",
		to: "dashboard",
		label: Some("Success"),
	},
	Connection {
		id: "c2",
		from: "dashboard",
		to: "list",
		label: Some("View All"),
	},
	Connection {
		id: "c3",
		from: "list",
		to: "detail",
		label: Some("Select Item"),
	},
	Connection {
		id: "c4",
		from: "dashboard",
		to: "scan",
		label: Some("Quick Action"),
	},
	Connection {
		id: "c5",
		from: "scan",
		to: "add",
		label: Some("Code Detected"),
	},
];

/// A connection endpoint that does not name a node in the layout.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
	/// `node` is the `from` or `to` id of `connection`.
	#[error("connection {connection} references unknown node {node:?}")]
	UnresolvedEndpoint {
		/// Id of the connection.
		connection: &'static str,
		/// The node id that was not found.
		node: &'static str,
	},
}

/// A connection resolved against a concrete layout, ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
	/// Id of the connection this route draws.
	pub id: &'static str,
	/// Curve from the source's right anchor to the target's left anchor.
	pub path: BezierPath,
	/// Label text and its center in canvas space.
	pub label: Option<(&'static str, Point)>,
}

/// Nodes and connections for one device class.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
	/// Device class every node is framed for.
	pub device: DeviceClass,
	/// Screens, in paint order.
	pub nodes: Vec<Node>,
	/// Flows between screens, possibly naming absent nodes.
	pub connections: Vec<Connection>,
}

impl Layout {
	/// Frame size every node in this layout is drawn with.
	pub fn frame_size(&self) -> Size {
		geometry::frame_size(self.device)
	}

	/// Every connection endpoint that does not resolve to a node.
	pub fn validate(&self) -> Result<(), Vec<LayoutError>> {
		let index = geometry::nodes_by_id(&self.nodes);
		let errors: Vec<_> = self
			.connections
			.iter()
			.flat_map(|c| [(c.id, c.from), (c.id, c.to)])
			.filter(|(_, node)| !index.contains_key(node))
			.map(|(connection, node)| {
				LayoutError::UnresolvedEndpoint { connection, node }
			})
			.collect();
		if errors.is_empty() {
			Ok(())
		} else {
			Err(errors)
		}
	}

	/// Drawable routes. Connections with an unresolved endpoint are left
	/// out together with their labels; [`Layout::validate`] reports them.
	pub fn routes(&self) -> Vec<Route> {
		let size = self.frame_size();
		let index = geometry::nodes_by_id(&self.nodes);

		self.connections
			.iter()
			.filter_map(|connection| {
				let from = index.get(connection.from)?;
				let to = index.get(connection.to)?;
				let path = geometry::connection_path(connection, &index, size)?;
				Some(Route {
					id: connection.id,
					path,
					label: connection
						.label
						.map(|text| (text, geometry::label_position(from, to, size))),
				})
			})
			.collect()
	}
}

fn node(id: &'static str, title: &'static str, content: Screen, x: f64, y: f64) -> Node {
	Node {
		id,
		title,
		content,
		position: Point::new(x, y),
	}
}

/// Place the six screens for a device class.
pub fn build_layout(device: DeviceClass) -> Layout {
	let step = device.column_step();
	let scan_y = scan_row_y(device);

	Layout {
		device,
		nodes: vec![
			node("login", "Authentication", Screen::Login, 0.0, PRIMARY_ROW_Y),
			node(
				"dashboard",
				"Exec Dashboard",
				Screen::Dashboard,
				step,
				PRIMARY_ROW_Y,
			),
			node(
				"list",
				"Inventory List",
				Screen::Inventory,
				step * 2.0,
				BROWSE_ROW_Y,
			),
			node(
				"detail",
				"Asset Detail",
				Screen::AssetDetail,
				step * 3.0,
				BROWSE_ROW_Y,
			),
			node(
				"scan",
				"Barcode Scanner",
				Screen::Scanner,
				step * 2.0,
				scan_y,
			),
			node("add", "Add Asset", Screen::AddItem, step * 3.0, scan_y),
		],
		connections: CONNECTIONS.to_vec(),
	}
}

/// Build the layout for a device class and log any connection that will
/// not be drawn.
pub fn build_checked_layout(device: DeviceClass) -> Layout {
	let layout = build_layout(device);
	match layout.validate() {
		Ok(()) => info!(
			"blueprint: {} layout with {} screens, {} flows",
			device.as_str(),
			layout.nodes.len(),
			layout.connections.len()
		),
		Err(errors) => {
			for error in errors {
				warn!("blueprint: {error}; skipping it");
			}
		}
	}
	layout
}
