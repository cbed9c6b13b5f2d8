//! Frame sizes, anchor points and connector curves.
//!
//! Everything here is a pure function of node positions and the device
//! class. Nodes store only their top-left corner; centers and anchors are
//! derived on demand.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::collections::HashMap;
use std::fmt;

use super::types::{Connection, DeviceClass, Node, Point, Size};

/// Which end of a connection an anchor belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
	/// Source side: the right edge midpoint.
	Start,
	/// Target side: the left edge midpoint.
	End,
}

/// Frame bounding box for a device class.
pub fn frame_size(device: DeviceClass) -> Size {
	match device {
		DeviceClass::Mobile => Size {
			width: 320.0,
			height: 640.0,
		},
		DeviceClass::Desktop => Size {
			width: 800.0,
			height: 540.0,
		},
	}
}

/// Center of a node's frame.
pub fn node_center(node: &Node, size: Size) -> Point {
	Point::new(
		node.position.x + size.width / 2.0,
		node.position.y + size.height / 2.0,
	)
}

/// Edge midpoint a connector attaches to. Flow runs left to right, so a
/// node can be the start of one connection and the end of another.
pub fn anchor_point(node: &Node, size: Size, anchor: Anchor) -> Point {
	let y = node.position.y + size.height / 2.0;
	match anchor {
		Anchor::Start => Point::new(node.position.x + size.width, y),
		Anchor::End => Point::new(node.position.x, y),
	}
}

/// A cubic bezier from one anchor to another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BezierPath {
	/// Source anchor.
	pub start: Point,
	/// Control point on the source's horizontal.
	pub control1: Point,
	/// Control point on the target's horizontal.
	pub control2: Point,
	/// Target anchor.
	pub end: Point,
}

impl BezierPath {
	/// Horizontal S-curve between two anchors.
	///
	/// Control points are pulled half the horizontal distance inwards along
	/// x, so the curve leaves and enters horizontally. With no horizontal
	/// distance they coincide with the anchors and the curve is a straight
	/// line.
	pub fn between(start: Point, end: Point) -> Self {
		let pull = (end.x - start.x).abs() * 0.5;
		Self {
			start,
			control1: Point::new(start.x + pull, start.y),
			control2: Point::new(end.x - pull, end.y),
			end,
		}
	}

	/// SVG path data.
	pub fn to_svg(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for BezierPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"M {} {} C {} {}, {} {}, {} {}",
			self.start.x,
			self.start.y,
			self.control1.x,
			self.control1.y,
			self.control2.x,
			self.control2.y,
			self.end.x,
			self.end.y
		)
	}
}

/// Index nodes by id for endpoint lookups.
pub fn nodes_by_id(nodes: &[Node]) -> HashMap<&'static str, &Node> {
	nodes.iter().map(|n| (n.id, n)).collect()
}

/// Curve for a connection, or `None` if either endpoint is not a known node.
pub fn connection_path(
	connection: &Connection,
	nodes: &HashMap<&'static str, &Node>,
	size: Size,
) -> Option<BezierPath> {
	let from = nodes.get(connection.from)?;
	let to = nodes.get(connection.to)?;
	Some(BezierPath::between(
		anchor_point(from, size, Anchor::Start),
		anchor_point(to, size, Anchor::End),
	))
}

/// Where a connection label is centered: halfway between the two node
/// centers. This is the chord midpoint, not the curve midpoint; the two
/// stay close because the control points sit on the anchors' horizontals.
pub fn label_position(from: &Node, to: &Node, size: Size) -> Point {
	let (a, b) = (node_center(from, size), node_center(to, size));
	Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}
