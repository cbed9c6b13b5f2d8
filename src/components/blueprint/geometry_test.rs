#![allow(clippy::float_cmp)]

use super::*;
use crate::components::screens::Screen;

fn node(id: &'static str, x: f64, y: f64) -> Node {
	Node {
		id,
		title: id,
		content: Screen::Login,
		position: Point::new(x, y),
	}
}

fn link(from: &'static str, to: &'static str) -> Connection {
	Connection {
		id: "c",
		from,
		to,
		label: None,
	}
}

// --- frame_size ---

#[test]
fn mobile_frame_is_phone_sized() {
	let size = frame_size(DeviceClass::Mobile);
	assert_eq!(size.width, 320.0);
	assert_eq!(size.height, 640.0);
}

#[test]
fn desktop_frame_is_browser_sized() {
	let size = frame_size(DeviceClass::Desktop);
	assert_eq!(size.width, 800.0);
	assert_eq!(size.height, 540.0);
}

// --- centers and anchors ---

#[test]
fn center_is_position_plus_half_size() {
	let n = node("a", 100.0, 200.0);
	let c = node_center(&n, frame_size(DeviceClass::Mobile));
	assert_eq!(c, Point::new(260.0, 520.0));
}

#[test]
fn start_anchor_is_right_edge_midpoint() {
	let n = node("a", 100.0, 200.0);
	let p = anchor_point(&n, frame_size(DeviceClass::Desktop), Anchor::Start);
	assert_eq!(p, Point::new(900.0, 470.0));
}

#[test]
fn end_anchor_is_left_edge_midpoint() {
	let n = node("a", 100.0, 200.0);
	let p = anchor_point(&n, frame_size(DeviceClass::Desktop), Anchor::End);
	assert_eq!(p, Point::new(100.0, 470.0));
}

#[test]
fn anchors_share_the_center_height() {
	for device in [DeviceClass::Mobile, DeviceClass::Desktop] {
		let size = frame_size(device);
		let nodes = [
			node("a", 0.0, 0.0),
			node("b", -35.5, 912.25),
			node("c", 2400.0, -10.0),
		];
		for n in nodes {
			let center = node_center(&n, size);
			assert_eq!(anchor_point(&n, size, Anchor::Start).y, center.y);
			assert_eq!(anchor_point(&n, size, Anchor::End).y, center.y);
		}
	}
}

// --- connection_path ---

#[test]
fn path_control_points_pull_half_the_horizontal_gap() {
	let nodes = [node("a", 0.0, 400.0), node("b", 800.0, 100.0)];
	let index = nodes_by_id(&nodes);
	let size = frame_size(DeviceClass::Mobile);
	let path = connection_path(&link("a", "b"), &index, size).unwrap();

	assert_eq!(path.start, Point::new(320.0, 720.0));
	assert_eq!(path.end, Point::new(800.0, 420.0));
	assert_eq!(path.control1, Point::new(560.0, 720.0));
	assert_eq!(path.control2, Point::new(560.0, 420.0));
}

#[test]
fn path_serializes_as_svg_cubic() {
	let nodes = [node("a", 0.0, 400.0), node("b", 800.0, 400.0)];
	let index = nodes_by_id(&nodes);
	let size = frame_size(DeviceClass::Mobile);
	let path = connection_path(&link("a", "b"), &index, size).unwrap();
	assert_eq!(path.to_svg(), "M 320 720 C 560 720, 560 720, 800 720");
}

#[test]
fn equal_x_degenerates_to_straight_line() {
	let size = frame_size(DeviceClass::Mobile);
	// Target's left edge sits exactly under the source's right edge.
	let nodes = [node("a", 0.0, 0.0), node("b", size.width, 900.0)];
	let index = nodes_by_id(&nodes);
	let path = connection_path(&link("a", "b"), &index, size).unwrap();

	assert_eq!(path.start.x, path.end.x);
	assert_eq!(path.control1, path.start);
	assert_eq!(path.control2, path.end);
}

#[test]
fn equal_y_keeps_endpoints_level() {
	let nodes = [node("a", 0.0, 250.0), node("b", 1200.0, 250.0)];
	let index = nodes_by_id(&nodes);
	let size = frame_size(DeviceClass::Desktop);
	let path = connection_path(&link("a", "b"), &index, size).unwrap();
	assert_eq!(path.start.y, path.end.y);
}

#[test]
fn backwards_connection_still_pulls_outwards() {
	let nodes = [node("a", 1600.0, 0.0), node("b", 0.0, 0.0)];
	let index = nodes_by_id(&nodes);
	let size = frame_size(DeviceClass::Mobile);
	let path = connection_path(&link("a", "b"), &index, size).unwrap();

	// start.x = 1920, end.x = 0, pull = 960
	assert_eq!(path.control1.x, 2880.0);
	assert_eq!(path.control2.x, -960.0);
}

#[test]
fn missing_endpoint_yields_no_path() {
	let nodes = [node("a", 0.0, 0.0)];
	let index = nodes_by_id(&nodes);
	let size = frame_size(DeviceClass::Mobile);
	for (from, to) in [("a", "ghost"), ("ghost", "a")] {
		assert!(connection_path(&link(from, to), &index, size).is_none());
	}
}

// --- label_position ---

#[test]
fn label_sits_between_node_centers() {
	let size = frame_size(DeviceClass::Mobile);
	let (a, b) = (node("a", 0.0, 400.0), node("b", 800.0, 100.0));
	// centers (160, 720) and (960, 420)
	assert_eq!(label_position(&a, &b, size), Point::new(560.0, 570.0));
}
