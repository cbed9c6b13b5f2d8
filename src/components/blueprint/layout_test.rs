#![allow(clippy::float_cmp)]

use super::*;

fn ids(layout: &Layout) -> Vec<&'static str> {
	layout.nodes.iter().map(|n| n.id).collect()
}

fn position(layout: &Layout, id: &str) -> Point {
	layout
		.nodes
		.iter()
		.find(|n| n.id == id)
		.map(|n| n.position)
		.unwrap()
}

#[test]
fn six_nodes_in_fixed_order() {
	let layout = build_layout(DeviceClass::Mobile);
	assert_eq!(
		ids(&layout),
		["login", "dashboard", "list", "detail", "scan", "add"]
	);
}

#[test]
fn five_connections_link_the_flows() {
	let layout = build_layout(DeviceClass::Mobile);
	let pairs: Vec<_> = layout.connections.iter().map(|c| (c.from, c.to)).collect();
	assert_eq!(
		pairs,
		[
			("login", "dashboard"),
			("dashboard", "list"),
			("list", "detail"),
			("dashboard", "scan"),
			("scan", "add"),
		]
	);
	assert!(layout.connections.iter().all(|c| c.label.is_some()));
}

#[test]
fn layout_is_deterministic() {
	for device in [DeviceClass::Mobile, DeviceClass::Desktop] {
		let first = build_layout(device);
		for _ in 0..10 {
			assert_eq!(build_layout(device), first);
		}
		assert_eq!(format!("{:?}", build_layout(device)), format!("{first:?}"));
	}
}

#[test]
fn mobile_positions() {
	let layout = build_layout(DeviceClass::Mobile);
	assert_eq!(position(&layout, "login"), Point::new(0.0, 400.0));
	assert_eq!(position(&layout, "dashboard"), Point::new(800.0, 400.0));
	assert_eq!(position(&layout, "list"), Point::new(1600.0, 100.0));
	assert_eq!(position(&layout, "detail"), Point::new(2400.0, 100.0));
	assert_eq!(position(&layout, "scan"), Point::new(1600.0, 900.0));
	assert_eq!(position(&layout, "add"), Point::new(2400.0, 900.0));
}

#[test]
fn desktop_positions() {
	let layout = build_layout(DeviceClass::Desktop);
	assert_eq!(position(&layout, "login"), Point::new(0.0, 400.0));
	assert_eq!(position(&layout, "dashboard"), Point::new(1200.0, 400.0));
	assert_eq!(position(&layout, "list"), Point::new(2400.0, 100.0));
	assert_eq!(position(&layout, "detail"), Point::new(3600.0, 100.0));
	assert_eq!(position(&layout, "scan"), Point::new(2400.0, 1000.0));
	assert_eq!(position(&layout, "add"), Point::new(3600.0, 1000.0));
}

#[test]
fn desktop_spacing_is_wider_with_same_topology() {
	let mobile = build_layout(DeviceClass::Mobile);
	let desktop = build_layout(DeviceClass::Desktop);

	let gap = |l: &Layout| position(l, "dashboard").x - position(l, "login").x;
	assert!(gap(&desktop) > gap(&mobile));
	assert_eq!(ids(&mobile), ids(&desktop));
	assert_eq!(mobile.connections, desktop.connections);
}

#[test]
fn builtin_layouts_validate() {
	assert_eq!(build_layout(DeviceClass::Mobile).validate(), Ok(()));
	assert_eq!(build_layout(DeviceClass::Desktop).validate(), Ok(()));
}

#[test]
fn validate_reports_every_unresolved_endpoint() {
	let mut layout = build_layout(DeviceClass::Mobile);
	layout.connections.push(Connection {
		id: "c9",
		from: "nowhere",
		to: "missing",
		label: None,
	});

	let errors = layout.validate().unwrap_err();
	assert_eq!(
		errors,
		[
			LayoutError::UnresolvedEndpoint {
				connection: "c9",
				node: "nowhere",
			},
			LayoutError::UnresolvedEndpoint {
				connection: "c9",
				node: "missing",
			},
		]
	);
	assert_eq!(
		errors[0].to_string(),
		"connection c9 references unknown node \"nowhere\""
	);
}

#[test]
fn routes_cover_every_connection() {
	let layout = build_layout(DeviceClass::Mobile);
	let routes = layout.routes();
	assert_eq!(routes.len(), 5);
	assert_eq!(routes[0].id, "c1");
	assert_eq!(routes[0].path.start, Point::new(320.0, 720.0));
	assert_eq!(routes[0].path.end, Point::new(800.0, 720.0));
}

#[test]
fn route_labels_sit_between_node_centers() {
	let layout = build_layout(DeviceClass::Mobile);
	let routes = layout.routes();
	let (text, at) = routes[0].label.unwrap();
	assert_eq!(text, "Success");
	// centers (160, 720) and (960, 720)
	assert_eq!(at, Point::new(560.0, 720.0));
}

#[test]
fn unresolved_connection_is_skipped_with_its_label() {
	let mut layout = build_layout(DeviceClass::Desktop);
	layout.nodes.retain(|n| n.id != "scan");

	let routes = layout.routes();
	let route_ids: Vec<_> = routes.iter().map(|r| r.id).collect();
	assert_eq!(route_ids, ["c1", "c2", "c3"]);
}
