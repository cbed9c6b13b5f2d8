use super::*;

#[test]
fn opaque_color_renders_as_hex() {
	assert_eq!(Color::rgb(16, 185, 129).to_css(), "#10b981");
	assert_eq!(Color::rgb(0, 0, 0).to_css(), "#000000");
}

#[test]
fn translucent_color_renders_as_rgba() {
	assert_eq!(
		Color::rgba(255, 255, 255, 0.9).to_css(),
		"rgba(255, 255, 255, 0.9)"
	);
	assert_eq!(
		Color::rgb(1, 2, 3).with_alpha(0.5).to_css(),
		"rgba(1, 2, 3, 0.5)"
	);
}

#[test]
fn arrowhead_points_at_marker_tip() {
	let theme = Theme::default();
	assert_eq!(theme.arrow_points(), "0 0, 10 3.5, 0 7");
	assert_eq!(theme.arrow_ref(), (9.0, 3.5));
}

#[test]
fn overlay_covers_desktop_layout() {
	use crate::components::blueprint::geometry::frame_size;
	use crate::components::blueprint::layout::build_layout;
	use crate::components::blueprint::types::DeviceClass;

	let theme = Theme::default();
	let layout = build_layout(DeviceClass::Desktop);
	let size = frame_size(DeviceClass::Desktop);
	for node in &layout.nodes {
		assert!(node.position.x + size.width <= theme.overlay_extent);
		assert!(node.position.y + size.height <= theme.overlay_extent);
	}
}
