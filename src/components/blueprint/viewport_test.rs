#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
	(a - b).abs() < EPSILON
}

// --- target classification ---

#[test]
fn form_controls_and_links_are_interactive() {
	for tag in ["INPUT", "BUTTON", "SELECT", "TEXTAREA", "A", "input", "a"] {
		assert!(is_interactive_tag(tag), "{tag}");
		assert_eq!(PressTarget::from_tag_name(tag), PressTarget::Control);
	}
}

#[test]
fn layout_elements_are_not_interactive() {
	for tag in ["DIV", "SPAN", "svg", "path", "LABEL", "P", "ABBR"] {
		assert!(!is_interactive_tag(tag), "{tag}");
		assert_eq!(PressTarget::from_tag_name(tag), PressTarget::Canvas);
	}
}

// --- defaults ---

#[test]
fn default_viewport() {
	let state = ViewportState::default();
	assert_eq!(state.zoom, 0.4);
	assert_eq!(state.pan, Point::new(100.0, 100.0));
}

#[test]
fn initial_zoom_is_clamped_to_wheel_range() {
	assert_eq!(ViewportState::new(5.0, Point::default()).zoom, 2.0);
	assert_eq!(ViewportState::new(0.01, Point::default()).zoom, 0.2);
	assert_eq!(ViewportState::new(1.2, Point::default()).zoom, 1.2);
}

#[test]
fn controller_starts_idle_and_enabled() {
	let vc = ViewportController::default();
	assert!(!vc.is_dragging());
	assert!(vc.is_enabled());
	assert_eq!(vc.drag(), DragState::default());
}

#[test]
fn css_transform_translates_then_scales() {
	let state = ViewportState::new(0.5, Point::new(10.0, -20.5));
	assert_eq!(
		state.css_transform(),
		"translate(10px, -20.5px) scale(0.5)"
	);
}

#[test]
fn zoom_percent_rounds() {
	let percent = |zoom| ViewportState::new(zoom, Point::default()).zoom_percent();
	assert_eq!(ViewportState::default().zoom_percent(), 40);
	assert_eq!(percent(0.7000000000000001), 70);
	assert_eq!(percent(1.236), 124);
}

// --- drag ---

#[test]
fn primary_press_starts_drag_with_snapshot() {
	let mut vc = ViewportController::default();
	assert!(vc.press(0, Point::new(200.0, 200.0), PressTarget::Canvas));
	let drag = vc.drag();
	assert!(drag.active);
	assert_eq!(drag.start, Point::new(200.0, 200.0));
	assert_eq!(drag.pan_start, Point::new(100.0, 100.0));
}

#[test]
fn middle_press_starts_drag() {
	let mut vc = ViewportController::default();
	assert!(vc.press(1, Point::default(), PressTarget::Canvas));
	assert!(vc.is_dragging());
}

#[test]
fn secondary_press_is_ignored() {
	let mut vc = ViewportController::default();
	assert!(!vc.press(2, Point::default(), PressTarget::Canvas));
	assert!(!vc.is_dragging());
}

#[test]
fn press_on_control_never_drags() {
	let mut vc = ViewportController::default();
	let at = Point::new(5.0, 5.0);
	for button in [0, 1] {
		assert!(!vc.press(button, at, PressTarget::Control));
		assert!(!vc.is_dragging());
	}
	assert!(!vc.touch_start(1, at, PressTarget::Control));
	assert!(!vc.is_dragging());
}

#[test]
fn move_tracks_pointer_one_to_one() {
	let mut vc = ViewportController::default();
	vc.press(0, Point::new(200.0, 200.0), PressTarget::Canvas);
	vc.move_to(Point::new(250.0, 260.0));
	assert_eq!(vc.state().pan, Point::new(150.0, 160.0));
	vc.move_to(Point::new(190.0, 180.0));
	assert_eq!(vc.state().pan, Point::new(90.0, 80.0));
}

#[test]
fn pan_tracking_ignores_zoom() {
	for zoom in [0.2, 0.4, 1.0, 2.0] {
		let mut vc = ViewportController::new(ViewportState::new(zoom, Point::new(-30.0, 45.0)));
		vc.press(0, Point::new(10.0, 10.0), PressTarget::Canvas);
		vc.move_to(Point::new(17.0, -3.0));
		assert_eq!(vc.state().pan, Point::new(-23.0, 32.0));
		assert_eq!(vc.state().zoom, zoom);
	}
}

#[test]
fn move_without_drag_does_nothing() {
	let mut vc = ViewportController::default();
	vc.move_to(Point::new(999.0, 999.0));
	assert_eq!(vc.state(), ViewportState::default());
}

#[test]
fn release_returns_to_idle_and_freezes_pan() {
	let mut vc = ViewportController::default();
	vc.press(0, Point::new(0.0, 0.0), PressTarget::Canvas);
	vc.move_to(Point::new(10.0, 10.0));
	vc.release();
	assert!(!vc.is_dragging());
	vc.move_to(Point::new(500.0, 500.0));
	assert_eq!(vc.state().pan, Point::new(110.0, 110.0));
}

#[test]
fn second_drag_snapshots_current_pan() {
	let mut vc = ViewportController::default();
	vc.press(0, Point::new(0.0, 0.0), PressTarget::Canvas);
	vc.move_to(Point::new(10.0, 0.0));
	vc.release();
	vc.press(0, Point::new(50.0, 50.0), PressTarget::Canvas);
	vc.move_to(Point::new(55.0, 40.0));
	assert_eq!(vc.state().pan, Point::new(115.0, 90.0));
}

// --- touch ---

#[test]
fn single_touch_drags() {
	let mut vc = ViewportController::default();
	let at = Point::new(20.0, 20.0);
	assert!(vc.touch_start(1, at, PressTarget::Canvas));
	vc.touch_move(1, Point::new(25.0, 30.0));
	assert_eq!(vc.state().pan, Point::new(105.0, 110.0));
	vc.release();
	assert!(!vc.is_dragging());
}

#[test]
fn multi_touch_neither_starts_nor_continues() {
	let mut vc = ViewportController::default();
	let at = Point::new(20.0, 20.0);
	assert!(!vc.touch_start(2, at, PressTarget::Canvas));
	assert!(!vc.is_dragging());

	vc.touch_start(1, at, PressTarget::Canvas);
	vc.touch_move(2, Point::new(80.0, 80.0));
	assert_eq!(vc.state().pan, Point::new(100.0, 100.0));
}

// --- wheel ---

#[test]
fn plain_wheel_pans_unscaled() {
	let mut vc = ViewportController::new(ViewportState::new(2.0, Point::new(0.0, 0.0)));
	assert_eq!(vc.wheel(15.0, -40.0, false), WheelAction::Panned);
	assert_eq!(vc.state().pan, Point::new(-15.0, 40.0));
	assert_eq!(vc.state().zoom, 2.0);
}

#[test]
fn modifier_wheel_zooms() {
	let mut vc = ViewportController::default();
	assert_eq!(vc.wheel(0.0, -100.0, true), WheelAction::Zoomed);
	assert!(approx_eq(vc.state().zoom, 0.6));
	assert_eq!(vc.state().pan, DEFAULT_PAN);
}

#[test]
fn wheel_zoom_converges_to_bounds() {
	let mut vc = ViewportController::default();
	for _ in 0..100 {
		vc.wheel(0.0, -250.0, true);
		assert!(vc.state().zoom <= 2.0);
	}
	assert_eq!(vc.state().zoom, 2.0);

	for _ in 0..100 {
		vc.wheel(0.0, 250.0, true);
		assert!(vc.state().zoom >= 0.2);
	}
	assert_eq!(vc.state().zoom, 0.2);
}

#[test]
fn wheel_does_not_touch_drag_state() {
	let mut vc = ViewportController::default();
	vc.press(0, Point::new(0.0, 0.0), PressTarget::Canvas);
	vc.wheel(0.0, 10.0, false);
	assert!(vc.is_dragging());
}

// --- buttons ---

#[test]
fn zoom_buttons_step_by_a_tenth() {
	let mut vc = ViewportController::default();
	vc.zoom_in();
	assert!(approx_eq(vc.state().zoom, 0.5));
	vc.zoom_out();
	vc.zoom_out();
	assert!(approx_eq(vc.state().zoom, 0.3));
}

#[test]
fn zoom_in_converges_to_button_max() {
	let mut vc = ViewportController::default();
	for _ in 0..50 {
		vc.zoom_in();
		assert!(vc.state().zoom <= 1.5);
	}
	assert_eq!(vc.state().zoom, 1.5);
}

#[test]
fn zoom_out_converges_to_button_min() {
	let mut vc = ViewportController::new(ViewportState::new(1.5, DEFAULT_PAN));
	for _ in 0..50 {
		vc.zoom_out();
		assert!(vc.state().zoom >= 0.2);
	}
	assert_eq!(vc.state().zoom, 0.2);
}

#[test]
fn zoom_in_pulls_wheel_zoom_back_to_button_max() {
	let mut vc = ViewportController::new(ViewportState::new(1.9, DEFAULT_PAN));
	vc.zoom_in();
	assert_eq!(vc.state().zoom, 1.5);
}

// --- enable/disable ---

#[test]
fn disabled_controller_ignores_everything() {
	let mut vc = ViewportController::default();
	vc.set_enabled(false);

	let origin = Point::new(0.0, 0.0);
	assert!(!vc.press(0, origin, PressTarget::Canvas));
	assert!(!vc.touch_start(1, origin, PressTarget::Canvas));
	assert_eq!(vc.wheel(10.0, 10.0, false), WheelAction::Ignored);
	assert_eq!(vc.wheel(0.0, -100.0, true), WheelAction::Ignored);
	vc.zoom_in();
	vc.zoom_out();
	assert_eq!(vc.state(), ViewportState::default());
	assert!(!vc.is_dragging());
}

#[test]
fn disabling_mid_drag_releases() {
	let mut vc = ViewportController::default();
	vc.press(0, Point::new(0.0, 0.0), PressTarget::Canvas);
	vc.set_enabled(false);
	assert!(!vc.is_dragging());

	vc.set_enabled(true);
	vc.move_to(Point::new(40.0, 40.0));
	assert_eq!(vc.state().pan, DEFAULT_PAN);
}
