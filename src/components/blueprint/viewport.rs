//! Pan/zoom state and the drag gesture state machine.
//!
//! The controller is plain data driven by already-decoded input: the shell
//! translates DOM events into calls on [`ViewportController`] and renders
//! from the resulting [`ViewportState`]. Zoom and pan are clamped where they
//! are mutated, so an out-of-range viewport cannot be observed.
//!
//! ```text
//!            press (button 0/1, non-control) | single touch
//!    Idle  ─────────────────────────────────────────────▶  Dragging
//!      ▲                                                     │ move: pan = snapshot + (pointer - start)
//!      └────────────── release | leave | touch end ─────────┘
//! ```

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use super::types::Point;

/// Zoom on first load; zoomed out so several frames are visible.
pub const DEFAULT_ZOOM: f64 = 0.4;
/// Pan on first load.
pub const DEFAULT_PAN: Point = Point::new(100.0, 100.0);

/// Bounds for modifier+wheel zoom.
pub const WHEEL_ZOOM_RANGE: (f64, f64) = (0.2, 2.0);
/// Bounds for the zoom in/out buttons. Narrower than the wheel range on
/// purpose; the two are kept per trigger source.
pub const BUTTON_ZOOM_RANGE: (f64, f64) = (0.2, 1.5);
/// Zoom change per button press.
pub const ZOOM_STEP: f64 = 0.1;
/// Zoom change per unit of vertical wheel delta.
pub const WHEEL_ZOOM_SENSITIVITY: f64 = 0.002;

/// Tag names of elements that keep their own pointer interaction.
const INTERACTIVE_TAGS: [&str; 5] = ["INPUT", "BUTTON", "SELECT", "TEXTAREA", "A"];

/// Whether an element with this tag name should receive presses directly
/// instead of starting a pan.
pub fn is_interactive_tag(tag_name: &str) -> bool {
	INTERACTIVE_TAGS
		.iter()
		.any(|t| t.eq_ignore_ascii_case(tag_name))
}

/// What a press landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressTarget {
	/// Canvas background, a frame, or non-interactive screen content.
	Canvas,
	/// A form control or link inside a mock screen.
	Control,
}

impl PressTarget {
	/// Classify a press by the DOM tag name of its target.
	pub fn from_tag_name(tag_name: &str) -> Self {
		if is_interactive_tag(tag_name) {
			PressTarget::Control
		} else {
			PressTarget::Canvas
		}
	}
}

/// Pan and zoom applied to the whole canvas layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
	/// Scale factor, always within [`WHEEL_ZOOM_RANGE`].
	pub zoom: f64,
	/// Translation in screen pixels, unconstrained.
	pub pan: Point,
}

impl Default for ViewportState {
	fn default() -> Self {
		Self {
			zoom: DEFAULT_ZOOM,
			pan: DEFAULT_PAN,
		}
	}
}

impl ViewportState {
	/// Initial viewport with a zoom clamped into the wheel range.
	pub fn new(zoom: f64, pan: Point) -> Self {
		Self {
			zoom: zoom.clamp(WHEEL_ZOOM_RANGE.0, WHEEL_ZOOM_RANGE.1),
			pan,
		}
	}

	/// CSS transform for the canvas layer.
	pub fn css_transform(&self) -> String {
		format!(
			"translate({}px, {}px) scale({})",
			self.pan.x, self.pan.y, self.zoom
		)
	}

	/// Zoom as a whole percentage for display.
	pub fn zoom_percent(&self) -> i64 {
		(self.zoom * 100.0).round() as i64
	}
}

/// An in-progress pan gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
	/// Whether a drag is in progress.
	pub active: bool,
	/// Pointer position when the drag began (client coordinates).
	pub start: Point,
	/// Pan offset when the drag began.
	pub pan_start: Point,
}

/// Outcome of a wheel event, telling the caller whether to suppress the
/// page's own scrolling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelAction {
	/// Zoom changed; the default scroll must be prevented.
	Zoomed,
	/// Pan changed.
	Panned,
	/// Controller disabled, nothing happened.
	Ignored,
}

/// Owns the viewport and the drag gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportController {
	state: ViewportState,
	drag: DragState,
	enabled: bool,
}

impl Default for ViewportController {
	fn default() -> Self {
		Self::new(ViewportState::default())
	}
}

impl ViewportController {
	/// Idle, enabled controller starting at `state`.
	pub fn new(state: ViewportState) -> Self {
		Self {
			state,
			drag: DragState::default(),
			enabled: true,
		}
	}

	/// Current pan and zoom.
	pub fn state(&self) -> ViewportState {
		self.state
	}

	/// Current gesture snapshot.
	pub fn drag(&self) -> DragState {
		self.drag
	}

	/// Whether a drag is in progress.
	pub fn is_dragging(&self) -> bool {
		self.drag.active
	}

	/// Whether input is accepted.
	pub fn is_enabled(&self) -> bool {
		self.enabled
	}

	/// Enable or disable all interaction. Disabling ends any drag.
	pub fn set_enabled(&mut self, enabled: bool) {
		self.enabled = enabled;
		if !enabled {
			self.release();
		}
	}

	/// Pointer pressed. Returns `true` if a drag started, in which case the
	/// caller should prevent the browser's default (text selection).
	pub fn press(&mut self, button: i16, at: Point, target: PressTarget) -> bool {
		if !self.enabled || target == PressTarget::Control {
			return false;
		}
		// 0 = primary, 1 = middle
		if button != 0 && button != 1 {
			return false;
		}
		self.begin(at);
		true
	}

	/// Touch started with `touches` active touches; `at` is the first one.
	pub fn touch_start(&mut self, touches: u32, at: Point, target: PressTarget) -> bool {
		if !self.enabled || target == PressTarget::Control || touches != 1 {
			return false;
		}
		self.begin(at);
		true
	}

	/// Pointer moved to `at`. No effect unless dragging.
	pub fn move_to(&mut self, at: Point) {
		if !self.enabled || !self.drag.active {
			return;
		}
		self.state.pan = Point::new(
			self.drag.pan_start.x + (at.x - self.drag.start.x),
			self.drag.pan_start.y + (at.y - self.drag.start.y),
		);
	}

	/// Touch moved. Multi-touch moves leave the pan untouched.
	pub fn touch_move(&mut self, touches: u32, at: Point) {
		if touches != 1 {
			return;
		}
		self.move_to(at);
	}

	/// Pointer released, left the canvas, or touch ended.
	pub fn release(&mut self) {
		self.drag.active = false;
	}

	/// Wheel or trackpad scroll. With a zoom modifier held (ctrl or meta)
	/// the vertical delta zooms; otherwise both axes pan.
	pub fn wheel(&mut self, delta_x: f64, delta_y: f64, zoom_modifier: bool) -> WheelAction {
		if !self.enabled {
			return WheelAction::Ignored;
		}
		if zoom_modifier {
			let zoom = self.state.zoom - delta_y * WHEEL_ZOOM_SENSITIVITY;
			self.state.zoom = zoom.clamp(WHEEL_ZOOM_RANGE.0, WHEEL_ZOOM_RANGE.1);
			WheelAction::Zoomed
		} else {
			self.state.pan.x -= delta_x;
			self.state.pan.y -= delta_y;
			WheelAction::Panned
		}
	}

	/// Step zoom up, capped at the button range's upper bound. A wheel zoom
	/// above that bound is pulled back down to it.
	pub fn zoom_in(&mut self) {
		if self.enabled {
			self.state.zoom = (self.state.zoom + ZOOM_STEP).min(BUTTON_ZOOM_RANGE.1);
		}
	}

	/// Step zoom down, floored at the button range's lower bound.
	pub fn zoom_out(&mut self) {
		if self.enabled {
			self.state.zoom = (self.state.zoom - ZOOM_STEP).max(BUTTON_ZOOM_RANGE.0);
		}
	}

	fn begin(&mut self, at: Point) {
		self.drag = DragState {
			active: true,
			start: at,
			pan_start: self.state.pan,
		};
	}
}
