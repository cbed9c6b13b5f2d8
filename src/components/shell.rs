//! Top-level application shell: header toolbar and the three views.
//!
//! The shell owns all interactive state (active view, device class and the
//! viewport controller). Children only see read-only signals and callbacks.

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent, TouchEvent, WheelEvent};

use super::blueprint::layout::build_checked_layout;
use super::blueprint::viewport::{PressTarget, ViewportController, WheelAction};
use super::blueprint::{BlueprintCanvas, DeviceClass, Point};
use super::documentation::Documentation;
use crate::config::BlueprintConfig;

/// Which page fills the main area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveView {
	/// Pan/zoom canvas of device mockups.
	#[default]
	Blueprint,
	/// Product requirements document.
	Documentation,
	/// Embedded design board.
	DesignBoard,
}

impl ActiveView {
	/// Views in switcher order.
	pub const ALL: [ActiveView; 3] = [
		ActiveView::Blueprint,
		ActiveView::Documentation,
		ActiveView::DesignBoard,
	];

	/// Switcher button text.
	pub fn label(self) -> &'static str {
		match self {
			ActiveView::Blueprint => "Blueprint",
			ActiveView::Documentation => "Documentation",
			ActiveView::DesignBoard => "Design board",
		}
	}

	fn icon(self) -> &'static str {
		match self {
			ActiveView::Blueprint => "⌖",
			ActiveView::Documentation => "▤",
			ActiveView::DesignBoard => "◧",
		}
	}
}

fn press_target(ev: &Event) -> PressTarget {
	ev.target()
		.and_then(|target| target.dyn_into::<Element>().ok())
		.map(|element| PressTarget::from_tag_name(&element.tag_name()))
		.unwrap_or(PressTarget::Canvas)
}

fn first_touch(ev: &TouchEvent) -> Option<(u32, Point)> {
	let touches = ev.touches();
	let touch = touches.get(0)?;
	let at = Point::new(touch.client_x() as f64, touch.client_y() as f64);
	Some((touches.length(), at))
}

fn toggle_class(base: &str, active: bool) -> String {
	if active {
		format!("{base} {base}--active")
	} else {
		base.to_string()
	}
}

/// Application shell.
#[component]
pub fn Shell(config: BlueprintConfig) -> impl IntoView {
	let active_view = RwSignal::new(ActiveView::Blueprint);
	let device = RwSignal::new(config.device);
	let controller = RwSignal::new(ViewportController::new(config.viewport()));
	let board_url = StoredValue::new(config.design_board_url);

	let layout = Memo::new(move |_| build_checked_layout(device.get()));
	let viewport = Signal::derive(move || controller.with(ViewportController::state));
	let dragging = Memo::new(move |_| controller.with(ViewportController::is_dragging));

	let switch_view = move |next: ActiveView| {
		if active_view.get_untracked() == next {
			return;
		}
		debug!("asset-blueprint: view -> {}", next.label());
		active_view.set(next);
		let enabled = next == ActiveView::Blueprint;
		controller.update(|c| c.set_enabled(enabled));
	};

	let switch_device = move |next: DeviceClass| {
		if device.get_untracked() == next {
			return;
		}
		debug!("asset-blueprint: device -> {}", next.as_str());
		device.set(next);
	};

	let on_mousedown = move |ev: MouseEvent| {
		let at = Point::new(ev.client_x() as f64, ev.client_y() as f64);
		let target = press_target(&ev);
		let button = ev.button();
		let started = controller.try_update(|c| c.press(button, at, target));
		if started == Some(true) {
			ev.prevent_default();
		}
	};

	let on_mousemove = move |ev: MouseEvent| {
		if !controller.with_untracked(ViewportController::is_dragging) {
			return;
		}
		let at = Point::new(ev.client_x() as f64, ev.client_y() as f64);
		controller.update(|c| c.move_to(at));
	};

	let on_release = move || {
		if controller.with_untracked(ViewportController::is_dragging) {
			controller.update(ViewportController::release);
		}
	};

	let on_touchstart = move |ev: TouchEvent| {
		let Some((touches, at)) = first_touch(&ev) else {
			return;
		};
		let target = press_target(&ev);
		controller.update(|c| {
			c.touch_start(touches, at, target);
		});
	};

	let on_touchmove = move |ev: TouchEvent| {
		if !controller.with_untracked(ViewportController::is_dragging) {
			return;
		}
		if let Some((touches, at)) = first_touch(&ev) {
			controller.update(|c| c.touch_move(touches, at));
		}
	};

	let on_wheel = move |ev: WheelEvent| {
		let zoom_modifier = ev.ctrl_key() || ev.meta_key();
		let (dx, dy) = (ev.delta_x(), ev.delta_y());
		let action = controller.try_update(|c| c.wheel(dx, dy, zoom_modifier));
		if action == Some(WheelAction::Zoomed) {
			ev.prevent_default();
		}
	};

	let view_buttons = ActiveView::ALL
		.into_iter()
		.map(|v| {
			view! {
				<button
					class=move || toggle_class("switcher__button", active_view.get() == v)
					title=v.label()
					on:click=move |_| switch_view(v)
				>
					<span class="icon" aria-hidden="true">{v.icon()}</span>
					<span class="switcher__label">{v.label()}</span>
				</button>
			}
		})
		.collect_view();

	let blueprint_tools = move || {
		(active_view.get() == ActiveView::Blueprint).then(|| {
			view! {
				<div class="toolbar">
					<div class="switcher">
						<button
							class=move || toggle_class("switcher__button", device.get() == DeviceClass::Mobile)
							title="Mobile"
							on:click=move |_| switch_device(DeviceClass::Mobile)
						>
							"📱"
						</button>
						<button
							class=move || toggle_class("switcher__button", device.get() == DeviceClass::Desktop)
							title="Desktop"
							on:click=move |_| switch_device(DeviceClass::Desktop)
						>
							"🖥"
						</button>
					</div>
					<div class="toolbar__divider"></div>
					<div class="zoom-controls">
						<button class="icon-button" title="Zoom out" on:click=move |_| controller.update(ViewportController::zoom_out)>
							"−"
						</button>
						<span class="zoom-controls__readout">
							{move || format!("{}%", viewport.get().zoom_percent())}
						</span>
						<button class="icon-button" title="Zoom in" on:click=move |_| controller.update(ViewportController::zoom_in)>
							"+"
						</button>
					</div>
				</div>
			}
		})
	};

	let main = move || match active_view.get() {
		ActiveView::Blueprint => view! {
			<div
				class=move || {
					if dragging.get() { "blueprint-surface blueprint-surface--grabbing" } else { "blueprint-surface" }
				}
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=move |_| on_release()
				on:mouseleave=move |_| on_release()
				on:touchstart=on_touchstart
				on:touchmove=on_touchmove
				on:touchend=move |_| on_release()
				on:wheel=on_wheel
			>
				<BlueprintCanvas layout=layout viewport=viewport />
			</div>
		}
		.into_any(),
		ActiveView::Documentation => view! {
			<div class="documentation-view">
				<Documentation on_open_board=Callback::new(move |_| switch_view(ActiveView::DesignBoard)) />
			</div>
		}
		.into_any(),
		ActiveView::DesignBoard => view! {
			<div class="board-view">
				<div class="board-view__frame">
					<iframe src=board_url.get_value() width="100%" height="100%" allowfullscreen=true></iframe>
				</div>
			</div>
		}
		.into_any(),
	};

	view! {
		<div class="shell">
			<header class="shell__header">
				<div class="brand">
					<div class="brand-mark" aria-hidden="true">"◈"</div>
					<div>
						<h1 class="brand__title">"Asset Manager Blueprint"</h1>
						<p class="brand__subtitle">"v2.4 • by Ankur Madan"</p>
					</div>
				</div>
				<div class="switcher switcher--views">{view_buttons}</div>
				{blueprint_tools}
			</header>
			<main class="shell__main">{main}</main>
		</div>
	}
}
