//! Phone and browser-window bezels drawn around each mock screen.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

use leptos::prelude::*;

use super::geometry::frame_size;
use super::types::DeviceClass;

/// Host shown in the desktop frame's address bar.
const URL_HOST: &str = "app.assetmanager.io";

/// Address-bar path for a screen title: lower-cased, each whitespace
/// character replaced by a hyphen.
pub fn url_slug(title: &str) -> String {
	title
		.chars()
		.map(|c| if c.is_whitespace() { '-' } else { c })
		.collect::<String>()
		.to_lowercase()
}

/// Full address shown in the desktop frame.
pub fn frame_url(title: &str) -> String {
	format!("{URL_HOST}/{}", url_slug(title))
}

/// Wraps content in a fixed-size device bezel.
///
/// The frame's box is exactly [`frame_size`] for the device class, which is
/// what connector anchors are computed from. Content lays itself out inside
/// that box at 1:1; only the canvas layer around it is scaled.
#[component]
pub fn DeviceFrame(
	#[prop(into)] title: String,
	device: DeviceClass,
	children: Children,
) -> impl IntoView {
	let size = frame_size(device);
	let style = format!("width: {}px; height: {}px;", size.width, size.height);

	match device {
		DeviceClass::Mobile => view! {
			<div class="device-frame device-frame--mobile" style=style>
				<div class="status-bar">
					<span class="status-bar__time">"9:41"</span>
					<div class="status-bar__notch"></div>
					<div class="status-bar__icons" aria-hidden="true">
						<span>"▂▄▆"</span>
						<span>"◠"</span>
						<span>"▭"</span>
					</div>
				</div>
				<div class="device-frame__content">{children()}</div>
				<div class="home-indicator"></div>
			</div>
		}
		.into_any(),
		DeviceClass::Desktop => view! {
			<div class="device-frame device-frame--desktop" style=style>
				<div class="browser-bar">
					<div class="traffic-lights" aria-hidden="true">
						<span class="traffic-lights__close"></span>
						<span class="traffic-lights__minimize"></span>
						<span class="traffic-lights__zoom"></span>
					</div>
					<div class="browser-bar__nav" aria-hidden="true">
						<span>"‹"</span>
						<span>"›"</span>
						<span>"↻"</span>
					</div>
					<div class="browser-bar__url">
						<span class="browser-bar__lock" aria-hidden="true">"🔒"</span>
						<span>{frame_url(&title)}</span>
					</div>
				</div>
				<div class="device-frame__content">{children()}</div>
			</div>
		}
		.into_any(),
	}
}
