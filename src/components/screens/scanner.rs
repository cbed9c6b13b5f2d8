use leptos::prelude::*;

use super::shared::{Button, StandardLayout, Tab, Variant, contain_wheel};
use crate::components::blueprint::DeviceClass;

fn viewfinder(device: DeviceClass) -> impl IntoView + use<> {
	let top_bar = (device == DeviceClass::Mobile).then(|| {
		view! {
			<div class="scanner__top">
				<button class="scanner__back">"‹"</button>
				<span class="scanner__title">"Scan QR / Barcode"</span>
				<div class="scanner__spacer"></div>
			</div>
		}
	});

	view! {
		<div class="scanner">
			{top_bar}
			<div class="scanner__field">
				<div class="reticle">
					<div class="reticle__corner reticle__corner--tl"></div>
					<div class="reticle__corner reticle__corner--tr"></div>
					<div class="reticle__corner reticle__corner--bl"></div>
					<div class="reticle__corner reticle__corner--br"></div>
					<div class="reticle__line"></div>
				</div>
				<p class="scanner__hint">"Align code within frame"</p>
			</div>
			<div class="scanner__controls">
				<Button variant=Variant::Ghost small=true>
					<span aria-hidden="true">"▢"</span>
					<span>"Input"</span>
				</Button>
				<div class="shutter">
					<div class="shutter__dot"></div>
				</div>
				<Button variant=Variant::Ghost small=true>
					<span aria-hidden="true">"ⓘ"</span>
					<span>"Help"</span>
				</Button>
			</div>
		</div>
	}
}

#[component]
pub fn ScannerScreen(device: DeviceClass) -> impl IntoView {
	match device {
		DeviceClass::Desktop => view! {
			<StandardLayout title="Scanner" active=Tab::Scan device=device>
				{viewfinder(device)}
			</StandardLayout>
		}
		.into_any(),
		DeviceClass::Mobile => view! {
			<div class="scanner-screen" on:wheel=contain_wheel>
				{viewfinder(device)}
			</div>
		}
		.into_any(),
	}
}
