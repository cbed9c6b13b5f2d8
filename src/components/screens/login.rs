use leptos::prelude::*;

use super::shared::{Button, contain_wheel};
use crate::components::blueprint::DeviceClass;

#[component]
pub fn LoginScreen(device: DeviceClass) -> impl IntoView {
	let class = format!("login login--{}", device.as_str());

	view! {
		<div class=class on:wheel=contain_wheel>
			<div class="login__card">
				<div class="login__brand">
					<div class="brand-mark brand-mark--large" aria-hidden="true">"◈"</div>
					<h1>"Asset Manager"</h1>
					<p class="muted">"Enterprise Inventory Control"</p>
				</div>
				<div class="form-stack">
					<div class="field">
						<label>"Work Email"</label>
						<input type="email" value="demo@assetmanager.io" />
					</div>
					<div class="field">
						<label>"Password"</label>
						<input type="password" value="••••••••" />
					</div>
					<Button full_width=true>"Sign In"</Button>
				</div>
				<p class="login__note muted">"SSO Login enabled for organization"</p>
			</div>
		</div>
	}
}
