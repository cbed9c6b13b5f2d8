//! Chrome shared by the mock screens: buttons, headers, tab bars and the
//! standard mobile/desktop layout.

use leptos::prelude::*;
use web_sys::WheelEvent;

use crate::components::blueprint::DeviceClass;

/// Keep wheel scrolling inside a screen from panning the canvas.
pub fn contain_wheel(ev: WheelEvent) {
	ev.stop_propagation();
}

/// Visual weight of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
	#[default]
	Primary,
	Secondary,
	Ghost,
}

impl Variant {
	fn class(self) -> &'static str {
		match self {
			Variant::Primary => "btn btn--primary",
			Variant::Secondary => "btn btn--secondary",
			Variant::Ghost => "btn btn--ghost",
		}
	}
}

/// A mock button. Inert, but still a `<button>` so presses on it never
/// start a canvas pan.
#[component]
pub fn Button(
	#[prop(optional)] variant: Variant,
	#[prop(optional)] full_width: bool,
	#[prop(optional)] small: bool,
	children: Children,
) -> impl IntoView {
	let mut class = variant.class().to_string();
	if full_width {
		class.push_str(" btn--full");
	}
	if small {
		class.push_str(" btn--small");
	}
	view! { <button class=class>{children()}</button> }
}

/// Navigation destination highlighted in tab bars and sidebars.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
	Home,
	Assets,
	Scan,
	Maintenance,
	Settings,
}

fn tab_class(base: &str, active: bool) -> String {
	if active {
		format!("{base} {base}--active")
	} else {
		base.to_string()
	}
}

#[component]
fn NavTab(icon: &'static str, label: &'static str, active: bool) -> impl IntoView {
	view! {
		<div class=tab_class("nav-tab", active)>
			<span class="icon" aria-hidden="true">{icon}</span>
			<span class="nav-tab__label">{label}</span>
		</div>
	}
}

#[component]
fn BottomNav(active: Tab) -> impl IntoView {
	view! {
		<div class="bottom-nav">
			<NavTab icon="▦" label="Home" active={active == Tab::Home} />
			<NavTab icon="▣" label="Assets" active={active == Tab::Assets} />
			<div class="bottom-nav__scan" aria-hidden="true">"⌗"</div>
			<NavTab icon="🔧" label="Maint." active={active == Tab::Maintenance} />
			<NavTab icon="⚙" label="Settings" active={active == Tab::Settings} />
		</div>
	}
}

#[component]
fn ScreenHeader(title: &'static str, show_back: bool) -> impl IntoView {
	view! {
		<div class="screen-header">
			<div class="screen-header__title">
				{show_back.then(|| view! { <button class="icon-button">"‹"</button> })}
				<h2>{title}</h2>
			</div>
			<div class="screen-header__actions" aria-hidden="true">
				<span class="icon">"🔔"</span>
				{(!show_back).then(|| view! { <span class="icon">"👤"</span> })}
			</div>
		</div>
	}
}

#[component]
fn SidebarItem(
	icon: &'static str,
	label: &'static str,
	active: bool,
	open: ReadSignal<bool>,
) -> impl IntoView {
	view! {
		<div class=tab_class("sidebar-item", active)>
			<span class="icon" aria-hidden="true">{icon}</span>
			<Show when=move || open.get()>
				<span class="sidebar-item__label">{label}</span>
			</Show>
		</div>
	}
}

/// Header plus scrollable body, with a bottom tab bar on mobile or a
/// collapsible sidebar on desktop.
#[component]
pub fn StandardLayout(
	title: &'static str,
	active: Tab,
	device: DeviceClass,
	#[prop(optional)] show_back: bool,
	children: Children,
) -> impl IntoView {
	match device {
		DeviceClass::Mobile => view! {
			<div class="standard-layout standard-layout--mobile">
				<ScreenHeader title=title show_back=show_back />
				<div class="standard-layout__body" on:wheel=contain_wheel>
					{children()}
				</div>
				<BottomNav active=active />
			</div>
		}
		.into_any(),
		DeviceClass::Desktop => {
			let (open, set_open) = signal(true);
			view! {
				<div class="standard-layout standard-layout--desktop" on:wheel=contain_wheel>
					<div class=move || if open.get() { "sidebar" } else { "sidebar sidebar--collapsed" }>
						<div class="sidebar__brand">
							<div class="brand-mark" aria-hidden="true">"◈"</div>
							<Show when=move || open.get()>
								<span class="sidebar__brand-name">"Asset Manager"</span>
							</Show>
						</div>
						<div class="sidebar__items">
							<SidebarItem icon="▦" label="Dashboard" active={active == Tab::Home} open=open />
							<SidebarItem icon="▣" label="Inventory" active={active == Tab::Assets} open=open />
							<SidebarItem icon="⌗" label="Scanner" active={active == Tab::Scan} open=open />
							<SidebarItem
								icon="🔧"
								label="Maintenance"
								active={active == Tab::Maintenance}
								open=open
							/>
							<SidebarItem icon="⚙" label="Settings" active={active == Tab::Settings} open=open />
						</div>
						<div class="sidebar__footer">
							<button class="sidebar__toggle" on:click=move |_| set_open.update(|o| *o = !*o)>
								{move || if open.get() { "‹" } else { "☰" }}
							</button>
						</div>
					</div>
					<div class="standard-layout__main">
						<ScreenHeader title=title show_back=show_back />
						<div class="standard-layout__body">{children()}</div>
					</div>
				</div>
			}
			.into_any()
		}
	}
}
