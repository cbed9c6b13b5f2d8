//! Leptos component drawing the laid-out screens and their flows.
//!
//! A single layer carries the viewport transform. Inside it, in paint
//! order:
//! 1. the SVG connector overlay (curves with arrowheads)
//! 2. connector labels, centered between the two node centers
//! 3. the nodes: a title badge and the device frame with its content
//!
//! Because connectors and nodes share the transformed layer, anchors stay
//! attached to frames at every zoom level.

use leptos::prelude::*;

use super::frame::DeviceFrame;
use super::layout::{Layout, Route};
use super::theme::Theme;
use super::types::{DeviceClass, Node, Renderable};
use super::viewport::ViewportState;

/// Marker id referenced by every connector path.
const ARROWHEAD_ID: &str = "blueprint-arrowhead";

/// Renders a layout under the current viewport.
///
/// Purely presentational: `layout` and `viewport` are read-only and all
/// input handling belongs to the surface hosting this component.
#[component]
pub fn BlueprintCanvas(
	#[prop(into)] layout: Signal<Layout>,
	#[prop(into)] viewport: Signal<ViewportState>,
	#[prop(default = Theme::default())] theme: Theme,
) -> impl IntoView {
	let routes = Memo::new(move |_| layout.with(Layout::routes));
	let theme = StoredValue::new(theme);

	let connectors = move || {
		theme.with_value(|theme| {
			routes
				.get()
				.into_iter()
				.map(|route| connector_path(&route, theme))
				.collect_view()
		})
	};

	let labels = move || {
		theme.with_value(|theme| {
			routes
				.get()
				.into_iter()
				.filter_map(|route| route.label)
				.map(|(text, at)| {
					let (w, h) = theme.label.size;
					let style = format!(
						"left: {}px; top: {}px; width: {}px; height: {}px;",
						at.x - w / 2.0,
						at.y - h / 2.0,
						w,
						h
					);
					let pill = format!(
						"background: {}; color: {}; border-color: {};",
						theme.label.background.to_css(),
						theme.label.text.to_css(),
						theme.label.border.to_css()
					);
					view! {
						<div class="connector-label" style=style>
							<span class="connector-label__pill" style=pill>{text}</span>
						</div>
					}
				})
				.collect_view()
		})
	};

	let nodes = move || {
		layout.with(|layout| {
			let device = layout.device;
			theme.with_value(|theme| {
				layout
					.nodes
					.iter()
					.map(|node| canvas_node(node, device, theme))
					.collect_view()
			})
		})
	};

	let (extent, arrow_w, arrow_h, ref_x, ref_y, arrow_points, arrow_fill) =
		theme.with_value(|theme| {
			let (w, h) = theme.connector.arrow_size;
			let (ref_x, ref_y) = theme.arrow_ref();
			(
				theme.overlay_extent.to_string(),
				w.to_string(),
				h.to_string(),
				ref_x.to_string(),
				ref_y.to_string(),
				theme.arrow_points(),
				theme.connector.color.to_css(),
			)
		});

	view! {
		<div class="blueprint-layer" style:transform=move || viewport.get().css_transform()>
			<svg class="connector-layer" width=extent.clone() height=extent>
				<defs>
					<marker
						id=ARROWHEAD_ID
						markerWidth=arrow_w
						markerHeight=arrow_h
						refX=ref_x
						refY=ref_y
						orient="auto"
					>
						<polygon points=arrow_points fill=arrow_fill />
					</marker>
				</defs>
				{connectors}
			</svg>
			<div class="label-layer">{labels}</div>
			<div class="node-layer">{nodes}</div>
		</div>
	}
}

fn connector_path(route: &Route, theme: &Theme) -> impl IntoView + use<> {
	view! {
		<path
			class="flow-line"
			d=route.path.to_svg()
			fill="none"
			stroke=theme.connector.color.to_css()
			stroke-width=theme.connector.width.to_string()
			marker-end=format!("url(#{ARROWHEAD_ID})")
		/>
	}
}

fn canvas_node(node: &Node, device: DeviceClass, theme: &Theme) -> impl IntoView + use<> {
	let content = node.content;
	let position = format!(
		"transform: translate({}px, {}px);",
		node.position.x, node.position.y
	);
	let badge = format!(
		"background: {}; color: {};",
		theme.badge.background.to_css(),
		theme.badge.text.to_css()
	);
	let dot = format!("background: {};", theme.badge.dot.to_css());

	view! {
		<div class="canvas-node" data-node=node.id style=position>
			<div class="node-badge" style=badge>
				<span class="node-badge__dot" style=dot></span>
				{node.title}
			</div>
			<DeviceFrame title=node.title device=device>
				{content.render(device)}
			</DeviceFrame>
		</div>
	}
}
