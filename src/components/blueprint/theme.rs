//! Colors and stroke settings for the blueprint canvas.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in 0.0..=1.0.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same channels, different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// `#rrggbb` when opaque, `rgba(..)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Connector line and arrowhead style.
#[derive(Clone, Debug)]
pub struct ConnectorStyle {
	/// Stroke and arrowhead fill.
	pub color: Color,
	/// Stroke width in canvas units (scaled with the layer).
	pub width: f64,
	/// Arrowhead marker box, (width, height).
	pub arrow_size: (f64, f64),
}

/// Pill shown at a connector's midpoint.
#[derive(Clone, Debug)]
pub struct LabelStyle {
	/// Pill fill.
	pub background: Color,
	/// Label text.
	pub text: Color,
	/// Pill outline.
	pub border: Color,
	/// Box the label is centered in, (width, height).
	pub size: (f64, f64),
}

/// Badge floating above each frame.
#[derive(Clone, Debug)]
pub struct BadgeStyle {
	/// Badge fill.
	pub background: Color,
	/// Badge text.
	pub text: Color,
	/// Status dot before the title.
	pub dot: Color,
}

/// Complete visual theme for the canvas.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Flow arrows.
	pub connector: ConnectorStyle,
	/// Flow labels.
	pub label: LabelStyle,
	/// Frame title badges.
	pub badge: BadgeStyle,
	/// Side length of the connector overlay; must cover the laid-out extent.
	pub overlay_extent: f64,
}

impl Default for Theme {
	fn default() -> Self {
		Self::emerald()
	}
}

impl Theme {
	/// Emerald connectors on a light slate grid.
	pub fn emerald() -> Self {
		Self {
			connector: ConnectorStyle {
				color: Color::rgb(16, 185, 129), // emerald-500
				width: 2.0,
				arrow_size: (10.0, 7.0),
			},
			label: LabelStyle {
				background: Color::rgba(255, 255, 255, 0.9),
				text: Color::rgb(4, 120, 87),     // emerald-700
				border: Color::rgb(167, 243, 208), // emerald-200
				size: (100.0, 30.0),
			},
			badge: BadgeStyle {
				background: Color::rgb(30, 41, 59), // slate-800
				text: Color::rgb(255, 255, 255),
				dot: Color::rgb(52, 211, 153), // emerald-400
			},
			overlay_extent: 6000.0,
		}
	}

	/// Arrowhead polygon points for the marker, tip at the right edge.
	pub fn arrow_points(&self) -> String {
		let (w, h) = self.connector.arrow_size;
		format!("0 0, {} {}, 0 {}", w, h / 2.0, h)
	}

	/// Marker reference point, one unit back from the tip.
	pub fn arrow_ref(&self) -> (f64, f64) {
		let (w, h) = self.connector.arrow_size;
		(w - 1.0, h / 2.0)
	}
}
