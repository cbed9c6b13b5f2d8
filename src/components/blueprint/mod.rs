//! Pan/zoom blueprint of device-frame mockups joined by flow arrows.
//!
//! - [`geometry`]: frame sizes, anchors and bezier connector paths
//! - [`layout`]: the fixed placement of screens per device class
//! - [`viewport`]: pan/zoom state and the drag gesture state machine
//! - [`BlueprintCanvas`]: renders a layout under a viewport
//! - [`DeviceFrame`]: phone or browser bezel around a screen
//!
//! # Example
//!
//! ```ignore
//! let device = RwSignal::new(DeviceClass::Mobile);
//! let layout = Memo::new(move |_| build_layout(device.get()));
//! let viewport = RwSignal::new(ViewportController::default());
//!
//! view! {
//!     <BlueprintCanvas
//!         layout=layout
//!         viewport=Signal::derive(move || viewport.with(|v| v.state()))
//!     />
//! }
//! ```

mod canvas;
mod frame;
pub mod geometry;
pub mod layout;
pub mod theme;
mod types;
pub mod viewport;

pub use canvas::BlueprintCanvas;
pub use frame::{DeviceFrame, frame_url, url_slug};
pub use theme::Theme;
pub use types::{Connection, DeviceClass, Node, Point, Renderable, Size};
