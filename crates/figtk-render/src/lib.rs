//! Live preview of widget plans.
//!
//! The renderer walks a [`WidgetPlan`](figtk_synth::WidgetPlan) in
//! instruction order and asks a [`PresentationHost`] to create each
//! primitive inside a single surface sized to the plan. Hosts own every
//! drawing decision; the renderer only translates instructions into calls.
//!
//! Supported hosts:
//! - [`RecordingHost`] records calls for inspection
//! - [`SvgHost`] draws a static SVG mock-up

pub mod error;
pub mod host;
pub mod recording;

#[cfg(feature = "svg")]
pub mod svg;

pub use error::{RenderError, Result};
pub use host::{render_preview, PlaceCommand, PresentationHost, Preview};
pub use recording::{HostCall, RecordingHost};

#[cfg(feature = "svg")]
pub use svg::SvgHost;
