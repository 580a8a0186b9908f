//! Frame indexing and widget synthesis.
//!
//! Turns selected frames of a design tree into an ordered list of
//! renderer-agnostic widget instructions.
//!
//! # Pipeline
//!
//! 1. **Frame index**: one pre-order scan maps frame names to frame nodes
//! 2. **Selection**: caller-chosen names resolve to frame nodes
//! 3. **Synthesis**: each selected frame is walked, every node classified
//!    into at most one widget, and placed in frame-local coordinates
//!
//! # Example
//!
//! ```ignore
//! use figtk_synth::{FrameIndex, synthesize, SynthOptions};
//!
//! let index = FrameIndex::from_document(&doc);
//! let frames = index.select(&["Login"])?;
//! let plan = synthesize(&frames, &SynthOptions::default());
//!
//! for widget in plan.iter() {
//!     println!("{:?} {} at {:?}", widget.kind, widget.label, widget.rect);
//! }
//! ```

mod classify;
mod index;
mod synthesizer;
mod widget;

pub use classify::{classify, strip_word, Classification, WidgetSpec};
pub use index::{FrameIndex, UNNAMED_FRAME};
pub use synthesizer::{synthesize, SynthOptions};
pub use widget::{WidgetId, WidgetInstruction, WidgetKind, WidgetPlan};
