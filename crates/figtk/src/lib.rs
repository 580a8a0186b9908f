//! figtk: turn design-tool frames into standalone Tkinter programs.
//!
//! The pipeline is
//!
//! ```text
//! DocumentProvider -> DesignDocument -> FrameIndex -> (selection)
//!     -> synthesize -> WidgetPlan -> { TkinterGenerator, render_preview }
//! ```
//!
//! [`Session`] keeps the state between the steps so that a failed step
//! never clobbers the results of an earlier successful one.
//!
//! # Example
//!
//! ```ignore
//! use figtk::{Session, FetchOutcome};
//! use figtk::io::{ClientOptions, FigmaClient, FsSink};
//!
//! let mut session = Session::new();
//! let client = FigmaClient::new(ClientOptions::default())?;
//! if let FetchOutcome::Frames(names) = session.fetch(&client, &token, "AbC123")? {
//!     session.generate(&names[..1], &Default::default(), &Default::default())?;
//!     session.export(&FsSink::default(), "login".as_ref())?;
//! }
//! ```

pub mod error;
pub mod session;

pub use error::{Error, Result};
pub use session::{FetchOutcome, Generated, Session};

pub use figtk_codegen as codegen;
pub use figtk_core as model;
pub use figtk_io as io;
pub use figtk_render as render;
pub use figtk_synth as synth;
