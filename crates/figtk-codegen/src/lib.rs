//! Code generation from widget plans to standalone GUI programs.
//!
//! The generated program rebuilds the planned widgets at their recorded
//! positions without any access to the design document or the network.
//!
//! # Features
//!
//! - `tkinter` - Generate Python 3 programs using the standard `tkinter` toolkit
//!
//! # Example
//!
//! ```ignore
//! use figtk_codegen::{CodeGenerator, TkinterGenerator};
//!
//! let generator = TkinterGenerator::new();
//! let source = generator.generate(&plan)?;
//! std::fs::write("ui.py", source)?;
//! ```

pub mod ast;
pub mod error;
pub mod generators;
pub mod naming;

pub use error::{CodegenError, Result};
pub use generators::{CodeGenerator, EmitOptions};
pub use naming::HandlerNames;

#[cfg(feature = "tkinter")]
pub use generators::TkinterGenerator;

/// Emit the Tkinter program for a plan with default options.
#[cfg(feature = "tkinter")]
pub fn emit(plan: &figtk_synth::WidgetPlan) -> Result<String> {
    TkinterGenerator::new().generate(plan)
}
