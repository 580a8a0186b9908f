//! Code generators for target GUI toolkits.

#[cfg(feature = "tkinter")]
mod tkinter;

#[cfg(feature = "tkinter")]
pub use tkinter::TkinterGenerator;

use crate::error::Result;
use figtk_synth::WidgetPlan;

/// Common trait for code generators.
pub trait CodeGenerator {
    /// Target toolkit name.
    fn framework_name(&self) -> &'static str;

    /// Extension for files holding generated programs, without the dot.
    fn file_extension(&self) -> &'static str;

    /// Generate a complete standalone program for a plan.
    fn generate(&self, plan: &WidgetPlan) -> Result<String>;
}

/// Options for program generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Title of the generated window.
    pub window_title: String,
    /// Name of the function that builds and runs the UI.
    pub entry_point: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            window_title: "Auto-generated UI from Figma".to_string(),
            entry_point: "create_ui".to_string(),
        }
    }
}

impl EmitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn with_entry_point(mut self, name: impl Into<String>) -> Self {
        self.entry_point = name.into();
        self
    }
}
