//! Error types for code generation.

use figtk_synth::WidgetId;
use thiserror::Error;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during code generation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CodegenError {
    /// A widget refers to a parent that does not exist or is not created before it.
    #[error("widget {child:?} refers to parent {parent:?}, which is not an earlier container")]
    InvalidParent { child: WidgetId, parent: WidgetId },

    /// A widget id does not match its position in the plan.
    #[error("widget at position {position} carries id {id:?}")]
    MisplacedWidget { position: usize, id: WidgetId },

    /// The configured entry point is not a usable Python identifier.
    #[error("invalid entry point name: {0:?}")]
    InvalidEntryPoint(String),
}
