//! Error types for preview rendering.

use figtk_synth::WidgetId;
use thiserror::Error;

/// Result type alias for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while rendering a preview.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// A widget names a parent that has not been created yet.
    #[error("widget {child:?} refers to parent {parent:?}, which has not been created")]
    MissingParent { child: WidgetId, parent: WidgetId },

    /// The host refused a call.
    #[error("presentation host error: {0}")]
    Host(String),
}
