//! The document provider seam.

use figtk_core::{DesignDocument, FigtkError};

/// Something that can produce a design document for an id.
///
/// Callers validate the token and id before calling; providers may assume
/// both are non-empty and trimmed.
pub trait DocumentProvider {
    /// Provider name for logs.
    fn name(&self) -> &'static str;

    /// Fetch and parse one document.
    fn fetch(&self, token: &str, document_id: &str) -> Result<DesignDocument, FigtkError>;
}

impl<P: DocumentProvider + ?Sized> DocumentProvider for &P {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn fetch(&self, token: &str, document_id: &str) -> Result<DesignDocument, FigtkError> {
        (**self).fetch(token, document_id)
    }
}
