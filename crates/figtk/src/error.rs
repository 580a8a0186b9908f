//! Error type for session operations.

use figtk_codegen::CodegenError;
use figtk_core::{DocumentError, ExportError, FetchError, FigtkError, InputError};
use figtk_render::RenderError;
use thiserror::Error;

/// Result type alias for session operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Any failure of a session operation.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Figtk(#[from] FigtkError),

    #[error(transparent)]
    Codegen(#[from] CodegenError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl Error {
    /// Whether the user can fix their input and simply resubmit.
    pub fn is_user_correctable(&self) -> bool {
        match self {
            Self::Figtk(e) => e.is_user_correctable(),
            Self::Codegen(CodegenError::InvalidEntryPoint(_)) => true,
            Self::Codegen(_) | Self::Render(_) => false,
        }
    }

    /// The input validation failure behind this error, if that is what it is.
    pub fn as_input(&self) -> Option<&InputError> {
        match self {
            Self::Figtk(FigtkError::Input(e)) => Some(e),
            _ => None,
        }
    }
}

macro_rules! via_figtk_error {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Error {
                fn from(err: $ty) -> Self {
                    Self::Figtk(FigtkError::from(err))
                }
            }
        )*
    };
}

via_figtk_error!(InputError, FetchError, DocumentError, ExportError);
