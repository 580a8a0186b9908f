//! Error types for figtk.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum FigtkError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl FigtkError {
    /// Whether the user can fix their input and simply resubmit.
    pub fn is_user_correctable(&self) -> bool {
        !matches!(self, Self::Document(_))
    }
}

/// Invalid or missing user input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("an access token is required")]
    MissingToken,

    #[error("a document id is required")]
    MissingDocumentId,

    #[error("select at least one frame to generate the UI")]
    NoSelection,

    #[error("no frame named {0:?} in the fetched document")]
    UnknownFrame(String),

    #[error("no document has been fetched yet")]
    NoDocument,

    #[error("no UI has been generated yet")]
    NotGenerated,
}

/// Errors from the document provider.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("authentication failed (HTTP {status})")]
    Auth { status: u16 },

    #[error("document not found (HTTP {status})")]
    NotFound { status: u16 },

    #[error("unexpected response status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("no saved response at {}", path.display())]
    MissingFile { path: PathBuf },
}

impl FetchError {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 | 403 => Self::Auth { status },
            404 => Self::NotFound { status },
            _ => Self::Status {
                status,
                message: message.into(),
            },
        }
    }

    /// The HTTP status behind this error, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth { status } | Self::NotFound { status } | Self::Status { status, .. } => {
                Some(*status)
            }
            Self::Transport(_) | Self::MissingFile { .. } => None,
        }
    }
}

/// A document whose structure cannot be used.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("malformed document: {0}")]
    Malformed(String),

    #[error("invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors while exporting generated source.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export; generate a UI first")]
    NothingToExport,

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
