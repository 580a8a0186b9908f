//! Saved file responses on disk.

use crate::provider::DocumentProvider;
use figtk_core::{DesignDocument, DocumentError, FetchError, FigtkError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Read a saved `GET /v1/files/{id}` response.
pub fn read_document(path: &Path) -> Result<DesignDocument, FigtkError> {
    let body = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => FigtkError::from(FetchError::MissingFile {
            path: path.to_path_buf(),
        }),
        ErrorKind::InvalidData => {
            FigtkError::from(DocumentError::Malformed(format!("{} is not UTF-8", path.display())))
        }
        _ => FigtkError::from(FetchError::Transport(format!("{}: {e}", path.display()))),
    })?;
    let document = DesignDocument::from_json(&body)?;
    log::info!("loaded {:?} from {}", document.name, path.display());
    Ok(document)
}

/// Serves documents from a directory holding one `{id}.json` per document.
///
/// The token is accepted but not checked.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    dir: PathBuf,
}

impl JsonFileProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, document_id: &str) -> PathBuf {
        self.dir.join(format!("{document_id}.json"))
    }
}

impl DocumentProvider for JsonFileProvider {
    fn name(&self) -> &'static str {
        "json-file"
    }

    fn fetch(&self, _token: &str, document_id: &str) -> Result<DesignDocument, FigtkError> {
        let path = self.path_for(document_id);
        if document_id.contains(['/', '\\']) || document_id == ".." {
            return Err(FetchError::MissingFile { path }.into());
        }
        read_document(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "name": "Saved",
        "document": {
            "id": "0:0",
            "type": "DOCUMENT",
            "children": [{"id": "1:1", "type": "FRAME", "name": "Home"}]
        }
    }"#;

    #[test]
    fn test_provider_reads_by_id() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("abc.json"), BODY).unwrap();

        let provider = JsonFileProvider::new(dir.path());
        let document = provider.fetch("ignored", "abc").unwrap();
        assert_eq!(document.name, "Saved");
        assert_eq!(document.document.children[0].name, "Home");
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonFileProvider::new(dir.path()).fetch("t", "nope").unwrap_err();
        match err {
            FigtkError::Fetch(FetchError::MissingFile { path }) => {
                assert_eq!(path, dir.path().join("nope.json"));
            }
            other => panic!("expected a missing file, got {other:?}"),
        }

        let err = read_document(&dir.path().join("gone.json")).unwrap_err();
        assert!(err.to_string().contains("gone.json"));
        assert!(err.is_user_correctable());
    }

    #[test]
    fn test_path_like_ids_are_rejected() {
        let provider = JsonFileProvider::new("/tmp");
        for id in ["../secret", "a/b", "..", "c\\d"] {
            assert!(matches!(
                provider.fetch("t", id),
                Err(FigtkError::Fetch(FetchError::MissingFile { .. }))
            ));
        }
    }

    #[test]
    fn test_malformed_body() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"name": "x"}"#).unwrap();
        assert!(matches!(read_document(&path), Err(FigtkError::Document(_))));

        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            read_document(&path),
            Err(FigtkError::Document(DocumentError::Json(_)))
        ));
    }
}
