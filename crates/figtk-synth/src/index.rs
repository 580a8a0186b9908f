//! Frame index: frame name to frame node.

use figtk_core::{DesignDocument, DesignNode, InputError, NodeKind};
use indexmap::IndexMap;

/// Name used for frames whose name is empty.
pub const UNNAMED_FRAME: &str = "Unnamed Frame";

/// Every `FRAME` of a document keyed by name.
///
/// Built by a root-inclusive pre-order scan. When two frames share a name
/// the later one in traversal order replaces the earlier one, but the name
/// keeps the position where it was first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameIndex {
    frames: IndexMap<String, DesignNode>,
}

impl FrameIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `root` and everything below it.
    pub fn build(root: &DesignNode) -> Self {
        let mut frames = IndexMap::new();
        for node in root.descendants() {
            if node.kind != NodeKind::Frame {
                continue;
            }
            let name = if node.name.is_empty() {
                UNNAMED_FRAME.to_string()
            } else {
                node.name.clone()
            };
            if let Some(previous) = frames.insert(name.clone(), node.clone()) {
                log::debug!(
                    "frame {:?} ({:?}) replaced by a later frame with the same name",
                    name,
                    previous.id
                );
            }
        }
        Self { frames }
    }

    /// Scan a fetched document from its root.
    pub fn from_document(doc: &DesignDocument) -> Self {
        Self::build(&doc.document)
    }

    pub fn get(&self, name: &str) -> Option<&DesignNode> {
        self.frames.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.frames.contains_key(name)
    }

    /// Frame names in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.frames.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DesignNode)> {
        self.frames.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Resolve chosen names to frame nodes, in the order given.
    ///
    /// Repeated names resolve once. An empty choice is a user error, as is
    /// a name the index does not know.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<&DesignNode>, InputError> {
        if names.is_empty() {
            return Err(InputError::NoSelection);
        }

        let mut seen: Vec<&str> = Vec::with_capacity(names.len());
        let mut selected = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            if seen.contains(&name) {
                continue;
            }
            let node = self
                .frames
                .get(name)
                .ok_or_else(|| InputError::UnknownFrame(name.to_string()))?;
            seen.push(name);
            selected.push(node);
        }
        Ok(selected)
    }
}
