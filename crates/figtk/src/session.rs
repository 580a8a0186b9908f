//! The state shared between fetch, generate, preview and export.

use crate::error::Result;
use figtk_codegen::{CodeGenerator, EmitOptions, TkinterGenerator};
use figtk_core::{DesignDocument, ExportError, InputError};
use figtk_io::{DocumentProvider, PersistenceSink};
use figtk_render::{render_preview, PresentationHost, Preview};
use figtk_synth::{synthesize, FrameIndex, SynthOptions, WidgetPlan};
use std::path::{Path, PathBuf};

/// What a successful fetch found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Frame names in first-seen order.
    Frames(Vec<String>),
    /// The document was fetched but contains no frames.
    NoFramesDetected,
}

/// Result of the last successful generate.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    /// Frames the plan was built from, in selection order.
    pub frames: Vec<String>,
    pub plan: WidgetPlan,
    pub source: String,
}

/// One user's working state: last document, its frame index, and the last
/// generated program.
///
/// Every operation either succeeds and replaces the state it owns, or fails
/// and leaves the whole session as it was.
#[derive(Debug, Default)]
pub struct Session {
    document: Option<DesignDocument>,
    index: FrameIndex,
    generated: Option<Generated>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self) -> Option<&DesignDocument> {
        self.document.as_ref()
    }

    pub fn index(&self) -> &FrameIndex {
        &self.index
    }

    pub fn generated(&self) -> Option<&Generated> {
        self.generated.as_ref()
    }

    pub fn frame_names(&self) -> Vec<String> {
        self.index.names().map(str::to_string).collect()
    }

    /// Fetch a document through `provider` and index its frames.
    ///
    /// Token and id are trimmed; either one being empty fails before the
    /// provider is called.
    pub fn fetch<P>(&mut self, provider: &P, token: &str, document_id: &str) -> Result<FetchOutcome>
    where
        P: DocumentProvider + ?Sized,
    {
        let token = token.trim();
        let document_id = document_id.trim();
        if token.is_empty() {
            return Err(InputError::MissingToken.into());
        }
        if document_id.is_empty() {
            return Err(InputError::MissingDocumentId.into());
        }

        log::info!("fetching {document_id} via {}", provider.name());
        let document = provider.fetch(token, document_id)?;
        Ok(self.load(document))
    }

    /// Adopt an already parsed document, replacing the previous one.
    ///
    /// The previous generated program belongs to the old document and is
    /// dropped.
    pub fn load(&mut self, document: DesignDocument) -> FetchOutcome {
        let index = FrameIndex::from_document(&document);
        let outcome = if index.is_empty() {
            log::warn!("no frames detected in {:?}", document.name);
            FetchOutcome::NoFramesDetected
        } else {
            log::info!("indexed {} frame(s) in {:?}", index.len(), document.name);
            FetchOutcome::Frames(index.names().map(str::to_string).collect())
        };

        self.document = Some(document);
        self.index = index;
        self.generated = None;
        outcome
    }

    /// Synthesize and emit a program for the chosen frames.
    pub fn generate<S: AsRef<str>>(
        &mut self,
        selection: &[S],
        synth: &SynthOptions,
        emit: &EmitOptions,
    ) -> Result<&Generated> {
        if self.document.is_none() {
            return Err(InputError::NoDocument.into());
        }

        let frames = self.index.select(selection)?;
        let plan = synthesize(&frames, synth);
        let source = TkinterGenerator::with_options(emit.clone()).generate(&plan)?;
        log::info!(
            "generated {} lines for {} widget(s)",
            source.lines().count(),
            plan.len()
        );

        let mut chosen: Vec<String> = Vec::with_capacity(frames.len());
        for name in selection {
            let name = name.as_ref();
            if !chosen.iter().any(|c| c == name) {
                chosen.push(name.to_string());
            }
        }

        Ok(self.generated.insert(Generated {
            frames: chosen,
            plan,
            source,
        }))
    }

    /// Replay the last plan on a presentation host.
    pub fn render_preview<H: PresentationHost>(&self, host: &mut H) -> Result<Preview<H::Handle>> {
        let generated = self.generated.as_ref().ok_or(InputError::NotGenerated)?;
        Ok(render_preview(&generated.plan, host)?)
    }

    /// Write the last generated program through `sink`.
    pub fn export<K>(&self, sink: &K, path: &Path) -> Result<PathBuf>
    where
        K: PersistenceSink + ?Sized,
    {
        let generated = self
            .generated
            .as_ref()
            .ok_or(ExportError::NothingToExport)?;
        Ok(sink.save(path, &generated.source)?)
    }
}
