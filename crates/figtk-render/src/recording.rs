//! A host that records every call it receives.

use crate::error::Result;
use crate::host::{PlaceCommand, PresentationHost};
use figtk_core::Rect;
use figtk_synth::WidgetKind;

/// One call received by a [`RecordingHost`].
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Surface {
        width: f64,
        height: f64,
    },
    Create {
        handle: usize,
        parent: usize,
        kind: WidgetKind,
        label: String,
        rect: Rect,
    },
}

/// Records calls instead of drawing. Handle 0 is the surface.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    calls: Vec<HostCall>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Only the `Create` calls.
    pub fn created(&self) -> impl Iterator<Item = &HostCall> {
        self.calls
            .iter()
            .filter(|call| matches!(call, HostCall::Create { .. }))
    }
}

impl PresentationHost for RecordingHost {
    type Handle = usize;

    fn open_surface(&mut self, width: f64, height: f64) -> Result<usize> {
        self.calls.clear();
        self.calls.push(HostCall::Surface { width, height });
        Ok(0)
    }

    fn create(&mut self, command: PlaceCommand<'_, usize>) -> Result<usize> {
        let handle = self.calls.len();
        self.calls.push(HostCall::Create {
            handle,
            parent: *command.parent,
            kind: command.kind,
            label: command.label.to_string(),
            rect: command.rect,
        });
        Ok(handle)
    }
}
