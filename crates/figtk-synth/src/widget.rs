//! Widget instructions: the synthesizer's output.

use figtk_core::{Color, Font, Rect};
use serde::{Deserialize, Serialize};

/// Index of an instruction within its plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(pub usize);

/// UI primitive to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    Label,
    Entry,
    Button,
    /// Establishes a new local origin for the widgets nested in it.
    Container,
    Canvas,
}

impl WidgetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::Entry => "entry",
            Self::Button => "button",
            Self::Container => "container",
            Self::Canvas => "canvas",
        }
    }
}

/// One UI primitive, placed relative to its parent container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetInstruction {
    pub id: WidgetId,
    /// Enclosing container; `None` places the widget on the top-level canvas.
    pub parent: Option<WidgetId>,
    pub kind: WidgetKind,
    /// Display text: caption for buttons and labels, node name otherwise.
    pub label: String,
    /// Local geometry.
    pub rect: Rect,
    /// Initial content of an entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Color>,
    /// Id of the design node this came from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// The ordered instruction sequence for one generate request.
///
/// Order is creation order; a container always precedes the widgets nested
/// in it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetPlan {
    pub widgets: Vec<WidgetInstruction>,
    /// Size of the region covering every selected frame.
    pub width: f64,
    pub height: f64,
    /// Document-global position mapped to local (0, 0).
    pub origin: [f64; 2],
}

impl WidgetPlan {
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WidgetInstruction> {
        self.widgets.iter()
    }

    pub fn get(&self, id: WidgetId) -> Option<&WidgetInstruction> {
        self.widgets.get(id.0)
    }

    /// Widgets placed directly on the top-level canvas.
    pub fn roots(&self) -> impl Iterator<Item = &WidgetInstruction> {
        self.widgets.iter().filter(|w| w.parent.is_none())
    }

    pub fn children_of(&self, id: WidgetId) -> impl Iterator<Item = &WidgetInstruction> {
        self.widgets.iter().filter(move |w| w.parent == Some(id))
    }

    /// Position of a widget on the top-level canvas, following its parent chain.
    pub fn canvas_position(&self, id: WidgetId) -> Option<(f64, f64)> {
        let mut widget = self.get(id)?;
        let (mut x, mut y) = (widget.rect.x, widget.rect.y);
        while let Some(parent) = widget.parent {
            widget = self.get(parent)?;
            x += widget.rect.x;
            y += widget.rect.y;
        }
        Some((x, y))
    }
}
