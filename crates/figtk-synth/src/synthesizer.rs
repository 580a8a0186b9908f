//! Widget synthesis from selected frames.

use crate::classify::{classify, Classification, WidgetSpec};
use crate::widget::{WidgetId, WidgetInstruction, WidgetPlan};
use crate::WidgetKind;
use figtk_core::{Color, DesignNode, Font, Rect};
use glam::DVec2;

/// Options for widget synthesis.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthOptions {
    /// Font for text nodes without style metadata.
    pub default_font: Font,
    /// Fill for plain rectangles without a solid paint.
    pub default_fill: Color,
}

impl Default for SynthOptions {
    fn default() -> Self {
        Self {
            default_font: Font::default(),
            default_fill: Color::LIGHT_GRAY,
        }
    }
}

impl SynthOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_font(mut self, font: Font) -> Self {
        self.default_font = font;
        self
    }

    pub fn with_default_fill(mut self, fill: Color) -> Self {
        self.default_fill = fill;
        self
    }
}

/// Synthesize the widget plan for a set of selected frames.
///
/// The frames share one canvas: the minimum corner of their bounding boxes
/// becomes (0, 0). Every container entered during the walk makes its own
/// absolute position the origin of its descendants. Children of any other
/// node keep the origin and parent of that node.
pub fn synthesize(frames: &[&DesignNode], options: &SynthOptions) -> WidgetPlan {
    let Some(extent) = frames
        .iter()
        .map(|frame| frame.bounds())
        .reduce(|acc, bounds| acc.union(&bounds))
    else {
        return WidgetPlan::default();
    };

    let origin = DVec2::new(extent.x, extent.y);
    let mut builder = PlanBuilder {
        widgets: Vec::new(),
        options,
    };
    for frame in frames {
        builder.visit(frame, origin, None);
    }

    log::info!(
        "synthesized {} widgets from {} frame(s) on a {}x{} canvas",
        builder.widgets.len(),
        frames.len(),
        extent.width,
        extent.height
    );

    WidgetPlan {
        widgets: builder.widgets,
        width: extent.width,
        height: extent.height,
        origin: [extent.x, extent.y],
    }
}

struct PlanBuilder<'a> {
    widgets: Vec<WidgetInstruction>,
    options: &'a SynthOptions,
}

impl<'a> PlanBuilder<'a> {
    fn visit(&mut self, node: &DesignNode, origin: DVec2, parent: Option<WidgetId>) {
        let bounds = node.bounds();

        match classify(node, self.options) {
            Classification::Emit(spec) if spec.kind == WidgetKind::Container => {
                let id = self.push(node, spec, bounds, origin, parent);
                let inner = DVec2::new(bounds.x, bounds.y);
                for child in &node.children {
                    self.visit(child, inner, Some(id));
                }
            }
            Classification::Emit(spec) => {
                self.push(node, spec, bounds, origin, parent);
                for child in &node.children {
                    self.visit(child, origin, parent);
                }
            }
            Classification::PassThrough => {
                for child in &node.children {
                    self.visit(child, origin, parent);
                }
            }
        }
    }

    fn push(
        &mut self,
        node: &DesignNode,
        spec: WidgetSpec,
        bounds: Rect,
        origin: DVec2,
        parent: Option<WidgetId>,
    ) -> WidgetId {
        let id = WidgetId(self.widgets.len());
        self.widgets.push(WidgetInstruction {
            id,
            parent,
            kind: spec.kind,
            label: spec.label,
            rect: bounds.relative_to(origin.x, origin.y),
            text: spec.text,
            font: spec.font,
            fill: spec.fill,
            source: node.id.clone(),
        });
        id
    }
}
