//! The presentation host seam and the preview walk.

use crate::error::{RenderError, Result};
use figtk_core::{Color, Font, Rect};
use figtk_synth::{WidgetId, WidgetKind, WidgetPlan};

/// A surface that can materialize widgets.
///
/// `Handle` identifies something the host created: the surface itself or a
/// widget. Widgets nested in a container receive that container's handle as
/// their parent, and their rect is local to it.
pub trait PresentationHost {
    type Handle: Clone;

    /// Open the single top-level surface.
    fn open_surface(&mut self, width: f64, height: f64) -> Result<Self::Handle>;

    /// Create one primitive.
    fn create(&mut self, command: PlaceCommand<'_, Self::Handle>) -> Result<Self::Handle>;
}

/// "Create primitive `kind` at `rect` inside `parent`."
#[derive(Debug, Clone)]
pub struct PlaceCommand<'a, H> {
    pub id: WidgetId,
    pub kind: WidgetKind,
    pub parent: &'a H,
    /// Geometry local to `parent`.
    pub rect: Rect,
    pub label: &'a str,
    pub text: Option<&'a str>,
    pub font: Option<&'a Font>,
    pub fill: Option<Color>,
}

/// Handles produced by one preview run.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview<H> {
    pub surface: H,
    /// One handle per instruction, in instruction order.
    pub widgets: Vec<H>,
}

/// Materialize a plan on `host`, in instruction order.
pub fn render_preview<H: PresentationHost>(
    plan: &WidgetPlan,
    host: &mut H,
) -> Result<Preview<H::Handle>> {
    let surface = host.open_surface(plan.width, plan.height)?;
    let mut widgets: Vec<H::Handle> = Vec::with_capacity(plan.len());

    for widget in plan.iter() {
        let parent = match widget.parent {
            None => &surface,
            Some(parent) => widgets.get(parent.0).ok_or(RenderError::MissingParent {
                child: widget.id,
                parent,
            })?,
        };

        let handle = host.create(PlaceCommand {
            id: widget.id,
            kind: widget.kind,
            parent,
            rect: widget.rect,
            label: &widget.label,
            text: widget.text.as_deref(),
            font: widget.font.as_ref(),
            fill: widget.fill,
        })?;
        widgets.push(handle);
    }

    log::info!(
        "rendered preview with {} widgets on a {}x{} surface",
        widgets.len(),
        plan.width,
        plan.height
    );

    Ok(Preview { surface, widgets })
}
