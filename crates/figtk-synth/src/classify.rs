//! Node classification.

use crate::synthesizer::SynthOptions;
use crate::widget::WidgetKind;
use figtk_core::{Color, DesignNode, Font, NodeKind};

/// What a node becomes.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    Emit(WidgetSpec),
    /// Not a widget; children are still visited with the same origin.
    PassThrough,
}

/// Everything about a widget except its placement.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetSpec {
    pub kind: WidgetKind,
    pub label: String,
    pub text: Option<String>,
    pub font: Option<Font>,
    pub fill: Option<Color>,
}

impl WidgetSpec {
    fn new(kind: WidgetKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            text: None,
            font: None,
            fill: None,
        }
    }
}

/// Decide what `node` becomes. Total over every node kind.
///
/// | kind | name hint | result |
/// |---|---|---|
/// | FRAME | | Container |
/// | TEXT | contains "input" | Entry pre-filled with the text |
/// | TEXT | otherwise | Label |
/// | RECTANGLE | contains "button" | Button, caption = name without "button" |
/// | RECTANGLE | contains "input" | Entry |
/// | RECTANGLE | otherwise | Canvas with the resolved fill |
/// | BUTTON | | Button |
/// | INPUT | | Entry |
/// | other | | pass-through |
pub fn classify(node: &DesignNode, options: &SynthOptions) -> Classification {
    let spec = match &node.kind {
        NodeKind::Frame => WidgetSpec {
            fill: node.solid_fill(),
            ..WidgetSpec::new(WidgetKind::Container, &node.name)
        },
        NodeKind::Text if node.name_contains("input") => WidgetSpec {
            text: Some(node.text().to_string()),
            ..WidgetSpec::new(WidgetKind::Entry, &node.name)
        },
        NodeKind::Text => WidgetSpec {
            font: Some(font_for(node, options)),
            ..WidgetSpec::new(WidgetKind::Label, node.text())
        },
        NodeKind::Rectangle if node.name_contains("button") => {
            WidgetSpec::new(WidgetKind::Button, button_caption(&node.name))
        }
        NodeKind::Rectangle if node.name_contains("input") => WidgetSpec {
            text: node.characters.clone(),
            ..WidgetSpec::new(WidgetKind::Entry, &node.name)
        },
        NodeKind::Rectangle => WidgetSpec {
            fill: Some(node.solid_fill().unwrap_or(options.default_fill)),
            ..WidgetSpec::new(WidgetKind::Canvas, &node.name)
        },
        NodeKind::Button => WidgetSpec::new(WidgetKind::Button, &node.name),
        NodeKind::Input => WidgetSpec {
            text: node.characters.clone(),
            ..WidgetSpec::new(WidgetKind::Entry, &node.name)
        },
        NodeKind::Other(tag) => {
            log::debug!("{:?} ({}) passes through", node.name, tag);
            return Classification::PassThrough;
        }
    };

    log::debug!("{:?} ({}) -> {:?}", node.name, node.kind.as_str(), spec.kind);
    Classification::Emit(spec)
}

fn font_for(node: &DesignNode, options: &SynthOptions) -> Font {
    let style = node.style.as_ref();
    Font {
        family: style
            .and_then(|s| s.font_family.clone())
            .unwrap_or_else(|| options.default_font.family.clone()),
        size: style
            .and_then(|s| s.font_size)
            .unwrap_or(options.default_font.size),
    }
}

/// "Submit Button" -> "Submit". Falls back to the full name when nothing is left.
fn button_caption(name: &str) -> String {
    let caption = strip_word(name, "button");
    if caption.is_empty() {
        name.trim().to_string()
    } else {
        caption
    }
}

/// Remove every ASCII-case-insensitive occurrence of `word` and trim.
pub fn strip_word(text: &str, word: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while !rest.is_empty() {
        if let Some(head) = rest.get(..word.len()) {
            if head.eq_ignore_ascii_case(word) {
                rest = &rest[word.len()..];
                continue;
            }
        }
        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            out.push(ch);
        }
        rest = chars.as_str();
    }
    out.trim().to_string()
}
