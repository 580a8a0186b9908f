//! The design node tree.
//!
//! Mirrors the node shape of a Figma file response closely enough to be
//! deserialized straight from it. Unknown members are ignored; missing
//! geometry and style fall back to the defaults documented on each accessor.

use crate::errors::DocumentError;
use crate::types::{Color, Rect};
use serde::{Deserialize, Serialize};

/// Width used when a node carries no bounding box.
pub const FALLBACK_WIDTH: f64 = 100.0;
/// Height used when a node carries no bounding box.
pub const FALLBACK_HEIGHT: f64 = 50.0;

/// A fetched design file: its display name plus the root node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignDocument {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub document: DesignNode,
}

impl DesignDocument {
    pub fn new(name: impl Into<String>, document: DesignNode) -> Self {
        Self {
            name: name.into(),
            version: None,
            document,
        }
    }

    /// Parse a file response body.
    ///
    /// The body must be a JSON object whose `document` member is an object;
    /// anything else is rejected as malformed before node decoding starts.
    pub fn from_json(body: &str) -> Result<Self, DocumentError> {
        let mut deserializer = serde_json::Deserializer::from_str(body);
        deserializer.disable_recursion_limit();
        let value =
            serde_json::Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
        deserializer.end()?;
        Self::from_value(value)
    }

    /// Same as [`DesignDocument::from_json`] for an already decoded value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, DocumentError> {
        let Some(object) = value.as_object() else {
            return Err(DocumentError::Malformed(
                "response body is not a JSON object".to_string(),
            ));
        };
        match object.get("document") {
            Some(serde_json::Value::Object(_)) => {}
            Some(_) => {
                return Err(DocumentError::Malformed(
                    "`document` member is not an object".to_string(),
                ))
            }
            None => {
                return Err(DocumentError::Malformed(
                    "response has no `document` member".to_string(),
                ))
            }
        }
        Ok(Self::deserialize(serde_stacker::Deserializer::new(value))?)
    }
}

/// Node type tag.
///
/// Recognized tags get their own variant; everything else is kept verbatim
/// in `Other` so it can still be traversed and reported.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    Frame,
    Text,
    Rectangle,
    Button,
    Input,
    Other(String),
}

impl NodeKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Frame => "FRAME",
            Self::Text => "TEXT",
            Self::Rectangle => "RECTANGLE",
            Self::Button => "BUTTON",
            Self::Input => "INPUT",
            Self::Other(tag) => tag,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl Default for NodeKind {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for NodeKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "FRAME" => Self::Frame,
            "TEXT" => Self::Text,
            "RECTANGLE" => Self::Rectangle,
            "BUTTON" => Self::Button,
            "INPUT" => Self::Input,
            _ => Self::Other(tag),
        }
    }
}

impl From<&str> for NodeKind {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

/// One node of the design tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: NodeKind,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DesignNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absolute_bounding_box: Option<BoundingBox>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TypeStyle>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<Paint>,
}

impl DesignNode {
    /// Create a new node with no geometry, style, or children.
    pub fn new(kind: impl Into<NodeKind>, name: impl Into<String>) -> Self {
        Self {
            id: None,
            kind: kind.into(),
            name: name.into(),
            children: Vec::new(),
            absolute_bounding_box: None,
            characters: None,
            style: None,
            fills: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_bounds(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.absolute_bounding_box = Some(BoundingBox { x, y, width, height });
        self
    }

    pub fn with_characters(mut self, characters: impl Into<String>) -> Self {
        self.characters = Some(characters.into());
        self
    }

    pub fn with_style(mut self, style: TypeStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_fill(mut self, paint: Paint) -> Self {
        self.fills.push(paint);
        self
    }

    pub fn with_child(mut self, child: DesignNode) -> Self {
        self.children.push(child);
        self
    }

    /// Absolute bounds, falling back to (0, 0, 100, 50) when absent.
    pub fn bounds(&self) -> Rect {
        let bbox = self.absolute_bounding_box.unwrap_or_default();
        Rect::new(bbox.x, bbox.y, bbox.width, bbox.height)
    }

    /// Color of the first `SOLID` paint that carries one.
    pub fn solid_fill(&self) -> Option<Color> {
        self.fills
            .iter()
            .find(|paint| paint.is_solid() && paint.color.is_some())
            .and_then(|paint| paint.color)
            .map(|c| c.to_color())
    }

    /// Text payload, falling back to the node name.
    pub fn text(&self) -> &str {
        self.characters.as_deref().unwrap_or(&self.name)
    }

    /// Case-insensitive substring test against the node name.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }

    /// Pre-order iterator over this node and all its descendants.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Pre-order traversal, document order preserved.
pub struct Descendants<'a> {
    stack: Vec<&'a DesignNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a DesignNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Bounding box in document-global coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default = "fallback_width")]
    pub width: f64,
    #[serde(default = "fallback_height")]
    pub height: f64,
}

fn fallback_width() -> f64 {
    FALLBACK_WIDTH
}

fn fallback_height() -> f64 {
    FALLBACK_HEIGHT
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: FALLBACK_WIDTH,
            height: FALLBACK_HEIGHT,
        }
    }
}

/// A paint descriptor from a node's `fills`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<UnitColor>,
}

impl Paint {
    pub fn solid(r: f64, g: f64, b: f64) -> Self {
        Self {
            kind: "SOLID".to_string(),
            color: Some(UnitColor { r, g, b, a: 1.0 }),
        }
    }

    pub fn is_solid(&self) -> bool {
        self.kind == "SOLID"
    }
}

/// RGBA with unit-float channels, as design files store them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitColor {
    #[serde(default)]
    pub r: f64,
    #[serde(default)]
    pub g: f64,
    #[serde(default)]
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl UnitColor {
    /// Alpha is dropped; only the RGB triple is consulted.
    pub fn to_color(&self) -> Color {
        Color::from_unit_rgb(self.r, self.g, self.b)
    }
}

/// Font metadata of a text node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
}

impl TypeStyle {
    pub fn new(font_family: impl Into<String>, font_size: f64) -> Self {
        Self {
            font_family: Some(font_family.into()),
            font_size: Some(font_size),
        }
    }
}
