//! SVG mock-up host.

use crate::error::{RenderError, Result};
use crate::host::{PlaceCommand, PresentationHost};
use figtk_core::{Color, Rect};
use figtk_synth::WidgetKind;

const BUTTON_FACE: Color = Color::rgb8(0xe1, 0xe1, 0xe1);
const OUTLINE: &str = "#7a7a7a";
const PLACEHOLDER_TEXT: &str = "#6d6d6d";
const DEFAULT_FONT_FAMILY: &str = "Arial";
const DEFAULT_FONT_SIZE: f64 = 12.0;

/// Handle to a surface or element drawn by [`SvgHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgHandle(usize);

/// Draws each primitive as SVG shapes at its absolute position.
#[derive(Debug, Clone, Default)]
pub struct SvgHost {
    width: f64,
    height: f64,
    /// Absolute top-left corner per handle.
    offsets: Vec<(f64, f64)>,
    elements: Vec<String>,
}

impl SvgHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// The finished document.
    pub fn to_svg(&self) -> String {
        let width = self.width.max(1.0);
        let height = self.height.max(1.0);

        let mut svg = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">
"#,
            width, height, width, height
        );
        svg.push_str(&format!(
            "  <rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"#ffffff\" />\n",
            width, height
        ));
        for element in &self.elements {
            svg.push_str("  ");
            svg.push_str(element);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    fn rect(&mut self, rect: &Rect, fill: &str, stroke: Option<&str>) {
        let mut attrs = vec![
            format!("x=\"{}\"", rect.x),
            format!("y=\"{}\"", rect.y),
            format!("width=\"{}\"", rect.width),
            format!("height=\"{}\"", rect.height),
            format!("fill=\"{}\"", fill),
        ];
        if let Some(stroke) = stroke {
            attrs.push(format!("stroke=\"{}\"", stroke));
        }
        self.elements.push(format!("<rect {} />", attrs.join(" ")));
    }

    fn text(
        &mut self,
        rect: &Rect,
        content: &str,
        family: &str,
        size: f64,
        color: &str,
        centered: bool,
    ) {
        if content.is_empty() {
            return;
        }
        let (x, anchor) = if centered {
            (rect.x + rect.width / 2.0, "middle")
        } else {
            (rect.x + 2.0, "start")
        };
        self.elements.push(format!(
            "<text x=\"{}\" y=\"{}\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\" \
             text-anchor=\"{}\" dominant-baseline=\"middle\">{}</text>",
            x,
            rect.y + rect.height / 2.0,
            escape_xml(family),
            size,
            color,
            anchor,
            escape_xml(content)
        ));
    }
}

impl PresentationHost for SvgHost {
    type Handle = SvgHandle;

    fn open_surface(&mut self, width: f64, height: f64) -> Result<SvgHandle> {
        self.width = width;
        self.height = height;
        self.elements.clear();
        self.offsets.clear();
        self.offsets.push((0.0, 0.0));
        Ok(SvgHandle(0))
    }

    fn create(&mut self, command: PlaceCommand<'_, SvgHandle>) -> Result<SvgHandle> {
        let (ox, oy) = *self
            .offsets
            .get(command.parent.0)
            .ok_or_else(|| RenderError::Host(format!("unknown handle {:?}", command.parent)))?;
        let local = command.rect;
        let abs = Rect::new(ox + local.x, oy + local.y, local.width, local.height);

        let (family, size) = command
            .font
            .map_or((DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE), |f| (f.family.as_str(), f.size));

        match command.kind {
            WidgetKind::Container => {
                let fill = command.fill.map_or_else(|| "none".to_string(), |c| c.to_hex());
                self.rect(&abs, &fill, Some(OUTLINE));
            }
            WidgetKind::Canvas => {
                let fill = command.fill.map_or_else(|| "none".to_string(), |c| c.to_hex());
                self.rect(&abs, &fill, None);
            }
            WidgetKind::Label => {
                self.text(&abs, command.label, family, size, "#000000", false);
            }
            WidgetKind::Entry => {
                self.rect(&abs, "#ffffff", Some(OUTLINE));
                let content = command.text.unwrap_or_default();
                self.text(&abs, content, family, size, PLACEHOLDER_TEXT, false);
            }
            WidgetKind::Button => {
                self.rect(&abs, &BUTTON_FACE.to_hex(), Some(OUTLINE));
                self.text(&abs, command.label, family, size, "#000000", true);
            }
        }

        self.offsets.push((abs.x, abs.y));
        Ok(SvgHandle(self.offsets.len() - 1))
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(ch),
            // Not allowed anywhere in an XML 1.0 document.
            '\u{0}'..='\u{1f}' | '\u{FFFE}' | '\u{FFFF}' => {}
            c => out.push(c),
        }
    }
    out
}
