//! Python Tkinter code generator.

use super::{CodeGenerator, EmitOptions};
use crate::ast::{Arg, Expr, FunctionDef, Item, Module, Stmt};
use crate::error::{CodegenError, Result};
use crate::naming::HandlerNames;
use figtk_synth::{WidgetInstruction, WidgetKind, WidgetPlan};

const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

/// Names the generated program binds itself.
const BOUND_NAMES: &[&str] = &["tk", "root"];

/// Python 3 Tkinter code generator.
///
/// Every widget is positioned with `place()` so the program reproduces the
/// plan's absolute layout exactly.
#[derive(Debug, Clone, Default)]
pub struct TkinterGenerator {
    options: EmitOptions,
}

impl TkinterGenerator {
    /// Create a new Tkinter generator with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom options.
    pub fn with_options(options: EmitOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EmitOptions {
        &self.options
    }

    /// Build the syntax tree for a plan.
    pub fn build_module(&self, plan: &WidgetPlan) -> Result<Module> {
        validate_plan(plan)?;
        let variables: Vec<String> = plan.iter().map(variable_name).collect();
        self.validate_entry_point(&variables)?;

        let mut handlers = HandlerNames::new();
        handlers.reserve(self.options.entry_point.clone());

        let mut body = vec![
            Stmt::assign("root", Expr::call(Expr::attr(Expr::name("tk"), "Tk"), vec![])),
            Stmt::method("root", "title", vec![Arg::pos(Expr::str(&self.options.window_title))]),
            Stmt::method(
                "root",
                "geometry",
                vec![Arg::pos(Expr::str(format!(
                    "{}x{}",
                    window_extent(plan.width),
                    window_extent(plan.height)
                )))],
            ),
        ];
        if !plan.is_empty() {
            body.push(Stmt::Blank);
        }

        let mut handler_defs = Vec::new();
        for widget in plan.iter() {
            let variable = &variables[widget.id.0];
            let parent = widget
                .parent
                .map_or("root", |parent| variables[parent.0].as_str());

            let handler = if widget.kind == WidgetKind::Button {
                let name = handlers.allocate(&widget.label);
                handler_defs.push(Item::Function(FunctionDef::new(&name, vec![Stmt::Pass])));
                Some(name)
            } else {
                None
            };

            body.extend(widget_statements(widget, variable, parent, handler));
        }

        body.push(Stmt::Blank);
        body.push(Stmt::method("root", "mainloop", vec![]));

        let mut module = Module::new();
        module.push(Item::Comment(
            "Generated by figtk. Widgets are placed at the positions recorded in the design."
                .to_string(),
        ));
        module.push(Item::Import {
            module: "tkinter".to_string(),
            alias: Some("tk".to_string()),
        });
        module.items.extend(handler_defs);
        module.push(Item::Function(FunctionDef::new(&self.options.entry_point, body)));
        module.push(Item::MainGuard(vec![Stmt::Expr(Expr::call(
            Expr::name(&self.options.entry_point),
            vec![],
        ))]));

        log::debug!(
            "built tkinter module with {} widgets and {} handlers",
            plan.len(),
            handlers.allocated().len()
        );
        Ok(module)
    }

    fn validate_entry_point(&self, variables: &[String]) -> Result<()> {
        let name = self.options.entry_point.as_str();
        let valid = is_identifier(name)
            && !PYTHON_KEYWORDS.contains(&name)
            && !BOUND_NAMES.contains(&name)
            && !variables.iter().any(|v| v == name);
        if valid {
            Ok(())
        } else {
            Err(CodegenError::InvalidEntryPoint(name.to_string()))
        }
    }
}

impl CodeGenerator for TkinterGenerator {
    fn framework_name(&self) -> &'static str {
        "Tkinter"
    }

    fn file_extension(&self) -> &'static str {
        "py"
    }

    fn generate(&self, plan: &WidgetPlan) -> Result<String> {
        Ok(self.build_module(plan)?.render())
    }
}

/// Ids must match positions and parents must be earlier containers.
fn validate_plan(plan: &WidgetPlan) -> Result<()> {
    for (position, widget) in plan.iter().enumerate() {
        if widget.id.0 != position {
            return Err(CodegenError::MisplacedWidget {
                position,
                id: widget.id,
            });
        }
        if let Some(parent) = widget.parent {
            let is_container = parent.0 < position
                && plan
                    .get(parent)
                    .is_some_and(|p| p.kind == WidgetKind::Container);
            if !is_container {
                return Err(CodegenError::InvalidParent {
                    child: widget.id,
                    parent,
                });
            }
        }
    }
    Ok(())
}

fn variable_name(widget: &WidgetInstruction) -> String {
    format!("{}_{}", widget.kind.as_str(), widget.id.0)
}

/// Whole pixels, at least one.
fn window_extent(value: f64) -> String {
    if value.is_finite() {
        format!("{:.0}", value.ceil().max(1.0))
    } else {
        "1".to_string()
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn widget_statements(
    widget: &WidgetInstruction,
    variable: &str,
    parent: &str,
    handler: Option<String>,
) -> Vec<Stmt> {
    let mut args = vec![Arg::pos(Expr::name(parent))];
    let class = match widget.kind {
        WidgetKind::Container => {
            if let Some(fill) = widget.fill {
                args.push(Arg::kw("bg", Expr::str(fill.to_hex())));
            }
            "Frame"
        }
        WidgetKind::Canvas => {
            if let Some(fill) = widget.fill {
                args.push(Arg::kw("bg", Expr::str(fill.to_hex())));
            }
            args.push(Arg::kw("highlightthickness", Expr::Int(0)));
            "Canvas"
        }
        WidgetKind::Label => {
            args.push(Arg::kw("text", Expr::str(&widget.label)));
            if let Some(font) = &widget.font {
                // negative sizes are pixels in Tk
                let pixels = (font.size.round() as i64).max(1);
                args.push(Arg::kw(
                    "font",
                    Expr::Tuple(vec![Expr::str(&font.family), Expr::Int(-pixels)]),
                ));
            }
            "Label"
        }
        WidgetKind::Entry => "Entry",
        WidgetKind::Button => {
            args.push(Arg::kw("text", Expr::str(&widget.label)));
            if let Some(handler) = handler {
                args.push(Arg::kw("command", Expr::name(handler)));
            }
            "Button"
        }
    };

    let mut stmts = vec![Stmt::assign(
        variable,
        Expr::call(Expr::attr(Expr::name("tk"), class), args),
    )];

    if widget.kind == WidgetKind::Entry {
        if let Some(text) = widget.text.as_deref().filter(|t| !t.is_empty()) {
            stmts.push(Stmt::method(
                variable,
                "insert",
                vec![Arg::pos(Expr::Int(0)), Arg::pos(Expr::str(text))],
            ));
        }
    }

    let rect = widget.rect;
    stmts.push(Stmt::method(
        variable,
        "place",
        vec![
            Arg::kw("x", Expr::Num(rect.x)),
            Arg::kw("y", Expr::Num(rect.y)),
            Arg::kw("width", Expr::Num(rect.width)),
            Arg::kw("height", Expr::Num(rect.height)),
        ],
    ));
    stmts
}

#[cfg(test)]
mod tests {
    use super::*;
    use figtk_core::{Color, Font, Rect};
    use figtk_synth::WidgetId;

    fn widget(
        id: usize,
        parent: Option<usize>,
        kind: WidgetKind,
        label: &str,
    ) -> WidgetInstruction {
        WidgetInstruction {
            id: WidgetId(id),
            parent: parent.map(WidgetId),
            kind,
            label: label.to_string(),
            rect: Rect::new(10.0, 20.0, 80.0, 30.0),
            text: None,
            font: None,
            fill: None,
            source: None,
        }
    }

    fn plan(widgets: Vec<WidgetInstruction>) -> WidgetPlan {
        WidgetPlan {
            widgets,
            width: 300.0,
            height: 150.0,
            origin: [0.0, 0.0],
        }
    }

    #[test]
    fn test_empty_plan_is_a_runnable_window() {
        let source = TkinterGenerator::new().generate(&WidgetPlan::default()).unwrap();
        assert!(source.contains("import tkinter as tk\n"));
        assert!(source.contains("    root.title(\"Auto-generated UI from Figma\")\n"));
        assert!(source.contains("    root.geometry(\"1x1\")\n"));
        assert!(source.contains("    root.mainloop()\n"));
        assert!(source.ends_with("if __name__ == \"__main__\":\n    create_ui()\n"));
        assert!(!source.contains(".place("));
    }

    #[test]
    fn test_window_geometry_is_not_clamped() {
        let mut wide = plan(vec![]);
        wide.width = 1e20;
        wide.height = 0.4;
        let source = TkinterGenerator::new().generate(&wide).unwrap();
        assert!(source.contains("    root.geometry(\"100000000000000000000x1\")\n"));
    }

    #[test]
    fn test_button_gets_handler() {
        let source = TkinterGenerator::new()
            .generate(&plan(vec![widget(0, None, WidgetKind::Button, "Submit")]))
            .unwrap();
        assert!(source.contains("def on_submit_click():\n    pass\n"));
        assert!(source.contains(
            "    button_0 = tk.Button(root, text=\"Submit\", command=on_submit_click)\n"
        ));
        assert!(source.contains("    button_0.place(x=10, y=20, width=80, height=30)\n"));
    }

    #[test]
    fn test_nested_widget_uses_container_variable() {
        let mut container = widget(0, None, WidgetKind::Container, "Card");
        container.fill = Some(Color::WHITE);
        let source = TkinterGenerator::new()
            .generate(&plan(vec![container, widget(1, Some(0), WidgetKind::Entry, "Name")]))
            .unwrap();
        assert!(source.contains("    container_0 = tk.Frame(root, bg=\"#ffffff\")\n"));
        assert!(source.contains("    entry_1 = tk.Entry(container_0)\n"));
    }

    #[test]
    fn test_entry_prefill_and_label_font() {
        let mut entry = widget(0, None, WidgetKind::Entry, "Input Email");
        entry.text = Some("you@example.com".to_string());
        let mut label = widget(1, None, WidgetKind::Label, "Hello");
        label.font = Some(Font::new("Inter", 15.6));
        let mut canvas = widget(2, None, WidgetKind::Canvas, "Divider");
        canvas.fill = Some(Color::LIGHT_GRAY);
        canvas.rect = Rect::new(0.5, 1.25, 100.0, 2.0);

        let source = TkinterGenerator::new()
            .generate(&plan(vec![entry, label, canvas]))
            .unwrap();
        assert!(source.contains("    entry_0.insert(0, \"you@example.com\")\n"));
        assert!(source.contains(
            "    label_1 = tk.Label(root, text=\"Hello\", font=(\"Inter\", -16))\n"
        ));
        assert!(source.contains(
            "    canvas_2 = tk.Canvas(root, bg=\"#d9d9d9\", highlightthickness=0)\n"
        ));
        assert!(source.contains("    canvas_2.place(x=0.5, y=1.25, width=100, height=2)\n"));
    }

    #[test]
    fn test_invalid_parent_is_rejected() {
        let result = TkinterGenerator::new().generate(&plan(vec![
            widget(0, None, WidgetKind::Label, "a"),
            widget(1, Some(0), WidgetKind::Label, "b"),
        ]));
        assert_eq!(
            result,
            Err(CodegenError::InvalidParent {
                child: WidgetId(1),
                parent: WidgetId(0)
            })
        );

        let forward = TkinterGenerator::new().generate(&plan(vec![
            widget(0, Some(1), WidgetKind::Label, "a"),
            widget(1, None, WidgetKind::Container, "b"),
        ]));
        assert!(matches!(forward, Err(CodegenError::InvalidParent { .. })));
    }

    #[test]
    fn test_misplaced_id_is_rejected() {
        let result =
            TkinterGenerator::new().generate(&plan(vec![widget(3, None, WidgetKind::Label, "a")]));
        assert_eq!(
            result,
            Err(CodegenError::MisplacedWidget {
                position: 0,
                id: WidgetId(3)
            })
        );
    }

    #[test]
    fn test_custom_options() {
        let generator = TkinterGenerator::with_options(
            EmitOptions::new()
                .with_window_title("Checkout")
                .with_entry_point("main"),
        );
        let source = generator.generate(&WidgetPlan::default()).unwrap();
        assert!(source.contains("def main():\n"));
        assert!(source.contains("root.title(\"Checkout\")"));
        assert!(source.ends_with("    main()\n"));
    }

    #[test]
    fn test_entry_point_must_be_identifier() {
        for bad in ["", "2fast", "class", "root", "my-ui", "label_0"] {
            let generator =
                TkinterGenerator::with_options(EmitOptions::new().with_entry_point(bad));
            let result = generator.generate(&plan(vec![widget(0, None, WidgetKind::Label, "x")]));
            assert_eq!(result, Err(CodegenError::InvalidEntryPoint(bad.to_string())));
        }
    }

    #[test]
    fn test_handler_does_not_shadow_entry_point() {
        let generator =
            TkinterGenerator::with_options(EmitOptions::new().with_entry_point("on_go_click"));
        let source = generator
            .generate(&plan(vec![widget(0, None, WidgetKind::Button, "Go")]))
            .unwrap();
        assert!(source.contains("def on_go_2_click():"));
        assert!(source.contains("command=on_go_2_click"));
    }

    #[test]
    fn test_framework_metadata() {
        let generator = TkinterGenerator::new();
        assert_eq!(generator.framework_name(), "Tkinter");
        assert_eq!(generator.file_extension(), "py");
    }
}
