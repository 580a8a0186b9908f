//! A small Python syntax tree for generated programs.
//!
//! Generators build a [`Module`] and render it in one pass, so quoting,
//! number formatting and indentation live in exactly one place.

use std::fmt::{self, Write as _};

const INDENT: &str = "    ";

/// A Python source file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Module {
    pub items: Vec<Item>,
}

impl Module {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Render to source text. Top-level items are separated by two blank
    /// lines, except consecutive comments and imports which stay together.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut previous: Option<&Item> = None;
        for item in &self.items {
            if let Some(prev) = previous {
                if prev.is_header() && item.is_header() {
                    // keep the header block tight
                } else {
                    out.push_str("\n\n");
                }
            }
            item.render(&mut out);
            previous = Some(item);
        }
        out
    }
}

/// Top-level item.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Comment(String),
    /// `import module as alias`
    Import { module: String, alias: Option<String> },
    Function(FunctionDef),
    /// `if __name__ == "__main__":` followed by the body.
    MainGuard(Vec<Stmt>),
}

impl Item {
    fn is_header(&self) -> bool {
        matches!(self, Self::Comment(_) | Self::Import { .. })
    }

    fn render(&self, out: &mut String) {
        match self {
            Self::Comment(text) => write_comment(out, text),
            Self::Import { module, alias } => match alias {
                Some(alias) => {
                    let _ = writeln!(out, "import {module} as {alias}");
                }
                None => {
                    let _ = writeln!(out, "import {module}");
                }
            },
            Self::Function(def) => def.render(out),
            Self::MainGuard(body) => {
                out.push_str("if __name__ == \"__main__\":\n");
                render_block(out, 1, body);
            }
        }
    }
}

/// `def name():` with a body.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    pub name: String,
    pub body: Vec<Stmt>,
}

impl FunctionDef {
    pub fn new(name: impl Into<String>, body: Vec<Stmt>) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }

    fn render(&self, out: &mut String) {
        let _ = writeln!(out, "def {}():", self.name);
        render_block(out, 1, &self.body);
    }
}

/// Statement inside a block.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Assign { target: String, value: Expr },
    Expr(Expr),
    Pass,
    Blank,
}

impl Stmt {
    pub fn assign(target: impl Into<String>, value: Expr) -> Self {
        Self::Assign {
            target: target.into(),
            value,
        }
    }

    /// `target.method(args...)`
    pub fn method(target: &str, method: &str, args: Vec<Arg>) -> Self {
        Self::Expr(Expr::call(Expr::attr(Expr::name(target), method), args))
    }
}

fn render_block(out: &mut String, depth: usize, body: &[Stmt]) {
    if body.is_empty() {
        Stmt::Pass.render(out, depth);
        return;
    }
    for stmt in body {
        stmt.render(out, depth);
    }
}

impl Stmt {
    fn render(&self, out: &mut String, depth: usize) {
        let indent = INDENT.repeat(depth);
        match self {
            Self::Assign { target, value } => {
                let _ = writeln!(out, "{indent}{target} = {value}");
            }
            Self::Expr(expr) => {
                let _ = writeln!(out, "{indent}{expr}");
            }
            Self::Pass => {
                let _ = writeln!(out, "{indent}pass");
            }
            Self::Blank => out.push('\n'),
        }
    }
}

fn write_comment(out: &mut String, text: &str) {
    for line in text.lines() {
        if line.is_empty() {
            out.push_str("#\n");
        } else {
            let _ = writeln!(out, "# {line}");
        }
    }
}

/// Expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Name(String),
    Str(String),
    Int(i64),
    Num(f64),
    Tuple(Vec<Expr>),
    Attr(Box<Expr>, String),
    Call { func: Box<Expr>, args: Vec<Arg> },
}

impl Expr {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    pub fn str(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    pub fn attr(base: Expr, attr: impl Into<String>) -> Self {
        Self::Attr(Box::new(base), attr.into())
    }

    pub fn call(func: Expr, args: Vec<Arg>) -> Self {
        Self::Call {
            func: Box::new(func),
            args,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Str(value) => f.write_str(&quote(value)),
            Self::Int(value) => write!(f, "{value}"),
            Self::Num(value) => f.write_str(&format_number(*value)),
            Self::Tuple(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Self::Attr(base, attr) => write!(f, "{base}.{attr}"),
            Self::Call { func, args } => {
                write!(f, "{func}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Call argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Positional(Expr),
    Keyword(String, Expr),
}

impl Arg {
    pub fn pos(value: Expr) -> Self {
        Self::Positional(value)
    }

    pub fn kw(name: impl Into<String>, value: Expr) -> Self {
        Self::Keyword(name.into(), value)
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positional(value) => write!(f, "{value}"),
            Self::Keyword(name, value) => write!(f, "{name}={value}"),
        }
    }
}

/// Double-quoted Python string literal.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Whole numbers print without a fraction; others keep at most two decimals.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    // Above 2^52 every f64 is already whole.
    let rounded = if value.abs() < 4.5e15 {
        (value * 100.0).round() / 100.0
    } else {
        value
    };
    if rounded == 0.0 {
        "0".to_string()
    } else if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        let text = format!("{rounded:.2}");
        text.trim_end_matches('0').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(quote("a\\b"), r#""a\\b""#);
        assert_eq!(quote("line\nbreak\ttab"), r#""line\nbreak\ttab""#);
        assert_eq!(quote("bell\u{7}"), r#""bell\x07""#);
        assert_eq!(quote("héllo ✓"), "\"héllo ✓\"");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(20.0), "20");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(20.5), "20.5");
        assert_eq!(format_number(1.0 / 3.0), "0.33");
        assert_eq!(format_number(2.999), "3");
        assert_eq!(format_number(f64::NAN), "0");
        assert_eq!(format_number(-0.001), "0");
    }

    #[test]
    fn test_format_number_keeps_large_magnitudes() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(-1e19), "-10000000000000000000");
        assert_eq!(format_number(f64::MAX).len(), 309);
    }

    #[test]
    fn test_expr_display() {
        let call = Expr::call(
            Expr::attr(Expr::name("tk"), "Label"),
            vec![
                Arg::pos(Expr::name("root")),
                Arg::kw("text", Expr::str("Hi")),
                Arg::kw("font", Expr::Tuple(vec![Expr::str("Arial"), Expr::Int(-12)])),
            ],
        );
        assert_eq!(call.to_string(), r#"tk.Label(root, text="Hi", font=("Arial", -12))"#);
        assert_eq!(Expr::Tuple(vec![Expr::Int(1)]).to_string(), "(1,)");
    }

    #[test]
    fn test_module_render() {
        let mut module = Module::new();
        module.push(Item::Comment("Generated".into()));
        module.push(Item::Import {
            module: "tkinter".into(),
            alias: Some("tk".into()),
        });
        module.push(Item::Function(FunctionDef::new("noop", vec![])));
        module.push(Item::MainGuard(vec![Stmt::Expr(Expr::call(
            Expr::name("noop"),
            vec![],
        ))]));

        assert_eq!(
            module.render(),
            "# Generated\nimport tkinter as tk\n\n\n\
             def noop():\n    pass\n\n\n\
             if __name__ == \"__main__\":\n    noop()\n"
        );
    }
}
