//! Handler identifier allocation.

use convert_case::{Case, Casing};
use std::collections::HashSet;

/// Base used when a label has no identifier characters.
const FALLBACK_BASE: &str = "button";

/// Allocates unique `on_<label>_click` handler names within one program.
///
/// The first button labelled "Submit" gets `on_submit_click`, the next one
/// `on_submit_2_click`, and so on. Names reserved up front are never handed
/// out.
#[derive(Debug, Clone, Default)]
pub struct HandlerNames {
    taken: HashSet<String>,
    allocated: Vec<String>,
}

impl HandlerNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a name as unavailable.
    pub fn reserve(&mut self, name: impl Into<String>) {
        self.taken.insert(name.into());
    }

    /// Allocate the handler name for a button label.
    pub fn allocate(&mut self, label: &str) -> String {
        let base = identifier_base(label);
        let mut name = format!("on_{base}_click");
        let mut suffix = 2;
        while self.taken.contains(&name) {
            name = format!("on_{base}_{suffix}_click");
            suffix += 1;
        }
        if suffix > 2 {
            log::warn!("handler for {label:?} renamed to {name} to avoid a collision");
        }
        self.taken.insert(name.clone());
        self.allocated.push(name.clone());
        name
    }

    /// Names allocated so far, in allocation order.
    pub fn allocated(&self) -> &[String] {
        &self.allocated
    }
}

/// Snake-case identifier fragment for a label.
pub fn identifier_base(label: &str) -> String {
    let words: String = label
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();
    let base = words
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .from_case(Case::Title)
        .to_case(Case::Snake);
    if base.is_empty() {
        FALLBACK_BASE.to_string()
    } else {
        base
    }
}
