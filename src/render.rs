// src/render.rs
use crate::core::html::escape_text;

/// One line of the table of contents: link `target` labelled `label`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocEntry {
    pub label: String,
    pub target: String,
}

impl TocEntry {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self { label: label.into(), target: target.into() }
    }

    /// `<li><a href=#target>label</a></li>`
    ///
    /// The target goes out verbatim (bare attribute value). The label is
    /// escaped so the markup reparses to the same text.
    pub fn to_markup(&self) -> String {
        join!("<li><a href=#", &self.target, ">", &escape_text(&self.label), "</a></li>")
    }
}

/// Concatenate entries in order. No entries, empty string.
pub fn render_list(entries: &[TocEntry]) -> String {
    entries.iter().map(TocEntry::to_markup).collect()
}
