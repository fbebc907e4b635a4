// src/outline.rs
//! Heading scan.
//!
//! Parses the page into a DOM and lists the `h1`..`h6` elements that sit
//! inside the content region, in document order. Nothing here writes; the
//! renderer maps results back onto the source text via `core::html`.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::error::TocError;

static HEADINGS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("h1, h2, h3, h4, h5, h6").expect("static heading selector")
});

/// A heading found in the content region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heading {
    /// Position among *all* headings of the document, region or not.
    pub ordinal: usize,
    /// Raw `id` attribute, if any (may be empty).
    pub id: Option<String>,
    /// Concatenated descendant text, unnormalized.
    pub text: String,
}

impl Heading {
    /// `id` if present and non-empty.
    pub fn anchor(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

#[derive(Clone, Debug, Default)]
pub struct Outline {
    pub headings: Vec<Heading>,
    /// Number of headings in the whole document.
    pub total: usize,
}

/// Compile the content-region selector.
pub fn region_selector(selector: &str) -> Result<Selector, TocError> {
    Selector::parse(selector).map_err(|e| TocError::Selector {
        selector: s!(selector),
        reason: e.to_string(),
    })
}

/// List headings under `region`, in document order.
pub fn read(doc: &str, region: &Selector) -> Outline {
    let document = Html::parse_document(doc);
    let mut outline = Outline::default();

    for (ordinal, el) in document.select(&HEADINGS).enumerate() {
        outline.total += 1;

        if !in_region(&el, region) {
            continue;
        }

        let value = el.value();
        outline.headings.push(Heading {
            ordinal,
            id: value.attr("id").map(str::to_string),
            text: el.text().collect(),
        });
    }

    outline
}

fn in_region(el: &ElementRef<'_>, region: &Selector) -> bool {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .any(|a| region.matches(&a))
}
