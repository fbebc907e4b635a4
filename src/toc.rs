// src/toc.rs
//! The table-of-contents renderer.
//!
//! One pass over one page:
//! 1. find the container (`id="toc"` by default); absent -> leave the page alone
//! 2. list the headings inside the content region
//! 3. format them as `<li><a href=#id>text</a></li>` and replace the
//!    container's content with the lot
//! 4. mark the container for edge pinning
//!
//! The renderer holds no state between passes. Feeding it its own output
//! gives the same output back.

use std::collections::HashSet;
use std::ops::Range;

use scraper::Selector;
use tracing::{debug, warn};

use crate::config::consts::LOG_LABEL_MAX;
use crate::config::{IdPolicy, RenderOptions};
use crate::core::html::{self, Tag};
use crate::core::sanitize::{anchor_from_text, preview};
use crate::error::TocError;
use crate::outline::{self, Heading};
use crate::pin::{self, EdgePin};
use crate::render::{TocEntry, render_list};

/// Why a page was left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// No element carries the container id.
    NoContainer,
    /// The container is a void element (`<hr>`, `<img>`, ...).
    EmptyElement,
    /// The container's closing tag is missing.
    Unclosed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Rendered { entries: usize },
    Skipped(SkipReason),
}

/// Result of one render pass: the page text and what happened to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered {
    pub html: String,
    pub status: Status,
}

impl Rendered {
    fn skipped(doc: &str, reason: SkipReason) -> Self {
        Self { html: s!(doc), status: Status::Skipped(reason) }
    }
}

pub struct TocRenderer {
    options: RenderOptions,
    region: Selector,
    pin: Box<dyn EdgePin + Send + Sync>,
}

impl TocRenderer {
    pub fn new(options: RenderOptions) -> Result<Self, TocError> {
        let region = outline::region_selector(&options.content_selector)?;
        let pin = pin::from_options(&options.pin);
        Ok(Self { options, region, pin })
    }

    /// Swap in a different pinning collaborator.
    pub fn with_pin(mut self, pin: Box<dyn EdgePin + Send + Sync>) -> Self {
        self.pin = pin;
        self
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render the table of contents into `doc`.
    ///
    /// Errors only under [`IdPolicy::Fail`]; a missing container is a skip.
    pub fn render(&self, doc: &str) -> Result<Rendered, TocError> {
        let Some(container) = html::find_by_id(doc, &self.options.container_id) else {
            debug!(container = %self.options.container_id, "no container, skipping");
            return Ok(Rendered::skipped(doc, SkipReason::NoContainer));
        };

        let Some(inner) = html::inner_range(doc, &container) else {
            let reason = if container.is_empty_element() {
                SkipReason::EmptyElement
            } else {
                SkipReason::Unclosed
            };
            warn!(container = %self.options.container_id, tag = %container.name, ?reason, "container cannot hold a list, skipping");
            return Ok(Rendered::skipped(doc, reason));
        };

        let outline = outline::read(doc, &self.region);
        let (entries, assigned) = self.entries(&outline.headings)?;
        note_duplicates(&entries);

        let mut edits: Vec<(Range<usize>, String)> = Vec::with_capacity(assigned.len() + 2);

        let pin_attrs = self.pin.attributes();
        if !pin_attrs.is_empty() {
            edits.push((container.span.clone(), html::rewrite_open_tag(doc, &container, &pin_attrs)));
        }
        edits.push((inner.clone(), render_list(&entries)));
        edits.extend(id_edits(doc, &assigned, outline.total, &inner));

        debug!(entries = entries.len(), headings = outline.total, "rendered toc");

        Ok(Rendered {
            html: html::apply_edits(doc, edits),
            status: Status::Rendered { entries: entries.len() },
        })
    }

    /// Build the entries, applying the id policy. Also returns the
    /// `(ordinal, id)` pairs synthesized for headings that had none.
    fn entries(&self, headings: &[Heading]) -> Result<(Vec<TocEntry>, Vec<(usize, String)>), TocError> {
        let mut entries = Vec::with_capacity(headings.len());
        let mut assigned = Vec::new();

        for (index, h) in headings.iter().enumerate() {
            if let Some(id) = h.anchor() {
                entries.push(TocEntry::new(h.text.as_str(), id));
                continue;
            }

            match self.options.id_policy {
                IdPolicy::Keep => {
                    debug!(index, text = %preview(&h.text, LOG_LABEL_MAX), "heading has no id, linking to #");
                    entries.push(TocEntry::new(h.text.as_str(), h.id.as_deref().unwrap_or_default()));
                }
                IdPolicy::Skip => {
                    debug!(index, text = %preview(&h.text, LOG_LABEL_MAX), "heading has no id, skipped");
                }
                IdPolicy::Synthesize => {
                    let id = anchor_from_text(&h.text);
                    if id.is_empty() {
                        debug!(index, text = %preview(&h.text, LOG_LABEL_MAX), "no usable text for an id");
                    } else {
                        assigned.push((h.ordinal, id.clone()));
                    }
                    entries.push(TocEntry::new(h.text.as_str(), id));
                }
                IdPolicy::Fail => {
                    return Err(TocError::MissingId { index, text: preview(&h.text, LOG_LABEL_MAX) });
                }
            }
        }

        Ok((entries, assigned))
    }
}

/// Map synthesized ids back onto heading tags in the source.
/// Headings are matched by document position; if the raw scan and the DOM
/// disagree on the count the ids are used in links only.
fn id_edits(
    doc: &str,
    assigned: &[(usize, String)],
    total: usize,
    container_inner: &Range<usize>,
) -> Vec<(Range<usize>, String)> {
    if assigned.is_empty() {
        return Vec::new();
    }

    let tags: Vec<Tag<'_>> = html::heading_tags(doc);
    if tags.len() != total {
        warn!(scanned = tags.len(), parsed = total, "heading count mismatch, ids not written back");
        return Vec::new();
    }

    assigned
        .iter()
        .filter_map(|(ordinal, id)| {
            let tag = tags.get(*ordinal)?;
            // Anything inside the container is about to be replaced.
            if tag.span.start >= container_inner.start && tag.span.end <= container_inner.end {
                return None;
            }
            let set = [(s!("id"), id.clone())];
            Some((tag.span.clone(), html::rewrite_open_tag(doc, tag, &set)))
        })
        .collect()
}

fn note_duplicates(entries: &[TocEntry]) {
    let mut seen = HashSet::new();
    for e in entries {
        if !e.target.is_empty() && !seen.insert(e.target.as_str()) {
            debug!(id = %e.target, "duplicate heading id, links are ambiguous");
        }
    }
}
