// src/runner.rs
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    error::TocError,
    file::{collect_inputs, ensure_directory, read_page, resolve_output_path, write_page},
    params::Params,
    progress::Progress,
    toc::{Status, TocRenderer},
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub rendered: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub files_written: Vec<PathBuf>,
    /// Pages whose content would change (`--check`) or did change.
    pub changed: Vec<PathBuf>,
}

/// Render every input page.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, TocError> {
    let renderer = TocRenderer::new(params.options.clone())?;
    let pages = collect_inputs(&params.inputs)?;
    let mut summary = RunSummary::default();

    if pages.is_empty() {
        if let Some(p) = progress.as_deref_mut() {
            p.log("No pages to process.");
            p.finish();
        }
        return Ok(summary);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(pages.len());
    }

    if let Some(dir) = &params.out {
        if !params.check {
            ensure_directory(dir)?;
        }
    }

    let mut seen: HashMap<String, usize> = HashMap::new();

    for page in &pages {
        let result = render_one(&renderer, params, page, &mut seen, &mut summary);
        if let Err(e) = result {
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("{}: {e}", page.display()));
                p.finish();
            }
            return Err(e);
        }
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(page);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(summary)
}

fn render_one(
    renderer: &TocRenderer,
    params: &Params,
    page: &Path,
    seen: &mut HashMap<String, usize>,
    summary: &mut RunSummary,
) -> Result<(), TocError> {
    let source = read_page(page)?;
    let out = renderer.render(&source)?;

    match out.status {
        Status::Rendered { entries } => {
            info!(page = %page.display(), entries, "rendered");
            summary.rendered.push(page.to_path_buf());
        }
        Status::Skipped(reason) => {
            info!(page = %page.display(), ?reason, "skipped");
            summary.skipped.push(page.to_path_buf());
        }
    }

    let changed = out.html != source;
    if changed {
        summary.changed.push(page.to_path_buf());
    }
    if params.check {
        return Ok(());
    }

    // In place: only touch pages that changed. Into a dir: copy everything.
    let target = match &params.out {
        Some(dir) => resolve_output_path(dir, page, seen),
        None if changed => page.to_path_buf(),
        None => return Ok(()),
    };
    write_page(&target, &out.html)?;
    summary.files_written.push(target);
    Ok(())
}
