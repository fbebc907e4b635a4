// src/file.rs

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::HTML_EXTENSIONS;
use crate::error::TocError;

/// Expand the input list: files are kept as given, directories contribute
/// their `*.html` / `*.htm` files (not recursive, sorted by name).
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>, TocError> {
    let mut out = Vec::new();
    for p in paths {
        if p.is_dir() {
            let mut pages: Vec<PathBuf> = Vec::new();
            for entry in fs::read_dir(p).map_err(TocError::io(p))? {
                let path = entry.map_err(TocError::io(p))?.path();
                if path.is_file() && is_html(&path) {
                    pages.push(path);
                }
            }
            pages.sort();
            out.append(&mut pages);
        } else {
            out.push(p.clone());
        }
    }
    Ok(out)
}

pub fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| HTML_EXTENSIONS.iter().any(|x| e.eq_ignore_ascii_case(x)))
}

pub fn read_page(path: &Path) -> Result<String, TocError> {
    fs::read_to_string(path).map_err(TocError::io(path))
}

/// Write a page, creating parent directories as needed.
pub fn write_page(path: &Path, html: &str) -> Result<(), TocError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, html).map_err(TocError::io(path))
}

pub fn ensure_directory(dir: &Path) -> Result<(), TocError> {
    if dir.exists() && !dir.is_dir() {
        return Err(TocError::Io {
            path: dir.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path exists but is not a directory"),
        });
    }
    if !dir.exists() { fs::create_dir_all(dir).map_err(TocError::io(dir))?; }
    Ok(())
}

/// Output path for `input` inside `dir`.
/// Duplicate handling **only within this run**: the first `page.html` keeps
/// its name, later ones become `page (2).html`, `page (3).html`, ...
/// `seen_names` holds every name handed out so far, mapped to the highest
/// suffix tried for it as a base; a candidate already handed out is passed over.
pub fn resolve_output_path(
    dir: &Path,
    input: &Path,
    seen_names: &mut HashMap<String, usize>,
) -> PathBuf {
    let stem = input.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_else(|| s!("page"));
    let ext = input.extension().map(|e| e.to_string_lossy().into_owned());
    let with_ext = |base: &str| match &ext {
        Some(ext) => join!(base, ".", ext),
        None => s!(base),
    };

    let first = with_ext(&stem);
    let Some(&taken) = seen_names.get(&first) else {
        seen_names.insert(first.clone(), 1);
        return dir.join(first);
    };

    let mut n = taken;
    loop {
        n += 1;
        let candidate = with_ext(&format!("{stem} ({n})"));
        if !seen_names.contains_key(&candidate) {
            seen_names.insert(first, n);
            seen_names.insert(candidate.clone(), 1);
            return dir.join(candidate);
        }
    }
}
