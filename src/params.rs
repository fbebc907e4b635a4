// src/params.rs
use std::path::PathBuf;

use crate::config::RenderOptions;

/// One batch run.
#[derive(Clone, Debug, Default)]
pub struct Params {
    pub inputs: Vec<PathBuf>,        // files, or directories of *.html
    pub out: Option<PathBuf>,        // output dir; None = rewrite in place
    pub check: bool,                 // report what would change, write nothing
    pub options: RenderOptions,
}

impl Params {
    pub fn new(inputs: Vec<PathBuf>) -> Self {
        Self { inputs, ..Self::default() }
    }
}
