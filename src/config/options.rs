// src/config/options.rs
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::consts::*;
use crate::error::TocError;

/// Everything a render pass needs to know about the page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// `id` of the element that receives the list.
    pub container_id: String,
    /// CSS selector for the region whose headings are listed.
    pub content_selector: String,
    pub id_policy: IdPolicy,
    pub pin: PinOptions,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            container_id: s!(CONTAINER_ID),
            content_selector: s!(CONTENT_SELECTOR),
            id_policy: IdPolicy::Keep,
            pin: PinOptions::default(),
        }
    }
}

impl RenderOptions {
    /// Read a TOML config file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, TocError> {
        let text = fs::read_to_string(path).map_err(TocError::io(path))?;
        toml::from_str(&text).map_err(|source| TocError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Explicit path if given, else `tocgen.toml` in the working dir if it
    /// exists, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, TocError> {
        Self::load_with_fallback(path, Path::new(CONFIG_FILE))
    }

    pub(crate) fn load_with_fallback(path: Option<&Path>, fallback: &Path) -> Result<Self, TocError> {
        match path {
            Some(p) => Self::load(p),
            None if fallback.is_file() => Self::load(fallback),
            None => Ok(Self::default()),
        }
    }
}

/// What to do with a listed heading that carries no `id`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum IdPolicy {
    /// Link to `#` (empty target).
    #[default]
    Keep,
    /// Leave the heading out of the list.
    Skip,
    /// Derive an id from the heading text and write it onto the heading.
    Synthesize,
    /// Abort the render.
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PinOptions {
    pub enabled: bool,
    pub offset_top: Option<u32>,
    pub offset_bottom: Option<u32>,
}

impl Default for PinOptions {
    fn default() -> Self {
        Self { enabled: true, offset_top: None, offset_bottom: None }
    }
}
