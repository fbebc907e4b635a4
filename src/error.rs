// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TocError {
    #[error("invalid content selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    #[error("heading #{index} (\"{text}\") has no id")]
    MissingId { index: usize, text: String },

    #[error("bad config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TocError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> TocError {
        let path = path.into();
        move |source| TocError::Io { path, source }
    }
}
