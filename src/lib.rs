// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;

pub mod file;
pub mod outline;
pub mod params;
pub mod pin;
pub mod progress;
pub mod render;
pub mod runner;
pub mod toc;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod log;

pub use config::{IdPolicy, PinOptions, RenderOptions};
pub use error::TocError;
pub use toc::{Rendered, SkipReason, Status, TocRenderer};

/// Render with default options: container `#toc`, headings under `.span9`,
/// affix hook on.
pub fn render_default(doc: &str) -> Result<Rendered, TocError> {
    TocRenderer::new(RenderOptions::default())?.render(doc)
}
