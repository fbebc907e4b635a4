// src/cli.rs
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{WrapErr, bail};

use crate::config::{IdPolicy, RenderOptions};
use crate::file::read_page;
use crate::params::Params;
use crate::progress::Progress;
use crate::toc::TocRenderer;

/// Render a table of contents from page headings into the `#toc` container.
#[derive(Parser, Debug)]
#[command(name = "tocgen", version, about)]
pub struct Args {
    /// HTML files, or directories of *.html files
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Write results into DIR instead of rewriting in place
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// TOML config (default: ./tocgen.toml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Container element id
    #[arg(long, value_name = "ID")]
    pub container: Option<String>,

    /// Content region selector
    #[arg(long, value_name = "SELECTOR")]
    pub content: Option<String>,

    /// What to do with headings that have no id
    #[arg(long = "ids", value_enum, value_name = "POLICY")]
    pub id_policy: Option<IdPolicy>,

    /// Do not add the affix hook to the container
    #[arg(long)]
    pub no_pin: bool,

    /// Report pages that would change; write nothing
    #[arg(long, conflicts_with_all = ["out", "stdout"])]
    pub check: bool,

    /// Print the rendered page to stdout (single input only)
    #[arg(long, conflicts_with = "out")]
    pub stdout: bool,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Defaults < config file < flags.
    pub fn render_options(&self) -> color_eyre::Result<RenderOptions> {
        let mut opts = RenderOptions::load_or_default(self.config.as_deref())?;
        if let Some(id) = &self.container {
            opts.container_id = id.clone();
        }
        if let Some(sel) = &self.content {
            opts.content_selector = sel.clone();
        }
        if let Some(policy) = self.id_policy {
            opts.id_policy = policy;
        }
        if self.no_pin {
            opts.pin.enabled = false;
        }
        Ok(opts)
    }
}

/// Progress lines on stderr.
struct CliProgress {
    total: usize,
    done: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, path: &Path) {
        self.done += 1;
        eprintln!("[{}/{}] {}", self.done, self.total, path.display());
    }
}

/// Run the CLI. Returns the process exit code.
pub fn run(args: Args) -> color_eyre::Result<i32> {
    let options = args.render_options()?;

    if args.stdout {
        let [path] = args.paths.as_slice() else {
            bail!("--stdout takes exactly one input file");
        };
        let renderer = TocRenderer::new(options)?;
        let source = read_page(path)?;
        let out = renderer
            .render(&source)
            .wrap_err_with(|| format!("rendering {}", path.display()))?;
        print!("{}", out.html);
        return Ok(0);
    }

    let params = Params {
        inputs: args.paths,
        out: args.out,
        check: args.check,
        options,
    };

    let mut progress = CliProgress { total: 0, done: 0 };
    let summary = crate::runner::run(&params, Some(&mut progress))?;

    if params.check {
        for p in &summary.changed {
            println!("{}", p.display());
        }
        return Ok(if summary.changed.is_empty() { 0 } else { 1 });
    }

    eprintln!(
        "{} rendered, {} skipped, {} written",
        summary.rendered.len(),
        summary.skipped.len(),
        summary.files_written.len()
    );
    Ok(0)
}
