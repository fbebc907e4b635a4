// src/bin/cli.rs
use clap::Parser;
use tocgen::cli::{self, Args};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    tocgen::log::init(args.verbose);

    let code = cli::run(args)?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
