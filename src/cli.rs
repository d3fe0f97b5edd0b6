//! Command-line driver: argument definitions and the read, convert, write step

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use crate::options::{LinkPolicy, Options};

/// Convert a Markdown file to HTML, one fragment per line
#[derive(Parser, Debug)]
#[command(name = "markdown2html")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Markdown file to read
    pub input: PathBuf,

    /// HTML file to write (created or truncated)
    pub output: PathBuf,

    /// Extra positional arguments are accepted and ignored
    #[arg(hide = true)]
    pub rest: Vec<String>,

    /// Handling of lines whose link brackets are out of order
    #[arg(long, value_enum, default_value_t = LinkPolicy::Lenient)]
    pub links: LinkPolicy,
}

impl Cli {
    pub fn options(&self) -> Options {
        Options { links: self.links }
    }
}

/// Usage line printed when the arguments cannot be parsed.
pub fn usage(program: &str) -> String {
    format!("Usage: {} README.md README.html", program)
}

/// Read `input`, convert it and write the result to `output`.
pub fn run_convert(input: &Path, output: &Path, options: &Options) -> Result<()> {
    let markdown = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let html = crate::markdown_to_html_with(&markdown, options)?;

    fs::write(output, &html).with_context(|| format!("failed to write {}", output.display()))?;

    info!(
        "converted {} to {} ({} bytes)",
        input.display(),
        output.display(),
        html.len()
    );
    Ok(())
}
