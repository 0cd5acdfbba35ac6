//! Defines the command-line interface for the application.

use clap::Parser;
use md_print_lib::template::DEFAULT_TITLE;
use md_print_lib::{DEFAULT_INPUT, DEFAULT_OUTPUT};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "md-print",
    version,
    about = "Convert a Markdown document into a print-ready HTML page."
)]
pub struct Cli {
    /// The Markdown file to convert. Use '-' to read from stdin.
    #[arg(short, long, value_name = "FILE_PATH", default_value = DEFAULT_INPUT)]
    pub file: PathBuf,

    /// The HTML file to write. Existing files are overwritten.
    #[arg(short, long, value_name = "OUTPUT_PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Title of the generated HTML document.
    #[arg(short, long, value_name = "TITLE", default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Print the HTML document to stdout instead of writing the output file.
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    pub fn reads_stdin(&self) -> bool {
        self.file.as_os_str() == "-"
    }
}
