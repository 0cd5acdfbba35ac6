use crate::cli::Cli;
use anyhow::Context;
use clap::Parser;
use log::debug;
use md_print_lib::template::DocumentTemplate;
use md_print_lib::{read_source, Converter};
use std::io::{self, Read, Write};

pub fn run() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let source = read_input(&cli)?;
    let converter = Converter::new(DocumentTemplate::new(cli.title.as_str()));

    if cli.dry_run {
        let document = converter.convert(&source);
        io::stdout().write_all(document.as_bytes())?;
        return Ok(());
    }

    let report = converter.convert_to_file(&source, &cli.output)?;
    debug!(
        "Converted {} bytes of Markdown into {} bytes of HTML",
        report.source_bytes, report.document_bytes
    );

    println!("✅ Created {}", report.output.display());
    println!("📄 Open this file in your browser and use 'Print to PDF' (Cmd+P)");

    Ok(())
}

fn read_input(cli: &Cli) -> anyhow::Result<String> {
    if cli.reads_stdin() {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read Markdown from stdin")?;
        Ok(buf)
    } else {
        Ok(read_source(&cli.file)?)
    }
}
