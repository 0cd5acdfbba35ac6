//! `md-print-lib` turns Markdown documents into self-contained, print-ready
//! HTML pages. It powers the `md-print` CLI.
//!
//! Conversion is a straight pipeline: the Markdown source is rendered to an
//! HTML fragment (CommonMark plus fenced code blocks and tables), the fragment
//! is embedded in a fixed document shell with an inline print style sheet, and
//! the result is written to disk in a single whole-buffer write.
//!
//! # Example
//!
//! ```rust
//! use md_print_lib::template::DocumentTemplate;
//! use md_print_lib::Converter;
//!
//! let converter = Converter::new(DocumentTemplate::new("Deployment Guide"));
//! let html = converter.convert("# Title\n\nHello **world**.");
//!
//! assert!(html.contains("<title>Deployment Guide</title>"));
//! assert!(html.contains("<body>\n<h1>Title</h1>\n<p>Hello <strong>world</strong>.</p>\n</body>"));
//! ```

pub mod error;
pub mod output;
pub mod render;
pub mod template;

use crate::error::ConvertError;
use crate::output::write_output;
use crate::render::render_fragment;
use crate::template::DocumentTemplate;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Input file read when no path is given.
pub const DEFAULT_INPUT: &str = "PWA_DEPLOYMENT_GUIDE.md";

/// Output file written when no path is given.
pub const DEFAULT_OUTPUT: &str = "PWA_DEPLOYMENT_GUIDE_PRINTABLE.html";

/// Summary of a completed file conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Path the document was written to.
    pub output: PathBuf,
    /// Size of the Markdown source in bytes.
    pub source_bytes: usize,
    /// Size of the written HTML document in bytes.
    pub document_bytes: usize,
}

/// Converts Markdown into printable HTML documents using one template.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    template: DocumentTemplate,
}

impl Converter {
    pub fn new(template: DocumentTemplate) -> Self {
        Self { template }
    }

    pub fn template(&self) -> &DocumentTemplate {
        &self.template
    }

    /// Renders Markdown source into a complete HTML document.
    pub fn convert(&self, markdown: &str) -> String {
        let fragment = render_fragment(markdown);
        self.template.wrap(&fragment)
    }

    /// Converts Markdown already held in memory and writes the document to
    /// `output`, overwriting any existing file.
    pub fn convert_to_file(
        &self,
        markdown: &str,
        output: &Path,
    ) -> Result<ConversionReport, ConvertError> {
        let document = self.convert(markdown);
        write_output(output, &document)?;

        info!(
            "Wrote {} bytes of HTML to {}",
            document.len(),
            output.display()
        );

        Ok(ConversionReport {
            output: output.to_path_buf(),
            source_bytes: markdown.len(),
            document_bytes: document.len(),
        })
    }

    /// Reads `input`, converts it and writes the document to `output`.
    ///
    /// The source is decoded as UTF-8. If it cannot be read, `output` is not
    /// touched.
    pub fn convert_file(
        &self,
        input: &Path,
        output: &Path,
    ) -> Result<ConversionReport, ConvertError> {
        let markdown = read_source(input)?;
        self.convert_to_file(&markdown, output)
    }
}

/// Converts Markdown into an HTML document using the default template.
pub fn convert(markdown: &str) -> String {
    Converter::default().convert(markdown)
}

/// Reads a Markdown source file as UTF-8 text.
pub fn read_source(path: &Path) -> Result<String, ConvertError> {
    let bytes = fs::read(path).map_err(|source| ConvertError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|_| ConvertError::InvalidEncoding {
        path: path.to_path_buf(),
    })
}
