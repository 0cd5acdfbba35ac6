//! The print-friendly HTML document shell.
//!
//! The shell is a fixed string with two substitution points: the document
//! title and the rendered body fragment. Everything else, including the
//! embedded style sheet, is identical for every conversion.

use log::debug;
use pulldown_cmark_escape::{escape_html, FmtWriter};
use std::fmt;

/// Title used when none is supplied.
pub const DEFAULT_TITLE: &str = "PWA Deployment & Usage Guide";

/// Inline style sheet embedded in every generated document.
pub const STYLESHEET: &str = r#"        @page { size: A4; margin: 2cm; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Arial, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
        }
        h1 {
            color: #2c3e50;
            border-bottom: 3px solid #3498db;
            padding-bottom: 10px;
            margin-top: 30px;
        }
        h2 {
            color: #34495e;
            border-bottom: 2px solid #95a5a6;
            padding-bottom: 8px;
            margin-top: 25px;
        }
        h3 {
            color: #555;
            margin-top: 20px;
        }
        code {
            background: #f4f4f4;
            padding: 2px 6px;
            border-radius: 3px;
            font-family: 'Monaco', 'Courier New', monospace;
            font-size: 0.9em;
        }
        pre {
            background: #2c3e50;
            color: #ecf0f1;
            padding: 15px;
            border-radius: 5px;
            overflow-x: auto;
        }
        pre code {
            background: transparent;
            color: #ecf0f1;
            padding: 0;
        }
        ul, ol {
            margin: 10px 0;
            padding-left: 30px;
        }
        li {
            margin: 5px 0;
        }
        blockquote {
            border-left: 4px solid #3498db;
            padding-left: 15px;
            margin: 15px 0;
            color: #555;
        }
        hr {
            border: none;
            border-top: 2px solid #ecf0f1;
            margin: 30px 0;
        }
        @media print {
            body {
                max-width: 100%;
            }
            h1, h2, h3 {
                page-break-after: avoid;
            }
            pre, blockquote {
                page-break-inside: avoid;
            }
        }
"#;

/// A document shell parameterised by its title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTemplate {
    title: String,
}

impl Default for DocumentTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

impl DocumentTemplate {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Embeds a rendered fragment into the shell.
    ///
    /// The fragment is inserted verbatim directly after the `<body>` line.
    /// Custom titles are escaped, the default title is written as is.
    pub fn wrap(&self, fragment: &str) -> String {
        debug!("Wrapping {} bytes of HTML in the print template", fragment.len());

        let title = TitleMarkup(&self.title);
        format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head>\n    \
             <meta charset=\"UTF-8\">\n    \
             <title>{title}</title>\n    \
             <style>\n\
             {STYLESHEET}    \
             </style>\n\
             </head>\n\
             <body>\n\
             {fragment}\n\
             </body>\n\
             </html>\n"
        )
    }
}

/// Title text as it appears inside `<title>`.
///
/// The default title is part of the fixed shell and is emitted as written;
/// any other title is HTML-escaped.
struct TitleMarkup<'a>(&'a str);

impl fmt::Display for TitleMarkup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == DEFAULT_TITLE {
            f.write_str(self.0)
        } else {
            escape_html(FmtWriter(f), self.0)
        }
    }
}
