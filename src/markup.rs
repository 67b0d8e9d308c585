//! Dialect independent markup documents.
//!
//! Report code assembles a [`Document`] tree describing what to say, and a
//! [`FormatterFactory`] chosen by the caller decides how it is written out.
//! Markdown is the dialect posted to pull request comment APIs; the HTML
//! dialect renders the same tree for previews and web views.

mod formatter;
mod html;
mod markdown;
mod node;

pub use formatter::{Dialect, Formatter, FormatterFactory};
pub use html::{HtmlFormatter, HtmlFormatterFactory};
pub use markdown::{MarkdownFormatter, MarkdownFormatterFactory};
pub use node::{Block, Document, Heading, Inline, Link, Paragraph, Text};
