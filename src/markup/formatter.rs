//! Formatter traits and dialect selection.

use clap::ValueEnum;

use super::node::Document;
use super::{HtmlFormatterFactory, MarkdownFormatterFactory};

/// Renders a node of type `N` to a markup string.
///
/// Implementations must be pure: the same tree always yields the same
/// string, with no I/O.
pub trait Formatter<N> {
    fn format(&self, node: &N) -> String;
}

/// Supplies the formatters of one markup dialect.
///
/// Report code asks the factory for a formatter instead of naming a dialect,
/// so swapping the factory changes the syntax of every rendered report.
pub trait FormatterFactory {
    fn document_formatter(&self) -> Box<dyn Formatter<Document> + '_>;
}

/// Target markup dialect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Dialect {
    /// Markdown, as accepted by pull request comment APIs
    #[default]
    Markdown,
    /// HTML fragment
    Html,
}

impl Dialect {
    /// Returns the formatter factory for this dialect.
    pub fn factory(self) -> Box<dyn FormatterFactory> {
        match self {
            Dialect::Markdown => Box::new(MarkdownFormatterFactory),
            Dialect::Html => Box::new(HtmlFormatterFactory),
        }
    }
}
