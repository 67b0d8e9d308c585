//! Markdown dialect.

use html_escape::encode_text;

use super::formatter::{Formatter, FormatterFactory};
use super::node::{Block, Document, Heading, Inline, Link, Paragraph, Text};

/// Factory for the Markdown dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormatterFactory;

impl FormatterFactory for MarkdownFormatterFactory {
    fn document_formatter(&self) -> Box<dyn Formatter<Document> + '_> {
        Box::new(MarkdownFormatter)
    }
}

/// Renders documents as Markdown.
///
/// Paragraphs end with a blank line and headings with a single newline,
/// so consecutive blocks never run together. Text content has HTML
/// special characters escaped because comment renderers accept inline HTML;
/// Markdown punctuation is left alone so callers can emit emphasis and
/// code fences through plain text nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormatter;

impl Formatter<Document> for MarkdownFormatter {
    fn format(&self, node: &Document) -> String {
        let mut output = String::new();
        for block in node.children() {
            match block {
                Block::Paragraph(paragraph) => self.write_paragraph(paragraph, &mut output),
                Block::Heading(heading) => self.write_heading(heading, &mut output),
            }
        }
        output
    }
}

impl MarkdownFormatter {
    fn write_paragraph(&self, node: &Paragraph, output: &mut String) {
        self.write_inlines(node.children(), output);
        output.push_str("\n\n");
    }

    fn write_heading(&self, node: &Heading, output: &mut String) {
        let level = usize::from(node.level().clamp(1, 6));
        output.push_str(&"#".repeat(level));
        output.push(' ');
        self.write_inlines(node.children(), output);
        output.push('\n');
    }

    fn write_inlines(&self, nodes: &[Inline], output: &mut String) {
        for node in nodes {
            match node {
                Inline::Text(text) => self.write_text(text, output),
                Inline::Link(link) => self.write_link(link, output),
            }
        }
    }

    fn write_text(&self, node: &Text, output: &mut String) {
        output.push_str(&encode_text(node.content()));
    }

    fn write_link(&self, node: &Link, output: &mut String) {
        output.push('[');
        self.write_inlines(node.children(), output);
        output.push_str("](");
        output.push_str(node.url());
        output.push(')');
    }
}
