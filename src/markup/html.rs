//! HTML dialect built on maud.

use maud::{Markup, html};

use super::formatter::{Formatter, FormatterFactory};
use super::node::{Block, Document, Heading, Inline};

/// Factory for the HTML dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormatterFactory;

impl FormatterFactory for HtmlFormatterFactory {
    fn document_formatter(&self) -> Box<dyn Formatter<Document> + '_> {
        Box::new(HtmlFormatter)
    }
}

/// Renders documents as an HTML fragment.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormatter;

impl Formatter<Document> for HtmlFormatter {
    fn format(&self, node: &Document) -> String {
        html! {
            @for block in node.children() {
                (block_markup(block))
            }
        }
        .into_string()
    }
}

fn block_markup(block: &Block) -> Markup {
    match block {
        Block::Paragraph(paragraph) => html! {
            p { (inline_markup(paragraph.children())) }
        },
        Block::Heading(heading) => heading_markup(heading),
    }
}

fn heading_markup(heading: &Heading) -> Markup {
    let content = inline_markup(heading.children());
    match heading.level().clamp(1, 6) {
        1 => html! { h1 { (content) } },
        2 => html! { h2 { (content) } },
        3 => html! { h3 { (content) } },
        4 => html! { h4 { (content) } },
        5 => html! { h5 { (content) } },
        _ => html! { h6 { (content) } },
    }
}

fn inline_markup(nodes: &[Inline]) -> Markup {
    html! {
        @for node in nodes {
            @match node {
                Inline::Text(text) => { (text.content()) }
                Inline::Link(link) => {
                    a href=(link.url()) { (inline_markup(link.children())) }
                }
            }
        }
    }
}
