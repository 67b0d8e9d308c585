//! HTML preview of Markdown comments.

use comrak::Options;

/// Renders Markdown comments to HTML the way pull request pages show them.
///
/// Uses the GitHub Flavored Markdown extensions that ALM comment views
/// support: tables, strikethrough, autolinks and task lists. Raw HTML in
/// the comment is passed through because Markdown text nodes already
/// arrive HTML escaped.
pub struct MarkdownPreview<'a> {
    options: Options<'a>,
}

impl<'a> MarkdownPreview<'a> {
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;

        options.render.unsafe_ = true;

        Self { options }
    }

    /// Renders a Markdown comment body to HTML.
    pub fn render(&self, markdown: &str) -> String {
        comrak::markdown_to_html(markdown, &self.options)
    }
}

impl<'a> Default for MarkdownPreview<'a> {
    fn default() -> Self {
        Self::new()
    }
}
