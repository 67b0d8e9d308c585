//! Document tree nodes.
//!
//! The tree has two tiers: block nodes ([`Paragraph`], [`Heading`]) that
//! live directly under a [`Document`], and inline nodes ([`Text`], [`Link`])
//! that live inside blocks or links. Nodes own their children and expose
//! them read-only, so a tree cannot change once it is assembled.

/// Root of a render pass: an ordered sequence of block nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    children: Vec<Block>,
}

impl Document {
    /// Creates document from block nodes, preserving their order.
    pub fn new(children: impl IntoIterator<Item = Block>) -> Self {
        Self {
            children: children.into_iter().collect(),
        }
    }

    pub fn children(&self) -> &[Block] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Block level node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Paragraph),
    Heading(Heading),
}

impl From<Paragraph> for Block {
    fn from(node: Paragraph) -> Self {
        Block::Paragraph(node)
    }
}

impl From<Heading> for Block {
    fn from(node: Heading) -> Self {
        Block::Heading(node)
    }
}

/// Inline node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(Text),
    Link(Link),
}

impl From<Text> for Inline {
    fn from(node: Text) -> Self {
        Inline::Text(node)
    }
}

impl From<Link> for Inline {
    fn from(node: Link) -> Self {
        Inline::Link(node)
    }
}

/// Ordered run of inline nodes rendered as one block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    children: Vec<Inline>,
}

impl Paragraph {
    pub fn new(children: impl IntoIterator<Item = Inline>) -> Self {
        Self {
            children: children.into_iter().collect(),
        }
    }

    pub fn children(&self) -> &[Inline] {
        &self.children
    }
}

/// Section heading.
///
/// The level is descriptive only. Formatters decide how to express it and
/// clamp values outside `1..=6`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    level: u8,
    children: Vec<Inline>,
}

impl Heading {
    pub fn new(level: u8, children: impl IntoIterator<Item = Inline>) -> Self {
        Self {
            level,
            children: children.into_iter().collect(),
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn children(&self) -> &[Inline] {
        &self.children
    }
}

/// Plain text leaf. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    content: String,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Empty text, used where optional content is absent.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Hyperlink wrapping its label nodes.
///
/// The URL is carried verbatim; nothing checks that it is well formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    url: String,
    children: Vec<Inline>,
}

impl Link {
    pub fn new(url: impl Into<String>, children: impl IntoIterator<Item = Inline>) -> Self {
        Self {
            url: url.into(),
            children: children.into_iter().collect(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn children(&self) -> &[Inline] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(label: &str) -> Document {
        Document::new([
            Paragraph::new([
                Text::new("Analysis Details: ").into(),
                Link::new("https://example.com", [Text::new(label).into()]).into(),
            ])
            .into(),
            Heading::new(6, [Text::new("footnote").into()]).into(),
        ])
    }

    #[test]
    fn test_identical_trees_compare_equal() {
        // Arrange
        let left = sample("3 Issues");
        let right = sample("3 Issues");

        // Act & Assert
        assert_eq!(left, right);
    }

    #[test]
    fn test_trees_with_different_leaf_differ() {
        // Arrange
        let left = sample("3 Issues");
        let right = sample("4 Issues");

        // Act & Assert
        assert_ne!(left, right);
    }

    #[test]
    fn test_children_preserve_insertion_order() {
        // Arrange
        let paragraph = Paragraph::new([
            Text::new("a").into(),
            Text::new("b").into(),
            Text::new("c").into(),
        ]);

        // Act
        let contents: Vec<&str> = paragraph
            .children()
            .iter()
            .filter_map(|child| match child {
                Inline::Text(text) => Some(text.content()),
                Inline::Link(_) => None,
            })
            .collect();

        // Assert
        assert_eq!(contents, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_document() {
        let document = Document::new([]);

        assert!(document.is_empty());
        assert_eq!(document, Document::default());
    }

    #[test]
    fn test_heading_keeps_out_of_range_level() {
        // The model does not validate levels; formatters clamp them.
        let heading = Heading::new(9, [Text::empty().into()]);

        assert_eq!(heading.level(), 9);
    }

    #[test]
    fn test_empty_text_equals_default() {
        assert_eq!(Text::empty(), Text::new(""));
        assert_eq!(Text::empty().content(), "");
    }
}
