/// A span of character data inside an element:
/// `content`
///
/// The content is written verbatim; nothing is escaped.
#[derive(Debug, Clone, PartialEq)]
pub struct TextNode {
    content: String,
}
impl TextNode {
    /// Create a new text node.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Returns the content of the text node.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// A comment node:
/// `<!-- content -->`
#[derive(Debug, Clone, PartialEq)]
pub struct CommentNode {
    content: String,
}
impl CommentNode {
    /// Create a new comment node.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Returns the content of the comment, without delimiters.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}
