//! The types of nodes and related data that can appear in a built XML tree.
//!
//! Nodes are immutable once built; use the [`crate::builder`] functions to create them.
use crate::{RenderOptions, to_xml};

mod attribute;
pub use attribute::*;

mod element;
pub use element::*;

mod text;
pub use text::*;

mod cdata;
pub use cdata::*;

/// A node in the descriptor tree. Can be any of:
/// - `Document` - a document, holding top-level nodes
/// - `Element` - an element node
/// - `Text` - a text node
/// - `Comment` - a comment node
/// - `Cdata` - a CDATA node
///
/// A `Document` is only ever the root of a tree; the builder rejects it anywhere else.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A document node.
    Document(Document),

    /// An element node.
    Element(ElementNode),

    /// A text node.
    Text(TextNode),

    /// A comment node.
    Comment(CommentNode),

    /// A CDATA node.
    Cdata(CdataNode),
}
impl Node {
    /// Returns a short name for the kind of node.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Document(_) => "document",
            Self::Element(_) => "element",
            Self::Text(_) => "text",
            Self::Comment(_) => "comment",
            Self::Cdata(_) => "cdata",
        }
    }

    /// Render this node as an XML string.
    ///
    /// `indent` is the string used for one level of indentation. If `None`, the output is compact.
    ///
    /// # Example
    /// ```rust
    /// use xmlbuild::builder::{element, text};
    ///
    /// let node = element("elem1").child(text("text1")).build().unwrap();
    /// assert_eq!(node.to_xml(None), "<elem1>text1</elem1>");
    /// ```
    #[must_use]
    pub fn to_xml(&self, indent: Option<&str>) -> String {
        to_xml::render(self, &RenderOptions::from(indent))
    }
}

impl From<Document> for Node {
    fn from(node: Document) -> Self {
        Self::Document(node)
    }
}
impl From<ElementNode> for Node {
    fn from(node: ElementNode) -> Self {
        Self::Element(node)
    }
}
impl From<TextNode> for Node {
    fn from(node: TextNode) -> Self {
        Self::Text(node)
    }
}
impl From<CommentNode> for Node {
    fn from(node: CommentNode) -> Self {
        Self::Comment(node)
    }
}
impl From<CdataNode> for Node {
    fn from(node: CdataNode) -> Self {
        Self::Cdata(node)
    }
}

/// An XML document or fragment: an ordered list of top-level nodes.
///
/// The document adds no whitespace of its own; children are rendered back to back.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    children: Vec<Node>,
}
impl Document {
    pub(crate) fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// Returns the top-level nodes of the document.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Render this document as an XML string. See [`Node::to_xml`].
    #[must_use]
    pub fn to_xml(&self, indent: Option<&str>) -> String {
        to_xml::render_document(self, &RenderOptions::from(indent))
    }
}
