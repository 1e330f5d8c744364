//! Functions for assembling a descriptor tree.
//!
//! Every element constructor returns an [`ElementBuilder`]; nothing is validated until
//! [`ElementBuilder::build`] (or [`DocumentBuilder::build`]) walks the whole tree.
//!
//! # Example
//! ```rust
//! use xmlbuild::builder::{element_prefixed, text};
//!
//! let ns = "http://myns";
//! let node = element_prefixed(ns, "div", "my")
//!     .attribute("id", 1)
//!     .child(element_prefixed(ns, "p", "my").child(text("hello")))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     node.to_xml(None),
//!     r#"<my:div xmlns:my="http://myns" id="1"><my:p>hello</my:p></my:div>"#
//! );
//! ```
use crate::{
    Attribute, Attributes, CdataNode, CommentNode, Document, ElementNode, ElementOptions, Node,
    TextNode,
    error::{XmlError, XmlErrorKind, XmlResult},
    escape::encode_entities,
};

/// A child waiting to be placed in an element or document.
///
/// Element builders are kept unbuilt until their parent is built, so a whole tree validates at once.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    /// A finished node.
    Node(Node),

    /// An element that has not been validated yet.
    Element(ElementBuilder),
}
impl Child {
    fn build(self) -> XmlResult<Node> {
        match self {
            Self::Node(node) => Ok(node),
            Self::Element(builder) => builder.build().map(Node::Element),
        }
    }
}
impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}
impl From<ElementBuilder> for Child {
    fn from(builder: ElementBuilder) -> Self {
        Self::Element(builder)
    }
}
impl From<ElementNode> for Child {
    fn from(node: ElementNode) -> Self {
        Self::Node(node.into())
    }
}
impl From<TextNode> for Child {
    fn from(node: TextNode) -> Self {
        Self::Node(node.into())
    }
}
impl From<CommentNode> for Child {
    fn from(node: CommentNode) -> Self {
        Self::Node(node.into())
    }
}
impl From<CdataNode> for Child {
    fn from(node: CdataNode) -> Self {
        Self::Node(node.into())
    }
}
impl From<Document> for Child {
    fn from(node: Document) -> Self {
        Self::Node(node.into())
    }
}

/// Builder for an [`ElementNode`].
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct ElementBuilder {
    local_name: String,
    namespace: Option<String>,
    prefix: Option<String>,
    attributes: Option<Attributes>,
    children: Vec<Child>,
}
impl ElementBuilder {
    /// Start an element with the given local name.
    pub fn new(local_name: impl Into<String>) -> Self {
        Self {
            local_name: local_name.into(),
            namespace: None,
            prefix: None,
            attributes: None,
            children: vec![],
        }
    }

    /// Set the namespace the element resides in.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set the prefix bound to the element's namespace.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Replace the attribute list.
    ///
    /// An empty list is still written, as a single space before the tag end.
    pub fn attributes(mut self, attributes: impl Into<Attributes>) -> Self {
        self.attributes = Some(attributes.into());
        self
    }

    /// Append one attribute.
    pub fn attribute(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.attributes
            .get_or_insert_with(Attributes::default)
            .push(Attribute::new(name, value));
        self
    }

    /// Append one child.
    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several children, in order.
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Child>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Validate and build the element, and every element below it.
    ///
    /// # Errors
    /// See [`ElementNode::new`]. Errors in descendants report the path of enclosing elements.
    pub fn build(self) -> XmlResult<ElementNode> {
        let Self {
            local_name,
            namespace,
            prefix,
            attributes,
            children,
        } = self;

        let children = children
            .into_iter()
            .map(Child::build)
            .collect::<XmlResult<Vec<_>>>()
            .map_err(|e| e.within(local_name.as_str()))?;

        ElementNode::new(
            local_name,
            ElementOptions {
                namespace,
                prefix,
                attributes,
                children,
            },
        )
    }
}

/// Builder for a [`Document`].
#[derive(Debug, Clone, PartialEq, Default)]
#[must_use]
pub struct DocumentBuilder {
    children: Vec<Child>,
}
impl DocumentBuilder {
    /// Append one top-level node.
    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several top-level nodes, in order.
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Child>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Validate and build the document.
    ///
    /// # Errors
    /// - A child is itself a document
    /// - Any element in the tree is invalid; see [`ElementNode::new`]
    pub fn build(self) -> XmlResult<Document> {
        let children = self
            .children
            .into_iter()
            .map(Child::build)
            .collect::<XmlResult<Vec<_>>>()?;

        if children.iter().any(|c| matches!(c, Node::Document(_))) {
            tracing::debug!("rejected nested document");
            return Err(XmlError::new(XmlErrorKind::NestedDocument));
        }

        Ok(Document::new(children))
    }
}

/// Start a document.
pub fn document() -> DocumentBuilder {
    DocumentBuilder::default()
}

/// Start an element with no namespace.
pub fn element(local_name: impl Into<String>) -> ElementBuilder {
    ElementBuilder::new(local_name)
}

/// Start an element in a default namespace: `<name xmlns="namespace"/>`.
pub fn element_ns(namespace: impl Into<String>, local_name: impl Into<String>) -> ElementBuilder {
    ElementBuilder::new(local_name).namespace(namespace)
}

/// Start an element in a prefixed namespace: `<prefix:name xmlns:prefix="namespace"/>`.
pub fn element_prefixed(
    namespace: impl Into<String>,
    local_name: impl Into<String>,
    prefix: impl Into<String>,
) -> ElementBuilder {
    ElementBuilder::new(local_name)
        .namespace(namespace)
        .prefix(prefix)
}

/// Create a text node. The content is written verbatim.
pub fn text(content: impl Into<String>) -> TextNode {
    TextNode::new(content)
}

/// Create a text node with markup characters entity encoded.
///
/// # Errors
/// Returns an error if the content cannot be encoded.
pub fn text_escaped(content: &str) -> XmlResult<TextNode> {
    Ok(TextNode::new(encode_entities(content)?))
}

/// Create a comment node.
pub fn comment(content: impl Into<String>) -> CommentNode {
    CommentNode::new(content)
}

/// Create a CDATA node.
pub fn cdata(content: impl Into<String>) -> CdataNode {
    CdataNode::new(content)
}

/// Create a single attribute. Any displayable value is accepted.
pub fn attribute(name: impl Into<String>, value: impl ToString) -> Attribute {
    Attribute::new(name, value)
}

/// Create a single attribute with markup characters in the value entity encoded.
///
/// # Errors
/// Returns an error if the value cannot be encoded.
pub fn attribute_escaped(name: impl Into<String>, value: impl ToString) -> XmlResult<Attribute> {
    let value = encode_entities(&value.to_string())?;
    Ok(Attribute::new(name, value))
}

/// Create an attribute list.
pub fn attributes(entries: impl IntoIterator<Item = Attribute>) -> Attributes {
    Attributes::new(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_shapes() {
        let plain = element("e").build().unwrap();
        assert_eq!(plain.namespace(), None);

        let ns = element_ns("urn:a", "e").build().unwrap();
        assert_eq!(ns.namespace(), Some("urn:a"));
        assert_eq!(ns.prefix(), None);

        let prefixed = element_prefixed("urn:a", "e", "p").build().unwrap();
        assert_eq!(prefixed.prefix(), Some("p"));
    }

    #[test]
    fn test_attribute_appends() {
        let node = element("e")
            .attribute("k1", "v1")
            .attribute("k2", 2)
            .build()
            .unwrap();
        let attributes = node.attributes().unwrap();
        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes.get("k2").map(Attribute::value), Some("2"));
    }

    #[test]
    fn test_nested_error_path() {
        let err = element("div")
            .child(element("p").child(element("b").prefix("my")))
            .build()
            .unwrap_err();

        assert_eq!(err.kind, XmlErrorKind::PrefixWithoutNamespace("my".into()));
        assert_eq!(err.path_str(), "div/p/b");
    }

    #[test]
    fn test_empty_name_in_child() {
        let err = element("root").child(element("")).build().unwrap_err();
        assert_eq!(err.kind, XmlErrorKind::EmptyLocalName);
        assert_eq!(err.path, vec!["root".to_string(), String::new()]);
    }

    #[test]
    fn test_document_rejects_nested_document() {
        let inner = document().child(element("a")).build().unwrap();
        let err = document().child(inner).build().unwrap_err();
        assert_eq!(err.kind, XmlErrorKind::NestedDocument);

        let inner = document().build().unwrap();
        let err = element("e").child(inner).build().unwrap_err();
        assert_eq!(err.kind, XmlErrorKind::NestedDocument);
    }

    #[test]
    fn test_children_accepts_mixed_kinds() {
        let node = element("e")
            .children([Child::from(text("a")), element("b").into(), comment("c").into()])
            .build()
            .unwrap();
        assert_eq!(node.children().len(), 3);
        assert_eq!(node.to_xml(None), "<e>a<b/><!-- c --></e>");
    }

    #[test]
    fn test_escaped_helpers() {
        let node = element("e")
            .attributes([attribute_escaped("q", "a<b").unwrap()])
            .child(text_escaped("x & y").unwrap())
            .build()
            .unwrap();
        assert_eq!(node.to_xml(None), r#"<e q="a&lt;b">x &amp; y</e>"#);
    }

    #[test]
    fn test_attributes_fn() {
        let list = attributes([attribute("k1", "v1"), attribute("k2", "v2")]);
        assert_eq!(list.to_string(), r#"k1="v1" k2="v2""#);
    }
}
