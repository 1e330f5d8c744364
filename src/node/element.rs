use super::{Attributes, Node};
use crate::{
    RenderOptions,
    error::{XmlError, XmlErrorKind, XmlResult},
    to_xml,
};

/// The optional parts of an element, for use with [`ElementNode::new`].
///
/// All fields default to empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementOptions {
    /// The namespace in which the element resides.
    pub namespace: Option<String>,

    /// The prefix bound to `namespace`. Requires a namespace.
    pub prefix: Option<String>,

    /// The attributes of the element.
    pub attributes: Option<Attributes>,

    /// The child nodes of the element, in document order.
    pub children: Vec<Node>,
}

/// An element in the descriptor tree, with a name, optional namespace, attributes, and children:
/// `<prefix:name xmlns:prefix="namespace" attr="value">...</prefix:name>`
///
/// An element with no children is written self-closing.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementNode {
    namespace: Option<String>,
    local_name: String,
    prefix: Option<String>,
    attributes: Option<Attributes>,
    children: Vec<Node>,
}
impl ElementNode {
    /// Create a new element from a local name and a set of options.
    ///
    /// # Errors
    /// - The local name is empty
    /// - The prefix is empty, or is given without a namespace
    /// - One of the children is a document
    ///
    /// # Example
    /// ```rust
    /// use xmlbuild::{ElementNode, ElementOptions};
    ///
    /// let options = ElementOptions {
    ///     namespace: Some("http://myns".to_string()),
    ///     prefix: Some("my".to_string()),
    ///     ..Default::default()
    /// };
    /// let element = ElementNode::new("elem1", options).unwrap();
    /// assert_eq!(element.to_xml(None), r#"<my:elem1 xmlns:my="http://myns"/>"#);
    /// ```
    pub fn new(local_name: impl Into<String>, options: ElementOptions) -> XmlResult<Self> {
        let local_name = local_name.into();
        let ElementOptions {
            namespace,
            prefix,
            attributes,
            children,
        } = options;

        let reject = |kind: XmlErrorKind| -> XmlResult<Self> {
            tracing::debug!(element = %local_name, error = %kind, "rejected element");
            Err(XmlError::new(kind).within(local_name.as_str()))
        };

        if local_name.is_empty() {
            return reject(XmlErrorKind::EmptyLocalName);
        }

        match (&prefix, &namespace) {
            (Some(prefix), _) if prefix.is_empty() => return reject(XmlErrorKind::EmptyPrefix),
            (Some(prefix), None) => {
                return reject(XmlErrorKind::PrefixWithoutNamespace(prefix.clone()));
            }
            _ => {}
        }

        if children.iter().any(|c| matches!(c, Node::Document(_))) {
            return reject(XmlErrorKind::NestedDocument);
        }

        Ok(Self {
            namespace,
            local_name,
            prefix,
            attributes,
            children,
        })
    }

    /// Returns the namespace of the element, if any.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Returns the local portion of the element name.
    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// Returns the namespace prefix of the element, if any.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Returns the element name as written in tags: `prefix:local` or `local`.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}:{}", self.local_name),
            None => self.local_name.clone(),
        }
    }

    /// Returns the attribute list of the element, if one was set.
    #[must_use]
    pub fn attributes(&self) -> Option<&Attributes> {
        self.attributes.as_ref()
    }

    /// Returns the children of the element.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Render this element as an XML string. See [`Node::to_xml`].
    #[must_use]
    pub fn to_xml(&self, indent: Option<&str>) -> String {
        to_xml::render_element(self, &RenderOptions::from(indent))
    }
}
