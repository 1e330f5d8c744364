//! Error handling for XML construction
//!
//! Rendering itself never fails; errors are raised when a descriptor tree is assembled.

/// A result type for XML construction, which can be either a successful value or an error.
pub type XmlResult<T> = std::result::Result<T, XmlError>;

/// An error that occurred while building a descriptor tree.
#[derive(Debug)]
pub struct XmlError {
    /// Names of the elements enclosing the failure, outermost first.
    pub path: Vec<String>,

    /// The kind of error that occurred
    pub kind: XmlErrorKind,
}
impl XmlError {
    /// Creates a new `XmlError` with an empty path.
    #[must_use]
    pub fn new(kind: XmlErrorKind) -> Self {
        Self { path: vec![], kind }
    }

    /// Prepends an enclosing element name to the error path.
    #[must_use]
    pub fn within(mut self, name: impl Into<String>) -> Self {
        self.path.insert(0, name.into());
        self
    }

    /// Returns the element path as a `/` separated string.
    #[must_use]
    pub fn path_str(&self) -> String {
        self.path.join("/")
    }
}
impl std::fmt::Display for XmlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.path.is_empty() {
            writeln!(f, "= At {}", self.path_str())?;
        }

        for line in self.kind.to_string().lines() {
            writeln!(f, "= {line}")?;
        }
        Ok(())
    }
}
impl std::error::Error for XmlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
impl From<XmlErrorKind> for XmlError {
    fn from(kind: XmlErrorKind) -> Self {
        Self::new(kind)
    }
}

/// The kind of error that occurred while building a descriptor tree.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum XmlErrorKind {
    /// An element was given an empty local name
    #[error("Element local name must not be empty")]
    EmptyLocalName,

    /// An element was given an empty prefix
    #[error("Namespace prefix must not be empty")]
    EmptyPrefix,

    /// A prefix was supplied with no namespace to bind it to
    #[error("Prefix `{0}` has no namespace to bind to")]
    PrefixWithoutNamespace(String),

    /// A document node was placed inside another node
    #[error("A document node cannot be the child of another node")]
    NestedDocument,

    /// Entity encoding failed
    #[error("Could not encode entities: {0}")]
    Encoding(String),
}
