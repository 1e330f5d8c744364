/// A CDATA node:
/// `<![CDATA[content]]>`
#[derive(Debug, Clone, PartialEq)]
pub struct CdataNode {
    content: String,
}
impl CdataNode {
    /// Create a new CDATA node.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Returns the content of the CDATA node.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}
