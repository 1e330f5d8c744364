//! XML rendering module
//!
//! Use [`Node::to_xml`] or [`render`] unless you need to drive a [`RenderContext`] yourself.
//!
//! Output is compact unless an indentation unit is configured. With indentation, each element
//! below the root starts on a new line, indented once per level, and closing tags line up with
//! their opening tags. Once a text node appears under an element, indentation stops for the rest
//! of that element's content, since whitespace there would change the text.
//!
//! Content is written verbatim: text, attribute values, comments and CDATA are not escaped.
//! See [`crate::escape`] for opt-in encoding.
use crate::{
    CdataNode, CommentNode, Document, ElementNode, Node, TextNode,
    context::{NamespaceScope, RenderContext},
};

/// Rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// One level of indentation. If `None`, output is compact with no inserted whitespace.
    pub indent: Option<String>,
}
impl RenderOptions {
    /// Compact output, no inserted whitespace. This is the default.
    #[must_use]
    pub fn compact() -> Self {
        Self::default()
    }

    /// Pretty-printed output, using `unit` as one level of indentation.
    #[must_use]
    pub fn indented(unit: impl Into<String>) -> Self {
        Self {
            indent: Some(unit.into()),
        }
    }

    /// Render a node with these options. See [`render`].
    #[must_use]
    pub fn render(&self, node: &Node) -> String {
        render(node, self)
    }
}
impl From<Option<&str>> for RenderOptions {
    fn from(indent: Option<&str>) -> Self {
        Self {
            indent: indent.map(str::to_string),
        }
    }
}

/// Render a node tree as an XML string, using a fresh [`RenderContext`].
///
/// # Example
/// ```rust
/// use xmlbuild::{Node, RenderOptions, render};
/// use xmlbuild::builder::element;
///
/// let node: Node = element("elem1")
///     .child(element("elem2").child(element("elem3")))
///     .build()
///     .unwrap()
///     .into();
///
/// let xml = render(&node, &RenderOptions::indented("\t"));
/// assert_eq!(xml, "<elem1>\n\t<elem2>\n\t\t<elem3/>\n\t</elem2>\n</elem1>");
/// ```
#[must_use]
pub fn render(node: &Node, options: &RenderOptions) -> String {
    with_context(options, node.kind_name(), |out, context| {
        write_node(out, node, context);
    })
}

pub(crate) fn render_element(element: &ElementNode, options: &RenderOptions) -> String {
    with_context(options, "element", |out, context| {
        write_element(out, element, context);
    })
}

pub(crate) fn render_document(document: &Document, options: &RenderOptions) -> String {
    with_context(options, "document", |out, context| {
        write_document(out, document, context);
    })
}

fn with_context(
    options: &RenderOptions,
    kind: &str,
    f: impl FnOnce(&mut String, &mut RenderContext<'_>),
) -> String {
    tracing::trace!(kind, indent = ?options.indent, "render started");

    let mut out = String::new();
    let mut context = RenderContext::new(options.indent.as_deref());
    f(&mut out, &mut context);

    debug_assert!(
        context.depth() == 0 && context.scopes().is_empty(),
        "render left the context unbalanced"
    );
    tracing::trace!(kind, len = out.len(), "render finished");
    out
}

/// Render a node into `out` using the given context.
///
/// The context must be fresh, or left fully unwound by a previous call.
pub fn write_node(out: &mut String, node: &Node, context: &mut RenderContext<'_>) {
    match node {
        Node::Document(document) => write_document(out, document, context),
        Node::Element(element) => write_element(out, element, context),
        Node::Text(text) => write_text(out, text, context),
        Node::Comment(comment) => write_comment(out, comment),
        Node::Cdata(cdata) => write_cdata(out, cdata),
    }
}

fn write_document(out: &mut String, document: &Document, context: &mut RenderContext<'_>) {
    for child in document.children() {
        write_node(out, child, context);
    }

    // Text directly under the document marks the document's own depth
    context.reset_mixed_content_depth();
}

fn write_element(out: &mut String, element: &ElementNode, context: &mut RenderContext<'_>) {
    let start_depth = context.depth();

    //
    // Indent the opening tag
    if start_depth > 0 && !context.in_mixed_context() {
        write_indent(out, context.indent(), start_depth);
    }

    out.push('<');
    write_name(out, element);

    //
    // Declare the namespace, if not already bound in an ancestor
    let mut pushed_namespace = false;
    match (element.prefix(), element.namespace()) {
        (Some(prefix), Some(namespace)) if !context.is_prefix_in_scope(prefix, namespace) => {
            tracing::trace!(prefix, namespace, depth = start_depth, "declaring prefix");
            out.push_str(" xmlns:");
            out.push_str(prefix);
            write_quoted(out, namespace);

            context.push_namespace(NamespaceScope::prefixed(namespace, prefix));
            pushed_namespace = true;
        }

        (None, Some(namespace)) if !context.is_namespace_in_scope(namespace) => {
            tracing::trace!(namespace, depth = start_depth, "declaring default namespace");
            out.push_str(" xmlns");
            write_quoted(out, namespace);

            context.push_namespace(NamespaceScope::default_namespace(namespace));
            pushed_namespace = true;
        }

        _ => {}
    }

    if let Some(attributes) = element.attributes() {
        out.push(' ');
        out.push_str(&attributes.to_string());
    }

    context.increment_depth();

    if element.children().is_empty() {
        out.push_str("/>");
    } else {
        out.push('>');

        for child in element.children() {
            write_node(out, child, context);
        }

        //
        // Line the closing tag up with the opening tag
        if !context.in_mixed_context() {
            write_indent(out, context.indent(), start_depth);
        }

        context.reset_mixed_content_depth();

        out.push_str("</");
        write_name(out, element);
        out.push('>');
    }

    context.decrement_depth();

    if pushed_namespace {
        context.pop_namespace();
    }
}

fn write_text(out: &mut String, text: &TextNode, context: &mut RenderContext<'_>) {
    context.mark_mixed_content_depth();
    out.push_str(text.content());
}

fn write_comment(out: &mut String, comment: &CommentNode) {
    out.push_str("<!-- ");
    out.push_str(comment.content());
    out.push_str(" -->");
}

fn write_cdata(out: &mut String, cdata: &CdataNode) {
    out.push_str("<![CDATA[");
    out.push_str(cdata.content());
    out.push_str("]]>");
}

fn write_name(out: &mut String, element: &ElementNode) {
    if let Some(prefix) = element.prefix() {
        out.push_str(prefix);
        out.push(':');
    }
    out.push_str(element.local_name());
}

fn write_quoted(out: &mut String, value: &str) {
    out.push_str("=\"");
    out.push_str(value);
    out.push('"');
}

fn write_indent(out: &mut String, indent: Option<&str>, depth: usize) {
    if let Some(unit) = indent {
        out.push('\n');
        for _ in 0..depth {
            out.push_str(unit);
        }
    }
}
