//! # xmlbuild
//!
//! A fluent, strongly-typed builder for XML documents and fragments, rendered to a string.
//!
//! Build a tree of immutable descriptors with the functions in [`builder`], then render it with
//! [`Node::to_xml`] or [`render`]. The renderer takes care of:
//! - Namespace declarations: each `xmlns` binding is written once, on the outermost element that
//!   needs it, and redeclared only when a prefix is rebound
//! - Self-closing elements: `<name/>` when there are no children
//! - Optional indentation with any indent string
//! - Mixed content: once text appears in an element, nothing inside it is re-indented
//!
//! Content is written verbatim. Nothing is escaped unless you use the helpers in [`escape`].
//!
//! ```rust
//! use xmlbuild::builder::{element, text};
//!
//! let node = element("div")
//!     .child(
//!         element("p")
//!             .child(text("hello "))
//!             .child(element("b").child(text("world")))
//!             .child(text("!")),
//!     )
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     node.to_xml(Some("\t")),
//!     "<div>\n\t<p>hello <b>world</b>!</p>\n</div>"
//! );
//! ```
#![warn(missing_docs)]

pub mod builder;
pub mod context;
pub mod error;
pub mod escape;
pub mod node;
pub mod to_xml;

pub use context::{NamespaceScope, RenderContext};
pub use error::{XmlError, XmlErrorKind, XmlResult};
pub use node::*;
pub use to_xml::{RenderOptions, render, write_node};
