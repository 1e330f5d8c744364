//! XML Writer Example
//!
//! This example builds a small namespaced document with mixed content and prints it,
//! first compact and then indented.
//!
//! Run with `RUST_LOG=xmlbuild=trace` to see namespace declarations as they are written.
use tracing_subscriber::EnvFilter;
use xmlbuild::builder::{attribute, comment, document, element, element_prefixed, text};

const NS: &str = "http://www.w3.org/1999/xhtml";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    //
    // Build the tree. Nothing is validated until `build()`, which checks the whole tree at once.
    let doc = document()
        .child(comment("generated"))
        .child(
            element_prefixed(NS, "html", "h")
                .attributes([attribute("lang", "en")])
                .child(element_prefixed(NS, "body", "h").child(
                    element_prefixed(NS, "p", "h")
                        .child(text("Hello, "))
                        .child(element_prefixed(NS, "b", "h").child(text("world")))
                        .child(text("!")),
                ))
                .child(element("meta").attribute("generator", "xmlbuild")),
        )
        .build();

    let doc = match doc {
        Ok(doc) => doc,
        Err(e) => panic!("{e}"),
    };

    //
    // Compact output; the `h` prefix is declared once, on the root
    println!("{}", doc.to_xml(None));

    //
    // Indented output. The paragraph holds text, so its contents stay on one line.
    println!("{}", doc.to_xml(Some("  ")));

    //
    // Invalid trees are rejected with the path to the offending element
    let err = element("root")
        .child(element("child").prefix("dangling"))
        .build();
    if let Err(e) = err {
        eprint!("{e}");
    }
}
