//! Node tree → markup string.
//!
//! The renderer walks the tree once, depth first, and appends each fragment to
//! a single output string. Text is escaped, raw content is copied verbatim and
//! raw files are resolved through the renderer's [`ByteSource`]. No whitespace
//! is ever inserted between fragments.
//!
//! # Example
//!
//! ```
//! use plot::{Attribute, Encoding, MemorySource, Node, Renderer};
//!
//! let source = MemorySource::new().with_file("footer.html", "<footer/>");
//! let page: Node = Node::element(
//!     "body",
//!     [Attribute::new("class", "home")],
//!     [
//!         Node::text("Tom & Jerry"),
//!         Node::raw_file("footer.html", Encoding::Utf8),
//!     ],
//! );
//!
//! let html = Renderer::new(source).render(&page).unwrap();
//! assert_eq!(html, r#"<body class="home">Tom &amp; Jerry<footer/></body>"#);
//! ```

use std::path::Path;

use crate::encoding::Encoding;
use crate::error::{Error, Result};
use crate::escape::{escape, escape_attribute_value};
use crate::io::{ByteSource, FileSource};
use crate::node::{Attribute, Node, NodeKind};

/// Renders node trees, resolving raw files through a byte source.
#[derive(Debug, Clone, Default)]
pub struct Renderer<S = FileSource> {
    source: S,
}

impl<S: ByteSource> Renderer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Render `node` to a string.
    ///
    /// # Errors
    ///
    /// Fails only if a raw file in the tree cannot be read
    /// ([`Error::ResourceNotFound`]) or is malformed under its declared
    /// encoding ([`Error::Decoding`]). The first failure aborts the render.
    pub fn render<C>(&self, node: &Node<C>) -> Result<String> {
        let mut ctx = RenderContext {
            out: String::new(),
            source: &self.source,
        };
        walk_node(node.kind(), &mut ctx)?;
        Ok(ctx.out)
    }
}

/// Context for the render walk.
struct RenderContext<'a, S> {
    out: String,
    source: &'a S,
}

impl<S: ByteSource> RenderContext<'_, S> {
    fn read_raw_file(&self, path: &Path, encoding: Encoding) -> Result<String> {
        let bytes = self
            .source
            .read(path)
            .map_err(|source| Error::ResourceNotFound {
                path: path.to_path_buf(),
                source,
            })?;

        encoding
            .decode(&bytes)
            .map(|text| text.into_owned())
            .ok_or_else(|| Error::Decoding {
                path: path.to_path_buf(),
                encoding,
            })
    }
}

/// Walk a node and append its markup.
fn walk_node<S: ByteSource>(kind: &NodeKind, ctx: &mut RenderContext<'_, S>) -> Result<()> {
    match kind {
        NodeKind::Empty => {}
        NodeKind::Text(text) => ctx.out.push_str(&escape(text)),
        NodeKind::Raw(raw) => ctx.out.push_str(raw),
        NodeKind::RawFile { path, encoding } => {
            let content = ctx.read_raw_file(path, *encoding)?;
            ctx.out.push_str(&content);
        }
        NodeKind::Group(children) => {
            for child in children {
                walk_node(child, ctx)?;
            }
        }
        NodeKind::Attribute(attribute) => write_attribute(attribute, &mut ctx.out),
        NodeKind::Element {
            name,
            attributes,
            children,
        } => {
            ctx.out.push('<');
            ctx.out.push_str(name);
            write_attributes(attributes, &mut ctx.out);
            ctx.out.push('>');

            for child in children {
                walk_node(child, ctx)?;
            }

            ctx.out.push_str("</");
            ctx.out.push_str(name);
            ctx.out.push('>');
        }
        NodeKind::SelfClosedElement { name, attributes } => {
            ctx.out.push('<');
            ctx.out.push_str(name);
            write_attributes(attributes, &mut ctx.out);
            ctx.out.push_str("/>");
        }
    }

    Ok(())
}

/// Append ` a="1" b` style attribute markup; nothing if no attribute renders.
fn write_attributes(attributes: &[Attribute], out: &mut String) {
    for attribute in attributes.iter().filter(|a| a.is_rendered()) {
        out.push(' ');
        write_attribute(attribute, out);
    }
}

fn write_attribute(attribute: &Attribute, out: &mut String) {
    if !attribute.is_rendered() {
        return;
    }

    out.push_str(attribute.name());
    if let Some(value) = attribute.value() {
        out.push_str("=\"");
        out.push_str(&escape_attribute_value(value));
        out.push('"');
    }
}
