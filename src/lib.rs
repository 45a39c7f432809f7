//! # plot
//!
//! Build markup as an immutable tree of nodes and render it into an HTML/XML
//! string with entity-safe escaping.
//!
//! ## Quick Start
//!
//! ```
//! use plot::{Attribute, Node};
//!
//! let page: Node = Node::group([
//!     Node::doctype("html"),
//!     Node::element(
//!         "html",
//!         [Attribute::new("lang", "en")],
//!         [Node::element(
//!             "body",
//!             [],
//!             [
//!                 Node::text("Fish & <Chips>"),
//!                 Node::self_closed_element("br", []),
//!                 Node::raw("<em>already markup</em>"),
//!             ],
//!         )],
//!     ),
//! ]);
//!
//! assert_eq!(
//!     page.render().unwrap(),
//!     concat!(
//!         "<!DOCTYPE html><html lang=\"en\"><body>",
//!         "Fish &amp; &lt;Chips&gt;<br/><em>already markup</em>",
//!         "</body></html>",
//!     )
//! );
//! ```
//!
//! ## Escaping
//!
//! Text nodes are escaped with [`escape`]: `&`, `<` and `>` become entity
//! references, while entity references already present in the text
//! (`&amp;`, `&lt;`, `&gt;`, `&quot;`, `&apos;`, `&#NNN;`) are kept, so
//! content is never double-escaped. Raw nodes and raw files are never escaped.
//! Attribute values additionally have `"` escaped to `&quot;`.
//!
//! ## Raw files
//!
//! [`Node::raw_file`] defers to a [`ByteSource`] at render time. The default
//! [`Node::render`] reads from the file system relative to the working
//! directory; use [`Renderer`] or [`Node::render_with`] to supply another
//! source such as [`MemorySource`]. A missing or undecodable file is the only
//! way rendering can fail.

pub mod encoding;
pub mod error;
pub mod escape;
pub mod io;
pub mod node;
pub mod render;

pub use encoding::Encoding;
pub use error::{Error, Result};
pub use escape::{escape, escape_attribute_value};
pub use io::{ByteSource, FileSource, MemorySource};
pub use node::{AnyContext, Attribute, Node, NodeKind};
pub use render::Renderer;
