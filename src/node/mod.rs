//! The markup node tree.
//!
//! A [`Node`] is an immutable value built bottom-up from the constructors
//! below. Each parent owns its children, so the structure is always a tree
//! and can be rendered any number of times with identical output.
//!
//! # Context markers
//!
//! `Node<C>` and [`Attribute<C>`] carry a phantom context type `C` that
//! stands for the markup dialect a node belongs to. Children of an element
//! must share the element's context, which lets vocabulary crates restrict
//! what can be nested where. The marker never affects rendering; use
//! [`Node::retag`] to move a node between contexts explicitly.
//!
//! ```
//! use plot::{Attribute, Node};
//!
//! let link: Node = Node::element(
//!     "a",
//!     [Attribute::new("href", "/about")],
//!     [Node::text("About & contact")],
//! );
//! assert_eq!(link.render().unwrap(), r#"<a href="/about">About &amp; contact</a>"#);
//! ```

mod attribute;

use std::fmt;
use std::marker::PhantomData;
use std::path::PathBuf;

use crate::encoding::Encoding;
use crate::error::Result;
use crate::io::{ByteSource, FileSource};
use crate::render::Renderer;

pub use attribute::Attribute;

/// Context marker for nodes that are not tied to a particular dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnyContext {}

/// The untyped payload of a node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NodeKind {
    /// Renders to nothing.
    #[default]
    Empty,

    /// Plain content, escaped at render time.
    Text(String),

    /// Pre-formatted content, never escaped.
    Raw(String),

    /// Content read from a byte source at render time, never escaped.
    RawFile {
        path: PathBuf,
        encoding: Encoding,
    },

    /// A container tag, e.g. `<p class="x">...</p>`.
    Element {
        name: String,
        attributes: Vec<Attribute>,
        children: Vec<NodeKind>,
    },

    /// A tag terminated by `/>`. Has no children slot.
    SelfClosedElement {
        name: String,
        attributes: Vec<Attribute>,
    },

    /// Transparent concatenation of children.
    Group(Vec<NodeKind>),

    /// A free-standing attribute fragment.
    Attribute(Attribute),
}

/// A renderable markup node tagged with a context marker `C`.
pub struct Node<C = AnyContext> {
    kind: NodeKind,
    context: PhantomData<fn() -> C>,
}

impl<C> Node<C> {
    /// Plain text, escaped when rendered.
    pub fn text(text: impl Into<String>) -> Self {
        Self::from_kind(NodeKind::Text(text.into()))
    }

    /// Pre-formatted markup, rendered exactly as given.
    pub fn raw(raw: impl Into<String>) -> Self {
        Self::from_kind(NodeKind::Raw(raw.into()))
    }

    /// Content of the file at `path`, decoded with `encoding` when the tree is
    /// rendered and inserted without escaping.
    pub fn raw_file(path: impl Into<PathBuf>, encoding: Encoding) -> Self {
        Self::from_kind(NodeKind::RawFile {
            path: path.into(),
            encoding,
        })
    }

    /// An element with attributes and children.
    pub fn element(
        name: impl Into<String>,
        attributes: impl IntoIterator<Item = Attribute<C>>,
        children: impl IntoIterator<Item = Node<C>>,
    ) -> Self {
        Self::from_kind(NodeKind::Element {
            name: name.into(),
            attributes: attributes.into_iter().map(Attribute::retag).collect(),
            children: children.into_iter().map(Node::into_kind).collect(),
        })
    }

    /// An element without children, closed with `/>`.
    pub fn self_closed_element(
        name: impl Into<String>,
        attributes: impl IntoIterator<Item = Attribute<C>>,
    ) -> Self {
        Self::from_kind(NodeKind::SelfClosedElement {
            name: name.into(),
            attributes: attributes.into_iter().map(Attribute::retag).collect(),
        })
    }

    /// Children rendered back to back with no markup of their own.
    pub fn group(children: impl IntoIterator<Item = Node<C>>) -> Self {
        Self::from_kind(NodeKind::Group(
            children.into_iter().map(Node::into_kind).collect(),
        ))
    }

    /// A free-standing `name="value"` fragment.
    pub fn attribute(name: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute::new(name, value).into_node()
    }

    /// A free-standing attribute without a value, rendered as just `name`.
    pub fn valueless_attribute(name: impl Into<String>) -> Self {
        Attribute::named(name).into_node()
    }

    /// A node that renders to nothing.
    pub fn empty() -> Self {
        Self::from_kind(NodeKind::Empty)
    }

    /// A `<!--text-->` comment. The text is not escaped.
    pub fn comment(text: impl AsRef<str>) -> Self {
        Self::raw(format!("<!--{}-->", text.as_ref()))
    }

    /// A `<!DOCTYPE ...>` declaration.
    pub fn doctype(doctype: impl AsRef<str>) -> Self {
        Self::raw(format!("<!DOCTYPE {}>", doctype.as_ref()))
    }

    /// `node` if `condition` holds, otherwise an empty node.
    pub fn when(condition: bool, node: Node<C>) -> Self {
        if condition { node } else { Self::empty() }
    }

    /// `then` if `condition` holds, otherwise `otherwise`.
    pub fn when_else(condition: bool, then: Node<C>, otherwise: Node<C>) -> Self {
        if condition { then } else { otherwise }
    }

    /// The node built from the value inside `option`, or an empty node.
    pub fn unwrap<T>(option: Option<T>, transform: impl FnOnce(T) -> Node<C>) -> Self {
        option.map_or_else(Self::empty, transform)
    }

    /// A group of the nodes built from each item.
    pub fn for_each<I: IntoIterator>(
        items: I,
        transform: impl FnMut(I::Item) -> Node<C>,
    ) -> Self {
        Self::group(items.into_iter().map(transform))
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn into_kind(self) -> NodeKind {
        self.kind
    }

    /// Move the node into another context.
    pub fn retag<D>(self) -> Node<D> {
        Node::from_kind(self.kind)
    }

    pub(crate) fn from_kind(kind: NodeKind) -> Self {
        Self {
            kind,
            context: PhantomData,
        }
    }

    /// Render the tree, reading raw files relative to the working directory.
    pub fn render(&self) -> Result<String> {
        Renderer::new(FileSource::default()).render(self)
    }

    /// Render the tree, reading raw files from `source`.
    pub fn render_with<S: ByteSource>(&self, source: S) -> Result<String> {
        Renderer::new(source).render(self)
    }
}

// Manual impls so that no bounds are placed on the context marker.

impl<C> Clone for Node<C> {
    fn clone(&self) -> Self {
        Self::from_kind(self.kind.clone())
    }
}

impl<C> fmt::Debug for Node<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Node").field(&self.kind).finish()
    }
}

impl<C> PartialEq for Node<C> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl<C> Eq for Node<C> {}

impl<C> Default for Node<C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<C> From<&str> for Node<C> {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl<C> From<String> for Node<C> {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

impl<C> FromIterator<Node<C>> for Node<C> {
    fn from_iter<I: IntoIterator<Item = Node<C>>>(iter: I) -> Self {
        Self::group(iter)
    }
}
