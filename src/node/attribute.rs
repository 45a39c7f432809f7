//! Element attributes.

use std::fmt;
use std::marker::PhantomData;

use super::{AnyContext, Node, NodeKind};

/// A name with an optional value, rendered as `name` or `name="value"`.
///
/// Like [`Node`], an attribute carries a phantom context marker `C`. The
/// marker has no effect on rendering.
pub struct Attribute<C = AnyContext> {
    name: String,
    value: Option<String>,
    ignore_if_empty: bool,
    context: PhantomData<fn() -> C>,
}

impl<C> Attribute<C> {
    /// An attribute with a value, rendered as `name="value"`.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::from_parts(name.into(), Some(value.into()), false)
    }

    /// An attribute without a value, rendered as just `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self::from_parts(name.into(), None, false)
    }

    /// Skip this attribute entirely when its value is the empty string.
    ///
    /// Attributes without a value are unaffected.
    pub fn ignore_if_empty(mut self) -> Self {
        self.ignore_if_empty = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Whether the attribute produces any output when rendered.
    pub fn is_rendered(&self) -> bool {
        !(self.ignore_if_empty && self.value.as_deref() == Some(""))
    }

    /// Move the attribute into another context.
    pub fn retag<D>(self) -> Attribute<D> {
        Attribute::from_parts(self.name, self.value, self.ignore_if_empty)
    }

    /// Wrap the attribute as a free-standing node.
    pub fn into_node(self) -> Node<C> {
        Node::from_kind(NodeKind::Attribute(self.retag()))
    }

    fn from_parts(name: String, value: Option<String>, ignore_if_empty: bool) -> Self {
        Self {
            name,
            value,
            ignore_if_empty,
            context: PhantomData,
        }
    }
}

// Manual impls so that no bounds are placed on the context marker.

impl<C> Clone for Attribute<C> {
    fn clone(&self) -> Self {
        Self::from_parts(self.name.clone(), self.value.clone(), self.ignore_if_empty)
    }
}

impl<C> fmt::Debug for Attribute<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attribute")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("ignore_if_empty", &self.ignore_if_empty)
            .finish()
    }
}

impl<C> PartialEq for Attribute<C> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.value == other.value
            && self.ignore_if_empty == other.ignore_if_empty
    }
}

impl<C> Eq for Attribute<C> {}

impl<C> From<Attribute<C>> for Node<C> {
    fn from(attribute: Attribute<C>) -> Self {
        attribute.into_node()
    }
}
