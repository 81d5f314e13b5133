// Copyright 2025 the Wireform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property metadata definitions.
//!
//! This module provides [`PropertyDescriptor`], the immutable per-property
//! metadata a [`TypeSchema`](crate::TypeSchema) is built from, and
//! [`WireShape`] describing how a property appears on the wire.

use crate::tag::TypeTag;

/// How a property is rendered in XML.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WireShape {
    /// Rendered as `name="value"` on the owning element's opening tag.
    Attribute(&'static str),
    /// Rendered as a child element wrapping the value.
    Element(&'static str),
    /// Rendered as direct text content of the owning element, with no wire
    /// name of its own. Used for simple text-valued types.
    Text,
}

/// The two wire-name roles a named property can occupy.
///
/// Reverse lookup keys on the pair (role, wire name): an attribute and an
/// element sharing the same text are distinct entries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WireRole {
    /// An XML attribute name.
    Attribute,
    /// An XML element name.
    Element,
}

impl WireShape {
    /// Returns the (role, wire name) pair, or `None` for [`WireShape::Text`].
    #[must_use]
    pub fn wire_key(self) -> Option<(WireRole, &'static str)> {
        match self {
            Self::Attribute(name) => Some((WireRole::Attribute, name)),
            Self::Element(name) => Some((WireRole::Element, name)),
            Self::Text => None,
        }
    }
}

/// Metadata for one declared property of a message type.
///
/// Descriptors are supplied in declaration order when a schema is built and
/// are immutable afterwards; their order dictates serialization order,
/// including attribute order.
///
/// Construction is builder-style:
///
/// ```rust
/// use wireform_property::{PropertyDescriptor, TypeTag};
///
/// let subject = PropertyDescriptor::new("subject", TypeTag::Text).element("Subject");
/// let id = PropertyDescriptor::new("id", TypeTag::Text).attribute("id");
/// let tags = PropertyDescriptor::new("tags", TypeTag::Text).unbound().element("Tag");
///
/// assert!(!subject.is_unbound());
/// assert!(tags.is_unbound());
/// assert_eq!(id.wire_name(), Some("id"));
/// ```
#[derive(Clone, Debug)]
pub struct PropertyDescriptor {
    name: &'static str,
    value_type: TypeTag,
    unbound: bool,
    shape: WireShape,
}

impl PropertyDescriptor {
    /// Creates a descriptor with the given access name and declared type.
    ///
    /// For unbound properties, `value_type` declares the *element* type of
    /// the collection. The wire shape defaults to [`WireShape::Text`]; use
    /// [`element`](Self::element) or [`attribute`](Self::attribute) to name
    /// it on the wire.
    #[must_use]
    pub fn new(name: &'static str, value_type: TypeTag) -> Self {
        Self {
            name,
            value_type,
            unbound: false,
            shape: WireShape::Text,
        }
    }

    /// Renders this property as a child element with the given name.
    #[must_use]
    pub fn element(mut self, wire_name: &'static str) -> Self {
        self.shape = WireShape::Element(wire_name);
        self
    }

    /// Renders this property as an attribute with the given name.
    #[must_use]
    pub fn attribute(mut self, wire_name: &'static str) -> Self {
        self.shape = WireShape::Attribute(wire_name);
        self
    }

    /// Marks this property as repeated.
    ///
    /// The declared type becomes the element type of the materialized
    /// collection.
    #[must_use]
    pub fn unbound(mut self) -> Self {
        self.unbound = true;
        self
    }

    /// Returns the property's access name.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared type tag (the element tag for unbound
    /// properties).
    #[must_use]
    #[inline]
    pub fn value_type(&self) -> TypeTag {
        self.value_type
    }

    /// Returns `true` if this is a repeated property.
    #[must_use]
    #[inline]
    pub fn is_unbound(&self) -> bool {
        self.unbound
    }

    /// Returns the wire shape.
    #[must_use]
    #[inline]
    pub fn shape(&self) -> WireShape {
        self.shape
    }

    /// Returns `true` if this property renders as an attribute.
    #[must_use]
    #[inline]
    pub fn is_attribute(&self) -> bool {
        matches!(self.shape, WireShape::Attribute(_))
    }

    /// Returns the wire name, or `None` for direct text content.
    #[must_use]
    pub fn wire_name(&self) -> Option<&'static str> {
        self.shape.wire_key().map(|(_, name)| name)
    }
}
