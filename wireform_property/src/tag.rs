// Copyright 2025 the Wireform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical type tags and value classification.
//!
//! This module provides [`TypeTag`], the closed set of type classifications a
//! runtime [`Value`](crate::Value) can fall into, and [`ObjectType`] for
//! identifying concrete message types.

use core::any::TypeId;
use core::fmt;

/// The identity of a concrete message type.
///
/// This pairs the type's [`TypeId`] with its name for diagnostics. Two
/// `ObjectType`s are equal iff they identify the same Rust type.
///
/// # Example
///
/// ```rust
/// use wireform_property::ObjectType;
///
/// struct FindItem;
///
/// let a = ObjectType::of::<FindItem>();
/// let b = ObjectType::of::<FindItem>();
/// assert_eq!(a, b);
/// assert!(a.name().ends_with("FindItem"));
/// ```
#[derive(Copy, Clone)]
pub struct ObjectType {
    id: TypeId,
    name: &'static str,
}

impl ObjectType {
    /// Returns the identity of the type `T`.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: core::any::type_name::<T>(),
        }
    }

    /// Returns the [`TypeId`] of the identified type.
    #[must_use]
    #[inline]
    pub fn id(self) -> TypeId {
        self.id
    }

    /// Returns the full type name of the identified type.
    #[must_use]
    #[inline]
    pub fn name(self) -> &'static str {
        self.name
    }

    /// Returns the final path segment of the type name.
    ///
    /// This is what error messages and `Display` use; the full path is
    /// available via [`name`](Self::name).
    #[must_use]
    pub fn short_name(self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }
}

impl PartialEq for ObjectType {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ObjectType {}

impl core::hash::Hash for ObjectType {
    #[inline]
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectType").field(&self.name).finish()
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// The canonical classification of a runtime value's type.
///
/// Every [`Value`](crate::Value) classifies into exactly one tag; property
/// declarations use the same tags, so a stored value can be checked against
/// its declaration by comparing tags. Nested message types classify as
/// [`TypeTag::Object`] carrying their concrete identity.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TypeTag {
    /// A boolean.
    Bool,
    /// A signed integer.
    Int,
    /// A floating-point number.
    Float,
    /// A text string.
    Text,
    /// A UTC date/time.
    DateTime,
    /// An ordered collection of values.
    Items,
    /// A concrete message type.
    Object(ObjectType),
}

impl TypeTag {
    /// Returns the tag for the message type `T`.
    #[must_use]
    pub fn object<T: 'static>() -> Self {
        Self::Object(ObjectType::of::<T>())
    }

    /// Returns `true` if a value classified as `actual` may be assigned to a
    /// property declared as `self`.
    ///
    /// An exact tag match passes. A value classified as [`TypeTag::Items`]
    /// passes against *any* declared tag: collection-shaped values are waved
    /// through here so that the unbound-property machinery, not the generic
    /// check, owns collection semantics.
    #[must_use]
    pub fn accepts(self, actual: Self) -> bool {
        self == actual || actual == Self::Items
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::Int => f.write_str("int"),
            Self::Float => f.write_str("float"),
            Self::Text => f.write_str("text"),
            Self::DateTime => f.write_str("datetime"),
            Self::Items => f.write_str("items"),
            Self::Object(ty) => write!(f, "object {ty}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Mailbox;
    struct Recipient;

    #[test]
    fn object_type_identity() {
        assert_eq!(ObjectType::of::<Mailbox>(), ObjectType::of::<Mailbox>());
        assert_ne!(ObjectType::of::<Mailbox>(), ObjectType::of::<Recipient>());
    }

    #[test]
    fn object_type_short_name() {
        let ty = ObjectType::of::<Mailbox>();
        assert_eq!(ty.short_name(), "Mailbox");
        assert!(ty.name().contains("tests::Mailbox"));
    }

    #[test]
    fn exact_match_accepts() {
        assert!(TypeTag::Text.accepts(TypeTag::Text));
        assert!(TypeTag::Bool.accepts(TypeTag::Bool));
        assert!(
            TypeTag::object::<Mailbox>().accepts(TypeTag::object::<Mailbox>()),
            "same object type must accept itself"
        );
    }

    #[test]
    fn mismatch_rejected() {
        assert!(!TypeTag::Text.accepts(TypeTag::Int));
        assert!(!TypeTag::Int.accepts(TypeTag::Float));
        assert!(!TypeTag::object::<Mailbox>().accepts(TypeTag::object::<Recipient>()));
        assert!(!TypeTag::Text.accepts(TypeTag::object::<Mailbox>()));
    }

    #[test]
    fn items_accepted_everywhere() {
        // Collection-shaped values pass the generic check for any declared
        // tag; the unbound machinery is responsible for the rest.
        assert!(TypeTag::Text.accepts(TypeTag::Items));
        assert!(TypeTag::Bool.accepts(TypeTag::Items));
        assert!(TypeTag::object::<Mailbox>().accepts(TypeTag::Items));
        assert!(TypeTag::Items.accepts(TypeTag::Items));
    }

    #[test]
    fn items_declared_rejects_scalars() {
        assert!(!TypeTag::Items.accepts(TypeTag::Text));
    }

    #[test]
    fn display() {
        assert_eq!(TypeTag::Text.to_string(), "text");
        assert_eq!(TypeTag::DateTime.to_string(), "datetime");
        assert_eq!(
            TypeTag::object::<Mailbox>().to_string(),
            "object Mailbox"
        );
    }
}
