// Copyright 2025 the Wireform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-type property schemas.
//!
//! This module provides [`TypeSchema`], the ordered, immutable set of
//! property metadata for one message type, with lookup by access name and
//! reverse lookup by wire name.

use hashbrown::HashMap;

use crate::descriptor::{PropertyDescriptor, WireRole};
use crate::error::PropertyError;
use crate::tag::ObjectType;
use crate::value::Value;

/// A compact index identifying a property within its owning schema.
///
/// Descriptor order is registration order, so ids are stable for the life of
/// the process and double as serialization order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct PropertyId(u16);

impl PropertyId {
    /// Creates a property ID from the given index.
    #[must_use]
    #[inline]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Returns the underlying index.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u16 {
        self.0
    }
}

/// The property schema of one message type.
///
/// A schema holds the type's descriptors in declaration order together with
/// a name index and a wire-name reverse index. It is built once per type and
/// never mutated; every instance of the type shares the same schema.
///
/// Subtypes register only their own declared properties; distributing a flat
/// initializer map across an inheritance chain is handled by
/// [`partition`](Self::partition).
///
/// # Example
///
/// ```rust
/// use wireform_property::{PropertyDescriptor, TypeSchema, TypeTag};
///
/// struct FindItem;
///
/// let schema = TypeSchema::new::<FindItem>(vec![
///     PropertyDescriptor::new("subject", TypeTag::Text).element("Subject"),
/// ]);
///
/// let (_, desc) = schema.resolve("subject").unwrap();
/// assert_eq!(desc.wire_name(), Some("Subject"));
/// assert!(schema.resolve("body").is_err());
/// ```
#[derive(Debug)]
pub struct TypeSchema {
    object: ObjectType,
    namespace: Option<&'static str>,
    descriptors: Vec<PropertyDescriptor>,
    by_name: HashMap<&'static str, PropertyId>,
    by_attribute: HashMap<&'static str, PropertyId>,
    by_element: HashMap<&'static str, PropertyId>,
}

impl TypeSchema {
    /// Builds the schema for message type `T` from descriptors in
    /// declaration order.
    ///
    /// # Panics
    ///
    /// Panics if two descriptors share an access name, if two descriptors
    /// share a (role, wire name) pair, or if more than 65,536 properties are
    /// declared. These are programming errors in the type's metadata.
    #[must_use]
    pub fn new<T: 'static>(descriptors: Vec<PropertyDescriptor>) -> Self {
        let object = ObjectType::of::<T>();
        assert!(
            descriptors.len() <= u16::MAX as usize,
            "too many properties on {object} (max {})",
            u16::MAX
        );

        let mut by_name = HashMap::with_capacity(descriptors.len());
        let mut by_attribute = HashMap::new();
        let mut by_element = HashMap::new();
        for (index, desc) in descriptors.iter().enumerate() {
            #[expect(clippy::cast_possible_truncation, reason = "checked above")]
            let id = PropertyId::new(index as u16);
            let previous = by_name.insert(desc.name(), id);
            assert!(
                previous.is_none(),
                "property `{}` declared twice on {object}",
                desc.name()
            );
            if let Some((role, wire_name)) = desc.shape().wire_key() {
                // One reverse index per role: an attribute and an element may
                // share the same text without colliding.
                let reverse = match role {
                    WireRole::Attribute => &mut by_attribute,
                    WireRole::Element => &mut by_element,
                };
                let previous = reverse.insert(wire_name, id);
                assert!(
                    previous.is_none(),
                    "wire name `{wire_name}` declared twice on {object} for the same role"
                );
            }
        }

        Self {
            object,
            namespace: None,
            descriptors,
            by_name,
            by_attribute,
            by_element,
        }
    }

    /// Sets the XML namespace rendered as `xmlns` on this type's element.
    #[must_use]
    pub fn with_namespace(mut self, namespace: &'static str) -> Self {
        self.namespace = Some(namespace);
        self
    }

    /// Returns the identity of the owning message type.
    #[must_use]
    #[inline]
    pub fn object(&self) -> ObjectType {
        self.object
    }

    /// Returns the XML namespace, if one is set.
    #[must_use]
    #[inline]
    pub fn namespace(&self) -> Option<&'static str> {
        self.namespace
    }

    /// Returns the number of declared properties.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns `true` if no properties are declared.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Resolves an access name to its id and descriptor.
    ///
    /// Every accessor entry point goes through here first; an unregistered
    /// name fails with [`PropertyError::UnknownProperty`] before any state
    /// is touched.
    pub fn resolve(&self, name: &str) -> Result<(PropertyId, &PropertyDescriptor), PropertyError> {
        self.by_name
            .get(name)
            .map(|&id| (id, &self.descriptors[id.index() as usize]))
            .ok_or_else(|| PropertyError::unknown(self.object.short_name(), name))
    }

    /// Returns the descriptor for a previously resolved id.
    #[must_use]
    pub fn descriptor(&self, id: PropertyId) -> Option<&PropertyDescriptor> {
        self.descriptors.get(id.index() as usize)
    }

    /// Maps a wire name back to its descriptor for an exact role.
    ///
    /// The lookup keys on the (role, wire name) pair: an attribute and an
    /// element that happen to share the same text are distinct entries.
    #[must_use]
    pub fn reverse_lookup(&self, role: WireRole, wire_name: &str) -> Option<&PropertyDescriptor> {
        let reverse = match role {
            WireRole::Attribute => &self.by_attribute,
            WireRole::Element => &self.by_element,
        };
        reverse
            .get(wire_name)
            .map(|&id| &self.descriptors[id.index() as usize])
    }

    /// Maps an XML element or attribute name back to its descriptor.
    ///
    /// This is the hook an inbound parser uses to re-hydrate objects from a
    /// server response. The element role is consulted first, then the
    /// attribute role; `None` means the name is not part of this type's wire
    /// surface.
    #[must_use]
    pub fn element_meta(&self, wire_name: &str) -> Option<&PropertyDescriptor> {
        self.reverse_lookup(WireRole::Element, wire_name)
            .or_else(|| self.reverse_lookup(WireRole::Attribute, wire_name))
    }

    /// Splits a flat initializer into ancestor-bound and own pairs.
    ///
    /// Pairs whose keys are declared on this schema are consumed locally
    /// (second half of the return value); the rest are forwarded up the
    /// constructor chain for an ancestor type to consume. Supplied order is
    /// preserved within each half.
    #[must_use]
    pub fn partition<'a>(
        &self,
        values: Vec<(&'a str, Value)>,
    ) -> (Vec<(&'a str, Value)>, Vec<(&'a str, Value)>) {
        values
            .into_iter()
            .partition(|(name, _)| !self.by_name.contains_key(name))
    }

    /// Returns the declared properties in registration order with their ids.
    pub fn entries(&self) -> impl Iterator<Item = (PropertyId, &PropertyDescriptor)> {
        self.descriptors.iter().enumerate().map(|(i, desc)| {
            #[expect(clippy::cast_possible_truncation, reason = "index < len <= u16::MAX")]
            (PropertyId::new(i as u16), desc)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::TypeTag;

    struct Message;

    fn message_schema() -> TypeSchema {
        TypeSchema::new::<Message>(vec![
            PropertyDescriptor::new("id", TypeTag::Text).attribute("id"),
            PropertyDescriptor::new("subject", TypeTag::Text).element("Subject"),
            PropertyDescriptor::new("tags", TypeTag::Text).unbound().element("Tag"),
            PropertyDescriptor::new("body", TypeTag::Text),
        ])
    }

    #[test]
    fn resolve_known_names() {
        let schema = message_schema();
        let (id, desc) = schema.resolve("subject").unwrap();
        assert_eq!(id.index(), 1);
        assert_eq!(desc.wire_name(), Some("Subject"));
    }

    #[test]
    fn resolve_unknown_name_fails() {
        let schema = message_schema();
        let err = schema.resolve("subjcet").unwrap_err();
        assert_eq!(err, PropertyError::unknown("Message", "subjcet"));
    }

    #[test]
    fn entries_preserve_declaration_order() {
        let schema = message_schema();
        let names: Vec<_> = schema.entries().map(|(_, d)| d.name()).collect();
        assert_eq!(names, vec!["id", "subject", "tags", "body"]);
    }

    #[test]
    fn reverse_lookup_keys_on_role() {
        let schema = message_schema();
        let desc = schema.reverse_lookup(WireRole::Element, "Subject").unwrap();
        assert_eq!(desc.name(), "subject");
        assert!(schema.reverse_lookup(WireRole::Attribute, "Subject").is_none());
        assert!(schema.reverse_lookup(WireRole::Attribute, "id").is_some());
        assert!(schema.reverse_lookup(WireRole::Element, "id").is_none());
    }

    #[test]
    fn element_meta_checks_both_roles() {
        let schema = message_schema();
        assert_eq!(schema.element_meta("Subject").unwrap().name(), "subject");
        assert_eq!(schema.element_meta("Tag").unwrap().name(), "tags");
        assert_eq!(schema.element_meta("id").unwrap().name(), "id");
        assert!(schema.element_meta("Unknown").is_none());
    }

    #[test]
    fn attribute_element_collision_stays_distinct() {
        struct Collider;
        let schema = TypeSchema::new::<Collider>(vec![
            PropertyDescriptor::new("attr_id", TypeTag::Text).attribute("Id"),
            PropertyDescriptor::new("elem_id", TypeTag::Text).element("Id"),
        ]);
        assert_eq!(
            schema.reverse_lookup(WireRole::Attribute, "Id").unwrap().name(),
            "attr_id"
        );
        assert_eq!(
            schema.reverse_lookup(WireRole::Element, "Id").unwrap().name(),
            "elem_id"
        );
        // element_meta prefers the element role.
        assert_eq!(schema.element_meta("Id").unwrap().name(), "elem_id");
    }

    #[test]
    fn partition_splits_by_declared_keys() {
        struct Narrow;
        let schema = TypeSchema::new::<Narrow>(vec![
            PropertyDescriptor::new("a", TypeTag::Int),
            PropertyDescriptor::new("b", TypeTag::Int),
        ]);
        let (ancestor, own) = schema.partition(vec![
            ("a", Value::from(1_i64)),
            ("b", Value::from(2_i64)),
            ("c", Value::from(3_i64)),
        ]);
        let own_keys: Vec<_> = own.iter().map(|(k, _)| *k).collect();
        let ancestor_keys: Vec<_> = ancestor.iter().map(|(k, _)| *k).collect();
        assert_eq!(own_keys, vec!["a", "b"]);
        assert_eq!(ancestor_keys, vec!["c"]);
    }

    #[test]
    fn namespace_roundtrip() {
        struct Spanned;
        let schema = TypeSchema::new::<Spanned>(vec![]).with_namespace("urn:example");
        assert_eq!(schema.namespace(), Some("urn:example"));
        assert!(schema.is_empty());
    }

    #[test]
    #[should_panic(expected = "declared twice")]
    fn duplicate_name_panics() {
        struct Dup;
        let _ = TypeSchema::new::<Dup>(vec![
            PropertyDescriptor::new("a", TypeTag::Int),
            PropertyDescriptor::new("a", TypeTag::Text),
        ]);
    }

    #[test]
    #[should_panic(expected = "wire name")]
    fn duplicate_wire_name_panics() {
        struct DupWire;
        let _ = TypeSchema::new::<DupWire>(vec![
            PropertyDescriptor::new("a", TypeTag::Int).element("X"),
            PropertyDescriptor::new("b", TypeTag::Int).element("X"),
        ]);
    }
}
