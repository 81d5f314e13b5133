// Copyright 2025 the Wireform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Message object traits.
//!
//! This module provides the [`XmlObject`] trait for message types backed by
//! a schema and a [`PropertyBag`], and [`XmlObjectExt`] for schema-checked
//! property access.

use crate::bag::PropertyBag;
use crate::error::PropertyError;
use crate::items::UnboundList;
use crate::schema::TypeSchema;
use crate::tag::{ObjectType, TypeTag};
use crate::value::Value;

/// A message object: a typed bag of property values described by a schema.
///
/// Every message type implements this trait; the schema is shared by all
/// instances of the type (registered once via
/// [`SchemaRegistry::register_with`](crate::SchemaRegistry::register_with)),
/// while the bag is per-instance mutable state.
///
/// Access goes through [`XmlObjectExt`], which validates names and types
/// against the schema before touching the bag.
pub trait XmlObject {
    /// Returns the schema shared by every instance of this type.
    fn schema(&self) -> &'static TypeSchema;

    /// Returns the instance's value store.
    fn bag(&self) -> &PropertyBag;

    /// Returns the instance's value store mutably.
    fn bag_mut(&mut self) -> &mut PropertyBag;

    /// Clones this object behind the trait.
    fn clone_boxed(&self) -> Box<dyn XmlObject>;

    /// Returns the identity of this object's concrete type.
    fn object_type(&self) -> ObjectType {
        self.schema().object()
    }
}

/// Schema-checked property access for [`XmlObject`] types.
///
/// Each operation resolves the property name through the schema first and
/// fails with [`PropertyError::UnknownProperty`] for names the type does not
/// declare; nothing is mutated on failure.
///
/// # Example
///
/// ```rust
/// use wireform_property::{
///     registry, PropertyBag, PropertyDescriptor, TypeSchema, TypeTag, Value, XmlObject,
///     XmlObjectExt,
/// };
///
/// struct FindItem {
///     bag: PropertyBag,
/// }
///
/// impl XmlObject for FindItem {
///     fn schema(&self) -> &'static TypeSchema {
///         registry().register_with::<Self>(|| {
///             TypeSchema::new::<Self>(vec![
///                 PropertyDescriptor::new("subject", TypeTag::Text).element("Subject"),
///             ])
///         })
///     }
///     fn bag(&self) -> &PropertyBag {
///         &self.bag
///     }
///     fn bag_mut(&mut self) -> &mut PropertyBag {
///         &mut self.bag
///     }
///     fn clone_boxed(&self) -> Box<dyn XmlObject> {
///         Box::new(Self { bag: self.bag.clone() })
///     }
/// }
///
/// let mut item = FindItem { bag: PropertyBag::new() };
/// item.set("subject", "hello")?;
/// assert!(item.has("subject")?);
/// assert_eq!(item.get("subject")?.and_then(Value::as_text), Some("hello"));
/// # Ok::<(), wireform_property::PropertyError>(())
/// ```
pub trait XmlObjectExt: XmlObject {
    /// Returns the stored value for `name`, or `None` if unset.
    ///
    /// An unbound property with no stored value materializes an empty
    /// [`UnboundList`] bound to the declared element tag, stores it, and
    /// returns it — so the result is always `Some` for unbound properties,
    /// and the materialization counts as "stored" for [`has`](Self::has).
    /// Repeated calls return the same stored collection.
    fn get(&mut self, name: &str) -> Result<Option<&Value>, PropertyError> {
        let schema = self.schema();
        let (id, desc) = schema.resolve(name)?;
        if desc.is_unbound() && !self.bag().contains(id) {
            self.bag_mut()
                .insert(id, Value::Items(UnboundList::new(desc.value_type())));
        }
        Ok(self.bag().value(id))
    }

    /// Validates and stores a value for `name`.
    ///
    /// Non-unbound properties require the value's classified tag to equal
    /// the declared tag (collection-shaped values pass regardless; see
    /// [`TypeTag::accepts`]). Unbound properties accept only a collection;
    /// its items replace any existing collection, appended in order into a
    /// fresh [`UnboundList`] bound to the declared element tag.
    ///
    /// On failure the store is left unchanged.
    fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), PropertyError> {
        let value = value.into();
        let schema = self.schema();
        let (id, desc) = schema.resolve(name)?;

        if desc.is_unbound() {
            let actual = value.tag();
            let Value::Items(incoming) = value else {
                return Err(PropertyError::invalid_type(
                    schema.object().short_name(),
                    name,
                    TypeTag::Items,
                    actual,
                ));
            };
            let mut list = UnboundList::new(desc.value_type());
            list.extend(incoming);
            self.bag_mut().insert(id, Value::Items(list));
        } else {
            let actual = value.tag();
            if !desc.value_type().accepts(actual) {
                return Err(PropertyError::invalid_type(
                    schema.object().short_name(),
                    name,
                    desc.value_type(),
                    actual,
                ));
            }
            self.bag_mut().insert(id, value);
        }
        Ok(())
    }

    /// Returns `true` iff a value is currently stored for `name`.
    fn has(&self, name: &str) -> Result<bool, PropertyError> {
        let (id, _) = self.schema().resolve(name)?;
        Ok(self.bag().contains(id))
    }

    /// Removes any stored value for `name`, reverting it to unset.
    ///
    /// Returns `true` if a value was removed.
    fn clear(&mut self, name: &str) -> Result<bool, PropertyError> {
        let (id, _) = self.schema().resolve(name)?;
        Ok(self.bag_mut().remove(id))
    }

    /// Returns the collection for an unbound property, mutably.
    ///
    /// Materializes like [`get`](Self::get), enabling read-then-append use:
    /// resolve the property once, then push items onto the returned list.
    /// Fails with [`PropertyError::InvalidPropertyType`] if the property is
    /// not unbound.
    fn items_mut(&mut self, name: &str) -> Result<&mut UnboundList, PropertyError> {
        let schema = self.schema();
        let (id, desc) = schema.resolve(name)?;
        if !desc.is_unbound() {
            return Err(PropertyError::invalid_type(
                schema.object().short_name(),
                name,
                TypeTag::Items,
                desc.value_type(),
            ));
        }
        if !self.bag().contains(id) {
            self.bag_mut()
                .insert(id, Value::Items(UnboundList::new(desc.value_type())));
        }
        match self.bag_mut().value_mut(id) {
            Some(Value::Items(list)) => Ok(list),
            _ => Err(PropertyError::invalid_type(
                schema.object().short_name(),
                name,
                TypeTag::Items,
                desc.value_type(),
            )),
        }
    }

    /// Applies a flat initializer list in order.
    ///
    /// This is the constructor-time entry point: a subtype passes its
    /// initializer through [`TypeSchema::partition`], forwards the ancestor
    /// half up its chain, and applies its own half here. The first failing
    /// pair aborts; pairs already applied remain stored.
    fn set_all<'a, I>(&mut self, values: I) -> Result<(), PropertyError>
    where
        I: IntoIterator<Item = (&'a str, Value)>,
    {
        for (name, value) in values {
            self.set(name, value)?;
        }
        Ok(())
    }
}

impl<T: XmlObject + ?Sized> XmlObjectExt for T {}
