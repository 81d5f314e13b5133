// Copyright 2025 the Wireform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runtime property values.
//!
//! This module provides [`Value`], the union of everything a property can
//! hold: scalars, a repeated-field collection, or a nested message object.

use core::fmt;

use chrono::{DateTime, Utc};

use crate::items::UnboundList;
use crate::object::XmlObject;
use crate::tag::TypeTag;

/// A runtime property value.
///
/// Scalars are stored inline; repeated fields are an [`UnboundList`]; nested
/// message objects are boxed behind the [`XmlObject`] trait so that a value
/// can hold any message type.
///
/// # Example
///
/// ```rust
/// use wireform_property::{TypeTag, Value};
///
/// let v = Value::from("hello");
/// assert_eq!(v.tag(), TypeTag::Text);
/// assert_eq!(v.as_text(), Some("hello"));
/// ```
pub enum Value {
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// A text string.
    Text(String),
    /// A UTC date/time.
    DateTime(DateTime<Utc>),
    /// An ordered collection of values.
    Items(UnboundList),
    /// A nested message object.
    Object(Box<dyn XmlObject>),
}

impl Value {
    /// Classifies this value into its canonical [`TypeTag`].
    ///
    /// Object values classify as their concrete message type's identity.
    #[must_use]
    pub fn tag(&self) -> TypeTag {
        match self {
            Self::Bool(_) => TypeTag::Bool,
            Self::Int(_) => TypeTag::Int,
            Self::Float(_) => TypeTag::Float,
            Self::Text(_) => TypeTag::Text,
            Self::DateTime(_) => TypeTag::DateTime,
            Self::Items(_) => TypeTag::Items,
            Self::Object(obj) => TypeTag::Object(obj.schema().object()),
        }
    }

    /// Wraps a message object.
    #[must_use]
    pub fn object<T: XmlObject + 'static>(obj: T) -> Self {
        Self::Object(Box::new(obj))
    }

    /// Returns the boolean, if this is a [`Value::Bool`].
    #[must_use]
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer, if this is a [`Value::Int`].
    #[must_use]
    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float, if this is a [`Value::Float`].
    #[must_use]
    #[inline]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Returns the text, if this is a [`Value::Text`].
    #[must_use]
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the date/time, if this is a [`Value::DateTime`].
    #[must_use]
    #[inline]
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Returns the collection, if this is a [`Value::Items`].
    #[must_use]
    #[inline]
    pub fn as_items(&self) -> Option<&UnboundList> {
        match self {
            Self::Items(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the collection mutably, if this is a [`Value::Items`].
    #[must_use]
    #[inline]
    pub fn as_items_mut(&mut self) -> Option<&mut UnboundList> {
        match self {
            Self::Items(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the nested object, if this is a [`Value::Object`].
    #[must_use]
    #[inline]
    pub fn as_object(&self) -> Option<&dyn XmlObject> {
        match self {
            Self::Object(obj) => Some(obj.as_ref()),
            _ => None,
        }
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        match self {
            Self::Bool(b) => Self::Bool(*b),
            Self::Int(i) => Self::Int(*i),
            Self::Float(x) => Self::Float(*x),
            Self::Text(s) => Self::Text(s.clone()),
            Self::DateTime(dt) => Self::DateTime(*dt),
            Self::Items(items) => Self::Items(items.clone()),
            Self::Object(obj) => Self::Object(obj.clone_boxed()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Self::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Self::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Self::DateTime(dt) => f.debug_tuple("DateTime").field(dt).finish(),
            Self::Items(items) => f.debug_tuple("Items").field(items).finish(),
            Self::Object(obj) => f
                .debug_tuple("Object")
                .field(&obj.schema().object().short_name())
                .finish(),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl From<UnboundList> for Value {
    fn from(value: UnboundList) -> Self {
        Self::Items(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    /// Builds a collection value from a plain vector.
    ///
    /// The collection's element tag is inferred from the first item (an empty
    /// vector is tagged [`TypeTag::Text`]); assigning the result to an
    /// unbound property rebinds it to the declared element tag anyway.
    fn from(values: Vec<T>) -> Self {
        let items: Vec<Value> = values.into_iter().map(Into::into).collect();
        let element = items.first().map_or(TypeTag::Text, Value::tag);
        let mut list = UnboundList::new(element);
        list.extend(items);
        Self::Items(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn scalar_tags() {
        assert_eq!(Value::from(true).tag(), TypeTag::Bool);
        assert_eq!(Value::from(42_i64).tag(), TypeTag::Int);
        assert_eq!(Value::from(1.5).tag(), TypeTag::Float);
        assert_eq!(Value::from("hi").tag(), TypeTag::Text);
        let dt = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(Value::from(dt).tag(), TypeTag::DateTime);
    }

    #[test]
    fn scalar_accessors() {
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from(7_i64).as_int(), Some(7));
        assert_eq!(Value::from(2.5).as_float(), Some(2.5));
        assert_eq!(Value::from("x").as_text(), Some("x"));
        assert_eq!(Value::from("x").as_bool(), None);
        assert_eq!(Value::from(true).as_text(), None);
    }

    #[test]
    fn vec_builds_items() {
        let v = Value::from(vec!["a", "b"]);
        assert_eq!(v.tag(), TypeTag::Items);
        let items = v.as_items().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items.element(), TypeTag::Text);
    }

    #[test]
    fn empty_vec_defaults_to_text_element() {
        let v = Value::from(Vec::<i64>::new());
        assert_eq!(v.as_items().unwrap().element(), TypeTag::Text);
    }

    #[test]
    fn clone_preserves_contents() {
        let v = Value::from(vec![1_i64, 2, 3]);
        let cloned = v.clone();
        assert_eq!(cloned.as_items().unwrap().len(), 3);
    }

    #[test]
    fn debug_names_variants() {
        assert_eq!(format!("{:?}", Value::from(1_i64)), "Int(1)");
        assert_eq!(format!("{:?}", Value::from("a")), "Text(\"a\")");
    }
}
