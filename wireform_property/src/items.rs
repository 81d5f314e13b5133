// Copyright 2025 the Wireform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered collections for repeated ("unbound") properties.

use crate::tag::TypeTag;
use crate::value::Value;

/// The ordered, growable collection backing an unbound property.
///
/// An `UnboundList` preserves insertion order and duplicates, and is owned
/// exclusively by the instance holding it. It records the element tag it was
/// materialized with, taken from the owning property's declaration.
///
/// Element-level type checking is deliberately permissive: [`push`] accepts
/// any [`Value`]. The generic type check already waves collection-shaped
/// values through, and the original behavior this models accepted arbitrary
/// elements once the top-level value was recognized as a collection.
///
/// [`push`]: Self::push
///
/// # Example
///
/// ```rust
/// use wireform_property::{TypeTag, UnboundList, Value};
///
/// let mut tags = UnboundList::new(TypeTag::Text);
/// tags.push(Value::from("urgent"));
/// tags.push(Value::from("unread"));
/// assert_eq!(tags.len(), 2);
/// assert_eq!(tags.get(0).and_then(Value::as_text), Some("urgent"));
/// ```
#[derive(Clone, Debug)]
pub struct UnboundList {
    element: TypeTag,
    items: Vec<Value>,
}

impl UnboundList {
    /// Creates an empty collection bound to the given element tag.
    #[must_use]
    pub fn new(element: TypeTag) -> Self {
        Self {
            element,
            items: Vec::new(),
        }
    }

    /// Returns the element tag this collection was created with.
    #[must_use]
    #[inline]
    pub fn element(&self) -> TypeTag {
        self.element
    }

    /// Appends a value, preserving insertion order.
    pub fn push(&mut self, value: Value) {
        self.items.push(value);
    }

    /// Returns the number of items.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the collection holds no items.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Returns an iterator over the items in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, Value> {
        self.items.iter()
    }
}

impl Extend<Value> for UnboundList {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl IntoIterator for UnboundList {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a UnboundList {
    type Item = &'a Value;
    type IntoIter = core::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let list = UnboundList::new(TypeTag::Text);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.element(), TypeTag::Text);
    }

    #[test]
    fn push_preserves_order_and_duplicates() {
        let mut list = UnboundList::new(TypeTag::Text);
        list.push(Value::from("a"));
        list.push(Value::from("b"));
        list.push(Value::from("a"));

        let texts: Vec<_> = list.iter().filter_map(Value::as_text).collect();
        assert_eq!(texts, vec!["a", "b", "a"]);
    }

    #[test]
    fn push_is_permissive() {
        // The element tag is advisory; pushing a mismatched value succeeds.
        let mut list = UnboundList::new(TypeTag::Text);
        list.push(Value::from(5_i64));
        assert_eq!(list.get(0).and_then(Value::as_int), Some(5));
    }

    #[test]
    fn extend_and_into_iter() {
        let mut list = UnboundList::new(TypeTag::Int);
        list.extend([Value::from(1_i64), Value::from(2_i64)]);
        let back: Vec<_> = list.into_iter().filter_map(|v| v.as_int()).collect();
        assert_eq!(back, vec![1, 2]);
    }
}
