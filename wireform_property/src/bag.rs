// Copyright 2025 the Wireform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-instance sparse value storage.
//!
//! This module provides [`PropertyBag`], the raw store behind every message
//! instance. A bag holds values keyed by [`PropertyId`] with no schema
//! checks of its own; the accessor layer
//! ([`XmlObjectExt`](crate::XmlObjectExt)) validates before touching it.
//!
//! # Implementation
//!
//! A sorted vector with binary search rather than a hash map:
//!
//! - Better cache locality (contiguous memory)
//! - Lower memory overhead (no hash buckets)
//! - O(log n) lookup, which is fast for typical property counts (5-20)
//! - Inline storage for small property sets via `SmallVec`

use smallvec::SmallVec;

use crate::schema::PropertyId;
use crate::value::Value;

/// Default inline capacity for value entries.
///
/// Most message instances have fewer than 8 properties set, so this avoids
/// heap allocation in the common case.
const INLINE_CAPACITY: usize = 8;

/// Per-instance sparse storage for property values.
///
/// Absence of an entry means the property is unset, which is distinct from
/// being set to an empty or falsy value.
///
/// # Example
///
/// ```rust
/// use wireform_property::{PropertyBag, PropertyId, Value};
///
/// let subject = PropertyId::new(0);
/// let mut bag = PropertyBag::new();
///
/// assert!(!bag.contains(subject));
/// bag.insert(subject, Value::from("hello"));
/// assert_eq!(bag.value(subject).and_then(Value::as_text), Some("hello"));
/// assert!(bag.remove(subject));
/// assert!(bag.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct PropertyBag {
    /// Entries sorted by [`PropertyId`] for binary search lookup.
    entries: SmallVec<[(PropertyId, Value); INLINE_CAPACITY]>,
}

impl PropertyBag {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binary search for an entry by property ID.
    #[inline]
    fn find(&self, id: PropertyId) -> Result<usize, usize> {
        self.entries.binary_search_by_key(&id, |(pid, _)| *pid)
    }

    /// Returns the stored value, if set.
    #[must_use]
    #[inline]
    pub fn value(&self, id: PropertyId) -> Option<&Value> {
        self.find(id).ok().map(|idx| &self.entries[idx].1)
    }

    /// Returns the stored value mutably, if set.
    #[must_use]
    #[inline]
    pub fn value_mut(&mut self, id: PropertyId) -> Option<&mut Value> {
        self.find(id).ok().map(|idx| &mut self.entries[idx].1)
    }

    /// Stores a value, replacing any existing one.
    pub fn insert(&mut self, id: PropertyId, value: Value) {
        match self.find(id) {
            Ok(idx) => self.entries[idx].1 = value,
            Err(idx) => self.entries.insert(idx, (id, value)),
        }
    }

    /// Removes a stored value, reverting the property to unset.
    ///
    /// Returns `true` if a value was removed.
    pub fn remove(&mut self, id: PropertyId) -> bool {
        if let Ok(idx) = self.find(id) {
            self.entries.remove(idx);
            true
        } else {
            false
        }
    }

    /// Returns `true` if a value is currently stored.
    #[must_use]
    #[inline]
    pub fn contains(&self, id: PropertyId) -> bool {
        self.find(id).is_ok()
    }

    /// Returns the number of properties with stored values.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no values are stored.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the ids with stored values, in id order.
    pub fn ids(&self) -> impl Iterator<Item = PropertyId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }
}
