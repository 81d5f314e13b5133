// Copyright 2025 the Wireform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The process-wide schema registry.
//!
//! Schemas are built lazily, once per message type, the first time the type
//! is used. Registration is insert-if-absent under a write lock so that
//! concurrent first use of the same type from multiple threads yields a
//! single shared entry; after that, entries are immutable and reads take
//! only the read lock.

use core::any::TypeId;
use std::sync::{OnceLock, PoisonError, RwLock};

use hashbrown::HashMap;

use crate::schema::TypeSchema;

/// The registry of every message type's schema, keyed by type identity.
///
/// Use the process-wide instance via [`registry`]; a separate instance is
/// only useful for tests that want isolation.
///
/// # Example
///
/// ```rust
/// use wireform_property::{registry, PropertyDescriptor, TypeSchema, TypeTag};
///
/// struct FindItem;
///
/// let schema = registry().register_with::<FindItem>(|| {
///     TypeSchema::new::<FindItem>(vec![
///         PropertyDescriptor::new("subject", TypeTag::Text).element("Subject"),
///     ])
/// });
///
/// // A second registration is a no-op returning the same entry.
/// let again = registry().register_with::<FindItem>(|| unreachable!());
/// assert!(core::ptr::eq(schema, again));
/// ```
#[derive(Default)]
pub struct SchemaRegistry {
    entries: RwLock<HashMap<TypeId, &'static TypeSchema>>,
}

impl SchemaRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the schema for `T`, building and inserting it on first use.
    ///
    /// If `T` is already registered, `build` is not called. First
    /// registrations of the same type racing from multiple threads are
    /// serialized by the write lock; exactly one build wins and every caller
    /// receives the same `&'static` entry. The schema is leaked to obtain
    /// the `'static` lifetime, which is bounded at one allocation per type
    /// per process.
    pub fn register_with<T: 'static>(
        &self,
        build: impl FnOnce() -> TypeSchema,
    ) -> &'static TypeSchema {
        let key = TypeId::of::<T>();
        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(&schema) = entries.get(&key) {
                return schema;
            }
        }

        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        // Double-check under the write lock: another thread may have built
        // the entry between our read and write acquisitions.
        if let Some(&schema) = entries.get(&key) {
            return schema;
        }
        let schema: &'static TypeSchema = Box::leak(Box::new(build()));
        debug_assert_eq!(
            schema.object().id(),
            key,
            "schema built for a different type than it was registered under"
        );
        #[cfg(feature = "logging")]
        log::debug!(
            "registered schema for {} ({} properties)",
            schema.object(),
            schema.len()
        );
        entries.insert(key, schema);
        schema
    }

    /// Returns the schema for `T`, if it has been registered.
    #[must_use]
    pub fn get<T: 'static>(&self) -> Option<&'static TypeSchema> {
        self.get_by_id(TypeId::of::<T>())
    }

    /// Returns the schema registered under a type identity, if any.
    #[must_use]
    pub fn get_by_id(&self, id: TypeId) -> Option<&'static TypeSchema> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(&id).copied()
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.len()
    }

    /// Returns `true` if no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl core::fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("SchemaRegistry")
            .field("count", &entries.len())
            .field(
                "types",
                &entries
                    .values()
                    .map(|s| s.object().short_name())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Returns the process-wide schema registry.
pub fn registry() -> &'static SchemaRegistry {
    static REGISTRY: OnceLock<SchemaRegistry> = OnceLock::new();
    REGISTRY.get_or_init(SchemaRegistry::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::PropertyDescriptor;
    use crate::tag::TypeTag;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Widget;
    struct Gadget;

    fn widget_schema() -> TypeSchema {
        TypeSchema::new::<Widget>(vec![PropertyDescriptor::new("name", TypeTag::Text)])
    }

    #[test]
    fn register_then_get() {
        let reg = SchemaRegistry::new();
        assert!(reg.is_empty());
        let schema = reg.register_with::<Widget>(widget_schema);
        assert_eq!(schema.len(), 1);
        assert_eq!(reg.len(), 1);

        let found = reg.get::<Widget>().unwrap();
        assert!(core::ptr::eq(schema, found));
        assert!(reg.get::<Gadget>().is_none());
    }

    #[test]
    fn second_registration_is_a_no_op() {
        let reg = SchemaRegistry::new();
        let built = AtomicUsize::new(0);
        let first = reg.register_with::<Widget>(|| {
            built.fetch_add(1, Ordering::SeqCst);
            widget_schema()
        });
        let second = reg.register_with::<Widget>(|| {
            built.fetch_add(1, Ordering::SeqCst);
            widget_schema()
        });
        assert_eq!(built.load(Ordering::SeqCst), 1);
        assert!(core::ptr::eq(first, second));
    }

    #[test]
    fn concurrent_first_registration_builds_once() {
        struct Raced;

        let reg = std::sync::Arc::new(SchemaRegistry::new());
        let built = std::sync::Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let reg = reg.clone();
                let built = built.clone();
                std::thread::spawn(move || {
                    let schema = reg.register_with::<Raced>(|| {
                        built.fetch_add(1, Ordering::SeqCst);
                        TypeSchema::new::<Raced>(vec![])
                    });
                    schema as *const TypeSchema as usize
                })
            })
            .collect();

        let pointers: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(built.load(Ordering::SeqCst), 1);
        assert!(
            pointers.windows(2).all(|w| w[0] == w[1]),
            "all threads must observe the same schema entry"
        );
    }

    #[test]
    fn global_registry_is_shared() {
        struct GlobalWidget;
        let a = registry().register_with::<GlobalWidget>(|| TypeSchema::new::<GlobalWidget>(vec![]));
        let b = registry().get::<GlobalWidget>().unwrap();
        assert!(core::ptr::eq(a, b));
    }
}
