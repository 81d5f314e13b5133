// Copyright 2025 the Wireform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wireform Property: metadata-driven property storage for typed messages.
//!
//! This crate is the runtime object model beneath a typed API client: every
//! message type stores its field values in a uniform, schema-checked way,
//! ready for XML serialization by `wireform_xml`.
//!
//! ## Core Concepts
//!
//! ### Schemas
//!
//! A [`TypeSchema`] is built once per message type from an ordered list of
//! [`PropertyDescriptor`]s and shared by every instance of the type. The
//! process-wide [`SchemaRegistry`] (via [`registry`]) makes first use of a
//! type build its schema exactly once, even across threads.
//!
//! ### Values
//!
//! [`Value`] is the runtime union a property can hold: scalars, a repeated
//! field collection ([`UnboundList`]), or a nested message object. A value
//! classifies into a [`TypeTag`], which is compared against the property's
//! declaration on assignment.
//!
//! ### Access
//!
//! [`PropertyBag`] is the per-instance sparse store; [`XmlObjectExt`]
//! mediates every get/set/has/clear against the schema, failing with
//! [`PropertyError`] before anything is mutated.
//!
//! ## Quick Start
//!
//! ```rust
//! use wireform_property::{
//!     registry, PropertyBag, PropertyDescriptor, TypeSchema, TypeTag, Value, XmlObject,
//!     XmlObjectExt,
//! };
//!
//! struct FindItem {
//!     bag: PropertyBag,
//! }
//!
//! impl XmlObject for FindItem {
//!     fn schema(&self) -> &'static TypeSchema {
//!         registry().register_with::<Self>(|| {
//!             TypeSchema::new::<Self>(vec![
//!                 PropertyDescriptor::new("subject", TypeTag::Text).element("Subject"),
//!                 PropertyDescriptor::new("tags", TypeTag::Text).unbound().element("Tag"),
//!             ])
//!         })
//!     }
//!     fn bag(&self) -> &PropertyBag {
//!         &self.bag
//!     }
//!     fn bag_mut(&mut self) -> &mut PropertyBag {
//!         &mut self.bag
//!     }
//!     fn clone_boxed(&self) -> Box<dyn XmlObject> {
//!         Box::new(Self { bag: self.bag.clone() })
//!     }
//! }
//!
//! let mut item = FindItem { bag: PropertyBag::new() };
//! item.set("subject", "hello")?;
//! item.items_mut("tags")?.push(Value::from("urgent"));
//!
//! assert!(item.has("subject")?);
//! assert_eq!(item.get("tags")?.unwrap().as_items().unwrap().len(), 1);
//! # Ok::<(), wireform_property::PropertyError>(())
//! ```
//!
//! ## Concurrency
//!
//! Schema registration is serialized and entries are immutable afterwards,
//! so schema reads are lock-free sharing of `&'static` data. Instances
//! ([`PropertyBag`] and [`UnboundList`]) have one logical owner and are not
//! synchronized; keep each instance on a single thread.

mod bag;
mod descriptor;
mod error;
mod items;
mod object;
mod registry;
mod schema;
mod tag;
mod value;

pub use bag::PropertyBag;
pub use descriptor::{PropertyDescriptor, WireRole, WireShape};
pub use error::PropertyError;
pub use items::UnboundList;
pub use object::{XmlObject, XmlObjectExt};
pub use registry::{SchemaRegistry, registry};
pub use schema::{PropertyId, TypeSchema};
pub use tag::{ObjectType, TypeTag};
pub use value::Value;
