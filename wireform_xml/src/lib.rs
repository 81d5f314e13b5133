// Copyright 2025 the Wireform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! XML export for wireform message objects.
//!
//! This crate walks a message type's schema in registration order together
//! with an instance's stored values and produces an XML document (when root)
//! or fragment (when nested), recursing into nested objects.
//!
//! The encoder never mutates the instance: unset properties simply render
//! nothing, including unbound properties that were never materialized.
//!
//! ```rust
//! use wireform_property::{
//!     registry, PropertyBag, PropertyDescriptor, TypeSchema, TypeTag, XmlObject, XmlObjectExt,
//! };
//! use wireform_xml::ToXml;
//!
//! struct FooRequest {
//!     bag: PropertyBag,
//! }
//!
//! impl XmlObject for FooRequest {
//!     fn schema(&self) -> &'static TypeSchema {
//!         registry().register_with::<Self>(|| {
//!             TypeSchema::new::<Self>(vec![
//!                 PropertyDescriptor::new("subject", TypeTag::Text).element("Subject"),
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
//! let mut req = FooRequest { bag: PropertyBag::new() };
//! req.set("subject", "hello")?;
//! assert_eq!(
//!     req.to_xml("FooRequest", true),
//!     "<?xml version=\"1.0\" encoding=\"UTF-8\"?><FooRequest><Subject>hello</Subject></FooRequest>"
//! );
//! # Ok::<(), wireform_property::PropertyError>(())
//! ```

use core::fmt::Write as _;

use wireform_property::{Value, WireShape, XmlObject};

/// The document header emitted for root elements.
const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// Serializes a message object to XML.
///
/// `element_name` names the produced element; `root` prepends the XML
/// declaration header. Attribute order and child order follow the owning
/// type's schema registration order; repeated properties render one child
/// per item, consecutively, in collection order.
#[must_use]
pub fn to_xml(obj: &dyn XmlObject, element_name: &str, root: bool) -> String {
    let mut out = String::new();
    if root {
        out.push_str(XML_DECLARATION);
    }
    write_element(&mut out, obj, element_name);
    out
}

/// Extension adding [`to_xml`] as a method on every message object.
pub trait ToXml: XmlObject {
    /// Serializes this object to XML; see [`to_xml`].
    #[must_use]
    fn to_xml(&self, element_name: &str, root: bool) -> String
    where
        Self: Sized,
    {
        to_xml(self, element_name, root)
    }
}

impl<T: XmlObject + ?Sized> ToXml for T {}

fn write_element(out: &mut String, obj: &dyn XmlObject, element_name: &str) {
    let schema = obj.schema();
    let bag = obj.bag();

    let _ = write!(out, "<{element_name}");
    for (id, desc) in schema.entries() {
        if let WireShape::Attribute(attr) = desc.shape()
            && let Some(value) = bag.value(id)
        {
            let _ = write!(out, " {attr}=\"");
            write_scalar(out, value);
            out.push('"');
        }
    }
    if let Some(ns) = schema.namespace() {
        let _ = write!(out, " xmlns=\"{ns}\"");
    }
    out.push('>');

    for (id, desc) in schema.entries() {
        let Some(value) = bag.value(id) else {
            continue;
        };
        match desc.shape() {
            WireShape::Attribute(_) => {}
            WireShape::Text => {
                // No wire name: the value is this element's text content.
                write_scalar(out, value);
            }
            WireShape::Element(child_name) => {
                if desc.is_unbound() {
                    if let Value::Items(items) = value {
                        for item in items {
                            write_child(out, child_name, item);
                        }
                    }
                } else {
                    write_child(out, child_name, value);
                }
            }
        }
    }

    let _ = write!(out, "</{element_name}>");
}

/// Renders one child element wrapping `value`.
///
/// Nested objects produce their own complete element via recursion; every
/// other value is wrapped and scalar-encoded.
fn write_child(out: &mut String, child_name: &str, value: &Value) {
    if let Value::Object(nested) = value {
        write_element(out, nested.as_ref(), child_name);
    } else {
        let _ = write!(out, "<{child_name}>");
        write_scalar(out, value);
        let _ = write!(out, "</{child_name}>");
    }
}

/// Scalar-encodes a value into `out`.
///
/// Booleans render as the literals `true`/`false`; date/times as
/// `YYYY-MM-DDTHH:MM:SS.000Z` (always UTC, milliseconds fixed at `000`);
/// numbers and text in their natural form, with text escaped. Collections
/// encode item by item in order; nested objects have no scalar form and
/// render nothing here.
fn write_scalar(out: &mut String, value: &Value) {
    match value {
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Int(i) => {
            let _ = write!(out, "{i}");
        }
        Value::Float(x) => {
            let _ = write!(out, "{x}");
        }
        Value::Text(s) => push_escaped(out, s),
        Value::DateTime(dt) => {
            let _ = write!(out, "{}", dt.format("%Y-%m-%dT%H:%M:%S.000Z"));
        }
        Value::Items(items) => {
            for item in items {
                write_scalar(out, item);
            }
        }
        Value::Object(_) => {}
    }
}

/// Escapes the five XML special characters.
fn push_escaped(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
}
