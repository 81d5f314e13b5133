// Copyright 2025 the Wireform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property access errors.

use crate::tag::TypeTag;

/// An error raised by property access.
///
/// Both variants are precondition violations checked before any mutation, so
/// a failed operation never leaves a partially-updated value store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
    /// The property name is not part of the type's registered schema.
    ///
    /// This indicates a programming error (a typo, or the wrong type) and
    /// should surface immediately rather than be retried.
    #[error("unknown property `{name}` on {object}")]
    UnknownProperty {
        /// The short name of the owning message type.
        object: &'static str,
        /// The property name that failed to resolve.
        name: String,
    },

    /// An assigned value's classified type does not match the declaration.
    #[error("invalid value for `{name}` on {object}: expected {expected}, got {actual}")]
    InvalidPropertyType {
        /// The short name of the owning message type.
        object: &'static str,
        /// The property being assigned.
        name: String,
        /// The declared type tag.
        expected: TypeTag,
        /// The classified tag of the rejected value.
        actual: TypeTag,
    },
}

impl PropertyError {
    /// Creates a [`PropertyError::UnknownProperty`] for `name` on `object`.
    #[must_use]
    pub fn unknown(object: &'static str, name: &str) -> Self {
        Self::UnknownProperty {
            object,
            name: String::from(name),
        }
    }

    /// Creates a [`PropertyError::InvalidPropertyType`] for `name` on `object`.
    #[must_use]
    pub fn invalid_type(
        object: &'static str,
        name: &str,
        expected: TypeTag,
        actual: TypeTag,
    ) -> Self {
        Self::InvalidPropertyType {
            object,
            name: String::from(name),
            expected,
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_display() {
        let err = PropertyError::unknown("FindItem", "subjcet");
        assert_eq!(
            err.to_string(),
            "unknown property `subjcet` on FindItem"
        );
    }

    #[test]
    fn invalid_type_display() {
        let err = PropertyError::invalid_type("FindItem", "subject", TypeTag::Text, TypeTag::Int);
        assert_eq!(
            err.to_string(),
            "invalid value for `subject` on FindItem: expected text, got int"
        );
    }

    #[test]
    fn errors_compare() {
        assert_eq!(
            PropertyError::unknown("A", "x"),
            PropertyError::unknown("A", "x")
        );
        assert_ne!(
            PropertyError::unknown("A", "x"),
            PropertyError::unknown("A", "y")
        );
    }
}
