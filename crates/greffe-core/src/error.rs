//! # Error Types — Registry Error Taxonomy
//!
//! The four failure classes a registry write or read can surface. All use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Every variant names the entity it concerns, so a caller juggling
//!   twenty entity types can attribute a failure without guesswork.
//! - Validation and dangling-reference errors additionally name the field;
//!   conflict errors name the violated constraint.
//! - No error is retried internally and none is fatal to the process —
//!   each write fails independently.

use thiserror::Error;

/// Failure taxonomy for registry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A field value is malformed or a required field is missing.
    #[error("validation error on {entity}.{field}: {message}")]
    Validation {
        /// Entity kind the write targeted.
        entity: &'static str,
        /// The offending field.
        field: &'static str,
        /// What was wrong with the value.
        message: String,
    },

    /// A foreign key does not resolve to an existing row.
    #[error("dangling reference: {entity}.{field} -> {id}")]
    DanglingReference {
        /// Entity kind the write targeted.
        entity: &'static str,
        /// The foreign-key field.
        field: &'static str,
        /// The identifier that failed to resolve.
        id: String,
    },

    /// A uniqueness constraint was violated, or a protected delete was
    /// blocked by live dependents.
    #[error("conflict on {entity} ({constraint}): {message}")]
    Conflict {
        /// Entity kind the write targeted.
        entity: &'static str,
        /// The violated constraint or the protecting relation.
        constraint: &'static str,
        /// Details identifying the clash.
        message: String,
    },

    /// The operation targeted an identifier with no corresponding row.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity kind the operation targeted.
        entity: &'static str,
        /// The missing identifier.
        id: String,
    },
}

impl RegistryError {
    /// Construct a validation error.
    pub fn validation(
        entity: &'static str,
        field: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::Validation {
            entity,
            field,
            message: message.into(),
        }
    }

    /// Construct a dangling-reference error.
    pub fn dangling(entity: &'static str, field: &'static str, id: impl ToString) -> Self {
        Self::DanglingReference {
            entity,
            field,
            id: id.to_string(),
        }
    }

    /// Construct a conflict error.
    pub fn conflict(
        entity: &'static str,
        constraint: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::Conflict {
            entity,
            constraint,
            message: message.into(),
        }
    }

    /// Construct a not-found error.
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Whether this error is a conflict (uniqueness or protected delete).
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    /// Whether this error is a not-found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_names_entity_and_field() {
        let err = RegistryError::validation("dossier", "registry_number", "must not be empty");
        let rendered = err.to_string();
        assert!(rendered.contains("dossier.registry_number"), "got: {rendered}");
        assert!(rendered.contains("must not be empty"));
    }

    #[test]
    fn test_dangling_display_names_target() {
        let err = RegistryError::dangling("dossier", "court", "court:123");
        assert!(err.to_string().contains("dossier.court -> court:123"));
    }

    #[test]
    fn test_conflict_predicate() {
        let err = RegistryError::conflict("calendar", "(date, court, magistrate)", "slot taken");
        assert!(err.is_conflict());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found_display() {
        let err = RegistryError::not_found("hearing", "hearing:42");
        assert!(err.is_not_found());
        assert!(err.to_string().contains("hearing not found"));
    }
}
