//! Domain model for people, work orders and bids.
//!
//! # Responsibility
//! - Define the stored record shapes and their caller-supplied drafts.
//! - Own field-level validation that must pass before persistence.
//!
//! # Invariants
//! - Every record is identified by a `RecordId` unique within its entity kind.
//! - Drafts never carry identity; storage assigns it.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod bid;
pub mod person;
pub mod work_order;

/// Storage-assigned identity of a record.
pub type RecordId = i64;

/// The three entity kinds managed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Person,
    WorkOrder,
    Bid,
}

impl EntityKind {
    /// Stable lowercase name used in logs and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::WorkOrder => "work_order",
            Self::Bid => "bid",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-level validation failure for a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was absent or null.
    MissingField {
        entity: EntityKind,
        field: &'static str,
    },
    /// A required text field contained only whitespace.
    BlankField {
        entity: EntityKind,
        field: &'static str,
    },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field, .. } | Self::BlankField { field, .. } => field,
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { entity, field } => write!(f, "{entity}.{field} is required"),
            Self::BlankField { entity, field } => write!(f, "{entity}.{field} must not be blank"),
        }
    }
}

impl Error for ValidationError {}

/// Draft types validate themselves before any storage write.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

pub(crate) fn require_text(
    entity: EntityKind,
    field: &'static str,
    value: Option<&str>,
) -> Result<(), ValidationError> {
    match value {
        None => Err(ValidationError::MissingField { entity, field }),
        Some(text) if text.trim().is_empty() => Err(ValidationError::BlankField { entity, field }),
        Some(_) => Ok(()),
    }
}

pub(crate) fn require_ref(
    entity: EntityKind,
    field: &'static str,
    value: Option<RecordId>,
) -> Result<(), ValidationError> {
    value
        .map(|_| ())
        .ok_or(ValidationError::MissingField { entity, field })
}

#[cfg(test)]
mod tests {
    use super::{require_ref, require_text, EntityKind, ValidationError};

    #[test]
    fn require_text_distinguishes_missing_and_blank() {
        assert_eq!(
            require_text(EntityKind::Person, "first_name", None),
            Err(ValidationError::MissingField {
                entity: EntityKind::Person,
                field: "first_name",
            })
        );
        assert_eq!(
            require_text(EntityKind::Person, "first_name", Some("  \t")),
            Err(ValidationError::BlankField {
                entity: EntityKind::Person,
                field: "first_name",
            })
        );
        assert!(require_text(EntityKind::Person, "first_name", Some("Ann")).is_ok());
    }

    #[test]
    fn require_ref_rejects_missing_reference() {
        let err = require_ref(EntityKind::Bid, "order_id", None).unwrap_err();
        assert_eq!(err.field(), "order_id");
        assert_eq!(err.to_string(), "bid.order_id is required");
    }
}
