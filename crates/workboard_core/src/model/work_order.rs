//! Work order record and draft.
//!
//! Dates are calendar dates without time zone and serialize as ISO-8601
//! `YYYY-MM-DD`.

use super::{require_text, EntityKind, RecordId, Validate, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stored work order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub price: Option<i64>,
    /// Person who ordered the work.
    pub customer_id: Option<RecordId>,
    /// Person assigned to carry the work out.
    pub executor_id: Option<RecordId>,
}

/// Caller-supplied work order fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrderDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub price: Option<i64>,
    pub customer_id: Option<RecordId>,
    pub executor_id: Option<RecordId>,
}

impl WorkOrderDraft {
    /// Creates a draft with only the required fields set.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            ..Self::default()
        }
    }
}

impl Validate for WorkOrderDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text(EntityKind::WorkOrder, "name", self.name.as_deref())?;
        require_text(EntityKind::WorkOrder, "description", self.description.as_deref())?;
        Ok(())
    }
}
