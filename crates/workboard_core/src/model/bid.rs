//! Bid record and draft: one person's offer to execute one work order.

use super::{require_ref, EntityKind, RecordId, Validate, ValidationError};
use serde::{Deserialize, Serialize};

/// Stored bid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bid {
    pub id: RecordId,
    pub order_id: RecordId,
    pub executor_id: RecordId,
}

/// Caller-supplied bid fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidDraft {
    pub order_id: Option<RecordId>,
    pub executor_id: Option<RecordId>,
}

impl BidDraft {
    pub fn new(order_id: RecordId, executor_id: RecordId) -> Self {
        Self {
            order_id: Some(order_id),
            executor_id: Some(executor_id),
        }
    }
}

impl Validate for BidDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require_ref(EntityKind::Bid, "order_id", self.order_id)?;
        require_ref(EntityKind::Bid, "executor_id", self.executor_id)?;
        Ok(())
    }
}
