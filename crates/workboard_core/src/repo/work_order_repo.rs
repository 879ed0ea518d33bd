//! Work order table mapping over the generic record repository.
//!
//! Dates are stored as ISO `YYYY-MM-DD` text.

use crate::model::work_order::{WorkOrder, WorkOrderDraft};
use crate::model::EntityKind;
use crate::repo::record_repo::{
    date_value, int_value, parse_date_column, text_value, Record, RepoResult,
    SqliteRecordRepository,
};
use rusqlite::types::Value;
use rusqlite::Row;

/// SQLite-backed work order repository.
pub type SqliteWorkOrderRepository<'conn> = SqliteRecordRepository<'conn, WorkOrder>;

impl Record for WorkOrder {
    type Draft = WorkOrderDraft;

    const KIND: EntityKind = EntityKind::WorkOrder;
    const TABLE: &'static str = "work_orders";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "description",
        "start_date",
        "end_date",
        "address",
        "price",
        "customer_id",
        "executor_id",
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn draft_values(draft: &WorkOrderDraft) -> Vec<Value> {
        vec![
            text_value(draft.name.as_deref()),
            text_value(draft.description.as_deref()),
            date_value(draft.start_date),
            date_value(draft.end_date),
            text_value(draft.address.as_deref()),
            int_value(draft.price),
            int_value(draft.customer_id),
            int_value(draft.executor_id),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(WorkOrder {
            id: row.get("id")?,
            name: row.get("name")?,
            description: row.get("description")?,
            start_date: parse_date_column(row, Self::TABLE, "start_date")?,
            end_date: parse_date_column(row, Self::TABLE, "end_date")?,
            address: row.get("address")?,
            price: row.get("price")?,
            customer_id: row.get("customer_id")?,
            executor_id: row.get("executor_id")?,
        })
    }
}
