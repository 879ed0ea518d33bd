//! Bid table mapping over the generic record repository.

use crate::model::bid::{Bid, BidDraft};
use crate::model::EntityKind;
use crate::repo::record_repo::{int_value, Record, RepoResult, SqliteRecordRepository};
use rusqlite::types::Value;
use rusqlite::Row;

/// SQLite-backed bid repository.
pub type SqliteBidRepository<'conn> = SqliteRecordRepository<'conn, Bid>;

impl Record for Bid {
    type Draft = BidDraft;

    const KIND: EntityKind = EntityKind::Bid;
    const TABLE: &'static str = "bids";
    const COLUMNS: &'static [&'static str] = &["order_id", "executor_id"];

    fn id(&self) -> i64 {
        self.id
    }

    fn draft_values(draft: &BidDraft) -> Vec<Value> {
        vec![int_value(draft.order_id), int_value(draft.executor_id)]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Bid {
            id: row.get("id")?,
            order_id: row.get("order_id")?,
            executor_id: row.get("executor_id")?,
        })
    }
}
