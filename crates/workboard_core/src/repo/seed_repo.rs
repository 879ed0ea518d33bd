//! Destructive reset-and-seed storage operation.
//!
//! # Responsibility
//! - Drop every stored person, work order and bid.
//! - Bulk insert a complete seed set in dependency order.
//!
//! # Invariants
//! - Runs in one transaction: on failure the previous state is kept.
//! - `AUTOINCREMENT` counters restart, so seeding twice yields identical ids.

use crate::model::bid::Bid;
use crate::model::person::Person;
use crate::model::work_order::WorkOrder;
use crate::repo::record_repo::{Record, RecordRepository, RepoResult, SqliteRecordRepository};
use crate::seed::{SeedData, SeedRecord};
use rusqlite::Connection;

/// Row counts inserted by one seed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub people: usize,
    pub work_orders: usize,
    pub bids: usize,
}

/// Wipes all records and inserts `seed` in a single transaction.
pub fn reset_and_seed(conn: &mut Connection, seed: &SeedData) -> RepoResult<SeedSummary> {
    let tx = conn.transaction()?;

    // Children first so foreign keys never dangle mid-reset.
    tx.execute_batch(&format!(
        "DELETE FROM {bids};
         DELETE FROM {orders};
         DELETE FROM {people};
         DELETE FROM sqlite_sequence WHERE name IN ('{bids}', '{orders}', '{people}');",
        bids = Bid::TABLE,
        orders = WorkOrder::TABLE,
        people = Person::TABLE,
    ))?;

    let summary = SeedSummary {
        people: insert_all::<Person>(&tx, &seed.people)?,
        work_orders: insert_all::<WorkOrder>(&tx, &seed.work_orders)?,
        bids: insert_all::<Bid>(&tx, &seed.bids)?,
    };

    tx.commit()?;
    Ok(summary)
}

fn insert_all<T: Record>(conn: &Connection, rows: &[SeedRecord<T::Draft>]) -> RepoResult<usize> {
    let repo = SqliteRecordRepository::<T>::new(conn);
    for row in rows {
        repo.insert(row.id, &row.draft)?;
    }
    Ok(rows.len())
}
