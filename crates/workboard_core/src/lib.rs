//! Core domain logic for Workboard.
//! This crate is the single source of truth for record invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;

pub use db::{Database, DbError};
pub use logging::{default_log_level, flush_logging, init_logging, logging_status};
pub use model::bid::{Bid, BidDraft};
pub use model::person::{Person, PersonDraft};
pub use model::work_order::{WorkOrder, WorkOrderDraft};
pub use model::{EntityKind, RecordId, Validate, ValidationError};
pub use repo::bid_repo::SqliteBidRepository;
pub use repo::person_repo::SqlitePersonRepository;
pub use repo::record_repo::{
    Record, RecordRepository, RepoError, RepoResult, SqliteRecordRepository,
};
pub use repo::seed_repo::{reset_and_seed, SeedSummary};
pub use repo::work_order_repo::SqliteWorkOrderRepository;
pub use seed::{load_seed_dir, seed_from_dir, SeedData, SeedError, SeedRecord};
pub use service::record_service::{BidService, PersonService, RecordService, WorkOrderService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
