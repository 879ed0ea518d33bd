//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the record data access contract shared by all entity kinds.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes enforce draft validation before persistence.
//! - Repository APIs return semantic errors (`NotFound`, `Reference`) in
//!   addition to DB transport errors.

pub mod bid_repo;
pub mod person_repo;
pub mod record_repo;
pub mod seed_repo;
pub mod work_order_repo;
