//! Record use-case service.
//!
//! # Responsibility
//! - Provide list/get/create/update/delete entry points per entity kind.
//! - Turn absent rows into `RepoError::NotFound` and read writes back.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - `update` is a full overwrite: optional fields missing from the draft
//!   are stored as NULL.
//! - Service layer remains storage-agnostic.

use crate::model::bid::Bid;
use crate::model::person::Person;
use crate::model::work_order::WorkOrder;
use crate::model::RecordId;
use crate::repo::bid_repo::SqliteBidRepository;
use crate::repo::person_repo::SqlitePersonRepository;
use crate::repo::record_repo::{Record, RecordRepository, RepoError, RepoResult};
use crate::repo::work_order_repo::SqliteWorkOrderRepository;
use log::{debug, info};
use std::marker::PhantomData;

pub type PersonService<'conn> = RecordService<Person, SqlitePersonRepository<'conn>>;
pub type WorkOrderService<'conn> = RecordService<WorkOrder, SqliteWorkOrderRepository<'conn>>;
pub type BidService<'conn> = RecordService<Bid, SqliteBidRepository<'conn>>;

/// Use-case service wrapper for one entity kind.
pub struct RecordService<T, R> {
    repo: R,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record, R: RecordRepository<T>> RecordService<T, R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            _record: PhantomData,
        }
    }

    /// Lists every record of this kind ordered by identity.
    pub fn list(&self) -> RepoResult<Vec<T>> {
        self.repo.list()
    }

    /// Gets one record, or `NotFound` when the id is unknown.
    pub fn get(&self, id: RecordId) -> RepoResult<T> {
        match self.repo.get(id)? {
            Some(record) => Ok(record),
            None => {
                debug!(
                    "event=record_get module=service status=not_found entity={} id={}",
                    T::KIND,
                    id
                );
                Err(RepoError::NotFound { kind: T::KIND, id })
            }
        }
    }

    /// Validates and stores a new record, returning it with its assigned id.
    pub fn create(&self, draft: &T::Draft) -> RepoResult<T> {
        let id = self.repo.insert(None, draft)?;
        info!(
            "event=record_create module=service status=ok entity={} id={}",
            T::KIND,
            id
        );
        self.read_back(id)
    }

    /// Replaces every field of an existing record.
    ///
    /// Returns repository-level not-found or validation errors unchanged.
    pub fn update(&self, id: RecordId, draft: &T::Draft) -> RepoResult<T> {
        self.repo.update(id, draft)?;
        info!(
            "event=record_update module=service status=ok entity={} id={}",
            T::KIND,
            id
        );
        self.read_back(id)
    }

    /// Hard-deletes a record.
    pub fn delete(&self, id: RecordId) -> RepoResult<()> {
        self.repo.delete(id)?;
        info!(
            "event=record_delete module=service status=ok entity={} id={}",
            T::KIND,
            id
        );
        Ok(())
    }

    fn read_back(&self, id: RecordId) -> RepoResult<T> {
        self.repo.get(id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("{} {id} not found in read-back", T::KIND))
        })
    }
}
