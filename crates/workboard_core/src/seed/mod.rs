//! Startup seed loader.
//!
//! # Responsibility
//! - Read the people, work order and bid collections from a data directory.
//! - Convert seed dates from `MM/DD/YYYY` into calendar dates.
//! - Hand the typed collections to `reset_and_seed`.
//!
//! # Invariants
//! - Any missing file, malformed JSON or bad date fails the whole load.
//! - Nothing is written to storage until all three files parse.

use crate::model::bid::BidDraft;
use crate::model::person::PersonDraft;
use crate::model::work_order::WorkOrderDraft;
use crate::model::RecordId;
use crate::repo::record_repo::RepoError;
use crate::repo::seed_repo::{reset_and_seed, SeedSummary};
use chrono::NaiveDate;
use log::{error, info};
use rusqlite::Connection;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub const PEOPLE_FILE: &str = "people.json";
pub const WORK_ORDERS_FILE: &str = "work_orders.json";
pub const BIDS_FILE: &str = "bids.json";

/// Date pattern used by seed files.
pub const SEED_DATE_FORMAT: &str = "%m/%d/%Y";

/// One seed row: optional explicit identity plus the record fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRecord<D> {
    pub id: Option<RecordId>,
    pub draft: D,
}

impl<D> SeedRecord<D> {
    pub fn new(id: Option<RecordId>, draft: D) -> Self {
        Self { id, draft }
    }
}

/// Fully typed seed collections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedData {
    pub people: Vec<SeedRecord<PersonDraft>>,
    pub work_orders: Vec<SeedRecord<WorkOrderDraft>>,
    pub bids: Vec<SeedRecord<BidDraft>>,
}

#[derive(Debug)]
pub enum SeedError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidDate {
        path: PathBuf,
        field: &'static str,
        value: String,
    },
    Store(RepoError),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read seed file `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "malformed seed file `{}`: {source}", path.display())
            }
            Self::InvalidDate { path, field, value } => write!(
                f,
                "invalid {field} `{value}` in `{}`; expected MM/DD/YYYY",
                path.display()
            ),
            Self::Store(err) => write!(f, "failed to store seed data: {err}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::InvalidDate { .. } => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<RepoError> for SeedError {
    fn from(value: RepoError) -> Self {
        Self::Store(value)
    }
}

#[derive(Deserialize)]
struct RawRow<D> {
    #[serde(default)]
    id: Option<RecordId>,
    #[serde(flatten)]
    draft: D,
}

#[derive(Deserialize)]
struct RawWorkOrder {
    #[serde(default)]
    id: Option<RecordId>,
    name: Option<String>,
    description: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    address: Option<String>,
    price: Option<i64>,
    customer_id: Option<RecordId>,
    executor_id: Option<RecordId>,
}

/// Reads and parses all three seed files from `dir`.
pub fn load_seed_dir(dir: impl AsRef<Path>) -> Result<SeedData, SeedError> {
    let dir = dir.as_ref();

    let people = read_rows::<PersonDraft>(&dir.join(PEOPLE_FILE))?;

    let orders_path = dir.join(WORK_ORDERS_FILE);
    let work_orders = read_json::<Vec<RawWorkOrder>>(&orders_path)?
        .into_iter()
        .map(|raw| convert_work_order(&orders_path, raw))
        .collect::<Result<Vec<_>, _>>()?;

    let bids = read_rows::<BidDraft>(&dir.join(BIDS_FILE))?;

    Ok(SeedData {
        people,
        work_orders,
        bids,
    })
}

/// Loads `dir` and replaces all stored records with its contents.
///
/// # Side effects
/// - Destroys every existing person, work order and bid.
/// - Emits `seed_load` logging events with counts and duration.
pub fn seed_from_dir(
    conn: &mut Connection,
    dir: impl AsRef<Path>,
) -> Result<SeedSummary, SeedError> {
    let started_at = Instant::now();
    info!("event=seed_load module=seed status=start");

    let result = load_seed_dir(dir)
        .and_then(|seed| reset_and_seed(conn, &seed).map_err(SeedError::from));
    match &result {
        Ok(summary) => info!(
            "event=seed_load module=seed status=ok duration_ms={} people={} work_orders={} bids={}",
            started_at.elapsed().as_millis(),
            summary.people,
            summary.work_orders,
            summary.bids
        ),
        Err(err) => error!(
            "event=seed_load module=seed status=error duration_ms={} error={}",
            started_at.elapsed().as_millis(),
            err
        ),
    }
    result
}

/// Parses a seed date in `MM/DD/YYYY` form.
pub fn parse_seed_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), SEED_DATE_FORMAT).ok()
}

fn read_rows<D: DeserializeOwned>(path: &Path) -> Result<Vec<SeedRecord<D>>, SeedError> {
    Ok(read_json::<Vec<RawRow<D>>>(path)?
        .into_iter()
        .map(|raw| SeedRecord::new(raw.id, raw.draft))
        .collect())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, SeedError> {
    let text = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn convert_work_order(
    path: &Path,
    raw: RawWorkOrder,
) -> Result<SeedRecord<WorkOrderDraft>, SeedError> {
    let draft = WorkOrderDraft {
        name: raw.name,
        description: raw.description,
        start_date: seed_date(path, "start_date", raw.start_date)?,
        end_date: seed_date(path, "end_date", raw.end_date)?,
        address: raw.address,
        price: raw.price,
        customer_id: raw.customer_id,
        executor_id: raw.executor_id,
    };
    Ok(SeedRecord::new(raw.id, draft))
}

fn seed_date(
    path: &Path,
    field: &'static str,
    value: Option<String>,
) -> Result<Option<NaiveDate>, SeedError> {
    match value {
        None => Ok(None),
        Some(text) => parse_seed_date(&text)
            .map(Some)
            .ok_or_else(|| SeedError::InvalidDate {
                path: path.to_path_buf(),
                field,
                value: text,
            }),
    }
}
