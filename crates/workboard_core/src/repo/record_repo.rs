//! Generic record repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide one CRUD contract shared by people, work orders and bids.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths call `Validate::validate()` before any SQL mutation.
//! - Updates overwrite every column; absent optional fields become NULL.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Foreign key violations surface as `RepoError::Reference`.

use crate::db::DbError;
use crate::model::{EntityKind, RecordId, Validate, ValidationError};
use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for record persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    Db(DbError),
    NotFound {
        kind: EntityKind,
        id: RecordId,
    },
    /// A write referenced a missing record, or a delete hit a record that is
    /// still referenced.
    Reference {
        kind: EntityKind,
        detail: &'static str,
    },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::Reference { kind, detail } => write!(f, "{kind} {detail}"),
            Self::InvalidData(message) => write!(f, "invalid persisted record data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound { .. } | Self::Reference { .. } | Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Table mapping for one entity kind.
///
/// `COLUMNS` lists every non-identity column in the order produced by
/// `draft_values`.
pub trait Record: Sized {
    type Draft: Validate;

    const KIND: EntityKind;
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> RecordId;
    fn draft_values(draft: &Self::Draft) -> Vec<Value>;
    fn from_row(row: &Row<'_>) -> RepoResult<Self>;
}

/// Repository interface for record CRUD operations.
pub trait RecordRepository<T: Record> {
    /// Stores a new record, assigning identity when `id` is `None`.
    fn insert(&self, id: Option<RecordId>, draft: &T::Draft) -> RepoResult<RecordId>;
    /// Replaces every field of an existing record.
    fn update(&self, id: RecordId, draft: &T::Draft) -> RepoResult<()>;
    fn get(&self, id: RecordId) -> RepoResult<Option<T>>;
    /// Lists all records ordered by identity.
    fn list(&self) -> RepoResult<Vec<T>>;
    fn delete(&self, id: RecordId) -> RepoResult<()>;
}

/// SQLite-backed record repository.
pub struct SqliteRecordRepository<'conn, T> {
    conn: &'conn Connection,
    _record: PhantomData<fn() -> T>,
}

impl<'conn, T: Record> SqliteRecordRepository<'conn, T> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            _record: PhantomData,
        }
    }
}

impl<T: Record> RecordRepository<T> for SqliteRecordRepository<'_, T> {
    fn insert(&self, id: Option<RecordId>, draft: &T::Draft) -> RepoResult<RecordId> {
        draft.validate()?;

        let placeholders = (1..=T::COLUMNS.len() + 1)
            .map(|index| format!("?{index}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {} (id, {}) VALUES ({placeholders});",
            T::TABLE,
            T::COLUMNS.join(", ")
        );

        let mut values = Vec::with_capacity(T::COLUMNS.len() + 1);
        values.push(id.map_or(Value::Null, Value::Integer));
        values.extend(T::draft_values(draft));

        self.conn
            .execute(&sql, params_from_iter(values))
            .map_err(|err| write_error::<T>(err, "references a record that does not exist"))?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update(&self, id: RecordId, draft: &T::Draft) -> RepoResult<()> {
        draft.validate()?;

        let assignments = T::COLUMNS
            .iter()
            .enumerate()
            .map(|(index, column)| format!("{column} = ?{}", index + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {} SET {assignments} WHERE id = ?{};",
            T::TABLE,
            T::COLUMNS.len() + 1
        );

        let mut values = T::draft_values(draft);
        values.push(Value::Integer(id));

        let changed = self
            .conn
            .execute(&sql, params_from_iter(values))
            .map_err(|err| write_error::<T>(err, "references a record that does not exist"))?;

        if changed == 0 {
            return Err(RepoError::NotFound { kind: T::KIND, id });
        }

        Ok(())
    }

    fn get(&self, id: RecordId) -> RepoResult<Option<T>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} WHERE id = ?1;", select_sql::<T>()))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(T::from_row(row)?));
        }

        Ok(None)
    }

    fn list(&self) -> RepoResult<Vec<T>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} ORDER BY id ASC;", select_sql::<T>()))?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            records.push(T::from_row(row)?);
        }

        Ok(records)
    }

    fn delete(&self, id: RecordId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute(&format!("DELETE FROM {} WHERE id = ?1;", T::TABLE), [id])
            .map_err(|err| write_error::<T>(err, "is still referenced by other records"))?;

        if changed == 0 {
            return Err(RepoError::NotFound { kind: T::KIND, id });
        }

        Ok(())
    }
}

fn select_sql<T: Record>() -> String {
    format!("SELECT id, {} FROM {}", T::COLUMNS.join(", "), T::TABLE)
}

fn write_error<T: Record>(err: rusqlite::Error, detail: &'static str) -> RepoError {
    if is_foreign_key_violation(&err) {
        return RepoError::Reference {
            kind: T::KIND,
            detail,
        };
    }
    err.into()
}

fn is_foreign_key_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(inner, _)
            if inner.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY
    )
}

pub(crate) fn text_value(value: Option<&str>) -> Value {
    value.map_or(Value::Null, |text| Value::Text(text.to_string()))
}

pub(crate) fn int_value(value: Option<i64>) -> Value {
    value.map_or(Value::Null, Value::Integer)
}

pub(crate) fn date_value(value: Option<NaiveDate>) -> Value {
    value.map_or(Value::Null, |date| {
        Value::Text(date.format(DATE_FORMAT).to_string())
    })
}

/// Reads an optional ISO date column, rejecting malformed text.
pub(crate) fn parse_date_column(
    row: &Row<'_>,
    table: &str,
    column: &str,
) -> RepoResult<Option<NaiveDate>> {
    match row.get::<_, Option<String>>(column)? {
        Some(text) => NaiveDate::parse_from_str(&text, DATE_FORMAT)
            .map(Some)
            .map_err(|_| {
                RepoError::InvalidData(format!("invalid date value `{text}` in {table}.{column}"))
            }),
        None => Ok(None),
    }
}
