//! Person table mapping over the generic record repository.

use crate::model::person::{Person, PersonDraft};
use crate::model::EntityKind;
use crate::repo::record_repo::{int_value, text_value, Record, RepoResult, SqliteRecordRepository};
use rusqlite::types::Value;
use rusqlite::Row;

/// SQLite-backed person repository.
pub type SqlitePersonRepository<'conn> = SqliteRecordRepository<'conn, Person>;

impl Record for Person {
    type Draft = PersonDraft;

    const KIND: EntityKind = EntityKind::Person;
    const TABLE: &'static str = "people";
    const COLUMNS: &'static [&'static str] =
        &["first_name", "last_name", "age", "email", "role", "phone"];

    fn id(&self) -> i64 {
        self.id
    }

    fn draft_values(draft: &PersonDraft) -> Vec<Value> {
        vec![
            text_value(draft.first_name.as_deref()),
            text_value(draft.last_name.as_deref()),
            int_value(draft.age),
            text_value(draft.email.as_deref()),
            text_value(draft.role.as_deref()),
            text_value(draft.phone.as_deref()),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Person {
            id: row.get("id")?,
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
            age: row.get("age")?,
            email: row.get("email")?,
            role: row.get("role")?,
            phone: row.get("phone")?,
        })
    }
}
