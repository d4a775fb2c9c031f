//! Memo repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist reminder memos for a user within an organization.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `due_date` is stored as `YYYY-MM-DD`, `due_time` as `HH:MM`.
//! - Listing order is `due_date ASC, due_time ASC, id ASC`.

use crate::db::DbError;
use crate::model::memo::{Memo, MemoId, MemoValidationError, DUE_DATE_FORMAT, DUE_TIME_FORMAT};
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const MEMO_SELECT_SQL: &str = "SELECT
    id,
    user_id,
    organization_id,
    title,
    description,
    due_date,
    due_time,
    is_done
FROM memos";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for memo persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(MemoValidationError),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted memo data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<MemoValidationError> for RepoError {
    fn from(value: MemoValidationError) -> Self {
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

/// Memo persistence contract.
pub trait MemoRepository {
    fn create_memo(&self, memo: &Memo) -> RepoResult<MemoId>;
    fn get_memo(&self, id: MemoId) -> RepoResult<Option<Memo>>;
    fn list_memos(&self, user_id: &str, organization_id: &str) -> RepoResult<Vec<Memo>>;
}

impl<R: MemoRepository + ?Sized> MemoRepository for &R {
    fn create_memo(&self, memo: &Memo) -> RepoResult<MemoId> {
        (**self).create_memo(memo)
    }

    fn get_memo(&self, id: MemoId) -> RepoResult<Option<Memo>> {
        (**self).get_memo(id)
    }

    fn list_memos(&self, user_id: &str, organization_id: &str) -> RepoResult<Vec<Memo>> {
        (**self).list_memos(user_id, organization_id)
    }
}

/// SQLite-backed memo repository.
pub struct SqliteMemoRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMemoRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl MemoRepository for SqliteMemoRepository<'_> {
    fn create_memo(&self, memo: &Memo) -> RepoResult<MemoId> {
        memo.validate()?;

        self.conn.execute(
            "INSERT INTO memos (
                id,
                user_id,
                organization_id,
                title,
                description,
                due_date,
                due_time,
                is_done
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                memo.id.to_string(),
                memo.user_id.as_str(),
                memo.organization_id.as_str(),
                memo.title.as_str(),
                memo.description.as_deref(),
                memo.due_date_iso(),
                memo.due_time_hhmm(),
                i64::from(memo.is_done),
            ],
        )?;

        Ok(memo.id)
    }

    fn get_memo(&self, id: MemoId) -> RepoResult<Option<Memo>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MEMO_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_memo_row(row)?));
        }

        Ok(None)
    }

    fn list_memos(&self, user_id: &str, organization_id: &str) -> RepoResult<Vec<Memo>> {
        let mut stmt = self.conn.prepare(&format!(
            "{MEMO_SELECT_SQL}
             WHERE user_id = ?1 AND organization_id = ?2
             ORDER BY due_date ASC, due_time ASC, id ASC;"
        ))?;
        let mut rows = stmt.query(params![user_id, organization_id])?;
        let mut memos = Vec::new();

        while let Some(row) = rows.next()? {
            memos.push(parse_memo_row(row)?);
        }

        Ok(memos)
    }
}

fn parse_memo_row(row: &Row<'_>) -> RepoResult<Memo> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid `{id_text}` in memos.id")))?;

    let date_text: String = row.get("due_date")?;
    let due_date = NaiveDate::parse_from_str(&date_text, DUE_DATE_FORMAT).map_err(|_| {
        RepoError::InvalidData(format!("invalid date `{date_text}` in memos.due_date"))
    })?;

    let time_text: String = row.get("due_time")?;
    let due_time = NaiveTime::parse_from_str(&time_text, DUE_TIME_FORMAT).map_err(|_| {
        RepoError::InvalidData(format!("invalid time `{time_text}` in memos.due_time"))
    })?;

    let is_done = match row.get::<_, i64>("is_done")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid is_done value `{other}` in memos.is_done"
            )));
        }
    };

    let memo = Memo {
        id,
        user_id: row.get("user_id")?,
        organization_id: row.get("organization_id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        due_date,
        due_time,
        is_done,
    };
    memo.validate()?;
    Ok(memo)
}
