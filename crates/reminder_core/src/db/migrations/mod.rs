//! Memo schema upgrades, tracked through `PRAGMA user_version`.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::{Connection, Transaction};

struct MemoSchemaStep {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

const MEMO_SCHEMA_STEPS: &[MemoSchemaStep] = &[MemoSchemaStep {
    version: 1,
    name: "memos",
    sql: include_str!("0001_memos.sql"),
}];

/// Memo schema version this build writes.
pub fn latest_version() -> u32 {
    MEMO_SCHEMA_STEPS.last().map_or(0, |step| step.version)
}

/// Memo schema version recorded in the database file.
pub fn schema_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?)
}

/// Brings the memo schema up to [`latest_version`] in one transaction.
///
/// # Errors
/// - `UnsupportedSchemaVersion` when the file is ahead of this build.
/// - `Migration` naming the failing step; earlier steps are rolled back too.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let from = schema_version(conn)?;
    let latest = latest_version();

    if from > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: from,
            latest_supported: latest,
        });
    }
    if from == latest {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for step in MEMO_SCHEMA_STEPS.iter().filter(|step| step.version > from) {
        apply_step(&tx, step).map_err(|source| DbError::Migration {
            version: step.version,
            name: step.name,
            source,
        })?;
    }
    tx.commit()?;

    info!("event=db_migrate module=db status=ok from={from} to={latest}");
    Ok(())
}

fn apply_step(tx: &Transaction<'_>, step: &MemoSchemaStep) -> rusqlite::Result<()> {
    tx.execute_batch(step.sql)?;
    tx.pragma_update(None, "user_version", step.version)
}
