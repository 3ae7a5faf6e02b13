//! Persistent string key-value store.

use crate::errors::AppResult;
use crate::models::StoreOp;
use rusqlite::{Connection, OptionalExtension, params};
use std::collections::BTreeMap;

pub trait KvStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;
    /// Remove every key, including ones this crate did not write.
    fn clear(&mut self) -> AppResult<()>;

    /// Replay a batch of writes. Stores that can should apply all or nothing.
    fn apply(&mut self, writes: &[StoreOp]) -> AppResult<()> {
        replay(self, writes)
    }
}

/// Replay the writes produced by a ledger commit as one batch.
pub fn apply_writes<S: KvStore + ?Sized>(store: &mut S, writes: &[StoreOp]) -> AppResult<()> {
    store.apply(writes)
}

fn replay<S: KvStore + ?Sized>(store: &mut S, writes: &[StoreOp]) -> AppResult<()> {
    for op in writes {
        match op {
            StoreOp::Set { key, value } => store.set(key, value)?,
            StoreOp::Remove { key } => store.remove(key)?,
            StoreOp::Clear => store.clear()?,
        }
    }
    Ok(())
}

/// Store backed by the `kv` table.
pub struct SqliteStore<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// All pairs, sorted by key.
    pub fn entries(&self) -> AppResult<Vec<(String, String)>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT key, value FROM kv ORDER BY key ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}

impl KvStore for SqliteStore<'_> {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT value FROM kv WHERE key = ?1")?;
        let value = stmt
            .query_row([key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(())
    }

    fn clear(&mut self) -> AppResult<()> {
        self.conn.execute("DELETE FROM kv", [])?;
        Ok(())
    }

    /// One transaction per batch: a failing write rolls back the earlier ones.
    fn apply(&mut self, writes: &[StoreOp]) -> AppResult<()> {
        let conn = self.conn;
        let tx = conn.unchecked_transaction()?;
        replay(self, writes)?;
        tx.commit()?;
        Ok(())
    }
}

/// In-memory store, handy for tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    map: BTreeMap<String, String>,
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.map.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> AppResult<()> {
        self.map.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::codec::parse_duration;
    use crate::core::ledger::{PeriodLedger, TOTAL_KEY, WEEKLY_KEY};
    use crate::db::migrate::run_pending_migrations;
    use crate::models::{Duration, FormInputs};

    fn open() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn sqlite_store_set_get_overwrite() {
        let conn = open();
        let mut store = SqliteStore::new(&conn);
        assert_eq!(store.get("a").unwrap(), None);

        store.set("a", "1").unwrap();
        store.set("a", "2").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("2"));

        store.remove("a").unwrap();
        assert_eq!(store.get("a").unwrap(), None);
    }

    #[test]
    fn clear_wipes_all_keys_but_keeps_log() {
        let conn = open();
        let mut store = SqliteStore::new(&conn);
        apply_writes(
            &mut store,
            &[StoreOp::set("x", 1), StoreOp::set("y", "two")],
        )
        .unwrap();
        assert_eq!(store.entries().unwrap().len(), 2);

        crate::db::log::ttlog(&conn, "test", "", "kept").unwrap();
        apply_writes(&mut store, &[StoreOp::Clear]).unwrap();
        assert!(store.entries().unwrap().is_empty());

        let logged: i64 = conn
            .query_row("SELECT COUNT(*) FROM log WHERE operation = 'test'", [], |r| {
                r.get(0)
            })
            .unwrap();
        assert_eq!(logged, 1);
    }

    #[test]
    fn failed_merge_write_leaves_store_untouched() {
        let conn = open();
        let mut store = SqliteStore::new(&conn);
        store.set(WEEKLY_KEY, "95").unwrap();

        conn.execute_batch(
            "CREATE TRIGGER block_weekly BEFORE UPDATE ON kv
             WHEN NEW.key = 'weeklyOvertimeMinutes'
             BEGIN SELECT RAISE(ABORT, 'weekly is read-only'); END;",
        )
        .unwrap();

        let ledger = PeriodLedger::new(parse_duration("17:25"));
        let before = PeriodLedger::load(&store).unwrap();
        let form = FormInputs {
            planned_end: parse_duration("17:25"),
            actual_end: parse_duration("17:25"),
        };
        let commit = ledger.merge(&before, &form);
        assert_eq!(commit.writes.len(), 2);

        assert!(apply_writes(&mut store, &commit.writes).is_err());

        // total write came first and must have been rolled back
        let after = PeriodLedger::load(&store).unwrap();
        assert_eq!(after.weekly_overtime, Duration::from_minutes(95));
        assert_eq!(after.total_overtime, Duration::ZERO);
        assert_eq!(store.get(TOTAL_KEY).unwrap(), None);
    }

    #[test]
    fn successful_batch_commits_every_write() {
        let conn = open();
        let mut store = SqliteStore::new(&conn);
        apply_writes(
            &mut store,
            &[StoreOp::set(TOTAL_KEY, 95), StoreOp::set(WEEKLY_KEY, 0)],
        )
        .unwrap();
        assert_eq!(store.get(TOTAL_KEY).unwrap().as_deref(), Some("95"));
        assert_eq!(store.get(WEEKLY_KEY).unwrap().as_deref(), Some("0"));
    }
}
