//! SQLite store backend for SQL Practice.
//!
//! Every operation opens its own connection and drops it before returning,
//! so nothing holds the database file between user actions.

use std::{collections::HashMap, path::PathBuf};

use rusqlite::{params, types::ValueRef, Connection, OpenFlags};
use sqlpractice_core::{
    date_to_str, ColumnInfo, DataValue, ResultSet, StoreBackend, StoreError, SEED_ORDERS,
    SEED_USERS,
};

const SCHEMA: &str = "
    DROP TABLE IF EXISTS orders;
    DROP TABLE IF EXISTS users;

    CREATE TABLE users(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT,
        city TEXT
    );

    CREATE TABLE orders(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL,
        amount REAL NOT NULL,
        status TEXT NOT NULL,
        created_at TEXT NOT NULL,
        FOREIGN KEY (user_id) REFERENCES users(id)
    );
";

pub struct SqliteStore {
    path: PathBuf,
}

fn unavailable(e: rusqlite::Error) -> StoreError {
    StoreError::Unavailable(e.to_string())
}

/// Keeps SQLite's own text; rusqlite's `Display` appends the SQL and offset.
fn engine(e: rusqlite::Error) -> StoreError {
    match e {
        rusqlite::Error::SqlInputError { msg, .. } => StoreError::Engine(msg),
        rusqlite::Error::SqliteFailure(_, Some(msg)) => StoreError::Engine(msg),
        other => StoreError::Engine(other.to_string()),
    }
}

fn to_data_value(value: ValueRef<'_>) -> DataValue {
    match value {
        ValueRef::Null => DataValue::Null,
        ValueRef::Integer(i) => DataValue::Int(i),
        ValueRef::Real(r) => DataValue::Real(r),
        ValueRef::Text(t) => DataValue::Text(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => DataValue::Blob(b.to_vec()),
    }
}

impl SqliteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        let conn = Connection::open(&self.path).map_err(unavailable)?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")
            .map_err(unavailable)?;
        Ok(conn)
    }

    /// Learner queries only ever see a read-only handle, so text that slips
    /// past the gate still cannot change the store.
    fn connect_read_only(&self) -> Result<Connection, StoreError> {
        Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(unavailable)
    }
}

impl StoreBackend for SqliteStore {
    fn ensure_initialized(&self) -> Result<bool, StoreError> {
        if self.path.exists() {
            tracing::debug!(path = %self.path.display(), "Practice store already present");
            return Ok(false);
        }
        self.reset()?;
        Ok(true)
    }

    fn reset(&self) -> Result<(), StoreError> {
        let mut conn = self.connect()?;
        let tx = conn.transaction().map_err(unavailable)?;

        tx.execute_batch(SCHEMA).map_err(unavailable)?;

        {
            let mut insert = tx
                .prepare("INSERT INTO users (name, email, city) VALUES (?1, ?2, ?3)")
                .map_err(unavailable)?;
            for user in SEED_USERS {
                insert
                    .execute(params![user.name, user.email, user.city])
                    .map_err(unavailable)?;
            }
        }

        let ids: HashMap<String, i64> = {
            let mut stmt = tx
                .prepare("SELECT id, name FROM users")
                .map_err(unavailable)?;
            let rows = stmt
                .query_map([], |row| Ok((row.get::<_, String>(1)?, row.get::<_, i64>(0)?)))
                .map_err(unavailable)?;
            rows.collect::<Result<_, _>>().map_err(unavailable)?
        };

        {
            let mut insert = tx
                .prepare(
                    "INSERT INTO orders (user_id, amount, status, created_at)
                     VALUES (?1, ?2, ?3, ?4)",
                )
                .map_err(unavailable)?;
            for order in SEED_ORDERS {
                let user_id = ids.get(order.owner).ok_or_else(|| {
                    StoreError::Unavailable(format!("seed owner {} was not inserted", order.owner))
                })?;
                insert
                    .execute(params![
                        user_id,
                        order.amount,
                        order.status,
                        date_to_str(order.created_at)
                    ])
                    .map_err(unavailable)?;
            }
        }

        tx.commit().map_err(unavailable)?;

        tracing::info!(
            path = %self.path.display(),
            users = SEED_USERS.len(),
            orders = SEED_ORDERS.len(),
            "Practice store reset"
        );
        Ok(())
    }

    fn execute(&self, query: &str) -> Result<ResultSet, StoreError> {
        let conn = self.connect_read_only()?;
        let mut stmt = conn.prepare(query).map_err(engine)?;

        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();
        let width = columns.len();

        let mut rows = stmt.query([]).map_err(engine)?;
        let mut result = Vec::new();
        while let Some(row) = rows.next().map_err(engine)? {
            let mut values = Vec::with_capacity(width);
            for idx in 0..width {
                values.push(to_data_value(row.get_ref(idx).map_err(engine)?));
            }
            result.push(values);
        }

        tracing::debug!(rows = result.len(), "Query executed");
        Ok(ResultSet {
            columns,
            rows: result,
        })
    }

    fn describe(&self, table: &str) -> Result<Vec<ColumnInfo>, StoreError> {
        let conn = self.connect_read_only()?;
        let mut stmt = conn
            .prepare("SELECT name, type, \"notnull\", pk FROM pragma_table_info(?1) ORDER BY cid")
            .map_err(unavailable)?;

        let columns = stmt
            .query_map(params![table], |row| {
                Ok(ColumnInfo {
                    name: row.get(0)?,
                    declared_type: row.get(1)?,
                    not_null: row.get::<_, i64>(2)? != 0,
                    primary_key: row.get::<_, i64>(3)? != 0,
                })
            })
            .map_err(unavailable)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(unavailable)?;

        if columns.is_empty() {
            return Err(StoreError::TableNotFound(table.to_string()));
        }
        Ok(columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_store() -> (tempfile::TempDir, SqliteStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStore::new(dir.path().join("learn_sql.db"));
        (dir, store)
    }

    fn count(store: &SqliteStore, table: &str) -> i64 {
        let rs = store
            .execute(&format!("SELECT COUNT(*) AS n FROM {}", table))
            .unwrap();
        rs.value(0, "n").and_then(DataValue::as_i64).unwrap()
    }

    #[test]
    fn test_reset_seeds_both_tables() {
        let (_dir, store) = fresh_store();
        store.reset().unwrap();

        assert_eq!(count(&store, "users"), 4);
        assert_eq!(count(&store, "orders"), 7);
    }

    #[test]
    fn test_reset_discards_previous_contents() {
        let (_dir, store) = fresh_store();
        store.reset().unwrap();

        let conn = store.connect().unwrap();
        conn.execute(
            "INSERT INTO users (name, email, city) VALUES ('Extra', NULL, NULL)",
            [],
        )
        .unwrap();
        drop(conn);
        assert_eq!(count(&store, "users"), 5);

        store.reset().unwrap();
        assert_eq!(count(&store, "users"), 4);
        let rs = store.execute("SELECT MAX(id) AS max_id FROM users").unwrap();
        assert_eq!(rs.value(0, "max_id"), Some(&DataValue::Int(4)));
    }

    #[test]
    fn test_ensure_initialized_only_seeds_once() {
        let (_dir, store) = fresh_store();

        assert!(store.ensure_initialized().unwrap());
        assert!(!store.ensure_initialized().unwrap());
        assert_eq!(count(&store, "users"), 4);
        assert_eq!(count(&store, "orders"), 7);
    }

    #[test]
    fn test_orders_reference_existing_users() {
        let (_dir, store) = fresh_store();
        store.reset().unwrap();

        let rs = store
            .execute(
                "SELECT COUNT(*) AS orphans
                 FROM orders o LEFT JOIN users u ON u.id = o.user_id
                 WHERE u.id IS NULL",
            )
            .unwrap();
        assert_eq!(rs.value(0, "orphans"), Some(&DataValue::Int(0)));
    }

    #[test]
    fn test_execute_preserves_column_order() {
        let (_dir, store) = fresh_store();
        store.reset().unwrap();

        let rs = store
            .execute("SELECT city, name, id FROM users ORDER BY id")
            .unwrap();
        assert_eq!(rs.columns, vec!["city", "name", "id"]);
        assert_eq!(rs.rows[0][0], DataValue::Text("Goa".into()));
        assert_eq!(rs.rows[3][1], DataValue::Text("Amit".into()));
    }

    #[test]
    fn test_syntax_error_is_sqlite_text_only() {
        let (_dir, store) = fresh_store();
        store.reset().unwrap();

        match store.execute("SELEC * FROM users") {
            Err(StoreError::Engine(msg)) => assert_eq!(msg, "near \"SELEC\": syntax error"),
            other => panic!("expected engine error, got {:?}", other),
        }
        match store.execute("SELECT total FROM orders") {
            Err(StoreError::Engine(msg)) => assert_eq!(msg, "no such column: total"),
            other => panic!("expected engine error, got {:?}", other),
        }
    }

    #[test]
    fn test_engine_error_carries_message() {
        let (_dir, store) = fresh_store();
        store.reset().unwrap();

        match store.execute("SELECT nope FROM users") {
            Err(StoreError::Engine(msg)) => assert!(msg.contains("nope"), "{}", msg),
            other => panic!("expected engine error, got {:?}", other),
        }
    }

    #[test]
    fn test_execute_cannot_write() {
        let (_dir, store) = fresh_store();
        store.reset().unwrap();

        assert!(matches!(
            store.execute("DELETE FROM users"),
            Err(StoreError::Engine(_))
        ));
        assert_eq!(count(&store, "users"), 4);
    }

    #[test]
    fn test_describe_reads_live_metadata() {
        let (_dir, store) = fresh_store();
        store.reset().unwrap();

        let cols = store.describe("orders").unwrap();
        let amount = cols.iter().find(|c| c.name == "amount").unwrap();
        assert_eq!(amount.declared_type, "REAL");
        assert!(amount.not_null);
        assert!(cols[0].primary_key);

        assert!(matches!(
            store.describe("payments"),
            Err(StoreError::TableNotFound(_))
        ));
    }

    #[test]
    fn test_missing_store_is_unavailable() {
        let (_dir, store) = fresh_store();

        assert!(matches!(store.describe("users"), Err(StoreError::Unavailable(_))));
        assert!(matches!(
            store.execute("SELECT 1"),
            Err(StoreError::Unavailable(_))
        ));
    }

    #[test]
    fn test_reset_in_missing_directory_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStore::new(dir.path().join("no-such-dir").join("learn_sql.db"));

        assert!(matches!(store.reset(), Err(StoreError::Unavailable(_))));
    }
}
