//! SQLite-backed ticket store implementation.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use super::{CreateTicketRequest, RoundId, StoreError, Ticket, TicketFilter, TicketStore};

const TICKET_COLUMNS: &str = "id, round_id, numbers, created_at";

/// SQLite-backed ticket store.
pub struct SqliteTicketStore {
    conn: Mutex<Connection>,
}

impl SqliteTicketStore {
    /// Create a new SQLite ticket store, creating the database file and tables if needed.
    pub fn new(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|e| StoreError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory SQLite ticket store (useful for testing).
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn =
            Connection::open_in_memory().map_err(|e| StoreError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), StoreError> {
        // (round_id, numbers) is indexed but not unique.
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS tickets (
                id TEXT PRIMARY KEY,
                round_id INTEGER NOT NULL,
                numbers TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_tickets_round_numbers ON tickets(round_id, numbers);
            "#,
        )
        .map_err(|e| StoreError::Database(e.to_string()))
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Database("connection lock poisoned".to_string()))
    }

    fn build_where_clause(filter: &TicketFilter) -> (String, Vec<Box<dyn rusqlite::ToSql>>) {
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        let where_clause = match filter.round_id {
            Some(round_id) => {
                params.push(Box::new(round_id));
                "WHERE round_id = ?".to_string()
            }
            None => String::new(),
        };

        (where_clause, params)
    }

    fn row_to_ticket(row: &rusqlite::Row) -> rusqlite::Result<Ticket> {
        let id: String = row.get(0)?;
        let round_id: RoundId = row.get(1)?;
        let numbers: String = row.get(2)?;
        let created_at_str: String = row.get(3)?;

        let created_at = DateTime::parse_from_rfc3339(&created_at_str)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
            })?;

        Ok(Ticket {
            id,
            round_id,
            numbers,
            created_at,
        })
    }
}

impl TicketStore for SqliteTicketStore {
    fn create(&self, request: CreateTicketRequest) -> Result<Ticket, StoreError> {
        let conn = self.conn()?;

        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now();

        conn.execute(
            "INSERT INTO tickets (id, round_id, numbers, created_at) VALUES (?, ?, ?, ?)",
            params![id, request.round_id, request.numbers, now.to_rfc3339()],
        )
        .map_err(|e| StoreError::Database(e.to_string()))?;

        debug!(ticket_id = %id, round_id = request.round_id, "Ticket row inserted");

        Ok(Ticket {
            id,
            round_id: request.round_id,
            numbers: request.numbers,
            created_at: now,
        })
    }

    fn find_by_round_and_numbers(
        &self,
        round_id: RoundId,
        numbers: &str,
    ) -> Result<Option<Ticket>, StoreError> {
        let conn = self.conn()?;

        let sql = format!(
            "SELECT {} FROM tickets WHERE round_id = ? AND numbers = ? ORDER BY rowid ASC LIMIT 1",
            TICKET_COLUMNS
        );

        conn.query_row(&sql, params![round_id, numbers], Self::row_to_ticket)
            .optional()
            .map_err(|e| StoreError::Database(e.to_string()))
    }

    fn list(&self, filter: &TicketFilter) -> Result<Vec<Ticket>, StoreError> {
        let conn = self.conn()?;

        let (where_clause, params) = Self::build_where_clause(filter);

        let sql = format!(
            "SELECT {} FROM tickets {} ORDER BY rowid ASC LIMIT ? OFFSET ?",
            TICKET_COLUMNS, where_clause
        );

        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let mut all_params: Vec<Box<dyn rusqlite::ToSql>> = params;
        all_params.push(Box::new(filter.limit));
        all_params.push(Box::new(filter.offset));

        let param_refs: Vec<&dyn rusqlite::ToSql> = all_params.iter().map(|p| p.as_ref()).collect();

        let rows = stmt
            .query_map(param_refs.as_slice(), Self::row_to_ticket)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::Database(e.to_string()))
    }

    fn count(&self, filter: &TicketFilter) -> Result<i64, StoreError> {
        let conn = self.conn()?;

        let (where_clause, params) = Self::build_where_clause(filter);

        let sql = format!("SELECT COUNT(*) FROM tickets {}", where_clause);

        let param_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        conn.query_row(&sql, param_refs.as_slice(), |row| row.get(0))
            .map_err(|e| StoreError::Database(e.to_string()))
    }
}
