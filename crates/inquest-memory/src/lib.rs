//! Inquest Memory Layer
//!
//! Append-only persistence for completed run summaries, implementing the
//! [`MemorySink`] trait from `inquest-domain`. The controller only ever
//! appends; reads serve the CLI's history view and optional query context.
//!
//! # Implementations
//!
//! - `SqliteMemory`: durable storage in a local SQLite database
//! - `InMemorySink`: ephemeral storage for tests and one-shot runs
//!
//! # Examples
//!
//! ```no_run
//! use inquest_memory::SqliteMemory;
//!
//! let memory = SqliteMemory::new("inquest.db").unwrap();
//! assert!(memory.recent(10).unwrap().is_empty());
//! ```

#![warn(missing_docs)]

use inquest_domain::traits::MemorySink;
use inquest_domain::RunSummary;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during memory operations
#[derive(Error, Debug)]
pub enum MemoryError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Filesystem error preparing the database location
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored row could not be mapped back to a summary
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// SQLite-backed run memory
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own
/// SqliteMemory instance.
pub struct SqliteMemory {
    conn: Connection,
}

impl SqliteMemory {
    /// Open (or create) a run memory at the given database path
    ///
    /// Missing parent directories are created, so a fresh install can open
    /// its default database on the first run. Use `:memory:` for an
    /// in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use inquest_memory::SqliteMemory;
    ///
    /// let memory = SqliteMemory::new("inquest.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, MemoryError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        let memory = Self { conn };
        memory.initialize_schema()?;
        Ok(memory)
    }

    fn initialize_schema(&self) -> Result<(), MemoryError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// The most recent runs, newest first
    pub fn recent(&self, limit: usize) -> Result<Vec<RunSummary>, MemoryError> {
        let mut stmt = self.conn.prepare(
            "SELECT run_id, query, report, quality, claims_count, supported_count, \
                    sources_count, attempts_count, created_at \
             FROM runs ORDER BY created_at DESC, run_id DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit as i64], row_to_summary)?;
        let mut summaries = Vec::new();
        for row in rows {
            summaries.push(row?);
        }
        Ok(summaries)
    }

    /// Look up one run by its UUID string
    pub fn find(&self, run_id: &str) -> Result<Option<RunSummary>, MemoryError> {
        let summary = self
            .conn
            .query_row(
                "SELECT run_id, query, report, quality, claims_count, supported_count, \
                        sources_count, attempts_count, created_at \
                 FROM runs WHERE run_id = ?1",
                params![run_id],
                row_to_summary,
            )
            .optional()?;
        Ok(summary)
    }

    /// Total number of recorded runs
    pub fn count(&self) -> Result<usize, MemoryError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM runs", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn row_to_summary(row: &rusqlite::Row<'_>) -> rusqlite::Result<RunSummary> {
    Ok(RunSummary {
        run_id: row.get(0)?,
        query: row.get(1)?,
        report: row.get(2)?,
        quality: row.get(3)?,
        claims_count: row.get::<_, i64>(4)? as usize,
        supported_count: row.get::<_, i64>(5)? as usize,
        sources_count: row.get::<_, i64>(6)? as usize,
        attempts_count: row.get::<_, i64>(7)? as usize,
        created_at: row.get::<_, i64>(8)? as u64,
    })
}

impl MemorySink for SqliteMemory {
    type Error = MemoryError;

    fn record(&mut self, summary: &RunSummary) -> Result<(), Self::Error> {
        self.conn.execute(
            "INSERT INTO runs (run_id, query, report, quality, claims_count, \
                               supported_count, sources_count, attempts_count, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                summary.run_id,
                summary.query,
                summary.report,
                summary.quality,
                summary.claims_count as i64,
                summary.supported_count as i64,
                summary.sources_count as i64,
                summary.attempts_count as i64,
                summary.created_at as i64,
            ],
        )?;
        Ok(())
    }
}

/// Ephemeral run memory
///
/// Holds summaries in insertion order. Used for one-shot runs where nothing
/// should touch the filesystem.
#[derive(Debug, Clone, Default)]
pub struct InMemorySink {
    summaries: Vec<RunSummary>,
}

impl InMemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded summaries, oldest first
    pub fn summaries(&self) -> &[RunSummary] {
        &self.summaries
    }
}

impl MemorySink for InMemorySink {
    type Error = MemoryError;

    fn record(&mut self, summary: &RunSummary) -> Result<(), Self::Error> {
        self.summaries.push(summary.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(run_id: &str, created_at: u64) -> RunSummary {
        RunSummary {
            run_id: run_id.to_string(),
            query: "test query".to_string(),
            report: "final report text".to_string(),
            quality: 0.82,
            claims_count: 4,
            supported_count: 3,
            sources_count: 5,
            attempts_count: 4,
            created_at,
        }
    }

    #[test]
    fn test_record_and_find() {
        let mut memory = SqliteMemory::new(":memory:").unwrap();
        memory.record(&summary("run-1", 100)).unwrap();

        let found = memory.find("run-1").unwrap().unwrap();
        assert_eq!(found, summary("run-1", 100));
        assert!(memory.find("missing").unwrap().is_none());
    }

    #[test]
    fn test_recent_orders_newest_first() {
        let mut memory = SqliteMemory::new(":memory:").unwrap();
        memory.record(&summary("run-1", 100)).unwrap();
        memory.record(&summary("run-2", 200)).unwrap();
        memory.record(&summary("run-3", 300)).unwrap();

        let recent = memory.recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].run_id, "run-3");
        assert_eq!(recent[1].run_id, "run-2");
    }

    #[test]
    fn test_count() {
        let mut memory = SqliteMemory::new(":memory:").unwrap();
        assert_eq!(memory.count().unwrap(), 0);
        memory.record(&summary("run-1", 100)).unwrap();
        assert_eq!(memory.count().unwrap(), 1);
    }

    #[test]
    fn test_duplicate_run_id_rejected() {
        let mut memory = SqliteMemory::new(":memory:").unwrap();
        memory.record(&summary("run-1", 100)).unwrap();
        assert!(memory.record(&summary("run-1", 100)).is_err());
    }

    #[test]
    fn test_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh").join("runs.db");

        let mut memory = SqliteMemory::new(&path).unwrap();
        memory.record(&summary("run-1", 100)).unwrap();
        assert_eq!(memory.count().unwrap(), 1);
        assert!(path.exists());
    }

    #[test]
    fn test_persistence_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runs.db");

        {
            let mut memory = SqliteMemory::new(&path).unwrap();
            memory.record(&summary("run-1", 100)).unwrap();
        }

        let memory = SqliteMemory::new(&path).unwrap();
        assert_eq!(memory.count().unwrap(), 1);
        assert_eq!(memory.find("run-1").unwrap().unwrap().query, "test query");
    }

    #[test]
    fn test_in_memory_sink_keeps_order() {
        let mut sink = InMemorySink::new();
        sink.record(&summary("run-1", 100)).unwrap();
        sink.record(&summary("run-2", 200)).unwrap();

        assert_eq!(sink.summaries().len(), 2);
        assert_eq!(sink.summaries()[0].run_id, "run-1");
    }
}
