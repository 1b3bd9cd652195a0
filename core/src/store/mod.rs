//! SQLite persistence layer — the reconciliation writer.
//!
//! RULE: Only the store talks to the database. The engine and scorers call
//! store methods; they never execute SQL directly.

use chrono::Utc;
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::{engine::RunOutput, error::ScoreResult, types::RunId};

mod commercial;
mod onboarding;

pub use commercial::CommercialScoreRow;
pub use onboarding::OnboardingRow;

pub struct ScoreStore {
    conn: Connection,
}

impl ScoreStore {
    pub fn open(path: &str) -> ScoreResult<Self> {
        let conn = Connection::open(path)?;
        // WAL mode only for real files (:memory: ignores it).
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> ScoreResult<Self> {
        let conn = Connection::open(":memory:")?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> ScoreResult<()> {
        self.conn
            .execute_batch(include_str!("../../../migrations/001_foundation.sql"))?;
        Ok(())
    }

    // ── Run persistence ────────────────────────────────────────────

    /// Upsert both derived record sets inside one transaction: a failure on
    /// either table leaves neither applied.
    pub fn persist_run_output(&self, output: &RunOutput) -> ScoreResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        for record in &output.onboarding {
            onboarding::upsert(&tx, record)?;
        }
        for record in &output.commercial {
            commercial::upsert(&tx, record)?;
        }
        tx.commit()?;
        Ok(())
    }

    // ── Import-run metadata ────────────────────────────────────────

    pub fn insert_import_run(&self, record: &ImportRunRecord) -> ScoreResult<()> {
        self.conn.execute(
            "INSERT INTO import_run
             (run_id, started_at, account_count, onboarding_count, commercial_count)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                record.run_id,
                record.started_at,
                record.account_count,
                record.onboarding_count,
                record.commercial_count,
            ],
        )?;
        Ok(())
    }

    pub fn import_run_count(&self) -> ScoreResult<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM import_run", [], |row| row.get(0))
            .map_err(Into::into)
    }
}

/// Metadata row written once per import run.
#[derive(Debug, Clone)]
pub struct ImportRunRecord {
    pub run_id: RunId,
    pub started_at: String,
    pub account_count: i64,
    pub onboarding_count: i64,
    pub commercial_count: i64,
}

impl ImportRunRecord {
    pub fn for_output(output: &RunOutput, account_count: usize) -> Self {
        Self {
            run_id: Uuid::new_v4().to_string(),
            started_at: Utc::now().to_rfc3339(),
            account_count: account_count as i64,
            onboarding_count: output.onboarding.len() as i64,
            commercial_count: output.commercial.len() as i64,
        }
    }
}
