use rusqlite::{params, Connection};

use super::ScoreStore;
use crate::{commercial::CommercialScoreRecord, error::ScoreResult};

/// A commercial score row as persisted (tier rendered as text).
#[derive(Debug, Clone, PartialEq)]
pub struct CommercialScoreRow {
    pub athlete_id: String,
    pub account_id: String,
    pub p1_performance: i64,
    pub p2_narrative: i64,
    pub p3_maturity: i64,
    pub p4_activation: i64,
    pub p5_fit: i64,
    pub total_score: i64,
    pub tier: String,
    pub notes: Option<String>,
    pub updated_by: Option<String>,
}

/// Conflict key athlete_id; every derived column is replaced on conflict.
pub(super) fn upsert(conn: &Connection, record: &CommercialScoreRecord) -> ScoreResult<()> {
    conn.execute(
        "INSERT INTO athlete_commercial_score
         (athlete_id, account_id, p1_performance, p2_narrative, p3_maturity,
          p4_activation, p5_fit, total_score, tier, notes, updated_by)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
         ON CONFLICT(athlete_id) DO UPDATE SET
            account_id     = excluded.account_id,
            p1_performance = excluded.p1_performance,
            p2_narrative   = excluded.p2_narrative,
            p3_maturity    = excluded.p3_maturity,
            p4_activation  = excluded.p4_activation,
            p5_fit         = excluded.p5_fit,
            total_score    = excluded.total_score,
            tier           = excluded.tier,
            notes          = excluded.notes,
            updated_by     = excluded.updated_by",
        params![
            record.athlete_id,
            record.account_id,
            record.p1_performance,
            record.p2_narrative,
            record.p3_maturity,
            record.p4_activation,
            record.p5_fit,
            record.total_score,
            record.tier.as_str(),
            record.notes,
            record.updated_by,
        ],
    )?;
    Ok(())
}

impl ScoreStore {
    pub fn get_commercial_score(
        &self,
        athlete_id: &str,
    ) -> ScoreResult<Option<CommercialScoreRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT athlete_id, account_id, p1_performance, p2_narrative,
                    p3_maturity, p4_activation, p5_fit, total_score, tier,
                    notes, updated_by
             FROM athlete_commercial_score
             WHERE athlete_id = ?1",
        )?;
        let row = stmt
            .query_row(params![athlete_id], map_commercial_row)
            .ok();
        Ok(row)
    }

    pub fn all_commercial_scores(&self) -> ScoreResult<Vec<CommercialScoreRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT athlete_id, account_id, p1_performance, p2_narrative,
                    p3_maturity, p4_activation, p5_fit, total_score, tier,
                    notes, updated_by
             FROM athlete_commercial_score
             ORDER BY athlete_id ASC",
        )?;
        let rows = stmt
            .query_map([], map_commercial_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn commercial_score_count(&self) -> ScoreResult<i64> {
        self.conn
            .query_row(
                "SELECT COUNT(*) FROM athlete_commercial_score",
                [],
                |row| row.get(0),
            )
            .map_err(Into::into)
    }

    /// tier → record count, used by the runner summary.
    pub fn tier_breakdown(&self) -> ScoreResult<Vec<(String, i64)>> {
        let mut stmt = self.conn.prepare(
            "SELECT tier, COUNT(*)
             FROM athlete_commercial_score
             GROUP BY tier
             ORDER BY tier ASC",
        )?;
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

fn map_commercial_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<CommercialScoreRow> {
    Ok(CommercialScoreRow {
        athlete_id: row.get(0)?,
        account_id: row.get(1)?,
        p1_performance: row.get(2)?,
        p2_narrative: row.get(3)?,
        p3_maturity: row.get(4)?,
        p4_activation: row.get(5)?,
        p5_fit: row.get(6)?,
        total_score: row.get(7)?,
        tier: row.get(8)?,
        notes: row.get(9)?,
        updated_by: row.get(10)?,
    })
}
