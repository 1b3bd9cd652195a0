use rusqlite::{params, Connection};

use super::ScoreStore;
use crate::{completion::OnboardingRecord, error::ScoreResult};

/// An onboarding row as persisted (labels rendered, statuses as text).
#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingRow {
    pub account_id: String,
    pub profile_kind: String,
    pub entity_kind: Option<String>,
    pub completion_status: String,
    pub completion_score: i64,
    pub missing_fields: Vec<String>,
}

/// Conflict key (account_id, profile_kind); every derived column is
/// replaced on conflict — full replace, no partial merge.
pub(super) fn upsert(conn: &Connection, record: &OnboardingRecord) -> ScoreResult<()> {
    let labels: Vec<&str> = record.missing_fields.iter().map(|f| f.label()).collect();
    let missing_json = serde_json::to_string(&labels)?;

    conn.execute(
        "INSERT INTO onboarding
         (account_id, profile_kind, entity_kind, completion_status,
          completion_score, missing_fields)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(account_id, profile_kind) DO UPDATE SET
            entity_kind       = excluded.entity_kind,
            completion_status = excluded.completion_status,
            completion_score  = excluded.completion_score,
            missing_fields    = excluded.missing_fields",
        params![
            record.account_id,
            record.profile_kind.as_str(),
            record.entity_kind,
            record.completion_status.as_str(),
            record.completion_score,
            missing_json,
        ],
    )?;
    Ok(())
}

impl ScoreStore {
    pub fn get_onboarding(
        &self,
        account_id: &str,
        profile_kind: &str,
    ) -> ScoreResult<Option<OnboardingRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT account_id, profile_kind, entity_kind,
                    completion_status, completion_score, missing_fields
             FROM onboarding
             WHERE account_id = ?1 AND profile_kind = ?2",
        )?;
        let row = stmt
            .query_row(params![account_id, profile_kind], map_onboarding_row)
            .ok();
        match row {
            Some(r) => Ok(Some(finish_row(r)?)),
            None => Ok(None),
        }
    }

    pub fn all_onboarding(&self) -> ScoreResult<Vec<OnboardingRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT account_id, profile_kind, entity_kind,
                    completion_status, completion_score, missing_fields
             FROM onboarding
             ORDER BY account_id ASC, profile_kind ASC",
        )?;
        let raw = stmt
            .query_map([], map_onboarding_row)?
            .collect::<Result<Vec<_>, _>>()?;
        raw.into_iter().map(finish_row).collect()
    }

    pub fn onboarding_count(&self) -> ScoreResult<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM onboarding", [], |row| row.get(0))
            .map_err(Into::into)
    }

    /// completion_status → record count, used by the runner summary.
    pub fn status_breakdown(&self) -> ScoreResult<Vec<(String, i64)>> {
        let mut stmt = self.conn.prepare(
            "SELECT completion_status, COUNT(*)
             FROM onboarding
             GROUP BY completion_status
             ORDER BY completion_status ASC",
        )?;
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

type RawRow = (String, String, Option<String>, String, i64, String);

fn map_onboarding_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
    ))
}

fn finish_row(raw: RawRow) -> ScoreResult<OnboardingRow> {
    let (account_id, profile_kind, entity_kind, completion_status, completion_score, missing) =
        raw;
    Ok(OnboardingRow {
        account_id,
        profile_kind,
        entity_kind,
        completion_status,
        completion_score,
        missing_fields: serde_json::from_str(&missing)?,
    })
}
