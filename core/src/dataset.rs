//! Dataset loader: raw tabular text → row records.
//!
//! Rules:
//!   - Header row required; a leading BOM on the first header is stripped.
//!   - Headers and values are trimmed.
//!   - A missing cell becomes an empty string, never an absent key.
//!   - A row that fails to parse is logged and skipped; the rest of the
//!     dataset is still processed.

use std::collections::HashMap;

use crate::error::ScoreResult;

/// One parsed row: normalized header → trimmed value.
pub type Row = HashMap<String, String>;

/// The thirteen logical datasets a snapshot is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    Accounts,
    AccountRoles,
    Athletes,
    Partners,
    Achievements,
    Activations,
    Causes,
    Education,
    Media,
    Partnerships,
    Ranking,
    Results,
    SocialActions,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 13] = [
        DatasetKind::Accounts,
        DatasetKind::AccountRoles,
        DatasetKind::Athletes,
        DatasetKind::Partners,
        DatasetKind::Achievements,
        DatasetKind::Activations,
        DatasetKind::Causes,
        DatasetKind::Education,
        DatasetKind::Media,
        DatasetKind::Partnerships,
        DatasetKind::Ranking,
        DatasetKind::Results,
        DatasetKind::SocialActions,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DatasetKind::Accounts => "accounts",
            DatasetKind::AccountRoles => "account_roles",
            DatasetKind::Athletes => "athletes",
            DatasetKind::Partners => "partners",
            DatasetKind::Achievements => "achievements",
            DatasetKind::Activations => "activations",
            DatasetKind::Causes => "causes",
            DatasetKind::Education => "education",
            DatasetKind::Media => "media",
            DatasetKind::Partnerships => "partnerships",
            DatasetKind::Ranking => "ranking",
            DatasetKind::Results => "results",
            DatasetKind::SocialActions => "social_actions",
        }
    }

    /// Accepted file names, in lookup order. The second form is the name the
    /// portal's table export produces.
    pub fn file_candidates(self) -> &'static [&'static str] {
        match self {
            DatasetKind::Accounts => &["accounts.csv", "profiles_rows.csv"],
            DatasetKind::AccountRoles => &["account_roles.csv", "user_roles_rows.csv"],
            DatasetKind::Athletes => &["athletes.csv", "athletes_rows.csv"],
            DatasetKind::Partners => &["partners.csv", "companies_rows.csv"],
            DatasetKind::Achievements => &["achievements.csv", "athlete_achievements_rows.csv"],
            DatasetKind::Activations => &["activations.csv", "athlete_activations_rows.csv"],
            DatasetKind::Causes => &["causes.csv", "athlete_causes_rows.csv"],
            DatasetKind::Education => &["education.csv", "athlete_education_rows.csv"],
            DatasetKind::Media => &["media.csv", "athlete_media_rows.csv"],
            DatasetKind::Partnerships => &["partnerships.csv", "athlete_partners_rows.csv"],
            DatasetKind::Ranking => &["ranking.csv", "athlete_ranking_rows.csv"],
            DatasetKind::Results => &["results.csv", "athlete_results_rows.csv"],
            DatasetKind::SocialActions => {
                &["social_actions.csv", "athlete_social_actions_rows.csv"]
            }
        }
    }
}

/// Parse one dataset. `name` is used only for log context.
pub fn parse_table(name: &str, text: &str) -> ScoreResult<Vec<Row>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (idx, record) in reader.into_records().enumerate() {
        let record = match record {
            Ok(r) => r,
            Err(err) => {
                // Recoverable: skip the malformed row, keep the dataset.
                log::warn!("{name}: skipping malformed row {}: {err}", idx + 2);
                continue;
            }
        };
        let mut row = Row::with_capacity(headers.len());
        for (i, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let value = record.get(i).unwrap_or("").trim().to_string();
            row.insert(header.clone(), value);
        }
        rows.push(row);
    }
    Ok(rows)
}
